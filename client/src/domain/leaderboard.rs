//! Individual and squad leaderboards.

use std::cmp::Ordering;

/// Anything that can be ranked by points.
pub trait Ranked {
    /// Points used as the primary sort key, highest first.
    fn points(&self) -> u32;
    /// Tie-breaker, compared alphabetically.
    fn name(&self) -> &str;
}

/// One row on the individual leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub name: String,
    pub avatar: String,
    pub points: u32,
    pub reports: u32,
    pub badge: Option<String>,
    pub is_current_user: bool,
}

impl Ranked for LeaderboardEntry {
    fn points(&self) -> u32 {
        self.points
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// One row on the squad leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquadStanding {
    pub name: String,
    pub avatar: String,
    pub points: u32,
    pub members: u32,
    pub reports: u32,
    pub is_joined: bool,
}

impl Ranked for SquadStanding {
    fn points(&self) -> u32 {
        self.points
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A ranked row. Ranks start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Standing<'a, T> {
    pub rank: usize,
    pub entry: &'a T,
}

/// A leaderboard over any [`Ranked`] rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaderboard<T> {
    entries: Vec<T>,
}

impl<T: Ranked> Leaderboard<T> {
    /// Rank `entries` by points, ties broken by name.
    pub fn new(entries: Vec<T>) -> Self {
        Self { entries }
    }

    /// Rows by points, highest first; equal points are ordered by name.
    pub fn ranked(&self) -> Vec<Standing<'_, T>> {
        let mut rows: Vec<&T> = self.entries.iter().collect();
        rows.sort_by(|a, b| compare(*a, *b));
        rows.into_iter()
            .enumerate()
            .map(|(index, entry)| Standing {
                rank: index + 1,
                entry,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Leaderboard<LeaderboardEntry> {
    /// Demo individual leaderboard.
    pub fn demo_individuals() -> Self {
        Self::new(vec![
            person("Alice Johnson", "👩‍🦰", 3240, 28, Some("Eco Champion"), false),
            person("Bob Smith", "👨‍💼", 2890, 24, Some("Street Hero"), false),
            person("Carol Davis", "👩‍🎓", 2650, 22, Some("Safety Star"), false),
            person("David Wilson", "👨‍🔧", 2340, 19, None, false),
            person("You", "😊", 1890, 15, None, true),
            person("Emma Brown", "👩‍💻", 1760, 14, None, false),
            person("Frank Miller", "👨‍🏫", 1620, 13, None, false),
        ])
    }

    /// Rank of the row flagged as the current user.
    pub fn current_user_rank(&self) -> Option<usize> {
        self.ranked()
            .into_iter()
            .find(|standing| standing.entry.is_current_user)
            .map(|standing| standing.rank)
    }
}

impl Leaderboard<SquadStanding> {
    /// Demo squad leaderboard.
    pub fn demo_squads() -> Self {
        Self::new(vec![
            squad("Safety Squad", "🛡️", 3200, 15, 45, true),
            squad("Eco Warriors", "🌱", 2450, 12, 38, true),
            squad("Street Fixers", "🔧", 1890, 8, 29, false),
            squad("Green Guardians", "🌿", 1560, 6, 22, false),
        ])
    }
}

fn compare<T: Ranked>(a: &T, b: &T) -> Ordering {
    b.points()
        .cmp(&a.points())
        .then_with(|| a.name().cmp(b.name()))
}

fn person(
    name: &str,
    avatar: &str,
    points: u32,
    reports: u32,
    badge: Option<&str>,
    is_current_user: bool,
) -> LeaderboardEntry {
    LeaderboardEntry {
        name: name.to_owned(),
        avatar: avatar.to_owned(),
        points,
        reports,
        badge: badge.map(str::to_owned),
        is_current_user,
    }
}

fn squad(
    name: &str,
    avatar: &str,
    points: u32,
    members: u32,
    reports: u32,
    is_joined: bool,
) -> SquadStanding {
    SquadStanding {
        name: name.to_owned(),
        avatar: avatar.to_owned(),
        points,
        members,
        reports,
        is_joined,
    }
}
