//! Squads: user-joinable groups backed by static demo data.

use std::fmt;

/// Squad identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SquadId(u32);

impl SquadId {
    /// Wrap a raw identifier.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Raw numeric value.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SquadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A squad as shown on the squads page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Squad {
    /// Roster identifier.
    pub id: SquadId,
    /// Display name.
    pub name: String,
    /// What the squad works on.
    pub description: String,
    /// Current member count, including the user when joined.
    pub members: u32,
    /// Capacity; joins are refused once reached.
    pub max_members: u32,
    /// Leader's display name.
    pub leader: String,
    /// Neighbourhood label.
    pub location: String,
    /// Points earned by the squad.
    pub impact_points: u32,
    /// Avatar emoji.
    pub avatar: String,
    /// Whether the local user is a member.
    pub is_joined: bool,
}

impl Squad {
    /// Whether no more members can join.
    pub fn is_full(&self) -> bool {
        self.members >= self.max_members
    }
}

/// Reasons a roster change is refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SquadError {
    /// No squad has this identifier.
    #[error("squad {id} does not exist")]
    UnknownSquad {
        /// The requested squad.
        id: SquadId,
    },
    /// The squad has reached its capacity.
    #[error("squad {id} is full")]
    SquadFull {
        /// The requested squad.
        id: SquadId,
    },
    /// A new squad needs a name.
    #[error("squad name must not be blank")]
    BlankName,
    /// A new squad needs a description.
    #[error("squad description must not be blank")]
    BlankDescription,
}

/// Default capacity for newly created squads.
pub const DEFAULT_MAX_MEMBERS: u32 = 10;
const NEW_SQUAD_AVATAR: &str = "⭐";
const NEW_SQUAD_LOCATION: &str = "Your Area";

/// Every squad known to the client and the user's memberships.
#[derive(Debug, Clone, Default)]
pub struct SquadRoster {
    squads: Vec<Squad>,
}

impl SquadRoster {
    /// Roster over `squads`, in display order.
    pub fn new(squads: Vec<Squad>) -> Self {
        Self { squads }
    }

    /// The demo roster shown before any backend exists.
    pub fn demo() -> Self {
        Self::new(vec![
            demo_squad(
                1,
                ("Eco Warriors", "🌱"),
                "Dedicated to keeping our neighborhood clean and green",
                (12, 20),
                ("Alice Johnson", "Downtown SF"),
                2450,
                true,
            ),
            demo_squad(
                2,
                ("Street Fixers", "🔧"),
                "Focused on infrastructure improvements and road safety",
                (8, 15),
                ("Bob Smith", "Mission District"),
                1890,
                false,
            ),
            demo_squad(
                3,
                ("Safety Squad", "🛡️"),
                "Making our community safer for everyone",
                (15, 25),
                ("Carol Davis", "Castro District"),
                3200,
                true,
            ),
            demo_squad(
                4,
                ("Green Guardians", "🌿"),
                "Protecting parks and green spaces in the city",
                (6, 12),
                ("David Wilson", "Golden Gate Park"),
                1560,
                false,
            ),
        ])
    }

    /// Every squad in display order.
    pub fn all(&self) -> &[Squad] {
        &self.squads
    }

    /// Look a squad up by identifier.
    pub fn get(&self, id: SquadId) -> Option<&Squad> {
        self.squads.iter().find(|squad| squad.id == id)
    }

    /// Squads the user belongs to.
    pub fn mine(&self) -> impl Iterator<Item = &Squad> + '_ {
        self.squads.iter().filter(|squad| squad.is_joined)
    }

    /// Squads the user can browse and join.
    pub fn available(&self) -> impl Iterator<Item = &Squad> + '_ {
        self.squads.iter().filter(|squad| !squad.is_joined)
    }

    /// Join a squad. Joining one already joined changes nothing.
    pub fn join(&mut self, id: SquadId) -> Result<&Squad, SquadError> {
        let squad = self.find_mut(id)?;
        if !squad.is_joined {
            if squad.is_full() {
                return Err(SquadError::SquadFull { id });
            }
            squad.members += 1;
            squad.is_joined = true;
        }
        Ok(squad)
    }

    /// Leave a squad. Leaving one not joined changes nothing.
    pub fn leave(&mut self, id: SquadId) -> Result<&Squad, SquadError> {
        let squad = self.find_mut(id)?;
        if squad.is_joined {
            squad.members = squad.members.saturating_sub(1);
            squad.is_joined = false;
        }
        Ok(squad)
    }

    /// Create a squad led and joined by `leader`.
    pub fn create(
        &mut self,
        name: &str,
        description: &str,
        leader: &str,
    ) -> Result<&Squad, SquadError> {
        let name = name.trim();
        let description = description.trim();
        if name.is_empty() {
            return Err(SquadError::BlankName);
        }
        if description.is_empty() {
            return Err(SquadError::BlankDescription);
        }
        let next = self
            .squads
            .iter()
            .map(|squad| squad.id.get())
            .max()
            .unwrap_or(0)
            .saturating_add(1);
        self.squads.push(Squad {
            id: SquadId::new(next),
            name: name.to_owned(),
            description: description.to_owned(),
            members: 1,
            max_members: DEFAULT_MAX_MEMBERS,
            leader: leader.to_owned(),
            location: NEW_SQUAD_LOCATION.to_owned(),
            impact_points: 0,
            avatar: NEW_SQUAD_AVATAR.to_owned(),
            is_joined: true,
        });
        self.find_mut(SquadId::new(next)).map(|squad| &*squad)
    }

    fn find_mut(&mut self, id: SquadId) -> Result<&mut Squad, SquadError> {
        self.squads
            .iter_mut()
            .find(|squad| squad.id == id)
            .ok_or(SquadError::UnknownSquad { id })
    }
}

fn demo_squad(
    id: u32,
    (name, avatar): (&str, &str),
    description: &str,
    (members, max_members): (u32, u32),
    (leader, location): (&str, &str),
    impact_points: u32,
    is_joined: bool,
) -> Squad {
    Squad {
        id: SquadId::new(id),
        name: name.to_owned(),
        description: description.to_owned(),
        members,
        max_members,
        leader: leader.to_owned(),
        location: location.to_owned(),
        impact_points,
        avatar: avatar.to_owned(),
        is_joined,
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn roster() -> SquadRoster {
        SquadRoster::demo()
    }

    #[rstest]
    fn demo_roster_splits_joined_and_available(roster: SquadRoster) {
        let mine: Vec<_> = roster.mine().map(|squad| squad.name.as_str()).collect();
        let available: Vec<_> = roster.available().map(|squad| squad.name.as_str()).collect();

        assert_eq!(mine, ["Eco Warriors", "Safety Squad"]);
        assert_eq!(available, ["Street Fixers", "Green Guardians"]);
    }

    #[rstest]
    fn join_adds_member_once(mut roster: SquadRoster) {
        let id = SquadId::new(2);

        let members = roster.join(id).expect("joinable").members;
        let again = roster.join(id).expect("idempotent").members;

        assert_eq!(members, 9);
        assert_eq!(again, 9);
        assert!(roster.get(id).is_some_and(|squad| squad.is_joined));
    }

    #[rstest]
    fn full_squad_cannot_be_joined() {
        let mut roster = SquadRoster::new(vec![demo_squad(
            7,
            ("Tiny", "🐜"),
            "Small",
            (3, 3),
            ("Ann", "Here"),
            0,
            false,
        )]);

        assert_eq!(
            roster.join(SquadId::new(7)).map(|squad| squad.members),
            Err(SquadError::SquadFull {
                id: SquadId::new(7)
            })
        );
    }

    #[rstest]
    fn unknown_squad_is_rejected(mut roster: SquadRoster) {
        let id = SquadId::new(99);
        assert_eq!(
            roster.join(id).map(|squad| squad.id),
            Err(SquadError::UnknownSquad { id })
        );
        assert_eq!(
            roster.leave(id).map(|squad| squad.id),
            Err(SquadError::UnknownSquad { id })
        );
    }

    #[rstest]
    fn leave_removes_membership(mut roster: SquadRoster) {
        let squad = roster.leave(SquadId::new(1)).expect("known squad");
        assert!(!squad.is_joined);
        assert_eq!(squad.members, 11);
    }

    #[rstest]
    fn create_trims_and_joins_creator(mut roster: SquadRoster) {
        let squad = roster
            .create("  Night Owls ", " Fixing lights after dark ", "You")
            .expect("valid squad")
            .clone();

        assert_eq!(squad.id, SquadId::new(5));
        assert_eq!(squad.name, "Night Owls");
        assert_eq!(squad.description, "Fixing lights after dark");
        assert_eq!(squad.members, 1);
        assert!(squad.is_joined);
        assert_eq!(roster.mine().count(), 3);
    }

    #[rstest]
    #[case("   ", "desc", SquadError::BlankName)]
    #[case("Name", "", SquadError::BlankDescription)]
    fn create_rejects_blank_fields(
        mut roster: SquadRoster,
        #[case] name: &str,
        #[case] description: &str,
        #[case] expected: SquadError,
    ) {
        assert_eq!(
            roster.create(name, description, "You").map(|squad| squad.id),
            Err(expected)
        );
        assert_eq!(roster.all().len(), 4);
    }
}
