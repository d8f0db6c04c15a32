//! First-run intro screen gating.

use std::sync::Arc;

use tracing::warn;

use super::ports::{IntroFlagStore, IntroFlagStoreError};

/// Decides whether to show the intro and records that it was seen.
///
/// The flag is read once on construction and written at most once.
pub struct IntroGate {
    store: Arc<dyn IntroFlagStore>,
    seen: bool,
}

impl IntroGate {
    /// Read the persisted flag. A failed read shows the intro again.
    pub fn load(store: Arc<dyn IntroFlagStore>) -> Self {
        let seen = store.has_seen_intro().unwrap_or_else(|err| {
            warn!(
                error = %err,
                kind = err.kind(),
                "could not read intro flag; showing intro"
            );
            false
        });
        Self { store, seen }
    }

    /// Whether the intro still has to be shown.
    pub fn should_show(&self) -> bool {
        !self.seen
    }

    /// Record that the intro was dismissed.
    pub fn acknowledge(&mut self) -> Result<(), IntroFlagStoreError> {
        if self.seen {
            return Ok(());
        }
        self.store.mark_intro_seen()?;
        self.seen = true;
        Ok(())
    }
}

impl std::fmt::Debug for IntroGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntroGate")
            .field("seen", &self.seen)
            .finish_non_exhaustive()
    }
}
