//! Driven port persisting whether the intro screen has been seen.

use std::sync::atomic::{AtomicBool, Ordering};

use super::define_port_error;

define_port_error! {
    /// Errors raised by intro flag storage.
    pub enum IntroFlagStoreError {
        /// The flag could not be read.
        Read { message: String } => "intro flag read failed: {message}",
        /// The flag could not be written.
        Write { message: String } => "intro flag write failed: {message}",
    }
}

/// Port for the single persisted "intro seen" flag.
#[cfg_attr(test, mockall::automock)]
pub trait IntroFlagStore: Send + Sync {
    /// Whether the intro has been acknowledged before.
    fn has_seen_intro(&self) -> Result<bool, IntroFlagStoreError>;

    /// Persist that the intro has been acknowledged.
    fn mark_intro_seen(&self) -> Result<(), IntroFlagStoreError>;
}

/// Process-local flag store, reset on restart.
#[derive(Debug, Default)]
pub struct InMemoryIntroFlagStore {
    seen: AtomicBool,
}

impl InMemoryIntroFlagStore {
    /// A store that already records the intro as seen.
    pub fn seen() -> Self {
        Self {
            seen: AtomicBool::new(true),
        }
    }
}

impl IntroFlagStore for InMemoryIntroFlagStore {
    fn has_seen_intro(&self) -> Result<bool, IntroFlagStoreError> {
        Ok(self.seen.load(Ordering::Acquire))
    }

    fn mark_intro_seen(&self) -> Result<(), IntroFlagStoreError> {
        self.seen.store(true, Ordering::Release);
        Ok(())
    }
}
