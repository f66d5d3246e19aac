//! Thread-safe session handle.
//!
//! The tick source and the input layer run on different threads. Each
//! command holds the session lock for its whole duration, and snapshots are
//! taken under the same lock, so no reader ever sees a half-committed move.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::core::CoreError;
use crate::session::{Session, StepOutcome};
use crate::snapshot::Snapshot;
use crate::types::{Command, SessionState};

#[derive(Debug, Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<Session>>,
}

impl SharedSession {
    pub fn new(session: Session) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Session> {
        // Session operations never panic mid-commit, so a poisoned lock still
        // guards a consistent board.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn apply(&self, command: Command) -> Result<StepOutcome, CoreError> {
        self.lock().apply(command)
    }

    pub fn state(&self) -> SessionState {
        self.lock().state()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.lock().snapshot()
    }

    pub fn snapshot_into(&self, out: &mut Snapshot) {
        self.lock().snapshot_into(out);
    }

    /// Run a read-only query against the session under the lock.
    pub fn with<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        f(&self.lock())
    }
}

impl From<Session> for SharedSession {
    fn from(session: Session) -> Self {
        Self::new(session)
    }
}
