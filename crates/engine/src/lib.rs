//! Session engine - sequences one game on top of the core rules
//!
//! - [`session`]: the Idle/Running/Paused/GameOver state machine
//! - [`shared`]: a mutex-serialized handle for multi-threaded drivers
//! - [`snapshot`]: a consistent, serializable view for collaborators
//!
//! # Example
//!
//! ```
//! use tetrominoes_engine::{Session, StepOutcome};
//! use tetrominoes_types::{Command, SessionState};
//!
//! let mut session = Session::with_seed(12345);
//! assert_eq!(session.apply(Command::Start).unwrap(), StepOutcome::Moved);
//!
//! let outcome = session.apply(Command::HardDrop).unwrap();
//! assert!(matches!(outcome, StepOutcome::Settled { cleared: 0 }));
//! assert_eq!(session.state(), SessionState::Running);
//! ```

pub mod session;
pub mod shared;
pub mod snapshot;

pub use tetrominoes_core as core;
pub use tetrominoes_types as types;

pub use session::{Session, StepOutcome};
pub use shared::SharedSession;
pub use snapshot::{ActiveSnapshot, Snapshot};
