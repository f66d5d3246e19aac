//! Headless play: random commands against a session, no terminal.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::engine::{Session, Snapshot};
use crate::types::{Command, MovementDirection, RotationDirection, SessionState};

const COMMANDS: [Command; 7] = [
    Command::Tick,
    Command::Move(MovementDirection::Left),
    Command::Move(MovementDirection::Right),
    Command::Move(MovementDirection::Down),
    Command::Rotate(RotationDirection::Left),
    Command::Rotate(RotationDirection::Right),
    Command::HardDrop,
];

/// Start `session` and feed it random commands until the game is over or
/// `max_pieces` pieces have settled. Returns the final snapshot.
pub fn play(session: &mut Session, max_pieces: u32, rng: &mut impl Rng) -> Result<Snapshot> {
    session.start()?;
    while session.state() == SessionState::Running && session.pieces_settled() < max_pieces {
        let command = COMMANDS[rng.gen_range(0..COMMANDS.len())];
        session.apply(command)?;
    }
    info!(
        pieces = session.pieces_settled(),
        score = session.score(),
        lines = session.lines_cleared(),
        state = session.state().as_str(),
        "headless run finished"
    );
    Ok(session.snapshot())
}

/// Command source matching the session's seed, so a seeded run is
/// reproducible end to end.
pub fn command_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
        None => StdRng::from_entropy(),
    }
}
