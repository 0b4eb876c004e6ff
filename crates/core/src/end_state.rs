//! End-state evaluation: a game is won only when the snake fills the board.

use crate::snapshot::BoardSnapshot;
use crate::types::Outcome;

/// Win iff every cell of `snap` is snake-occupied
pub fn evaluate(snap: &BoardSnapshot) -> Outcome {
    if snap.cells().iter().all(|c| c.is_snake()) {
        Outcome::Win
    } else {
        Outcome::Loss
    }
}
