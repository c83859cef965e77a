//! Round-robin turn taking with a per-participant budget of turns.

mod error;
mod participant;
mod person_queue;
mod shared;
mod taking_turns;

pub use error::{Error, Result};
pub use participant::{Participant, Turns};
pub use person_queue::PersonQueue;
pub use shared::SharedTakingTurnsQueue;
pub use taking_turns::TakingTurnsQueue;
