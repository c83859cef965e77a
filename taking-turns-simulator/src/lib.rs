use std::collections::BTreeMap;

use itertools::Itertools as _;
use taking_turns_config::{Config, ConfigError};
use taking_turns_queue::{Participant, TakingTurnsQueue};
use tracing::info;

#[derive(thiserror::Error, Debug)]
pub enum SimulatorError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("queue error: {0}")]
    Queue(#[from] taking_turns_queue::Error),
}

/// Admits the configured participants in order and serves up to
/// `config.rounds` of them. Stops early once nobody is left.
pub fn simulate(config: &Config) -> Result<Vec<Participant>, SimulatorError> {
    let mut queue: TakingTurnsQueue = config
        .participants
        .iter()
        .map(|participant| Participant::new(participant.name.clone(), participant.turns))
        .collect();
    info!("starting with {queue}");

    let mut served = Vec::new();
    for round in 1..=config.rounds {
        match queue.get_next() {
            Ok(participant) => {
                info!(round, "{participant} takes a turn, waiting: {queue}");
                served.push(participant);
            }
            Err(taking_turns_queue::Error::QueueEmpty) => {
                info!(round, "everyone used up their turns");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(served)
}

/// How often each name was served, sorted by name.
#[must_use]
pub fn turns_per_name(served: &[Participant]) -> BTreeMap<&str, usize> {
    served
        .iter()
        .map(Participant::name)
        .counts()
        .into_iter()
        .collect()
}
