// cargo test -p taking-turns-simulator --test integration
use taking_turns_config::{Config, ParticipantConfig};
use taking_turns_queue::{Participant, Turns};
use taking_turns_simulator::{simulate, turns_per_name, SimulatorError};

fn participant(name: &str, turns: i32) -> ParticipantConfig {
    ParticipantConfig {
        name: name.to_owned(),
        turns: Turns(turns),
    }
}

#[test]
fn runs_the_configured_rounds() -> Result<(), SimulatorError> {
    let config = Config {
        rounds: 8,
        participants: vec![
            participant("Alice", 2),
            participant("Bob", 1),
            participant("Carol", 0),
        ],
    };

    let served = simulate(&config)?;
    assert_eq!(served.len(), 8);
    assert_eq!(served[..4], [
        Participant::new("Alice", 2),
        Participant::new("Bob", 1),
        Participant::new("Carol", 0),
        Participant::new("Alice", 1),
    ]);

    let counts = turns_per_name(&served);
    assert_eq!(counts.get("Alice"), Some(&2));
    assert_eq!(counts.get("Bob"), Some(&1));
    assert_eq!(counts.get("Carol"), Some(&5));
    Ok(())
}

#[test]
fn stops_once_everyone_is_done() -> Result<(), SimulatorError> {
    let config = Config {
        rounds: 100,
        participants: vec![participant("Bob", 2), participant("Sue", 3)],
    };

    let served = simulate(&config)?;
    assert_eq!(served.len(), 5);
    assert_eq!(served.last(), Some(&Participant::new("Sue", 1)));
    Ok(())
}

#[test]
fn nobody_configured() -> Result<(), SimulatorError> {
    let config = Config {
        rounds: 3,
        participants: Vec::new(),
    };

    assert!(simulate(&config)?.is_empty());
    Ok(())
}
