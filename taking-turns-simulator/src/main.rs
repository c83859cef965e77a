use taking_turns_config::get_config;
use taking_turns_simulator::{simulate, turns_per_name, SimulatorError};
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

pub fn main() -> Result<(), SimulatorError> {
    const DEFAULT_LOG_LEVEL: &str = "info,taking_turns_queue=debug";

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer().with_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_LEVEL.into()),
            ),
        )
        .init();

    let config = get_config().inspect_err(|err| error!("{err}"))?;
    let served = simulate(&config)?;

    info!("served {} of {} rounds", served.len(), config.rounds);
    for (name, turns) in turns_per_name(&served) {
        info!("{name}: {turns}");
    }
    Ok(())
}
