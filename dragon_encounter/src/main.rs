//! Demonstration entry point: three dragons, three ways.

use anyhow::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    setup_logging();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    dragon_encounter::run_demo(&mut out)?;

    Ok(())
}

/// Log to stderr so stdout carries only the narration.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}
