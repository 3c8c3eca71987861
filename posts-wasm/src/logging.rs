use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};
use tracing_web::MakeWebConsoleWriter;

// std::time в wasm32-unknown-unknown паникует, поэтому без таймстемпов.
pub(crate) fn init_logging(default_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(default_level).unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(MakeWebConsoleWriter::new())
        .with_target(true)
        .with_ansi(false)
        .without_time()
        .compact()
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))?;

    Ok(())
}
