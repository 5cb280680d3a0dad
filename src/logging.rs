use anyhow::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Installs the global fmt subscriber; DEBUG when `verbose`, INFO otherwise.
pub fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_line_number(true)
        .with_file(true)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
