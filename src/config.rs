use fbe::Result;

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Logging goes to stderr so the report CSV on stdout stays clean. Default
/// level is warn; override per-run with `RUST_LOG`.
pub fn configure_app() -> Result {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    Ok(())
}
