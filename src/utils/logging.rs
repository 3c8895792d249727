//! Opt-in debug logging to stderr

use std::io::Write;

use chrono::Local;
use log::LevelFilter;

/// Install the stderr logger at debug level.
///
/// The environment is not consulted; logging is enabled only by `--verbose`.
pub fn init_logging() {
    let result = env_logger::Builder::new()
        .target(env_logger::Target::Stderr)
        .filter_level(LevelFilter::Debug)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.module_path().unwrap_or("unknown"),
                record.args()
            )
        })
        .try_init();

    if result.is_ok() {
        log::debug!("logging initialized");
    }
}
