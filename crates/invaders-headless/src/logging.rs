use std::time::Instant;

pub use log::LevelFilter::*;
use log::LevelFilter;

/// Environment variable overriding the default log level.
pub const LOG_ENV: &str = "INVADERS_LOG";

/// Parse a level name, falling back to `default` when unset or unknown.
pub fn level_from_env(default: LevelFilter) -> LevelFilter {
    std::env::var(LOG_ENV)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

/// Install the global logger. Safe to call more than once; later calls are ignored.
pub fn setup_logging(verbosity: LevelFilter) {
    let started = Instant::now();
    let result = fern::Dispatch::new()
        .level(level_from_env(verbosity))
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{:>9.3}][{}][{}] {}",
                started.elapsed().as_secs_f64(),
                record.level(),
                record.target(),
                message
            ))
        })
        .chain(std::io::stderr())
        .apply();

    if result.is_err() {
        log::debug!("logger already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_logging_twice_is_harmless() {
        setup_logging(Info);
        setup_logging(Debug);
        log::info!("logging ready");
    }
}
