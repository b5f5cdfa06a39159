//! Log verbosity from the environment
//!
//! The LOG_LEVEL variable accepts the usual Python logging level names
//! so existing deployment configuration keeps working unchanged.

const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Install the process wide logger, configured once at startup.
pub fn init_logging() {
    let level = std::env::var(LOG_LEVEL_ENV)
        .map(|v| level_filter(&v))
        .unwrap_or(log::LevelFilter::Info);

    env_logger::Builder::new().filter_level(level).init();
}

fn level_filter(name: &str) -> log::LevelFilter {
    match name.to_ascii_lowercase().as_str() {
        "notset" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warning" => log::LevelFilter::Warn,
        // log has no level above error
        "error" | "fatal" | "critical" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    }
}
