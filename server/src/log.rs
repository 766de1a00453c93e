// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

//! Logging subscriber

use std::io::stderr;
use std::str::FromStr;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::Registry;
use tracing_subscriber::{EnvFilter, fmt};

/// Print to stderr and exit with a non-zero exit code
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)*) => {{
        eprintln!($($arg)*);
        std::process::exit(1);
    }};
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn as_str(&self) -> &str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_uppercase().as_str() {
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            _ => Err(format!(
                "Invalid log level `{value}`. Valid levels are: TRACE, DEBUG, INFO, WARN, ERROR"
            )),
        }
    }
}

/// Initialize the global logger. `RUST_LOG` takes precedence over `log_level`.
pub fn init(log_level: LogLevel) -> WorkerGuard {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level.as_str()))
        .unwrap_or_else(|_| EnvFilter::new("INFO"));

    let (non_blocking_stderr, stderr_guard) = tracing_appender::non_blocking(stderr());

    let logger = Registry::default().with(filter).with(
        fmt::Layer::default()
            .with_writer(non_blocking_stderr)
            .with_file(true)
            .with_line_number(true),
    );

    if let Err(err) = tracing::subscriber::set_global_default(logger) {
        fatal!("Failed to initialize logger: {err}");
    }

    stderr_guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_from_str() {
        assert_eq!("TRACE".parse::<LogLevel>(), Ok(LogLevel::Trace));
        assert_eq!("debug".parse::<LogLevel>(), Ok(LogLevel::Debug));
        assert_eq!("Info".parse::<LogLevel>(), Ok(LogLevel::Info));
        assert_eq!("WARN".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!("ERROR".parse::<LogLevel>(), Ok(LogLevel::Error));
    }

    #[test]
    fn test_log_level_rejects_unknown() {
        let err = "VERBOSE".parse::<LogLevel>().unwrap_err();
        assert!(err.contains("VERBOSE"));
    }

    #[test]
    fn test_log_level_round_trips_through_filter_name() {
        for level in [LogLevel::Trace, LogLevel::Warn] {
            assert_eq!(level.as_str().parse::<LogLevel>(), Ok(level));
        }
    }
}
