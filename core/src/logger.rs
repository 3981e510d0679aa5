//! Logging subsystem for the command-line front-end.
use std::sync::Mutex;

use clap::ValueEnum;
use slog::{o, Drain};
use slog_scope::GlobalLoggerGuard;

/// Minimum severity of records written to stderr.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn slog_level(self) -> slog::Level {
        match self {
            Self::Error => slog::Level::Error,
            Self::Warn => slog::Level::Warning,
            Self::Info => slog::Level::Info,
            Self::Debug => slog::Level::Debug,
            Self::Trace => slog::Level::Trace,
        }
    }

    fn log_level(self) -> log::Level {
        match self {
            Self::Error => log::Level::Error,
            Self::Warn => log::Level::Warn,
            Self::Info => log::Level::Info,
            Self::Debug => log::Level::Debug,
            Self::Trace => log::Level::Trace,
        }
    }
}

/// Install a JSON logger on stderr and route `log` records into it.
///
/// The returned guard must outlive every logging call.
pub fn init(level: LogLevel) -> anyhow::Result<GlobalLoggerGuard> {
    let drain = Mutex::new(slog_json::Json::default(std::io::stderr())).fuse();
    let drain = drain.filter_level(level.slog_level()).fuse();
    let logger = slog::Logger::root(drain, o!("app" => "shamir-recover"));

    let guard = slog_scope::set_global_logger(logger);
    slog_stdlog::init_with_level(level.log_level())?;
    Ok(guard)
}

/// Get a logger scoped to `module`.
pub fn get_logger(module: &'static str) -> slog::Logger {
    slog_scope::logger().new(o!("module" => module))
}
