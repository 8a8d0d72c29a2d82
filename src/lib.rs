//! Leveled line logger configured from `{namespace}LOG_*` environment variables.
//!
//! ```no_run
//! let log = envlog::logger_from_env("APP_", false);
//! log.info("ready");
//! envlog::warningf!(log, "{} retries left", 3);
//! ```

pub mod common;
pub mod config;
pub mod logger;

pub use config::EnvConfig;
pub use logger::{ErrorGate, Level, Logger, LoggerError, Registry, logger_from_env, new_logger, panic_message};

pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}
