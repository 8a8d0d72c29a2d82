mod config;

pub use config::{ConfigWarning, EnvConfig, Resolved, env_value, parse_bool};
