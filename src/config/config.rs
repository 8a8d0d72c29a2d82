use std::env;

use serde::Serialize;
use thiserror::Error;

use crate::{
    common::consts::{
        DEFAULT_LOG_FILE, DEFAULT_LOG_SYSLOG, ENV_LOG_FILE, ENV_LOG_LEVEL, ENV_LOG_PREFIX, ENV_LOG_SYSLOG, MIN_LOG_FILE_LEN,
    },
    logger::Level,
};

/// Invalid environment input, recovered by substituting a default
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigWarning {
    #[error("Unable to parse {var} : invalid boolean \"{value}\"")]
    InvalidSysLog { var: String, value: String },
    #[error("Invalid value for {var} : \"{value}\"")]
    InvalidLogFile { var: String, value: String },
    #[error("Invalid value for {var} \"{value}\"")]
    InvalidLogLevel { var: String, value: String },
}

impl ConfigWarning {
    /// The value used in place of the rejected one
    pub fn default_value(&self) -> String {
        match self {
            ConfigWarning::InvalidSysLog { .. } => DEFAULT_LOG_SYSLOG.to_string(),
            ConfigWarning::InvalidLogFile { .. } => DEFAULT_LOG_FILE.to_owned(),
            ConfigWarning::InvalidLogLevel { .. } => Level::default().to_string(),
        }
    }

    /// Writes the warning to the bootstrap stream.
    ///
    /// No logger exists while the configuration is being resolved, so this
    /// goes straight to the standard error of the process.
    pub fn report(&self) {
        eprintln!("[WARN] {}", self);
        eprintln!("[WARN] Using default value \"{}\"", self.default_value());
    }
}

/// Logger parameters read from `{namespace}LOG_*` variables
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct EnvConfig {
    pub sys_log: bool,
    pub log_file: String,
    pub level: Level,
    pub prefix: String,
}

/// Outcome of a resolution: the usable config and what was replaced
#[derive(Clone, Debug)]
pub struct Resolved {
    pub config: EnvConfig,
    pub warnings: Vec<ConfigWarning>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            sys_log: DEFAULT_LOG_SYSLOG,
            log_file: DEFAULT_LOG_FILE.into(),
            level: Level::default(),
            prefix: String::new(),
        }
    }
}

impl EnvConfig {
    /// Resolve from the process environment
    pub fn from_env(namespace: &str) -> Resolved {
        Self::resolve(namespace, env_value)
    }

    /// Resolve using `lookup` as the environment.
    ///
    /// A variable missing from `lookup` is read as the empty string, so an
    /// unset `LOG_SYSLOG`, `LOG_FILE` or `LOG_LEVEL` yields a warning just
    /// like an invalid one.
    pub fn resolve<F>(
        namespace: &str,
        lookup: F,
    ) -> Resolved
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |suffix: &str| {
            let var = format!("{namespace}{suffix}");
            let value = lookup(&var).unwrap_or_default();
            (var, value)
        };
        let mut config = EnvConfig::default();
        let mut warnings = Vec::new();

        let (var, value) = read(ENV_LOG_SYSLOG);
        match parse_bool(&value) {
            Some(b) => config.sys_log = b,
            None => warnings.push(ConfigWarning::InvalidSysLog { var, value }),
        }

        let (var, value) = read(ENV_LOG_FILE);
        if value.len() < MIN_LOG_FILE_LEN {
            warnings.push(ConfigWarning::InvalidLogFile { var, value });
        } else {
            config.log_file = value;
        }

        let (var, value) = read(ENV_LOG_LEVEL);
        match value.parse::<Level>() {
            Ok(level) => config.level = level,
            Err(_) => warnings.push(ConfigWarning::InvalidLogLevel { var, value }),
        }

        // used verbatim
        config.prefix = read(ENV_LOG_PREFIX).1;

        Resolved {
            config,
            warnings,
        }
    }
}

impl Resolved {
    /// Report every warning on the bootstrap stream and keep the config
    pub fn report(self) -> EnvConfig {
        for w in &self.warnings {
            w.report();
        }
        self.config
    }
}

/// Process variable `name`, non-UTF-8 bytes replaced so warnings show the value
pub fn env_value(name: &str) -> Option<String> {
    env::var_os(name).map(|v| v.to_string_lossy().into_owned())
}

/// Boolean parsing with the usual synonyms (`1`, `t`, `TRUE`, `False`, ...)
pub fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}
