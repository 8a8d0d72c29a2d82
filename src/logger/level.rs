use std::{fmt, str::FromStr};

use serde::Serialize;
use thiserror::Error;

/// Severity threshold of a logger.
///
/// Ordered by permissiveness: a threshold admits every message whose level
/// compares less than or equal to it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Level {
    Error = 1,
    Warning,
    #[default]
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown log level \"{0}\"")]
pub struct UnknownLevel(pub String);

impl Level {
    pub const ALL: [Level; 5] = [Level::Error, Level::Warning, Level::Info, Level::Debug, Level::Trace];

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Info => "info",
            Level::Debug => "debug",
            Level::Trace => "trace",
        }
    }

    /// Whether a logger with this threshold emits messages of `level`
    pub fn admits(
        self,
        level: Level,
    ) -> bool {
        self >= level
    }
}

impl FromStr for Level {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL.into_iter().find(|l| l.as_str() == s).ok_or_else(|| UnknownLevel(s.to_owned()))
    }
}

impl fmt::Display for Level {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tag written between brackets at the start of each line body
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tag {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Panic,
    Recover,
    Fatal,
}

impl Tag {
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Trace => "TRACE",
            Tag::Debug => "DEBUG",
            Tag::Info => "INFO",
            Tag::Warn => "WARN",
            Tag::Error => "ERROR",
            Tag::Panic => "PANIC",
            Tag::Recover => "RECOVER",
            Tag::Fatal => "FATAL",
        }
    }

    /// Level used when the message is forwarded to the `log` facade
    pub fn facade_level(self) -> log::Level {
        match self {
            Tag::Trace => log::Level::Trace,
            Tag::Debug => log::Level::Debug,
            Tag::Info => log::Level::Info,
            Tag::Warn => log::Level::Warn,
            Tag::Error | Tag::Panic | Tag::Recover | Tag::Fatal => log::Level::Error,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
