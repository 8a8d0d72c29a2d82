use std::fmt;

use chrono::{DateTime, Local};

/// Build information printed by `envlog --version`
#[derive(Debug)]
pub struct VersionInfo {
    /// Package name
    pub name: &'static str,
    /// Package version (e.g., "0.1.0")
    pub version: &'static str,
    /// Git branch, if available
    pub branch: Option<&'static str>,
    /// Git commit hash, if available
    pub commit_hash: Option<&'static str>,
    /// Compiler used for building
    pub compiler: &'static str,
    /// Compile timestamp, RFC 2822
    pub compile_time: &'static str,
}

impl VersionInfo {
    /// Compile time rendered in local time, empty when the build stamp is unparsable
    pub fn local_compile_time(&self) -> String {
        match DateTime::parse_from_rfc2822(self.compile_time) {
            Ok(dt) => dt.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string(),
            Err(_) => String::new(),
        }
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "{} {}", self.name, self.version)?;
        writeln!(f, "  branch:   {}", self.branch.unwrap_or("None"))?;
        writeln!(f, "  commit:   {}", self.commit_hash.unwrap_or("None"))?;
        writeln!(f, "  compiler: {}", self.compiler)?;
        write!(f, "  built:    {}", self.local_compile_time())
    }
}
