/// Suffix of the variable enabling the secondary sink
pub const ENV_LOG_SYSLOG: &str = "LOG_SYSLOG";
/// Suffix of the variable naming the destination file
pub const ENV_LOG_FILE: &str = "LOG_FILE";
/// Suffix of the variable holding the severity threshold
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
/// Suffix of the variable holding the line prefix
pub const ENV_LOG_PREFIX: &str = "LOG_PREFIX";

/// Default destination, the standard output of the process
pub const DEFAULT_LOG_FILE: &str = "/dev/stdout";
/// Destination alias for the standard error of the process
pub const STDERR_LOG_FILE: &str = "/dev/stderr";
/// Default state of the secondary sink
pub const DEFAULT_LOG_SYSLOG: bool = false;

/// Shortest accepted destination path
pub const MIN_LOG_FILE_LEN: usize = 3;

/// Log target used when forwarding to the ambient `log` facade
pub const SYS_LOG_TARGET: &str = "syslog";
