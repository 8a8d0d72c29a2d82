use std::{
    env,
    io::{self, Write},
};

use anyhow::Result;
use flexi_logger::{DeferredNow, Logger as FlexiLogger, LoggerHandle};
use log::Record;

use crate::{common::consts::SYS_LOG_TARGET, logger::Tag};

/// Secondary sink receiving a raw copy of selected messages
pub trait SysSink: Send + Sync {
    fn write_line(
        &self,
        tag: Tag,
        line: &str,
    );
}

/// Forwards to the ambient `log` facade under the `syslog` target.
///
/// When no installed backend accepts the record (none installed, or its
/// filter rejects the `syslog` target) the line goes straight to stderr,
/// so an enabled sink never drops a message.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogFacadeSink;

impl LogFacadeSink {
    /// Deliver `line`, using `fallback` when the facade would discard it.
    /// Returns `true` when the facade took the line.
    pub fn deliver(
        &self,
        tag: Tag,
        line: &str,
        fallback: &mut dyn Write,
    ) -> bool {
        let level = tag.facade_level();
        if log::log_enabled!(target: SYS_LOG_TARGET, level) {
            log::log!(target: SYS_LOG_TARGET, level, "{}", line);
            return true;
        }
        if let Err(e) = writeln!(fallback, "{}", line) {
            eprintln!("envlog: unable to write to the secondary sink: {}", e);
        }
        false
    }
}

impl SysSink for LogFacadeSink {
    fn write_line(
        &self,
        tag: Tag,
        line: &str,
    ) {
        self.deliver(tag, line, &mut io::stderr().lock());
    }
}

/// Message only, no level or timestamp decoration
pub fn bare_format(
    w: &mut dyn io::Write,
    _now: &mut DeferredNow,
    record: &Record,
) -> io::Result<()> {
    write!(w, "{}", record.args())
}

/// Log specification for the ambient logger.
///
/// `RUST_LOG` (or `default` when unset) filters every target except
/// `syslog`, which always passes.
pub fn sys_log_spec(
    rust_log: Option<&str>,
    default: &str,
) -> String {
    let base = rust_log.map(str::trim).filter(|s| !s.is_empty()).unwrap_or(default);
    format!("{base}, {SYS_LOG_TARGET}=trace")
}

/// Install the ambient logger backing [`LogFacadeSink`] on stderr.
///
/// Keep the returned handle alive for as long as the sink is used.
pub fn init_sys_logger(default: &str) -> Result<LoggerHandle> {
    let rust_log = env::var("RUST_LOG").ok();
    let spec = sys_log_spec(rust_log.as_deref(), default);
    let handle = FlexiLogger::try_with_str(spec)?.format(bare_format).log_to_stderr().start()?;
    Ok(handle)
}
