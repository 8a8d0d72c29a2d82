use std::{
    any::Any,
    backtrace::Backtrace,
    fmt,
    io::{self, Write},
    process,
    sync::Arc,
};

use crate::logger::{Destination, ErrorGate, Level, LineWriter, LogFacadeSink, LoggerError, SysSink, Tag};

/// Leveled logger writing `[TAG] "message"` lines to one destination.
///
/// Trace, Debug and Info are filtered by the threshold. Warning is filtered
/// only by an `error` threshold. Error, Panic, Recover and Fatal always
/// emit. Warning, Error, Panic, Recover and Fatal are also copied to the
/// secondary sink when it is enabled.
pub struct Logger {
    namespace: String,
    writer: LineWriter,
    level: Level,
    sys_log: bool,
    sys: Arc<dyn SysSink>,
}

impl Logger {
    /// Open `path` and build a logger on it.
    ///
    /// # Panics
    ///
    /// When the destination cannot be prepared. Logging is foundational,
    /// there is nothing sensible to fall back to.
    pub fn new(
        path: &str,
        prefix: &str,
        level: Level,
        sys_log: bool,
    ) -> Self {
        match Self::try_new(path, prefix, level, sys_log) {
            Ok(logger) => logger,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn try_new(
        path: &str,
        prefix: &str,
        level: Level,
        sys_log: bool,
    ) -> Result<Self, LoggerError> {
        let destination = Destination::resolve(path)?;
        Ok(Self::with_writer(destination, prefix, level, sys_log))
    }

    /// Build a logger on an arbitrary destination
    pub fn with_writer<W: Write + Send + 'static>(
        out: W,
        prefix: &str,
        level: Level,
        sys_log: bool,
    ) -> Self {
        let logger = Self {
            namespace: String::new(),
            writer: LineWriter::new(out, prefix),
            level,
            sys_log,
            sys: Arc::new(LogFacadeSink),
        };
        logger.debug("New logger created");
        logger
    }

    /// Replace the secondary sink
    pub fn with_sys_sink(
        mut self,
        sink: Arc<dyn SysSink>,
    ) -> Self {
        self.sys = sink;
        self
    }

    pub(crate) fn with_namespace(
        mut self,
        namespace: &str,
    ) -> Self {
        self.namespace = namespace.to_owned();
        self
    }

    /// Namespace of the environment variables this logger was built from
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn sys_log(&self) -> bool {
        self.sys_log
    }

    pub fn prefix(&self) -> String {
        self.writer.prefix()
    }

    /// Change the prefix of every following line
    pub fn set_prefix(
        &self,
        prefix: &str,
    ) {
        self.writer.set_prefix(prefix);
    }

    pub fn set_timestamps(
        &self,
        on: bool,
    ) {
        self.writer.set_timestamps(on);
    }

    pub fn flush(&self) -> io::Result<()> {
        self.writer.flush()
    }

    pub fn trace(
        &self,
        msg: &str,
    ) {
        if self.level.admits(Level::Trace) {
            self.emit(Tag::Trace, msg);
        }
    }

    pub fn tracef(
        &self,
        args: fmt::Arguments<'_>,
    ) {
        self.trace(&args.to_string());
    }

    pub fn debug(
        &self,
        msg: &str,
    ) {
        if self.level.admits(Level::Debug) {
            self.emit(Tag::Debug, msg);
        }
    }

    pub fn debugf(
        &self,
        args: fmt::Arguments<'_>,
    ) {
        self.debug(&args.to_string());
    }

    pub fn info(
        &self,
        msg: &str,
    ) {
        if self.level.admits(Level::Info) {
            self.emit(Tag::Info, msg);
        }
    }

    pub fn infof(
        &self,
        args: fmt::Arguments<'_>,
    ) {
        self.info(&args.to_string());
    }

    /// Copied to the secondary sink whatever the threshold
    pub fn warning(
        &self,
        msg: &str,
    ) {
        self.forward(Tag::Warn, msg);
        if self.level.admits(Level::Warning) {
            self.emit(Tag::Warn, msg);
        }
    }

    pub fn warningf(
        &self,
        args: fmt::Arguments<'_>,
    ) {
        self.warning(&args.to_string());
    }

    pub fn warninge<G: ErrorGate>(
        &self,
        err: G,
        args: fmt::Arguments<'_>,
    ) {
        if err.is_failure() {
            self.warningf(args);
        }
    }

    pub fn error(
        &self,
        msg: &str,
    ) {
        self.forward(Tag::Error, msg);
        self.emit(Tag::Error, msg);
    }

    pub fn errorf(
        &self,
        args: fmt::Arguments<'_>,
    ) {
        self.error(&args.to_string());
    }

    pub fn errore<G: ErrorGate>(
        &self,
        err: G,
        args: fmt::Arguments<'_>,
    ) {
        if err.is_failure() {
            self.errorf(args);
        }
    }

    /// Log, then unwind with `msg` as the panic payload.
    ///
    /// A caller catching the unwind should log it with [`Logger::recover`].
    pub fn panic(
        &self,
        msg: &str,
    ) -> ! {
        self.forward(Tag::Panic, msg);
        self.emit(Tag::Panic, msg);
        panic!("{}", msg)
    }

    pub fn panicf(
        &self,
        args: fmt::Arguments<'_>,
    ) -> ! {
        self.panic(&args.to_string())
    }

    /// Panics only when `err` holds an error
    pub fn panice<G: ErrorGate>(
        &self,
        err: G,
        args: fmt::Arguments<'_>,
    ) {
        if err.is_failure() {
            self.panicf(args);
        }
    }

    /// Log a recovered panic, plus the current backtrace at debug level
    pub fn recover(
        &self,
        msg: &str,
    ) {
        self.forward(Tag::Recover, msg);
        self.emit(Tag::Recover, msg);
        if self.level.admits(Level::Debug) {
            self.debugf(format_args!("Panic was : {}", Backtrace::force_capture()));
        }
    }

    pub fn recoverf(
        &self,
        args: fmt::Arguments<'_>,
    ) {
        self.recover(&args.to_string());
    }

    /// Log, echo `msg` on stderr, then exit the process with status 1.
    /// Never returns.
    pub fn fatal(
        &self,
        msg: &str,
    ) -> ! {
        self.emit(Tag::Fatal, msg);
        self.forward(Tag::Fatal, msg);
        let _ = self.flush();
        eprintln!("{}", msg);
        log::logger().flush();
        process::exit(1)
    }

    pub fn fatalf(
        &self,
        args: fmt::Arguments<'_>,
    ) -> ! {
        self.fatal(&args.to_string())
    }

    /// Exits the process only when `err` holds an error
    pub fn fatale<G: ErrorGate>(
        &self,
        err: G,
        args: fmt::Arguments<'_>,
    ) {
        if err.is_failure() {
            self.fatalf(args);
        }
    }

    /// Write `msg` verbatim to the secondary sink, if enabled
    pub fn sys(
        &self,
        msg: &str,
    ) {
        self.forward(Tag::Info, msg);
    }

    pub fn sysf(
        &self,
        args: fmt::Arguments<'_>,
    ) {
        self.sys(&args.to_string());
    }

    fn forward(
        &self,
        tag: Tag,
        msg: &str,
    ) {
        if self.sys_log {
            self.sys.write_line(tag, msg);
        }
    }

    fn emit(
        &self,
        tag: Tag,
        msg: &str,
    ) {
        self.writer.write_line(&format!("[{}] \"{}\"", tag, msg));
    }
}

impl fmt::Debug for Logger {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("Logger")
            .field("namespace", &self.namespace)
            .field("prefix", &self.prefix())
            .field("level", &self.level)
            .field("sys_log", &self.sys_log)
            .finish()
    }
}

/// Text carried by a caught panic payload
pub fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else if let Some(s) = payload.downcast_ref::<&'static str>() {
        s
    } else {
        "unknown panic"
    }
}
