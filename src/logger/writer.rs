use std::{
    fmt::Write as _,
    io::{self, Write},
    sync::{
        Mutex, PoisonError, RwLock,
        atomic::{AtomicBool, Ordering},
    },
};

use chrono::Local;

/// Timestamp layout: date, time and microseconds
const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S%.6f";

/// Writes whole lines to a destination.
///
/// Each line is `<prefix><timestamp> <body>\n` and is written with a single
/// `write_all` while holding the destination lock, so lines from concurrent
/// callers never interleave.
pub struct LineWriter {
    out: Mutex<Box<dyn Write + Send>>,
    prefix: RwLock<String>,
    timestamps: AtomicBool,
}

impl LineWriter {
    pub fn new<W: Write + Send + 'static>(
        out: W,
        prefix: &str,
    ) -> Self {
        Self {
            out: Mutex::new(Box::new(out)),
            prefix: RwLock::new(prefix.to_owned()),
            timestamps: AtomicBool::new(true),
        }
    }

    pub fn prefix(&self) -> String {
        self.prefix.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn set_prefix(
        &self,
        prefix: &str,
    ) {
        *self.prefix.write().unwrap_or_else(PoisonError::into_inner) = prefix.to_owned();
    }

    /// Enable or disable the timestamp between prefix and body
    pub fn set_timestamps(
        &self,
        on: bool,
    ) {
        self.timestamps.store(on, Ordering::Relaxed);
    }

    pub fn render(
        &self,
        body: &str,
    ) -> String {
        let mut line = self.prefix();
        if self.timestamps.load(Ordering::Relaxed) {
            // writing into a String cannot fail
            let _ = write!(line, "{} ", Local::now().format(TIMESTAMP_FORMAT));
        }
        line.push_str(body);
        line.push('\n');
        line
    }

    /// Write one line.
    ///
    /// A failing destination is reported on stderr; the caller carries on.
    pub fn write_line(
        &self,
        body: &str,
    ) {
        let line = self.render(body);
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = out.write_all(line.as_bytes()) {
            eprintln!("envlog: unable to write log line: {}", e);
        }
    }

    pub fn flush(&self) -> io::Result<()> {
        self.out.lock().unwrap_or_else(PoisonError::into_inner).flush()
    }
}
