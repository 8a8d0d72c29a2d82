use std::{
    io::{self, Write},
    sync::{Arc, Mutex, PoisonError},
};

use crate::logger::{SysSink, Tag};

/// In-memory destination whose clones share one buffer
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.inner.lock().unwrap_or_else(PoisonError::into_inner)).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }
}

impl Write for SharedBuffer {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Keeps every forwarded line in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<(Tag, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<(Tag, String)> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).is_empty()
    }
}

impl SysSink for MemorySink {
    fn write_line(
        &self,
        tag: Tag,
        line: &str,
    ) {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).push((tag, line.to_owned()));
    }
}
