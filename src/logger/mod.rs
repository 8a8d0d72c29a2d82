mod file;
mod gate;
mod level;
mod logger;
mod macros;
mod registry;
mod sys;
#[cfg(test)]
mod testing;
mod writer;

pub use file::{Destination, LoggerError, prepare_file};
pub use gate::ErrorGate;
pub use level::{Level, Tag, UnknownLevel};
pub use logger::{Logger, panic_message};
pub use registry::{Registry, logger_from_env, new_logger};
pub use sys::{LogFacadeSink, SysSink, bare_format, init_sys_logger, sys_log_spec};
pub use writer::LineWriter;
