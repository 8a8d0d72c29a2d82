//! `format!`-style shorthands for the `*f` and `*e` logger methods.
//!
//! ```no_run
//! use envlog::{errore, infof, logger_from_env};
//!
//! let log = logger_from_env("APP_", false);
//! infof!(log, "listening on {}", 8080);
//! let res: Result<(), std::io::Error> = Ok(());
//! errore!(log, &res, "bind failed: {:?}", res);
//! ```

#[macro_export]
macro_rules! tracef {
    ($logger:expr, $($arg:tt)+) => {
        $logger.tracef(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! warningf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warningf(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! panicf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.panicf(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! recoverf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.recoverf(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! fatalf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatalf(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! sysf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.sysf(format_args!($($arg)+))
    };
}

/// Logs a warning when the gate holds an error
#[macro_export]
macro_rules! warninge {
    ($logger:expr, $err:expr, $($arg:tt)+) => {
        $logger.warninge($err, format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! errore {
    ($logger:expr, $err:expr, $($arg:tt)+) => {
        $logger.errore($err, format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! panice {
    ($logger:expr, $err:expr, $($arg:tt)+) => {
        $logger.panice($err, format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! fatale {
    ($logger:expr, $err:expr, $($arg:tt)+) => {
        $logger.fatale($err, format_args!($($arg)+))
    };
}
