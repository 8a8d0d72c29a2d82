use std::{
    collections::HashMap,
    sync::{Arc, Mutex, OnceLock, PoisonError},
};

use crate::{
    config::{ConfigWarning, EnvConfig, env_value},
    logger::{Level, Logger, LoggerError},
};

/// Loggers built from the environment, one per namespace.
///
/// The map lock is held while a logger is being built, so concurrent first
/// requests for a namespace open the destination once.
#[derive(Debug, Default)]
pub struct Registry {
    loggers: Mutex<HashMap<String, Arc<Logger>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry backing [`logger_from_env`]
    pub fn global() -> &'static Registry {
        static GLOBAL: OnceLock<Registry> = OnceLock::new();
        GLOBAL.get_or_init(Registry::new)
    }

    /// Cached logger for `namespace`, if any
    pub fn get(
        &self,
        namespace: &str,
    ) -> Option<Arc<Logger>> {
        self.lock().get(namespace).cloned()
    }

    /// Logger configured from the `{namespace}LOG_*` process variables.
    ///
    /// Returns the cached instance unless `force` is set or none exists yet.
    ///
    /// # Panics
    ///
    /// When a new logger is needed and its destination cannot be prepared.
    pub fn get_or_create(
        &self,
        namespace: &str,
        force: bool,
    ) -> Arc<Logger> {
        self.get_or_create_with(namespace, force, env_value)
    }

    /// Same as [`Registry::get_or_create`] reading variables through `lookup`
    pub fn get_or_create_with<F>(
        &self,
        namespace: &str,
        force: bool,
        lookup: F,
    ) -> Arc<Logger>
    where
        F: Fn(&str) -> Option<String>,
    {
        match self.try_get_or_create_with(namespace, force, lookup) {
            Ok(logger) => logger,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn try_get_or_create_with<F>(
        &self,
        namespace: &str,
        force: bool,
        lookup: F,
    ) -> Result<Arc<Logger>, LoggerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut loggers = self.lock();
        if !force && let Some(logger) = loggers.get(namespace) {
            return Ok(logger.clone());
        }

        let config = EnvConfig::resolve(namespace, lookup).report();
        let logger = Arc::new(
            Logger::try_new(&config.log_file, &config.prefix, config.level, config.sys_log)?.with_namespace(namespace),
        );
        loggers.insert(namespace.to_owned(), logger.clone());
        Ok(logger)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Arc<Logger>>> {
        self.loggers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Shared logger for `namespace` from the process-wide [`Registry`]
pub fn logger_from_env(
    namespace: &str,
    force: bool,
) -> Arc<Logger> {
    Registry::global().get_or_create(namespace, force)
}

/// Build a logger from explicit parameters, bypassing the environment.
///
/// An unknown `level` falls back to `info` with a bootstrap warning.
///
/// # Panics
///
/// When the destination cannot be prepared.
pub fn new_logger(
    path: &str,
    prefix: &str,
    level: &str,
    sys_log: bool,
) -> Logger {
    let level = level.parse::<Level>().unwrap_or_else(|e| {
        ConfigWarning::InvalidLogLevel {
            var: "level".into(),
            value: e.0,
        }
        .report();
        Level::default()
    });
    Logger::new(path, prefix, level, sys_log)
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, path::Path, thread};

    use super::*;

    fn env_for(
        namespace: &str,
        file: &Path,
        level: &str,
    ) -> HashMap<String, String> {
        HashMap::from([
            (format!("{namespace}LOG_SYSLOG"), "false".to_owned()),
            (format!("{namespace}LOG_FILE"), file.to_str().unwrap().to_owned()),
            (format!("{namespace}LOG_LEVEL"), level.to_owned()),
            (format!("{namespace}LOG_PREFIX"), "test -- ".to_owned()),
        ])
    }

    #[test]
    fn test_cached_until_forced() {
        let tmp = tempfile::tempdir().unwrap();
        let registry = Registry::new();

        let env = env_for("TEST_", &tmp.path().join("a.log"), "trace");
        let first = registry.get_or_create_with("TEST_", false, |n| env.get(n).cloned());
        assert_eq!(first.level(), Level::Trace);
        assert_eq!(first.namespace(), "TEST_");
        assert_eq!(first.prefix(), "test -- ");

        // changed environment is ignored without force
        let env = env_for("TEST_", &tmp.path().join("b.log"), "error");
        let second = registry.get_or_create_with("TEST_", false, |n| env.get(n).cloned());
        assert!(Arc::ptr_eq(&first, &second));
        assert!(!tmp.path().join("b.log").exists());

        let forced = registry.get_or_create_with("TEST_", true, |n| env.get(n).cloned());
        assert!(!Arc::ptr_eq(&first, &forced));
        assert_eq!(forced.level(), Level::Error);
        assert!(tmp.path().join("b.log").exists());
        assert!(Arc::ptr_eq(&registry.get("TEST_").unwrap(), &forced));
    }

    #[test]
    fn test_namespaces_are_independent() {
        let tmp = tempfile::tempdir().unwrap();
        let registry = Registry::new();
        let a = env_for("A_", &tmp.path().join("a.log"), "debug");
        let b = env_for("B_", &tmp.path().join("b.log"), "warning");

        let la = registry.get_or_create_with("A_", false, |n| a.get(n).cloned());
        let lb = registry.get_or_create_with("B_", false, |n| b.get(n).cloned());
        assert!(Arc::ptr_eq(&registry.get("B_").unwrap(), &lb));
        assert_eq!(la.level(), Level::Debug);
        assert_eq!(lb.level(), Level::Warning);
        assert!(Arc::ptr_eq(&la, &registry.get_or_create_with("A_", false, |_| None)));
    }

    #[test]
    fn test_invalid_env_defaults() {
        let registry = Registry::new();
        let env = HashMap::from([
            ("W_LOG_FILE".to_owned(), "".to_owned()),
            ("W_LOG_LEVEL".to_owned(), "verbose".to_owned()),
            ("W_LOG_SYSLOG".to_owned(), "maybe".to_owned()),
        ]);
        let logger = registry.get_or_create_with("W_", false, |n| env.get(n).cloned());
        assert_eq!(logger.level(), Level::Info);
        assert!(!logger.sys_log());
        assert_eq!(logger.prefix(), "");
    }

    #[test]
    fn test_error_is_not_cached() {
        let tmp = tempfile::tempdir().unwrap();
        let registry = Registry::new();
        let env = env_for("", tmp.path(), "info");
        let res = registry.try_get_or_create_with("", false, |n| env.get(n).cloned());
        assert!(matches!(res, Err(LoggerError::Open { .. })));
        assert!(registry.get("").is_none());
    }

    #[test]
    fn test_concurrent_first_request_builds_once() {
        let tmp = tempfile::tempdir().unwrap();
        let registry = Arc::new(Registry::new());
        let env = Arc::new(env_for("C_", &tmp.path().join("c.log"), "info"));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = registry.clone();
                let env = env.clone();
                thread::spawn(move || registry.get_or_create_with("C_", false, |n| env.get(n).cloned()))
            })
            .collect();
        let loggers: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(loggers.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    }

    #[test]
    fn test_new_logger_unknown_level() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("x.log");
        let logger = new_logger(path.to_str().unwrap(), "app: ", "verbose", false);
        assert_eq!(logger.level(), Level::Info);
        assert_eq!(logger.namespace(), "");
    }
}
