// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

use crate::{Logger, LoggerOptions};
use log::debug;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Named loggers. Every name maps to exactly one logger.
#[derive(Debug, Default)]
pub struct Loggers {
    loggers: Mutex<BTreeMap<String, Arc<Logger>>>,
}

impl Loggers {
    pub fn new() -> Self {
        Self::default()
    }

    /// The logger called `options.name`. It is created from `options` on first use,
    /// later calls return the existing logger and ignore `options`.
    pub fn get_or_create(&self, options: LoggerOptions) -> Arc<Logger> {
        let mut loggers = self.lock();
        if let Some(logger) = loggers.get(&options.name) {
            return logger.clone();
        }

        debug!("Creating logger {:?}", options.name);
        let name = options.name.clone();
        let logger = Arc::new(Logger::new(options));
        loggers.insert(name, logger.clone());
        logger
    }

    /// Insert `logger` under its name. Returns the logger previously registered under that name.
    pub fn insert(&self, logger: Logger) -> Option<Arc<Logger>> {
        let name = logger.name().to_owned();
        self.lock().insert(name, Arc::new(logger))
    }

    pub fn get(&self, name: &str) -> Option<Arc<Logger>> {
        self.lock().get(name).cloned()
    }

    pub fn remove(&self, name: &str) -> Option<Arc<Logger>> {
        self.lock().remove(name)
    }

    /// Names of all registered loggers, sorted.
    pub fn names(&self) -> Vec<String> {
        self.lock().keys().cloned().collect()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, Arc<Logger>>> {
        self.loggers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod test {
    use super::Loggers;
    use crate::{LoggerOptions, PrefixFactory, PrefixOptions};
    use log::LevelFilter;
    use std::sync::Arc;

    #[test]
    fn same_name_same_logger() {
        let loggers = Loggers::new();
        let a = loggers.get_or_create(LoggerOptions::new("a").level(LevelFilter::Info));
        let again = loggers.get_or_create(LoggerOptions::new("a").level(LevelFilter::Trace));
        assert!(Arc::ptr_eq(&a, &again));
        assert_eq!(again.level(), LevelFilter::Info);

        let b = loggers.get_or_create(LoggerOptions::new("b"));
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(loggers.names(), ["a", "b"]);
    }

    #[test]
    fn level_changes_are_shared() {
        let loggers = Loggers::new();
        let a = loggers.get_or_create(LoggerOptions::new("a"));
        a.disable();
        assert_eq!(loggers.get("a").unwrap().level(), LevelFilter::Off);
    }

    #[test]
    fn factory_replaced_through_shared_logger() {
        let loggers = Loggers::new();
        let school = loggers.get_or_create(LoggerOptions::new("school"));
        let factory = PrefixFactory::new(&school, PrefixOptions::new().template("{{name}}> "));
        school.set_factory(factory);

        let again = loggers.get("school").unwrap();
        assert_eq!(again.factory().interpolate("info"), "school> ");
        assert_eq!(again.factory().template(), "{{name}}> ");
    }

    #[test]
    fn insert_get_remove() {
        let loggers = Loggers::new();
        assert!(loggers.get("x").is_none());
        assert!(loggers
            .insert(crate::Logger::new(LoggerOptions::new("x")))
            .is_none());
        assert!(loggers
            .insert(crate::Logger::new(LoggerOptions::new("x")))
            .is_some());
        assert_eq!(loggers.remove("x").unwrap().name(), "x");
        assert!(loggers.names().is_empty());
    }
}
