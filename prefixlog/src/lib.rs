// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

//! prefixlog
//!
//! A leveled logger that prepends a templated prefix to every line.
//!
//! ```no_run
//! use prefixlog::{Logger, LoggerOptions, PrefixOptions};
//! use log::LevelFilter;
//!
//! let log = Logger::new(
//!     LoggerOptions::new("app")
//!         .level(LevelFilter::Trace)
//!         .prefix(PrefixOptions::new().template("{{time}} {{level}} ({{name}}) ")),
//! );
//! log.info("started"); // 12:00:00 [info] (app) started
//! ```

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

pub mod args;
pub mod config;
pub mod console;
pub mod error;
pub mod fmt;
pub mod level;
pub mod prefix;
mod registry;
pub mod template;

pub use args::{Arg, Args};
pub use config::LoggerConfig;
pub use console::{Console, Sink};
pub use error::Error;
pub use prefix::{Context, PrefixFactory, PrefixOptions, TokenResolver};
pub use registry::Loggers;

const ENV_RUST_LOG: &str = "RUST_LOG";

/// Initialize a logger from `options` and install it as the `log` backend.
///
/// A valid level passed as `RUST_LOG` environment variable overrides `options.level`.
pub fn init(options: LoggerOptions) -> Result<(), Error> {
    let level = level_from_env().unwrap_or(options.level);
    let logger = Logger::new(options);
    logger.set_level(level);

    // Set the maximum log level the log subsystem will forward to this logger impl.
    log::set_max_level(level);
    // Set the logger in the global subsystem.
    log::set_boxed_logger(Box::new(logger))?;
    Ok(())
}

/// Options of a [`Logger`].
#[derive(Debug, Clone)]
pub struct LoggerOptions {
    /// Calls below this level are dropped before any prefix is computed.
    pub level: LevelFilter,
    /// Exposed to resolvers as `{{name}}`.
    pub name: String,
    /// Configuration of the default prefix factory.
    pub prefix: PrefixOptions,
}

impl LoggerOptions {
    /// Options for a logger called `name` at level `warn` with the default prefix.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            level: LevelFilter::Warn,
            name: name.into(),
            prefix: PrefixOptions::default(),
        }
    }

    pub fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Set the level by name, e.g. `"trace"` or `"silent"`.
    pub fn level_name(mut self, level: &str) -> Result<Self, Error> {
        self.level = level::parse_filter(level)?;
        Ok(self)
    }

    pub fn prefix(mut self, prefix: PrefixOptions) -> Self {
        self.prefix = prefix;
        self
    }
}

/// Name and current level of a logger. Shared with the logger's prefix factories.
#[derive(Debug)]
pub struct Identity {
    name: String,
    level: AtomicUsize,
}

impl Identity {
    pub(crate) fn new(name: impl Into<String>, level: LevelFilter) -> Self {
        Self {
            name: name.into(),
            level: AtomicUsize::new(level::filter_to_usize(level)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> LevelFilter {
        level::filter_from_usize(self.level.load(Ordering::Relaxed))
    }

    pub(crate) fn set_level(&self, level: LevelFilter) {
        self.level
            .store(level::filter_to_usize(level), Ordering::Relaxed);
    }
}

/// The prefixing logger.
pub struct Logger {
    identity: Arc<Identity>,
    factory: RwLock<PrefixFactory>,
    sink: Box<dyn Sink>,
}

impl Logger {
    /// Create a logger writing to the console.
    pub fn new(options: LoggerOptions) -> Self {
        Self::with_sink(options, Console::default())
    }

    /// Create a logger writing to `sink`.
    pub fn with_sink<S: Sink + 'static>(options: LoggerOptions, sink: S) -> Self {
        let LoggerOptions {
            level,
            name,
            prefix,
        } = options;
        let identity = Arc::new(Identity::new(name, level));
        let factory = PrefixFactory::bind(identity.clone(), prefix);
        Self {
            identity,
            factory: RwLock::new(factory),
            sink: Box::new(sink),
        }
    }

    pub fn name(&self) -> &str {
        self.identity.name()
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub(crate) fn shared_identity(&self) -> Arc<Identity> {
        self.identity.clone()
    }

    pub fn level(&self) -> LevelFilter {
        self.identity.level()
    }

    pub fn set_level(&self, level: LevelFilter) {
        self.identity.set_level(level);
    }

    /// Set the level by name. The level stays unchanged if `level` is invalid.
    pub fn set_level_name(&self, level: &str) -> Result<(), Error> {
        self.set_level(level::parse_filter(level)?);
        Ok(())
    }

    /// Log everything.
    pub fn enable(&self) {
        self.set_level(LevelFilter::Trace);
    }

    /// Log nothing.
    pub fn disable(&self) {
        self.set_level(LevelFilter::Off);
    }

    /// Check if a call on `level` would be written.
    pub fn is_enabled(&self, level: Level) -> bool {
        level <= self.level()
    }

    /// The current prefix factory. Hold the guard only briefly, log calls wait
    /// for it when the factory is replaced.
    pub fn factory(&self) -> RwLockReadGuard<'_, PrefixFactory> {
        self.factory.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the prefix factory. Takes effect with the next call. Returns the previous factory.
    pub fn set_factory(&self, factory: PrefixFactory) -> PrefixFactory {
        let mut current = self.factory.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *current, factory)
    }

    /// Prefix `args` and write them to the sink.
    ///
    /// A text first argument is written as `prefix + text`. Any other first argument
    /// is written unchanged after a separate prefix argument. Calls below the level
    /// return before the prefix is computed. Panics of resolvers are not caught.
    pub fn log<'a>(&self, level: Level, args: impl Into<Args<'a>>) -> Result<(), Error> {
        if !self.is_enabled(level) {
            return Ok(());
        }

        // The read guard is released before the sink is called.
        let prefix = self.factory().interpolate(level::name(level));

        let args: Args<'a> = args.into();
        let mut args = args.into_inner().into_iter();
        let mut line = Vec::with_capacity(args.len() + 1);
        match args.next() {
            Some(Arg::Text(text)) => line.push(Arg::from(prefix + &*text)),
            Some(value) => {
                line.push(Arg::from(prefix));
                line.push(value);
            }
            None => line.push(Arg::from(prefix)),
        }
        line.extend(args);

        self.sink.write(level, &line)?;
        Ok(())
    }

    pub fn trace<'a>(&self, args: impl Into<Args<'a>>) {
        let _ = self.log(Level::Trace, args);
    }

    pub fn debug<'a>(&self, args: impl Into<Args<'a>>) {
        let _ = self.log(Level::Debug, args);
    }

    pub fn info<'a>(&self, args: impl Into<Args<'a>>) {
        let _ = self.log(Level::Info, args);
    }

    pub fn warn<'a>(&self, args: impl Into<Args<'a>>) {
        let _ = self.log(Level::Warn, args);
    }

    pub fn error<'a>(&self, args: impl Into<Args<'a>>) {
        let _ = self.log(Level::Error, args);
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name())
            .field("level", &self.level())
            .field("template", &self.factory().template())
            .field("sink", &self.sink)
            .finish()
    }
}

impl Log for Logger {
    /// Check if a log message with the specified metadata would be logged.
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.is_enabled(metadata.level())
    }

    fn log(&self, record: &Record) {
        let _ = Logger::log(self, record.level(), *record.args());
    }

    fn flush(&self) {
        let _ = self.sink.flush();
    }
}

/// Try to parse the log level from the environment variable `RUST_LOG`.
fn level_from_env() -> Option<LevelFilter> {
    std::env::var(ENV_RUST_LOG).ok().and_then(|s| {
        LevelFilter::from_str(&s)
            .inspect_err(|_| eprintln!("Failed to parse log level from `RUST_LOG={s}`"))
            .ok()
    })
}
