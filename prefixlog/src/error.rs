// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

//! prefixlog Error implementation

use std::io;

/// prefixlog Error type
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    /// A level name that is neither a `log` level nor `silent`.
    InvalidLevel(String),
    Config(String),
    Io(io::Error),
    /// A global logger was already installed.
    SetLogger,
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::InvalidLevel(level) => write!(f, "Invalid level: {level:?}"),
            Error::Config(description) => write!(f, "Config error, {}", description),
            Error::Io(e) => write!(f, "Io error: {}", e),
            Error::SetLogger => write!(f, "a global logger is already set"),
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<log::SetLoggerError> for Error {
    fn from(_: log::SetLoggerError) -> Self {
        Error::SetLogger
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(e.to_string())
    }
}
