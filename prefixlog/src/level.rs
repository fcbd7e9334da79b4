// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

//! Severity names and thresholds.

use crate::error::Error;
use log::{Level, LevelFilter};
use std::str::FromStr;

/// Threshold name that suppresses every severity. Same as `off`.
pub const SILENT: &str = "silent";

/// Lowercase name of `level`. This is what the `level` token resolver receives.
pub fn name(level: Level) -> &'static str {
    match level {
        Level::Error => "error",
        Level::Warn => "warn",
        Level::Info => "info",
        Level::Debug => "debug",
        Level::Trace => "trace",
    }
}

/// Parse a threshold name, case-insensitive. Accepts the `log` level names, `off` and `silent`.
pub fn parse_filter(s: &str) -> Result<LevelFilter, Error> {
    if s.eq_ignore_ascii_case(SILENT) {
        return Ok(LevelFilter::Off);
    }
    LevelFilter::from_str(s).map_err(|_| Error::InvalidLevel(s.to_owned()))
}

pub(crate) fn filter_to_usize(filter: LevelFilter) -> usize {
    filter as usize
}

pub(crate) fn filter_from_usize(n: usize) -> LevelFilter {
    match n {
        0 => LevelFilter::Off,
        1 => LevelFilter::Error,
        2 => LevelFilter::Warn,
        3 => LevelFilter::Info,
        4 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn names_are_lowercase() {
        assert_eq!(name(Level::Info), "info");
        assert_eq!(name(Level::Trace), "trace");
        assert_eq!(name(Level::Error), "error");
    }

    #[test]
    fn parse() {
        assert_eq!(parse_filter("trace").unwrap(), LevelFilter::Trace);
        assert_eq!(parse_filter("WARN").unwrap(), LevelFilter::Warn);
        assert_eq!(parse_filter("silent").unwrap(), LevelFilter::Off);
        assert_eq!(parse_filter("off").unwrap(), LevelFilter::Off);
        assert!(matches!(
            parse_filter("loud"),
            Err(Error::InvalidLevel(s)) if s == "loud"
        ));
    }

    #[test]
    fn usize_conversion() {
        for filter in LevelFilter::iter() {
            assert_eq!(filter_from_usize(filter_to_usize(filter)), filter);
        }
    }
}
