// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

use crate::args::Arg;
use crate::fmt;
use console::{style, Term};
use log::Level;
use std::io;

/// Destination of prefixed log calls.
pub trait Sink: std::fmt::Debug + Send + Sync {
    /// Write one log call. The first argument already carries the prefix.
    fn write(&self, level: Level, args: &[Arg<'_>]) -> io::Result<()>;

    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}

/// Writes one line per call to the terminal. `warn` and `error` go to stderr,
/// everything else to stdout.
#[derive(Debug, Default)]
pub struct Console {
    colored: bool,
}

impl Console {
    /// Monochrome console.
    pub fn new() -> Self {
        Self::default()
    }

    /// Console that colors each line by level if the terminal supports it.
    pub fn colored() -> Self {
        Self { colored: true }
    }

    fn is_stderr(level: Level) -> bool {
        matches!(level, Level::Error | Level::Warn)
    }

    fn term(level: Level) -> Term {
        if Self::is_stderr(level) {
            Term::stderr()
        } else {
            Term::stdout()
        }
    }

    /// Color `line` by level. Whether colors are emitted follows the stream the line goes to.
    fn paint(level: Level, line: String) -> String {
        let styled = style(line).fg(fmt::level_color(level));
        if Self::is_stderr(level) {
            styled.for_stderr().to_string()
        } else {
            styled.for_stdout().to_string()
        }
    }
}

impl Sink for Console {
    fn write(&self, level: Level, args: &[Arg<'_>]) -> io::Result<()> {
        let line = fmt::join(args);
        let line = if self.colored {
            Self::paint(level, line)
        } else {
            line
        };
        Self::term(level).write_line(&line)
    }

    fn flush(&self) -> io::Result<()> {
        Term::stdout().flush()?;
        Term::stderr().flush()
    }
}
