// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

use crate::args::Arg;
use console::Color;
use log::Level;
use std::fmt::Write;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

const CLOCK_FORMAT: &[FormatItem<'static>] = format_description!("[hour]:[minute]:[second]");

/// Current wall-clock time. Falls back to UTC if the local offset cannot be determined.
pub fn now() -> OffsetDateTime {
    local_or_utc(OffsetDateTime::now_local())
}

fn local_or_utc<E>(local: Result<OffsetDateTime, E>) -> OffsetDateTime {
    local.unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// Format `timestamp` as `HH:MM:SS`, 24 hour and zero padded.
pub fn clock(timestamp: OffsetDateTime) -> String {
    timestamp.format(CLOCK_FORMAT).unwrap_or_else(|_| {
        format!(
            "{:02}:{:02}:{:02}",
            timestamp.hour(),
            timestamp.minute(),
            timestamp.second()
        )
    })
}

pub fn level_color(level: Level) -> Color {
    match level {
        Level::Error => Color::Red,
        Level::Warn => Color::Yellow,
        Level::Info => Color::Green,
        Level::Debug => Color::Color256(243),
        Level::Trace => Color::White,
    }
}

/// Join `args` into one line separated by single spaces.
pub fn join(args: &[Arg<'_>]) -> String {
    let mut line = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        // Writing to a String never fails.
        let _ = write!(line, "{arg}");
    }
    line
}
