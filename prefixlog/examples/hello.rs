// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

use anyhow::Error;
use log::{error, info, log, warn, Level, LevelFilter};
use prefixlog::{
    Arg, Console, Logger, LoggerConfig, LoggerOptions, Loggers, PrefixFactory, PrefixOptions,
    TokenResolver,
};
use std::collections::BTreeMap;

fn main() -> Result<(), Error> {
    // A standalone logger with the default `{{time}} {{level}} ` prefix.
    let log = Logger::with_sink(
        LoggerOptions::new("hello").level(LevelFilter::Trace),
        Console::colored(),
    );
    log.info("Kick it");

    // Non-text arguments are passed on after the prefix.
    let homework: BTreeMap<&str, u32> = BTreeMap::from([("math", 2), ("history", 1)]);
    log.warn([Arg::text("missed"), Arg::value(&homework)]);
    log.warn(Arg::value(&homework));

    // Swap the prefix at runtime.
    let shouting = PrefixFactory::new(
        &log,
        PrefixOptions::new()
            .name(TokenResolver::computed(|c| c.logger.name().to_uppercase()))
            .template("{{time}} {{level}} ({{name}}) "),
    );
    log.set_factory(shouting);
    log.error("And no homework");

    // Loggers from a declarative config, kept by name.
    let loggers = Loggers::new();
    let config = LoggerConfig::from_json(
        r#"{
            "level": "debug",
            "name": "school",
            "prefix": { "template": "{{app}}/{{name}} {{level}} ", "tokens": { "app": "hello" } }
        }"#,
    )?;
    let school = loggers.get_or_create(config.try_into()?);
    school.debug("You wake up late for school, man you don't want to go");
    school.trace("suppressed");

    // Route the `log` macros through a prefixing logger.
    prefixlog::init(
        LoggerOptions::new("facade")
            .level(LevelFilter::Info)
            .prefix(PrefixOptions::new().template("{{time}} {{level}} {{name}}: ")),
    )?;
    log!(
        Level::Info,
        "You ask your mom, please? but she still says, {}!",
        "No"
    );
    warn!("You missed two classes");
    error!("And no homework");
    info!("{:?}", loggers.names());

    Ok(())
}
