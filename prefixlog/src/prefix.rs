// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

//! Templated log line prefixes.
//!
//! A [`PrefixFactory`] owns a template such as `"{{time}} {{level}} "` and one
//! [`TokenResolver`] per token name. [`PrefixFactory::interpolate`] substitutes each
//! token for the level of the current call. Built-in tokens:
//!
//! - `time`: local wall-clock time as `HH:MM:SS`
//! - `level`: the lowercase level name in brackets, e.g. `[info]`
//! - `name`: the name of the logger
//!
//! Additional tokens can be registered with [`PrefixOptions::token`]. Tokens without
//! a resolver are left in the output as they are.

use crate::template;
use crate::{fmt, Identity, Logger};
use std::collections::BTreeMap;
use std::sync::Arc;

/// The template used if none is configured.
pub const DEFAULT_TEMPLATE: &str = "{{time}} {{level}} ";

pub const TIME: &str = "time";
pub const LEVEL: &str = "level";
pub const NAME: &str = "name";

/// What a resolver gets to see.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    /// The logger the factory was created for.
    pub logger: &'a Identity,
    /// Lowercase name of the level of the current call.
    pub level: &'a str,
}

type Compute = dyn Fn(&Context<'_>) -> String + Send + Sync;

/// Produces the replacement of one token.
#[derive(Clone)]
pub enum TokenResolver {
    /// Used as it is.
    Literal(String),
    /// Invoked on every interpolation.
    Computed(Arc<Compute>),
}

impl TokenResolver {
    pub fn literal(value: impl Into<String>) -> Self {
        TokenResolver::Literal(value.into())
    }

    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&Context<'_>) -> String + Send + Sync + 'static,
    {
        TokenResolver::Computed(Arc::new(f))
    }

    pub fn resolve(&self, context: &Context<'_>) -> String {
        match self {
            TokenResolver::Literal(value) => value.clone(),
            TokenResolver::Computed(f) => f(context),
        }
    }
}

impl std::fmt::Debug for TokenResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenResolver::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            TokenResolver::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl From<&str> for TokenResolver {
    fn from(value: &str) -> Self {
        TokenResolver::Literal(value.to_owned())
    }
}

impl From<String> for TokenResolver {
    fn from(value: String) -> Self {
        TokenResolver::Literal(value)
    }
}

/// Overrides for a [`PrefixFactory`]. Anything not set falls back to the defaults.
#[derive(Debug, Clone, Default)]
pub struct PrefixOptions {
    time: Option<TokenResolver>,
    level: Option<TokenResolver>,
    name: Option<TokenResolver>,
    template: Option<String>,
    tokens: BTreeMap<String, TokenResolver>,
}

impl PrefixOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn time(mut self, resolver: impl Into<TokenResolver>) -> Self {
        self.time = Some(resolver.into());
        self
    }

    pub fn level(mut self, resolver: impl Into<TokenResolver>) -> Self {
        self.level = Some(resolver.into());
        self
    }

    pub fn name(mut self, resolver: impl Into<TokenResolver>) -> Self {
        self.name = Some(resolver.into());
        self
    }

    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Register a resolver for an arbitrary token. Registering `time`, `level` or
    /// `name` here overrides the default unless the dedicated setter is used as well.
    pub fn token(mut self, name: impl Into<String>, resolver: impl Into<TokenResolver>) -> Self {
        self.tokens.insert(name.into(), resolver.into());
        self
    }
}

fn default_time() -> TokenResolver {
    TokenResolver::computed(|_| fmt::clock(fmt::now()))
}

fn default_level() -> TokenResolver {
    TokenResolver::computed(|context| format!("[{}]", context.level))
}

fn default_name() -> TokenResolver {
    TokenResolver::computed(|context| context.logger.name().to_owned())
}

/// Computes the prefix of every line written by a [`Logger`].
#[derive(Debug, Clone)]
pub struct PrefixFactory {
    logger: Arc<Identity>,
    resolvers: BTreeMap<String, TokenResolver>,
    template: String,
}

impl PrefixFactory {
    /// Create a factory for `logger`. Install it with [`Logger::set_factory`].
    pub fn new(logger: &Logger, options: PrefixOptions) -> Self {
        Self::bind(logger.shared_identity(), options)
    }

    pub(crate) fn bind(logger: Arc<Identity>, options: PrefixOptions) -> Self {
        let PrefixOptions {
            time,
            level,
            name,
            template,
            tokens,
        } = options;

        let mut resolvers = BTreeMap::from([
            (TIME.to_owned(), default_time()),
            (LEVEL.to_owned(), default_level()),
            (NAME.to_owned(), default_name()),
        ]);
        resolvers.extend(tokens);
        let overrides = [(TIME, time), (LEVEL, level), (NAME, name)];
        for (token, resolver) in overrides {
            if let Some(resolver) = resolver {
                resolvers.insert(token.to_owned(), resolver);
            }
        }

        Self {
            logger,
            resolvers,
            template: template.unwrap_or_else(|| DEFAULT_TEMPLATE.to_owned()),
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// The logger the factory resolves `name` and friends against.
    pub fn logger(&self) -> &Identity {
        &self.logger
    }

    /// The resolver configured for `token`, if any.
    pub fn resolver(&self, token: &str) -> Option<&TokenResolver> {
        self.resolvers.get(token)
    }

    /// Resolve a single token for `level`.
    pub fn resolve(&self, token: &str, level: &str) -> Option<String> {
        let context = Context {
            logger: &self.logger,
            level,
        };
        self.resolver(token).map(|r| r.resolve(&context))
    }

    /// Render the template for a call on `level`. Unknown tokens are kept verbatim.
    pub fn interpolate(&self, level: &str) -> String {
        let context = Context {
            logger: &self.logger,
            level,
        };
        template::render(&self.template, |token| {
            self.resolvers.get(token).map(|r| r.resolve(&context))
        })
    }
}
