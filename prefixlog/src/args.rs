// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

//! Arguments of a log call.

use std::borrow::Cow;
use std::fmt;

/// A single log argument. Text is prefixed, values are passed on untouched.
pub enum Arg<'a> {
    Text(Cow<'a, str>),
    Value(&'a dyn fmt::Debug),
}

impl<'a> Arg<'a> {
    /// Create a text argument.
    pub fn text(text: impl Into<Cow<'a, str>>) -> Self {
        Arg::Text(text.into())
    }

    /// Create a value argument borrowing `value`.
    pub fn value<T: fmt::Debug>(value: &'a T) -> Self {
        Arg::Value(value)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Arg::Text(text) => Some(text.as_ref()),
            Arg::Value(_) => None,
        }
    }

    pub fn as_value(&self) -> Option<&'a dyn fmt::Debug> {
        match self {
            Arg::Text(_) => None,
            Arg::Value(value) => Some(*value),
        }
    }
}

impl fmt::Debug for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Arg::Value(value) => f.debug_tuple("Value").field(value).finish(),
        }
    }
}

/// Text verbatim, values in their `Debug` form.
impl fmt::Display for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Text(text) => f.write_str(text),
            Arg::Value(value) => write!(f, "{value:?}"),
        }
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(text: &'a str) -> Self {
        Arg::Text(Cow::Borrowed(text))
    }
}

impl From<String> for Arg<'_> {
    fn from(text: String) -> Self {
        Arg::Text(Cow::Owned(text))
    }
}

/// The ordered arguments of one log call.
#[derive(Debug, Default)]
pub struct Args<'a>(Vec<Arg<'a>>);

impl<'a> Args<'a> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append an argument.
    pub fn with(mut self, arg: impl Into<Arg<'a>>) -> Self {
        self.0.push(arg.into());
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<Arg<'a>> {
        self.0
    }
}

impl<'a> From<&'a str> for Args<'a> {
    fn from(text: &'a str) -> Self {
        Self(vec![text.into()])
    }
}

impl<'a> From<&'a String> for Args<'a> {
    fn from(text: &'a String) -> Self {
        Self(vec![text.as_str().into()])
    }
}

impl From<String> for Args<'_> {
    fn from(text: String) -> Self {
        Self(vec![text.into()])
    }
}

impl From<fmt::Arguments<'_>> for Args<'_> {
    fn from(args: fmt::Arguments<'_>) -> Self {
        Self(vec![Arg::Text(Cow::Owned(args.to_string()))])
    }
}

impl<'a> From<Arg<'a>> for Args<'a> {
    fn from(arg: Arg<'a>) -> Self {
        Self(vec![arg])
    }
}

impl<'a> From<Vec<Arg<'a>>> for Args<'a> {
    fn from(args: Vec<Arg<'a>>) -> Self {
        Self(args)
    }
}

impl<'a, const N: usize> From<[Arg<'a>; N]> for Args<'a> {
    fn from(args: [Arg<'a>; N]) -> Self {
        Self(args.into())
    }
}

#[cfg(test)]
mod test {
    use super::{Arg, Args};
    use std::collections::BTreeMap;

    #[test]
    fn display() {
        let map = BTreeMap::from([("a", 1)]);
        assert_eq!(Arg::from("foo").to_string(), "foo");
        assert_eq!(Arg::value(&map).to_string(), r#"{"a": 1}"#);
        assert_eq!(Arg::value(&"quoted").to_string(), r#""quoted""#);
    }

    #[test]
    fn conversions() {
        let args = Args::from("foo");
        assert_eq!(args.len(), 1);
        assert_eq!(args.into_inner()[0].as_text(), Some("foo"));

        let answer = 42;
        let args = Args::from([Arg::value(&answer), Arg::text("tail")]);
        let args = args.into_inner();
        assert!(args[0].as_text().is_none());
        assert_eq!(format!("{:?}", args[0].as_value().unwrap()), "42");
        assert_eq!(args[1].as_text(), Some("tail"));

        let args = Args::from(format_args!("{}-{}", 1, 2));
        assert_eq!(args.into_inner()[0].as_text(), Some("1-2"));

        assert!(Args::new().is_empty());
        assert_eq!(Args::new().with("a").with(Arg::value(&1)).len(), 2);
    }
}
