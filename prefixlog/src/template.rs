// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

//! `{{token}}` substitution.
//!
//! A placeholder is `{{`, a token name without braces, and `}}`. Substitution is a
//! single left-to-right pass. Resolved values are copied to the output as they are
//! and never scanned again.

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Replace every placeholder in `template` for which `resolve` returns a value.
/// Placeholders `resolve` doesn't know are copied verbatim, as is any `{{` that
/// doesn't start a placeholder.
pub fn render<F>(template: &str, mut resolve: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        let after = &rest[start + OPEN.len()..];
        match after.find(|c: char| c == '{' || c == '}') {
            Some(end) if after[end..].starts_with(CLOSE) => {
                out.push_str(&rest[..start]);
                let token = &after[..end];
                match resolve(token) {
                    Some(value) => out.push_str(&value),
                    None => {
                        out.push_str(OPEN);
                        out.push_str(token);
                        out.push_str(CLOSE);
                    }
                }
                rest = &after[end + CLOSE.len()..];
            }
            _ => {
                // No placeholder starts here. Retry one byte further.
                out.push_str(&rest[..=start]);
                rest = &rest[start + 1..];
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod test {
    use super::render;

    fn lookup(token: &str) -> Option<String> {
        match token {
            "time" => Some("12:34:56".to_owned()),
            "level" => Some("[info]".to_owned()),
            "name" => Some("test".to_owned()),
            "recursive" => Some("{{name}}".to_owned()),
            _ => None,
        }
    }

    #[test]
    fn substitutes_known_tokens() {
        assert_eq!(render("{{time}} {{level}} ", lookup), "12:34:56 [info] ");
        assert_eq!(render("({{name}})", lookup), "(test)");
        assert_eq!(render("{{name}}{{name}}", lookup), "testtest");
    }

    #[test]
    fn unknown_tokens_pass_through() {
        assert_eq!(
            render("{{time}} {{nope}}-", lookup),
            "12:34:56 {{nope}}-"
        );
        assert_eq!(render("{{}}", lookup), "{{}}");
        assert_eq!(render("{{ name }}", lookup), "{{ name }}");
    }

    #[test]
    fn no_recursive_expansion() {
        assert_eq!(render("<{{recursive}}>", lookup), "<{{name}}>");
    }

    #[test]
    fn literal_text() {
        assert_eq!(render("", lookup), "");
        assert_eq!(render("baz ", lookup), "baz ");
        assert_eq!(render("{{name", lookup), "{{name");
        assert_eq!(render("name}}", lookup), "name}}");
        assert_eq!(render("{name}", lookup), "{name}");
        assert_eq!(render("{{na{me}}", lookup), "{{na{me}}");
    }

    #[test]
    fn nested_braces() {
        assert_eq!(render("{{{name}}}", lookup), "{test}");
        assert_eq!(render("{{{{name}}", lookup), "{{test");
    }

    #[test]
    fn multibyte_text() {
        assert_eq!(render("ä {{name}} ö", lookup), "ä test ö");
        assert_eq!(render("{{ü}}", lookup), "{{ü}}");
    }

    #[test]
    fn resolver_called_per_placeholder() {
        let mut calls = Vec::new();
        let out = render("{{a}}{{b}}{{a}}", |token| {
            calls.push(token.to_owned());
            None
        });
        assert_eq!(out, "{{a}}{{b}}{{a}}");
        assert_eq!(calls, ["a", "b", "a"]);
    }
}
