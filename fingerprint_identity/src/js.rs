//! Safe interpolation of fingerprint values into emitted script text.
//!
//! Script sources are `&'static str` templates with `@{name}` slots. A slot
//! can only be filled with a [`JsLiteral`], and every string literal goes
//! through [`escape_js_string`] when it is written out, so fingerprint data
//! never reaches the output unescaped.

use aho_corasick::AhoCorasick;
use std::fmt::{self, Display, Write};

/// Characters that can end or break a single-quoted script string.
const JS_ESCAPE_PATTERNS: [&str; 9] = [
    "\\", "'", "\"", "\n", "\r", "\u{2028}", "\u{2029}", "\0", "</",
];

/// Replacements for [`JS_ESCAPE_PATTERNS`], index for index.
const JS_ESCAPE_REPLACEMENTS: [&str; 9] = [
    "\\\\", "\\'", "\\\"", "\\n", "\\r", "\\u2028", "\\u2029", "\\u0000", "<\\/",
];

lazy_static::lazy_static! {
    static ref JS_ESCAPER: AhoCorasick =
        AhoCorasick::new(JS_ESCAPE_PATTERNS).expect("valid escape patterns");
}

/// Escape a value for use inside a quoted script string.
pub fn escape_js_string(value: &str) -> String {
    JS_ESCAPER.replace_all(value, &JS_ESCAPE_REPLACEMENTS)
}

/// A value that can be placed in a script slot.
#[derive(Debug, Clone, PartialEq)]
pub enum JsLiteral<'a> {
    /// A single-quoted, escaped string.
    Str(&'a str),
    /// An integer.
    Int(i64),
    /// A number. Non-finite values print as `NaN` or `Infinity`.
    Num(f64),
    /// `true` or `false`.
    Bool(bool),
    /// An array literal.
    List(Vec<JsLiteral<'a>>),
    /// An object literal with fixed keys.
    Object(Vec<(&'static str, JsLiteral<'a>)>),
}

impl<'a> JsLiteral<'a> {
    /// An array of strings.
    pub fn strings<I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        JsLiteral::List(values.into_iter().map(JsLiteral::Str).collect())
    }
}

impl Display for JsLiteral<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsLiteral::Str(value) => write!(f, "'{}'", escape_js_string(value)),
            JsLiteral::Int(value) => write!(f, "{value}"),
            JsLiteral::Num(value) => {
                if value.is_nan() {
                    f.write_str("NaN")
                } else if value.is_infinite() {
                    f.write_str(if *value > 0.0 { "Infinity" } else { "-Infinity" })
                } else {
                    write!(f, "{value}")
                }
            }
            JsLiteral::Bool(value) => write!(f, "{value}"),
            JsLiteral::List(items) => {
                f.write_char('[')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_char(',')?;
                    }
                    item.fmt(f)?;
                }
                f.write_char(']')
            }
            JsLiteral::Object(entries) => {
                f.write_char('{')?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_char(',')?;
                    }
                    write!(f, "{key}:{value}")?;
                }
                f.write_char('}')
            }
        }
    }
}

/// A script fragment with `@{name}` slots.
#[derive(Debug, Clone, Copy)]
pub struct ScriptTemplate(&'static str);

impl ScriptTemplate {
    /// Wrap a static source.
    pub const fn new(source: &'static str) -> Self {
        Self(source)
    }

    /// The raw source.
    pub fn source(&self) -> &'static str {
        self.0
    }

    /// The slot names in order of appearance.
    pub fn slots(&self) -> Vec<&'static str> {
        let mut slots = Vec::new();
        let mut rest = self.0;

        while let Some(start) = rest.find("@{") {
            let after = &rest[start + 2..];
            match after.find('}') {
                Some(end) => {
                    slots.push(&after[..end]);
                    rest = &after[end + 1..];
                }
                None => break,
            }
        }

        slots
    }

    /// Fill every slot. A slot with no value renders as `undefined`.
    pub fn render(&self, values: &[(&str, JsLiteral<'_>)]) -> String {
        let mut out = String::with_capacity(self.0.len() + 256);
        let mut rest = self.0;

        while let Some(start) = rest.find("@{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];

            match after.find('}') {
                Some(end) => {
                    let name = &after[..end];
                    match values.iter().find(|(slot, _)| *slot == name) {
                        Some((_, literal)) => {
                            let _ = write!(out, "{literal}");
                        }
                        None => {
                            log::warn!("script slot {name} has no value");
                            out.push_str("undefined");
                        }
                    }
                    rest = &after[end + 1..];
                }
                None => {
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }

        out.push_str(rest);
        out
    }
}

/// Wrap a script body in an immediately invoked arrow function.
pub fn wrap_eval_script(source: &str) -> String {
    format!(r#"(()=>{{{}}})();"#, source)
}
