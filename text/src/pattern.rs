//! Regular-expression helpers.
//!
//! `is_match` and `matched` treat an invalid pattern as "no match"; the
//! collecting and replacing helpers report it as an error.
use regex::{Captures, Regex};
use serde_json::Value;

use crate::error::{Result, TextError};

fn compile_soft(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(regex) => Some(regex),
        Err(err) => {
            tracing::debug!(pattern, error = %err, "ignoring invalid pattern");
            None
        }
    }
}

/// The first capture group of `captures`, or the whole match without groups.
fn preferred(captures: &Captures) -> String {
    captures
        .get(1)
        .or_else(|| captures.get(0))
        .map(|found| found.as_str().to_string())
        .unwrap_or_default()
}

pub fn is_match(pattern: &str, value: &str) -> bool {
    compile_soft(pattern).is_some_and(|regex| regex.is_match(value))
}

/// First match of `pattern`, preferring its first capture group. Empty when
/// nothing matches or the pattern is invalid.
pub fn matched(pattern: &str, subject: &str) -> String {
    compile_soft(pattern)
        .and_then(|regex| regex.captures(subject).map(|captures| preferred(&captures)))
        .unwrap_or_default()
}

/// Every match of `pattern`, preferring each match's first capture group.
pub fn match_all(pattern: &str, subject: &str) -> Result<Vec<String>> {
    let regex = Regex::new(pattern)?;
    Ok(regex.captures_iter(subject).map(|captures| preferred(&captures)).collect())
}

/// What to put in place of a match.
pub enum Replacement<'a> {
    /// Replacement text; `$1` and `${name}` expand to capture groups.
    Text(&'a str),
    /// Called with the matched text.
    With(&'a dyn Fn(&str) -> String),
}

impl<'a> From<&'a str> for Replacement<'a> {
    fn from(text: &'a str) -> Self {
        Replacement::Text(text)
    }
}

impl<'a> TryFrom<&'a Value> for Replacement<'a> {
    type Error = TextError;

    fn try_from(value: &'a Value) -> Result<Self> {
        match value {
            Value::String(text) => Ok(Replacement::Text(text.as_str())),
            Value::Null => Err(TextError::UnsupportedReplacement("null")),
            Value::Bool(_) => Err(TextError::UnsupportedReplacement("boolean")),
            Value::Number(_) => Err(TextError::UnsupportedReplacement("number")),
            Value::Array(_) => Err(TextError::UnsupportedReplacement("array")),
            Value::Object(_) => Err(TextError::UnsupportedReplacement("object")),
        }
    }
}

/// Replaces up to `limit` matches of `pattern`; a zero limit replaces all.
pub fn replace_matches<'a>(
    pattern: &str,
    replacement: impl Into<Replacement<'a>>,
    subject: &str,
    limit: usize,
) -> Result<String> {
    let regex = Regex::new(pattern)?;
    let replaced = match replacement.into() {
        Replacement::Text(text) => regex.replacen(subject, limit, text),
        Replacement::With(callback) => {
            regex.replacen(subject, limit, |captures: &Captures| callback(&captures[0]))
        }
    };
    Ok(replaced.into_owned())
}
