//! Case conversion. Snake, camel and studly results are memoized in bounded,
//! thread-safe tables that can be emptied with [`flush_cache`].
use once_cell::sync::Lazy;
use unicode_segmentation::UnicodeSegmentation;

use crate::cache::{Memo, CAPACITY};

static SNAKE_CACHE: Lazy<Memo<(String, String)>> = Lazy::new(|| Memo::new(CAPACITY));
static CAMEL_CACHE: Lazy<Memo<String>> = Lazy::new(|| Memo::new(CAPACITY));
static STUDLY_CACHE: Lazy<Memo<String>> = Lazy::new(|| Memo::new(CAPACITY));

pub fn lower(value: &str) -> String {
    value.to_lowercase()
}

pub fn upper(value: &str) -> String {
    value.to_uppercase()
}

pub fn lcfirst(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn ucfirst(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercases the text, then uppercases the first letter of every word.
pub fn title(value: &str) -> String {
    value
        .to_lowercase()
        .split_word_bounds()
        .map(ucfirst)
        .collect()
}

/// `foo_bar-baz qux` becomes `FooBarBazQux`.
pub fn studly(value: &str) -> String {
    STUDLY_CACHE.get_or_insert_with(value.to_string(), || {
        value
            .replace(['-', '_'], " ")
            .split_whitespace()
            .map(ucfirst)
            .collect()
    })
}

pub fn pascal(value: &str) -> String {
    studly(value)
}

pub fn camel(value: &str) -> String {
    CAMEL_CACHE.get_or_insert_with(value.to_string(), || lcfirst(&studly(value)))
}

/// Inserts `delimiter` before uppercase letters and lowercases them. Spaces,
/// hyphens and underscores are each replaced by the delimiter. Input with no
/// uppercase letters is returned as is.
pub fn snake(value: &str, delimiter: &str) -> String {
    let key = (value.to_string(), delimiter.to_string());
    SNAKE_CACHE.get_or_insert_with(key, || {
        if !value.chars().any(char::is_uppercase) {
            return value.to_string();
        }

        let mut result = String::with_capacity(value.len() + value.len() / 2);
        for (index, c) in value.chars().enumerate() {
            if c.is_uppercase() {
                if index > 0 {
                    result.push_str(delimiter);
                }
                result.extend(c.to_lowercase());
            } else if matches!(c, ' ' | '-' | '_') {
                result.push_str(delimiter);
            } else {
                result.push(c);
            }
        }
        result
    })
}

pub fn kebab(value: &str) -> String {
    snake(value, "-")
}

/// Empties the casing memo tables.
pub fn flush_cache() {
    SNAKE_CACHE.clear();
    CAMEL_CACHE.clear();
    STUDLY_CACHE.clear();
    tracing::trace!("flushed casing caches");
}
