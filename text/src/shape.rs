//! Trimming, padding, truncation and other reshaping of a single string.
use unicode_segmentation::UnicodeSegmentation;

use crate::search::byte_offset;

const TRIM_SET: &str = " \t\n\r\x0B\x0C";

/// Removes the first of `needles` that prefixes the subject.
pub fn chop_start<'a>(subject: &'a str, needles: &[&str]) -> &'a str {
    needles
        .iter()
        .find_map(|needle| subject.strip_prefix(needle))
        .unwrap_or(subject)
}

pub fn chop_end<'a>(subject: &'a str, needles: &[&str]) -> &'a str {
    needles
        .iter()
        .find_map(|needle| subject.strip_suffix(needle))
        .unwrap_or(subject)
}

/// Collapses consecutive runs of `character` into a single occurrence.
pub fn deduplicate(value: &str, character: &str) -> String {
    if character.is_empty() {
        return value.to_string();
    }

    let mut result = String::with_capacity(value.len());
    let mut rest = value;
    let mut in_run = false;
    while !rest.is_empty() {
        if let Some(tail) = rest.strip_prefix(character) {
            if !in_run {
                result.push_str(character);
            }
            in_run = true;
            rest = tail;
            continue;
        }

        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            result.push(c);
        }
        in_run = false;
        rest = chars.as_str();
    }
    result
}

/// Appends `cap`. One leading `cap` is stripped first.
pub fn finish(value: &str, cap: &str) -> String {
    let body = value.strip_prefix(cap).unwrap_or(value);
    format!("{body}{cap}")
}

/// Prepends `prefix` once, dropping any repetitions already at the start.
pub fn start(value: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        return value.to_string();
    }
    format!("{prefix}{}", value.trim_start_matches(prefix))
}

/// Surrounds the value. `after` defaults to `before`.
pub fn wrap(value: &str, before: &str, after: Option<&str>) -> String {
    format!("{before}{value}{}", after.unwrap_or(before))
}

pub fn unwrap<'a>(value: &'a str, before: &str, after: Option<&str>) -> &'a str {
    let value = value.strip_prefix(before).unwrap_or(value);
    let after = after.unwrap_or(before);
    value.strip_suffix(after).unwrap_or(value)
}

/// Truncates to `limit` characters and appends `end`. With `preserve_words`
/// the cut backs off to the last whole word. A zero limit keeps the value.
pub fn limit(value: &str, limit: usize, end: &str, preserve_words: bool) -> String {
    if limit == 0 || value.chars().count() <= limit {
        return value.to_string();
    }

    let cut = byte_offset(value, limit);
    let trimmed = &value[..cut];
    if !preserve_words || value[cut..].starts_with(' ') {
        return format!("{trimmed}{end}");
    }

    match trimmed.rfind(' ') {
        Some(space) if space > 0 => format!("{}{end}", &trimmed[..space]),
        _ => format!("{trimmed}{end}"),
    }
}

/// Keeps the first `words` words, joined by single spaces.
pub fn words(value: &str, words: usize, end: &str) -> String {
    let parts: Vec<&str> = value.split_whitespace().collect();
    if parts.len() <= words {
        return value.to_string();
    }
    format!("{}{end}", parts[..words].join(" "))
}

/// Keeps only the ASCII digits.
pub fn numbers(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

fn padding(pad: &str, count: usize) -> String {
    pad.chars().cycle().take(count).collect()
}

/// Pads both sides to `length` characters, the extra character going right.
pub fn pad_both(value: &str, length: usize, pad: &str) -> String {
    let current = value.chars().count();
    if pad.is_empty() || current >= length {
        return value.to_string();
    }
    let total = length - current;
    let left = total / 2;
    format!("{}{value}{}", padding(pad, left), padding(pad, total - left))
}

pub fn pad_left(value: &str, length: usize, pad: &str) -> String {
    let current = value.chars().count();
    if pad.is_empty() || current >= length {
        return value.to_string();
    }
    format!("{}{value}", padding(pad, length - current))
}

pub fn pad_right(value: &str, length: usize, pad: &str) -> String {
    let current = value.chars().count();
    if pad.is_empty() || current >= length {
        return value.to_string();
    }
    format!("{value}{}", padding(pad, length - current))
}

pub fn repeat(value: &str, times: usize) -> String {
    value.repeat(times)
}

/// Reverses by grapheme cluster so combined characters stay intact.
pub fn reverse(value: &str) -> String {
    value.graphemes(true).rev().collect()
}

/// Trims whitespace, or every character of `characters` when given.
pub fn trim<'a>(value: &'a str, characters: Option<&str>) -> &'a str {
    match characters {
        Some(set) if !set.is_empty() => value.trim_matches(|c: char| set.contains(c)),
        _ => value.trim(),
    }
}

pub fn ltrim<'a>(value: &'a str, characters: Option<&str>) -> &'a str {
    let set = characters.filter(|set| !set.is_empty()).unwrap_or(TRIM_SET);
    value.trim_start_matches(|c: char| set.contains(c))
}

pub fn rtrim<'a>(value: &'a str, characters: Option<&str>) -> &'a str {
    let set = characters.filter(|set| !set.is_empty()).unwrap_or(TRIM_SET);
    value.trim_end_matches(|c: char| set.contains(c))
}

/// Trims and collapses inner whitespace to single spaces.
pub fn squish(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
