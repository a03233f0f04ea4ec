//! Searching and slicing. Positions and lengths count characters, not bytes.

/// Byte offset of the character at `index`, or the string length past the end.
pub(crate) fn byte_offset(value: &str, index: usize) -> usize {
    value
        .char_indices()
        .nth(index)
        .map_or(value.len(), |(offset, _)| offset)
}

/// Everything after the first occurrence of `search`. An empty or missing
/// `search` returns the subject unchanged.
pub fn after<'a>(subject: &'a str, search: &str) -> &'a str {
    if search.is_empty() {
        return subject;
    }
    match subject.find(search) {
        Some(index) => &subject[index + search.len()..],
        None => subject,
    }
}

pub fn after_last<'a>(subject: &'a str, search: &str) -> &'a str {
    if search.is_empty() {
        return subject;
    }
    match subject.rfind(search) {
        Some(index) => &subject[index + search.len()..],
        None => subject,
    }
}

pub fn before<'a>(subject: &'a str, search: &str) -> &'a str {
    if search.is_empty() {
        return subject;
    }
    match subject.find(search) {
        Some(index) => &subject[..index],
        None => subject,
    }
}

pub fn before_last<'a>(subject: &'a str, search: &str) -> &'a str {
    if search.is_empty() {
        return subject;
    }
    match subject.rfind(search) {
        Some(index) => &subject[..index],
        None => subject,
    }
}

/// Text between the first `from` and the last `to`.
pub fn between<'a>(subject: &'a str, from: &str, to: &str) -> &'a str {
    if from.is_empty() || to.is_empty() {
        return subject;
    }
    before_last(after(subject, from), to)
}

/// Text between the first `from` and the first `to` after it.
pub fn between_first<'a>(subject: &'a str, from: &str, to: &str) -> &'a str {
    if from.is_empty() || to.is_empty() {
        return subject;
    }
    before(after(subject, from), to)
}

/// Character at `index`; negative indices count from the end.
pub fn char_at(subject: &str, index: isize) -> Option<char> {
    if index < 0 {
        subject.chars().rev().nth(index.unsigned_abs() - 1)
    } else {
        subject.chars().nth(index as usize)
    }
}

/// Character position of `needle` at or after the character `offset`.
pub fn position(haystack: &str, needle: &str, offset: isize) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    let offset = offset.max(0) as usize;
    let start = haystack.char_indices().nth(offset).map(|(index, _)| index)?;
    let found = start + haystack[start..].find(needle)?;
    Some(haystack[..found].chars().count())
}

/// Character slice starting at `start` (negative counts from the end).
/// `None` for `length` runs to the end of the string.
pub fn substr(subject: &str, start: isize, length: Option<usize>) -> &str {
    let count = subject.chars().count();
    let start = if start < 0 {
        count.saturating_sub(start.unsigned_abs())
    } else {
        start as usize
    };
    if start >= count {
        return "";
    }

    let end = length.map_or(count, |length| start.saturating_add(length).min(count));
    &subject[byte_offset(subject, start)..byte_offset(subject, end)]
}

/// Non-overlapping occurrences of `needle` inside the selected character range.
pub fn substr_count(haystack: &str, needle: &str, offset: isize, length: Option<usize>) -> usize {
    if needle.is_empty() {
        return 0;
    }
    substr(haystack, offset.max(0), length).matches(needle).count()
}

/// First `limit` characters, or the last ones when `limit` is negative.
/// A zero limit keeps the whole string.
pub fn take(subject: &str, limit: isize) -> &str {
    match limit {
        0 => subject,
        limit if limit < 0 => substr(subject, limit, None),
        limit => substr(subject, 0, Some(limit as usize)),
    }
}

pub fn length(value: &str) -> usize {
    value.chars().count()
}

pub fn word_count(value: &str) -> usize {
    value.split_whitespace().count()
}

/// Splits before every uppercase character.
pub fn ucsplit(value: &str) -> Vec<String> {
    let mut parts: Vec<String> = Vec::new();
    for c in value.chars() {
        if c.is_uppercase() || parts.is_empty() {
            parts.push(c.to_string());
        } else if let Some(current) = parts.last_mut() {
            current.push(c);
        }
    }
    parts
}

/// Splits `Class@method`, falling back to `default` for the method.
pub fn parse_callback<'a>(callback: &'a str, default: &'a str) -> (&'a str, &'a str) {
    callback.split_once('@').unwrap_or((callback, default))
}

pub fn contains(haystack: &str, needles: &[&str], ignore_case: bool) -> bool {
    if ignore_case {
        let haystack = haystack.to_lowercase();
        needles
            .iter()
            .any(|needle| !needle.is_empty() && haystack.contains(&needle.to_lowercase()))
    } else {
        needles
            .iter()
            .any(|needle| !needle.is_empty() && haystack.contains(needle))
    }
}

/// True when every non-empty needle occurs. An empty needle list is vacuously true.
pub fn contains_all(haystack: &str, needles: &[&str], ignore_case: bool) -> bool {
    needles
        .iter()
        .filter(|needle| !needle.is_empty())
        .all(|needle| contains(haystack, &[*needle], ignore_case))
}

pub fn doesnt_contain(haystack: &str, needles: &[&str], ignore_case: bool) -> bool {
    !contains(haystack, needles, ignore_case)
}

pub fn starts_with(haystack: &str, needles: &[&str]) -> bool {
    !haystack.is_empty()
        && needles
            .iter()
            .any(|needle| !needle.is_empty() && haystack.starts_with(needle))
}

pub fn ends_with(haystack: &str, needles: &[&str]) -> bool {
    !haystack.is_empty()
        && needles
            .iter()
            .any(|needle| !needle.is_empty() && haystack.ends_with(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_after_and_before() {
        assert_eq!(after("hannah", "han"), "nah");
        assert_eq!(after("hannah", "n"), "nah");
        assert_eq!(after("hannah", "xxxx"), "hannah");
        assert_eq!(after("hannah", ""), "hannah");
        assert_eq!(after_last("yvette", "tte"), "");
        assert_eq!(after_last("yvette", "t"), "e");
        assert_eq!(after_last("----foo", "---"), "foo");

        assert_eq!(before("hannah", "nah"), "han");
        assert_eq!(before("hannah", "n"), "ha");
        assert_eq!(before("hannah", "xxxx"), "hannah");
        assert_eq!(before_last("yvette", "yve"), "");
        assert_eq!(before_last("yvette", "t"), "yvet");
        assert_eq!(before_last("yvette", ""), "yvette");
    }

    #[test]
    fn test_between() {
        assert_eq!(between("abc", "", "c"), "abc");
        assert_eq!(between("abc", "a", "c"), "b");
        assert_eq!(between("dddabcddd", "a", "c"), "b");
        assert_eq!(between("hannah", "ha", "ah"), "nn");
        assert_eq!(between("[a] ab [b]", "[", "]"), "a] ab [b");

        assert_eq!(between_first("[a] ab [b]", "[", "]"), "a");
        assert_eq!(between_first("foofoobar", "foo", "bar"), "foo");
        assert_eq!(between_first("abc", "a", ""), "abc");
    }

    #[test]
    fn test_char_at() {
        assert_eq!(char_at("hello", 0), Some('h'));
        assert_eq!(char_at("hello", -1), Some('o'));
        assert_eq!(char_at("こんにちは", 2), Some('に'));
        assert_eq!(char_at("hello", 5), None);
        assert_eq!(char_at("hello", -6), None);
        assert_eq!(char_at("", 0), None);
    }

    #[test]
    fn test_position() {
        assert_eq!(position("hello world", "world", 0), Some(6));
        assert_eq!(position("hello world", "o", 5), Some(7));
        assert_eq!(position("hello world", "world", 10), None);
        assert_eq!(position("こんにちは", "ち", 0), Some(3));
        assert_eq!(position("hello", "", 0), None);
        assert_eq!(position("hello", "x", 0), None);
    }

    #[test]
    fn test_substr() {
        assert_eq!(substr("hello world", 6, None), "world");
        assert_eq!(substr("hello world", 0, Some(5)), "hello");
        assert_eq!(substr("hello world", -5, None), "world");
        assert_eq!(substr("hello world", -5, Some(2)), "wo");
        assert_eq!(substr("hello", 10, None), "");
        assert_eq!(substr("hello", 2, Some(100)), "llo");
        assert_eq!(substr("こんにちは", 1, Some(2)), "んに");
    }

    #[test]
    fn test_substr_count() {
        assert_eq!(substr_count("hello world hello", "hello", 0, None), 2);
        assert_eq!(substr_count("hello world hello", "hello", 1, None), 1);
        assert_eq!(substr_count("hello world hello", "hello", -1, None), 2);
        assert_eq!(substr_count("hello world hello", "hello", 0, Some(5)), 1);
        assert_eq!(substr_count("aaaa", "aa", 0, None), 2);
        assert_eq!(substr_count("hello", "hello", 10, None), 0);
        assert_eq!(substr_count("hello", "", 0, None), 0);
    }

    #[test]
    fn test_take() {
        assert_eq!(take("hello world", 5), "hello");
        assert_eq!(take("hello world", -5), "world");
        assert_eq!(take("hello world", 0), "hello world");
        assert_eq!(take("hi", 10), "hi");
    }

    #[test]
    fn test_length_and_word_count() {
        assert_eq!(length("hello"), 5);
        assert_eq!(length("こんにちは"), 5);
        assert_eq!(word_count("  hello   big world "), 3);
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn test_ucsplit() {
        assert_eq!(ucsplit("HelloWorld"), vec!["Hello", "World"]);
        assert_eq!(ucsplit("helloWorld"), vec!["hello", "World"]);
        assert_eq!(ucsplit("ABC"), vec!["A", "B", "C"]);
        assert!(ucsplit("").is_empty());
    }

    #[test]
    fn test_parse_callback() {
        assert_eq!(parse_callback("Class@method", "foo"), ("Class", "method"));
        assert_eq!(parse_callback("Class", "foo"), ("Class", "foo"));
        assert_eq!(parse_callback("Class@", "foo"), ("Class", ""));
    }

    #[test]
    fn test_contains() {
        assert!(contains("taylor", &["ylo"], false));
        assert!(contains("taylor", &["xxx", "ylo"], false));
        assert!(!contains("taylor", &["xxx"], false));
        assert!(!contains("taylor", &[""], false));
        assert!(contains("Taylor", &["TAY"], true));
        assert!(!contains("Taylor", &["TAY"], false));

        assert!(contains_all("taylor otwell", &["taylor", "otwell"], false));
        assert!(!contains_all("taylor otwell", &["taylor", "xxx"], false));
        assert!(contains_all("Taylor Otwell", &["taylor", "OTWELL"], true));
        assert!(contains_all("taylor", &[], false));

        assert!(doesnt_contain("taylor", &["xxx"], false));
        assert!(!doesnt_contain("taylor", &["tay"], false));
    }

    #[test]
    fn test_starts_and_ends_with() {
        assert!(starts_with("jason", &["jas"]));
        assert!(starts_with("jason", &["day", "jas"]));
        assert!(!starts_with("jason", &["day"]));
        assert!(!starts_with("jason", &[""]));
        assert!(!starts_with("", &["j"]));

        assert!(ends_with("jason", &["on"]));
        assert!(ends_with("jason", &["no", "son"]));
        assert!(!ends_with("jason", &["no"]));
        assert!(!ends_with("jason", &[""]));
    }
}
