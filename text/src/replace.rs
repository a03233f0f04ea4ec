//! Literal replacement and slug generation.
use std::collections::HashMap;

/// Replaces every occurrence of `search`. The case-insensitive form matches
/// against the lowercased subject and returns that lowercased text.
pub fn replace(search: &str, replace: &str, subject: &str, case_sensitive: bool) -> String {
    if search.is_empty() {
        return subject.to_string();
    }
    if case_sensitive {
        subject.replace(search, replace)
    } else {
        subject.to_lowercase().replace(&search.to_lowercase(), replace)
    }
}

pub fn replace_first(search: &str, replace: &str, subject: &str) -> String {
    if search.is_empty() {
        return subject.to_string();
    }
    subject.replacen(search, replace, 1)
}

pub fn replace_last(search: &str, replace: &str, subject: &str) -> String {
    if search.is_empty() {
        return subject.to_string();
    }
    match subject.rfind(search) {
        Some(index) => format!("{}{replace}{}", &subject[..index], &subject[index + search.len()..]),
        None => subject.to_string(),
    }
}

/// Replaces `search` only when the subject starts with it.
pub fn replace_start(search: &str, replace: &str, subject: &str) -> String {
    match subject.strip_prefix(search) {
        Some(rest) if !search.is_empty() => format!("{replace}{rest}"),
        _ => subject.to_string(),
    }
}

pub fn replace_end(search: &str, replace: &str, subject: &str) -> String {
    match subject.strip_suffix(search) {
        Some(rest) if !search.is_empty() => format!("{rest}{replace}"),
        _ => subject.to_string(),
    }
}

/// Replaces each occurrence of `search` with the next entry of `replace`.
/// Once the replacements run out the remaining occurrences are kept.
pub fn replace_array(search: &str, replace: &[&str], subject: &str) -> String {
    if search.is_empty() {
        return subject.to_string();
    }

    let mut parts = subject.split(search);
    let mut result = String::with_capacity(subject.len());
    if let Some(head) = parts.next() {
        result.push_str(head);
    }
    for (index, part) in parts.enumerate() {
        result.push_str(replace.get(index).copied().unwrap_or(search));
        result.push_str(part);
    }
    result
}

/// Deletes every non-empty entry of `search`. Uses the same case policy as [`replace`].
pub fn remove(search: &[&str], subject: &str, case_sensitive: bool) -> String {
    if search.is_empty() {
        return subject.to_string();
    }
    let initial = if case_sensitive {
        subject.to_string()
    } else {
        subject.to_lowercase()
    };
    search
        .iter()
        .filter(|needle| !needle.is_empty())
        .fold(initial, |result, needle| {
            if case_sensitive {
                result.replace(needle, "")
            } else {
                result.replace(&needle.to_lowercase(), "")
            }
        })
}

/// Longest keys first, then alphabetical.
fn ordered_keys<'a>(map: &HashMap<&'a str, &str>) -> Vec<&'a str> {
    let mut keys: Vec<&str> = map.keys().copied().collect();
    keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    keys
}

/// Applies every replacement of `map` in turn, longest key first.
pub fn swap(map: &HashMap<&str, &str>, subject: &str) -> String {
    ordered_keys(map)
        .into_iter()
        .filter(|key| !key.is_empty())
        .fold(subject.to_string(), |result, key| result.replace(key, map[key]))
}

/// Lowercase ASCII slug. Whitespace and separator characters collapse into
/// one `separator`; everything else outside `a-z0-9` is dropped. Dictionary
/// entries are expanded to `separator + word + separator` first.
///
/// There is no language argument: transliteration is not performed, so a
/// language hint would have nothing to select.
pub fn slug(title: &str, separator: &str, dictionary: Option<&HashMap<&str, &str>>) -> String {
    let mut title = title.to_lowercase();
    if let Some(dictionary) = dictionary {
        for key in ordered_keys(dictionary).into_iter().filter(|key| !key.is_empty()) {
            let word = format!("{separator}{}{separator}", dictionary[key]);
            title = title.replace(key, &word);
        }
    }

    let mut slug = String::with_capacity(title.len());
    let mut in_separator = false;
    for c in title.chars() {
        if c.is_whitespace() || separator.contains(c) {
            if !in_separator {
                slug.push_str(separator);
                in_separator = true;
            }
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
            in_separator = false;
        }
    }

    if separator.is_empty() {
        return slug;
    }
    slug.trim_matches(|c: char| separator.contains(c)).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace() {
        assert_eq!(replace("baz", "laravel", "foo bar baz", true), "foo bar laravel");
        assert_eq!(replace("?", "8.x", "foo bar baz ?", true), "foo bar baz 8.x");
        assert_eq!(replace("BAZ", "laravel", "foo bar baz", true), "foo bar baz");
        assert_eq!(replace("BAZ", "laravel", "Foo Bar Baz", false), "foo bar laravel");
        assert_eq!(replace("", "x", "abc", true), "abc");
    }

    #[test]
    fn test_replace_first_and_last() {
        assert_eq!(replace_first("bar", "qux", "foobar foobar"), "fooqux foobar");
        assert_eq!(replace_first("xxx", "qux", "foobar"), "foobar");
        assert_eq!(replace_first("", "qux", "foobar"), "foobar");
        assert_eq!(replace_first("ö", "xxx", "Jönköping Malmö"), "Jxxxnköping Malmö");

        assert_eq!(replace_last("bar", "qux", "foobar foobar"), "foobar fooqux");
        assert_eq!(replace_last("xxx", "qux", "foobar"), "foobar");
        assert_eq!(replace_last("ö", "xxx", "Malmö Jönköping"), "Malmö Jönkxxxping");
    }

    #[test]
    fn test_replace_start_and_end() {
        assert_eq!(replace_start("foo", "qux", "foobar foobar"), "quxbar foobar");
        assert_eq!(replace_start("bar", "qux", "foobar foobar"), "foobar foobar");
        assert_eq!(replace_start("", "qux", "foobar"), "foobar");

        assert_eq!(replace_end("bar", "qux", "foobar foobar"), "foobar fooqux");
        assert_eq!(replace_end("foo", "qux", "foobar foobar"), "foobar foobar");
        assert_eq!(replace_end("", "qux", "foobar"), "foobar");
    }

    #[test]
    fn test_replace_array() {
        assert_eq!(replace_array("?", &["foo", "bar", "baz"], "?/?/?"), "foo/bar/baz");
        assert_eq!(replace_array("?", &["foo", "bar"], "?/?/?"), "foo/bar/?");
        assert_eq!(replace_array("?", &["foo", "bar", "baz"], "?/?"), "foo/bar");
        assert_eq!(replace_array("x", &["foo"], "?/?"), "?/?");
        assert_eq!(replace_array("", &["foo"], "?/?"), "?/?");
    }

    #[test]
    fn test_remove() {
        assert_eq!(remove(&["o"], "Foo Bar", true), "F Bar");
        assert_eq!(remove(&["bar", "f"], "Foo Bar", true), "Foo Bar");
        assert_eq!(remove(&["bar", "f"], "Foo Bar", false), "oo ");
        assert_eq!(remove(&[""], "Foo", true), "Foo");
        assert_eq!(remove(&[], "Foo", false), "Foo");
    }

    #[test]
    fn test_swap() {
        let map = HashMap::from([("PHP", "PHP 8"), ("awesome", "fantastic")]);
        assert_eq!(swap(&map, "PHP is awesome"), "PHP 8 is fantastic");

        let map = HashMap::from([("a", "b"), ("ab", "x")]);
        assert_eq!(swap(&map, "ab a"), "x b");
        assert_eq!(swap(&HashMap::new(), "unchanged"), "unchanged");
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("hello world", "-", None), "hello-world");
        assert_eq!(slug("hello-world", "-", None), "hello-world");
        assert_eq!(slug("hello_world", "_", None), "hello_world");
        assert_eq!(slug("  Hello,  World!  ", "-", None), "hello-world");
        assert_eq!(slug("hello - ! - world", "-", None), "hello-world");
        assert_eq!(slug("", "-", None), "");

        let dictionary = HashMap::from([("@", "at")]);
        assert_eq!(slug("hi@laravel.com", "-", Some(&dictionary)), "hi-at-laravelcom");
    }

    #[test]
    fn test_slug_is_idempotent() {
        for input in ["Hello World", "  spaced -- out  ", "Ünïcödé text 123"] {
            let once = slug(input, "-", None);
            assert_eq!(slug(&once, "-", None), once);
        }
    }
}
