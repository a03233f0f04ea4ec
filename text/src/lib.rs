// String helpers. Lengths, offsets and padding count characters rather than
// bytes; functions that can only shorten their input return borrowed slices.

pub mod case;
pub mod encode;
pub mod error;
pub mod inspect;
pub mod pattern;
pub mod replace;
pub mod search;
pub mod shape;

mod cache;

pub use case::{
    camel, flush_cache, kebab, lcfirst, lower, pascal, snake, studly, title, ucfirst, upper,
};
pub use encode::{from_base64, random, to_base64};
pub use error::{Result, TextError};
pub use inspect::{is_ascii, is_json, is_url, is_uuid};
pub use pattern::{is_match, match_all, matched, replace_matches, Replacement};
pub use replace::{
    remove, replace, replace_array, replace_end, replace_first, replace_last, replace_start, slug,
    swap,
};
pub use search::{
    after, after_last, before, before_last, between, between_first, char_at, contains,
    contains_all, doesnt_contain, ends_with, length, parse_callback, position, starts_with,
    substr, substr_count, take, ucsplit, word_count,
};
pub use shape::{
    chop_end, chop_start, deduplicate, finish, limit, ltrim, numbers, pad_both, pad_left,
    pad_right, repeat, reverse, rtrim, squish, start, trim, unwrap, words, wrap,
};
