//! Collection, number and string helpers.
//!
//! Each helper family lives in its own crate and is re-exported here:
//!
//! - [`arr`]: dot-path access and transforms over `serde_json::Value` trees.
//! - [`number`]: locale-aware formatting, summarizing and spelling of numbers.
//! - [`text`]: searching, casing, padding, patterns and encoding of strings.

pub use arr;
pub use number;
pub use text;
