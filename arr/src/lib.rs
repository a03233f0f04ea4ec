// Collection helpers over `serde_json::Value` trees.
//
// Sequences are `Value::Array`, mappings are `Value::Object` and everything
// else is a scalar. Nested mappings can be addressed with "dot" paths
// (see `path`).

pub mod error;
pub mod keyed;
pub mod list;
pub mod path;
pub mod value;

pub use error::{ArrError, Result};
pub use keyed::{
    divide, except, key_by, only, pluck, prepend_keys_with, query, select, sort_recursive,
    sort_recursive_desc, to_css_classes, to_css_styles, KeyBy,
};
pub use list::{
    accessible, collapse, cross_join, filter, first, flatten, is_assoc, is_list, join, last, map,
    map_spread, map_with_keys, prepend, random, reject, shuffle, sort, sort_by, sort_desc,
    sort_desc_by, take, where_not_null, wrap,
};
pub use path::{add, dot, exists, forget, get, has, has_any, has_one, pull, set, undot};
