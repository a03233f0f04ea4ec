// Helpers over mappings and sequences of mappings ("records").
use serde_json::{Map, Value};

use crate::path;
use crate::value::{is_truthy, to_string};

/// How `key_by` derives the key for each record.
pub enum KeyBy<'a> {
    /// Read a top-level field of each record; records without it are skipped.
    Field(&'a str),
    /// Compute the key from the whole item.
    With(&'a dyn Fn(&Value) -> String),
}

/// Splits a mapping into its keys and its values.
pub fn divide(array: &Map<String, Value>) -> (Vec<String>, Vec<Value>) {
    array
        .iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .unzip()
}

/// Copies the mapping without the given (dot notation) keys.
pub fn except(array: &Map<String, Value>, keys: &[&str]) -> Map<String, Value> {
    let mut result = array.clone();
    path::forget(&mut result, keys);
    result
}

/// Copies only the given top-level keys that exist.
pub fn only(array: &Map<String, Value>, keys: &[&str]) -> Map<String, Value> {
    keys.iter()
        .filter_map(|key| array.get(*key).map(|value| (key.to_string(), value.clone())))
        .collect()
}

pub fn prepend_keys_with(array: &Map<String, Value>, prepend_with: &str) -> Map<String, Value> {
    array
        .iter()
        .map(|(key, value)| (format!("{prepend_with}{key}"), value.clone()))
        .collect()
}

/// Keys each item by a field or a callback. Later items win on collisions.
pub fn key_by(array: &[Value], key_by: KeyBy<'_>) -> Map<String, Value> {
    let mut result = Map::with_capacity(array.len());
    for item in array {
        let key = match &key_by {
            KeyBy::Field(field) => match item.as_object().and_then(|record| record.get(*field)) {
                Some(key) => to_string(key),
                None => continue,
            },
            KeyBy::With(callback) => callback(item),
        };
        result.insert(key, item.clone());
    }
    result
}

/// Picks the given keys out of every record. Non-mapping items are dropped.
pub fn select(array: &[Value], keys: &[&str]) -> Vec<Map<String, Value>> {
    array
        .iter()
        .filter_map(Value::as_object)
        .map(|record| only(record, keys))
        .collect()
}

/// Plucks `value` (dot notation) out of every record.
///
/// With a `key` path the result is keyed by that field; otherwise records are
/// keyed by their position among the plucked records.
pub fn pluck(array: &[Value], value: &str, key: Option<&str>) -> Map<String, Value> {
    let mut result = Map::with_capacity(array.len());
    for item in array.iter().filter(|item| item.is_object()) {
        let plucked = path::get(item, value, &Value::Null).clone();
        let name = match key {
            Some(key) => to_string(path::get(item, key, &Value::Null)),
            None => result.len().to_string(),
        };
        result.insert(name, plucked);
    }
    result
}

/// Builds a URL query string, keys in ascending order.
pub fn query(array: &Map<String, Value>) -> String {
    let mut pairs: Vec<_> = array.iter().collect();
    pairs.sort_by(|a, b| a.0.cmp(b.0));

    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, &to_string(value));
    }
    serializer.finish()
}

/// Joins the class names whose constraint is truthy.
pub fn to_css_classes(array: &Map<String, Value>) -> String {
    array
        .iter()
        .filter(|(_, constraint)| is_truthy(constraint))
        .map(|(class, _)| class.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Joins the style declarations whose constraint is truthy, each ending in `;`.
pub fn to_css_styles(array: &Map<String, Value>) -> String {
    array
        .iter()
        .filter(|(_, constraint)| is_truthy(constraint))
        .map(|(style, _)| {
            if style.ends_with(';') {
                style.clone()
            } else {
                format!("{style};")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Recursively orders mapping keys. Sequences are left in place.
pub fn sort_recursive(array: &Map<String, Value>, descending: bool) -> Map<String, Value> {
    let mut keys: Vec<&String> = array.keys().collect();
    keys.sort();
    if descending {
        keys.reverse();
    }

    keys.into_iter()
        .map(|key| {
            let value = match &array[key.as_str()] {
                Value::Object(nested) => Value::Object(sort_recursive(nested, descending)),
                other => other.clone(),
            };
            (key.clone(), value)
        })
        .collect()
}

pub fn sort_recursive_desc(array: &Map<String, Value>) -> Map<String, Value> {
    sort_recursive(array, true)
}
