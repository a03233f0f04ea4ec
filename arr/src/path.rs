//! "Dot" notation access into nested mappings.
//!
//! A path such as `user.address.city` walks one mapping per segment. Lookups
//! fail soft: a missing segment, or a segment that is not a mapping before
//! the last one, resolves to "not found" instead of an error. Writes create
//! the intermediate mappings they need and overwrite anything in the way.
//!
//! There is no escaping, so a key that itself contains a `.` cannot be
//! addressed with a dotted path.

use serde_json::{Map, Value};

/// Walks every segment of `segments` and returns the mapping it ends on.
fn parent<'a>(array: &'a Map<String, Value>, segments: &str) -> Option<&'a Map<String, Value>> {
    segments
        .split('.')
        .try_fold(array, |current, segment| current.get(segment)?.as_object())
}

fn parent_mut<'a>(
    array: &'a mut Map<String, Value>,
    segments: &str,
) -> Option<&'a mut Map<String, Value>> {
    segments
        .split('.')
        .try_fold(array, |current, segment| current.get_mut(segment)?.as_object_mut())
}

fn lookup<'a>(array: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    match key.rsplit_once('.') {
        None => array.get(key),
        Some((parents, last)) => parent(array, parents)?.get(last),
    }
}

fn ensure_object(slot: &mut Value) -> &mut Map<String, Value> {
    if !slot.is_object() {
        *slot = Value::Object(Map::new());
    }
    match slot {
        Value::Object(map) => map,
        _ => unreachable!("slot was just replaced with an object"),
    }
}

/// Gets an item using "dot" notation, or `default` when it is absent.
///
/// The empty path addresses the whole container. The final segment is never
/// descended into: a mapping sitting there is returned as is.
pub fn get<'a>(array: &'a Value, key: &str, default: &'a Value) -> &'a Value {
    let Some(map) = array.as_object() else {
        return default;
    };
    if key.is_empty() {
        return array;
    }
    lookup(map, key).unwrap_or(default)
}

/// Sets an item using "dot" notation.
///
/// Intermediate segments that are missing, or that hold something other than
/// a mapping, are replaced with a fresh empty mapping. The empty path is a
/// no-op.
pub fn set(array: &mut Map<String, Value>, key: &str, value: Value) {
    if key.is_empty() {
        return;
    }

    let Some((parents, last)) = key.rsplit_once('.') else {
        array.insert(key.to_string(), value);
        return;
    };

    let mut current = array;
    for segment in parents.split('.') {
        let slot = current
            .entry(segment)
            .or_insert_with(|| Value::Object(Map::new()));
        current = ensure_object(slot);
    }
    current.insert(last.to_string(), value);
}

/// Checks that a single path resolves to something (null included).
pub fn has_one(array: &Value, key: &str) -> bool {
    if key.is_empty() {
        return false;
    }
    array
        .as_object()
        .is_some_and(|map| lookup(map, key).is_some())
}

/// Checks that every path exists. An empty list of paths is never satisfied.
pub fn has(array: &Value, keys: &[&str]) -> bool {
    !keys.is_empty() && keys.iter().all(|key| has_one(array, key))
}

/// Checks that at least one of the paths exists.
pub fn has_any(array: &Value, keys: &[&str]) -> bool {
    keys.iter().any(|key| has_one(array, key))
}

/// Determines if `key` is present at the top level, without path parsing.
pub fn exists(array: &Value, key: &str) -> bool {
    array.as_object().is_some_and(|map| map.contains_key(key))
}

/// Removes one or many items using "dot" notation.
///
/// Paths whose parent cannot be reached are skipped.
pub fn forget(array: &mut Map<String, Value>, keys: &[&str]) {
    for key in keys {
        match key.rsplit_once('.') {
            None => {
                array.shift_remove(*key);
            }
            Some((parents, last)) => {
                if let Some(parent) = parent_mut(array, parents) {
                    parent.shift_remove(last);
                }
            }
        }
    }
}

/// Sets the item only when the path is missing or holds null.
pub fn add(array: &mut Map<String, Value>, key: &str, value: Value) {
    if lookup(array, key).map_or(true, Value::is_null) {
        set(array, key, value);
    }
}

/// Gets an item and removes it from the container.
pub fn pull(array: &mut Map<String, Value>, key: &str, default: Value) -> Value {
    if key.is_empty() {
        return Value::Object(array.clone());
    }
    let value = lookup(array, key).cloned().unwrap_or(default);
    forget(array, &[key]);
    value
}

/// Flattens nested mappings into a single level keyed by full dot paths.
///
/// Empty mappings, sequences and scalars are kept as leaves.
pub fn dot(array: &Map<String, Value>, prepend: &str) -> Map<String, Value> {
    let mut results = Map::with_capacity(array.len());
    dot_into(&mut results, array, prepend);
    results
}

fn dot_into(results: &mut Map<String, Value>, array: &Map<String, Value>, prepend: &str) {
    for (key, value) in array {
        let prefixed = format!("{prepend}{key}");
        match value {
            Value::Object(nested) if !nested.is_empty() => {
                dot_into(results, nested, &format!("{prefixed}."));
            }
            _ => {
                results.insert(prefixed, value.clone());
            }
        }
    }
}

/// Expands a flat "dot" keyed mapping back into nested mappings.
pub fn undot(array: &Map<String, Value>) -> Map<String, Value> {
    let mut results = Map::new();
    for (key, value) in array {
        set(&mut results, key, value.clone());
    }
    results
}
