// Helpers over sequences, plus the generic ones that accept either shape.
use std::cmp::Ordering;

use rand::seq::SliceRandom;
use serde_json::{Map, Value};

use crate::error::{ArrError, Result};
use crate::value::to_string;

/// The elements of a sequence or the values of a mapping. Scalars have none.
fn items(value: &Value) -> Vec<&Value> {
    match value {
        Value::Array(items) => items.iter().collect(),
        Value::Object(map) => map.values().collect(),
        _ => Vec::new(),
    }
}

/// Determines whether the value is a sequence or a mapping.
pub fn accessible(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}

pub fn is_assoc(value: &Value) -> bool {
    value.is_object()
}

pub fn is_list(value: &Value) -> bool {
    value.is_array()
}

/// Collapses a sequence of sequences (or mappings) into one sequence.
///
/// Scalars and nulls at the top level are dropped.
pub fn collapse(arrays: &Value) -> Vec<Value> {
    let Value::Array(arrays) = arrays else {
        return Vec::new();
    };

    let mut result = Vec::with_capacity(arrays.len() * 2);
    for item in arrays {
        match item {
            Value::Array(inner) => result.extend(inner.iter().cloned()),
            Value::Object(map) => result.extend(map.values().cloned()),
            _ => {}
        }
    }
    result
}

/// Cross joins the given sequences, returning every permutation in order.
pub fn cross_join(arrays: &[Vec<Value>]) -> Vec<Vec<Value>> {
    if arrays.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<Vec<Value>> = vec![Vec::new()];
    for array in arrays {
        results = results
            .iter()
            .flat_map(|product| {
                array.iter().map(move |item| {
                    let mut next = Vec::with_capacity(product.len() + 1);
                    next.extend(product.iter().cloned());
                    next.push(item.clone());
                    next
                })
            })
            .collect();
    }
    results
}

/// Returns the first item passing `callback` (or simply the first item).
pub fn first<'a>(
    array: &'a Value,
    callback: Option<&dyn Fn(&Value) -> bool>,
    default: &'a Value,
) -> &'a Value {
    items(array)
        .into_iter()
        .find(|item| callback.map_or(true, |callback| callback(*item)))
        .unwrap_or(default)
}

/// Returns the last item passing `callback` (or simply the last item).
pub fn last<'a>(
    array: &'a Value,
    callback: Option<&dyn Fn(&Value) -> bool>,
    default: &'a Value,
) -> &'a Value {
    items(array)
        .into_iter()
        .rev()
        .find(|item| callback.map_or(true, |callback| callback(*item)))
        .unwrap_or(default)
}

/// Takes the first `limit` items, or the last `-limit` when negative.
pub fn take(array: &[Value], limit: isize) -> &[Value] {
    let count = limit.unsigned_abs().min(array.len());
    if limit < 0 {
        &array[array.len() - count..]
    } else {
        &array[..count]
    }
}

/// Flattens nested sequences and mappings into one level.
///
/// `depth` counts levels starting with `array` itself, so a depth of 1 only
/// unpacks the outer sequence. A depth of 0 means unlimited.
pub fn flatten(array: &Value, depth: usize) -> Vec<Value> {
    let depth = (depth != 0).then_some(depth);
    let mut result = Vec::with_capacity(16);
    flatten_into(&mut result, array, depth);
    result
}

fn flatten_into(result: &mut Vec<Value>, item: &Value, depth: Option<usize>) {
    if depth == Some(0) {
        result.push(item.clone());
        return;
    }

    let next = depth.map(|depth| depth - 1);
    match item {
        Value::Array(items) => items.iter().for_each(|item| flatten_into(result, item, next)),
        Value::Object(map) => map.values().for_each(|item| flatten_into(result, item, next)),
        Value::Null => {}
        scalar => result.push(scalar.clone()),
    }
}

/// Joins with `glue`, using `final_glue` before the last item when non-empty.
pub fn join(array: &[&str], glue: &str, final_glue: &str) -> String {
    match array {
        [] => String::new(),
        _ if final_glue.is_empty() => array.join(glue),
        [only] => only.to_string(),
        [init @ .., last] => format!("{}{final_glue}{last}", init.join(glue)),
    }
}

pub fn map(array: &[Value], callback: impl FnMut(&Value) -> Value) -> Vec<Value> {
    array.iter().map(callback).collect()
}

/// Merges the key/value pairs every callback returns. Later keys win.
pub fn map_with_keys(
    array: &[Value],
    mut callback: impl FnMut(&Value) -> Map<String, Value>,
) -> Map<String, Value> {
    let mut result = Map::with_capacity(array.len());
    for item in array {
        result.extend(callback(item));
    }
    result
}

/// Calls `callback` with each chunk spread out as its arguments.
pub fn map_spread(array: &[Vec<Value>], mut callback: impl FnMut(&[Value]) -> Value) -> Vec<Value> {
    array.iter().map(|chunk| callback(chunk)).collect()
}

pub fn prepend(array: &[Value], value: Value) -> Vec<Value> {
    let mut result = Vec::with_capacity(array.len() + 1);
    result.push(value);
    result.extend(array.iter().cloned());
    result
}

/// Picks random items without repetition.
///
/// `None` (or zero) asks for a single item, which is returned bare. More than
/// one item comes back as a sequence, or as a mapping keyed by original
/// index when `preserve_keys` is set. An empty input yields null for a single
/// item and an empty sequence otherwise.
pub fn random(array: &[Value], number: Option<usize>, preserve_keys: bool) -> Result<Value> {
    if array.is_empty() {
        return Ok(match number {
            Some(number) if number > 0 => Value::Array(Vec::new()),
            _ => Value::Null,
        });
    }

    let number = number.filter(|number| *number > 0).unwrap_or(1);
    if number > array.len() {
        tracing::debug!(requested = number, available = array.len(), "random sample too large");
        return Err(ArrError::InsufficientItems {
            requested: number,
            available: array.len(),
        });
    }

    let indices = rand::seq::index::sample(&mut rand::thread_rng(), array.len(), number);
    if number == 1 {
        return Ok(array[indices.index(0)].clone());
    }

    if preserve_keys {
        Ok(Value::Object(
            indices
                .iter()
                .map(|index| (index.to_string(), array[index].clone()))
                .collect(),
        ))
    } else {
        Ok(Value::Array(indices.iter().map(|index| array[index].clone()).collect()))
    }
}

pub fn shuffle(array: &[Value]) -> Vec<Value> {
    let mut result = array.to_vec();
    result.shuffle(&mut rand::thread_rng());
    result
}

/// Sorts by the items' string form.
pub fn sort(array: &[Value]) -> Vec<Value> {
    sort_by(array, |a, b| to_string(a).cmp(&to_string(b)))
}

/// Stable sort with a caller supplied comparator.
pub fn sort_by(array: &[Value], compare: impl FnMut(&Value, &Value) -> Ordering) -> Vec<Value> {
    let mut result = array.to_vec();
    result.sort_by(compare);
    result
}

pub fn sort_desc(array: &[Value]) -> Vec<Value> {
    sort_desc_by(array, |a, b| to_string(a).cmp(&to_string(b)))
}

/// Descending counterpart of [`sort_by`]: `compare` still describes ascending order.
pub fn sort_desc_by(
    array: &[Value],
    mut compare: impl FnMut(&Value, &Value) -> Ordering,
) -> Vec<Value> {
    sort_by(array, |a, b| compare(a, b).reverse())
}

/// Keeps the items passing `callback`.
pub fn filter(array: &[Value], mut callback: impl FnMut(&Value) -> bool) -> Vec<Value> {
    array.iter().filter(|item| callback(*item)).cloned().collect()
}

/// Keeps the items failing `callback`.
pub fn reject(array: &[Value], mut callback: impl FnMut(&Value) -> bool) -> Vec<Value> {
    filter(array, |item| !callback(item))
}

pub fn where_not_null(array: &[Value]) -> Vec<Value> {
    filter(array, |item| !item.is_null())
}

/// Wraps a scalar in a sequence. Null becomes empty, sequences pass through.
pub fn wrap(value: Value) -> Vec<Value> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items,
        other => vec![other],
    }
}
