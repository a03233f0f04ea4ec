// Scalar helpers shared by the collection modules.
use serde_json::Value;

/// Renders a value the way it should appear as a map key or query parameter.
///
/// Strings are used verbatim (no JSON quoting), null becomes the empty string
/// and sequences/mappings fall back to their JSON text.
pub fn to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Whether a constraint value switches a CSS class or style on.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        // Sequences and mappings count as present, even when empty.
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_string() {
        assert_eq!(to_string(&json!("John")), "John");
        assert_eq!(to_string(&json!(1)), "1");
        assert_eq!(to_string(&json!(1.5)), "1.5");
        assert_eq!(to_string(&json!(true)), "true");
        assert_eq!(to_string(&Value::Null), "");
        assert_eq!(to_string(&json!([1, 2])), "[1,2]");
    }

    #[test]
    fn test_is_truthy() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!("yes")));
        assert!(is_truthy(&json!(2)));
        assert!(is_truthy(&json!([])));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&Value::Null));
    }
}
