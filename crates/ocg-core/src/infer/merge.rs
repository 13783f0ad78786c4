//! Structural merge and difference over raw JSON values. The
//! field-collapse decision in [`super::generalize`] depends on exactly
//! these precedence rules:
//! - `null` loses to any non-null value, in both directions
//! - record + record: deep field union, right side recursing into left
//! - list + list: element concatenation
//! - anything else: the right operand wins (last write wins for scalars)

use serde_json::Value;

/// Fold two JSON values into one structural representative.
pub fn merge_values(a: Value, b: Value) -> Value {
    match (a, b) {
        (Value::Null, b) => b,
        (a, Value::Null) => a,
        (Value::Object(mut a), Value::Object(b)) => {
            for (key, value) in b {
                match a.entry(key) {
                    serde_json::map::Entry::Occupied(mut slot) => {
                        let existing = slot.get_mut();
                        *existing = merge_values(std::mem::take(existing), value);
                    }
                    serde_json::map::Entry::Vacant(slot) => {
                        slot.insert(value);
                    }
                }
            }
            Value::Object(a)
        }
        (Value::Array(mut a), Value::Array(b)) => {
            a.extend(b);
            Value::Array(a)
        }
        (_, b) => b,
    }
}

/// Whether two values differ in a way that rules out record collapse.
///
/// Only an in-place replacement where both sides are non-null and of
/// different JS-`typeof`-style kinds counts. Additive changes, null↔value
/// changes, same-kind value changes, and array-vs-object changes do not.
pub fn meaningfully_different(old: &Value, new: &Value) -> bool {
    match (old, new) {
        (Value::Object(a), Value::Object(b)) => a.iter().any(|(key, old_value)| {
            b.get(key)
                .is_some_and(|new_value| meaningfully_different(old_value, new_value))
        }),
        (Value::Array(a), Value::Array(b)) => a
            .iter()
            .zip(b.iter())
            .any(|(old_value, new_value)| meaningfully_different(old_value, new_value)),
        (Value::Null, _) | (_, Value::Null) => false,
        (old, new) => js_kind(old) != js_kind(new),
    }
}

/// JS `typeof`-style kind: arrays and objects share one kind, mirroring the
/// dynamic check this heuristic was distilled from.
fn js_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) | Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_loses_to_values() {
        assert_eq!(merge_values(json!(null), json!("x")), json!("x"));
        assert_eq!(merge_values(json!("x"), json!(null)), json!("x"));
    }

    #[test]
    fn objects_union_deeply() {
        let merged = merge_values(
            json!({"a": {"x": 1}, "b": 2}),
            json!({"a": {"y": 3}, "c": 4}),
        );
        assert_eq!(merged, json!({"a": {"x": 1, "y": 3}, "b": 2, "c": 4}));
    }

    #[test]
    fn arrays_concatenate() {
        let merged = merge_values(json!([1, 2]), json!([3]));
        assert_eq!(merged, json!([1, 2, 3]));
    }

    #[test]
    fn scalars_last_write_wins() {
        assert_eq!(merge_values(json!(1), json!("x")), json!("x"));
    }

    #[test]
    fn type_change_is_meaningful() {
        assert!(meaningfully_different(&json!({"a": 1}), &json!({"a": "x"})));
    }

    #[test]
    fn null_change_is_not_meaningful() {
        assert!(!meaningfully_different(
            &json!({"a": 1}),
            &json!({"a": null})
        ));
        assert!(!meaningfully_different(
            &json!({"a": null}),
            &json!({"a": 1})
        ));
    }

    #[test]
    fn additions_are_not_meaningful() {
        assert!(!meaningfully_different(
            &json!({"a": 1}),
            &json!({"a": 1, "b": "x"})
        ));
    }

    #[test]
    fn array_vs_object_is_not_meaningful() {
        assert!(!meaningfully_different(&json!([1]), &json!({"a": 1})));
    }

    #[test]
    fn scalar_vs_container_is_meaningful() {
        assert!(meaningfully_different(&json!(1), &json!({"a": 1})));
        assert!(meaningfully_different(&json!({"a": 1}), &json!("x")));
    }

    #[test]
    fn nested_same_kind_change_is_not_meaningful() {
        assert!(!meaningfully_different(
            &json!({"a": {"b": "one"}}),
            &json!({"a": {"b": "two"}})
        ));
    }
}
