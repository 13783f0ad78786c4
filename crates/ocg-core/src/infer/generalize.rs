//! Example generalization: folding heterogeneous example payloads into one
//! representative [`Shape`].

use serde_json::Value;

use super::merge::{meaningfully_different, merge_values};
use super::shape::{RecordField, ScalarKind, Shape};

/// Generalize zero or more example values for the same logical field into
/// one representative shape.
///
/// An empty sample sequence yields the empty record; callers substitute the
/// placeholder shape themselves. A single sample `[x]` is equivalent to
/// generalizing `x` directly.
pub fn generalize(samples: &[Value]) -> Shape {
    let mut samples = samples.iter().cloned();
    let Some(first) = samples.next() else {
        return Shape::empty_record();
    };
    let merged = samples.fold(first, merge_values);
    generalize_value(&merged)
}

fn generalize_value(value: &Value) -> Shape {
    match value {
        Value::Null => Shape::Scalar(ScalarKind::Null),
        Value::Bool(_) => Shape::Scalar(ScalarKind::Boolean),
        Value::Number(_) => Shape::Scalar(ScalarKind::Number),
        Value::String(_) => Shape::Scalar(ScalarKind::String),
        Value::Array(items) => generalize_list(items),
        Value::Object(record) => generalize_record(record),
    }
}

/// Arrays collapse to a single element shape: all elements are merged and
/// the merge is generalized, regardless of length or per-element
/// heterogeneity.
fn generalize_list(items: &[Value]) -> Shape {
    let mut items = items.iter().cloned();
    let Some(first) = items.next() else {
        return Shape::List(Box::new(Shape::Scalar(ScalarKind::Any)));
    };
    let merged = items.fold(first, merge_values);
    Shape::List(Box::new(generalize_value(&merged)))
}

/// Records either keep every key (a genuine fixed-shape record) or collapse
/// to a single representative field (an ID-keyed map whose keys carry no
/// schema meaning).
///
/// The decision folds the values of all keys, starting from an empty
/// record, and checks each next value against the accumulated merge with
/// [`meaningfully_different`]. The empty seed makes any scalar-valued group
/// register as meaningful at the first step, so only container-valued
/// groups with compatible structure collapse.
fn generalize_record(record: &serde_json::Map<String, Value>) -> Shape {
    if record.is_empty() {
        return Shape::empty_record();
    }

    let mut merged = Value::Object(serde_json::Map::new());
    let mut collapsible = true;
    for value in record.values() {
        collapsible = collapsible && !meaningfully_different(&merged, value);
        merged = merge_values(merged, value.clone());
    }

    if collapsible {
        let first_key = record.keys().next().expect("record is non-empty");
        return Shape::Record(vec![RecordField {
            name: first_key.clone(),
            shape: generalize_value(&merged),
            optional: false,
        }]);
    }

    Shape::Record(
        record
            .iter()
            .map(|(name, value)| RecordField {
                name: name.clone(),
                shape: generalize_value(value),
                optional: false,
            })
            .collect(),
    )
}
