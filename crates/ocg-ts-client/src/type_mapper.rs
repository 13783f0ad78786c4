//! Shape → TypeScript type extraction.

use ocg_core::infer::{ScalarKind, Shape};

/// One emitted interface property.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    pub name: String,
    pub type_name: String,
    pub is_optional: bool,
}

/// Map a shape to its TypeScript type string representation.
pub fn shape_to_ts(shape: &Shape) -> String {
    match shape {
        Shape::Scalar(ScalarKind::String) => "string".to_string(),
        Shape::Scalar(ScalarKind::Number) => "number".to_string(),
        Shape::Scalar(ScalarKind::Boolean) => "boolean".to_string(),
        Shape::Scalar(ScalarKind::Null) => "null".to_string(),
        Shape::Scalar(ScalarKind::Any) => "unknown".to_string(),
        Shape::List(element) => {
            let element_ts = shape_to_ts(element);
            if element_ts.contains('|') {
                format!("({element_ts})[]")
            } else {
                format!("{element_ts}[]")
            }
        }
        Shape::Record(fields) => {
            if fields.is_empty() {
                return "Record<string, unknown>".to_string();
            }
            let field_strs: Vec<String> = fields
                .iter()
                .map(|field| {
                    let ts_type = shape_to_ts(&field.shape);
                    let name = ts_property_name(&field.name);
                    if field.optional {
                        format!("{name}?: {ts_type}")
                    } else {
                        format!("{name}: {ts_type}")
                    }
                })
                .collect();
            format!("{{ {} }}", field_strs.join("; "))
        }
    }
}

/// Extract the ordered property triples of a record shape. Non-record
/// shapes have no extractable properties.
pub fn shape_fields(shape: &Shape) -> Vec<FieldDef> {
    match shape {
        Shape::Record(fields) => fields
            .iter()
            .map(|field| FieldDef {
                name: ts_property_name(&field.name),
                type_name: shape_to_ts(&field.shape),
                is_optional: field.optional,
            })
            .collect(),
        Shape::Scalar(_) | Shape::List(_) => Vec::new(),
    }
}

/// Quote a property name when it is not a valid TypeScript identifier
/// (example-derived keys are frequently numeric strings).
pub fn ts_property_name(name: &str) -> String {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_' || first == '$')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        None => false,
    };
    if valid {
        name.to_string()
    } else {
        format!("\"{name}\"")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ocg_core::infer::RecordField;

    #[test]
    fn test_scalars() {
        assert_eq!(shape_to_ts(&Shape::Scalar(ScalarKind::String)), "string");
        assert_eq!(shape_to_ts(&Shape::Scalar(ScalarKind::Number)), "number");
        assert_eq!(shape_to_ts(&Shape::Scalar(ScalarKind::Boolean)), "boolean");
        assert_eq!(shape_to_ts(&Shape::Scalar(ScalarKind::Null)), "null");
        assert_eq!(shape_to_ts(&Shape::Scalar(ScalarKind::Any)), "unknown");
    }

    #[test]
    fn test_list() {
        assert_eq!(
            shape_to_ts(&Shape::List(Box::new(Shape::Scalar(ScalarKind::String)))),
            "string[]"
        );
    }

    #[test]
    fn test_inline_record() {
        let shape = Shape::Record(vec![
            RecordField {
                name: "id".to_string(),
                shape: Shape::Scalar(ScalarKind::String),
                optional: false,
            },
            RecordField {
                name: "count".to_string(),
                shape: Shape::Scalar(ScalarKind::Number),
                optional: true,
            },
        ]);
        assert_eq!(shape_to_ts(&shape), "{ id: string; count?: number }");
    }

    #[test]
    fn test_empty_record() {
        assert_eq!(shape_to_ts(&Shape::empty_record()), "Record<string, unknown>");
    }

    #[test]
    fn test_numeric_keys_are_quoted() {
        let shape = Shape::Record(vec![RecordField {
            name: "145".to_string(),
            shape: Shape::Scalar(ScalarKind::String),
            optional: false,
        }]);
        assert_eq!(shape_to_ts(&shape), "{ \"145\": string }");
        assert_eq!(shape_fields(&shape)[0].name, "\"145\"");
    }

    #[test]
    fn test_fields_of_non_record_are_empty() {
        assert!(shape_fields(&Shape::Scalar(ScalarKind::String)).is_empty());
        assert!(shape_fields(&Shape::List(Box::new(Shape::Scalar(ScalarKind::Any)))).is_empty());
    }
}
