/// The textual type tag carried by a scalar shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    String,
    Number,
    Boolean,
    /// A lone `null` sample: nullable with unknown underlying type.
    Null,
    /// Accepts anything. Used by placeholder shapes.
    Any,
}

/// A field of a record shape.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordField {
    pub name: String,
    pub shape: Shape,
    pub optional: bool,
}

/// A structural description of a value, inferred rather than declared.
///
/// Shapes are pure value objects: built bottom-up by the generalizer (or
/// converted from a declared schema) and consumed read-only by the client
/// model builder.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Scalar(ScalarKind),
    /// Ordered fields. The field set of a generalized record is the merge
    /// of every sample's field set.
    Record(Vec<RecordField>),
    /// A list always wraps exactly one element shape, regardless of how
    /// many (or how heterogeneous) the sampled elements were.
    List(Box<Shape>),
}

impl Shape {
    pub fn empty_record() -> Self {
        Shape::Record(Vec::new())
    }

    /// An empty shape suppresses its type declaration and the matching
    /// function parameter.
    pub fn is_empty(&self) -> bool {
        matches!(self, Shape::Record(fields) if fields.is_empty())
    }

    /// The placeholder substituted when no real shape can be derived: a
    /// single optional accepts-anything field. The suffix keeps concurrent
    /// placeholder fields from colliding within one generation run.
    pub fn placeholder(suffix: &str) -> Self {
        Shape::Record(vec![RecordField {
            name: format!("payload{suffix}"),
            shape: Shape::Scalar(ScalarKind::Any),
            optional: true,
        }])
    }
}
