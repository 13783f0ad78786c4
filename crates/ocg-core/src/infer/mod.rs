pub mod generalize;
pub mod merge;
pub mod shape;

pub use generalize::generalize;
pub use merge::{meaningfully_different, merge_values};
pub use shape::{RecordField, ScalarKind, Shape};
