pub mod classification;
pub mod field;

pub use classification::{Classification, ClassificationGrid};
pub use field::{FieldGrid, FieldSet};
