use ndarray::Array2;

use crate::prelude::{ClassifyError, ClassifyResult};

/// Single named observation grid, rows = scan rays, columns = range gates.
#[derive(Debug, Clone)]
pub struct FieldGrid {
    pub name: String,
    pub units: String,
    pub data: Array2<f64>,
}

impl FieldGrid {
    pub fn new(name: &str, units: &str, data: Array2<f64>) -> Self {
        Self {
            name: name.to_string(),
            units: units.to_string(),
            data,
        }
    }
}

/// Insertion-ordered collection of the input fields for one classification
/// run. All fields must share one grid shape; the engine checks this at the
/// pipeline boundary before any scoring starts.
#[derive(Debug, Clone, Default)]
pub struct FieldSet {
    fields: Vec<FieldGrid>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Adds a field, replacing any previous field with the same name.
    pub fn insert(&mut self, field: FieldGrid) {
        if let Some(existing) = self.fields.iter_mut().find(|f| f.name == field.name) {
            *existing = field;
        } else {
            self.fields.push(field);
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldGrid> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Confirms every field shares one `(rays, gates)` shape and returns it.
    pub fn validate_shape(&self) -> ClassifyResult<(usize, usize)> {
        let first = self
            .fields
            .first()
            .ok_or_else(|| ClassifyError::InvalidInput("no input fields supplied".to_string()))?;
        let expected = first.data.dim();
        for field in &self.fields[1..] {
            let found = field.data.dim();
            if found != expected {
                return Err(ClassifyError::ShapeMismatch {
                    field: field.name.clone(),
                    expected,
                    found,
                });
            }
        }
        Ok(expected)
    }
}
