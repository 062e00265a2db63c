use ndarray::Array2;

/// Common error type for classification runs.
#[derive(thiserror::Error, Debug)]
pub enum ClassifyError {
    #[error("field `{field}` required by category `{category}` is not among the supplied fields")]
    MissingField { field: String, category: String },
    #[error("field `{field}` has shape {found:?}, expected {expected:?}")]
    ShapeMismatch {
        field: String,
        expected: (usize, usize),
        found: (usize, usize),
    },
    #[error("constraint rule targets unknown category `{category}`")]
    UnknownCategory { category: String },
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type ClassifyResult<T> = Result<T, ClassifyError>;

/// Ordered per-category score grids passed between the pipeline stages.
///
/// Insertion order fixes each category's classification index and is never
/// reordered once built.
#[derive(Debug, Clone, Default)]
pub struct ScoreSet {
    names: Vec<String>,
    grids: Vec<Array2<f64>>,
}

impl ScoreSet {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            names: Vec::with_capacity(capacity),
            grids: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, name: String, grid: Array2<f64>) {
        self.names.push(name);
        self.grids.push(grid);
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn grids(&self) -> &[Array2<f64>] {
        &self.grids
    }

    pub fn grid(&self, name: &str) -> Option<&Array2<f64>> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|index| &self.grids[index])
    }

    pub fn grid_mut(&mut self, name: &str) -> Option<&mut Array2<f64>> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|index| &mut self.grids[index])
    }
}
