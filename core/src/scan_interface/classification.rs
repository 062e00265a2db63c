use ndarray::Array2;

use crate::prelude::ScoreSet;

/// Discrete gate-id product: the winning category index per gate plus the
/// legend metadata downstream writers attach to the field.
#[derive(Debug, Clone)]
pub struct ClassificationGrid {
    pub data: Array2<usize>,
    pub legend: Vec<String>,
    pub units: String,
    pub standard_name: String,
    pub long_name: String,
    pub notes: String,
    pub valid_min: usize,
    pub valid_max: usize,
}

impl ClassificationGrid {
    /// Builds the metadata around a finished index grid.
    ///
    /// `valid_max` is the largest index actually assigned anywhere in the
    /// grid, not the category count.
    pub fn new(data: Array2<usize>, legend: Vec<String>) -> Self {
        let valid_max = data.iter().copied().max().unwrap_or(0);
        let notes = legend
            .iter()
            .enumerate()
            .map(|(index, name)| format!("{}: {}", index, name))
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            data,
            legend,
            units: String::new(),
            standard_name: "gate_id".to_string(),
            long_name: "Classification of dominant scatterer".to_string(),
            notes,
            valid_min: 0,
            valid_max,
        }
    }
}

/// Full engine output: the gate-id grid and, on request, the per-category
/// score grids that produced it.
#[derive(Debug, Clone)]
pub struct Classification {
    pub gate_id: ClassificationGrid,
    pub scores: Option<ScoreSet>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn valid_max_tracks_the_observed_maximum() {
        let legend = vec![
            "multi_trip".to_string(),
            "rain".to_string(),
            "snow".to_string(),
            "no_scatter".to_string(),
            "melting".to_string(),
        ];
        let grid = ClassificationGrid::new(array![[0, 2], [1, 0]], legend);
        assert_eq!(grid.valid_min, 0);
        assert_eq!(grid.valid_max, 2);
    }

    #[test]
    fn notes_enumerate_the_legend_in_order() {
        let grid = ClassificationGrid::new(
            array![[0]],
            vec!["rain".to_string(), "snow".to_string()],
        );
        assert_eq!(grid.notes, "0: rain 1: snow");
        assert_eq!(grid.standard_name, "gate_id");
    }
}
