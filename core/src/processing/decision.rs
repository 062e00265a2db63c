use ndarray::Array2;

use crate::prelude::{ClassifyError, ClassifyResult, ScoreSet};
use crate::scan_interface::ClassificationGrid;
use crate::telemetry::log::LogManager;

/// Final stage that picks the winning category for every gate.
pub struct DecisionStage {
    debug: bool,
    logger: LogManager,
}

impl DecisionStage {
    pub fn new(debug: bool) -> Self {
        Self {
            debug,
            logger: LogManager::for_stage("decision"),
        }
    }

    /// Per-cell strict-maximum vote across the ordered score grids.
    ///
    /// A tie goes to the lowest category index, so the configured category
    /// order is the tie-break contract.
    pub fn decide(&self, scores: &ScoreSet) -> ClassifyResult<ClassificationGrid> {
        let grids = scores.grids();
        let first = grids.first().ok_or_else(|| {
            ClassifyError::InvalidInput("no category scores to decide over".to_string())
        })?;

        let mut data = Array2::<usize>::zeros(first.dim());
        for ((ray, gate), winner) in data.indexed_iter_mut() {
            let mut best = 0;
            let mut best_score = first[[ray, gate]];
            for (index, grid) in grids.iter().enumerate().skip(1) {
                let score = grid[[ray, gate]];
                if score > best_score {
                    best = index;
                    best_score = score;
                }
            }
            *winner = best;
        }

        let grid = ClassificationGrid::new(data, scores.names().to_vec());
        if self.debug {
            self.logger.record(&format!(
                "decided over {} categories, max observed index {}",
                scores.len(),
                grid.valid_max
            ));
        }
        Ok(grid)
    }
}
