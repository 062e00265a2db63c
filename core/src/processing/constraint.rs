use ndarray::Zip;

use crate::config::ConstraintRule;
use crate::prelude::{ClassifyError, ClassifyResult, ScoreSet};
use crate::scan_interface::FieldSet;
use crate::telemetry::log::LogManager;

/// Applies hard-evidence vetoes to the fuzzy score grids.
pub struct ConstraintStage {
    debug: bool,
    logger: LogManager,
}

impl ConstraintStage {
    pub fn new(debug: bool) -> Self {
        Self {
            debug,
            logger: LogManager::for_stage("constraint"),
        }
    }

    /// Zeroes each rule's target category wherever the rule's field lies in
    /// `[lower, upper]`, both ends inclusive.
    ///
    /// Every rule writes only 0.0 and only into its own category's grid, so
    /// application order never changes the result and re-application is a
    /// no-op. NaN field values match no range and are left alone.
    pub fn apply(
        &self,
        rules: &[ConstraintRule],
        scores: &mut ScoreSet,
        fields: &FieldSet,
    ) -> ClassifyResult<()> {
        for rule in rules {
            if self.debug {
                self.logger
                    .record(&format!("hard constraining {}", rule.category));
            }
            let field = fields
                .get(&rule.field)
                .ok_or_else(|| ClassifyError::MissingField {
                    field: rule.field.clone(),
                    category: rule.category.clone(),
                })?;
            let grid = scores
                .grid_mut(&rule.category)
                .ok_or_else(|| ClassifyError::UnknownCategory {
                    category: rule.category.clone(),
                })?;
            Zip::from(grid).and(&field.data).for_each(|score, &value| {
                if value >= rule.lower && value <= rule.upper {
                    *score = 0.0;
                }
            });
        }
        Ok(())
    }
}
