use ndarray::Array2;
use rayon::prelude::*;

use crate::config::{CategoryDef, SmoothingWindow};
use crate::math::median::MedianFilter;
use crate::prelude::{ClassifyError, ClassifyResult, ScoreSet};
use crate::scan_interface::FieldSet;
use crate::telemetry::log::LogManager;

/// Scoring stage that turns category definitions into fuzzy score grids.
pub struct ScoringStage {
    smoothing: SmoothingWindow,
    debug: bool,
    logger: LogManager,
}

impl ScoringStage {
    pub fn new(smoothing: SmoothingWindow, debug: bool) -> Self {
        Self {
            smoothing,
            debug,
            logger: LogManager::for_stage("scoring"),
        }
    }

    /// Accumulates weighted memberships for one category, then despeckles
    /// the result with the configured median window.
    ///
    /// A rule naming a field absent from `fields` aborts the run; skipping
    /// it would silently bias the category's score.
    pub fn score(
        &self,
        category: &CategoryDef,
        fields: &FieldSet,
        shape: (usize, usize),
    ) -> ClassifyResult<Array2<f64>> {
        if self.debug {
            self.logger
                .record(&format!("scoring category {}", category.name));
        }
        let mut score = Array2::<f64>::zeros(shape);
        for rule in &category.rules {
            let field = fields
                .get(&rule.field)
                .ok_or_else(|| ClassifyError::MissingField {
                    field: rule.field.clone(),
                    category: category.name.clone(),
                })?;
            let membership = rule.shape.evaluate(field.data.view());
            score.scaled_add(rule.weight, &membership);
        }
        Ok(MedianFilter::apply(
            score.view(),
            self.smoothing.rays,
            self.smoothing.gates,
        ))
    }

    /// Scores every category, fanning the independent per-category work out
    /// across worker threads. The returned grids follow the category order.
    pub fn score_all(
        &self,
        categories: &[CategoryDef],
        fields: &FieldSet,
        shape: (usize, usize),
    ) -> ClassifyResult<ScoreSet> {
        let grids = categories
            .par_iter()
            .map(|category| self.score(category, fields, shape))
            .collect::<ClassifyResult<Vec<_>>>()?;

        let mut scores = ScoreSet::with_capacity(categories.len());
        for (category, grid) in categories.iter().zip(grids) {
            scores.push(category.name.clone(), grid);
        }
        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldRule;
    use crate::math::trapezoid::TrapezoidShape;
    use crate::scan_interface::FieldGrid;
    use ndarray::array;

    fn category(name: &str, rules: Vec<FieldRule>) -> CategoryDef {
        CategoryDef {
            name: name.to_string(),
            rules,
        }
    }

    fn field_rule(field: &str, shape: TrapezoidShape, weight: f64) -> FieldRule {
        FieldRule {
            field: field.to_string(),
            shape,
            weight,
        }
    }

    #[test]
    fn score_is_the_weighted_membership_sum() {
        let mut fields = FieldSet::new();
        fields.insert(FieldGrid::new("F", "", Array2::from_elem((3, 4), 5.0)));
        let cat = category(
            "rain",
            vec![field_rule(
                "F",
                TrapezoidShape::new(0.0, 0.0, 10.0, 10.0),
                2.0,
            )],
        );

        let stage = ScoringStage::new(SmoothingWindow::default(), false);
        let score = stage.score(&cat, &fields, (3, 4)).unwrap();
        assert!(score.iter().all(|&v| (v - 2.0).abs() < 1e-12));
    }

    #[test]
    fn zero_weight_rules_contribute_nothing() {
        let mut fields = FieldSet::new();
        fields.insert(FieldGrid::new("F", "", Array2::from_elem((2, 2), 5.0)));
        let cat = category(
            "rain",
            vec![
                field_rule("F", TrapezoidShape::new(0.0, 0.0, 10.0, 10.0), 1.0),
                field_rule("F", TrapezoidShape::new(0.0, 0.0, 10.0, 10.0), 0.0),
            ],
        );

        let stage = ScoringStage::new(SmoothingWindow { rays: 1, gates: 1 }, false);
        let score = stage.score(&cat, &fields, (2, 2)).unwrap();
        assert!(score.iter().all(|&v| (v - 1.0).abs() < 1e-12));
    }

    #[test]
    fn missing_field_aborts_and_names_both_sides() {
        let fields = FieldSet::new();
        let cat = category(
            "snow",
            vec![field_rule(
                "reflectivity",
                TrapezoidShape::new(0.0, 0.0, 1.0, 1.0),
                1.0,
            )],
        );

        let stage = ScoringStage::new(SmoothingWindow::default(), false);
        match stage.score(&cat, &fields, (2, 2)) {
            Err(ClassifyError::MissingField { field, category }) => {
                assert_eq!(field, "reflectivity");
                assert_eq!(category, "snow");
            }
            other => panic!("expected missing field error, got {:?}", other),
        }
    }

    #[test]
    fn nan_cells_contribute_zero_membership() {
        let mut fields = FieldSet::new();
        fields.insert(FieldGrid::new(
            "F",
            "",
            array![[5.0, f64::NAN], [5.0, 5.0]],
        ));
        let cat = category(
            "rain",
            vec![field_rule(
                "F",
                TrapezoidShape::new(0.0, 0.0, 10.0, 10.0),
                1.0,
            )],
        );

        let stage = ScoringStage::new(SmoothingWindow { rays: 1, gates: 1 }, false);
        let score = stage.score(&cat, &fields, (2, 2)).unwrap();
        assert_eq!(score[[0, 1]], 0.0);
        assert_eq!(score[[0, 0]], 1.0);
        assert!(score.iter().all(|v| !v.is_nan()));
    }

    #[test]
    fn score_all_preserves_category_order() {
        let mut fields = FieldSet::new();
        fields.insert(FieldGrid::new("F", "", Array2::from_elem((2, 2), 5.0)));
        let categories = vec![
            category(
                "first",
                vec![field_rule("F", TrapezoidShape::new(0.0, 0.0, 10.0, 10.0), 1.0)],
            ),
            category(
                "second",
                vec![field_rule("F", TrapezoidShape::new(0.0, 0.0, 10.0, 10.0), 3.0)],
            ),
        ];

        let stage = ScoringStage::new(SmoothingWindow { rays: 1, gates: 1 }, false);
        let scores = stage.score_all(&categories, &fields, (2, 2)).unwrap();
        assert_eq!(scores.names(), &["first".to_string(), "second".to_string()]);
        assert_eq!(scores.grids()[1][[0, 0]], 3.0);
    }
}
