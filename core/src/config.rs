use serde::{Deserialize, Serialize};

use crate::math::trapezoid::TrapezoidShape;

/// One weighted evidence source inside a category definition.
///
/// A weight of 0 is legal: the field is documented as part of the category
/// but contributes nothing to its score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldRule {
    pub field: String,
    pub shape: TrapezoidShape,
    pub weight: f64,
}

/// Named scatterer category with its weighted membership rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDef {
    pub name: String,
    pub rules: Vec<FieldRule>,
}

/// Hard-evidence veto: the category's score is forced to zero wherever the
/// named field lies in `[lower, upper]`, both ends inclusive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstraintRule {
    pub category: String,
    pub field: String,
    pub lower: f64,
    pub upper: f64,
}

impl ConstraintRule {
    pub fn new(category: &str, field: &str, lower: f64, upper: f64) -> Self {
        Self {
            category: category.to_string(),
            field: field.to_string(),
            lower,
            upper,
        }
    }
}

/// Median-filter window applied to each raw score grid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SmoothingWindow {
    pub rays: usize,
    pub gates: usize,
}

impl Default for SmoothingWindow {
    fn default() -> Self {
        Self { rays: 3, gates: 4 }
    }
}

/// Complete, injectable engine configuration.
///
/// Category order is part of the contract: it fixes each category's
/// classification index, the output legend, and the tie-break (the lowest
/// index wins a tied score). `Default` supplies the reference tables for the
/// five scatterer categories; callers may replace any part of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    pub categories: Vec<CategoryDef>,
    pub constraints: Vec<ConstraintRule>,
    pub smoothing: SmoothingWindow,
    pub debug: bool,
    pub keep_scores: bool,
}

impl ClassifierConfig {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            categories: vec![
                category(
                    "multi_trip",
                    vec![
                        rule("velocity_texture", [0.0, 0.0, 80.0, 90.0], 1.0),
                        rule("cross_correlation_ratio", [0.5, 0.7, 1.0, 1.0], 0.0),
                        rule("normalized_coherent_power", [0.0, 0.0, 0.5, 0.6], 3.0),
                        rule("height", [0.0, 0.0, 5000.0, 8000.0], 1.0),
                        rule("sounding_temperature", [-100.0, -100.0, 100.0, 100.0], 0.0),
                        rule("SNR", [15.0, 20.0, 1000.0, 1000.0], 1.0),
                    ],
                ),
                category(
                    "rain",
                    vec![
                        rule("differential_phase_texture", [0.0, 0.0, 80.0, 90.0], 1.0),
                        rule("cross_correlation_ratio", [0.94, 0.96, 1.0, 1.0], 1.0),
                        rule("normalized_coherent_power", [0.4, 0.5, 1.0, 1.0], 1.0),
                        rule("height", [0.0, 0.0, 5000.0, 6000.0], 0.0),
                        rule("sounding_temperature", [0.0, 3.0, 100.0, 100.0], 2.0),
                        rule("SNR", [8.0, 10.0, 1000.0, 1000.0], 1.0),
                    ],
                ),
                category(
                    "snow",
                    vec![
                        rule("differential_phase_texture", [0.0, 0.0, 80.0, 90.0], 1.0),
                        rule("cross_correlation_ratio", [0.85, 0.9, 1.0, 1.0], 1.0),
                        rule("normalized_coherent_power", [0.4, 0.5, 1.0, 1.0], 1.0),
                        rule("height", [0.0, 0.0, 25000.0, 25000.0], 0.0),
                        rule("sounding_temperature", [-100.0, -100.0, 0.0, 1.0], 2.0),
                        rule("SNR", [8.0, 10.0, 1000.0, 1000.0], 1.0),
                    ],
                ),
                category(
                    "no_scatter",
                    vec![
                        rule("differential_phase_texture", [90.0, 90.0, 400.0, 400.0], 0.0),
                        rule("cross_correlation_ratio", [0.0, 0.0, 0.1, 0.2], 0.0),
                        rule("normalized_coherent_power", [0.0, 0.0, 0.1, 0.2], 0.0),
                        rule("height", [0.0, 0.0, 25000.0, 25000.0], 0.0),
                        rule("sounding_temperature", [-100.0, -100.0, 100.0, 100.0], 0.0),
                        rule("SNR", [-100.0, -100.0, 8.0, 10.0], 6.0),
                    ],
                ),
                category(
                    "melting",
                    vec![
                        rule("differential_phase_texture", [20.0, 30.0, 80.0, 90.0], 0.0),
                        rule("cross_correlation_ratio", [0.6, 0.7, 0.94, 0.96], 4.0),
                        rule("normalized_coherent_power", [0.4, 0.5, 1.0, 1.0], 0.0),
                        rule("height", [0.0, 0.0, 25000.0, 25000.0], 0.0),
                        rule("sounding_temperature", [-1.0, 0.0, 3.5, 5.0], 2.0),
                        rule("SNR", [8.0, 10.0, 1000.0, 1000.0], 0.0),
                    ],
                ),
            ],
            constraints: vec![
                ConstraintRule::new("melting", "sounding_temperature", 10.0, 100.0),
                ConstraintRule::new("melting", "sounding_temperature", -10000.0, -2.0),
                ConstraintRule::new("rain", "sounding_temperature", -1000.0, -5.0),
                ConstraintRule::new("multi_trip", "height", 10000.0, 1000000.0),
            ],
            smoothing: SmoothingWindow::default(),
            debug: false,
            keep_scores: false,
        }
    }
}

fn rule(field: &str, shape: [f64; 4], weight: f64) -> FieldRule {
    FieldRule {
        field: field.to_string(),
        shape: shape.into(),
        weight,
    }
}

fn category(name: &str, rules: Vec<FieldRule>) -> CategoryDef {
    CategoryDef {
        name: name.to_string(),
        rules,
    }
}
