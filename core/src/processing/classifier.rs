use crate::config::ClassifierConfig;
use crate::prelude::{ClassifyError, ClassifyResult};
use crate::processing::constraint::ConstraintStage;
use crate::processing::decision::DecisionStage;
use crate::processing::scoring::ScoringStage;
use crate::scan_interface::{Classification, FieldSet};
use crate::telemetry::log::LogManager;
use crate::telemetry::metrics::MetricsRecorder;

/// End-to-end gate classifier: validate, score, constrain, decide.
///
/// Holds no per-run state; every grid is created fresh inside `classify` and
/// handed to the caller. Only the telemetry counters persist across calls.
pub struct GateClassifier {
    config: ClassifierConfig,
    logger: LogManager,
    metrics: MetricsRecorder,
}

impl GateClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            config,
            logger: LogManager::for_stage("classifier"),
            metrics: MetricsRecorder::new(),
        }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Runs one classification over the supplied fields.
    ///
    /// Any failure aborts the whole run; no partial result is returned.
    pub fn classify(&self, fields: &FieldSet) -> ClassifyResult<Classification> {
        let result = self.run(fields);
        match &result {
            Ok(_) => self.metrics.record_classified(),
            Err(_) => self.metrics.record_failure(),
        }
        result
    }

    fn run(&self, fields: &FieldSet) -> ClassifyResult<Classification> {
        let shape = fields.validate_shape()?;
        if self.config.categories.is_empty() {
            return Err(ClassifyError::InvalidInput(
                "no categories configured".to_string(),
            ));
        }

        let scoring = ScoringStage::new(self.config.smoothing, self.config.debug);
        let mut scores = scoring.score_all(&self.config.categories, fields, shape)?;

        let constraints = ConstraintStage::new(self.config.debug);
        constraints.apply(&self.config.constraints, &mut scores, fields)?;

        let decision = DecisionStage::new(self.config.debug);
        let gate_id = decision.decide(&scores)?;

        if self.config.debug {
            self.logger
                .record(&format!("classified {:?} grid", shape));
        }

        Ok(Classification {
            gate_id,
            scores: if self.config.keep_scores {
                Some(scores)
            } else {
                None
            },
        })
    }

    /// (classifications completed, failed runs) since construction.
    pub fn metrics(&self) -> (usize, usize) {
        self.metrics.snapshot()
    }
}
