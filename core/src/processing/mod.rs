pub mod classifier;
pub mod constraint;
pub mod decision;
pub mod scoring;

pub use classifier::GateClassifier;
pub use constraint::ConstraintStage;
pub use decision::DecisionStage;
pub use scoring::ScoringStage;
