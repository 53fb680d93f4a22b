// Mock prediction engine exports
pub mod predictor;
pub mod registry;

pub use predictor::{
    risk_level_for_confidence, round3, Predictor, CASE_CLASSIFICATIONS, RISK_LEVELS,
};
pub use registry::{outbreak_risk_factors, recommendations_for, ModelRegistry};
