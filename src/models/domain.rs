use serde::{Deserialize, Serialize};

/// The three mock model families served by the API.
///
/// Each kind carries its wire name (used as `prediction_type` and as the
/// catalog model name), the prefix for generated prediction IDs, and the
/// confidence range its generator draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PredictionKind {
    Outbreak,
    CaseClassification,
    RiskAssessment,
}

impl PredictionKind {
    pub const ALL: [PredictionKind; 3] = [
        PredictionKind::Outbreak,
        PredictionKind::CaseClassification,
        PredictionKind::RiskAssessment,
    ];

    /// Name used on the wire, e.g. "outbreak_detection"
    pub fn wire_name(&self) -> &'static str {
        match self {
            PredictionKind::Outbreak => "outbreak_detection",
            PredictionKind::CaseClassification => "case_classification",
            PredictionKind::RiskAssessment => "risk_assessment",
        }
    }

    /// Prefix for generated prediction IDs, e.g. "outbreak_4821"
    pub fn id_prefix(&self) -> &'static str {
        match self {
            PredictionKind::Outbreak => "outbreak",
            PredictionKind::CaseClassification => "case",
            PredictionKind::RiskAssessment => "risk",
        }
    }

    /// Inclusive confidence range documented for this kind
    pub fn confidence_range(&self) -> (f64, f64) {
        match self {
            PredictionKind::Outbreak => (0.70, 0.95),
            PredictionKind::CaseClassification => (0.75, 0.98),
            PredictionKind::RiskAssessment => (0.80, 0.95),
        }
    }
}
