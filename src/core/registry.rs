use crate::models::{HistoryRecord, ModelInfo, PredictionKind};

/// Static catalog of the mock models and their canned records.
///
/// Everything here is literal data: the model listing, the per-kind
/// recommendation lists, and the two historical predictions. Nothing is
/// derived from requests or stored between them.
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry;

impl ModelRegistry {
    pub fn new() -> Self {
        Self
    }

    /// The three models advertised by GET /models, always "active".
    pub fn models(&self) -> Vec<ModelInfo> {
        vec![
            ModelInfo {
                name: "outbreak_detection".to_string(),
                version: "v2.1.0".to_string(),
                accuracy: 0.89,
                last_trained: "2025-01-10T10:30:00Z".to_string(),
                status: "active".to_string(),
            },
            ModelInfo {
                name: "case_classification".to_string(),
                version: "v1.8.0".to_string(),
                accuracy: 0.92,
                last_trained: "2025-01-08T14:20:00Z".to_string(),
                status: "active".to_string(),
            },
            ModelInfo {
                name: "risk_assessment".to_string(),
                version: "v3.0.0".to_string(),
                accuracy: 0.85,
                last_trained: "2025-01-12T09:15:00Z".to_string(),
                status: "active".to_string(),
            },
        ]
    }

    /// The two fixed records served by GET /predictions/history.
    pub fn history(&self) -> Vec<HistoryRecord> {
        vec![
            HistoryRecord {
                id: "pred_001".to_string(),
                kind: "outbreak_detection".to_string(),
                location: "Bida, Niger State".to_string(),
                risk_level: "High".to_string(),
                confidence: 0.89,
                timestamp: "2025-01-14T10:30:00Z".to_string(),
            },
            HistoryRecord {
                id: "pred_002".to_string(),
                kind: "case_classification".to_string(),
                location: "Ile-Ife, Osun State".to_string(),
                risk_level: "Confirmed".to_string(),
                confidence: 0.94,
                timestamp: "2025-01-14T09:15:00Z".to_string(),
            },
        ]
    }
}

/// Recommendation list attached to every prediction of the given kind.
pub fn recommendations_for(kind: PredictionKind) -> Vec<String> {
    let items: [&str; 4] = match kind {
        PredictionKind::Outbreak => [
            "Increase surveillance in the area",
            "Distribute educational materials about Lassa fever prevention",
            "Prepare isolation facilities",
            "Alert nearby health facilities",
        ],
        PredictionKind::CaseClassification => [
            "Isolate patient immediately",
            "Collect samples for laboratory testing",
            "Initiate contact tracing",
            "Provide supportive care",
        ],
        PredictionKind::RiskAssessment => [
            "Monitor environmental conditions",
            "Assess healthcare capacity",
            "Review emergency response plans",
            "Coordinate with local health authorities",
        ],
    };

    items.iter().map(|s| s.to_string()).collect()
}

/// Risk factors the outbreak model reports considering (canned, logged only).
pub fn outbreak_risk_factors() -> [&'static str; 4] {
    [
        "High population density detected",
        "Recent case clusters in neighboring areas",
        "Environmental conditions favorable for rodent activity",
        "Limited healthcare infrastructure",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_three_active_models() {
        let registry = ModelRegistry::new();
        let models = registry.models();

        assert_eq!(models.len(), 3);
        for model in &models {
            assert_eq!(model.status, "active");
        }

        let names: Vec<&str> = models.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["outbreak_detection", "case_classification", "risk_assessment"]
        );
    }

    #[test]
    fn test_history_is_fixed() {
        let registry = ModelRegistry::new();
        let history = registry.history();

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].id, "pred_001");
        assert_eq!(history[0].risk_level, "High");
        assert_eq!(history[1].id, "pred_002");
        assert_eq!(history[1].kind, "case_classification");
    }

    #[test]
    fn test_every_kind_has_four_recommendations() {
        for kind in PredictionKind::ALL {
            assert_eq!(recommendations_for(kind).len(), 4);
        }
    }

    #[test]
    fn test_outbreak_risk_factors_are_fixed() {
        let factors = outbreak_risk_factors();
        assert_eq!(factors.len(), 4);
        assert_eq!(factors[0], "High population density detected");
        assert_eq!(factors[3], "Limited healthcare infrastructure");
    }
}
