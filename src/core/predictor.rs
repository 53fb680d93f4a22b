use chrono::Utc;
use rand::Rng;

use crate::core::registry::{outbreak_risk_factors, recommendations_for};
use crate::models::{ModelMetrics, PredictionKind, PredictionRequest, PredictionResponse};

/// Labels returned by the case-classification model.
pub const CASE_CLASSIFICATIONS: [&str; 4] = ["Confirmed", "Probable", "Suspected", "Negative"];

/// Labels returned by the risk-assessment model.
pub const RISK_LEVELS: [&str; 5] = ["Very High", "High", "Moderate", "Low", "Very Low"];

/// Round to 3 decimal places, matching how confidences are serialized.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Map an outbreak confidence to its risk label: High above 0.8,
/// Moderate above 0.6, Low otherwise.
pub fn risk_level_for_confidence(confidence: f64) -> &'static str {
    if confidence > 0.8 {
        "High"
    } else if confidence > 0.6 {
        "Moderate"
    } else {
        "Low"
    }
}

/// Generates the mock predictions served by the API.
///
/// All randomness flows through an explicit `Rng` parameter on the `_with`
/// variants so tests can drive the generators with a seeded `StdRng`; the
/// plain variants use the thread-local RNG.
#[derive(Debug, Clone, Default)]
pub struct Predictor;

impl Predictor {
    pub fn new() -> Self {
        Self
    }

    /// Produce a prediction of the given kind for a request.
    pub fn predict(&self, kind: PredictionKind, request: &PredictionRequest) -> PredictionResponse {
        self.predict_with(&mut rand::thread_rng(), kind, request)
    }

    /// Seedable variant of [`Predictor::predict`].
    pub fn predict_with<R: Rng>(
        &self,
        rng: &mut R,
        kind: PredictionKind,
        request: &PredictionRequest,
    ) -> PredictionResponse {
        let (lo, hi) = kind.confidence_range();
        let confidence = round3(rng.gen_range(lo..=hi));

        let risk_level = match kind {
            PredictionKind::Outbreak => {
                tracing::debug!(
                    "assessing {} against outbreak factors {:?}",
                    request.location_label(),
                    outbreak_risk_factors()
                );
                risk_level_for_confidence(confidence).to_string()
            }
            PredictionKind::CaseClassification => {
                CASE_CLASSIFICATIONS[rng.gen_range(0..CASE_CLASSIFICATIONS.len())].to_string()
            }
            PredictionKind::RiskAssessment => {
                RISK_LEVELS[rng.gen_range(0..RISK_LEVELS.len())].to_string()
            }
        };

        PredictionResponse {
            prediction_id: format!("{}_{}", kind.id_prefix(), rng.gen_range(1000..=9999)),
            prediction_type: kind.wire_name().to_string(),
            confidence,
            risk_level,
            recommendations: recommendations_for(kind),
            timestamp: Utc::now().to_rfc3339(),
            location: request.location_label(),
        }
    }

    /// Pick a prediction kind uniformly at random (batch endpoint).
    pub fn random_kind(&self) -> PredictionKind {
        self.random_kind_with(&mut rand::thread_rng())
    }

    /// Seedable variant of [`Predictor::random_kind`].
    pub fn random_kind_with<R: Rng>(&self, rng: &mut R) -> PredictionKind {
        PredictionKind::ALL[rng.gen_range(0..PredictionKind::ALL.len())]
    }

    /// Canned quality metrics for GET /models/{model_name}/metrics.
    pub fn model_metrics(&self, model_name: &str) -> ModelMetrics {
        self.model_metrics_with(&mut rand::thread_rng(), model_name)
    }

    /// Seedable variant of [`Predictor::model_metrics`].
    pub fn model_metrics_with<R: Rng>(&self, rng: &mut R, model_name: &str) -> ModelMetrics {
        ModelMetrics {
            model_name: model_name.to_string(),
            accuracy: round3(rng.gen_range(0.80..=0.95)),
            precision: round3(rng.gen_range(0.75..=0.92)),
            recall: round3(rng.gen_range(0.78..=0.90)),
            f1_score: round3(rng.gen_range(0.80..=0.91)),
            last_updated: Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LocationData;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn sample_request() -> PredictionRequest {
        PredictionRequest {
            prediction_type: "outbreak_detection".to_string(),
            location_data: LocationData {
                lga_id: "bida".to_string(),
                coordinates: vec![9.0820, 6.0176],
                state: "Niger".to_string(),
                population_density: 1500.0,
            },
            case_data: HashMap::new(),
        }
    }

    #[test]
    fn test_round3() {
        assert_eq!(round3(0.123456), 0.123);
        assert_eq!(round3(0.9995), 1.0);
        assert_eq!(round3(0.7), 0.7);
    }

    #[test]
    fn test_risk_level_thresholds() {
        assert_eq!(risk_level_for_confidence(0.95), "High");
        assert_eq!(risk_level_for_confidence(0.801), "High");
        assert_eq!(risk_level_for_confidence(0.8), "Moderate");
        assert_eq!(risk_level_for_confidence(0.61), "Moderate");
        assert_eq!(risk_level_for_confidence(0.6), "Low");
        assert_eq!(risk_level_for_confidence(0.1), "Low");
    }

    #[test]
    fn test_outbreak_prediction_shape() {
        let predictor = Predictor::new();
        let request = sample_request();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let response = predictor.predict_with(&mut rng, PredictionKind::Outbreak, &request);

            assert!(response.confidence >= 0.70 && response.confidence <= 0.95);
            assert_eq!(
                response.risk_level,
                risk_level_for_confidence(response.confidence)
            );
            assert_eq!(response.prediction_type, "outbreak_detection");
            assert_eq!(response.location, "Niger, bida");
            assert_eq!(response.recommendations.len(), 4);

            let (prefix, number) = response.prediction_id.split_once('_').unwrap();
            assert_eq!(prefix, "outbreak");
            let number: u32 = number.parse().unwrap();
            assert!((1000..=9999).contains(&number));
        }
    }

    #[test]
    fn test_case_classification_labels() {
        let predictor = Predictor::new();
        let request = sample_request();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let response =
                predictor.predict_with(&mut rng, PredictionKind::CaseClassification, &request);
            assert!(response.confidence >= 0.75 && response.confidence <= 0.98);
            assert!(CASE_CLASSIFICATIONS.contains(&response.risk_level.as_str()));
            assert!(response.prediction_id.starts_with("case_"));
        }
    }

    #[test]
    fn test_risk_assessment_labels() {
        let predictor = Predictor::new();
        let request = sample_request();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let response =
                predictor.predict_with(&mut rng, PredictionKind::RiskAssessment, &request);
            assert!(response.confidence >= 0.80 && response.confidence <= 0.95);
            assert!(RISK_LEVELS.contains(&response.risk_level.as_str()));
            assert!(response.prediction_id.starts_with("risk_"));
        }
    }

    #[test]
    fn test_random_kind_covers_all_kinds() {
        let predictor = Predictor::new();
        let mut rng = StdRng::seed_from_u64(1);

        let mut seen = [false; 3];
        for _ in 0..300 {
            match predictor.random_kind_with(&mut rng) {
                PredictionKind::Outbreak => seen[0] = true,
                PredictionKind::CaseClassification => seen[1] = true,
                PredictionKind::RiskAssessment => seen[2] = true,
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_model_metrics_ranges() {
        let predictor = Predictor::new();
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..50 {
            let metrics = predictor.model_metrics_with(&mut rng, "outbreak_detection");
            assert_eq!(metrics.model_name, "outbreak_detection");
            assert!(metrics.accuracy >= 0.80 && metrics.accuracy <= 0.95);
            assert!(metrics.precision >= 0.75 && metrics.precision <= 0.92);
            assert!(metrics.recall >= 0.78 && metrics.recall <= 0.90);
            assert!(metrics.f1_score >= 0.80 && metrics.f1_score <= 0.91);
        }
    }

    #[test]
    fn test_seeded_draws_are_deterministic() {
        let predictor = Predictor::new();
        let request = sample_request();

        let mut a = StdRng::seed_from_u64(123);
        let mut b = StdRng::seed_from_u64(123);

        let first = predictor.predict_with(&mut a, PredictionKind::Outbreak, &request);
        let second = predictor.predict_with(&mut b, PredictionKind::Outbreak, &request);

        assert_eq!(first.confidence, second.confidence);
        assert_eq!(first.risk_level, second.risk_level);
        assert_eq!(first.prediction_id, second.prediction_id);
    }
}
