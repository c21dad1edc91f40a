/// Weighted aggregation of factor scores into a single risk assessment.
///
/// The weights and category boundaries are fixed business rules — they are
/// the service-level thresholds operators act on, so they are reproduced
/// exactly and are not tunable at runtime.

use crate::model::{RiskAssessment, RiskCategory, RiskFactors};

// ---------------------------------------------------------------------------
// Weights
// ---------------------------------------------------------------------------

/// Factor weights. Wind dominates because mechanical conductor and tower
/// failures are the primary outage cause; the weights sum to 1.0.
pub const WEIGHT_WIND: f64 = 0.3;
pub const WEIGHT_TEMPERATURE: f64 = 0.2;
pub const WEIGHT_PRECIPITATION: f64 = 0.2;
pub const WEIGHT_ICING: f64 = 0.2;
pub const WEIGHT_WEATHER_PHENOMENA: f64 = 0.1;

/// Default level assigned where no risk information exists (for example
/// grid cells built from an empty region set).
pub const DEFAULT_RISK_LEVEL: u8 = 2;

// ---------------------------------------------------------------------------
// Category mapping
// ---------------------------------------------------------------------------

impl RiskCategory {
    /// Maps a 0–10 risk level to its category.
    ///
    /// Boundaries: >=9 Critical, 7–8 High, 5–6 Medium, 3–4 Moderate,
    /// 0–2 Low.
    pub fn from_level(risk_level: u8) -> Self {
        match risk_level {
            9.. => RiskCategory::Critical,
            7..=8 => RiskCategory::High,
            5..=6 => RiskCategory::Medium,
            3..=4 => RiskCategory::Moderate,
            _ => RiskCategory::Low,
        }
    }

    /// User-facing category label.
    pub fn label(&self) -> &'static str {
        match self {
            RiskCategory::Critical => "Critical",
            RiskCategory::High => "High",
            RiskCategory::Medium => "Medium",
            RiskCategory::Moderate => "Moderate",
            RiskCategory::Low => "Low",
        }
    }

    /// Fixed, ordered action list for the category.
    pub fn recommendations(&self) -> &'static [&'static str] {
        match self {
            RiskCategory::Critical => &[
                "Immediately de-energize lines in the risk zone",
                "Dispatch emergency repair crews",
                "Notify civil protection and local authorities",
            ],
            RiskCategory::High => &[
                "Intensify monitoring of line condition",
                "Put repair crews on departure standby",
                "Limit transmission load in the risk zone",
            ],
            RiskCategory::Medium => &[
                "Periodic monitoring",
                "Check backup equipment",
                "Prepare for possible outages",
            ],
            RiskCategory::Moderate => &[
                "Standard monitoring",
                "Check protection systems",
            ],
            RiskCategory::Low => &[
                "Normal operating mode",
                "Scheduled maintenance",
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// Aggregator
// ---------------------------------------------------------------------------

/// Combines factor scores into the overall assessment.
///
/// `risk_level = min(10, floor(total * 10))` where `total` is the weighted
/// sum. With each factor in [0,1] and weights summing to 1.0 the total
/// cannot exceed 1.0, so the clamp at 10 is a safety net rather than a
/// normal path.
pub fn aggregate(factors: &RiskFactors) -> RiskAssessment {
    let total = factors.wind * WEIGHT_WIND
        + factors.temperature * WEIGHT_TEMPERATURE
        + factors.precipitation * WEIGHT_PRECIPITATION
        + factors.icing * WEIGHT_ICING
        + factors.weather_phenomena * WEIGHT_WEATHER_PHENOMENA;

    let risk_level = ((total * 10.0).floor() as i64).clamp(0, 10) as u8;
    let category = RiskCategory::from_level(risk_level);

    RiskAssessment {
        risk_level,
        risk_description: category.label().to_string(),
        factors: *factors,
        recommendations: category
            .recommendations()
            .iter()
            .map(|s| s.to_string())
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
