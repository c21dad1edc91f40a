/// Weather scenario presets.
///
/// Each preset applies one synthetic weather pattern uniformly across the
/// catalog and pins the risk level shown for every region. Presets exist
/// for operator drills and UI demonstrations; their levels are the
/// advertised drill values, not recomputed scores, which is why the level
/// is pinned rather than derived from the synthetic observation.

use chrono::{DateTime, Utc};

use crate::model::{RiskAssessment, RiskCategory, WeatherError, WeatherObservation};
use crate::regions::RegionCatalog;
use crate::risk::factors;
use crate::snapshot::{RegionRisk, SnapshotSource, WeatherSnapshot};

/// The four drill presets, from benign to severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioPreset {
    Excellent,
    Satisfactory,
    Poor,
    Dangerous,
}

struct ScenarioParams {
    risk_level: u8,
    wind_speed: f64,
    temperature: f64,
    precipitation: f64,
    weather_code: u16,
}

impl ScenarioPreset {
    /// All presets, benign first.
    pub const ALL: [ScenarioPreset; 4] = [
        ScenarioPreset::Excellent,
        ScenarioPreset::Satisfactory,
        ScenarioPreset::Poor,
        ScenarioPreset::Dangerous,
    ];

    /// Parses a preset from its request name. Returns `None` for unknown
    /// names so the caller can answer with "scenario not found".
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "excellent" => Some(ScenarioPreset::Excellent),
            "satisfactory" => Some(ScenarioPreset::Satisfactory),
            "poor" => Some(ScenarioPreset::Poor),
            "dangerous" => Some(ScenarioPreset::Dangerous),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScenarioPreset::Excellent => "excellent",
            ScenarioPreset::Satisfactory => "satisfactory",
            ScenarioPreset::Poor => "poor",
            ScenarioPreset::Dangerous => "dangerous",
        }
    }

    fn params(&self) -> ScenarioParams {
        match self {
            ScenarioPreset::Excellent => ScenarioParams {
                risk_level: 2,
                wind_speed: 2.0,
                temperature: 5.0,
                precipitation: 0.0,
                weather_code: 0,
            },
            ScenarioPreset::Satisfactory => ScenarioParams {
                risk_level: 5,
                wind_speed: 8.0,
                temperature: -2.0,
                precipitation: 2.0,
                weather_code: 3,
            },
            ScenarioPreset::Poor => ScenarioParams {
                risk_level: 7,
                wind_speed: 12.0,
                temperature: -8.0,
                precipitation: 5.0,
                weather_code: 73,
            },
            ScenarioPreset::Dangerous => ScenarioParams {
                risk_level: 9,
                wind_speed: 18.0,
                temperature: -15.0,
                precipitation: 10.0,
                weather_code: 75,
            },
        }
    }

    /// The pinned risk level every region reports under this preset.
    pub fn risk_level(&self) -> u8 {
        self.params().risk_level
    }

    /// The synthetic observation applied to every region.
    pub fn observation(&self) -> WeatherObservation {
        let params = self.params();
        WeatherObservation {
            temperature: params.temperature,
            wind_speed: params.wind_speed,
            precipitation: params.precipitation,
            humidity: 80,
            pressure: 1013.0,
            weather_code: params.weather_code,
            description: format!("Scenario: {}", self.name()),
        }
    }

    /// Builds a scenario-tagged snapshot over the catalog.
    ///
    /// The factor scores are computed from the synthetic observation (so
    /// the per-factor breakdown stays meaningful in the UI), while the
    /// level, category, and recommendations come from the pinned value.
    pub fn apply_at(
        &self,
        catalog: &RegionCatalog,
        generated_at: DateTime<Utc>,
    ) -> Result<WeatherSnapshot, WeatherError> {
        catalog.ensure_non_empty()?;

        let observation = self.observation();
        let category = RiskCategory::from_level(self.risk_level());
        let assessment = RiskAssessment {
            risk_level: self.risk_level(),
            risk_description: category.label().to_string(),
            factors: factors::analyze(&observation),
            recommendations: category
                .recommendations()
                .iter()
                .map(|s| s.to_string())
                .collect(),
        };

        let entries = catalog
            .regions()
            .iter()
            .map(|region| RegionRisk {
                region: region.name.clone(),
                coordinates: region.coordinates(),
                observation: observation.clone(),
                assessment: assessment.clone(),
            })
            .collect();

        Ok(WeatherSnapshot::from_entries(
            generated_at,
            SnapshotSource::Scenario { name: self.name().to_string() },
            entries,
        ))
    }

    /// `apply_at` stamped with the real current time.
    pub fn apply(&self, catalog: &RegionCatalog) -> Result<WeatherSnapshot, WeatherError> {
        self.apply_at(catalog, Utc::now())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
