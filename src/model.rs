/// Core data types for the transmission-grid weather risk service.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no logic, no I/O, and no external dependencies beyond serde —
/// only types.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Coordinates
// ---------------------------------------------------------------------------

/// A WGS84 point, latitude first, matching the ordering used by the
/// map overlay and the region catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Euclidean distance in degrees. Not a geodesic — the grid builder
    /// uses plain degree-space distance so nearest-region assignment stays
    /// reproducible and cheap at oblast scale.
    pub fn degree_distance(&self, other: &Coordinates) -> f64 {
        let dlat = self.latitude - other.latitude;
        let dlon = self.longitude - other.longitude;
        (dlat * dlat + dlon * dlon).sqrt()
    }
}

// ---------------------------------------------------------------------------
// Observation types
// ---------------------------------------------------------------------------

/// A normalized current-conditions reading for one region.
///
/// Produced by `ingest::openmeteo` (or a fallback/scenario generator) and
/// consumed by `risk::factors`. The provider adapter owns normalization:
/// missing numeric fields default to 0 (pressure to 1013.0 hPa) and humidity
/// is clamped into 0..=100 before this struct is built, so downstream risk
/// analysis never has an error path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// Air temperature at 2 m, °C.
    pub temperature: f64,
    /// Wind speed at 10 m, m/s.
    pub wind_speed: f64,
    /// Precipitation over the reporting interval, mm.
    pub precipitation: f64,
    /// Relative humidity, integer percent. Invariant: 0..=100.
    pub humidity: u8,
    /// Mean sea-level pressure, hPa.
    pub pressure: f64,
    /// Provider condition code (Open-Meteo WMO enumeration).
    pub weather_code: u16,
    /// Human-readable condition label, derived from `weather_code`.
    pub description: String,
}

impl WeatherObservation {
    /// Checks the invariants a well-formed observation must satisfy.
    ///
    /// The provider adapter normalizes raw input rather than rejecting it,
    /// so in practice this only fails when a caller hand-builds an
    /// observation with NaN fields or bypasses humidity clamping.
    pub fn validate(&self) -> Result<(), WeatherError> {
        if self.temperature.is_nan()
            || self.wind_speed.is_nan()
            || self.precipitation.is_nan()
            || self.pressure.is_nan()
        {
            return Err(WeatherError::InvalidObservation(
                "observation contains NaN fields".to_string(),
            ));
        }
        if self.humidity > 100 {
            return Err(WeatherError::InvalidObservation(format!(
                "humidity {}% outside 0..=100",
                self.humidity
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Risk types
// ---------------------------------------------------------------------------

/// Named severity scores in [0,1] for one observation.
///
/// The factor set is fixed; `risk::factors::analyze` fills every field.
/// Stored as explicit fields rather than a map so the set cannot drift
/// between the analyzer and the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskFactors {
    pub wind: f64,
    pub temperature: f64,
    pub precipitation: f64,
    pub icing: f64,
    pub weather_phenomena: f64,
}

/// The five fixed risk categories, in descending severity.
///
/// Category boundaries are user-facing service-level thresholds; see
/// `risk::aggregate` for the mapping from risk level to category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskCategory {
    Critical,
    High,
    Medium,
    Moderate,
    Low,
}

/// The result of aggregating one region's risk factors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Overall risk, 0..=10.
    pub risk_level: u8,
    /// Category label for `risk_level` ("Critical" .. "Low").
    pub risk_description: String,
    /// The factor scores the level was computed from.
    pub factors: RiskFactors,
    /// Fixed, ordered action list for the category.
    pub recommendations: Vec<String>,
}

// ---------------------------------------------------------------------------
// Grid types
// ---------------------------------------------------------------------------

/// A rectangular map area, south-west and north-east corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub south_west: Coordinates,
    pub north_east: Coordinates,
}

/// One cell of the rasterized risk overlay.
///
/// `bounds[0]` is the cell's south-west corner (its reference point for
/// nearest-region assignment), `bounds[1]` the north-east corner. The
/// `riskLevel` key matches the existing map-overlay contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    pub bounds: [Coordinates; 2],
    #[serde(rename = "riskLevel")]
    pub risk_level: u8,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when fetching weather data or preparing a snapshot.
///
/// The scoring and grid functions themselves never return errors: malformed
/// numeric input is clamped or defaulted upstream, and an empty region set
/// degrades to the documented default risk level instead of failing.
#[derive(Debug, PartialEq)]
pub enum WeatherError {
    /// The request never produced a response (connect failure, timeout).
    RequestFailed(String),
    /// Non-2xx HTTP response from the weather provider.
    HttpError(u16),
    /// The provider response body could not be deserialized.
    ParseError(String),
    /// The response contained no current-conditions block.
    NoCurrentData(String),
    /// A hand-built observation violates the model invariants
    /// (NaN fields or humidity outside 0..=100).
    InvalidObservation(String),
    /// A snapshot was requested for an empty region catalog.
    EmptyRegionSet,
}

impl std::fmt::Display for WeatherError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeatherError::RequestFailed(msg) => write!(f, "Request failed: {}", msg),
            WeatherError::HttpError(code) => write!(f, "HTTP error: {}", code),
            WeatherError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            WeatherError::NoCurrentData(region) => {
                write!(f, "No current conditions for region: {}", region)
            }
            WeatherError::InvalidObservation(msg) => {
                write!(f, "Invalid observation: {}", msg)
            }
            WeatherError::EmptyRegionSet => write!(f, "Region catalog is empty"),
        }
    }
}

impl std::error::Error for WeatherError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn observation() -> WeatherObservation {
        WeatherObservation {
            temperature: -3.0,
            wind_speed: 6.5,
            precipitation: 0.4,
            humidity: 84,
            pressure: 1009.2,
            weather_code: 71,
            description: "Slight snowfall".to_string(),
        }
    }

    #[test]
    fn test_valid_observation_passes_validation() {
        assert!(observation().validate().is_ok());
    }

    #[test]
    fn test_nan_temperature_is_invalid() {
        let mut obs = observation();
        obs.temperature = f64::NAN;
        assert!(matches!(
            obs.validate(),
            Err(WeatherError::InvalidObservation(_))
        ));
    }

    #[test]
    fn test_out_of_range_humidity_is_invalid() {
        let mut obs = observation();
        obs.humidity = 101;
        assert!(matches!(
            obs.validate(),
            Err(WeatherError::InvalidObservation(_))
        ));
    }

    #[test]
    fn test_degree_distance_is_euclidean_in_degrees() {
        let a = Coordinates::new(59.0, 39.0);
        let b = Coordinates::new(59.3, 39.4);
        let d = a.degree_distance(&b);
        assert!((d - 0.5).abs() < 1e-9, "3-4-5 triangle in tenths, got {}", d);
    }

    #[test]
    fn test_grid_cell_serializes_with_overlay_key() {
        let cell = GridCell {
            bounds: [Coordinates::new(58.2, 34.5), Coordinates::new(58.5, 35.0)],
            risk_level: 4,
        };
        let json = serde_json::to_string(&cell).unwrap();
        assert!(json.contains("\"riskLevel\":4"), "got {}", json);
    }
}
