/// Per-factor risk scoring for overhead transmission lines.
///
/// Maps one normalized observation into the five named severity scores.
/// All thresholds are fixed operational constants; boundary values belong
/// to the higher-severity bucket (comparisons are `>=` / `<=` exactly as
/// written). Pure function of its input — malformed numerics are defaulted
/// by the provider adapter before they reach this module, so there is no
/// error path here.

use crate::model::{RiskFactors, WeatherObservation};
use crate::weather_codes;

// ---------------------------------------------------------------------------
// Threshold constants
// ---------------------------------------------------------------------------

/// Wind speed thresholds, m/s: conductor galloping starts near the low
/// band, tower loading becomes critical at the top band.
pub const WIND_CRITICAL_MS: f64 = 20.0;
pub const WIND_HIGH_MS: f64 = 15.0;
pub const WIND_MEDIUM_MS: f64 = 10.0;
pub const WIND_LOW_MS: f64 = 5.0;

/// Temperature thresholds, °C.
pub const TEMP_EXTREME_COLD_C: f64 = -20.0;
pub const TEMP_FREEZING_C: f64 = -10.0;

/// Precipitation thresholds, mm over the reporting interval.
pub const PRECIP_HEAVY_MM: f64 = 15.0;
pub const PRECIP_MODERATE_MM: f64 = 7.5;
pub const PRECIP_LIGHT_MM: f64 = 2.5;

/// Humidity thresholds for icing risk, percent. Icing requires sub-zero
/// temperature in addition to saturated air.
pub const HUMIDITY_VERY_HIGH_PCT: u8 = 90;
pub const HUMIDITY_HIGH_PCT: u8 = 80;

// ---------------------------------------------------------------------------
// Analyzer
// ---------------------------------------------------------------------------

/// Scores one observation against the fixed factor policy.
pub fn analyze(observation: &WeatherObservation) -> RiskFactors {
    RiskFactors {
        wind: wind_score(observation.wind_speed),
        temperature: temperature_score(observation.temperature),
        precipitation: precipitation_score(observation.precipitation),
        icing: icing_score(observation.humidity, observation.temperature),
        weather_phenomena: weather_codes::classify(observation.weather_code).risk,
    }
}

fn wind_score(wind_speed: f64) -> f64 {
    if wind_speed >= WIND_CRITICAL_MS {
        1.0
    } else if wind_speed >= WIND_HIGH_MS {
        0.8
    } else if wind_speed >= WIND_MEDIUM_MS {
        0.6
    } else if wind_speed >= WIND_LOW_MS {
        0.4
    } else {
        0.1
    }
}

fn temperature_score(temperature: f64) -> f64 {
    if temperature <= TEMP_EXTREME_COLD_C {
        0.9
    } else if temperature <= TEMP_FREEZING_C {
        0.7
    } else if temperature < 0.0 {
        0.5
    } else {
        0.2
    }
}

fn precipitation_score(precipitation: f64) -> f64 {
    if precipitation >= PRECIP_HEAVY_MM {
        1.0
    } else if precipitation >= PRECIP_MODERATE_MM {
        0.7
    } else if precipitation >= PRECIP_LIGHT_MM {
        0.5
    } else {
        0.2
    }
}

fn icing_score(humidity: u8, temperature: f64) -> f64 {
    if humidity >= HUMIDITY_VERY_HIGH_PCT && temperature < 0.0 {
        0.9
    } else if humidity >= HUMIDITY_HIGH_PCT && temperature < 0.0 {
        0.7
    } else {
        0.1
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
