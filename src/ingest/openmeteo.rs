/// Open-Meteo current-conditions client.
///
/// Fetches one normalized `WeatherObservation` per region from the free
/// Open-Meteo forecast API (no key required).
///
/// API documentation: https://open-meteo.com/en/docs
///
/// Normalization happens here and nowhere else: missing numeric fields
/// default to 0 (pressure to the standard 1013.0 hPa), humidity is rounded
/// and clamped into 0..=100, and the condition description is derived from
/// the weather code. The risk core downstream therefore never sees a
/// malformed observation and has no error path of its own.

use serde::Deserialize;

use crate::model::{WeatherError, WeatherObservation};
use crate::regions::Region;
use crate::weather_codes;

const OPEN_METEO_BASE_URL: &str = "https://api.open-meteo.com";

/// Fields requested from the `current` block, comma-joined in the URL.
const CURRENT_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,precipitation,pressure_msl,wind_speed_10m,weather_code";

/// Pressure substituted when the provider omits `pressure_msl`, hPa.
pub const STANDARD_PRESSURE_HPA: f64 = 1013.0;

// ============================================================================
// Open-Meteo API Response Structures
// ============================================================================

/// Top-level forecast response. Only the `current` block is requested.
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub current: Option<CurrentConditions>,
}

/// Current-conditions block. Every field is optional — Open-Meteo omits
/// values a station did not report, and normalization fills the gaps.
#[derive(Debug, Deserialize)]
pub struct CurrentConditions {
    pub temperature_2m: Option<f64>,
    pub relative_humidity_2m: Option<f64>,
    pub precipitation: Option<f64>,
    pub pressure_msl: Option<f64>,
    pub wind_speed_10m: Option<f64>,
    pub weather_code: Option<u16>,
}

// ============================================================================
// API Client Functions
// ============================================================================

/// Builds the forecast URL for one sampling point.
pub fn build_forecast_url(latitude: f64, longitude: f64) -> String {
    format!(
        "{}/v1/forecast?latitude={}&longitude={}&current={}&timezone=Europe%2FMoscow&forecast_days=1&wind_speed_unit=ms",
        OPEN_METEO_BASE_URL, latitude, longitude, CURRENT_FIELDS
    )
}

/// Fetches and normalizes the current observation for one region.
pub fn fetch_current(
    client: &reqwest::blocking::Client,
    region: &Region,
) -> Result<WeatherObservation, WeatherError> {
    let url = build_forecast_url(region.latitude, region.longitude);

    let response = client
        .get(&url)
        .header("Accept", "application/json")
        .send()
        .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

    if !response.status().is_success() {
        return Err(WeatherError::HttpError(response.status().as_u16()));
    }

    let forecast: ForecastResponse = response
        .json()
        .map_err(|e| WeatherError::ParseError(e.to_string()))?;

    let current = forecast
        .current
        .ok_or_else(|| WeatherError::NoCurrentData(region.name.clone()))?;

    Ok(normalize(&current))
}

// ============================================================================
// Normalization
// ============================================================================

/// Converts a raw current-conditions block into a well-formed observation.
pub fn normalize(current: &CurrentConditions) -> WeatherObservation {
    let weather_code = current.weather_code.unwrap_or(0);
    let condition = weather_codes::classify(weather_code);

    WeatherObservation {
        temperature: current.temperature_2m.unwrap_or(0.0),
        wind_speed: current.wind_speed_10m.unwrap_or(0.0),
        precipitation: current.precipitation.unwrap_or(0.0),
        humidity: clamp_humidity(current.relative_humidity_2m.unwrap_or(0.0)),
        pressure: current.pressure_msl.unwrap_or(STANDARD_PRESSURE_HPA),
        weather_code,
        description: condition.description.to_string(),
    }
}

/// Rounds a raw humidity percentage and clamps it into 0..=100.
/// NaN (which no JSON number produces, but callers may hand-build) and
/// negative values map to 0.
fn clamp_humidity(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    raw.round().clamp(0.0, 100.0) as u8
}

// ============================================================================
// Fallback observations
// ============================================================================

/// Late-autumn base temperatures per region, °C. Used when a live fetch
/// fails so scoring degrades to plausible values instead of erroring.
static FALLBACK_BASE_TEMPS: &[(&str, f64)] = &[
    ("Vologda", 2.0),
    ("Cherepovets", 3.0),
    ("Babayevsky", 2.0),
    ("Babushkinsky", -2.0),
    ("Belozersky", 0.0),
    ("Vashkinsky", -1.0),
    ("Velikoustyugsky", -1.0),
    ("Verkhovazhsky", 0.0),
    ("Vozhegodsky", 0.0),
    ("Vologodsky", 1.0),
    ("Vytegorsky", 0.0),
    ("Gryazovetsky", 2.0),
    ("Kaduysky", 2.0),
    ("Kirillovsky", 0.0),
    ("Kichmengsko-Gorodetsky", -1.0),
    ("Mezhdurechensky", 1.0),
    ("Nikolsky", -1.0),
    ("Nyuksensky", -2.0),
    ("Sokolsky", 1.0),
    ("Syamzhensky", 0.0),
    ("Tarnogsky", -2.0),
    ("Totemsky", 1.0),
    ("Ust-Kubinsky", 1.0),
    ("Ustyuzhensky", 2.0),
    ("Kharovsky", -1.0),
    ("Chagodoshchensky", 2.0),
    ("Cherepovetsky", 3.0),
    ("Sheksninsky", 2.0),
];

/// A deterministic best-effort observation for a region whose live fetch
/// failed. Sub-zero regions report light snow, the rest overcast; repeated
/// calls return identical values so snapshots stay reproducible.
pub fn fallback_observation(region_name: &str) -> WeatherObservation {
    let base_temp = FALLBACK_BASE_TEMPS
        .iter()
        .find(|(name, _)| *name == region_name)
        .map(|(_, t)| *t)
        .unwrap_or(1.0);

    let weather_code = if base_temp < 0.0 { 71 } else { 3 };
    let condition = weather_codes::classify(weather_code);

    WeatherObservation {
        temperature: base_temp,
        wind_speed: 4.0,
        precipitation: 0.0,
        humidity: 82,
        pressure: 1005.0,
        weather_code,
        description: condition.description.to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_defaults_missing_fields() {
        let current = CurrentConditions {
            temperature_2m: None,
            relative_humidity_2m: None,
            precipitation: None,
            pressure_msl: None,
            wind_speed_10m: None,
            weather_code: None,
        };
        let obs = normalize(&current);
        assert_eq!(obs.temperature, 0.0);
        assert_eq!(obs.wind_speed, 0.0);
        assert_eq!(obs.precipitation, 0.0);
        assert_eq!(obs.humidity, 0);
        assert_eq!(obs.pressure, STANDARD_PRESSURE_HPA);
        assert_eq!(obs.weather_code, 0);
        assert_eq!(obs.description, "Clear sky");
        assert!(obs.validate().is_ok());
    }

    #[test]
    fn test_normalize_clamps_humidity_into_percent_range() {
        let mut current = CurrentConditions {
            temperature_2m: Some(-5.0),
            relative_humidity_2m: Some(104.2),
            precipitation: Some(0.3),
            pressure_msl: Some(998.4),
            wind_speed_10m: Some(7.1),
            weather_code: Some(73),
        };
        assert_eq!(normalize(&current).humidity, 100);

        current.relative_humidity_2m = Some(-3.0);
        assert_eq!(normalize(&current).humidity, 0);

        current.relative_humidity_2m = Some(86.6);
        assert_eq!(normalize(&current).humidity, 87);
    }

    #[test]
    fn test_normalize_derives_description_from_code() {
        let current = CurrentConditions {
            temperature_2m: Some(-12.0),
            relative_humidity_2m: Some(91.0),
            precipitation: Some(4.0),
            pressure_msl: Some(1001.0),
            wind_speed_10m: Some(9.0),
            weather_code: Some(75),
        };
        assert_eq!(normalize(&current).description, "Heavy snowfall");
    }

    #[test]
    fn test_forecast_response_parses_open_meteo_json() {
        let json = r#"{
            "latitude": 59.25,
            "longitude": 39.875,
            "current": {
                "time": "2026-08-26T12:00",
                "temperature_2m": 14.3,
                "relative_humidity_2m": 67,
                "precipitation": 0.0,
                "pressure_msl": 1011.8,
                "wind_speed_10m": 3.6,
                "weather_code": 2
            }
        }"#;
        let forecast: ForecastResponse = serde_json::from_str(json).unwrap();
        let obs = normalize(&forecast.current.unwrap());
        assert_eq!(obs.temperature, 14.3);
        assert_eq!(obs.humidity, 67);
        assert_eq!(obs.description, "Partly cloudy");
    }

    #[test]
    fn test_forecast_url_requests_all_current_fields() {
        let url = build_forecast_url(59.2181, 39.8886);
        assert!(url.starts_with("https://api.open-meteo.com/v1/forecast?"));
        assert!(url.contains("latitude=59.2181"));
        assert!(url.contains("longitude=39.8886"));
        for field in CURRENT_FIELDS.split(',') {
            assert!(url.contains(field), "URL missing current field '{}'", field);
        }
        assert!(url.contains("wind_speed_unit=ms"), "risk thresholds are in m/s");
    }

    #[test]
    fn test_fallback_observation_is_deterministic() {
        assert_eq!(fallback_observation("Vologda"), fallback_observation("Vologda"));
    }

    #[test]
    fn test_fallback_observation_reports_snow_below_zero() {
        let cold = fallback_observation("Nyuksensky");
        assert!(cold.temperature < 0.0);
        assert_eq!(cold.weather_code, 71);

        let mild = fallback_observation("Cherepovets");
        assert!(mild.temperature >= 0.0);
        assert_eq!(mild.weather_code, 3);
    }

    #[test]
    fn test_fallback_for_unknown_region_uses_default_base_temp() {
        let obs = fallback_observation("Atlantis");
        assert_eq!(obs.temperature, 1.0);
        assert!(obs.validate().is_ok());
    }
}
