/// Weather-code classification table.
///
/// Maps Open-Meteo WMO condition codes to a display description and a
/// phenomena risk contribution in [0,1]. Pure reference data — the risk
/// analyzer reads the contribution, the provider adapter reads the
/// description. Codes not listed fall back to `UNKNOWN_CONDITION`.

/// One row of the classification table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherCondition {
    pub code: u16,
    pub description: &'static str,
    /// Contribution to the `weather_phenomena` risk factor.
    pub risk: f64,
}

/// Fallback entry for codes outside the table.
pub const UNKNOWN_CONDITION: WeatherCondition = WeatherCondition {
    code: u16::MAX,
    description: "Unknown",
    risk: 0.3,
};

/// WMO codes reported by Open-Meteo's `weather_code` field, ascending.
static CONDITION_TABLE: &[WeatherCondition] = &[
    WeatherCondition { code: 0, description: "Clear sky", risk: 0.1 },
    WeatherCondition { code: 1, description: "Mainly clear", risk: 0.1 },
    WeatherCondition { code: 2, description: "Partly cloudy", risk: 0.2 },
    WeatherCondition { code: 3, description: "Overcast", risk: 0.3 },
    WeatherCondition { code: 45, description: "Fog", risk: 0.5 },
    WeatherCondition { code: 48, description: "Depositing rime fog", risk: 0.6 },
    WeatherCondition { code: 51, description: "Light drizzle", risk: 0.4 },
    WeatherCondition { code: 53, description: "Moderate drizzle", risk: 0.5 },
    WeatherCondition { code: 55, description: "Dense drizzle", risk: 0.6 },
    WeatherCondition { code: 61, description: "Slight rain", risk: 0.5 },
    WeatherCondition { code: 63, description: "Moderate rain", risk: 0.6 },
    WeatherCondition { code: 65, description: "Heavy rain", risk: 0.8 },
    WeatherCondition { code: 71, description: "Slight snowfall", risk: 0.6 },
    WeatherCondition { code: 73, description: "Moderate snowfall", risk: 0.7 },
    WeatherCondition { code: 75, description: "Heavy snowfall", risk: 0.9 },
    WeatherCondition { code: 95, description: "Thunderstorm", risk: 0.9 },
];

/// Classifies a provider weather code. Unknown codes map to the
/// "Unknown" / 0.3 fallback rather than an error.
pub fn classify(code: u16) -> &'static WeatherCondition {
    CONDITION_TABLE
        .iter()
        .find(|c| c.code == code)
        .unwrap_or(&UNKNOWN_CONDITION)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
