/// Weather data ingestion.
///
/// Submodules:
/// - `openmeteo` — Open-Meteo current-conditions client, response
///   normalization, and deterministic fallback observations.

pub mod openmeteo;
