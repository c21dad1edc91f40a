/// Weather-driven operational risk scoring for the Vologda Oblast
/// transmission grid.
///
/// The crate turns current-weather observations into per-region risk
/// assessments and a rasterized overlay grid:
///
/// ```text
/// Open-Meteo → WeatherObservation → risk::factors → risk::aggregate
///            → WeatherSnapshot (per-region levels) → risk::grid → overlay
/// ```
///
/// The scoring and grid modules are pure and synchronous; fetching,
/// serialization to the wire, and request routing belong to the
/// surrounding service layer.

pub mod ingest;
pub mod logging;
pub mod model;
pub mod regions;
pub mod risk;
pub mod scenario;
pub mod snapshot;
pub mod weather_codes;

pub use model::{
    BoundingBox, Coordinates, GridCell, RiskAssessment, RiskCategory, RiskFactors,
    WeatherError, WeatherObservation,
};
pub use regions::{Region, RegionCatalog, RegionKind};
pub use scenario::ScenarioPreset;
pub use snapshot::{RegionRisk, SnapshotSource, WeatherSnapshot};
