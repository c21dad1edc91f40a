/// Assessed weather snapshots.
///
/// A `WeatherSnapshot` is one timestamped, immutable pass over the region
/// catalog: every region paired with its observation and risk assessment.
/// It replaces the mutable process-wide "current weather" cache of earlier
/// service revisions — both the per-region view and the overlay grid are
/// derived from an explicitly passed snapshot, so results depend only on
/// the snapshot contents, never on request ordering.
///
/// # Clock injection
/// `assess_at` takes `generated_at` as a parameter rather than reading the
/// system clock, which keeps snapshot construction deterministic in tests.
/// `assess` is the convenience wrapper for production callers.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::ingest::openmeteo;
use crate::logging;
use crate::model::{Coordinates, GridCell, RiskAssessment, WeatherError, WeatherObservation};
use crate::regions::{Region, RegionCatalog};
use crate::risk::grid::{build_risk_grid, RiskPoint};
use crate::risk::{aggregate, factors};

// ---------------------------------------------------------------------------
// Snapshot types
// ---------------------------------------------------------------------------

/// Where a snapshot's observations came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SnapshotSource {
    /// At least one live fetch succeeded; failed regions carry fallbacks.
    Realtime { successful: usize, total: usize },
    /// Every live fetch failed; all observations are fallbacks.
    Demo,
    /// Synthetic observations from a named scenario preset.
    Scenario { name: String },
}

/// One region's slice of a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionRisk {
    pub region: String,
    pub coordinates: Coordinates,
    pub observation: WeatherObservation,
    pub assessment: RiskAssessment,
}

/// A timestamped assessment of every region in the catalog, in catalog
/// order. The timestamp is the snapshot's version: two snapshots with the
/// same timestamp and entries are interchangeable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherSnapshot {
    pub generated_at: DateTime<Utc>,
    pub source: SnapshotSource,
    pub entries: Vec<RegionRisk>,
}

// ---------------------------------------------------------------------------
// Snapshot construction
// ---------------------------------------------------------------------------

impl WeatherSnapshot {
    /// Builds a snapshot by fetching one observation per region.
    ///
    /// `fetch` is called once per region in catalog order. A fetch error is
    /// non-fatal: the region gets its deterministic fallback observation
    /// and the failure is logged, matching the service's degrade-rather-
    /// than-fail posture. Only an empty catalog is an error.
    pub fn assess_at<F>(
        catalog: &RegionCatalog,
        generated_at: DateTime<Utc>,
        mut fetch: F,
    ) -> Result<Self, WeatherError>
    where
        F: FnMut(&Region) -> Result<WeatherObservation, WeatherError>,
    {
        catalog.ensure_non_empty()?;

        let mut entries = Vec::with_capacity(catalog.len());
        let mut successful = 0;

        for region in catalog.regions() {
            let observation = match fetch(region) {
                Ok(observation) => {
                    successful += 1;
                    observation
                }
                Err(err) => {
                    logging::log_fetch_failure(&region.name, "current conditions", &err);
                    openmeteo::fallback_observation(&region.name)
                }
            };
            entries.push(assess_region(region, observation));
        }

        let total = catalog.len();
        let source = if successful > 0 {
            SnapshotSource::Realtime { successful, total }
        } else {
            SnapshotSource::Demo
        };
        logging::log_refresh_summary(total, successful);

        Ok(Self { generated_at, source, entries })
    }

    /// `assess_at` stamped with the real current time.
    pub fn assess<F>(catalog: &RegionCatalog, fetch: F) -> Result<Self, WeatherError>
    where
        F: FnMut(&Region) -> Result<WeatherObservation, WeatherError>,
    {
        Self::assess_at(catalog, Utc::now(), fetch)
    }

    /// Builds a snapshot from pre-assessed entries (scenario presets).
    pub fn from_entries(
        generated_at: DateTime<Utc>,
        source: SnapshotSource,
        entries: Vec<RegionRisk>,
    ) -> Self {
        Self { generated_at, source, entries }
    }

    // -----------------------------------------------------------------------
    // Derived views
    // -----------------------------------------------------------------------

    /// Looks up one region's slice by name.
    pub fn region(&self, name: &str) -> Option<&RegionRisk> {
        self.entries.iter().find(|e| e.region == name)
    }

    /// Risk sampling points in catalog order, as the grid builder expects.
    pub fn risk_points(&self) -> Vec<RiskPoint> {
        self.entries
            .iter()
            .map(|e| (e.coordinates, e.assessment.risk_level))
            .collect()
    }

    /// Rasterizes this snapshot over `bounds`.
    pub fn build_grid(&self, bounds: &crate::model::BoundingBox) -> Vec<GridCell> {
        build_risk_grid(bounds, &self.risk_points())
    }
}

/// Scores one observation and pairs it with its region.
pub fn assess_region(region: &Region, observation: WeatherObservation) -> RegionRisk {
    let assessment = aggregate::aggregate(&factors::analyze(&observation));
    RegionRisk {
        region: region.name.clone(),
        coordinates: region.coordinates(),
        observation,
        assessment,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
