/// Region catalog for the Vologda Oblast transmission-grid risk service.
///
/// Defines the canonical list of municipalities the service scores, along
/// with their sampling coordinates and display metadata. This is the single
/// source of truth for region names — all other modules should reference
/// regions from here rather than hardcoding names.
///
/// Catalog order is part of the contract: the spatial grid builder breaks
/// equal-distance ties by taking the first region in catalog order, so the
/// ordering below must stay stable for grid output to be reproducible.

use serde::{Deserialize, Serialize};

use crate::model::{Coordinates, WeatherError};

// ---------------------------------------------------------------------------
// Region metadata
// ---------------------------------------------------------------------------

/// Administrative kind of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionKind {
    /// Oblast-level city.
    City,
    /// Municipal district.
    District,
}

/// One named administrative area, used as a risk-sampling point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Unique region name (catalog key).
    pub name: String,
    /// WGS84 latitude of the sampling point.
    pub latitude: f64,
    /// WGS84 longitude of the sampling point.
    pub longitude: f64,
    /// Resident population, for display and prioritization.
    pub population: u32,
    /// City or municipal district.
    pub kind: RegionKind,
    /// Administrative center, for display.
    pub center: String,
}

impl Region {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

// ---------------------------------------------------------------------------
// Builtin catalog
// ---------------------------------------------------------------------------

/// Builtin catalog rows: (name, latitude, longitude, population, kind, center).
///
/// Coordinates and populations follow the oblast administrative reference
/// data; the two cities come first, districts follow in the reference order.
const BUILTIN_REGIONS: &[(&str, f64, f64, u32, RegionKind, &str)] = &[
    ("Vologda", 59.2181, 39.8886, 317_822, RegionKind::City, "Vologda"),
    ("Cherepovets", 59.1266, 37.9093, 298_160, RegionKind::City, "Cherepovets"),
    ("Babayevsky", 59.3833, 35.9500, 18_541, RegionKind::District, "Babayevo"),
    ("Babushkinsky", 59.7500, 43.1167, 9_307, RegionKind::District, "imeni Babushkina"),
    ("Belozersky", 60.0333, 37.7833, 12_978, RegionKind::District, "Belozersk"),
    ("Vashkinsky", 60.3667, 37.9333, 5_872, RegionKind::District, "Lipin Bor"),
    ("Velikoustyugsky", 60.7585, 46.3044, 48_563, RegionKind::District, "Veliky Ustyug"),
    ("Verkhovazhsky", 60.7167, 41.9833, 12_287, RegionKind::District, "Verkhovazhye"),
    ("Vozhegodsky", 60.4667, 40.2167, 13_416, RegionKind::District, "Vozhega"),
    ("Vologodsky", 59.3000, 39.9000, 51_950, RegionKind::District, "Vologda"),
    ("Vytegorsky", 61.0000, 36.4500, 21_686, RegionKind::District, "Vytegra"),
    ("Gryazovetsky", 58.8833, 40.2500, 31_398, RegionKind::District, "Gryazovets"),
    ("Kaduysky", 59.2000, 37.1500, 16_316, RegionKind::District, "Kaduy"),
    ("Kirillovsky", 59.8667, 38.3833, 13_795, RegionKind::District, "Kirillov"),
    ("Kichmengsko-Gorodetsky", 59.9833, 45.7833, 14_079, RegionKind::District, "Kichmengsky Gorodok"),
    ("Mezhdurechensky", 59.2500, 40.6667, 4_740, RegionKind::District, "Shuyskoye"),
    ("Nikolsky", 59.5333, 45.4500, 18_390, RegionKind::District, "Nikolsk"),
    ("Nyuksensky", 60.4167, 44.2333, 8_316, RegionKind::District, "Nyuksenitsa"),
    ("Sokolsky", 59.4667, 40.1167, 44_172, RegionKind::District, "Sokol"),
    ("Syamzhensky", 60.0167, 41.0667, 7_880, RegionKind::District, "Syamzha"),
    ("Tarnogsky", 60.5000, 43.5833, 10_250, RegionKind::District, "Tarnogsky Gorodok"),
    ("Totemsky", 59.9833, 42.7667, 21_802, RegionKind::District, "Totma"),
    ("Ust-Kubinsky", 59.6500, 39.7167, 7_154, RegionKind::District, "Ustye"),
    ("Ustyuzhensky", 58.8333, 36.4333, 15_048, RegionKind::District, "Ustyuzhna"),
    ("Kharovsky", 59.9500, 40.2000, 12_618, RegionKind::District, "Kharovsk"),
    ("Chagodoshchensky", 59.1667, 35.3333, 10_732, RegionKind::District, "Chagoda"),
    ("Cherepovetsky", 59.0000, 38.0000, 39_308, RegionKind::District, "Cherepovets"),
    ("Sheksninsky", 59.2167, 38.5000, 28_791, RegionKind::District, "Sheksna"),
];

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// An ordered, immutable set of regions.
///
/// Loaded once at startup — either the builtin oblast catalog or a TOML
/// configuration file — and passed by reference to everything downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionCatalog {
    regions: Vec<Region>,
}

/// TOML schema for an external catalog file:
///
/// ```toml
/// [[region]]
/// name = "Vologda"
/// latitude = 59.2181
/// longitude = 39.8886
/// population = 317822
/// kind = "city"
/// center = "Vologda"
/// ```
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(rename = "region")]
    regions: Vec<Region>,
}

impl RegionCatalog {
    /// The builtin Vologda Oblast catalog: 2 cities and 26 districts.
    pub fn builtin() -> Self {
        let regions = BUILTIN_REGIONS
            .iter()
            .map(|&(name, latitude, longitude, population, kind, center)| Region {
                name: name.to_string(),
                latitude,
                longitude,
                population,
                kind,
                center: center.to_string(),
            })
            .collect();
        Self { regions }
    }

    /// Builds a catalog from an explicit region list, preserving order.
    pub fn from_regions(regions: Vec<Region>) -> Self {
        Self { regions }
    }

    /// Parses a catalog from TOML configuration text.
    pub fn from_toml_str(text: &str) -> Result<Self, WeatherError> {
        let file: CatalogFile = toml::from_str(text)
            .map_err(|e| WeatherError::ParseError(format!("region catalog: {}", e)))?;
        Ok(Self { regions: file.regions })
    }

    /// Loads a catalog from a TOML file on disk.
    pub fn from_file(path: &str) -> Result<Self, WeatherError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| WeatherError::ParseError(format!("read {}: {}", path, e)))?;
        Self::from_toml_str(&text)
    }

    /// Regions in canonical catalog order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Looks up a region by name. Returns `None` if not found.
    pub fn find(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.name == name)
    }

    /// Region names in canonical catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.regions.iter().map(|r| r.name.as_str()).collect()
    }

    /// Returns an error if the catalog has no regions. Snapshot building
    /// calls this up front so an empty catalog fails loudly there, while
    /// grid building keeps its documented default-level fallback.
    pub fn ensure_non_empty(&self) -> Result<(), WeatherError> {
        if self.regions.is_empty() {
            Err(WeatherError::EmptyRegionSet)
        } else {
            Ok(())
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
