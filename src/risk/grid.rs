/// Rasterization of per-region risk levels into a map-overlay grid.
///
/// The bounding box is traversed south-west to north-east in fixed steps
/// (0.3° latitude, 0.5° longitude) with half-open semantics: cell origins
/// strictly below the north-east corner on each axis. Each cell takes the
/// risk level of the region nearest (Euclidean, in degrees) to its
/// south-west corner.
///
/// Determinism: equal distances resolve to the first region in catalog
/// order, and the traversal order is fixed, so identical inputs always
/// produce an identical cell sequence. The nearest-region lookup is a
/// brute-force scan — region counts are in the tens, and the scan is the
/// reference behavior any future spatial index must reproduce.

use crate::model::{BoundingBox, Coordinates, GridCell};
use crate::risk::aggregate::DEFAULT_RISK_LEVEL;

// ---------------------------------------------------------------------------
// Grid geometry
// ---------------------------------------------------------------------------

/// Latitude step, degrees.
pub const LAT_STEP_DEG: f64 = 0.3;
/// Longitude step, degrees.
pub const LON_STEP_DEG: f64 = 0.5;

// Steps in tenths of a degree. The traversal runs on integer tenths so
// repeated float addition cannot drift the cell count at box edges.
const LAT_STEP_TENTHS: i32 = 3;
const LON_STEP_TENTHS: i32 = 5;

/// The overlay bounding box covering Vologda Oblast.
pub fn oblast_bounds() -> BoundingBox {
    BoundingBox {
        south_west: Coordinates::new(58.2, 34.5),
        north_east: Coordinates::new(62.0, 48.0),
    }
}

fn to_tenths(degrees: f64) -> i32 {
    (degrees * 10.0).round() as i32
}

// ---------------------------------------------------------------------------
// Grid builder
// ---------------------------------------------------------------------------

/// A risk sampling point: region coordinates and the region's risk level,
/// in catalog order.
pub type RiskPoint = (Coordinates, u8);

/// Builds the overlay grid for `bounds` from per-region risk levels.
///
/// `points` must be in catalog order — that order is the tie-break rule
/// for cells equidistant from two regions. With no points at all, every
/// cell gets `DEFAULT_RISK_LEVEL` instead of the call failing.
pub fn build_risk_grid(bounds: &BoundingBox, points: &[RiskPoint]) -> Vec<GridCell> {
    let lat_start = to_tenths(bounds.south_west.latitude);
    let lat_end = to_tenths(bounds.north_east.latitude);
    let lon_start = to_tenths(bounds.south_west.longitude);
    let lon_end = to_tenths(bounds.north_east.longitude);

    let mut cells = Vec::new();
    let mut lat = lat_start;
    while lat < lat_end {
        let mut lon = lon_start;
        while lon < lon_end {
            let origin = Coordinates::new(f64::from(lat) / 10.0, f64::from(lon) / 10.0);
            let corner = Coordinates::new(
                f64::from(lat + LAT_STEP_TENTHS) / 10.0,
                f64::from(lon + LON_STEP_TENTHS) / 10.0,
            );
            cells.push(GridCell {
                bounds: [origin, corner],
                risk_level: nearest_risk_level(&origin, points),
            });
            lon += LON_STEP_TENTHS;
        }
        lat += LAT_STEP_TENTHS;
    }
    cells
}

/// Risk level of the point nearest to `origin`; first point wins ties.
fn nearest_risk_level(origin: &Coordinates, points: &[RiskPoint]) -> u8 {
    let mut nearest = DEFAULT_RISK_LEVEL;
    let mut min_distance = f64::INFINITY;
    for (coordinates, risk_level) in points {
        let distance = coordinates.degree_distance(origin);
        if distance < min_distance {
            min_distance = distance;
            nearest = *risk_level;
        }
    }
    nearest
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn point(latitude: f64, longitude: f64, risk_level: u8) -> RiskPoint {
        (Coordinates::new(latitude, longitude), risk_level)
    }

    #[test]
    fn test_oblast_grid_cell_count_matches_half_open_arithmetic() {
        // ceil((62.0 - 58.2) / 0.3) * ceil((48.0 - 34.5) / 0.5) = 13 * 27
        let grid = build_risk_grid(&oblast_bounds(), &[point(59.2, 39.9, 5)]);
        assert_eq!(grid.len(), 13 * 27);
    }

    #[test]
    fn test_upper_bound_is_exclusive_on_both_axes() {
        // A box exactly one step wide yields exactly one cell; its origin
        // sits on the south-west corner, never on the north-east.
        let bounds = BoundingBox {
            south_west: Coordinates::new(59.0, 39.0),
            north_east: Coordinates::new(59.3, 39.5),
        };
        let grid = build_risk_grid(&bounds, &[point(59.0, 39.0, 7)]);
        assert_eq!(grid.len(), 1);
        assert_eq!(grid[0].bounds[0], Coordinates::new(59.0, 39.0));
        assert_eq!(grid[0].bounds[1], Coordinates::new(59.3, 39.5));
    }

    #[test]
    fn test_cell_spans_one_step_on_each_axis() {
        let grid = build_risk_grid(&oblast_bounds(), &[point(59.2, 39.9, 5)]);
        for cell in &grid {
            let dlat = cell.bounds[1].latitude - cell.bounds[0].latitude;
            let dlon = cell.bounds[1].longitude - cell.bounds[0].longitude;
            assert!((dlat - LAT_STEP_DEG).abs() < 1e-9);
            assert!((dlon - LON_STEP_DEG).abs() < 1e-9);
        }
    }

    #[test]
    fn test_empty_region_set_defaults_every_cell_to_level_2() {
        let grid = build_risk_grid(&oblast_bounds(), &[]);
        assert_eq!(grid.len(), 13 * 27);
        assert!(grid.iter().all(|cell| cell.risk_level == DEFAULT_RISK_LEVEL));
    }

    #[test]
    fn test_cells_take_the_nearest_region_level() {
        // One low-risk region in the south-west corner, one high-risk in
        // the north-east corner: each corner cell must match its neighbor.
        let points = [point(58.2, 34.5, 1), point(61.9, 47.9, 9)];
        let grid = build_risk_grid(&oblast_bounds(), &points);
        assert_eq!(grid.first().unwrap().risk_level, 1);
        assert_eq!(grid.last().unwrap().risk_level, 9);
    }

    #[test]
    fn test_equidistant_tie_goes_to_first_point_in_catalog_order() {
        // Two regions symmetric around the cell origin at (59.0, 39.0).
        let bounds = BoundingBox {
            south_west: Coordinates::new(59.0, 39.0),
            north_east: Coordinates::new(59.3, 39.5),
        };
        let forward = [point(59.0, 38.0, 3), point(59.0, 40.0, 8)];
        let reversed = [point(59.0, 40.0, 8), point(59.0, 38.0, 3)];
        assert_eq!(build_risk_grid(&bounds, &forward)[0].risk_level, 3);
        assert_eq!(build_risk_grid(&bounds, &reversed)[0].risk_level, 8);
    }

    #[test]
    fn test_grid_is_deterministic_across_calls() {
        let points = [point(59.2, 39.9, 5), point(60.0, 42.0, 8), point(58.9, 36.4, 2)];
        let first = build_risk_grid(&oblast_bounds(), &points);
        let second = build_risk_grid(&oblast_bounds(), &points);
        assert_eq!(first, second);
    }

    #[test]
    fn test_degenerate_box_produces_no_cells() {
        let bounds = BoundingBox {
            south_west: Coordinates::new(59.0, 39.0),
            north_east: Coordinates::new(59.0, 39.0),
        };
        assert!(build_risk_grid(&bounds, &[point(59.0, 39.0, 4)]).is_empty());
    }
}
