//! End-to-end risk pipeline tests.
//!
//! Exercises the full chain — observation → factor scoring → aggregation →
//! snapshot → overlay grid — without any network access, using the
//! deterministic fallback observations as input.

use chrono::{TimeZone, Utc};
use gridmon_service::ingest::openmeteo;
use gridmon_service::risk::{aggregate, factors, grid};
use gridmon_service::{RegionCatalog, ScenarioPreset, WeatherObservation, WeatherSnapshot};

fn fixed_now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 26, 6, 0, 0).unwrap()
}

fn offline_snapshot(catalog: &RegionCatalog) -> WeatherSnapshot {
    WeatherSnapshot::assess_at(catalog, fixed_now(), |region| {
        Ok(openmeteo::fallback_observation(&region.name))
    })
    .expect("builtin catalog is non-empty")
}

#[test]
fn test_worked_example_severe_storm_scores_critical_9() {
    let observation = WeatherObservation {
        temperature: -22.0,
        wind_speed: 22.0,
        precipitation: 20.0,
        humidity: 95,
        pressure: 985.0,
        weather_code: 75,
        description: "Heavy snowfall".to_string(),
    };

    let f = factors::analyze(&observation);
    assert_eq!(f.wind, 1.0);
    assert_eq!(f.temperature, 0.9);
    assert_eq!(f.precipitation, 1.0);
    assert_eq!(f.icing, 0.9);
    assert_eq!(f.weather_phenomena, 0.9);

    let assessment = aggregate::aggregate(&f);
    assert_eq!(assessment.risk_level, 9);
    assert_eq!(assessment.risk_description, "Critical");
    assert_eq!(assessment.recommendations.len(), 3);
}

#[test]
fn test_worked_example_calm_day_scores_low_1() {
    let observation = WeatherObservation {
        temperature: 10.0,
        wind_speed: 2.0,
        precipitation: 0.0,
        humidity: 50,
        pressure: 1016.0,
        weather_code: 0,
        description: "Clear sky".to_string(),
    };

    let assessment = aggregate::aggregate(&factors::analyze(&observation));
    assert_eq!(assessment.risk_level, 1);
    assert_eq!(assessment.risk_description, "Low");
}

#[test]
fn test_offline_pipeline_produces_full_oblast_grid() {
    let catalog = RegionCatalog::builtin();
    let snapshot = offline_snapshot(&catalog);

    assert_eq!(snapshot.entries.len(), 28);
    for entry in &snapshot.entries {
        assert!(entry.assessment.risk_level <= 10);
        assert!(!entry.assessment.recommendations.is_empty());
    }

    let cells = snapshot.build_grid(&grid::oblast_bounds());
    assert_eq!(cells.len(), 13 * 27);
    assert!(cells.iter().all(|cell| cell.risk_level <= 10));
}

#[test]
fn test_every_cell_matches_an_independent_nearest_region_scan() {
    let catalog = RegionCatalog::builtin();
    let snapshot = offline_snapshot(&catalog);
    let points = snapshot.risk_points();
    let cells = snapshot.build_grid(&grid::oblast_bounds());

    for cell in &cells {
        let origin = cell.bounds[0];
        let expected = points
            .iter()
            .map(|(coords, level)| (coords.degree_distance(&origin), *level))
            .fold((f64::INFINITY, 0u8), |best, candidate| {
                if candidate.0 < best.0 { candidate } else { best }
            })
            .1;
        assert_eq!(
            cell.risk_level, expected,
            "cell at ({}, {}) does not match its nearest region",
            origin.latitude, origin.longitude
        );
    }
}

#[test]
fn test_repeated_pipeline_runs_are_identical() {
    let catalog = RegionCatalog::builtin();
    let first = offline_snapshot(&catalog);
    let second = offline_snapshot(&catalog);
    assert_eq!(first, second);
    assert_eq!(
        first.build_grid(&grid::oblast_bounds()),
        second.build_grid(&grid::oblast_bounds())
    );
}

#[test]
fn test_snapshot_serializes_for_the_service_layer() {
    let catalog = RegionCatalog::builtin();
    let snapshot = offline_snapshot(&catalog);
    let json = serde_json::to_value(&snapshot).expect("snapshot must serialize");

    let entry = &json["entries"][0];
    assert_eq!(entry["region"], "Vologda");
    assert!(entry["assessment"]["risk_level"].is_u64());
    assert!(entry["assessment"]["factors"]["wind"].is_f64());
    assert!(entry["assessment"]["recommendations"].is_array());

    let cells = serde_json::to_value(snapshot.build_grid(&grid::oblast_bounds())).unwrap();
    assert!(cells[0]["riskLevel"].is_u64());
    assert_eq!(cells[0]["bounds"].as_array().unwrap().len(), 2);
}

#[test]
fn test_scenario_snapshots_cover_all_presets() {
    let catalog = RegionCatalog::builtin();
    for preset in ScenarioPreset::ALL {
        let snapshot = preset.apply_at(&catalog, fixed_now()).unwrap();
        assert_eq!(snapshot.entries.len(), 28);
        assert!(snapshot
            .entries
            .iter()
            .all(|e| e.assessment.risk_level == preset.risk_level()));
    }
}
