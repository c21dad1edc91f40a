/// Risk scoring and spatial interpolation for transmission infrastructure.
///
/// Submodules:
/// - `factors` — per-factor severity scoring from one observation.
/// - `aggregate` — weighted aggregation into a 0–10 risk level with
///   category label and recommended actions.
/// - `grid` — nearest-region rasterization of per-region levels into a
///   map-overlay grid.
///
/// Everything here is pure and synchronous. Both the synchronous and the
/// asynchronous request paths of the surrounding service call into this
/// one module, so the scoring rules live in exactly one place.

pub mod aggregate;
pub mod factors;
pub mod grid;
