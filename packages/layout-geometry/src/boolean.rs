//! Or / And / Xor / Not between two polygon sets.

use crate::clipper::clipper::Clipper;
use crate::clipper::enums::{ClipType, Operation, PolyFillType, PolyType};
use crate::config::GeometryConfig;
use crate::error::{append_all, GeometryError};
use crate::geometry::polygon::Polygon;
use crate::scaler::Scaler;
use tracing::{debug, warn};

/// Computes `set_a <operation> set_b` and appends the resulting contours
/// to `result`. Both sets use the NonZero fill rule; `Not` is `A \ B`.
///
/// On error `result` is left as it was.
pub fn boolean(
    set_a: &[Polygon],
    set_b: &[Polygon],
    operation: Operation,
    scale: f64,
    result: &mut Vec<Polygon>,
) -> Result<(), GeometryError> {
    boolean_with_config(set_a, set_b, operation, &GeometryConfig::new(scale), result)
}

pub fn boolean_with_config(
    set_a: &[Polygon],
    set_b: &[Polygon],
    operation: Operation,
    config: &GeometryConfig,
    result: &mut Vec<Polygon>,
) -> Result<(), GeometryError> {
    debug!(
        ?operation,
        subject = set_a.len(),
        clip = set_b.len(),
        scale = config.scale,
        "boolean"
    );

    let polygons = run(set_a, set_b, operation, config).inspect_err(|error| {
        warn!(%error, "boolean operation failed");
    })?;

    debug!(output = polygons.len(), "boolean done");

    append_all(result, polygons)
}

/// Single-polygon form of [`boolean`].
pub fn boolean_polygons(
    polygon_a: &Polygon,
    polygon_b: &Polygon,
    operation: Operation,
    scale: f64,
    result: &mut Vec<Polygon>,
) -> Result<(), GeometryError> {
    boolean(
        std::slice::from_ref(polygon_a),
        std::slice::from_ref(polygon_b),
        operation,
        scale,
        result,
    )
}

fn run(
    set_a: &[Polygon],
    set_b: &[Polygon],
    operation: Operation,
    config: &GeometryConfig,
) -> Result<Vec<Polygon>, GeometryError> {
    config.validate()?;

    let scaler = Scaler::new(config.scale)?;
    let subject = scaler.scale_polygons(set_a)?;
    let clip = scaler.scale_polygons(set_b)?;
    let mut clipper = Clipper::new().with_max_split_passes(config.max_split_passes);
    let mut solution = Vec::new();

    clipper.add_paths(&subject, PolyType::Subject)?;
    clipper.add_paths(&clip, PolyType::Clip)?;
    clipper.execute(ClipType::from(operation), &mut solution, PolyFillType::NonZero)?;

    Ok(scaler.descale_paths(&solution))
}
