//! Parallel contours at a fixed distance.

use crate::clipper::clipper::Clipper;
use crate::clipper::clipper_offset::ClipperOffset;
use crate::clipper::enums::{ClipType, JoinType, PolyFillType, PolyType};
use crate::config::GeometryConfig;
use crate::error::{append_all, GeometryError};
use crate::geometry::polygon::Polygon;
use crate::scaler::Scaler;
use tracing::{debug, warn};

/// Offsets `set` by `distance` user units (positive grows, negative
/// shrinks) and appends the merged contours to `result`.
///
/// `tolerance` is the miter limit for [`JoinType::Miter`] (a multiple of
/// `distance`, at least 2) and the chord error in user units for
/// [`JoinType::Round`]. With `use_union` the set is first merged so holes
/// and overlaps are offset as one shape; otherwise every polygon is offset
/// on its own before the final merge.
///
/// Polygons eroded away are simply missing from the output.
pub fn offset(
    set: &[Polygon],
    distance: f64,
    join: JoinType,
    tolerance: f64,
    scale: f64,
    use_union: bool,
    result: &mut Vec<Polygon>,
) -> Result<(), GeometryError> {
    offset_with_config(
        set,
        distance,
        join,
        tolerance,
        use_union,
        &GeometryConfig::new(scale),
        result,
    )
}

pub fn offset_with_config(
    set: &[Polygon],
    distance: f64,
    join: JoinType,
    tolerance: f64,
    use_union: bool,
    config: &GeometryConfig,
    result: &mut Vec<Polygon>,
) -> Result<(), GeometryError> {
    debug!(
        input = set.len(),
        distance,
        ?join,
        tolerance,
        use_union,
        scale = config.scale,
        "offset"
    );

    let polygons = run(set, distance, join, tolerance, use_union, config).inspect_err(|error| {
        warn!(%error, "offset failed");
    })?;

    debug!(output = polygons.len(), "offset done");

    append_all(result, polygons)
}

/// Single-polygon form of [`offset`], always offsetting the polygon as given.
pub fn offset_polygon(
    polygon: &Polygon,
    distance: f64,
    join: JoinType,
    tolerance: f64,
    scale: f64,
    result: &mut Vec<Polygon>,
) -> Result<(), GeometryError> {
    offset(
        std::slice::from_ref(polygon),
        distance,
        join,
        tolerance,
        scale,
        false,
        result,
    )
}

fn run(
    set: &[Polygon],
    distance: f64,
    join: JoinType,
    tolerance: f64,
    use_union: bool,
    config: &GeometryConfig,
) -> Result<Vec<Polygon>, GeometryError> {
    if !distance.is_finite() {
        return Err(GeometryError::InvalidParameter {
            name: "distance",
            value: distance,
        });
    }
    if !tolerance.is_finite() {
        return Err(GeometryError::InvalidParameter {
            name: "tolerance",
            value: tolerance,
        });
    }

    config.validate()?;

    let scaler = Scaler::new(config.scale)?;
    let mut paths = scaler.scale_polygons(set)?;

    if use_union {
        let mut clipper = Clipper::new().with_max_split_passes(config.max_split_passes);
        let mut merged = Vec::new();

        clipper.add_paths(&paths, PolyType::Subject)?;
        clipper.execute(ClipType::Union, &mut merged, PolyFillType::NonZero)?;
        paths = merged;
    }

    let delta = distance * config.scale;

    if delta.abs() < 0.5 {
        // nothing moves; hand back the input, merged if requested
        return Ok(if use_union {
            scaler.descale_paths(&paths)
        } else {
            set.to_vec()
        });
    }

    let mut clipper_offset = ClipperOffset::new(join, tolerance, tolerance * config.scale)
        .with_min_miter_limit(config.min_miter_limit)
        .with_default_arc_tolerance(config.default_arc_tolerance)
        .with_max_split_passes(config.max_split_passes);

    clipper_offset.add_paths(&paths)?;

    let solution = clipper_offset.execute(delta)?;

    Ok(scaler.descale_paths(&solution))
}
