//! Cuts a polygon into strips along one axis.

use crate::clipper::clipper::Clipper;
use crate::clipper::constants::HI_RANGE;
use crate::clipper::enums::{ClipType, PolyFillType, PolyType};
use crate::config::GeometryConfig;
use crate::error::GeometryError;
use crate::geometry::bound_rect::BoundRect;
use crate::geometry::point::Point;
use crate::geometry::polygon::Polygon;
use crate::scaler::Scaler;
use tracing::{debug, trace};

/// Splits `polygon` at `positions`, vertical cut lines when `x_axis` is
/// set and horizontal ones otherwise. Returns `positions.len() + 1` bins
/// ordered along the axis; a bin may be empty or hold several pieces.
pub fn slice(
    polygon: &Polygon,
    positions: &[f64],
    x_axis: bool,
    scale: f64,
) -> Result<Vec<Vec<Polygon>>, GeometryError> {
    slice_with_config(polygon, positions, x_axis, &GeometryConfig::new(scale))
}

pub fn slice_with_config(
    polygon: &Polygon,
    positions: &[f64],
    x_axis: bool,
    config: &GeometryConfig,
) -> Result<Vec<Vec<Polygon>>, GeometryError> {
    debug!(
        points = polygon.length(),
        cuts = positions.len(),
        x_axis,
        scale = config.scale,
        "slice"
    );

    validate_positions(positions)?;
    config.validate()?;

    let scaler = Scaler::new(config.scale)?;
    let path = scaler.scale_polygon(polygon, 0)?;
    // one grid unit of slack so strips fully cover the polygon edges
    let Some(frame) = BoundRect::from_points(&path).map(|bounds| bounds.expanded(1)) else {
        return Ok(Vec::new());
    };
    let (axis_min, axis_max) = if x_axis {
        (frame.x(), frame.max_x())
    } else {
        (frame.y(), frame.max_y())
    };

    let mut cuts = Vec::with_capacity(positions.len() + 2);
    cuts.push(axis_min);
    for &position in positions {
        // positions beyond the polygon only produce empty bins
        let grid = scaler.scale_value(clamp_to_grid(position, config.scale))?;
        cuts.push(grid.clamp(axis_min, axis_max));
    }
    cuts.push(axis_max);

    let mut result = Vec::new();
    result.try_reserve(positions.len() + 1)?;

    for window in cuts.windows(2) {
        let (low, high) = (window[0], window[1]);

        if high <= low {
            result.push(Vec::new());
            continue;
        }

        let strip = strip_rect(&frame, low, high, x_axis);
        let mut clipper = Clipper::new().with_max_split_passes(config.max_split_passes);
        let mut solution = Vec::new();

        clipper.add_path(&path, PolyType::Subject)?;
        clipper.add_path(&strip, PolyType::Clip)?;
        clipper.execute(ClipType::Intersection, &mut solution, PolyFillType::NonZero)?;

        trace!(low, high, pieces = solution.len(), "strip clipped");

        result.push(scaler.descale_paths(&solution));
    }

    debug!(bins = result.len(), "slice done");

    Ok(result)
}

fn validate_positions(positions: &[f64]) -> Result<(), GeometryError> {
    for (index, &position) in positions.iter().enumerate() {
        if !position.is_finite() {
            return Err(GeometryError::InvalidParameter {
                name: "position",
                value: position,
            });
        }

        if index > 0 && position <= positions[index - 1] {
            return Err(GeometryError::UnorderedPositions { index });
        }
    }

    Ok(())
}

/// Keeps a user-unit position within what the grid can represent.
fn clamp_to_grid(position: f64, scale: f64) -> f64 {
    let limit = HI_RANGE as f64 / scale;

    position.clamp(-limit, limit)
}

/// Counter-clockwise rectangle covering `[low, high]` on the cut axis and
/// `frame` on the other axis, kept within the grid.
fn strip_rect(frame: &BoundRect<i64>, low: i64, high: i64, x_axis: bool) -> Vec<Point<i64>> {
    let other_min = if x_axis { frame.y() } else { frame.x() };
    let other_max = if x_axis { frame.max_y() } else { frame.max_x() };
    let other_min = other_min.max(-HI_RANGE);
    let other_max = other_max.min(HI_RANGE);
    let low = low.max(-HI_RANGE);
    let high = high.min(HI_RANGE);

    if x_axis {
        vec![
            Point::new(low, other_min),
            Point::new(high, other_min),
            Point::new(high, other_max),
            Point::new(low, other_max),
        ]
    } else {
        vec![
            Point::new(other_min, low),
            Point::new(other_max, low),
            Point::new(other_max, high),
            Point::new(other_min, high),
        ]
    }
}
