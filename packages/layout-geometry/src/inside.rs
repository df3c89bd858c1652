//! Point containment against a polygon set.

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

/// How results are aggregated per group of points.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum ShortCircuit {
    /// One entry per point, groups flattened in order.
    None,
    /// One entry per group: whether any point is inside. Empty groups give `false`.
    Any,
    /// One entry per group: whether every point is inside. Empty groups give `true`.
    All,
}

/// Where a point lies relative to a region.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Location {
    Inside,
    Outside,
    Boundary,
}

struct Contour {
    bounds: BoundRect<i64>,
    points: Vec<Point<i64>>,
}

/// Normalised region on the grid: non-overlapping contours, outers
/// counter-clockwise and holes clockwise.
pub struct Region {
    contours: Vec<Contour>,
    scaler: Scaler,
}

impl Region {
    pub fn new(polygons: &[Polygon], config: &GeometryConfig) -> Result<Self, GeometryError> {
        config.validate()?;

        let scaler = Scaler::new(config.scale)?;
        let paths = polygons
            .iter()
            .map(|polygon| scaler.scale_path(polygon))
            .collect::<Result<Vec<_>, _>>()?;
        let mut clipper = Clipper::new().with_max_split_passes(config.max_split_passes);
        let mut solution = Vec::new();

        // rings collapsing below three grid vertices cover nothing and are skipped
        clipper.add_paths(&paths, PolyType::Subject)?;
        clipper.execute(ClipType::Union, &mut solution, PolyFillType::NonZero)?;

        let contours = solution
            .into_iter()
            .filter_map(|points| {
                BoundRect::from_points(&points).map(|bounds| Contour { bounds, points })
            })
            .collect();

        Ok(Self { contours, scaler })
    }

    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    /// Locates a point given in user units.
    pub fn locate(&self, point: &Point<f64>) -> Result<Location, GeometryError> {
        if !point.x.is_finite() || !point.y.is_finite() {
            return Err(GeometryError::InvalidParameter {
                name: "point",
                value: if point.x.is_finite() { point.y } else { point.x },
            });
        }

        let scaled_x = point.x * self.scaler.scale();
        let scaled_y = point.y * self.scaler.scale();

        // beyond the grid, hence beyond every contour
        if scaled_x.abs() > HI_RANGE as f64 || scaled_y.abs() > HI_RANGE as f64 {
            return Ok(Location::Outside);
        }

        Ok(self.locate_grid(&self.scaler.scale_point(point)?))
    }

    pub fn locate_grid(&self, point: &Point<i64>) -> Location {
        let mut winding = 0i64;

        for contour in self.contours.iter().filter(|c| c.bounds.contains(point)) {
            match contour_winding(&contour.points, point) {
                Some(value) => winding += value,
                None => return Location::Boundary,
            }
        }

        if winding != 0 {
            Location::Inside
        } else {
            Location::Outside
        }
    }

    pub fn contains(&self, point: &Point<f64>, boundary_inside: bool) -> Result<bool, GeometryError> {
        Ok(match self.locate(point)? {
            Location::Inside => true,
            Location::Outside => false,
            Location::Boundary => boundary_inside,
        })
    }
}

/// Signed winding number of `path` around `point`, `None` when the point
/// lies on the path.
fn contour_winding(path: &[Point<i64>], point: &Point<i64>) -> Option<i64> {
    let point_count = path.len();
    let mut winding = 0;

    for i in 0..point_count {
        let a = &path[i];
        let b = &path[if i + 1 == point_count { 0 } else { i + 1 }];
        let side = Point::orientation(a, b, point);

        if side == 0 && Point::in_segment_bounds(a, b, point) {
            return None;
        }

        if a.y <= point.y {
            if b.y > point.y && side > 0 {
                winding += 1;
            }
        } else if b.y <= point.y && side < 0 {
            winding -= 1;
        }
    }

    Some(winding)
}

/// Tests every point of `groups` against the union of `polygons`.
///
/// A point on a contour counts as inside; see [`inside_with_config`] to
/// change that.
pub fn inside(
    groups: &[Vec<Point<f64>>],
    polygons: &[Polygon],
    short_circuit: ShortCircuit,
    scale: f64,
) -> Result<Vec<bool>, GeometryError> {
    inside_with_config(groups, polygons, short_circuit, &GeometryConfig::new(scale))
}

pub fn inside_with_config(
    groups: &[Vec<Point<f64>>],
    polygons: &[Polygon],
    short_circuit: ShortCircuit,
    config: &GeometryConfig,
) -> Result<Vec<bool>, GeometryError> {
    debug!(
        groups = groups.len(),
        polygons = polygons.len(),
        ?short_circuit,
        scale = config.scale,
        "inside"
    );

    let region = Region::new(polygons, config)?;
    let boundary_inside = config.boundary_inside;
    let mut result = Vec::new();

    trace!(contours = region.contours.len(), "containment region ready");

    match short_circuit {
        ShortCircuit::None => {
            result.try_reserve(groups.iter().map(Vec::len).sum())?;

            for point in groups.iter().flatten() {
                result.push(region.contains(point, boundary_inside)?);
            }
        }
        ShortCircuit::Any => {
            result.try_reserve(groups.len())?;

            for group in groups {
                let mut is_any = false;

                for point in group {
                    if region.contains(point, boundary_inside)? {
                        is_any = true;
                        break;
                    }
                }

                result.push(is_any);
            }
        }
        ShortCircuit::All => {
            result.try_reserve(groups.len())?;

            for group in groups {
                let mut is_all = true;

                for point in group {
                    if !region.contains(point, boundary_inside)? {
                        is_all = false;
                        break;
                    }
                }

                result.push(is_all);
            }
        }
    }

    debug!(output = result.len(), "inside done");

    Ok(result)
}

/// [`inside`] with `points` as the only group.
pub fn inside_group(
    points: &[Point<f64>],
    polygons: &[Polygon],
    short_circuit: ShortCircuit,
    scale: f64,
) -> Result<Vec<bool>, GeometryError> {
    inside(std::slice::from_ref(&points.to_vec()), polygons, short_circuit, scale)
}

/// Single-polygon form of [`inside_group`].
pub fn inside_polygon(
    points: &[Point<f64>],
    polygon: &Polygon,
    short_circuit: ShortCircuit,
    scale: f64,
) -> Result<Vec<bool>, GeometryError> {
    inside_group(points, std::slice::from_ref(polygon), short_circuit, scale)
}

/// Whether at least one of `points` lies in the union of `polygons`.
/// `false` for no points.
pub fn any_inside(points: &[Point<f64>], polygons: &[Polygon], scale: f64) -> Result<bool, GeometryError> {
    let result = inside_group(points, polygons, ShortCircuit::Any, scale)?;

    Ok(result.first().copied().unwrap_or(false))
}

/// Whether every one of `points` lies in the union of `polygons`.
/// `true` for no points.
pub fn all_inside(points: &[Point<f64>], polygons: &[Polygon], scale: f64) -> Result<bool, GeometryError> {
    let result = inside_group(points, polygons, ShortCircuit::All, scale)?;

    Ok(result.first().copied().unwrap_or(true))
}
