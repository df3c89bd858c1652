use crate::clipper::clipper::Clipper;
use crate::clipper::constants::{ARC_TOLERANCE_RATIO, DEFAULT_ARC_TOLERANCE, HI_RANGE, MAX_SPLIT_PASSES, MIN_MITER_LIMIT};
use crate::clipper::enums::{ClipType, JoinType, PolyFillType, PolyType};
use crate::clipper::utils::{check_range, get_area, reverse_paths, strip_duplicates};
use crate::error::GeometryError;
use crate::geometry::point::Point;
use std::f64::consts::PI;
use tracing::trace;

/// Grows or shrinks closed integer paths by a fixed distance.
///
/// Every path gets a raw parallel contour; the raw contours are then merged
/// with a Positive-fill union which removes the loops produced at concave
/// corners and by erosion.
pub struct ClipperOffset {
    src_polygons: Vec<Vec<Point<i64>>>,
    join_type: JoinType,
    miter_limit: f64,
    min_miter_limit: f64,
    arc_tolerance: f64,
    default_arc_tolerance: f64,
    max_split_passes: usize,
}

/// Per-execution constants derived from the offset distance.
struct OffsetParams {
    delta: f64,
    miter_lim: f64,
    sin: f64,
    cos: f64,
    steps_per_rad: f64,
}

impl ClipperOffset {
    /// `miter_limit` is a multiple of the offset distance, raised to the
    /// minimum miter limit ([`MIN_MITER_LIMIT`] unless overridden).
    /// `arc_tolerance` is in grid units.
    pub fn new(join_type: JoinType, miter_limit: f64, arc_tolerance: f64) -> Self {
        Self {
            src_polygons: Vec::new(),
            join_type,
            miter_limit,
            min_miter_limit: MIN_MITER_LIMIT,
            arc_tolerance,
            default_arc_tolerance: DEFAULT_ARC_TOLERANCE,
            max_split_passes: MAX_SPLIT_PASSES,
        }
    }

    pub fn with_min_miter_limit(mut self, min_miter_limit: f64) -> Self {
        self.min_miter_limit = min_miter_limit;
        self
    }

    pub fn with_default_arc_tolerance(mut self, default_arc_tolerance: f64) -> Self {
        self.default_arc_tolerance = default_arc_tolerance;
        self
    }

    pub fn with_max_split_passes(mut self, max_split_passes: usize) -> Self {
        self.max_split_passes = max_split_passes;
        self
    }

    /// Returns `Ok(false)` for paths with fewer than three distinct vertices.
    pub fn add_path(&mut self, polygon: &[Point<i64>]) -> Result<bool, GeometryError> {
        check_range(polygon)?;

        let path = strip_duplicates(polygon);

        if path.len() < 3 {
            return Ok(false);
        }

        self.src_polygons.try_reserve(1)?;
        self.src_polygons.push(path);

        Ok(true)
    }

    pub fn add_paths(&mut self, polygons: &[Vec<Point<i64>>]) -> Result<bool, GeometryError> {
        let mut result = false;

        for polygon in polygons {
            if self.add_path(polygon)? {
                result = true;
            }
        }

        Ok(result)
    }

    /// Offsets every added path by `delta` grid units, positive outwards.
    pub fn execute(&mut self, delta: f64) -> Result<Vec<Vec<Point<i64>>>, GeometryError> {
        if !delta.is_finite() {
            return Err(GeometryError::InvalidParameter { name: "delta", value: delta });
        }

        if self.src_polygons.is_empty() {
            return Ok(Vec::new());
        }

        if delta.abs() < 0.5 {
            let mut result = Vec::new();
            result.try_reserve(self.src_polygons.len())?;
            result.extend(self.src_polygons.iter().cloned());
            return Ok(result);
        }

        self.fix_orientations();

        let params = self.params(delta);
        let mut clipper = Clipper::new().with_max_split_passes(self.max_split_passes);

        for path in self.src_polygons.iter() {
            let raw = self.do_offset(path, &params)?;
            clipper.add_path(&raw, PolyType::Subject)?;
        }

        let mut result = Vec::new();
        clipper.execute(ClipType::Union, &mut result, PolyFillType::Positive)?;

        trace!(
            delta,
            join_type = ?self.join_type,
            input = self.src_polygons.len(),
            output = result.len(),
            "offset executed"
        );

        Ok(result)
    }

    /// Reverses every path when the one holding the lowest vertex is clockwise,
    /// so outer contours offset outwards for a positive delta.
    fn fix_orientations(&mut self) {
        let mut lowest: Option<(usize, Point<i64>)> = None;

        for (index, path) in self.src_polygons.iter().enumerate() {
            for point in path {
                let is_lower = match lowest {
                    Some((_, current)) => (point.y, point.x) < (current.y, current.x),
                    None => true,
                };

                if is_lower {
                    lowest = Some((index, *point));
                }
            }
        }

        if let Some((index, _)) = lowest {
            if get_area(&self.src_polygons[index]) < 0.0 {
                reverse_paths(&mut self.src_polygons);
            }
        }
    }

    fn params(&self, delta: f64) -> OffsetParams {
        let abs_delta = delta.abs();
        let miter_limit = if self.miter_limit.is_finite() {
            self.miter_limit.max(self.min_miter_limit)
        } else {
            self.min_miter_limit
        };
        let mut arc_tolerance = if self.arc_tolerance > 0.0 {
            self.arc_tolerance
        } else {
            self.default_arc_tolerance
        };

        arc_tolerance = arc_tolerance.min(abs_delta * ARC_TOLERANCE_RATIO);

        let mut steps = PI / (1.0 - arc_tolerance / abs_delta).acos();

        if steps > abs_delta * PI {
            steps = abs_delta * PI;
        }

        let sin = (2.0 * PI / steps).sin();

        OffsetParams {
            delta,
            miter_lim: 2.0 / (miter_limit * miter_limit),
            sin: if delta < 0.0 { -sin } else { sin },
            cos: (2.0 * PI / steps).cos(),
            steps_per_rad: steps / (2.0 * PI),
        }
    }

    fn do_offset(&self, path: &[Point<i64>], params: &OffsetParams) -> Result<Vec<Point<i64>>, GeometryError> {
        let point_count = path.len();
        let mut normals = Vec::with_capacity(point_count);
        let mut result = Vec::with_capacity(point_count * 2);

        for i in 0..point_count {
            let next = if i + 1 == point_count { 0 } else { i + 1 };
            normals.push(Point::<f64>::unit_normal(&path[i], &path[next]));
        }

        let mut k = point_count - 1;

        for j in 0..point_count {
            k = self.offset_point(&mut result, path, &normals, params, j, k)?;
        }

        Ok(result)
    }

    /// Emits the offset vertices for corner `j`, `k` being the previous
    /// kept corner. Returns the new previous corner.
    fn offset_point(
        &self,
        polygon: &mut Vec<Point<i64>>,
        path: &[Point<i64>],
        normals: &[Point<f64>],
        params: &OffsetParams,
        j: usize,
        k: usize,
    ) -> Result<usize, GeometryError> {
        let delta = params.delta;
        let current = path[j].to_f64();
        let normal1 = &normals[j];
        let normal2 = &normals[k];
        let mut sin_a = normal2.cross(normal1);
        let cos_a = normal2.dot(normal1);

        if (sin_a * delta).abs() < 1.0 && cos_a > 0.0 {
            // almost straight, a single point is enough
            push_point(polygon, offset_along(&current, normal2, delta))?;
            return Ok(k);
        }

        sin_a = sin_a.clamp(-1.0, 1.0);

        if sin_a * delta < 0.0 {
            push_point(polygon, offset_along(&current, normal2, delta))?;
            push_point(polygon, current)?;
            push_point(polygon, offset_along(&current, normal1, delta))?;
            return Ok(j);
        }

        match self.join_type {
            JoinType::Miter => {
                let r = 1.0 + cos_a;

                if r >= params.miter_lim {
                    let mut point = *normal2;
                    point.add(normal1).scale_up(delta / r).add(&current);
                    push_point(polygon, point)?;
                } else {
                    do_bevel(polygon, &current, normal1, normal2, delta)?;
                }
            }
            JoinType::Bevel => do_bevel(polygon, &current, normal1, normal2, delta)?,
            JoinType::Round => {
                let angle = sin_a.atan2(cos_a);
                let steps = ((params.steps_per_rad * angle.abs()).round() as usize).max(1);
                let mut x = normal2.x;
                let mut y = normal2.y;

                for _ in 0..steps {
                    push_point(polygon, Point::new(current.x + x * delta, current.y + y * delta))?;

                    let prev_x = x;
                    x = x * params.cos - params.sin * y;
                    y = prev_x * params.sin + y * params.cos;
                }

                push_point(polygon, offset_along(&current, normal1, delta))?;
            }
        }

        Ok(j)
    }
}

#[inline(always)]
fn offset_along(point: &Point<f64>, normal: &Point<f64>, delta: f64) -> Point<f64> {
    let mut result = *normal;
    result.scale_up(delta).add(point);
    result
}

fn do_bevel(
    polygon: &mut Vec<Point<i64>>,
    current: &Point<f64>,
    normal1: &Point<f64>,
    normal2: &Point<f64>,
    delta: f64,
) -> Result<(), GeometryError> {
    push_point(polygon, offset_along(current, normal2, delta))?;
    push_point(polygon, offset_along(current, normal1, delta))
}

/// Rounds to the grid, failing when the vertex leaves the supported range.
fn push_point(polygon: &mut Vec<Point<i64>>, mut point: Point<f64>) -> Result<(), GeometryError> {
    point.clipper_round();

    for value in [point.x, point.y] {
        if value.is_nan() || value.abs() > HI_RANGE as f64 {
            return Err(GeometryError::CoordinateOverflow { value });
        }
    }

    polygon.push(point.to_i64());
    Ok(())
}
