use crate::clipper::constants::HI_RANGE;
use crate::error::GeometryError;
use crate::geometry::point::Point;
use crate::utils::number::Number;

#[inline(always)]
pub fn get_area(path: &[Point<i64>]) -> f64 {
    i64::polygon_area(path)
}

/// Removes consecutive repeats, including a closing vertex equal to the first one.
pub fn strip_duplicates(path: &[Point<i64>]) -> Vec<Point<i64>> {
    let mut result: Vec<Point<i64>> = Vec::with_capacity(path.len());

    for point in path {
        if result.last() != Some(point) {
            result.push(*point);
        }
    }

    while result.len() > 1 && result.first() == result.last() {
        result.pop();
    }

    result
}

/// Fails when a coordinate lies outside `[-HI_RANGE, HI_RANGE]`.
pub fn check_range(path: &[Point<i64>]) -> Result<(), GeometryError> {
    for point in path {
        for value in [point.x, point.y] {
            if value.abs() > HI_RANGE {
                return Err(GeometryError::CoordinateOverflow {
                    value: value as f64,
                });
            }
        }
    }

    Ok(())
}

pub fn reverse_paths(paths: &mut [Vec<Point<i64>>]) {
    for path in paths.iter_mut() {
        path.reverse();
    }
}
