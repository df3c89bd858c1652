//! Conversion between user coordinates and the integer grid.

use crate::clipper::constants::HI_RANGE;
use crate::clipper::utils::strip_duplicates;
use crate::error::GeometryError;
use crate::geometry::point::Point;
use crate::geometry::polygon::Polygon;
use crate::utils::round::ClipperRound;

/// Maps user units to grid units by a fixed positive factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaler {
    scale: f64,
}

impl Scaler {
    pub fn new(scale: f64) -> Result<Self, GeometryError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(GeometryError::InvalidScale(scale));
        }

        Ok(Self { scale })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Scales and rounds half away from zero.
    pub fn scale_value(&self, value: f64) -> Result<i64, GeometryError> {
        let scaled = (value * self.scale).clipper_rounded();

        if !scaled.is_finite() || scaled.abs() > HI_RANGE as f64 {
            return Err(GeometryError::CoordinateOverflow { value: scaled });
        }

        Ok(scaled as i64)
    }

    pub fn scale_point(&self, point: &Point<f64>) -> Result<Point<i64>, GeometryError> {
        Ok(Point::new(self.scale_value(point.x)?, self.scale_value(point.y)?))
    }

    /// Snaps every vertex of `polygon` to the grid, repeats included.
    pub fn scale_path(&self, polygon: &Polygon) -> Result<Vec<Point<i64>>, GeometryError> {
        polygon.points().iter().map(|point| self.scale_point(point)).collect()
    }

    /// Snaps `polygon` to the grid and drops consecutive duplicates, the
    /// closing vertex included. `index` only feeds the error report.
    pub fn scale_polygon(&self, polygon: &Polygon, index: usize) -> Result<Vec<Point<i64>>, GeometryError> {
        let result = strip_duplicates(&self.scale_path(polygon)?);

        if result.len() < 3 {
            return Err(GeometryError::TooFewVertices {
                index,
                count: result.len(),
            });
        }

        Ok(result)
    }

    pub fn scale_polygons(&self, polygons: &[Polygon]) -> Result<Vec<Vec<Point<i64>>>, GeometryError> {
        polygons
            .iter()
            .enumerate()
            .map(|(index, polygon)| self.scale_polygon(polygon, index))
            .collect()
    }

    pub fn descale_point(&self, point: &Point<i64>) -> Point<f64> {
        Point::new(point.x as f64 / self.scale, point.y as f64 / self.scale)
    }

    pub fn descale_path(&self, path: &[Point<i64>]) -> Polygon {
        Polygon::new(path.iter().map(|point| self.descale_point(point)).collect())
    }

    pub fn descale_paths(&self, paths: &[Vec<Point<i64>>]) -> Vec<Polygon> {
        paths.iter().map(|path| self.descale_path(path)).collect()
    }
}
