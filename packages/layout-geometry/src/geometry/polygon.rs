use crate::geometry::bound_rect::BoundRect;
use crate::geometry::point::Point;
use crate::utils::number::Number;

/// Closed ring of vertices in user units. The closing edge is implicit.
///
/// Orientation carries meaning for the engines: counter-clockwise rings
/// (positive [`Polygon::area`]) are solid, clockwise rings are holes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    points: Vec<Point<f64>>,
}

impl Polygon {
    pub fn new(points: Vec<Point<f64>>) -> Self {
        Self { points }
    }

    pub fn from_coords(coords: &[[f64; 2]]) -> Self {
        Self::new(coords.iter().map(|c| Point::new(c[0], c[1])).collect())
    }

    /// Axis-aligned rectangle, counter-clockwise.
    pub fn rectangle(min: Point<f64>, max: Point<f64>) -> Self {
        Self::new(vec![
            min,
            Point::new(max.x, min.y),
            max,
            Point::new(min.x, max.y),
        ])
    }

    pub fn points(&self) -> &[Point<f64>] {
        &self.points
    }

    pub fn length(&self) -> usize {
        self.points.len()
    }

    pub fn area(&self) -> f64 {
        f64::polygon_area(&self.points)
    }

    pub fn abs_area(&self) -> f64 {
        self.area().abs()
    }

    pub fn is_clockwise(&self) -> bool {
        self.area() < 0.0
    }

    pub fn reverse(&mut self) {
        self.points.reverse();
    }

    pub fn bounds(&self) -> Option<BoundRect<f64>> {
        BoundRect::from_points(&self.points)
    }
}

impl From<Vec<Point<f64>>> for Polygon {
    fn from(points: Vec<Point<f64>>) -> Self {
        Self::new(points)
    }
}

/// Sum of signed areas; holes subtract from their outer contours.
pub fn total_area(polygons: &[Polygon]) -> f64 {
    polygons.iter().map(Polygon::area).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_sign_tracks_orientation() {
        let mut square = Polygon::from_coords(&[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]]);

        assert_eq!(square.area(), 100.0);
        assert!(!square.is_clockwise());

        square.reverse();

        assert_eq!(square.area(), -100.0);
        assert_eq!(square.abs_area(), 100.0);
        assert!(square.is_clockwise());
    }

    #[test]
    fn rectangle_is_counter_clockwise() {
        let rect = Polygon::rectangle(Point::new(1.0, 2.0), Point::new(4.0, 6.0));

        assert_eq!(rect.area(), 12.0);
        assert_eq!(rect.points()[1], Point::new(4.0, 2.0));
    }

    #[test]
    fn broken_polygon() {
        let line = Polygon::from_coords(&[[0.0, 0.0], [1.0, 1.0]]);

        assert_eq!(line.length(), 2);
        assert_eq!(line.area(), 0.0);
        assert!(Polygon::default().bounds().is_none());
    }

    #[test]
    fn total_area_subtracts_holes() {
        let outer = Polygon::rectangle(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        let mut hole = Polygon::rectangle(Point::new(2.0, 2.0), Point::new(4.0, 4.0));
        hole.reverse();

        assert_eq!(total_area(&[outer, hole]), 96.0);
    }
}
