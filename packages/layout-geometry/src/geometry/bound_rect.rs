use crate::geometry::point::Point;
use crate::utils::number::Number;

/// Axis-aligned box stored as bottom-left position plus size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundRect<T: Number> {
    position: Point<T>,
    size: Point<T>,
}

impl<T: Number> BoundRect<T> {
    pub fn new(x: T, y: T, width: T, height: T) -> Self {
        Self {
            position: Point::new(x, y),
            size: Point::new(width, height),
        }
    }

    pub fn from_points(points: &[Point<T>]) -> Option<Self> {
        let first = points.first()?;
        let mut min = *first;
        let mut max = *first;

        for point in points.iter().skip(1) {
            min.min(point);
            max.max(point);
        }

        max.sub(&min);

        Some(Self {
            position: min,
            size: max,
        })
    }

    pub fn x(&self) -> T {
        self.position.x
    }

    pub fn y(&self) -> T {
        self.position.y
    }

    pub fn width(&self) -> T {
        self.size.x
    }

    pub fn height(&self) -> T {
        self.size.y
    }

    pub fn max_x(&self) -> T {
        self.position.x + self.size.x
    }

    pub fn max_y(&self) -> T {
        self.position.y + self.size.y
    }

    /// Inclusive on every side.
    pub fn contains(&self, point: &Point<T>) -> bool {
        point.x >= self.x() && point.x <= self.max_x() && point.y >= self.y() && point.y <= self.max_y()
    }

    pub fn expanded(&self, margin: T) -> Self {
        let two = T::one() + T::one();

        Self::new(
            self.x() - margin,
            self.y() - margin,
            self.width() + margin * two,
            self.height() + margin * two,
        )
    }
}
