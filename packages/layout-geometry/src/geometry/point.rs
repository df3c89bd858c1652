use crate::utils::almost_equal::AlmostEqual;
use crate::utils::number::Number;
use crate::utils::round::ClipperRound;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point<T: Number> {
    pub x: T,
    pub y: T,
}

impl<T: Number> Point<T> {
    #[inline(always)]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    #[inline(always)]
    pub fn set(&mut self, x: T, y: T) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    #[inline(always)]
    pub fn add(&mut self, other: &Self) -> &mut Self {
        self.set(self.x + other.x, self.y + other.y)
    }

    #[inline(always)]
    pub fn sub(&mut self, other: &Self) -> &mut Self {
        self.set(self.x - other.x, self.y - other.y)
    }

    #[inline(always)]
    pub fn max(&mut self, other: &Self) -> &mut Self {
        self.set(self.x.max_num(other.x), self.y.max_num(other.y))
    }

    #[inline(always)]
    pub fn min(&mut self, other: &Self) -> &mut Self {
        self.set(self.x.min_num(other.x), self.y.min_num(other.y))
    }

    #[inline(always)]
    pub fn scale_up(&mut self, value: T) -> &mut Self {
        self.set(self.x * value, self.y * value)
    }

    #[inline(always)]
    pub fn scale_down(&mut self, value: T) -> &mut Self {
        self.set(self.x / value, self.y / value)
    }

    /// Right-hand normal: (x, y) -> (y, -x).
    #[inline(always)]
    pub fn normal(&mut self) -> &mut Self {
        self.set(self.y, -self.x)
    }

    #[inline(always)]
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// z component of `self × other`; positive when `other` is counter-clockwise of `self`.
    #[inline(always)]
    pub fn cross(&self, other: &Self) -> T {
        self.x * other.y - self.y * other.x
    }

    #[inline(always)]
    pub fn almost_equal(&self, other: &Self, tolerance: Option<T>) -> bool {
        self.x.almost_equal(other.x, tolerance) && self.y.almost_equal(other.y, tolerance)
    }

    #[inline(always)]
    pub fn length2(&self) -> T {
        self.dot(self)
    }

    #[inline(always)]
    pub fn length(&self) -> f64 {
        self.length2().to_f64().unwrap_or(f64::INFINITY).sqrt()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.x == T::zero() && self.y == T::zero()
    }

    #[inline(always)]
    pub fn clipper_round(&mut self) -> &mut Self {
        self.set(self.x.clipper_rounded(), self.y.clipper_rounded())
    }
}

impl Point<f64> {
    /// Scales to unit length; the zero vector is left untouched.
    #[inline(always)]
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.length();
        if !self.is_empty() && !len.almost_equal(1.0, None) {
            self.scale_down(len);
        }
        self
    }

    #[inline(always)]
    pub fn to_i64(&self) -> Point<i64> {
        Point::new(self.x.clipper_rounded() as i64, self.y.clipper_rounded() as i64)
    }

    /// Unit right-hand normal of the directed segment `from -> to`.
    pub fn unit_normal(from: &Point<i64>, to: &Point<i64>) -> Self {
        let mut result = Point::new((to.x - from.x) as f64, (to.y - from.y) as f64);
        result.normalize().normal();
        result
    }
}

impl Point<i64> {
    #[inline(always)]
    pub fn to_f64(&self) -> Point<f64> {
        Point::new(self.x as f64, self.y as f64)
    }

    /// Twice the signed area of triangle `a, b, c`, computed exactly.
    #[inline(always)]
    pub fn orientation(a: &Self, b: &Self, c: &Self) -> i128 {
        let abx = (b.x - a.x) as i128;
        let aby = (b.y - a.y) as i128;
        let acx = (c.x - a.x) as i128;
        let acy = (c.y - a.y) as i128;

        abx * acy - aby * acx
    }

    /// Whether `point`, known to be collinear with `a`-`b`, lies within the segment bounds.
    #[inline(always)]
    pub fn in_segment_bounds(a: &Self, b: &Self, point: &Self) -> bool {
        point.x >= a.x.min(b.x)
            && point.x <= a.x.max(b.x)
            && point.y >= a.y.min(b.y)
            && point.y <= a.y.max(b.y)
    }

    #[inline(always)]
    pub fn on_segment(a: &Self, b: &Self, point: &Self) -> bool {
        Self::orientation(a, b, point) == 0 && Self::in_segment_bounds(a, b, point)
    }
}
