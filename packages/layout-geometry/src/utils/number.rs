use crate::geometry::point::Point;
use crate::utils::{almost_equal::AlmostEqual, math::cycle_index, round::ClipperRound};
use num_traits::{FromPrimitive, Num, Signed, ToPrimitive};
use std::fmt::Debug;

pub trait Number:
    Num + Copy + PartialOrd + FromPrimitive + ToPrimitive + AlmostEqual + ClipperRound + Signed + Debug
{
    fn min_num(self, other: Self) -> Self;
    fn max_num(self, other: Self) -> Self;
    /// Signed shoelace area, positive for counter-clockwise rings in a y-up frame.
    fn polygon_area(points: &[Point<Self>]) -> f64;
}

impl Number for f64 {
    #[inline(always)]
    fn min_num(self, other: Self) -> Self {
        self.min(other)
    }
    #[inline(always)]
    fn max_num(self, other: Self) -> Self {
        self.max(other)
    }

    fn polygon_area(points: &[Point<Self>]) -> f64 {
        let point_count = points.len();

        if point_count < 3 {
            return 0.0;
        }

        let mut acc = 0.0;

        for i in 0..point_count {
            let curr = &points[i];
            let next = &points[cycle_index(i, point_count, 1)];

            acc += curr.x * next.y - next.x * curr.y;
        }

        0.5 * acc
    }
}

impl Number for i64 {
    #[inline(always)]
    fn min_num(self, other: Self) -> Self {
        self.min(other)
    }
    #[inline(always)]
    fn max_num(self, other: Self) -> Self {
        self.max(other)
    }

    fn polygon_area(points: &[Point<Self>]) -> f64 {
        let point_count = points.len();

        if point_count < 3 {
            return 0.0;
        }

        // i128 keeps the accumulation exact for any grid coordinate
        let mut acc = 0i128;

        for i in 0..point_count {
            let curr = &points[i];
            let next = &points[cycle_index(i, point_count, 1)];

            acc += curr.x as i128 * next.y as i128 - next.x as i128 * curr.y as i128;
        }

        0.5 * acc as f64
    }
}
