use crate::clipper::enums::PolyType;
use crate::error::GeometryError;
use crate::geometry::point::Point;
use std::cmp::Ordering;

/// Winding change per operand when crossing an edge from its right side to its left side.
pub type WindDelta = [i32; 2];

/// Edge table. Every edge is stored normalised so that `bot` precedes `top`
/// in (y, x) order; the winding delta is expressed for that direction.
#[derive(Debug, Clone, Default)]
pub struct TEdge {
    bot: Vec<Point<i64>>,
    top: Vec<Point<i64>>,
    wind_delta: Vec<WindDelta>,
}

#[inline(always)]
fn precedes(a: &Point<i64>, b: &Point<i64>) -> bool {
    (a.y, a.x) < (b.y, b.x)
}

#[inline(always)]
fn negate(wind: WindDelta) -> WindDelta {
    [-wind[0], -wind[1]]
}

impl TEdge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bot: Vec::with_capacity(capacity),
            top: Vec::with_capacity(capacity),
            wind_delta: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.bot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bot.is_empty()
    }

    pub fn bot(&self, index: usize) -> &Point<i64> {
        &self.bot[index]
    }

    pub fn top(&self, index: usize) -> &Point<i64> {
        &self.top[index]
    }

    pub fn wind_delta(&self, index: usize) -> &WindDelta {
        &self.wind_delta[index]
    }

    pub fn is_horizontal(&self, index: usize) -> bool {
        self.bot[index].y == self.top[index].y
    }

    pub fn min_x(&self, index: usize) -> i64 {
        self.bot[index].x.min(self.top[index].x)
    }

    pub fn max_x(&self, index: usize) -> i64 {
        self.bot[index].x.max(self.top[index].x)
    }

    /// Stores the directed segment `from -> to` whose winding delta is `wind`.
    /// Zero-length segments are ignored.
    pub fn push(&mut self, from: Point<i64>, to: Point<i64>, wind: WindDelta) -> bool {
        if from == to {
            return false;
        }

        if precedes(&from, &to) {
            self.bot.push(from);
            self.top.push(to);
            self.wind_delta.push(wind);
        } else {
            self.bot.push(to);
            self.top.push(from);
            self.wind_delta.push(negate(wind));
        }

        true
    }

    /// Adds every edge of a closed ring; returns the number of edges stored.
    pub fn create_path(&mut self, polygon: &[Point<i64>], poly_type: PolyType) -> usize {
        let point_count = polygon.len();
        let mut wind: WindDelta = [0, 0];
        let mut result = 0;

        wind[poly_type.index()] = 1;

        for i in 0..point_count {
            let next = if i + 1 == point_count { 0 } else { i + 1 };
            if self.push(polygon[i], polygon[next], wind) {
                result += 1;
            }
        }

        result
    }

    /// Merges coincident edges by summing their winding deltas and drops
    /// edges whose deltas cancel out.
    pub fn coalesce(&mut self) -> Result<(), GeometryError> {
        let mut order: Vec<usize> = (0..self.len()).collect();
        order.sort_unstable_by_key(|&i| (self.bot[i].y, self.bot[i].x, self.top[i].y, self.top[i].x));

        let mut result = TEdge::with_capacity(self.len());

        for index in order {
            let last = result.len();
            if last != 0
                && result.bot[last - 1] == self.bot[index]
                && result.top[last - 1] == self.top[index]
            {
                let merged = &mut result.wind_delta[last - 1];
                for k in 0..2 {
                    merged[k] = merged[k]
                        .checked_add(self.wind_delta[index][k])
                        .ok_or(GeometryError::WindingOverflow)?;
                }
                continue;
            }

            result.bot.push(self.bot[index]);
            result.top.push(self.top[index]);
            result.wind_delta.push(self.wind_delta[index]);
        }

        let mut write = 0;
        for read in 0..result.len() {
            if result.wind_delta[read] != [0, 0] {
                result.bot[write] = result.bot[read];
                result.top[write] = result.top[read];
                result.wind_delta[write] = result.wind_delta[read];
                write += 1;
            }
        }

        result.bot.truncate(write);
        result.top.truncate(write);
        result.wind_delta.truncate(write);

        *self = result;
        Ok(())
    }

    /// `2 * dy * x(y2 / 2)` for a non-horizontal edge.
    #[inline(always)]
    fn doubled_x_numerator(&self, index: usize, y2: i64) -> i128 {
        let bot = &self.bot[index];
        let top = &self.top[index];
        let dx = (top.x - bot.x) as i128;
        let dy = (top.y - bot.y) as i128;

        2 * bot.x as i128 * dy + dx * (y2 as i128 - 2 * bot.y as i128)
    }

    #[inline(always)]
    fn dy(&self, index: usize) -> i128 {
        (self.top[index].y - self.bot[index].y) as i128
    }

    /// Orders two non-horizontal edges by their exact x at `y2 / 2`.
    pub fn compare_at(&self, index1: usize, index2: usize, y2: i64) -> Ordering {
        let lhs = self.doubled_x_numerator(index1, y2) * self.dy(index2);
        let rhs = self.doubled_x_numerator(index2, y2) * self.dy(index1);

        lhs.cmp(&rhs)
    }

    /// Whether the non-horizontal edge crosses row `y` strictly left of `x2 / 2`.
    pub fn is_left_of(&self, index: usize, y: i64, x2: i64) -> bool {
        self.doubled_x_numerator(index, 2 * y) < x2 as i128 * self.dy(index)
    }
}
