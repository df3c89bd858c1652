use crate::clipper::t_edge::TEdge;
use crate::geometry::point::Point;
use crate::utils::math::round_div;

/// Split points collected for every edge of a [`TEdge`] table.
pub struct IntersectNode {
    splits: Vec<Vec<Point<i64>>>,
    count: usize,
}

impl IntersectNode {
    pub fn new(edge_count: usize) -> Self {
        Self {
            splits: vec![Vec::new(); edge_count],
            count: 0,
        }
    }

    /// Finds every crossing, T-junction and collinear overlap between edges.
    /// Candidate pairs come from a sweep over x extents.
    pub fn build(t_edge: &TEdge) -> Self {
        let mut result = Self::new(t_edge.len());
        let mut order: Vec<usize> = (0..t_edge.len()).collect();
        let mut active: Vec<usize> = Vec::new();

        order.sort_unstable_by_key(|&i| t_edge.min_x(i));

        for &index in order.iter() {
            let min_x = t_edge.min_x(index);
            active.retain(|&other| t_edge.max_x(other) >= min_x);

            for &other in active.iter() {
                if t_edge.bot(index).y <= t_edge.top(other).y
                    && t_edge.bot(other).y <= t_edge.top(index).y
                {
                    result.check_pair(t_edge, index, other);
                }
            }

            active.push(index);
        }

        result
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn split_points(&self, edge_index: usize) -> &[Point<i64>] {
        &self.splits[edge_index]
    }

    fn add(&mut self, t_edge: &TEdge, edge_index: usize, point: Point<i64>) {
        if point == *t_edge.bot(edge_index) || point == *t_edge.top(edge_index) {
            return;
        }

        self.splits[edge_index].push(point);
        self.count += 1;
    }

    fn add_if_on_edge(&mut self, t_edge: &TEdge, edge_index: usize, point: &Point<i64>) {
        if Point::in_segment_bounds(t_edge.bot(edge_index), t_edge.top(edge_index), point) {
            self.add(t_edge, edge_index, *point);
        }
    }

    fn check_pair(&mut self, t_edge: &TEdge, edge1: usize, edge2: usize) {
        let p1 = *t_edge.bot(edge1);
        let p2 = *t_edge.top(edge1);
        let q1 = *t_edge.bot(edge2);
        let q2 = *t_edge.top(edge2);

        let d1 = Point::orientation(&q1, &q2, &p1);
        let d2 = Point::orientation(&q1, &q2, &p2);
        let d3 = Point::orientation(&p1, &p2, &q1);
        let d4 = Point::orientation(&p1, &p2, &q2);

        if d1 == 0 && d2 == 0 {
            // collinear: split each edge at the other's endpoints inside it
            self.add_if_on_edge(t_edge, edge1, &q1);
            self.add_if_on_edge(t_edge, edge1, &q2);
            self.add_if_on_edge(t_edge, edge2, &p1);
            self.add_if_on_edge(t_edge, edge2, &p2);
            return;
        }

        if d3 == 0 {
            self.add_if_on_edge(t_edge, edge1, &q1);
        }
        if d4 == 0 {
            self.add_if_on_edge(t_edge, edge1, &q2);
        }
        if d1 == 0 {
            self.add_if_on_edge(t_edge, edge2, &p1);
        }
        if d2 == 0 {
            self.add_if_on_edge(t_edge, edge2, &p2);
        }

        let is_crossing = ((d1 > 0 && d2 < 0) || (d1 < 0 && d2 > 0))
            && ((d3 > 0 && d4 < 0) || (d3 < 0 && d4 > 0));

        if is_crossing {
            let point = Self::crossing_point(&p1, &p2, &q1, &q2);
            self.add(t_edge, edge1, point);
            self.add(t_edge, edge2, point);
        }
    }

    /// Intersection of two properly crossing segments, snapped to the grid.
    pub fn crossing_point(
        p1: &Point<i64>,
        p2: &Point<i64>,
        q1: &Point<i64>,
        q2: &Point<i64>,
    ) -> Point<i64> {
        let rx = (p2.x - p1.x) as i128;
        let ry = (p2.y - p1.y) as i128;
        let sx = (q2.x - q1.x) as i128;
        let sy = (q2.y - q1.y) as i128;
        let qpx = (q1.x - p1.x) as i128;
        let qpy = (q1.y - p1.y) as i128;

        let denom = rx * sy - ry * sx;
        let t_num = qpx * sy - qpy * sx;

        Point::new(
            p1.x + round_div(rx * t_num, denom) as i64,
            p1.y + round_div(ry * t_num, denom) as i64,
        )
    }

    /// Rebuilds the edge table with every edge cut at its split points.
    pub fn apply(&self, t_edge: &TEdge) -> TEdge {
        let mut result = TEdge::with_capacity(t_edge.len() + self.count);

        for index in 0..t_edge.len() {
            let bot = *t_edge.bot(index);
            let top = *t_edge.top(index);
            let wind = *t_edge.wind_delta(index);
            let splits = self.split_points(index);

            if splits.is_empty() {
                result.push(bot, top, wind);
                continue;
            }

            let dx = (top.x - bot.x) as i128;
            let dy = (top.y - bot.y) as i128;
            let mut points = splits.to_vec();

            points.sort_unstable_by_key(|p| {
                ((p.x - bot.x) as i128 * dx + (p.y - bot.y) as i128 * dy, p.x, p.y)
            });
            points.dedup();

            let mut prev = bot;
            for point in points {
                result.push(prev, point, wind);
                prev = point;
            }
            result.push(prev, top, wind);
        }

        result
    }
}
