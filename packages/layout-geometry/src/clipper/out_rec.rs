use crate::geometry::point::Point;
use crate::utils::number::Number;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Output edges of a sweep, each directed so the filled region lies on its left.
#[derive(Debug, Default)]
pub struct OutRec {
    from: Vec<Point<i64>>,
    to: Vec<Point<i64>>,
}

/// 0: right turn, 1: straight, 2: left turn, 3: reversal.
fn turn_rank(incoming: &Point<i64>, outgoing: &Point<i64>) -> u8 {
    let cross = incoming.x as i128 * outgoing.y as i128 - incoming.y as i128 * outgoing.x as i128;

    match cross.cmp(&0) {
        Ordering::Greater => 2,
        Ordering::Less => 0,
        Ordering::Equal => {
            let dot = incoming.x as i128 * outgoing.x as i128 + incoming.y as i128 * outgoing.y as i128;
            if dot > 0 {
                1
            } else {
                3
            }
        }
    }
}

/// Greater when `lhs` turns further left than `rhs` after travelling along `incoming`.
pub fn compare_turns(incoming: &Point<i64>, lhs: &Point<i64>, rhs: &Point<i64>) -> Ordering {
    turn_rank(incoming, lhs)
        .cmp(&turn_rank(incoming, rhs))
        .then_with(|| {
            let cross = rhs.x as i128 * lhs.y as i128 - rhs.y as i128 * lhs.x as i128;
            cross.cmp(&0)
        })
}

/// Drops repeated and collinear vertices until none remain.
pub fn clean_contour(mut path: Vec<Point<i64>>) -> Vec<Point<i64>> {
    let mut is_modified = true;

    while is_modified && path.len() >= 3 {
        is_modified = false;
        let mut index = 0;

        while index < path.len() && path.len() >= 3 {
            let point_count = path.len();
            let prev = path[(index + point_count - 1) % point_count];
            let next = path[(index + 1) % point_count];

            if path[index] == prev || Point::orientation(&prev, &path[index], &next) == 0 {
                path.remove(index);
                is_modified = true;
            } else {
                index += 1;
            }
        }
    }

    if path.len() < 3 {
        path.clear();
    }

    path
}

impl OutRec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.from.len()
    }

    pub fn is_empty(&self) -> bool {
        self.from.is_empty()
    }

    /// Records the edge `bot -> top` when `is_forward`, otherwise `top -> bot`.
    pub fn add_edge(&mut self, bot: &Point<i64>, top: &Point<i64>, is_forward: bool) {
        if is_forward {
            self.from.push(*bot);
            self.to.push(*top);
        } else {
            self.from.push(*top);
            self.to.push(*bot);
        }
    }

    fn next_edge(&self, outgoing: &HashMap<Point<i64>, Vec<usize>>, edge_index: usize) -> Option<usize> {
        let mut incoming = self.to[edge_index];
        incoming.sub(&self.from[edge_index]);

        outgoing
            .get(&self.to[edge_index])?
            .iter()
            .copied()
            .max_by(|&lhs, &rhs| {
                let mut lhs_dir = self.to[lhs];
                let mut rhs_dir = self.to[rhs];
                lhs_dir.sub(&self.from[lhs]);
                rhs_dir.sub(&self.from[rhs]);

                compare_turns(&incoming, &lhs_dir, &rhs_dir)
            })
    }

    /// Stitches the recorded edges into closed contours. At shared vertices
    /// the sharpest left turn is taken, so regions touching at a point come
    /// out as separate contours.
    pub fn build_result(&self, solution: &mut Vec<Vec<Point<i64>>>) {
        let edge_count = self.len();
        let mut outgoing: HashMap<Point<i64>, Vec<usize>> = HashMap::with_capacity(edge_count);
        let mut used = vec![false; edge_count];

        for index in 0..edge_count {
            outgoing.entry(self.from[index]).or_default().push(index);
        }

        for start in 0..edge_count {
            if used[start] {
                continue;
            }

            let mut path = Vec::new();
            let mut edge_index = start;

            loop {
                used[edge_index] = true;
                path.push(self.from[edge_index]);

                match self.next_edge(&outgoing, edge_index) {
                    Some(next) if next != start && !used[next] => edge_index = next,
                    _ => break,
                }
            }

            let path = clean_contour(path);

            if !path.is_empty() && i64::polygon_area(&path) != 0.0 {
                solution.push(path);
            }
        }
    }

    pub fn dispose(&mut self) {
        self.from.clear();
        self.to.clear();
    }
}
