use crate::clipper::t_edge::TEdge;

/// Edges waiting to enter the sweep, ordered by their bottom row.
///
/// Horizontal and non-horizontal edges are queued separately since they
/// are resolved at different moments of a scanbeam.
#[derive(Debug)]
pub struct LocalMinima {
    // (bottom y, edge index), descending so the lowest pops first
    queue: Vec<(i64, usize)>,
}

impl LocalMinima {
    pub fn from_edges(t_edge: &TEdge, horizontal: bool) -> Self {
        let mut queue: Vec<(i64, usize)> = (0..t_edge.len())
            .filter(|&index| t_edge.is_horizontal(index) == horizontal)
            .map(|index| (t_edge.bot(index).y, index))
            .collect();

        queue.sort_unstable_by(|a, b| b.cmp(a));

        Self { queue }
    }

    pub fn min_y(&self) -> Option<i64> {
        self.queue.last().map(|&(y, _)| y)
    }

    pub fn pop(&mut self) -> Option<usize> {
        self.queue.pop().map(|(_, index)| index)
    }
}
