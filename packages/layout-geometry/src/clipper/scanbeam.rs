use crate::clipper::t_edge::TEdge;

/// Distinct sweep rows, kept in descending order so the lowest row pops first.
#[derive(Debug)]
pub struct Scanbeam {
    values: Vec<i64>,
}

impl Scanbeam {
    pub fn from_edges(t_edge: &TEdge) -> Self {
        let mut values = Vec::with_capacity(t_edge.len() * 2);

        for index in 0..t_edge.len() {
            values.push(t_edge.bot(index).y);
            values.push(t_edge.top(index).y);
        }

        values.sort_unstable_by(|a, b| b.cmp(a));
        values.dedup();

        Self { values }
    }

    pub fn pop(&mut self) -> Option<i64> {
        self.values.pop()
    }

    pub fn peek(&self) -> Option<i64> {
        self.values.last().copied()
    }
}
