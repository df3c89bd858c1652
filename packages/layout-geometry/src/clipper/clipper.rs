use crate::{
    clipper::{
        constants::MAX_SPLIT_PASSES,
        enums::{ClipType, PolyFillType, PolyType},
        intersect_node::IntersectNode,
        local_minima::LocalMinima,
        out_rec::OutRec,
        scanbeam::Scanbeam,
        t_edge::{TEdge, WindDelta},
        utils::{check_range, strip_duplicates},
    },
    error::GeometryError,
    geometry::point::Point,
};
use tracing::{debug, trace, warn};

/// Boolean clipper over closed integer paths.
///
/// Edges are first split wherever they cross or touch so that no two
/// edges meet except at shared endpoints. A single sweep then assigns each
/// edge the winding numbers on both of its sides; edges separating filled
/// from unfilled space are kept and stitched into contours.
pub struct Clipper {
    t_edge: TEdge,
    out_rec: OutRec,
    max_split_passes: usize,
    fill_types: [PolyFillType; 2],
    clip_type: ClipType,
}

impl Default for Clipper {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipper {
    pub fn new() -> Self {
        Self {
            t_edge: TEdge::new(),
            out_rec: OutRec::new(),
            max_split_passes: MAX_SPLIT_PASSES,
            fill_types: [PolyFillType::NonZero; 2],
            clip_type: ClipType::Union,
        }
    }

    pub fn with_max_split_passes(mut self, max_split_passes: usize) -> Self {
        self.max_split_passes = max_split_passes.max(1);
        self
    }

    /// Adds a closed path. Returns `Ok(false)` when it has fewer than three
    /// distinct vertices and was skipped.
    pub fn add_path(&mut self, polygon: &[Point<i64>], poly_type: PolyType) -> Result<bool, GeometryError> {
        check_range(polygon)?;

        let path = strip_duplicates(polygon);

        if path.len() < 3 {
            trace!(point_count = path.len(), "skipping degenerate path");
            return Ok(false);
        }

        Ok(self.t_edge.create_path(&path, poly_type) != 0)
    }

    pub fn add_paths(&mut self, polygons: &[Vec<Point<i64>>], poly_type: PolyType) -> Result<bool, GeometryError> {
        let mut result = false;

        for polygon in polygons {
            if self.add_path(polygon, poly_type)? {
                result = true;
            }
        }

        Ok(result)
    }

    /// Runs `clip_type` with the same fill rule for both operands. Contours
    /// are appended to `solution`; outer contours are counter-clockwise and
    /// holes clockwise.
    pub fn execute(
        &mut self,
        clip_type: ClipType,
        solution: &mut Vec<Vec<Point<i64>>>,
        fill_type: PolyFillType,
    ) -> Result<(), GeometryError> {
        self.execute_with_fills(clip_type, solution, fill_type, fill_type)
    }

    pub fn execute_with_fills(
        &mut self,
        clip_type: ClipType,
        solution: &mut Vec<Vec<Point<i64>>>,
        subject_fill_type: PolyFillType,
        clip_fill_type: PolyFillType,
    ) -> Result<(), GeometryError> {
        self.clip_type = clip_type;
        self.fill_types = [subject_fill_type, clip_fill_type];

        let result = self.execute_internal(solution);

        self.out_rec.dispose();

        result
    }

    fn execute_internal(&mut self, solution: &mut Vec<Vec<Point<i64>>>) -> Result<(), GeometryError> {
        let t_edge = self.prepare_edges()?;

        if t_edge.is_empty() {
            return Ok(());
        }

        self.sweep(&t_edge)?;

        let mut contours = Vec::new();
        self.out_rec.build_result(&mut contours);

        debug!(
            clip_type = ?self.clip_type,
            edges = t_edge.len(),
            output_edges = self.out_rec.len(),
            contours = contours.len(),
            "clipper executed"
        );

        solution.try_reserve(contours.len())?;
        solution.extend(contours);

        Ok(())
    }

    /// Copies the input edges and splits them until no two edges cross or
    /// overlap. Splitting rounds crossing points to the grid, which may
    /// create new crossings, hence the repeated passes.
    fn prepare_edges(&self) -> Result<TEdge, GeometryError> {
        let mut t_edge = self.t_edge.clone();
        t_edge.coalesce()?;

        for pass in 0..self.max_split_passes {
            let intersections = IntersectNode::build(&t_edge);

            if intersections.is_empty() {
                return Ok(t_edge);
            }

            trace!(pass, splits = intersections.len(), "splitting edges");

            t_edge = intersections.apply(&t_edge);
            t_edge.coalesce()?;
        }

        if !IntersectNode::build(&t_edge).is_empty() {
            warn!(
                passes = self.max_split_passes,
                "edges still intersect after the last split pass"
            );
        }

        Ok(t_edge)
    }

    #[inline(always)]
    fn contains(&self, wind: &WindDelta) -> bool {
        self.clip_type.contains(
            self.fill_types[PolyType::Subject.index()].is_filled(wind[0]),
            self.fill_types[PolyType::Clip.index()].is_filled(wind[1]),
        )
    }

    fn sweep(&mut self, t_edge: &TEdge) -> Result<(), GeometryError> {
        let mut scanbeam = Scanbeam::from_edges(t_edge);
        let mut minima = LocalMinima::from_edges(t_edge, false);
        let mut horizontals = LocalMinima::from_edges(t_edge, true);
        let mut active: Vec<usize> = Vec::new();

        while let Some(y) = scanbeam.pop() {
            let mut row_horizontals = Vec::new();

            while horizontals.min_y() == Some(y) {
                if let Some(edge_index) = horizontals.pop() {
                    row_horizontals.push(edge_index);
                }
            }

            let south: Vec<WindDelta> = row_horizontals
                .iter()
                .map(|&edge_index| winding_left_of(t_edge, &active, edge_index, y))
                .collect::<Result<_, _>>()?;

            active.retain(|&edge_index| t_edge.top(edge_index).y != y);

            while minima.min_y() == Some(y) {
                if let Some(edge_index) = minima.pop() {
                    active.push(edge_index);
                }
            }

            for (&edge_index, south) in row_horizontals.iter().zip(south.iter()) {
                let north = winding_left_of(t_edge, &active, edge_index, y)?;
                self.process_horizontal(t_edge, edge_index, south, &north);
            }

            let Some(next_y) = scanbeam.peek() else {
                break;
            };

            // no two active edges meet strictly between `y` and `next_y`
            let mid_y2 = y + next_y;
            active.sort_by(|&lhs, &rhs| t_edge.compare_at(lhs, rhs, mid_y2));

            self.process_row(t_edge, &active, y)?;
        }

        Ok(())
    }

    /// Walks the active edges west to east and emits the new ones that
    /// separate filled from unfilled space.
    fn process_row(&mut self, t_edge: &TEdge, active: &[usize], y: i64) -> Result<(), GeometryError> {
        let mut wind: WindDelta = [0, 0];

        for &edge_index in active {
            let west = wind;
            let delta = t_edge.wind_delta(edge_index);

            for k in 0..2 {
                wind[k] = wind[k]
                    .checked_sub(delta[k])
                    .ok_or(GeometryError::WindingOverflow)?;
            }

            if t_edge.bot(edge_index).y != y {
                continue;
            }

            let is_inside_west = self.contains(&west);

            if is_inside_west != self.contains(&wind) {
                self.out_rec
                    .add_edge(t_edge.bot(edge_index), t_edge.top(edge_index), is_inside_west);
            }
        }

        Ok(())
    }

    /// A horizontal edge is kept when the filling differs just south and
    /// just north of it; the filled side ends up on its left.
    fn process_horizontal(&mut self, t_edge: &TEdge, edge_index: usize, south: &WindDelta, north: &WindDelta) {
        let is_inside_north = self.contains(north);

        if is_inside_north != self.contains(south) {
            self.out_rec
                .add_edge(t_edge.bot(edge_index), t_edge.top(edge_index), is_inside_north);
        }
    }
}

/// Winding numbers at the midpoint of horizontal edge `horizontal_index`,
/// counted over the active non-horizontal edges lying west of it.
fn winding_left_of(
    t_edge: &TEdge,
    active: &[usize],
    horizontal_index: usize,
    y: i64,
) -> Result<WindDelta, GeometryError> {
    let mid_x2 = t_edge.bot(horizontal_index).x + t_edge.top(horizontal_index).x;
    let mut wind: WindDelta = [0, 0];

    for &edge_index in active {
        if !t_edge.is_left_of(edge_index, y, mid_x2) {
            continue;
        }

        let delta = t_edge.wind_delta(edge_index);

        for k in 0..2 {
            wind[k] = wind[k]
                .checked_sub(delta[k])
                .ok_or(GeometryError::WindingOverflow)?;
        }
    }

    Ok(wind)
}
