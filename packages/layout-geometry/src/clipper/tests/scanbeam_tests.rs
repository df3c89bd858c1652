use crate::clipper::scanbeam::Scanbeam;
use crate::clipper::t_edge::TEdge;
use crate::geometry::point::Point;

#[test]
fn collects_every_edge_row() {
    let mut t_edge = TEdge::new();

    t_edge.push(Point::new(0, 0), Point::new(0, 7), [1, 0]);
    t_edge.push(Point::new(0, 7), Point::new(3, 3), [1, 0]);
    t_edge.push(Point::new(3, 3), Point::new(9, 3), [1, 0]);

    let mut scanbeam = Scanbeam::from_edges(&t_edge);

    assert_eq!(scanbeam.peek(), Some(0));
    assert_eq!(scanbeam.pop(), Some(0));
    assert_eq!(scanbeam.pop(), Some(3));
    assert_eq!(scanbeam.pop(), Some(7));
    assert_eq!(scanbeam.pop(), None);
    assert_eq!(scanbeam.peek(), None);
}

#[test]
fn shared_rows_pop_once_in_ascending_order() {
    let mut t_edge = TEdge::new();

    t_edge.push(Point::new(0, -2), Point::new(4, 5), [1, 0]);
    t_edge.push(Point::new(4, 5), Point::new(1, 9), [1, 0]);
    t_edge.push(Point::new(1, 0), Point::new(6, 9), [0, 1]);

    let mut scanbeam = Scanbeam::from_edges(&t_edge);
    let mut pop_results = Vec::new();

    while let Some(y) = scanbeam.pop() {
        pop_results.push(y);
    }

    assert_eq!(pop_results, vec![-2, 0, 5, 9]);
}
