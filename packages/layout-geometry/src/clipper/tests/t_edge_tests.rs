use crate::clipper::enums::PolyType;
use crate::clipper::t_edge::TEdge;
use crate::geometry::point::Point;
use std::cmp::Ordering;

fn square(min: i64, max: i64) -> Vec<Point<i64>> {
    vec![
        Point::new(min, min),
        Point::new(max, min),
        Point::new(max, max),
        Point::new(min, max),
    ]
}

#[test]
fn push_normalises_direction() {
    let mut t_edge = TEdge::new();

    assert!(t_edge.push(Point::new(5, 10), Point::new(0, 0), [1, 0]));
    assert_eq!(*t_edge.bot(0), Point::new(0, 0));
    assert_eq!(*t_edge.top(0), Point::new(5, 10));
    assert_eq!(*t_edge.wind_delta(0), [-1, 0]);

    // same row: west to east
    assert!(t_edge.push(Point::new(4, 3), Point::new(1, 3), [0, 1]));
    assert_eq!(*t_edge.bot(1), Point::new(1, 3));
    assert_eq!(*t_edge.wind_delta(1), [0, -1]);
    assert!(t_edge.is_horizontal(1));
}

#[test]
fn push_skips_zero_length() {
    let mut t_edge = TEdge::new();

    assert!(!t_edge.push(Point::new(2, 2), Point::new(2, 2), [1, 0]));
    assert!(t_edge.is_empty());
}

#[test]
fn create_path_tags_operand() {
    let mut t_edge = TEdge::new();

    assert_eq!(t_edge.create_path(&square(0, 10), PolyType::Clip), 4);

    for index in 0..t_edge.len() {
        assert_eq!(t_edge.wind_delta(index)[0], 0);
        assert_ne!(t_edge.wind_delta(index)[1], 0);
    }
}

#[test]
fn coalesce_cancels_shared_edges() {
    let mut t_edge = TEdge::new();
    let left = vec![
        Point::new(0, 0),
        Point::new(10, 0),
        Point::new(10, 10),
        Point::new(0, 10),
    ];
    let neighbour = vec![
        Point::new(10, 0),
        Point::new(20, 0),
        Point::new(20, 10),
        Point::new(10, 10),
    ];

    t_edge.create_path(&left, PolyType::Subject);
    t_edge.create_path(&neighbour, PolyType::Subject);
    t_edge.coalesce().unwrap();

    assert_eq!(t_edge.len(), 6);
    for index in 0..t_edge.len() {
        assert!(!(t_edge.bot(index).x == 10 && t_edge.top(index).x == 10));
    }
}

#[test]
fn coalesce_sums_same_direction() {
    let mut t_edge = TEdge::new();

    t_edge.create_path(&square(0, 10), PolyType::Subject);
    t_edge.create_path(&square(0, 10), PolyType::Subject);
    t_edge.create_path(&square(0, 10), PolyType::Clip);
    t_edge.coalesce().unwrap();

    assert_eq!(t_edge.len(), 4);
    for index in 0..t_edge.len() {
        let wind = t_edge.wind_delta(index);
        assert_eq!(wind[0].abs(), 2);
        assert_eq!(wind[1].abs(), 1);
    }
}

#[test]
fn compare_at_orders_by_exact_x() {
    let mut t_edge = TEdge::new();

    t_edge.push(Point::new(0, 0), Point::new(10, 10), [1, 0]);
    t_edge.push(Point::new(10, 0), Point::new(0, 10), [1, 0]);

    // they cross at y = 5
    assert_eq!(t_edge.compare_at(0, 1, 2), Ordering::Less);
    assert_eq!(t_edge.compare_at(0, 1, 10), Ordering::Equal);
    assert_eq!(t_edge.compare_at(0, 1, 18), Ordering::Greater);
}

#[test]
fn is_left_of_uses_doubled_x() {
    let mut t_edge = TEdge::new();

    t_edge.push(Point::new(0, 0), Point::new(4, 8), [1, 0]);

    // x at y = 4 is 2
    assert!(t_edge.is_left_of(0, 4, 5));
    assert!(!t_edge.is_left_of(0, 4, 4));
    assert!(!t_edge.is_left_of(0, 4, 3));
}
