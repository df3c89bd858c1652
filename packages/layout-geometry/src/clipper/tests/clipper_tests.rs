use crate::clipper::clipper::Clipper;
use crate::clipper::constants::HI_RANGE;
use crate::clipper::enums::{ClipType, PolyFillType, PolyType};
use crate::clipper::utils::get_area;
use crate::error::GeometryError;
use crate::geometry::point::Point;
use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
struct PointData {
    x: i64,
    y: i64,
}

#[derive(Debug, Deserialize)]
struct TestInput {
    #[serde(rename = "subjectPolygons")]
    subject_polygons: Vec<Vec<PointData>>,
    #[serde(rename = "clipPolygons")]
    clip_polygons: Vec<Vec<PointData>>,
    #[serde(rename = "clipType")]
    clip_type: u8,
    #[serde(rename = "fillType")]
    fill_type: u8,
}

#[derive(Debug, Deserialize)]
struct TestCase {
    id: String,
    input: TestInput,
    output: Vec<Vec<PointData>>,
}

#[derive(Debug, Deserialize)]
struct TestSuite {
    id: String,
    data: Vec<TestCase>,
}

#[derive(Debug, Deserialize)]
struct TestDataStructure {
    suites: Vec<TestSuite>,
}

fn load_test_data() -> TestDataStructure {
    let json_path = concat!(env!("CARGO_MANIFEST_DIR"), "/src/clipper/__data__/clipper.json");
    let json_content = fs::read_to_string(json_path).expect("Failed to read clipper test data file");
    serde_json::from_str(&json_content).expect("Failed to parse clipper test data")
}

fn num_to_clip_type(num: u8) -> ClipType {
    match num {
        0 => ClipType::Intersection,
        1 => ClipType::Union,
        2 => ClipType::Difference,
        3 => ClipType::Xor,
        _ => panic!("Invalid ClipType: {}", num),
    }
}

fn num_to_poly_fill_type(num: u8) -> PolyFillType {
    match num {
        0 => PolyFillType::EvenOdd,
        1 => PolyFillType::NonZero,
        2 => PolyFillType::Positive,
        3 => PolyFillType::Negative,
        _ => panic!("Invalid PolyFillType: {}", num),
    }
}

fn create_polygon(points: &[PointData]) -> Vec<Point<i64>> {
    points.iter().map(|p| Point::new(p.x, p.y)).collect()
}

fn square(min: i64, max: i64) -> Vec<Point<i64>> {
    vec![
        Point::new(min, min),
        Point::new(max, min),
        Point::new(max, max),
        Point::new(min, max),
    ]
}

fn execute_clipper_operation(input: &TestInput) -> Vec<Vec<Point<i64>>> {
    let mut clipper = Clipper::new();

    for polygon_data in input.subject_polygons.iter() {
        clipper
            .add_path(&create_polygon(polygon_data), PolyType::Subject)
            .expect("subject path rejected");
    }

    for polygon_data in input.clip_polygons.iter() {
        clipper
            .add_path(&create_polygon(polygon_data), PolyType::Clip)
            .expect("clip path rejected");
    }

    let mut solution = Vec::new();

    clipper
        .execute(
            num_to_clip_type(input.clip_type),
            &mut solution,
            num_to_poly_fill_type(input.fill_type),
        )
        .expect("Clipper execution failed");

    solution
}

/// Matches every expected contour with an actual one, allowing any start vertex
/// but not a reversed orientation.
fn compare_polygons(actual: &[Vec<Point<i64>>], expected: &[Vec<PointData>]) -> bool {
    if actual.len() != expected.len() {
        eprintln!(
            "Different polygon count: actual={}, expected={}",
            actual.len(),
            expected.len()
        );
        return false;
    }

    let mut matched = vec![false; actual.len()];

    for expected_poly in expected {
        let expected_poly = create_polygon(expected_poly);
        let len = expected_poly.len();
        let found = actual.iter().enumerate().position(|(act_idx, actual_poly)| {
            !matched[act_idx]
                && actual_poly.len() == len
                && (0..len).any(|offset| (0..len).all(|j| actual_poly[(j + offset) % len] == expected_poly[j]))
        });

        match found {
            Some(act_idx) => matched[act_idx] = true,
            None => {
                eprintln!("No match for expected polygon {:?}", expected_poly);
                return false;
            }
        }
    }

    true
}

#[test]
fn clipper_fixture_cases() {
    let test_data = load_test_data();

    for suite in test_data.suites.iter() {
        for case in suite.data.iter() {
            let solution = execute_clipper_operation(&case.input);

            assert!(
                compare_polygons(&solution, &case.output),
                "{} / {}: got {:?}",
                suite.id,
                case.id,
                solution
            );
        }
    }
}

#[test]
fn outer_contours_are_counter_clockwise() {
    let mut clipper = Clipper::new();
    let mut solution = Vec::new();

    clipper.add_path(&square(0, 100), PolyType::Subject).unwrap();
    clipper.add_path(&square(30, 60), PolyType::Clip).unwrap();
    clipper
        .execute(ClipType::Difference, &mut solution, PolyFillType::NonZero)
        .unwrap();

    let mut areas: Vec<f64> = solution.iter().map(|path| get_area(path)).collect();
    areas.sort_by(f64::total_cmp);

    assert_eq!(areas, vec![-900.0, 10000.0]);
}

#[test]
fn degenerate_paths_are_skipped() {
    let mut clipper = Clipper::new();
    let line = vec![Point::new(0, 0), Point::new(5, 5), Point::new(0, 0)];

    assert_eq!(clipper.add_path(&line, PolyType::Subject), Ok(false));
    assert_eq!(clipper.add_path(&square(0, 1), PolyType::Subject), Ok(true));
}

#[test]
fn out_of_range_coordinates_are_rejected() {
    let mut clipper = Clipper::new();
    let path = vec![
        Point::new(0, 0),
        Point::new(HI_RANGE + 1, 0),
        Point::new(0, 10),
    ];

    assert!(matches!(
        clipper.add_path(&path, PolyType::Subject),
        Err(GeometryError::CoordinateOverflow { .. })
    ));
}

#[test]
fn extreme_coordinates_stay_exact() {
    let mut clipper = Clipper::new();
    let mut solution = Vec::new();

    clipper.add_path(&square(-HI_RANGE, HI_RANGE), PolyType::Subject).unwrap();
    clipper.add_path(&square(0, HI_RANGE), PolyType::Clip).unwrap();
    clipper
        .execute(ClipType::Intersection, &mut solution, PolyFillType::NonZero)
        .unwrap();

    assert_eq!(solution.len(), 1);

    let mut vertices = solution[0].clone();
    let mut expected = square(0, HI_RANGE);
    vertices.sort_by_key(|p| (p.y, p.x));
    expected.sort_by_key(|p| (p.y, p.x));

    assert_eq!(vertices, expected);
}

#[test]
fn per_operand_fill_types() {
    let mut clipper = Clipper::new();
    let mut solution = Vec::new();
    let mut reversed = square(0, 10);
    reversed.reverse();

    // clockwise clip has winding -1 and is empty under Positive
    clipper.add_path(&square(0, 10), PolyType::Subject).unwrap();
    clipper.add_path(&reversed, PolyType::Clip).unwrap();
    clipper
        .execute_with_fills(
            ClipType::Intersection,
            &mut solution,
            PolyFillType::NonZero,
            PolyFillType::Positive,
        )
        .unwrap();

    assert!(solution.is_empty());

    clipper
        .execute_with_fills(
            ClipType::Intersection,
            &mut solution,
            PolyFillType::NonZero,
            PolyFillType::Negative,
        )
        .unwrap();

    assert_eq!(solution.len(), 1);
    assert_eq!(get_area(&solution[0]), 100.0);
}

#[test]
fn execute_appends_and_can_rerun() {
    let mut clipper = Clipper::new();
    let mut solution = vec![square(50, 60)];

    clipper.add_path(&square(0, 10), PolyType::Subject).unwrap();
    clipper
        .execute(ClipType::Union, &mut solution, PolyFillType::NonZero)
        .unwrap();
    clipper
        .execute(ClipType::Union, &mut solution, PolyFillType::NonZero)
        .unwrap();

    assert_eq!(solution.len(), 3);
    assert_eq!(solution[0], square(50, 60));
    assert_eq!(solution[1], solution[2]);
}

#[test]
fn crossing_near_grid_cells_still_closes() {
    let mut clipper = Clipper::new();
    let mut solution = Vec::new();
    let triangle_a = vec![Point::new(0, 0), Point::new(7, 3), Point::new(1, 5)];
    let triangle_b = vec![Point::new(0, 3), Point::new(6, 0), Point::new(5, 6)];

    clipper.add_path(&triangle_a, PolyType::Subject).unwrap();
    clipper.add_path(&triangle_b, PolyType::Clip).unwrap();
    clipper
        .execute(ClipType::Union, &mut solution, PolyFillType::NonZero)
        .unwrap();

    // 16 + 16.5 minus the hexagonal overlap of 9.852...
    let exact = 22.647_758;
    let total: f64 = solution.iter().map(|path| get_area(path)).sum();

    assert_eq!(solution.len(), 1);
    // six crossings are snapped to grid cells
    assert!((total - exact).abs() <= 2.0, "union area {}", total);
}

fn star(points: usize, step: usize, radius: f64) -> Vec<Point<i64>> {
    (0..points)
        .map(|i| {
            let angle = std::f64::consts::TAU * ((i * step) % points) as f64 / points as f64 + 0.1;
            Point::new((radius * angle.cos()).round() as i64, (radius * angle.sin()).round() as i64)
        })
        .collect()
}

#[test]
fn split_pass_limit_still_yields_closed_contours() {
    let mut clipper = Clipper::new().with_max_split_passes(1);
    let mut solution = Vec::new();

    clipper.add_path(&star(13, 5, 1000.0), PolyType::Subject).unwrap();
    clipper.add_path(&star(11, 4, 997.0), PolyType::Subject).unwrap();
    clipper
        .execute(ClipType::Union, &mut solution, PolyFillType::NonZero)
        .unwrap();

    assert!(!solution.is_empty());

    for path in solution.iter() {
        assert!(path.len() >= 3);
        assert_ne!(get_area(path), 0.0);
        assert!(path.iter().all(|p| p.x.abs() <= 1000 && p.y.abs() <= 1000));
    }

    assert!(solution.iter().map(|path| get_area(path)).sum::<f64>() > 0.0);
}
