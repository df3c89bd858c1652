use layout_geometry::geometry::polygon::total_area;
use layout_geometry::{boolean, slice, ErrorCode, GeometryError, Operation, Point, Polygon};

const SCALE: f64 = 1000.0;

fn square(min: f64, max: f64) -> Polygon {
    Polygon::rectangle(Point::new(min, min), Point::new(max, max))
}

#[test]
fn square_cut_in_half() {
    let bins = slice(&square(0.0, 10.0), &[5.0], true, SCALE).unwrap();

    assert_eq!(bins.len(), 2);
    for bin in bins.iter() {
        assert_eq!(bin.len(), 1);
        assert!((total_area(bin) - 50.0).abs() < 1e-9);
    }

    let bounds = bins[0][0].bounds().unwrap();
    assert_eq!(bounds.max_x(), 5.0);
}

#[test]
fn bins_partition_the_polygon() {
    let shape = Polygon::from_coords(&[
        [0.0, 0.0],
        [12.0, 1.0],
        [9.5, 6.0],
        [14.0, 11.0],
        [2.0, 9.0],
        [4.0, 5.0],
    ]);
    let positions = [1.5, 4.0, 8.25, 13.0];
    let bins = slice(&shape, &positions, false, SCALE).unwrap();

    assert_eq!(bins.len(), positions.len() + 1);

    let sum: f64 = bins.iter().map(|bin| total_area(bin)).sum();
    assert!((sum - shape.area()).abs() < 0.05);

    for i in 0..bins.len() {
        for j in (i + 1)..bins.len() {
            let mut overlap = Vec::new();
            boolean(&bins[i], &bins[j], Operation::And, SCALE, &mut overlap).unwrap();
            assert!(total_area(&overlap).abs() < 1e-6);
        }
    }
}

#[test]
fn concave_polygon_yields_several_pieces() {
    // U shape opening upwards
    let u_shape = Polygon::from_coords(&[
        [0.0, 0.0],
        [9.0, 0.0],
        [9.0, 9.0],
        [6.0, 9.0],
        [6.0, 3.0],
        [3.0, 3.0],
        [3.0, 9.0],
        [0.0, 9.0],
    ]);
    let bins = slice(&u_shape, &[3.0], false, SCALE).unwrap();

    assert_eq!(bins[0].len(), 1);
    assert_eq!(bins[1].len(), 2);
    assert!((total_area(&bins[1]) - 36.0).abs() < 1e-9);
}

#[test]
fn no_positions_returns_whole_polygon() {
    let bins = slice(&square(0.0, 2.0), &[], true, SCALE).unwrap();

    assert_eq!(bins.len(), 1);
    assert!((total_area(&bins[0]) - 4.0).abs() < 1e-9);
}

#[test]
fn rejects_unordered_positions() {
    let error = slice(&square(0.0, 10.0), &[2.0, 7.0, 7.0], true, SCALE).unwrap_err();

    assert_eq!(error, GeometryError::UnorderedPositions { index: 2 });
    assert_eq!(error.code(), ErrorCode::InvalidGeometry);
    assert!(slice(&square(0.0, 10.0), &[f64::INFINITY], true, SCALE).is_err());
}

#[test]
fn distant_cuts_do_not_overflow() {
    let bins = slice(&square(0.0, 10.0), &[-1e300, 5.0, 1e300], true, SCALE).unwrap();

    assert_eq!(bins.len(), 4);
    assert!(bins[0].is_empty());
    assert!(bins[3].is_empty());
    assert!((total_area(&bins[1]) - 50.0).abs() < 1e-9);
    assert!((total_area(&bins[2]) - 50.0).abs() < 1e-9);
}
