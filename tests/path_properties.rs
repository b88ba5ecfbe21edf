use rounded_corners::lyon::math::Point;
use rounded_corners::lyon::path::PathEvent;
use rounded_corners::{rounded_rect_path, Corner, CornerRadius, CornerSet, PathSegment};

const SETS: [CornerSet; 8] = [
    CornerSet::TOP,
    CornerSet::BOTTOM,
    CornerSet::LEFT,
    CornerSet::RIGHT,
    CornerSet::MAIN_DIAGONAL,
    CornerSet::SECONDARY_DIAGONAL,
    CornerSet::ALL,
    CornerSet::NONE,
];

const SIZES: [(f32, f32); 5] = [(0.0, 0.0), (40.0, 60.0), (60.0, 40.0), (1.0, 300.0), (17.5, 17.5)];

const RADII: [f32; 6] = [0.0, 0.5, 5.0, 20.0, 100.0, 1e6];

fn arcs(segments: &[PathSegment]) -> Vec<f32> {
    segments
        .iter()
        .filter_map(|segment| match segment {
            PathSegment::Arc(arc) => Some(arc.radius),
            _ => None,
        })
        .collect()
}

#[test]
fn effective_radius_is_min_of_radius_and_half_extents() {
    for (width, height) in SIZES {
        for radius in RADII {
            for set in SETS {
                let path = rounded_rect_path(&CornerRadius::uniform(radius, set), (width, height));
                let effective = path.effective_radii();
                for corner in Corner::ALL {
                    let requested = if set.contains_corner(corner) { radius } else { 0.0 };
                    let expected = requested.min(width / 2.0).min(height / 2.0);
                    assert_eq!(effective.get(corner), expected, "{radius} on {width}x{height} {corner:?}");
                }
            }
        }
    }
}

#[test]
fn radius_100_on_40_by_60_clamps_to_20() {
    let path = rounded_rect_path(&CornerRadius::all(100.0), (40.0, 60.0));
    assert_eq!(arcs(path.segments()), vec![20.0; 4]);
}

#[test]
fn path_is_closed_for_all_inputs() {
    for (width, height) in SIZES {
        for radius in RADII {
            for set in SETS {
                let path = rounded_rect_path(&CornerRadius::uniform(radius, set), (width, height));
                assert_eq!(path.start_point(), path.end_point(), "{radius} {set:?} {width}x{height}");
            }
        }
    }
}

#[test]
fn zero_radii_give_a_sharp_rectangle() {
    let path = rounded_rect_path(&CornerRadius::default(), (30.0, 20.0)).to_path();

    let mut points: Vec<Point> = Vec::new();
    for event in path.iter() {
        match event {
            PathEvent::Begin { at } => points.push(at),
            PathEvent::Line { to, .. } => points.push(to),
            PathEvent::End { close, .. } => assert!(close),
            other => panic!("unexpected curve {other:?}"),
        }
    }

    assert_eq!(
        points,
        vec![
            Point::new(0.0, 0.0),
            Point::new(30.0, 0.0),
            Point::new(30.0, 20.0),
            Point::new(0.0, 20.0),
            Point::new(0.0, 0.0),
        ]
    );
}

#[test]
fn half_side_radius_on_square_is_an_inscribed_circle() {
    let side = 50.0;
    let path = rounded_rect_path(&CornerRadius::uniform(side / 2.0, CornerSet::ALL), (side, side));

    for segment in path.segments() {
        match segment {
            PathSegment::Arc(arc) => {
                assert_eq!(arc.center, Point::new(25.0, 25.0));
                assert_eq!(arc.radius, 25.0);
            }
            PathSegment::MoveTo(to) | PathSegment::LineTo(to) => {
                // Straight runs collapse to single points on the circle
                assert!(((*to - Point::new(25.0, 25.0)).length() - 25.0).abs() < 1e-4);
            }
        }
    }

    // Every flattened point lies on the circle
    for event in path.to_path().iter() {
        if let PathEvent::Quadratic { to, .. } = event {
            assert!(((to - Point::new(25.0, 25.0)).length() - 25.0).abs() < 1e-3);
        }
    }
}

#[test]
fn independent_clamp_allows_overlapping_neighbours() {
    // Both top corners take the full half height; their arcs meet in the middle
    let path = rounded_rect_path(&CornerRadius::uniform(30.0, CornerSet::TOP), (40.0, 100.0));
    let radii = path.effective_radii();

    assert_eq!(radii.top_left, 20.0);
    assert_eq!(radii.top_right, 20.0);
    assert_eq!(path.segments()[1], PathSegment::LineTo(Point::new(20.0, 0.0)));
}

#[test]
fn building_is_deterministic() {
    let radius = CornerRadius::new(3.0, 8.0, 13.0, 21.0);
    let first = rounded_rect_path(&radius, (90.0, 70.0));
    let second = rounded_rect_path(&radius, (90.0, 70.0));

    assert_eq!(first, second);
    assert_eq!(
        first.to_path().iter().collect::<Vec<_>>(),
        second.to_path().iter().collect::<Vec<_>>()
    );
}
