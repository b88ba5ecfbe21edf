//! The `path` module traces the outline of a rectangle with independently rounded corners.
//!
//! The outline always has the same nine segments: a move to the end of the top-left
//! corner, then a line and a quarter arc for each side, walking clockwise. Radii are
//! clamped against the size before anything is traced.
//!
//! ```rust
//! use rounded_corners::{rounded_rect_path, CornerRadius, CornerSet, PathSegment};
//!
//! let path = rounded_rect_path(&CornerRadius::uniform(8.0, CornerSet::TOP), (100.0, 40.0));
//!
//! assert_eq!(path.segments().len(), 9);
//! assert!(matches!(path.segments()[0], PathSegment::MoveTo(p) if p.x == 8.0 && p.y == 0.0));
//! assert_eq!(path.start_point(), path.end_point());
//!
//! // A closed lyon path, ready to fill or stroke
//! let lyon_path = path.to_path();
//! assert!(lyon_path.iter().count() > 0);
//! ```

use crate::corner_radius::CornerRadius;
use lyon::geom::Arc;
use lyon::math::{point, vector, Angle, Point, Size, Vector};
use smallvec::SmallVec;

/// Receives the drawing operations of a traced outline.
///
/// This is the seam to whatever builds the final geometry. Zero-radius arcs are never
/// passed to [`PathSink::arc_to`].
pub trait PathSink {
    fn move_to(&mut self, to: Point);
    fn line_to(&mut self, to: Point);
    /// Adds `arc`. The current point is the arc's start point.
    fn arc_to(&mut self, arc: &CornerArc);
    fn close_path(&mut self);
}

impl PathSink for lyon::path::Builder {
    fn move_to(&mut self, to: Point) {
        self.begin(to);
    }

    fn line_to(&mut self, to: Point) {
        lyon::path::Builder::line_to(self, to);
    }

    fn arc_to(&mut self, arc: &CornerArc) {
        arc.to_arc().for_each_quadratic_bezier(&mut |segment| {
            self.quadratic_bezier_to(segment.ctrl, segment.to);
        });
    }

    fn close_path(&mut self) {
        self.close();
    }
}

/// A clockwise quarter circle around one corner.
///
/// Angles are measured from the top of the rectangle and grow clockwise, so `0°`
/// points up, `90°` right, `180°` down and `270°` left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerArc {
    pub center: Point,
    pub radius: f32,
    pub start_angle: Angle,
    pub end_angle: Angle,
}

impl CornerArc {
    fn quarter(center: Point, radius: f32, start_degrees: f32) -> Self {
        Self {
            center,
            radius,
            start_angle: Angle::degrees(start_degrees),
            end_angle: Angle::degrees(start_degrees + 90.0),
        }
    }

    /// Clockwise sweep from start to end.
    #[inline]
    pub fn sweep(&self) -> Angle {
        self.end_angle - self.start_angle
    }

    /// A zero radius arc collapses onto its center.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.radius <= 0.0
    }

    /// Point on the circle at `angle`, measured from the top and clockwise.
    pub fn point_at(&self, angle: Angle) -> Point {
        self.center + direction(angle) * self.radius
    }

    pub fn start_point(&self) -> Point {
        self.point_at(self.start_angle)
    }

    pub fn end_point(&self) -> Point {
        self.point_at(self.end_angle)
    }

    /// Converts to a lyon arc, whose angles start on the x axis.
    pub fn to_arc(&self) -> Arc<f32> {
        let quarter_turn = Angle::frac_pi_2();
        Arc {
            center: self.center,
            radii: vector(self.radius, self.radius),
            start_angle: self.start_angle - quarter_turn,
            sweep_angle: self.sweep(),
            x_rotation: Angle::zero(),
        }
    }
}

/// Unit vector for a top-based clockwise angle.
///
/// Multiples of 90° map to exact axis vectors so arc endpoints land exactly on the
/// neighbouring line endpoints.
fn direction(angle: Angle) -> Vector {
    let quarters = angle.to_degrees() / 90.0;
    let nearest = quarters.round();
    if (quarters - nearest).abs() < 1e-4 {
        return match (nearest as i32).rem_euclid(4) {
            0 => vector(0.0, -1.0),
            1 => vector(1.0, 0.0),
            2 => vector(0.0, 1.0),
            _ => vector(-1.0, 0.0),
        };
    }
    let (sin, cos) = angle.sin_cos();
    vector(sin, -cos)
}

/// One drawing operation of a rounded rectangle outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    Arc(CornerArc),
}

impl PathSegment {
    /// Point the pen rests on after this segment.
    pub fn end_point(&self) -> Point {
        match self {
            PathSegment::MoveTo(to) | PathSegment::LineTo(to) => *to,
            PathSegment::Arc(arc) if arc.is_degenerate() => arc.center,
            PathSegment::Arc(arc) => arc.end_point(),
        }
    }
}

/// The outline of a rounded rectangle placed at the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectPath {
    size: Size,
    radii: CornerRadius,
    segments: SmallVec<[PathSegment; 9]>,
}

/// Traces a `size` rectangle at the origin with the corners rounded by `radius`.
///
/// Each radius is first clamped to `min(radius, width / 2, height / 2)`.
pub fn rounded_rect_path(radius: &CornerRadius, size: impl Into<Size>) -> RoundedRectPath {
    let size = size.into();
    let radii = radius.clamped(size);
    let (width, height) = (size.width, size.height);

    let CornerRadius {
        top_left,
        top_right,
        bottom_left,
        bottom_right,
    } = radii;

    let mut segments = SmallVec::new();
    segments.push(PathSegment::MoveTo(point(top_left, 0.0)));
    segments.push(PathSegment::LineTo(point(width - top_right, 0.0)));
    segments.push(PathSegment::Arc(CornerArc::quarter(
        point(width - top_right, top_right),
        top_right,
        0.0,
    )));
    segments.push(PathSegment::LineTo(point(width, height - bottom_right)));
    segments.push(PathSegment::Arc(CornerArc::quarter(
        point(width - bottom_right, height - bottom_right),
        bottom_right,
        90.0,
    )));
    segments.push(PathSegment::LineTo(point(bottom_left, height)));
    segments.push(PathSegment::Arc(CornerArc::quarter(
        point(bottom_left, height - bottom_left),
        bottom_left,
        180.0,
    )));
    segments.push(PathSegment::LineTo(point(0.0, top_left)));
    segments.push(PathSegment::Arc(CornerArc::quarter(
        point(top_left, top_left),
        top_left,
        270.0,
    )));

    RoundedRectPath {
        size,
        radii,
        segments,
    }
}

impl RoundedRectPath {
    pub fn size(&self) -> Size {
        self.size
    }

    /// Radii after clamping against the size.
    pub fn effective_radii(&self) -> CornerRadius {
        self.radii
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn start_point(&self) -> Point {
        self.segments[0].end_point()
    }

    pub fn end_point(&self) -> Point {
        self.segments[self.segments.len() - 1].end_point()
    }

    /// Feeds the outline into `sink` and closes it.
    ///
    /// Degenerate arcs and zero-length lines are skipped.
    pub fn trace<S: PathSink + ?Sized>(&self, sink: &mut S) {
        let mut current = self.start_point();
        for segment in &self.segments {
            match segment {
                PathSegment::MoveTo(to) => sink.move_to(*to),
                PathSegment::LineTo(to) if *to == current => {}
                PathSegment::LineTo(to) => sink.line_to(*to),
                PathSegment::Arc(arc) if arc.is_degenerate() => {}
                PathSegment::Arc(arc) => sink.arc_to(arc),
            }
            current = segment.end_point();
        }
        sink.close_path();
    }

    /// Builds a closed lyon path, with arcs approximated by quadratic Béziers.
    pub fn to_path(&self) -> lyon::path::Path {
        let mut builder = lyon::path::Path::builder();
        self.trace(&mut builder);
        builder.build()
    }
}
