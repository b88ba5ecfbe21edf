use crate::canvas::{Canvas, RenderError};
use crate::corner_radius::CornerRadius;
use crate::corner_set::CornerSet;
use crate::path::{rounded_rect_path, RoundedRectPath};
use crate::util::hash_f32;
use crate::{Color, Stroke};
use lyon::math::Size;
use std::hash::Hasher;
use tracing::trace;

/// A rectangle with independently rounded corners, filled and then outlined.
///
/// Every setter returns a modified copy; the value itself holds nothing but its
/// configuration and can be rendered any number of times.
///
/// Defaults:
///
/// - Stroke color: [`Color::BLACK`]
/// - Fill color: [`Color::TRANSPARENT`]
/// - Line width: `1`
/// - Corner radius: `0` on all corners
///
/// # Examples
///
/// ```rust
/// use rounded_corners::{Color, CornerSet, MeshCanvas, RoundedCorners};
///
/// let card = RoundedCorners::new(16.0, CornerSet::TOP)
///     .fill_color(Color::rgb(240, 240, 240))
///     .stroke_color(Color::rgb(90, 90, 90))
///     .line_width(2.0);
///
/// let mut canvas = MeshCanvas::default();
/// card.render((200.0, 120.0), &mut canvas)?;
/// # Ok::<(), rounded_corners::RenderError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedCorners {
    stroke_color: Color,
    fill_color: Color,
    line_width: f32,
    corner_radius: CornerRadius,
}

impl Default for RoundedCorners {
    fn default() -> Self {
        Self::new(0.0, CornerSet::ALL)
    }
}

impl RoundedCorners {
    /// Rounds every corner in `corners` by `radius`.
    pub fn new(radius: f32, corners: CornerSet) -> Self {
        Self {
            stroke_color: Color::BLACK,
            fill_color: Color::TRANSPARENT,
            line_width: 1.0,
            corner_radius: CornerRadius::uniform(radius, corners),
        }
    }

    pub fn stroke_color(mut self, stroke_color: Color) -> Self {
        self.stroke_color = stroke_color;
        self
    }

    pub fn fill_color(mut self, fill_color: Color) -> Self {
        self.fill_color = fill_color;
        self
    }

    pub fn line_width(mut self, line_width: f32) -> Self {
        self.line_width = line_width;
        self
    }

    /// Replaces all four radii.
    pub fn corner_radius(mut self, corner_radius: CornerRadius) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    /// Rounds every corner in `corners` by `radius`; the other corners become square.
    pub fn radius(mut self, radius: f32, corners: CornerSet) -> Self {
        self.corner_radius = CornerRadius::uniform(radius, corners);
        self
    }

    pub fn get_stroke_color(&self) -> Color {
        self.stroke_color
    }

    pub fn get_fill_color(&self) -> Color {
        self.fill_color
    }

    pub fn get_line_width(&self) -> f32 {
        self.line_width
    }

    pub fn get_corner_radius(&self) -> CornerRadius {
        self.corner_radius
    }

    /// Outline stroke made of the stroke color and line width.
    pub fn stroke(&self) -> Stroke {
        Stroke::new(self.line_width, self.stroke_color)
    }

    /// Outline of the shape laid out in `size`.
    pub fn path(&self, size: impl Into<Size>) -> RoundedRectPath {
        rounded_rect_path(&self.corner_radius, size)
    }

    /// Key identifying the filled outline at `size`, as passed to [`Canvas::fill_path`].
    ///
    /// Only the size and the clamped radii go into it, so shapes that differ in color,
    /// or whose radii clamp to the same values, share a key. The stroke key also
    /// mixes in the line width.
    pub fn cache_key(&self, size: impl Into<Size>) -> u64 {
        outline_key(&self.path(size), None)
    }

    /// Draws the shape into `canvas` at the origin, sized to `size`.
    ///
    /// The outline is built once, filled with the fill color, then stroked on top.
    /// A transparent fill or an empty stroke is not submitted.
    pub fn render<C: Canvas + ?Sized>(&self, size: impl Into<Size>, canvas: &mut C) -> Result<(), RenderError> {
        let outline = self.path(size);
        let path = outline.to_path();

        if self.fill_color.is_transparent() {
            trace!("skipping transparent fill");
        } else {
            canvas.fill_path(&path, self.fill_color, Some(outline_key(&outline, None)))?;
        }

        let stroke = self.stroke();
        if stroke.is_empty() {
            trace!(width = stroke.width, "skipping empty stroke");
        } else {
            canvas.stroke_path(&path, stroke, Some(outline_key(&outline, Some(stroke.width))))?;
        }

        Ok(())
    }
}

/// Hash of everything that shapes the tessellated geometry of `outline`.
fn outline_key(outline: &RoundedRectPath, line_width: Option<f32>) -> u64 {
    let mut hasher = ahash::AHasher::default();
    let size = outline.size();
    hash_f32(size.width, &mut hasher);
    hash_f32(size.height, &mut hasher);
    outline.effective_radii().hash_into(&mut hasher);
    if let Some(width) = line_width {
        hash_f32(width, &mut hasher);
    }
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyon::path::Path;

    #[derive(Debug, PartialEq)]
    enum Call {
        Fill(Color, Option<u64>),
        Stroke(Stroke, Option<u64>),
    }

    #[derive(Default)]
    struct RecordingCanvas {
        calls: Vec<Call>,
    }

    impl Canvas for RecordingCanvas {
        fn fill_path(&mut self, _path: &Path, color: Color, cache_key: Option<u64>) -> Result<(), RenderError> {
            self.calls.push(Call::Fill(color, cache_key));
            Ok(())
        }

        fn stroke_path(&mut self, _path: &Path, stroke: Stroke, cache_key: Option<u64>) -> Result<(), RenderError> {
            self.calls.push(Call::Stroke(stroke, cache_key));
            Ok(())
        }
    }

    #[test]
    fn defaults_match_documented_values() {
        let shape = RoundedCorners::default();
        assert_eq!(shape.get_stroke_color(), Color::BLACK);
        assert_eq!(shape.get_fill_color(), Color::TRANSPARENT);
        assert_eq!(shape.get_line_width(), 1.0);
        assert_eq!(shape.get_corner_radius(), CornerRadius::ZERO);
    }

    #[test]
    fn setters_return_modified_copies() {
        let base = RoundedCorners::new(4.0, CornerSet::ALL);
        let changed = base
            .stroke_color(Color::WHITE)
            .fill_color(Color::rgb(1, 2, 3))
            .line_width(3.0)
            .radius(6.0, CornerSet::RIGHT);

        assert_eq!(base.get_corner_radius(), CornerRadius::all(4.0));
        assert_eq!(changed.get_stroke_color(), Color::WHITE);
        assert_eq!(changed.get_fill_color(), Color::rgb(1, 2, 3));
        assert_eq!(changed.get_line_width(), 3.0);
        assert_eq!(changed.get_corner_radius(), CornerRadius::new(0.0, 6.0, 0.0, 6.0));

        let explicit = changed.corner_radius(CornerRadius::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(explicit.get_corner_radius(), CornerRadius::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn renders_fill_before_stroke() {
        let mut canvas = RecordingCanvas::default();
        RoundedCorners::new(5.0, CornerSet::ALL)
            .fill_color(Color::WHITE)
            .render((50.0, 30.0), &mut canvas)
            .unwrap();

        assert_eq!(canvas.calls.len(), 2);
        assert!(matches!(canvas.calls[0], Call::Fill(Color::WHITE, Some(_))));
        assert!(matches!(canvas.calls[1], Call::Stroke(stroke, Some(_)) if stroke == Stroke::default()));
    }

    #[test]
    fn transparent_fill_and_empty_stroke_are_skipped() {
        let mut canvas = RecordingCanvas::default();
        RoundedCorners::default().render((10.0, 10.0), &mut canvas).unwrap();
        assert_eq!(canvas.calls.len(), 1);
        assert!(matches!(canvas.calls[0], Call::Stroke(..)));

        let mut canvas = RecordingCanvas::default();
        RoundedCorners::default()
            .line_width(0.0)
            .render((10.0, 10.0), &mut canvas)
            .unwrap();
        assert!(canvas.calls.is_empty());
    }

    #[test]
    fn cache_keys_follow_geometry_not_color() {
        let keys = |shape: RoundedCorners, size: (f32, f32)| {
            let mut canvas = RecordingCanvas::default();
            shape.render(size, &mut canvas).unwrap();
            canvas.calls
        };

        let red = RoundedCorners::new(8.0, CornerSet::ALL).fill_color(Color::rgb(255, 0, 0));
        let blue = red.fill_color(Color::rgb(0, 0, 255)).stroke_color(Color::WHITE);

        let (red_calls, blue_calls) = (keys(red, (40.0, 40.0)), keys(blue, (40.0, 40.0)));
        let key_of = |call: &Call| match call {
            Call::Fill(_, key) | Call::Stroke(_, key) => *key,
        };
        assert_eq!(key_of(&red_calls[0]), key_of(&blue_calls[0]));
        assert_eq!(key_of(&red_calls[1]), key_of(&blue_calls[1]));
        assert_ne!(key_of(&red_calls[0]), key_of(&red_calls[1]));

        // Radii above the clamp limit collapse to the same outline
        let huge = red.radius(500.0, CornerSet::ALL);
        let limit = red.radius(20.0, CornerSet::ALL);
        assert_eq!(
            key_of(&keys(huge, (40.0, 40.0))[0]),
            key_of(&keys(limit, (40.0, 40.0))[0])
        );
        assert_ne!(
            key_of(&keys(red, (40.0, 41.0))[0]),
            key_of(&red_calls[0])
        );
    }

    #[test]
    fn public_cache_key_is_the_fill_key() {
        let shape = RoundedCorners::new(6.0, CornerSet::TOP).fill_color(Color::WHITE);
        let mut canvas = RecordingCanvas::default();
        shape.render((30.0, 20.0), &mut canvas).unwrap();

        let key = shape.cache_key((30.0, 20.0));
        assert_eq!(canvas.calls[0], Call::Fill(Color::WHITE, Some(key)));
        assert!(matches!(canvas.calls[1], Call::Stroke(_, Some(stroke_key)) if stroke_key != key));

        assert_eq!(shape.stroke_color(Color::WHITE).cache_key((30.0, 20.0)), key);
        assert_ne!(shape.radius(6.0, CornerSet::BOTTOM).cache_key((30.0, 20.0)), key);
    }
}
