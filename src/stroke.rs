use crate::Color;

/// The outline handed to [`Canvas::stroke_path`](crate::Canvas::stroke_path).
///
/// A [`RoundedCorners`](crate::RoundedCorners) builds one from its line width and
/// stroke color; the line is centered on the traced outline, so half of `width`
/// lies outside the rectangle. [`Stroke::default`] is the outline a fresh
/// `RoundedCorners` draws: one unit of black.
#[derive(Clone, Debug, Copy, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

impl Default for Stroke {
    fn default() -> Self {
        Self::new(1.0, Color::BLACK)
    }
}

impl Stroke {
    #[inline]
    pub fn new(width: impl Into<f32>, color: impl Into<Color>) -> Self {
        Self {
            width: width.into(),
            color: color.into(),
        }
    }

    /// Whether drawing this outline would leave no visible mark.
    ///
    /// Holds for a width that is not strictly positive (NaN included) and for a fully
    /// transparent color. Such strokes are never submitted to a canvas.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width.is_nan() || self.width <= 0.0 || self.color.is_transparent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stroke_is_one_unit_black() {
        let stroke = Stroke::default();
        assert_eq!(stroke.width, 1.0);
        assert_eq!(stroke.color, Color::BLACK);
        assert!(!stroke.is_empty());
    }

    #[test]
    fn invisible_strokes_are_empty() {
        assert!(Stroke::new(0.0, Color::BLACK).is_empty());
        assert!(Stroke::new(-2.0, Color::BLACK).is_empty());
        assert!(Stroke::new(f32::NAN, Color::BLACK).is_empty());
        assert!(Stroke::new(3.0, Color::TRANSPARENT).is_empty());
        assert!(!Stroke::new(3.0, Color::rgba(10, 20, 30, 1)).is_empty());
    }
}
