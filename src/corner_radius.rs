use crate::corner_set::{Corner, CornerSet};
use crate::util::hash_f32;
use lyon::math::Size;
use std::hash::Hasher;

/// Represents the radius of each corner of a rounded rectangle.
///
/// Values are taken as given: nothing is clamped or validated here. Radii are capped
/// against the rectangle only when a path is built, see [`CornerRadius::clamped`].
///
/// # Examples
///
/// ```rust
/// use rounded_corners::{CornerRadius, CornerSet};
///
/// // Explicit values, omitted corners stay square
/// let radius = CornerRadius {
///     top_left: 5.0,
///     bottom_right: 20.0,
///     ..Default::default()
/// };
/// assert_eq!(radius.top_right, 0.0);
///
/// // One radius broadcast over a set of corners
/// let left = CornerRadius::uniform(10.0, CornerSet::LEFT);
/// assert_eq!(left, CornerRadius::new(10.0, 0.0, 10.0, 0.0));
/// ```
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
pub struct CornerRadius {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_left: f32,
    pub bottom_right: f32,
}

impl CornerRadius {
    /// No rounding on any corner.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a radius record with exactly the given per-corner values.
    #[inline]
    pub const fn new(top_left: f32, top_right: f32, bottom_left: f32, bottom_right: f32) -> Self {
        Self {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
    }

    /// Applies `radius` to every corner in `corners` and zero to the others.
    #[inline]
    pub fn uniform(radius: f32, corners: CornerSet) -> Self {
        let pick = |corner: Corner| if corners.contains_corner(corner) { radius } else { 0.0 };
        Self {
            top_left: pick(Corner::TopLeft),
            top_right: pick(Corner::TopRight),
            bottom_left: pick(Corner::BottomLeft),
            bottom_right: pick(Corner::BottomRight),
        }
    }

    /// Same radius on all four corners.
    #[inline]
    pub fn all(radius: f32) -> Self {
        Self::uniform(radius, CornerSet::ALL)
    }

    #[inline]
    pub fn get(&self, corner: Corner) -> f32 {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomLeft => self.bottom_left,
            Corner::BottomRight => self.bottom_right,
        }
    }

    /// Returns a copy with one corner replaced.
    #[inline]
    pub fn with_corner(mut self, corner: Corner, radius: f32) -> Self {
        match corner {
            Corner::TopLeft => self.top_left = radius,
            Corner::TopRight => self.top_right = radius,
            Corner::BottomLeft => self.bottom_left = radius,
            Corner::BottomRight => self.bottom_right = radius,
        }
        self
    }

    /// Corners whose radius is strictly positive.
    pub fn rounded_corners(&self) -> CornerSet {
        Corner::ALL
            .into_iter()
            .filter(|corner| self.get(*corner) > 0.0)
            .map(CornerSet::from)
            .collect()
    }

    /// Caps every radius at half the width and half the height of `size`.
    ///
    /// Each corner is clamped on its own: adjacent radii may still add up to more
    /// than the side they share. Negative radii and negative extents clamp to zero,
    /// and so does a NaN radius. An infinite radius clamps to the limit.
    ///
    /// ```rust
    /// use rounded_corners::CornerRadius;
    ///
    /// let clamped = CornerRadius::all(100.0).clamped((40.0, 60.0));
    /// assert_eq!(clamped, CornerRadius::all(20.0));
    /// ```
    pub fn clamped(&self, size: impl Into<Size>) -> Self {
        let size = size.into();
        let limit = (size.width / 2.0).min(size.height / 2.0).max(0.0);
        let clamp = |radius: f32| if radius.is_nan() { 0.0 } else { radius.min(limit).max(0.0) };
        Self {
            top_left: clamp(self.top_left),
            top_right: clamp(self.top_right),
            bottom_left: clamp(self.bottom_left),
            bottom_right: clamp(self.bottom_right),
        }
    }

    pub(crate) fn hash_into<H: Hasher>(&self, state: &mut H) {
        hash_f32(self.top_left, state);
        hash_f32(self.top_right, state);
        hash_f32(self.bottom_left, state);
        hash_f32(self.bottom_right, state);
    }
}

impl core::fmt::Display for CornerRadius {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "CornerRadius({}, {}, {}, {})",
            self.top_left, self.top_right, self.bottom_left, self.bottom_right
        )
    }
}
