use crate::util::normalize_rgba_color;

/// Represents a color in RGBA format.
///
/// Each channel is an 8-bit unsigned integer. The default color is
/// [`Color::TRANSPARENT`], which is also the default fill of
/// [`RoundedCorners`](crate::RoundedCorners).
///
/// # Examples
///
/// ```
/// use rounded_corners::Color;
///
/// let red = Color::rgb(255, 0, 0);
/// assert_eq!(red.normalize(), [1.0, 0.0, 0.0, 1.0]);
///
/// let semi_blue = Color::rgba(0, 0, 255, 128);
/// assert_eq!(semi_blue.to_array(), [0, 0, 255, 128]);
/// assert!(!semi_blue.is_transparent());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(pub [u8; 4]);

impl Color {
    /// A fully transparent color.
    pub const TRANSPARENT: Self = Self([0, 0, 0, 0]);
    /// Opaque black.
    pub const BLACK: Self = Self([0, 0, 0, 255]);
    /// Opaque white.
    pub const WHITE: Self = Self([255, 255, 255, 255]);

    /// Creates a new color with the specified RGB values and full opacity.
    ///
    /// ```
    /// use rounded_corners::Color;
    ///
    /// let green = Color::rgb(0, 255, 0);
    /// assert_eq!(green, Color([0, 255, 0, 255]));
    /// ```
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }

    /// Creates a new color with the specified RGBA values.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    /// Normalizes the color values to the range [0.0, 1.0].
    pub fn normalize(&self) -> [f32; 4] {
        normalize_rgba_color(&self.0)
    }

    /// Returns the color as an array of 4 `u8` values.
    pub fn to_array(&self) -> [u8; 4] {
        self.0
    }

    /// True if the alpha channel is zero; nothing painted with this color is visible.
    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.0[3] == 0
    }
}

impl From<[u8; 4]> for Color {
    fn from(value: [u8; 4]) -> Self {
        Self(value)
    }
}
