//! Corner positions and sets of them.
//!
//! A [`CornerSet`] selects which corners of a rectangle receive a radius. It is a
//! four-bit flag set, so the usual set algebra is available through the bit operators:
//!
//! ```rust
//! use rounded_corners::{Corner, CornerSet};
//!
//! let top = CornerSet::TOP_LEFT | CornerSet::TOP_RIGHT;
//! assert_eq!(top, CornerSet::TOP);
//! assert!(top.contains_corner(Corner::TopRight));
//! assert!(!top.contains(CornerSet::BOTTOM_LEFT));
//!
//! assert_eq!(CornerSet::MAIN_DIAGONAL | CornerSet::SECONDARY_DIAGONAL, CornerSet::ALL);
//! assert_eq!(!CornerSet::LEFT, CornerSet::RIGHT);
//! ```

use bitflags::bitflags;

/// A single corner of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// Every corner, in bit order.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];
}

bitflags! {
    /// A set of rectangle corners.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CornerSet: u8 {
        const TOP_LEFT = 1 << 0;
        const TOP_RIGHT = 1 << 1;
        const BOTTOM_LEFT = 1 << 2;
        const BOTTOM_RIGHT = 1 << 3;

        const TOP = Self::TOP_LEFT.bits() | Self::TOP_RIGHT.bits();
        const BOTTOM = Self::BOTTOM_LEFT.bits() | Self::BOTTOM_RIGHT.bits();
        const LEFT = Self::TOP_LEFT.bits() | Self::BOTTOM_LEFT.bits();
        const RIGHT = Self::TOP_RIGHT.bits() | Self::BOTTOM_RIGHT.bits();
        /// Top left and bottom right.
        const MAIN_DIAGONAL = Self::TOP_LEFT.bits() | Self::BOTTOM_RIGHT.bits();
        /// Top right and bottom left.
        const SECONDARY_DIAGONAL = Self::TOP_RIGHT.bits() | Self::BOTTOM_LEFT.bits();
        const ALL = Self::TOP.bits() | Self::BOTTOM.bits();
    }
}

impl Default for CornerSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl CornerSet {
    /// No corners.
    pub const NONE: Self = Self::empty();

    #[inline]
    pub fn contains_corner(self, corner: Corner) -> bool {
        self.contains(corner.into())
    }

    /// Member corners in bit order.
    pub fn corners(self) -> impl Iterator<Item = Corner> {
        Corner::ALL
            .into_iter()
            .filter(move |corner| self.contains_corner(*corner))
    }
}

impl From<Corner> for CornerSet {
    #[inline]
    fn from(corner: Corner) -> Self {
        match corner {
            Corner::TopLeft => Self::TOP_LEFT,
            Corner::TopRight => Self::TOP_RIGHT,
            Corner::BottomLeft => Self::BOTTOM_LEFT,
            Corner::BottomRight => Self::BOTTOM_RIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_sets_contain_exactly_their_members() {
        use Corner::*;

        let cases = [
            (CornerSet::TOP, vec![TopLeft, TopRight]),
            (CornerSet::BOTTOM, vec![BottomLeft, BottomRight]),
            (CornerSet::LEFT, vec![TopLeft, BottomLeft]),
            (CornerSet::RIGHT, vec![TopRight, BottomRight]),
            (CornerSet::MAIN_DIAGONAL, vec![TopLeft, BottomRight]),
            (CornerSet::SECONDARY_DIAGONAL, vec![TopRight, BottomLeft]),
            (CornerSet::ALL, vec![TopLeft, TopRight, BottomLeft, BottomRight]),
            (CornerSet::NONE, vec![]),
        ];

        for (set, expected) in cases {
            for corner in Corner::ALL {
                assert_eq!(
                    set.contains_corner(corner),
                    expected.contains(&corner),
                    "{set:?} membership of {corner:?}"
                );
            }
            assert_eq!(set.corners().collect::<Vec<_>>(), expected);
        }
    }

    #[test]
    fn diagonals_partition_all_corners() {
        assert_eq!(CornerSet::MAIN_DIAGONAL | CornerSet::SECONDARY_DIAGONAL, CornerSet::ALL);
        assert_eq!(CornerSet::MAIN_DIAGONAL & CornerSet::SECONDARY_DIAGONAL, CornerSet::NONE);
        assert_eq!(!CornerSet::MAIN_DIAGONAL, CornerSet::SECONDARY_DIAGONAL);
    }

    #[test]
    fn complement_stays_inside_the_four_corners() {
        assert_eq!(!CornerSet::NONE, CornerSet::ALL);
        assert_eq!(!CornerSet::ALL, CornerSet::NONE);
        assert_eq!(!CornerSet::TOP, CornerSet::BOTTOM);
        assert_eq!((!CornerSet::TOP_LEFT).bits().count_ones(), 3);
    }

    #[test]
    fn raw_bits_outside_the_four_corners_are_rejected_or_truncated() {
        assert_eq!(
            CornerSet::from_bits(0b0101),
            Some(CornerSet::TOP_LEFT | CornerSet::BOTTOM_LEFT)
        );
        assert_eq!(CornerSet::from_bits(0b1_0000), None);
        assert_eq!(CornerSet::from_bits_truncate(0b1111_0011), CornerSet::TOP);
    }

    #[test]
    fn single_corners_convert_into_sets() {
        let mut set = CornerSet::default();
        set.insert(Corner::TopRight.into());
        set |= CornerSet::BOTTOM_RIGHT;
        assert_eq!(set, CornerSet::RIGHT);

        set.remove(Corner::TopRight.into());
        assert_eq!(set, CornerSet::BOTTOM_RIGHT);

        let collected: CornerSet = [Corner::BottomLeft, Corner::BottomRight]
            .into_iter()
            .map(CornerSet::from)
            .collect();
        assert_eq!(collected, CornerSet::BOTTOM);
    }

    #[test]
    fn empty_set_is_contained_everywhere() {
        assert!(CornerSet::NONE.contains(CornerSet::NONE));
        assert!(CornerSet::TOP.contains(CornerSet::NONE));
        assert!(CornerSet::ALL.is_all());
        assert!(CornerSet::default().is_empty());
        assert_eq!(CornerSet::NONE.corners().count(), 0);
    }
}
