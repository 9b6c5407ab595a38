use std::cmp::{max, min};

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ResizeEdge: u32 {
        const TOP          = 0b0001;
        const BOTTOM       = 0b0010;
        const LEFT         = 0b0100;
        const RIGHT        = 0b1000;

        const LEFT_RIGHT   = Self::LEFT.bits() | Self::RIGHT.bits();
        const TOP_BOTTOM   = Self::TOP.bits() | Self::BOTTOM.bits();
    }
}

impl ResizeEdge {
    /// Whether this resize happens along the horizontal axis.
    pub fn is_horizontal(self) -> bool {
        self.intersects(Self::LEFT_RIGHT)
    }

    /// Whether both edges of one dimension are involved.
    pub fn is_axis_pair(self) -> bool {
        self == Self::LEFT_RIGHT || self == Self::TOP_BOTTOM
    }
}

/// Clamps `value` into `[min_size, max_size]`.
///
/// Unlike [`i32::clamp`] this does not panic when the bounds are inverted; the minimum wins.
pub fn clamp_size(value: i32, min_size: i32, max_size: i32) -> i32 {
    max(min_size, min(value, max_size))
}

/// Returns `ppt` percent of `base`, truncating towards zero.
pub fn percent_of(base: i32, ppt: i32) -> i32 {
    let value = i64::from(base) * i64::from(ppt) / 100;
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_axes() {
        assert!(ResizeEdge::LEFT.is_horizontal());
        assert!(ResizeEdge::LEFT_RIGHT.is_horizontal());
        assert!(!ResizeEdge::TOP_BOTTOM.is_horizontal());
        assert!(!ResizeEdge::BOTTOM.is_horizontal());

        assert!(ResizeEdge::TOP_BOTTOM.is_axis_pair());
        assert!(!ResizeEdge::RIGHT.is_axis_pair());
    }

    #[test]
    fn clamp_size_prefers_minimum() {
        assert_eq!(clamp_size(50, 75, 1000), 75);
        assert_eq!(clamp_size(5000, 75, 1000), 1000);
        assert_eq!(clamp_size(500, 75, 1000), 500);
        assert_eq!(clamp_size(500, 800, 600), 800);
    }

    #[test]
    fn percent_of_truncates() {
        assert_eq!(percent_of(1000, 50), 500);
        assert_eq!(percent_of(999, 10), 99);
        assert_eq!(percent_of(999, -10), -99);
        assert_eq!(percent_of(i32::MAX, 1000), i32::MAX);
    }
}
