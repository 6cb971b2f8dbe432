use bytemuck::{Pod, Zeroable};

use super::Vec2;

/// Width/height pair in scene points.
///
/// Sizes reported by a host before its first layout pass are typically zero;
/// [`Size::is_valid`] tells a usable size apart from such placeholders.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// True when both dimensions are strictly positive and finite.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    #[inline]
    pub fn half_width(self) -> f32 {
        self.width / 2.0
    }

    #[inline]
    pub fn half_height(self) -> f32 {
        self.height / 2.0
    }

    /// `height / width`, or `None` for a zero-width size.
    #[inline]
    pub fn aspect_ratio(self) -> Option<f32> {
        if self.width == 0.0 {
            None
        } else {
            Some(self.height / self.width)
        }
    }

    /// Landscape when wider than tall.
    #[inline]
    pub fn is_landscape(self) -> bool {
        self.width > self.height
    }

    #[inline]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

impl From<Vec2> for Size {
    #[inline]
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_size_is_not_valid() {
        assert!(!Size::zero().is_valid());
        assert!(!Size::new(10.0, 0.0).is_valid());
        assert!(!Size::new(f32::INFINITY, 10.0).is_valid());
        assert!(Size::new(1.0, 1.0).is_valid());
    }

    #[test]
    fn aspect_ratio_requires_width() {
        assert_eq!(Size::new(0.0, 10.0).aspect_ratio(), None);
        assert_eq!(Size::new(4.0, 2.0).aspect_ratio(), Some(0.5));
    }

    #[test]
    fn landscape_only_when_strictly_wider() {
        assert!(Size::new(800.0, 400.0).is_landscape());
        assert!(!Size::new(400.0, 400.0).is_landscape());
        assert!(!Size::new(400.0, 800.0).is_landscape());
    }
}
