/// Safe-area insets in scene points.
///
/// Each field is the margin on that edge that should stay free of UI content
/// (display notch, rounded corners, home indicator). Values are expected to be
/// non-negative.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Insets {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Insets {
    #[inline]
    pub const fn new(top: f32, bottom: f32, left: f32, right: f32) -> Self {
        Self { top, bottom, left, right }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    #[inline]
    pub const fn all(v: f32) -> Self {
        Self { top: v, bottom: v, left: v, right: v }
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.top == 0.0 && self.bottom == 0.0 && self.left == 0.0 && self.right == 0.0
    }

    /// Total inset on the horizontal axis.
    #[inline]
    pub fn horizontal(self) -> f32 {
        self.left + self.right
    }

    /// Total inset on the vertical axis.
    #[inline]
    pub fn vertical(self) -> f32 {
        self.top + self.bottom
    }
}
