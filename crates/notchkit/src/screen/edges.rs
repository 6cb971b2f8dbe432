use crate::coords::{Insets, Size, Vec2};

use super::config::LANDSCAPE_RIGHT_INSET_CORRECTION;
use super::safe_area::Orientation;

/// Per-axis ratio between the reference resolution and the presented size.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ScaleFactor {
    pub x: f32,
    pub y: f32,
}

impl ScaleFactor {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::new(1.0, 1.0)
    }

    /// `reference / presented` per axis, or `None` if either presented
    /// dimension is unusable.
    #[inline]
    pub fn between(reference: Size, presented: Size) -> Option<Self> {
        Some(Self::new(
            scale_factor_x(reference.width, presented.width)?,
            scale_factor_y(reference.height, presented.height)?,
        ))
    }
}

/// `reference_width / presented_width`.
///
/// `None` when the presented width is zero, negative or non-finite (no view
/// attached yet). Callers treat that as "edge unknown" and fall back to 0.
#[inline]
pub fn scale_factor_x(reference_width: f32, presented_width: f32) -> Option<f32> {
    ratio(reference_width, presented_width)
}

/// `reference_height / presented_height`; see [`scale_factor_x`].
#[inline]
pub fn scale_factor_y(reference_height: f32, presented_height: f32) -> Option<f32> {
    ratio(reference_height, presented_height)
}

#[inline]
fn ratio(reference: f32, presented: f32) -> Option<f32> {
    if presented > 0.0 && presented.is_finite() {
        let r = reference / presented;
        r.is_finite().then_some(r)
    } else {
        None
    }
}

/// Visible right edge in reference space.
///
/// The notch compensation subtracts the *top* inset here, not the right one.
/// Hosts rely on this coupling for alignment on notched devices.
pub fn right_edge(presented: Option<Size>, reference: Size, insets: Insets) -> f32 {
    let Some(presented) = presented else {
        log::trace!("right edge: no presented size, falling back to 0");
        return 0.0;
    };
    let Some(sx) = scale_factor_x(reference.width, presented.width) else {
        log::trace!("right edge: presented width {} unusable, falling back to 0", presented.width);
        return 0.0;
    };

    presented.half_width() * sx - insets.top * sx
}

/// Visible top edge in reference space.
///
/// In landscape the right inset, less a fixed correction of
/// [`LANDSCAPE_RIGHT_INSET_CORRECTION`] points, is also subtracted.
pub fn top_edge(presented: Option<Size>, reference: Size, insets: Insets, orientation: Orientation) -> f32 {
    top_edge_corrected(presented, reference, insets, orientation, LANDSCAPE_RIGHT_INSET_CORRECTION)
}

pub(crate) fn top_edge_corrected(
    presented: Option<Size>,
    reference: Size,
    insets: Insets,
    orientation: Orientation,
    landscape_correction: f32,
) -> f32 {
    let Some(presented) = presented else {
        log::trace!("top edge: no presented size, falling back to 0");
        return 0.0;
    };
    let Some(sy) = scale_factor_y(reference.height, presented.height) else {
        log::trace!("top edge: presented height {} unusable, falling back to 0", presented.height);
        return 0.0;
    };

    let mut top = presented.half_height() * sy - insets.bottom * sy;
    if orientation.is_landscape() {
        top -= (insets.right - landscape_correction) * sy;
    }
    top
}

/// Exact negation of [`right_edge`].
#[inline]
pub fn left_edge(presented: Option<Size>, reference: Size, insets: Insets) -> f32 {
    -right_edge(presented, reference, insets)
}

/// Exact negation of [`top_edge`].
#[inline]
pub fn bottom_edge(presented: Option<Size>, reference: Size, insets: Insets, orientation: Orientation) -> f32 {
    -top_edge(presented, reference, insets, orientation)
}

/// The four visible screen edges, symmetric about the scene origin.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ScreenEdges {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl ScreenEdges {
    /// Builds symmetric edges from the right and top values.
    #[inline]
    pub fn symmetric(right: f32, top: f32) -> Self {
        Self { left: -right, right, top, bottom: -top }
    }

    pub fn compute(presented: Option<Size>, reference: Size, insets: Insets, orientation: Orientation) -> Self {
        Self::symmetric(
            right_edge(presented, reference, insets),
            top_edge(presented, reference, insets, orientation),
        )
    }

    /// Edges scaled towards the origin: `x_percent` on left/right,
    /// `y_percent` on top/bottom (1.0 = full screen).
    #[inline]
    #[must_use]
    pub fn scaled(self, x_percent: f32, y_percent: f32) -> Self {
        Self {
            left: self.left * x_percent,
            right: self.right * x_percent,
            top: self.top * y_percent,
            bottom: self.bottom * y_percent,
        }
    }

    /// Closed containment on both axes.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.bottom && p.y <= self.top
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.top - self.bottom
    }
}

/// Whether `point` lies inside the given fraction of the visible screen.
///
/// Without inset data containment cannot be judged, so `None` yields `false`.
pub fn is_point_within_percentage_of_screen(
    point: Vec2,
    x_percent: f32,
    y_percent: f32,
    presented: Option<Size>,
    reference: Size,
    insets: Option<Insets>,
    orientation: Orientation,
) -> bool {
    let Some(insets) = insets else {
        return false;
    };

    ScreenEdges::compute(presented, reference, insets, orientation)
        .scaled(x_percent, y_percent)
        .contains(point)
}
