//! winit host adapter.
//!
//! Reads the presented size and orientation off a winit window. Safe-area
//! insets are not exposed by winit; mobile hosts attach their own
//! [`SafeAreaProvider`](crate::screen::SafeAreaProvider).

use winit::dpi::{LogicalSize, PhysicalSize};
use winit::window::Window;

use crate::coords::Size;
use crate::screen::Orientation;

/// Converts a physical surface size to logical points.
///
/// `None` for a zero-area surface (minimized window, no layout yet) or an
/// unusable scale factor.
pub fn presented_size_from_physical(physical: PhysicalSize<u32>, scale_factor: f64) -> Option<Size> {
    if physical.width == 0 || physical.height == 0 {
        return None;
    }
    if !(scale_factor.is_finite() && scale_factor > 0.0) {
        log::warn!("ignoring invalid scale factor {scale_factor}");
        return None;
    }

    let logical: LogicalSize<f64> = physical.to_logical(scale_factor);
    Some(Size::new(logical.width as f32, logical.height as f32))
}

/// Logical size of the window's client area.
pub fn presented_size(window: &Window) -> Option<Size> {
    presented_size_from_physical(window.inner_size(), window.scale_factor())
}

/// Orientation derived from the window's aspect; portrait when unknown.
pub fn orientation(window: &Window) -> Orientation {
    presented_size(window).map_or(Orientation::Portrait, Orientation::from_size)
}
