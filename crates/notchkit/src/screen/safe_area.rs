use crate::coords::{Insets, Size};

/// Source of safe-area insets supplied by the host platform.
///
/// Hosts without a safe-area concept (desktop windows, headless tests) can
/// use [`NoSafeArea`] or simply not attach a provider.
pub trait SafeAreaProvider {
    fn safe_area_insets(&self) -> Insets;
}

/// Provider that always reports zero insets.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct NoSafeArea;

impl SafeAreaProvider for NoSafeArea {
    #[inline]
    fn safe_area_insets(&self) -> Insets {
        Insets::zero()
    }
}

/// Fixed insets act as their own provider.
impl SafeAreaProvider for Insets {
    #[inline]
    fn safe_area_insets(&self) -> Insets {
        *self
    }
}

/// Device orientation as seen by the scene.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    #[inline]
    pub fn is_landscape(self) -> bool {
        self == Orientation::Landscape
    }

    /// Landscape when the size is strictly wider than tall.
    #[inline]
    pub fn from_size(size: Size) -> Self {
        if size.is_landscape() {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

impl From<bool> for Orientation {
    /// `true` maps to landscape.
    #[inline]
    fn from(is_landscape: bool) -> Self {
        if is_landscape {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}
