use crate::coords::Size;

/// Landscape-only correction (reference points) subtracted from the right
/// inset before it is applied to the top edge.
///
/// Empirically tuned against rounding at notch boundaries.
pub const LANDSCAPE_RIGHT_INSET_CORRECTION: f32 = 3.0;

/// Design-time settings for the screen transformer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeometryConfig {
    /// Reference (design) resolution the scene is laid out in.
    pub reference: Size,
    /// See [`LANDSCAPE_RIGHT_INSET_CORRECTION`].
    pub landscape_correction: f32,
}

impl GeometryConfig {
    #[inline]
    pub fn new(reference: Size) -> Self {
        Self {
            reference,
            ..Self::default()
        }
    }

    #[inline]
    #[must_use]
    pub fn with_reference(mut self, reference: Size) -> Self {
        self.reference = reference;
        self
    }
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            reference: Size::new(375.0, 667.0),
            landscape_correction: LANDSCAPE_RIGHT_INSET_CORRECTION,
        }
    }
}
