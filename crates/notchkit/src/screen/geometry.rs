use crate::coords::{Insets, Size, Vec2};

use super::config::GeometryConfig;
use super::edges::{self, ScaleFactor, ScreenEdges};
use super::safe_area::{Orientation, SafeAreaProvider};

/// Screen transformer bound to a host's current state.
///
/// Holds the design-time [`GeometryConfig`] plus whatever the host currently
/// reports: presented size, orientation and an optional safe-area provider.
/// Without a provider, edges are computed with zero insets but containment
/// checks answer `false`.
#[derive(Clone, Copy)]
pub struct ScreenGeometry<'a> {
    config: GeometryConfig,
    presented: Option<Size>,
    orientation: Orientation,
    safe_area: Option<&'a dyn SafeAreaProvider>,
}

impl<'a> ScreenGeometry<'a> {
    pub fn new(config: GeometryConfig) -> Self {
        Self {
            config,
            presented: None,
            orientation: Orientation::Portrait,
            safe_area: None,
        }
    }

    #[must_use]
    pub fn with_presented(mut self, presented: Size) -> Self {
        self.presented = Some(presented);
        self
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_safe_area(mut self, provider: &'a dyn SafeAreaProvider) -> Self {
        self.safe_area = Some(provider);
        self
    }

    /// Updates the presented size, e.g. after a host layout pass.
    pub fn set_presented(&mut self, presented: Option<Size>) {
        self.presented = presented;
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    #[inline]
    pub fn config(&self) -> GeometryConfig {
        self.config
    }

    #[inline]
    pub fn presented(&self) -> Option<Size> {
        self.presented
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[inline]
    pub fn has_safe_area(&self) -> bool {
        self.safe_area.is_some()
    }

    /// Insets from the provider, or zero when none is attached.
    #[inline]
    pub fn insets(&self) -> Insets {
        self.safe_area.map_or_else(Insets::zero, |p| p.safe_area_insets())
    }

    pub fn scale_factor(&self) -> Option<ScaleFactor> {
        ScaleFactor::between(self.config.reference, self.presented?)
    }

    pub fn right_edge(&self) -> f32 {
        edges::right_edge(self.presented, self.config.reference, self.insets())
    }

    pub fn left_edge(&self) -> f32 {
        -self.right_edge()
    }

    pub fn top_edge(&self) -> f32 {
        edges::top_edge_corrected(
            self.presented,
            self.config.reference,
            self.insets(),
            self.orientation,
            self.config.landscape_correction,
        )
    }

    pub fn bottom_edge(&self) -> f32 {
        -self.top_edge()
    }

    pub fn edges(&self) -> ScreenEdges {
        ScreenEdges::symmetric(self.right_edge(), self.top_edge())
    }

    /// See [`edges::is_point_within_percentage_of_screen`].
    pub fn is_point_within_percentage(&self, point: Vec2, x_percent: f32, y_percent: f32) -> bool {
        if self.safe_area.is_none() {
            return false;
        }
        self.edges().scaled(x_percent, y_percent).contains(point)
    }
}

impl Default for ScreenGeometry<'_> {
    fn default() -> Self {
        Self::new(GeometryConfig::default())
    }
}

impl std::fmt::Debug for ScreenGeometry<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreenGeometry")
            .field("config", &self.config)
            .field("presented", &self.presented)
            .field("orientation", &self.orientation)
            .field("insets", &self.safe_area.map(|p| p.safe_area_insets()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::{LANDSCAPE_RIGHT_INSET_CORRECTION, NoSafeArea};

    fn phone() -> Size {
        Size::new(400.0, 800.0)
    }

    #[test]
    fn matches_free_functions() {
        let insets = Insets::new(47.0, 34.0, 0.0, 12.0);
        let presented = Size::new(390.0, 844.0);
        let reference = Size::new(375.0, 667.0);
        let g = ScreenGeometry::new(GeometryConfig::new(reference))
            .with_presented(presented)
            .with_orientation(Orientation::Landscape)
            .with_safe_area(&insets);

        let expected = ScreenEdges::compute(Some(presented), reference, insets, Orientation::Landscape);
        assert_eq!(g.edges(), expected);
        assert_eq!(g.left_edge(), -g.right_edge());
        assert_eq!(g.bottom_edge(), -g.top_edge());
    }

    #[test]
    fn missing_provider_means_zero_insets() {
        let g = ScreenGeometry::new(GeometryConfig::new(phone())).with_presented(phone());
        assert!(!g.has_safe_area());
        assert_eq!(g.insets(), Insets::zero());
        assert_eq!(g.right_edge(), 200.0);
        assert_eq!(g.top_edge(), 400.0);
    }

    #[test]
    fn missing_provider_never_contains() {
        let g = ScreenGeometry::new(GeometryConfig::new(phone())).with_presented(phone());
        assert!(!g.is_point_within_percentage(Vec2::zero(), 1.0, 1.0));

        let g = g.with_safe_area(&NoSafeArea);
        assert!(g.is_point_within_percentage(Vec2::zero(), 1.0, 1.0));
        assert!(g.is_point_within_percentage(Vec2::new(200.0, -400.0), 1.0, 1.0));
        assert!(!g.is_point_within_percentage(Vec2::new(200.0, 0.0), 0.9, 1.0));
    }

    #[test]
    fn unset_presented_size_collapses_edges() {
        let mut g = ScreenGeometry::new(GeometryConfig::new(phone())).with_presented(phone());
        g.set_presented(None);
        assert_eq!(g.edges(), ScreenEdges::default());
        assert_eq!(g.scale_factor(), None);
    }

    #[test]
    fn landscape_correction_comes_from_config() {
        let screen = Size::new(800.0, 400.0);
        let insets = Insets::new(0.0, 0.0, 0.0, 44.0);
        let mut config = GeometryConfig::new(screen);
        assert_eq!(config.landscape_correction, LANDSCAPE_RIGHT_INSET_CORRECTION);

        let stock = ScreenGeometry::new(config)
            .with_presented(screen)
            .with_orientation(Orientation::Landscape)
            .with_safe_area(&insets);
        assert_eq!(stock.top_edge(), 200.0 - 41.0);

        config.landscape_correction = 0.0;
        let tuned = ScreenGeometry::new(config)
            .with_presented(screen)
            .with_orientation(Orientation::Landscape)
            .with_safe_area(&insets);
        assert_eq!(tuned.top_edge(), 200.0 - 44.0);
    }

    #[test]
    fn default_config_reference() {
        let g = ScreenGeometry::default();
        assert_eq!(g.config().reference, Size::new(375.0, 667.0));
        assert_eq!(g.orientation(), Orientation::Portrait);
    }
}
