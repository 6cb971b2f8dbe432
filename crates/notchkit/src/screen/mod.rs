//! Notch-aware screen geometry.
//!
//! Converts the screen edges of a reference (design) resolution into the
//! coordinates of the presented scene, compensating for safe-area insets and
//! orientation. Everything here is a pure function of its inputs; hosts feed
//! the current presented size, insets and orientation on each call.
//!
//! Scene coordinates are centred, so the edges are symmetric:
//! `left == -right`, `bottom == -top`.

mod config;
mod edges;
mod geometry;
mod safe_area;

pub use config::{GeometryConfig, LANDSCAPE_RIGHT_INSET_CORRECTION};
pub use edges::{
    bottom_edge, is_point_within_percentage_of_screen, left_edge, right_edge, scale_factor_x,
    scale_factor_y, top_edge, ScaleFactor, ScreenEdges,
};
pub use geometry::ScreenGeometry;
pub use safe_area::{NoSafeArea, Orientation, SafeAreaProvider};
