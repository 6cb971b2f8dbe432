//! notchkit: helpers for laying out 2D game scenes on notched screens.
//!
//! The core is the [`screen`] transformer, which maps the edges of a design
//! resolution onto the presented scene while compensating for safe-area
//! insets and orientation. Around it sit small value helpers for sizes,
//! colors, node alignment, atlas ordering and action building. Nothing here
//! renders or plays anything back; hosts own that.

pub mod action;
pub mod atlas;
pub mod coords;
pub mod host;
pub mod logging;
pub mod node;
pub mod numeric;
pub mod paint;
pub mod scale;
pub mod screen;

pub use coords::{Insets, Rect, Size, Vec2};
pub use paint::Color;
pub use screen::{Orientation, SafeAreaProvider, ScreenEdges, ScreenGeometry};
