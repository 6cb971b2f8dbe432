//! Geometry value types shared by the screen transformer and the helpers.
//!
//! Scene space:
//! - points (DPI-independent)
//! - origin at the scene centre
//! - +X right, +Y up
//!
//! `Rect::origin` is therefore the bottom-left (minimum) corner.

mod insets;
mod rect;
mod size;
mod vec2;

pub use insets::Insets;
pub use rect::Rect;
pub use size::Size;
pub use vec2::Vec2;
