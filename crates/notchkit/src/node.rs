//! Edge-to-edge node alignment.
//!
//! Hosts expose their scene nodes through the narrow [`Node`] interface;
//! [`Align`] is implemented for every `Node` and moves the node so that one
//! of its edges sits flush against an edge of another node.

use crate::coords::{Rect, Size, Vec2};

/// Minimal view of a host scene-graph node.
pub trait Node {
    fn position(&self) -> Vec2;
    fn set_position(&mut self, position: Vec2);
    /// Bounds in the parent's coordinate space.
    fn frame(&self) -> Rect;
    /// Normalized (0..1) origin within the node's own bounds.
    fn anchor_point(&self) -> Vec2;
}

/// Plain rectangular node, for hosts without a scene graph and for tests.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SpriteNode {
    pub position: Vec2,
    pub size: Size,
    pub anchor: Vec2,
}

impl SpriteNode {
    /// Node of `size` at the origin, anchored at its centre.
    pub fn new(size: Size) -> Self {
        Self {
            position: Vec2::zero(),
            size,
            anchor: Vec2::center_anchor(),
        }
    }

    #[must_use]
    pub fn at(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn with_anchor(mut self, anchor: Vec2) -> Self {
        self.anchor = anchor;
        self
    }
}

impl Node for SpriteNode {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn frame(&self) -> Rect {
        Rect::new(
            self.position.x - self.anchor.x * self.size.width,
            self.position.y - self.anchor.y * self.size.height,
            self.size.width,
            self.size.height,
        )
    }

    fn anchor_point(&self) -> Vec2 {
        self.anchor
    }
}

/// Alignment helpers. `padding` always pushes away from the target edge:
/// inward for same-edge alignment, outward for adjacent placement.
pub trait Align: Node {
    /// Sets x so that the node's left edge lands on `left`.
    fn set_left_edge(&mut self, left: f32) -> &mut Self {
        let width = self.frame().size.width;
        let x = left + self.anchor_point().x * width;
        let y = self.position().y;
        self.set_position(Vec2::new(x, y));
        self
    }

    /// Sets y so that the node's bottom edge lands on `bottom`.
    fn set_bottom_edge(&mut self, bottom: f32) -> &mut Self {
        let height = self.frame().size.height;
        let y = bottom + self.anchor_point().y * height;
        let x = self.position().x;
        self.set_position(Vec2::new(x, y));
        self
    }

    fn set_right_edge(&mut self, right: f32) -> &mut Self {
        let width = self.frame().size.width;
        self.set_left_edge(right - width)
    }

    fn set_top_edge(&mut self, top: f32) -> &mut Self {
        let height = self.frame().size.height;
        self.set_bottom_edge(top - height)
    }

    fn align_left_to_left_of<N: Node + ?Sized>(&mut self, other: &N, padding: f32) -> &mut Self {
        self.set_left_edge(other.frame().min_x() + padding)
    }

    fn align_right_to_right_of<N: Node + ?Sized>(&mut self, other: &N, padding: f32) -> &mut Self {
        self.set_right_edge(other.frame().max_x() - padding)
    }

    /// Places the node just right of `other`.
    fn align_left_to_right_of<N: Node + ?Sized>(&mut self, other: &N, padding: f32) -> &mut Self {
        self.set_left_edge(other.frame().max_x() + padding)
    }

    /// Places the node just left of `other`.
    fn align_right_to_left_of<N: Node + ?Sized>(&mut self, other: &N, padding: f32) -> &mut Self {
        self.set_right_edge(other.frame().min_x() - padding)
    }

    fn align_top_to_top_of<N: Node + ?Sized>(&mut self, other: &N, padding: f32) -> &mut Self {
        self.set_top_edge(other.frame().max_y() - padding)
    }

    fn align_bottom_to_bottom_of<N: Node + ?Sized>(&mut self, other: &N, padding: f32) -> &mut Self {
        self.set_bottom_edge(other.frame().min_y() + padding)
    }

    /// Places the node just above `other`.
    fn align_bottom_to_top_of<N: Node + ?Sized>(&mut self, other: &N, padding: f32) -> &mut Self {
        self.set_bottom_edge(other.frame().max_y() + padding)
    }

    /// Places the node just below `other`.
    fn align_top_to_bottom_of<N: Node + ?Sized>(&mut self, other: &N, padding: f32) -> &mut Self {
        self.set_top_edge(other.frame().min_y() - padding)
    }

    fn center_horizontally_in<N: Node + ?Sized>(&mut self, other: &N) -> &mut Self {
        let width = self.frame().size.width;
        self.set_left_edge(other.frame().mid_x() - width / 2.0)
    }

    fn center_vertically_in<N: Node + ?Sized>(&mut self, other: &N) -> &mut Self {
        let height = self.frame().size.height;
        self.set_bottom_edge(other.frame().mid_y() - height / 2.0)
    }
}

impl<T: Node + ?Sized> Align for T {}
