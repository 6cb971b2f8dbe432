use rand::Rng;

use super::{Size, Vec2};

/// Axis-aligned rectangle in scene points (`origin` is the minimum corner).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Size,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Size::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Size) -> Self {
        Self { origin, size }
    }

    /// Rectangle of `size` centred on `center`.
    #[inline]
    pub fn from_center(center: Vec2, size: Size) -> Self {
        Self::new(
            center.x - size.half_width(),
            center.y - size.half_height(),
            size.width,
            size.height,
        )
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.width, self.origin.y + self.size.height)
    }

    #[inline]
    pub fn mid(self) -> Vec2 {
        Vec2::new(self.mid_x(), self.mid_y())
    }

    #[inline]
    pub fn min_x(self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn max_x(self) -> f32 {
        self.origin.x + self.size.width
    }

    #[inline]
    pub fn mid_x(self) -> f32 {
        self.origin.x + self.half_width()
    }

    #[inline]
    pub fn min_y(self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn max_y(self) -> f32 {
        self.origin.y + self.size.height
    }

    #[inline]
    pub fn mid_y(self) -> f32 {
        self.origin.y + self.half_height()
    }

    #[inline]
    pub fn half_width(self) -> f32 {
        self.size.half_width()
    }

    #[inline]
    pub fn half_height(self) -> f32 {
        self.size.half_height()
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.width <= 0.0 || self.size.height <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.to_vec2().is_finite()
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.width;
        let mut h = self.size.height;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Closed containment: [min, max] on both axes.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let r = self.normalized();
        p.x >= r.min_x() && p.x <= r.max_x() && p.y >= r.min_y() && p.y <= r.max_y()
    }

    /// Uniformly distributed point inside the rectangle.
    ///
    /// A zero-size axis yields the edge coordinate on that axis.
    pub fn random_point<R: Rng + ?Sized>(self, rng: &mut R) -> Vec2 {
        let r = self.normalized();
        Vec2::new(
            sample_axis(rng, r.min_x(), r.max_x()),
            sample_axis(rng, r.min_y(), r.max_y()),
        )
    }
}

fn sample_axis<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if lo < hi {
        rng.random_range(lo..=hi)
    } else {
        lo
    }
}
