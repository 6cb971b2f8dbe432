//! Sizing relative to a container.
//!
//! Every helper takes the container dimension as an `Option`: hosts report
//! `None` while no container is attached, and the helpers pass that through.

use crate::coords::Size;
use crate::screen::ScaleFactor;

/// Uniformly scales `size` so its width becomes `container_width * percent`.
///
/// Aspect ratio is preserved. `None` when the container width is unknown or
/// `size` has zero width.
pub fn scale_size_to_percent_of_container_width(
    size: Size,
    container_width: Option<f32>,
    percent: f32,
) -> Option<Size> {
    let container_width = container_width?;
    if size.width == 0.0 {
        return None;
    }

    let factor = container_width * percent / size.width;
    Some(Size::new(size.width * factor, size.height * factor))
}

/// Stretches the width to the container width; height is unchanged.
pub fn scale_size_to_container_width(size: Size, container_width: Option<f32>) -> Option<Size> {
    container_width.map(|w| Size::new(w, size.height))
}

/// Stretches the height to the container height; width is unchanged.
pub fn scale_size_to_container_height(size: Size, container_height: Option<f32>) -> Option<Size> {
    container_height.map(|h| Size::new(size.width, h))
}

/// Independent per-axis factors that make `size` cover the given fractions
/// of `container`.
pub fn scale_to_percentages_of_container(
    size: Size,
    container: Option<Size>,
    width_percent: f32,
    height_percent: f32,
) -> Option<ScaleFactor> {
    let container = container?;
    if size.width == 0.0 || size.height == 0.0 {
        return None;
    }

    Some(ScaleFactor::new(
        container.width * width_percent / size.width,
        container.height * height_percent / size.height,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() <= 1e-4 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn percent_of_width_preserves_aspect_ratio() {
        let sizes = [
            Size::new(100.0, 50.0),
            Size::new(33.0, 97.0),
            Size::new(1.0, 1000.0),
            Size::new(640.0, 0.0),
        ];
        for size in sizes {
            let out = scale_size_to_percent_of_container_width(size, Some(375.0), 0.4).unwrap();
            assert!(approx(out.width, 150.0));
            assert!(approx(out.height / out.width, size.height / size.width));
        }
    }

    #[test]
    fn percent_of_width_needs_container_and_width() {
        assert_eq!(scale_size_to_percent_of_container_width(Size::new(10.0, 10.0), None, 0.5), None);
        assert_eq!(scale_size_to_percent_of_container_width(Size::new(0.0, 10.0), Some(100.0), 0.5), None);
    }

    #[test]
    fn stretch_to_width_keeps_height() {
        let out = scale_size_to_container_width(Size::new(10.0, 20.0), Some(300.0));
        assert_eq!(out, Some(Size::new(300.0, 20.0)));
        assert_eq!(scale_size_to_container_width(Size::new(10.0, 20.0), None), None);
    }

    #[test]
    fn stretch_to_height_keeps_width() {
        let out = scale_size_to_container_height(Size::new(10.0, 20.0), Some(500.0));
        assert_eq!(out, Some(Size::new(10.0, 500.0)));
        assert_eq!(scale_size_to_container_height(Size::new(10.0, 20.0), None), None);
    }

    #[test]
    fn per_axis_percentages_are_independent() {
        let s = scale_to_percentages_of_container(
            Size::new(50.0, 25.0),
            Some(Size::new(400.0, 800.0)),
            0.5,
            0.25,
        )
        .unwrap();
        assert_eq!(s, ScaleFactor::new(4.0, 8.0));
    }

    #[test]
    fn per_axis_percentages_need_container_and_area() {
        assert_eq!(scale_to_percentages_of_container(Size::new(1.0, 1.0), None, 1.0, 1.0), None);
        assert_eq!(
            scale_to_percentages_of_container(Size::new(1.0, 0.0), Some(Size::new(1.0, 1.0)), 1.0, 1.0),
            None
        );
    }
}
