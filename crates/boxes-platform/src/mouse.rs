//! Pointer coordinate translation.
//!
//! Maps window pixels to the [-1, 1] view space the orbit controllers
//! work in, and wheel events to zoom deltas.

use boxes_common::ViewPos;

/// Zoom delta of one wheel notch.
pub const WHEEL_NOTCH: i32 = 120;

/// Translate a pixel position to view space.
///
/// The window centre maps to the origin, the left edge to `x = -1` and
/// the top edge to `y = +1`. A zero-sized window maps everything to the origin.
pub fn pixel_to_view(pixel_x: f64, pixel_y: f64, width: u32, height: u32) -> ViewPos {
    if width == 0 || height == 0 {
        return ViewPos::ORIGIN;
    }
    let x = 2.0 * pixel_x / width as f64 - 1.0;
    let y = 1.0 - 2.0 * pixel_y / height as f64;
    ViewPos::new(x as f32, y as f32)
}

/// Convert a line-based wheel delta (mouse notches) to a zoom delta.
///
/// Positive lines (wheel away from the user) move the camera away.
pub fn wheel_lines_to_delta(lines_y: f32) -> i32 {
    (lines_y * WHEEL_NOTCH as f32).round() as i32
}

/// Convert a pixel-based wheel delta (touchpads) to a zoom delta.
pub fn wheel_pixels_to_delta(pixels_y: f64) -> i32 {
    pixels_y.round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_maps_to_origin() {
        let p = pixel_to_view(400.0, 300.0, 800, 600);
        assert_eq!(p, ViewPos::new(0.0, 0.0));
    }

    #[test]
    fn top_left_maps_to_minus_one_plus_one() {
        let p = pixel_to_view(0.0, 0.0, 800, 600);
        assert_eq!(p, ViewPos::new(-1.0, 1.0));
    }

    #[test]
    fn bottom_right_maps_to_plus_one_minus_one() {
        let p = pixel_to_view(800.0, 600.0, 800, 600);
        assert_eq!(p, ViewPos::new(1.0, -1.0));
    }

    #[test]
    fn zero_sized_window_maps_to_origin() {
        assert_eq!(pixel_to_view(10.0, 10.0, 0, 600), ViewPos::ORIGIN);
    }

    #[test]
    fn one_notch_is_120() {
        assert_eq!(wheel_lines_to_delta(1.0), 120);
        assert_eq!(wheel_lines_to_delta(-2.0), -240);
    }

    #[test]
    fn pixel_wheel_rounds() {
        assert_eq!(wheel_pixels_to_delta(12.6), 13);
        assert_eq!(wheel_pixels_to_delta(-3.2), -3);
    }
}
