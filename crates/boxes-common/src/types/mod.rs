mod color;
mod input;

pub use color::*;
pub use input::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_from_hex_6() {
        let c = Color::from_hex("#ff8800").unwrap();
        assert_eq!(c, Color::from_rgba(255, 136, 0, 255));
    }

    #[test]
    fn color_from_hex_8() {
        let c = Color::from_hex("#ff880080").unwrap();
        assert_eq!(c, Color::from_rgba(255, 136, 0, 128));
    }

    #[test]
    fn color_from_hex_no_hash() {
        let c = Color::from_hex("00ff00").unwrap();
        assert_eq!(c, Color::from_rgba(0, 255, 0, 255));
    }

    #[test]
    fn color_from_hex_invalid() {
        assert!(Color::from_hex("zzzzzz").is_none());
        assert!(Color::from_hex("#abc").is_none());
        assert!(Color::from_hex("").is_none());
    }

    #[test]
    fn color_from_hex_rejects_non_ascii() {
        assert!(Color::from_hex("#ffé000").is_none());
    }

    #[test]
    fn color_normalized_channels() {
        let c = Color::from_rgba(255, 0, 51, 255);
        let [r, g, b, a] = c.to_rgba_f32();
        assert!((r - 1.0).abs() < 1e-6);
        assert!(g.abs() < 1e-6);
        assert!((b - 0.2).abs() < 1e-6);
        assert!((a - 1.0).abs() < 1e-6);
    }

    #[test]
    fn pointer_buttons_mask() {
        let b = PointerButtons::LEFT.union(PointerButtons::MIDDLE);
        assert!(b.left);
        assert!(!b.right);
        assert!(b.middle);
        assert!(!PointerButtons::NONE.any());
        assert!(b.any());
    }

    #[test]
    fn nudge_direction_units() {
        assert_eq!(NudgeDirection::Up.unit(), (0.0, 1.0));
        assert_eq!(NudgeDirection::Down.unit(), (0.0, -1.0));
        assert_eq!(NudgeDirection::Left.unit(), (-1.0, 0.0));
        assert_eq!(NudgeDirection::Right.unit(), (1.0, 0.0));
    }
}
