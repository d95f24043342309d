//! Notification banner geometry

use glam::Vec2;

use super::Rect;
use crate::consts::{NOTIFICATION_HEIGHT, NOTIFICATION_PADDING};

pub const BANNER_FILL: &str = "rgba(0, 0, 0, 0.7)";
pub const BANNER_TEXT: &str = "#ffffff";

/// Where the banner box and its text go
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Banner {
    pub rect: Rect,
    /// Text anchor (the text is centered on it)
    pub text: Vec2,
}

/// Center a box sized to fit `text_width` plus padding on both sides
pub fn banner_layout(text_width: f32, surface: Vec2) -> Banner {
    let w = text_width + NOTIFICATION_PADDING * 2.0;
    let h = NOTIFICATION_HEIGHT;
    let rect = Rect::new((surface.x - w) / 2.0, (surface.y - h) / 2.0, w, h);
    Banner {
        rect,
        text: rect.center(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_fits_text_with_padding() {
        let banner = banner_layout(160.0, Vec2::new(800.0, 600.0));
        assert_eq!(banner.rect, Rect::new(300.0, 275.0, 200.0, 50.0));
        assert_eq!(banner.text, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_wide_text_overflows_symmetrically() {
        let banner = banner_layout(1000.0, Vec2::new(400.0, 300.0));
        assert_eq!(banner.rect.x, -320.0);
        assert_eq!(banner.rect.x + banner.rect.w, 720.0);
    }
}
