//! Full-frame drawing: items, then bins, then the notification banner

use glam::Vec2;

use super::banner::{BANNER_FILL, BANNER_TEXT, banner_layout};
use super::{AssetStore, Rect, Surface};
use crate::sim::Simulation;

/// Draw one frame. Sprites that haven't loaded are skipped.
pub fn draw<S, A>(sim: &Simulation, surface: &mut S, assets: &A, now: f64)
where
    S: Surface,
    A: AssetStore<Image = S::Image>,
{
    surface.clear();

    for item in sim.items() {
        if let Some(image) = assets.get(&item.sprite) {
            surface.draw_image(image, Rect::from_pos_size(item.pos, item.size));
        }
    }

    for bin in sim.bins() {
        if let Some(image) = assets.get(&bin.sprite) {
            surface.draw_image(image, Rect::new(bin.x, bin.y, bin.width, bin.height));
        }
    }

    let note = sim.notification();
    if note.is_visible(now) {
        let size = Vec2::new(surface.width(), surface.height());
        let banner = banner_layout(surface.measure_text(&note.message), size);
        surface.fill_rect(banner.rect, BANNER_FILL);
        surface.fill_text(&note.message, banner.text.x, banner.text.y, BANNER_TEXT);
    }
}
