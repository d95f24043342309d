//! Rendering module
//!
//! Draws a read-only view of the simulation onto a [`Surface`]. Nothing here
//! mutates game state; expiry and physics happen in [`crate::sim::tick`].

pub mod banner;
pub mod scene;

pub use banner::{Banner, banner_layout};
pub use scene::draw;

use glam::Vec2;

/// Axis-aligned rectangle in surface coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// A 2D paint target (a canvas in the browser)
pub trait Surface {
    /// Image type accepted by [`Surface::draw_image`]
    type Image;

    fn width(&self) -> f32;
    fn height(&self) -> f32;
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect, color: &str);
    /// Draw text centered on `(x, y)`
    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: &str);
    /// Width of `text` in the surface's current font
    fn measure_text(&self, text: &str) -> f32;
    fn draw_image(&mut self, image: &Self::Image, rect: Rect);
}

/// Resolves sprite keys to drawable images.
///
/// Loading is asynchronous; `get` returns `None` until an image is ready, and
/// the renderer skips whatever isn't.
pub trait AssetStore {
    type Image;

    fn get(&self, key: &str) -> Option<&Self::Image>;
}
