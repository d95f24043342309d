//! Bins: fixed drop targets along the bottom edge

use super::category::Category;

/// A drop target. Bins tile the surface width in equal slices.
#[derive(Debug, Clone)]
pub struct Bin {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub category: Category,
    pub sprite: String,
}

impl Bin {
    pub fn new(category: Category, sprite: impl Into<String>, height: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height,
            category,
            sprite: sprite.into(),
        }
    }

    /// Keep the bottom edge flush with the surface bottom
    pub fn set_bottom_position(&mut self, surface_height: f32) {
        self.y = surface_height - self.height;
    }

    /// Place bin `index` of `count` across the surface.
    ///
    /// Edges are computed from the slice boundaries rather than accumulated
    /// widths, so neighbours share an edge exactly and the last bin ends on
    /// the surface edge.
    pub fn layout(&mut self, index: usize, count: usize, surface_width: f32, surface_height: f32) {
        let edge = |i: usize| {
            if i >= count {
                surface_width
            } else {
                surface_width * i as f32 / count as f32
            }
        };
        self.x = edge(index);
        self.width = edge(index + 1) - self.x;
        self.set_bottom_position(surface_height);
    }

    /// Horizontal extent as a half-open interval
    #[cfg(test)]
    pub fn span(&self) -> (f32, f32) {
        (self.x, self.x + self.width)
    }
}

/// Lay out every bin for the given surface size
pub fn layout_bins(bins: &mut [Bin], surface_width: f32, surface_height: f32) {
    let count = bins.len();
    for (index, bin) in bins.iter_mut().enumerate() {
        bin.layout(index, count, surface_width, surface_height);
    }
}
