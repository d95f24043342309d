//! Falling items: the draggable entities the player sorts

use glam::Vec2;
use rand::Rng;

use super::category::Category;
use crate::consts::*;

/// A draggable item that falls toward the bins
#[derive(Debug, Clone)]
pub struct FallingItem {
    pub id: u32,
    /// Top-left corner in surface coordinates
    pub pos: Vec2,
    pub size: Vec2,
    pub category: Category,
    pub is_dragging: bool,
    /// Asset key, resolved by the renderer's asset store
    pub sprite: String,
    /// Units per frame
    pub fall_speed: f32,
}

impl FallingItem {
    pub fn new(id: u32, category: Category, sprite: impl Into<String>, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            size: Vec2::splat(ITEM_SIZE),
            category,
            is_dragging: false,
            sprite: sprite.into(),
            fall_speed: FALL_SPEED,
        }
    }

    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    pub fn with_fall_speed(mut self, fall_speed: f32) -> Self {
        self.fall_speed = fall_speed;
        self
    }

    /// Advance one frame of falling
    pub fn update(&mut self, fall_suspended: bool) {
        if !self.is_dragging && !fall_suspended {
            self.pos.y += self.fall_speed;
        }
    }

    /// Point-in-box test, exclusive on every edge
    pub fn hit_test(&self, px: f32, py: f32) -> bool {
        px > self.pos.x
            && px < self.pos.x + self.size.x
            && py > self.pos.y
            && py < self.pos.y + self.size.y
    }

    /// Move so the item is centered under the pointer (no clamping)
    pub fn center_on(&mut self, px: f32, py: f32) {
        self.pos = Vec2::new(px, py) - self.size / 2.0;
    }

    /// Y coordinate of the bottom edge
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Break a composite item into its parts, scattered around its position.
    ///
    /// Atomic items return an empty vec. Children inherit size and fall speed
    /// and take the default sprite of their category; `alloc_id` hands out ids.
    pub fn decompose<R: Rng>(
        &self,
        rng: &mut R,
        mut alloc_id: impl FnMut() -> u32,
    ) -> Vec<FallingItem> {
        self.category
            .parts()
            .iter()
            .map(|&category| {
                let jitter = Vec2::new(
                    rng.random_range(-DECOMPOSE_JITTER_X..=DECOMPOSE_JITTER_X),
                    rng.random_range(-DECOMPOSE_JITTER_Y..=DECOMPOSE_JITTER_Y),
                );
                FallingItem::new(alloc_id(), category, category.default_sprite(), self.pos + jitter)
                    .with_size(self.size)
                    .with_fall_speed(self.fall_speed)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn item_at(x: f32, y: f32, category: Category) -> FallingItem {
        FallingItem::new(1, category, category.default_sprite(), Vec2::new(x, y))
    }

    #[test]
    fn test_update_falls_unless_held_or_suspended() {
        let mut item = item_at(10.0, 20.0, Category::Organic);
        item.update(false);
        assert_eq!(item.pos, Vec2::new(10.0, 20.0 + FALL_SPEED));

        item.update(true);
        assert_eq!(item.pos.y, 20.0 + FALL_SPEED);

        item.is_dragging = true;
        item.update(false);
        assert_eq!(item.pos.y, 20.0 + FALL_SPEED);
    }

    #[test]
    fn test_hit_test_edges_are_exclusive() {
        let item = item_at(100.0, 100.0, Category::Battery);
        // Right and bottom edges
        assert!(!item.hit_test(150.0, 120.0));
        assert!(!item.hit_test(120.0, 150.0));
        // Left and top edges
        assert!(!item.hit_test(100.0, 120.0));
        assert!(!item.hit_test(120.0, 100.0));
        // One unit inside
        assert!(item.hit_test(149.0, 149.0));
        assert!(item.hit_test(101.0, 101.0));
    }

    #[test]
    fn test_center_on_is_unclamped() {
        let mut item = item_at(0.0, 0.0, Category::Liquid);
        item.center_on(-100.0, 5.0);
        assert_eq!(item.pos, Vec2::new(-125.0, -20.0));
    }

    #[test]
    fn test_atomic_items_do_not_decompose() {
        let mut rng = Pcg32::seed_from_u64(7);
        let item = item_at(0.0, 0.0, Category::Recyclable);
        assert!(item.decompose(&mut rng, || unreachable!()).is_empty());
    }

    #[test]
    fn test_vape_decomposes_into_three_parts() {
        let mut rng = Pcg32::seed_from_u64(7);
        let parent = item_at(200.0, 100.0, Category::CompositeVape);
        let mut next = 10;
        let parts = parent.decompose(&mut rng, || {
            next += 1;
            next
        });

        let categories: Vec<_> = parts.iter().map(|p| p.category).collect();
        assert_eq!(
            categories,
            vec![Category::Battery, Category::Recyclable, Category::Liquid]
        );
        let ids: Vec<_> = parts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![11, 12, 13]);
        assert!(parts.iter().all(|p| p.size == parent.size && !p.is_dragging));
    }

    proptest! {
        #[test]
        fn prop_hit_test_matches_open_box(
            x in -500.0f32..500.0,
            y in -500.0f32..500.0,
            px in -600.0f32..600.0,
            py in -600.0f32..600.0,
        ) {
            let item = item_at(x, y, Category::Organic);
            let inside = px > x && px < x + ITEM_SIZE && py > y && py < y + ITEM_SIZE;
            prop_assert_eq!(item.hit_test(px, py), inside);
        }

        #[test]
        fn prop_decompose_stays_within_jitter(
            seed in any::<u64>(),
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
        ) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let parent = item_at(x, y, Category::CompositeVape);
            let parts = parent.decompose(&mut rng, || 0);
            prop_assert_eq!(parts.len(), 3);
            for part in &parts {
                let offset = part.pos - parent.pos;
                prop_assert!(offset.x.abs() <= DECOMPOSE_JITTER_X + 1e-3);
                prop_assert!(offset.y.abs() <= DECOMPOSE_JITTER_Y + 1e-3);
            }
        }
    }
}
