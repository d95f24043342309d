//! Simulation state
//!
//! Owns every item and bin, the pointer position, the drag reference and the
//! notification banner. Pointer handling lives in `input.rs`, the per-frame
//! step in `tick.rs`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::bin::{Bin, layout_bins};
use super::item::FallingItem;
use super::notification::Notification;
use crate::config::GameConfig;
use crate::consts::*;

/// The whole game world
#[derive(Debug, Clone)]
pub struct Simulation {
    pub config: GameConfig,
    /// Draw order; the last item is on top
    pub items: Vec<FallingItem>,
    /// Left to right
    pub bins: Vec<Bin>,
    pub notification: Notification,
    /// Last known pointer position
    pub pointer: Vec2,
    /// Surface width and height
    pub surface: Vec2,
    /// Host-driven pause (hidden tab, lost focus)
    pub paused: bool,
    /// Item currently held by the pointer
    pub(crate) dragged: Option<u32>,
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl Simulation {
    /// Build the world and scatter the configured items across the top of the surface
    pub fn new(config: GameConfig, width: f32, height: f32, seed: u64) -> Self {
        let bins = config
            .bins
            .iter()
            .map(|b| Bin::new(b.category, b.sprite.clone(), b.height))
            .collect();

        let mut sim = Self {
            config,
            items: Vec::new(),
            bins,
            notification: Notification::new(),
            pointer: Vec2::ZERO,
            surface: Vec2::new(width, height),
            paused: false,
            dragged: None,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        };
        layout_bins(&mut sim.bins, width, height);
        sim.scatter_items();
        sim
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn item_size(&self) -> Vec2 {
        Vec2::new(self.config.item_size.0, self.config.item_size.1)
    }

    fn scatter_items(&mut self) {
        let size = self.item_size();
        let max_x = (self.surface.x - size.x).max(0.0);
        let max_y = (self.surface.y * SCATTER_HEIGHT_FRACTION).max(0.0);

        let entries = self.config.items.clone();
        for entry in entries {
            let pos = Vec2::new(
                self.rng.random_range(0.0..=max_x),
                self.rng.random_range(0.0..=max_y),
            );
            let id = self.next_entity_id();
            let item = FallingItem::new(id, entry.category, entry.sprite, pos)
                .with_size(size)
                .with_fall_speed(self.config.fall_speed);
            self.items.push(item);
        }
        log::debug!("Scattered {} items", self.items.len());
    }

    /// Relayout bins for a new surface size. Safe to call any number of times.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.surface = Vec2::new(width, height);
        layout_bins(&mut self.bins, width, height);
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            log::info!("{}", if paused { "Paused" } else { "Resumed" });
        }
        self.paused = paused;
    }

    /// Items in draw order (last is on top)
    pub fn items(&self) -> &[FallingItem] {
        &self.items
    }

    /// Bins left to right
    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    /// Last known pointer position
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// ID of the item being dragged, if any
    pub fn dragged(&self) -> Option<u32> {
        self.dragged
    }

    pub fn is_dragging(&self) -> bool {
        self.dragged.is_some()
    }

    pub fn item(&self, id: u32) -> Option<&FallingItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn item_mut(&mut self, id: u32) -> Option<&mut FallingItem> {
        self.items.iter_mut().find(|i| i.id == id)
    }

    /// Whether items should hold still this frame
    pub fn fall_suspended(&self) -> bool {
        self.paused || (self.config.freeze_while_dragging && self.is_dragging())
    }
}
