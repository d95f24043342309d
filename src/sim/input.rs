//! Pointer handling: Idle -> Dragging -> Idle
//!
//! At most one item is dragged at a time. Picking up a composite item breaks
//! it apart and cancels the drag, so the gesture never holds a removed item.

use glam::Vec2;

use super::disposal::{Disposal, classify};
use super::state::Simulation;

/// What a pointer press did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerDown {
    /// Nothing under the pointer (or a drag was already in progress)
    Nothing,
    /// Started dragging this item
    Grabbed(u32),
    /// A composite item was replaced by its parts; nothing is held
    BrokeApart { parent: u32, children: Vec<u32> },
}

impl Simulation {
    /// Press: pick up the topmost item under the pointer
    pub fn pointer_down(&mut self, px: f32, py: f32) -> PointerDown {
        self.pointer = Vec2::new(px, py);
        if self.dragged.is_some() {
            return PointerDown::Nothing;
        }

        let Some(index) = self.items.iter().rposition(|item| item.hit_test(px, py)) else {
            return PointerDown::Nothing;
        };

        if self.items[index].category.is_composite() {
            let parent = self.items.remove(index);
            let mut ids = Vec::with_capacity(parent.category.parts().len());
            for _ in parent.category.parts() {
                ids.push(self.next_entity_id());
            }
            let mut next = ids.iter().copied();
            let children = parent.decompose(&mut self.rng, || next.next().unwrap_or_default());
            log::info!(
                "Item {} ({}) broke into {} parts",
                parent.id,
                parent.category,
                children.len()
            );
            self.items.extend(children);
            return PointerDown::BrokeApart {
                parent: parent.id,
                children: ids,
            };
        }

        let item = &mut self.items[index];
        item.is_dragging = true;
        self.dragged = Some(item.id);
        log::debug!("Grabbed item {} ({})", item.id, item.category);
        PointerDown::Grabbed(item.id)
    }

    /// Move: keep the held item centered under the pointer
    pub fn pointer_move(&mut self, px: f32, py: f32) {
        self.pointer = Vec2::new(px, py);
        if let Some(id) = self.dragged {
            if let Some(item) = self.item_mut(id) {
                item.center_on(px, py);
            }
        }
    }

    /// Release: drop the held item and judge where it landed.
    ///
    /// Returns `None` when nothing was held.
    pub fn pointer_up(&mut self, px: f32, py: f32, now: f64) -> Option<Disposal> {
        self.pointer = Vec2::new(px, py);
        let id = self.dragged.take()?;
        let index = self.items.iter().position(|i| i.id == id)?;

        self.items[index].is_dragging = false;
        let outcome = classify(&self.items[index], &self.bins, self.surface.x);
        log::info!("Released item {id}: {outcome:?}");

        if let Some(message) = outcome.message() {
            self.notification.show(message, self.config.notification_ms, now);
        }
        if outcome.is_correct() && self.config.remove_on_correct_disposal {
            self.items.remove(index);
        }
        Some(outcome)
    }

    /// Drop an in-flight drag without judging it (e.g. the window lost focus)
    pub fn cancel_drag(&mut self) {
        if let Some(id) = self.dragged.take() {
            if let Some(item) = self.item_mut(id) {
                item.is_dragging = false;
            }
            log::debug!("Cancelled drag of item {id}");
        }
    }
}
