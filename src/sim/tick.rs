//! Per-frame simulation step
//!
//! One call per animation frame, before rendering. Fall speed is per frame,
//! so the game runs faster on high refresh rate displays.

use super::state::Simulation;

/// Advance the simulation by one frame at time `now` (ms)
pub fn tick(sim: &mut Simulation, now: f64) {
    sim.notification.tick(now);

    let suspended = sim.fall_suspended();
    for item in &mut sim.items {
        item.update(suspended);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::consts::FALL_SPEED;
    use crate::sim::{Category, FallingItem};
    use glam::Vec2;

    #[test]
    fn test_tick_drops_free_items() {
        let mut sim = Simulation::new(GameConfig::default(), 400.0, 600.0, 11);
        let before: Vec<_> = sim.items.iter().map(|i| i.pos).collect();

        tick(&mut sim, 0.0);
        tick(&mut sim, 16.0);

        for (item, start) in sim.items.iter().zip(before) {
            assert_eq!(item.pos.x, start.x);
            assert!((item.pos.y - (start.y + 2.0 * FALL_SPEED)).abs() < 1e-4);
        }
    }

    /// Two organic items side by side at the top of a 400x600 surface
    fn two_items(freeze_while_dragging: bool) -> Simulation {
        let config = GameConfig {
            items: Vec::new(),
            freeze_while_dragging,
            ..GameConfig::default()
        };
        let mut sim = Simulation::new(config, 400.0, 600.0, 11);
        for x in [0.0, 200.0] {
            let id = sim.next_entity_id();
            sim.items.push(FallingItem::new(id, Category::Organic, "a.png", Vec2::new(x, 0.0)));
        }
        sim
    }

    #[test]
    fn test_held_item_does_not_fall() {
        let mut sim = two_items(false);
        sim.pointer_down(25.0, 25.0);
        tick(&mut sim, 0.0);
        assert_eq!(sim.items[0].pos.y, 0.0);
        assert_eq!(sim.items[1].pos.y, FALL_SPEED);
    }

    #[test]
    fn test_pause_freezes_everything() {
        let mut sim = Simulation::new(GameConfig::default(), 400.0, 600.0, 11);
        let before: Vec<_> = sim.items.iter().map(|i| i.pos).collect();
        sim.set_paused(true);
        tick(&mut sim, 0.0);
        let after: Vec<_> = sim.items.iter().map(|i| i.pos).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_freeze_while_dragging() {
        let mut sim = two_items(true);
        sim.pointer_down(25.0, 25.0);
        tick(&mut sim, 0.0);
        assert_eq!(sim.items[1].pos.y, 0.0);

        sim.pointer_up(25.0, 25.0, 0.0);
        tick(&mut sim, 16.0);
        assert_eq!(sim.items[1].pos.y, FALL_SPEED);
    }

    #[test]
    fn test_notification_expires_on_tick() {
        let mut sim = Simulation::new(GameConfig::default(), 400.0, 600.0, 11);
        sim.notification.show("hi", 100.0, 0.0);
        tick(&mut sim, 99.0);
        assert!(sim.notification.is_active);
        tick(&mut sim, 100.0);
        assert!(!sim.notification.is_active);
    }
}
