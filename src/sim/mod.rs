//! Game simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! - Pointer events come in as surface coordinates
//! - Time comes in as a millisecond timestamp
//! - Randomness comes from a seeded RNG

pub mod bin;
pub mod category;
pub mod disposal;
pub mod input;
pub mod item;
pub mod notification;
pub mod state;
pub mod tick;

pub use bin::{Bin, layout_bins};
pub use category::Category;
pub use disposal::{Disposal, classify};
pub use input::PointerDown;
pub use item::FallingItem;
pub use notification::Notification;
pub use state::Simulation;
pub use tick::tick;
