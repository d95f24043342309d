//! Disposal check run once when a dragged item is released

use super::bin::Bin;
use super::category::Category;
use super::item::FallingItem;

/// Outcome of releasing an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposal {
    /// Dropped into the bin of its own category
    Correct { category: Category },
    /// Dropped into another category's bin
    Mismatch { item: Category, bin: Category },
    /// Released outside every bin's horizontal range
    Missed,
    /// Above a bin but not low enough to count; no feedback
    NotReached,
}

impl Disposal {
    /// Player-facing message, `None` for a silent outcome
    pub fn message(&self) -> Option<String> {
        match self {
            Disposal::Correct { category } => Some(format!("Correctly disposed of {category}!")),
            Disposal::Mismatch { item, bin } => {
                Some(format!("Oops! {item} doesn't belong in the {bin} bin."))
            }
            Disposal::Missed => Some("Missed! Drop items into a bin.".to_string()),
            Disposal::NotReached => None,
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, Disposal::Correct { .. })
    }
}

/// Classify a release. The bin is picked by the item's left edge.
pub fn classify(item: &FallingItem, bins: &[Bin], surface_width: f32) -> Disposal {
    let bin_width = surface_width / bins.len() as f32;
    let index = (item.pos.x / bin_width).floor();

    // Zero-width surfaces and empty bin lists produce NaN/inf here
    if !index.is_finite() || index < 0.0 || index >= bins.len() as f32 {
        return Disposal::Missed;
    }
    let bin = &bins[index as usize];

    if item.bottom() < bin.y {
        return Disposal::NotReached;
    }
    if item.category == bin.category {
        Disposal::Correct {
            category: item.category,
        }
    } else {
        Disposal::Mismatch {
            item: item.category,
            bin: bin.category,
        }
    }
}
