//! Waste categories shared by items and bins

use serde::{Deserialize, Serialize};

/// Classification tag that decides which bin an item belongs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Organic,
    Battery,
    Recyclable,
    Liquid,
    /// Breaks into battery, recyclable and liquid parts on first pickup
    CompositeVape,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Organic,
        Category::Battery,
        Category::Recyclable,
        Category::Liquid,
        Category::CompositeVape,
    ];

    /// Name shown in notifications
    pub fn label(&self) -> &'static str {
        match self {
            Category::Organic => "organic",
            Category::Battery => "battery",
            Category::Recyclable => "recyclable",
            Category::Liquid => "liquid",
            Category::CompositeVape => "vape",
        }
    }

    /// Sprite used when an item of this category is spawned at runtime
    pub fn default_sprite(&self) -> &'static str {
        match self {
            Category::Organic => "images/organic.png",
            Category::Battery => "images/battery.png",
            Category::Recyclable => "images/recyclable.png",
            Category::Liquid => "images/liquid.png",
            Category::CompositeVape => "images/vape.png",
        }
    }

    /// Categories an item of this category breaks into (empty if atomic)
    pub fn parts(&self) -> &'static [Category] {
        match self {
            Category::CompositeVape => &[Category::Battery, Category::Recyclable, Category::Liquid],
            _ => &[],
        }
    }

    pub fn is_composite(&self) -> bool {
        !self.parts().is_empty()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_vape_is_composite() {
        for category in Category::ALL {
            assert_eq!(category.is_composite(), category == Category::CompositeVape);
        }
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let json = serde_json::to_string(&Category::CompositeVape).unwrap();
        assert_eq!(json, "\"compositeVape\"");
        let parsed: Category = serde_json::from_str("\"recyclable\"").unwrap();
        assert_eq!(parsed, Category::Recyclable);
    }
}
