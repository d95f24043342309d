//! Game configuration
//!
//! The starting item table, the bin table and a few tunables. Shipped as
//! `assets/config.json` and parsed at startup; [`GameConfig::default`] is the
//! fallback when that fails.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::Category;

/// Errors raised while loading a config
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("config must define at least one bin")]
    NoBins,
    #[error("bin {index} has non-positive height {height}")]
    InvalidBinHeight { index: usize, height: f32 },
    #[error("item size must be positive, got {width}x{height}")]
    InvalidItemSize { width: f32, height: f32 },
}

/// One entry of the starting item table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemConfig {
    pub sprite: String,
    pub category: Category,
}

impl ItemConfig {
    pub fn new(sprite: &str, category: Category) -> Self {
        Self {
            sprite: sprite.to_string(),
            category,
        }
    }
}

/// One entry of the bin table, left to right
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinConfig {
    pub sprite: String,
    pub category: Category,
    #[serde(default = "default_bin_height")]
    pub height: f32,
}

fn default_bin_height() -> f32 {
    BIN_HEIGHT
}

impl BinConfig {
    pub fn new(sprite: &str, category: Category) -> Self {
        Self {
            sprite: sprite.to_string(),
            category,
            height: BIN_HEIGHT,
        }
    }
}

/// Everything the simulation needs besides the surface size and a seed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub items: Vec<ItemConfig>,
    pub bins: Vec<BinConfig>,
    /// Item width and height
    pub item_size: (f32, f32),
    /// Units per frame
    pub fall_speed: f32,
    /// How long disposal feedback stays on screen (ms)
    pub notification_ms: f64,
    /// Drop items from play once they land in the right bin
    pub remove_on_correct_disposal: bool,
    /// Stop everything falling while an item is held
    pub freeze_while_dragging: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            items: vec![
                ItemConfig::new("images/banana.png", Category::Organic),
                ItemConfig::new("images/apple.png", Category::Organic),
                ItemConfig::new("images/battery.png", Category::Battery),
                ItemConfig::new("images/can.png", Category::Recyclable),
                ItemConfig::new("images/bottle.png", Category::Recyclable),
                ItemConfig::new("images/juice.png", Category::Liquid),
                ItemConfig::new("images/vape.png", Category::CompositeVape),
            ],
            bins: vec![
                BinConfig::new("images/bin_organic.png", Category::Organic),
                BinConfig::new("images/bin_battery.png", Category::Battery),
                BinConfig::new("images/bin_recyclable.png", Category::Recyclable),
                BinConfig::new("images/bin_liquid.png", Category::Liquid),
            ],
            item_size: (ITEM_SIZE, ITEM_SIZE),
            fall_speed: FALL_SPEED,
            notification_ms: NOTIFICATION_MS,
            remove_on_correct_disposal: false,
            freeze_while_dragging: false,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bins.is_empty() {
            return Err(ConfigError::NoBins);
        }
        if let Some((index, bin)) = self.bins.iter().enumerate().find(|(_, b)| b.height <= 0.0) {
            return Err(ConfigError::InvalidBinHeight {
                index,
                height: bin.height,
            });
        }
        let (width, height) = self.item_size;
        if width <= 0.0 || height <= 0.0 {
            return Err(ConfigError::InvalidItemSize { width, height });
        }
        Ok(())
    }

    /// Load the config, logging and falling back to defaults on error
    pub fn load_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(config) => {
                log::info!(
                    "Loaded config: {} items, {} bins",
                    config.items.len(),
                    config.bins.len()
                );
                config
            }
            Err(e) => {
                log::warn!("Using default config: {e}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json(
            r#"{
                "bins": [
                    { "sprite": "a.png", "category": "organic" },
                    { "sprite": "b.png", "category": "liquid", "height": 80 }
                ],
                "remove_on_correct_disposal": true
            }"#,
        )
        .unwrap();

        assert_eq!(config.bins.len(), 2);
        assert_eq!(config.bins[0].height, BIN_HEIGHT);
        assert_eq!(config.bins[1].height, 80.0);
        assert!(config.remove_on_correct_disposal);
        assert_eq!(config.fall_speed, FALL_SPEED);
        assert_eq!(config.items, GameConfig::default().items);
    }

    #[test]
    fn test_rejects_empty_bins() {
        let err = GameConfig::from_json(r#"{ "bins": [] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::NoBins));
    }

    #[test]
    fn test_rejects_bad_sizes() {
        let err = GameConfig::from_json(
            r#"{ "bins": [{ "sprite": "a.png", "category": "battery", "height": 0 }] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBinHeight { index: 0, .. }));

        let err = GameConfig::from_json(r#"{ "item_size": [50, -1] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidItemSize { .. }));
    }

    #[test]
    fn test_unknown_category_is_parse_error() {
        let err = GameConfig::from_json(
            r#"{ "items": [{ "sprite": "x.png", "category": "glass" }] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let config = GameConfig::load_or_default("not json");
        assert_eq!(config.bins.len(), GameConfig::default().bins.len());
    }

    #[test]
    fn test_shipped_config_parses() {
        let config = GameConfig::from_json(include_str!("../assets/config.json")).unwrap();
        assert_eq!(config.bins.len(), 4);
        assert!(config.items.iter().any(|i| i.category.is_composite()));
    }
}
