//! Tunables for evaluation, the drop area and the shift.
//!
//! Every field has a default matching the shipped level, so a config file only
//! needs to list the values it overrides:
//!
//! ```rust
//! use burger_stack::config::GameConfig;
//!
//! let config = GameConfig::from_json(r#"{ "evaluation": { "speed_bonus": 8 } }"#).unwrap();
//! assert_eq!(config.evaluation.speed_bonus, 8);
//! assert_eq!(config.evaluation.fast_time_threshold, 30.0);
//! ```

use crate::error::ConfigError;
use crate::ingredient::IngredientId;
use serde::{Deserialize, Serialize};
use std::fs;

/// Scoring rules applied by the evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationSettings {
    /// Orders finished within this many seconds earn the speed bonus.
    pub fast_time_threshold: f32,
    pub speed_bonus: i32,
    pub perfect_health_gain: f32,
    /// Applied when accuracy falls below `poor_accuracy`. Negative.
    pub poor_health_loss: f32,
    pub good_accuracy: f32,
    pub poor_accuracy: f32,
}

impl Default for EvaluationSettings {
    fn default() -> Self {
        Self {
            fast_time_threshold: 30.0,
            speed_bonus: 5,
            perfect_health_gain: 0.5,
            poor_health_loss: -1.0,
            good_accuracy: 0.7,
            poor_accuracy: 0.3,
        }
    }
}

/// Stock of one ingredient on the shelf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockEntry {
    pub ingredient: IngredientId,
    pub max_amount: u32,
}

/// Layout and inventory of the drop area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackSettings {
    /// Vertical distance between two stacked layers, in world units.
    pub stack_offset: f32,
    /// The ingredient whose count decides when a burger is closed.
    pub closing_ingredient: IngredientId,
    pub closing_count: usize,
    /// Refuse further drops once the burger is closed, until the stack is reset.
    pub lock_when_complete: bool,
    pub stock: Vec<StockEntry>,
}

impl Default for StackSettings {
    fn default() -> Self {
        let stock = IngredientId::ALL
            .iter()
            .map(|&ingredient| StockEntry {
                ingredient,
                max_amount: if ingredient.is_sauce() { 9999 } else { 10 },
            })
            .collect();

        Self {
            stack_offset: 0.15,
            closing_ingredient: IngredientId::Bun,
            closing_count: 3,
            lock_when_complete: true,
            stock,
        }
    }
}

/// Top-level configuration for a shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub initial_health: f32,
    pub evaluation: EvaluationSettings,
    pub stack: StackSettings,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_health: 3.0,
            evaluation: EvaluationSettings::default(),
            stack: StackSettings::default(),
        }
    }
}

impl GameConfig {
    /// Load a config from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse a config from JSON. Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values that would leave the drop area unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stack.closing_count == 0 {
            return Err(ConfigError::Invalid {
                field: "stack.closing_count",
                reason: "a burger needs at least one closing ingredient".to_string(),
            });
        }
        Ok(())
    }
}
