//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the burger_stack crate.
//!
//! # Example
//!
//! ```rust
//! use burger_stack::prelude::*;
//!
//! let book = RecipeBook::new(vec![RecipeDefinition::new(
//!     "Plain",
//!     vec![IngredientId::Bun, IngredientId::Patty, IngredientId::Bun],
//! )]);
//! let mut shift = Shift::new(book, GameConfig::default());
//!
//! for name in ["Bun", "Patty", "Bun"] {
//!     assert!(shift.drop_ingredient(name));
//! }
//!
//! let result = shift.submit(0, 12.0)?;
//! assert!(result.is_perfect);
//! # Ok::<(), burger_stack::error::ShiftError>(())
//! ```

// Core state and evaluation
pub use crate::burger::AssembledBurger;
pub use crate::evaluator::{CustomerMood, EvaluationResult, Evaluator, Feedback, SoundCue};
pub use crate::ingredient::{IngredientId, IngredientKind};
pub use crate::shift::Shift;
pub use crate::stack::{Placement, StackState, StackedItem, Stock};

// Recipes
pub use crate::recipe::{IntoRecipe, RawRecipe, RecipeBook, RecipeDefinition};

// Configuration
pub use crate::config::{EvaluationSettings, GameConfig, StackSettings, StockEntry};

// Error types
pub use crate::error::{ArtifactError, ConfigError, DropError, RecipeError, ShiftError};

// Trace formatting
pub use crate::trace::{ComparisonTrace, Step, TraceFormatter};
