//! # burger-stack - Burger Assembly and Evaluation Core
//!
//! **burger-stack** holds the game rules of a burger-assembly minigame. Players drag
//! ingredients onto a drop area, the pile is compared against the customer's recipe,
//! and the result pays out score and health and picks what the customer says.
//!
//! Rendering, input, audio and scene management stay in the host. The host hands the
//! core plain data (ingredient names, elapsed time) and gets plain data back.
//!
//! ## Core Workflow
//!
//! 1.  **Load Your Recipes**: Parse a JSON menu with `RecipeBook::from_json`, or implement
//!     `IntoRecipe` for your own asset format.
//! 2.  **Start a Shift**: Create a `Shift` with the book and a `GameConfig`.
//! 3.  **Forward Drops**: Call `Shift::drop_ingredient` for every sprite that lands on the
//!     drop area. Rejected drops return `false` and change nothing.
//! 4.  **Serve**: Call `Shift::submit` with the order number and elapsed time. The returned
//!     `EvaluationResult` tells the host which score, face and sound to show.
//!
//! ## Quick Start
//!
//! ```rust
//! use burger_stack::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let menu = r#"[
//!         { "name": "Cheeseburger", "requiredIngredients": ["Bun", "Patty", "Cheese", "Bun"] }
//!     ]"#;
//!     let book = RecipeBook::from_json(menu)?;
//!     let mut shift = Shift::new(book, GameConfig::default());
//!
//!     // Lettuce where the patty should be: three of four layers are right.
//!     for name in ["Bun", "Lettuce", "Cheese", "Bun"] {
//!         shift.drop_ingredient(name);
//!     }
//!
//!     let result = shift.submit(0, 45.0)?;
//!     assert_eq!(result.accuracy, 0.75);
//!     assert_eq!(result.score, 10);
//!     println!("{} ({})", result.feedback, result.reason);
//!     Ok(())
//! }
//! ```
//!
//! The lower-level pieces can be used on their own: `StackState` for the drop area,
//! `Evaluator::evaluate` for scoring any `AssembledBurger` against any `RecipeDefinition`.

pub mod burger;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod ingredient;
pub mod prelude;
pub mod recipe;
pub mod shift;
pub mod stack;
pub mod trace;

#[cfg(feature = "python-bindings")]
mod python;
