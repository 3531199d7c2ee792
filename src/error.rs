use crate::ingredient::IngredientId;
use thiserror::Error;

/// Reasons the drop area can refuse an ingredient.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DropError {
    #[error("Ingredient '{0}' is not known to the drop area")]
    UnknownIngredient(String),

    #[error("Ingredient '{0}' is out of stock")]
    OutOfStock(IngredientId),

    #[error("The burger is already closed; reset the stack before dropping '{0}'")]
    BurgerSealed(IngredientId),
}

/// Errors that can occur when converting an authored recipe into a `RecipeDefinition`.
#[derive(Error, Debug, Clone)]
pub enum RecipeError {
    #[error("Recipe '{recipe}' references unknown ingredient '{name}'")]
    UnknownIngredient { recipe: String, name: String },

    #[error("Recipe '{0}' does not list any ingredients")]
    Empty(String),

    #[error("Failed to parse recipe JSON: {0}")]
    Json(String),
}

/// Errors raised while persisting or loading a recipe book artifact.
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Could not access '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization failed: {0}")]
    Encode(String),

    #[error("Deserialization failed: {0}")]
    Decode(String),
}

/// Errors raised while loading a `GameConfig`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Errors that can occur while running a shift of orders.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShiftError {
    #[error("Order {order} does not exist; the recipe book only has {available} recipes")]
    UnknownOrder { order: usize, available: usize },
}
