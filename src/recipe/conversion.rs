use super::definition::{
    DEFAULT_GOOD_SCORE, DEFAULT_PERFECT_SCORE, DEFAULT_POOR_SCORE, RecipeDefinition,
};
use crate::error::RecipeError;
use crate::ingredient::IngredientId;
use serde::{Deserialize, Serialize};

/// A trait for authored recipe formats that can be converted into a `RecipeDefinition`.
///
/// Level data can live in whatever shape the host's asset pipeline prefers. Implement
/// this trait on that shape to hand it to the evaluator.
///
/// # Example
///
/// ```rust
/// use burger_stack::prelude::*;
/// use burger_stack::error::RecipeError;
///
/// struct Line(&'static str);
///
/// impl IntoRecipe for Line {
///     fn into_recipe(self) -> Result<RecipeDefinition, RecipeError> {
///         let ingredients = self
///             .0
///             .split('>')
///             .map(|name| {
///                 IngredientId::lookup(name).ok_or_else(|| RecipeError::UnknownIngredient {
///                     recipe: self.0.to_string(),
///                     name: name.to_string(),
///                 })
///             })
///             .collect::<Result<Vec<_>, _>>()?;
///         Ok(RecipeDefinition::new(self.0, ingredients))
///     }
/// }
///
/// let recipe = Line("Bun>Patty>Bun").into_recipe().unwrap();
/// assert_eq!(recipe.required_ingredients().len(), 3);
/// ```
pub trait IntoRecipe {
    /// Consumes the object and converts it into a recipe the evaluator understands.
    fn into_recipe(self) -> Result<RecipeDefinition, RecipeError>;
}

impl IntoRecipe for RecipeDefinition {
    fn into_recipe(self) -> Result<RecipeDefinition, RecipeError> {
        Ok(self)
    }
}

/// The JSON authoring format for a single recipe.
///
/// Ingredient names go through the ingredient lookup table, so legacy sprite
/// names such as `Ketchup2` are accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecipe {
    #[serde(alias = "burgerName")]
    pub name: String,
    #[serde(default, alias = "orderText")]
    pub order_text: String,
    #[serde(alias = "requiredIngredients")]
    pub required_ingredients: Vec<String>,
    #[serde(default = "default_perfect", alias = "perfectScore")]
    pub perfect_score: i32,
    #[serde(default = "default_good", alias = "goodScore")]
    pub good_score: i32,
    #[serde(default = "default_poor", alias = "poorScore")]
    pub poor_score: i32,
}

fn default_perfect() -> i32 {
    DEFAULT_PERFECT_SCORE
}

fn default_good() -> i32 {
    DEFAULT_GOOD_SCORE
}

fn default_poor() -> i32 {
    DEFAULT_POOR_SCORE
}

impl IntoRecipe for RawRecipe {
    fn into_recipe(self) -> Result<RecipeDefinition, RecipeError> {
        if self.required_ingredients.is_empty() {
            return Err(RecipeError::Empty(self.name));
        }

        let ingredients = self
            .required_ingredients
            .iter()
            .map(|name| {
                IngredientId::lookup(name).ok_or_else(|| RecipeError::UnknownIngredient {
                    recipe: self.name.clone(),
                    name: name.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RecipeDefinition::builder(self.name, ingredients)
            .with_order_text(self.order_text)
            .with_scores(self.perfect_score, self.good_score, self.poor_score)
            .build())
    }
}
