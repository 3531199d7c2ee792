use crate::ingredient::IngredientId;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PERFECT_SCORE: i32 = 20;
pub const DEFAULT_GOOD_SCORE: i32 = 10;
pub const DEFAULT_POOR_SCORE: i32 = -5;

/// The target a customer orders: an ordered ingredient list plus the points it pays out.
///
/// Recipes are immutable once built; use [`RecipeDefinition::builder`] to author one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDefinition {
    name: String,
    order_text: String,
    required_ingredients: Vec<IngredientId>,
    perfect_score: i32,
    good_score: i32,
    poor_score: i32,
}

impl RecipeDefinition {
    /// Creates a recipe with the default score table.
    pub fn new(name: impl Into<String>, required_ingredients: Vec<IngredientId>) -> Self {
        Self::builder(name, required_ingredients).build()
    }

    pub fn builder(
        name: impl Into<String>,
        required_ingredients: Vec<IngredientId>,
    ) -> RecipeBuilder {
        RecipeBuilder::new(name.into(), required_ingredients)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The line the customer says when placing the order.
    pub fn order_text(&self) -> &str {
        &self.order_text
    }

    pub fn required_ingredients(&self) -> &[IngredientId] {
        &self.required_ingredients
    }

    pub fn perfect_score(&self) -> i32 {
        self.perfect_score
    }

    pub fn good_score(&self) -> i32 {
        self.good_score
    }

    pub fn poor_score(&self) -> i32 {
        self.poor_score
    }
}

/// Builder for [`RecipeDefinition`].
pub struct RecipeBuilder {
    recipe: RecipeDefinition,
}

impl RecipeBuilder {
    fn new(name: String, required_ingredients: Vec<IngredientId>) -> Self {
        Self {
            recipe: RecipeDefinition {
                name,
                order_text: String::new(),
                required_ingredients,
                perfect_score: DEFAULT_PERFECT_SCORE,
                good_score: DEFAULT_GOOD_SCORE,
                poor_score: DEFAULT_POOR_SCORE,
            },
        }
    }

    pub fn with_order_text(mut self, text: impl Into<String>) -> Self {
        self.recipe.order_text = text.into();
        self
    }

    pub fn with_scores(mut self, perfect: i32, good: i32, poor: i32) -> Self {
        self.recipe.perfect_score = perfect;
        self.recipe.good_score = good;
        self.recipe.poor_score = poor;
        self
    }

    pub fn build(self) -> RecipeDefinition {
        self.recipe
    }
}
