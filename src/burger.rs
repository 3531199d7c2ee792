use crate::ingredient::IngredientId;
use crate::recipe::RecipeDefinition;
use serde::{Deserialize, Serialize};

/// The ordered sequence of ingredients a player has stacked for one order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssembledBurger {
    ingredients: Vec<IngredientId>,
}

impl AssembledBurger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_ingredient(&mut self, ingredient: IngredientId) {
        self.ingredients.push(ingredient);
    }

    pub fn clear(&mut self) {
        self.ingredients.clear();
    }

    pub fn ingredients(&self) -> &[IngredientId] {
        &self.ingredients
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    /// True when the burger has the same ingredients as the recipe in the same order.
    ///
    /// An empty recipe never matches, not even an empty burger.
    pub fn matches_recipe(&self, recipe: &RecipeDefinition) -> bool {
        let required = recipe.required_ingredients();
        !required.is_empty() && self.ingredients.as_slice() == required
    }

    /// Fraction of recipe positions whose ingredient sits at the same index in the burger.
    ///
    /// Only the overlapping prefix is compared and the count is divided by the recipe
    /// length: missing layers cost accuracy, surplus layers only break an exact match.
    pub fn accuracy(&self, recipe: &RecipeDefinition) -> f32 {
        let required = recipe.required_ingredients();
        if required.is_empty() {
            return 0.0;
        }

        let correct = self
            .ingredients
            .iter()
            .zip(required)
            .filter(|(have, want)| have == want)
            .count();

        correct as f32 / required.len() as f32
    }
}

impl From<Vec<IngredientId>> for AssembledBurger {
    fn from(ingredients: Vec<IngredientId>) -> Self {
        Self { ingredients }
    }
}

impl FromIterator<IngredientId> for AssembledBurger {
    fn from_iter<I: IntoIterator<Item = IngredientId>>(iter: I) -> Self {
        Self {
            ingredients: iter.into_iter().collect(),
        }
    }
}
