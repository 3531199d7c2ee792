//! Position-by-position record of how a burger compared against its recipe.

use crate::burger::AssembledBurger;
use crate::ingredient::IngredientId;
use crate::recipe::RecipeDefinition;
use itertools::{EitherOrBoth, Itertools};

mod formatter;

pub use formatter::TraceFormatter;

/// Outcome of comparing a single layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Match(IngredientId),
    Wrong {
        expected: IngredientId,
        found: IngredientId,
    },
    /// The recipe has a layer here but the burger ended.
    Missing(IngredientId),
    /// The burger has a layer the recipe does not ask for.
    Extra(IngredientId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonTrace {
    pub steps: Vec<Step>,
}

impl ComparisonTrace {
    pub fn compare(burger: &AssembledBurger, recipe: &RecipeDefinition) -> Self {
        let steps = recipe
            .required_ingredients()
            .iter()
            .zip_longest(burger.ingredients())
            .map(|pair| match pair {
                EitherOrBoth::Both(&expected, &found) if expected == found => Step::Match(found),
                EitherOrBoth::Both(&expected, &found) => Step::Wrong { expected, found },
                EitherOrBoth::Left(&expected) => Step::Missing(expected),
                EitherOrBoth::Right(&found) => Step::Extra(found),
            })
            .collect();
        Self { steps }
    }

    pub fn matches(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s, Step::Match(_)))
            .count()
    }

    /// Steps that cost the burger its exact match.
    pub fn mistakes(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter().filter(|s| !matches!(s, Step::Match(_)))
    }
}
