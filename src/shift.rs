use crate::config::GameConfig;
use crate::error::ShiftError;
use crate::evaluator::{EvaluationResult, Evaluator};
use crate::recipe::RecipeBook;
use crate::stack::StackState;

/// A running play session: the level's menu, the drop area and the player's totals.
///
/// A host owns one `Shift`, forwards drops to it and calls [`Shift::submit`] when the
/// player serves a burger.
#[derive(Debug, Clone)]
pub struct Shift {
    book: RecipeBook,
    evaluator: Evaluator,
    stack: StackState,
    score: i64,
    health: f32,
    dialog: String,
    orders_served: u32,
    last_result: Option<EvaluationResult>,
}

impl Shift {
    pub fn new(book: RecipeBook, config: GameConfig) -> Self {
        Self {
            book,
            evaluator: Evaluator::new(config.evaluation),
            stack: StackState::new(config.stack),
            score: 0,
            health: config.initial_health,
            dialog: String::new(),
            orders_served: 0,
            last_result: None,
        }
    }

    /// Forwards a drop to the stack. See [`StackState::drop_ingredient`].
    pub fn drop_ingredient(&mut self, name: &str) -> bool {
        self.stack.drop_ingredient(name)
    }

    /// Serves the current stack as `order` and applies the outcome.
    ///
    /// On success the score, health and dialog are updated and the stack is cleared
    /// for the next order; stock is not restored. An unknown order leaves everything
    /// untouched.
    pub fn submit(
        &mut self,
        order: usize,
        elapsed_secs: f32,
    ) -> Result<EvaluationResult, ShiftError> {
        let Some(recipe) = self.book.get(order) else {
            tracing::warn!("Order {} submitted but the book has {} recipes", order, self.book.len());
            return Err(ShiftError::UnknownOrder {
                order,
                available: self.book.len(),
            });
        };

        let burger = self.stack.assembled();
        let result = self.evaluator.evaluate(&burger, recipe, elapsed_secs);

        self.score += i64::from(result.score);
        self.health += result.health_change;
        self.dialog = result.feedback.to_string();
        self.orders_served += 1;
        self.stack.reset();

        tracing::info!(
            "Served order {} ('{}'): score now {}, health {:.1}",
            order,
            recipe.name(),
            self.score,
            self.health
        );

        self.last_result = Some(result.clone());
        Ok(result)
    }

    /// Checks the current stack against `order` without serving it.
    pub fn is_perfect_burger(&self, order: usize) -> bool {
        self.book
            .get(order)
            .is_some_and(|recipe| self.stack.assembled().matches_recipe(recipe))
    }

    pub fn stack(&self) -> &StackState {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut StackState {
        &mut self.stack
    }

    pub fn book(&self) -> &RecipeBook {
        &self.book
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    /// The last thing the customer said.
    pub fn dialog(&self) -> &str {
        &self.dialog
    }

    pub fn orders_served(&self) -> u32 {
        self.orders_served
    }

    pub fn last_result(&self) -> Option<&EvaluationResult> {
        self.last_result.as_ref()
    }
}
