use crate::burger::AssembledBurger;
use crate::config::EvaluationSettings;
use crate::recipe::RecipeDefinition;
use crate::trace::{ComparisonTrace, TraceFormatter};

mod feedback;

pub use feedback::{CustomerMood, Feedback, SoundCue};

/// The result of serving one burger.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationResult {
    /// Same ingredients as the recipe, in the same order.
    pub is_perfect: bool,
    /// Share of recipe layers placed correctly, in `[0, 1]`.
    pub accuracy: f32,
    /// Points earned, including any speed bonus.
    pub score: i32,
    /// Points before the speed bonus.
    pub base_score: i32,
    pub speed_bonus_applied: bool,
    pub health_change: f32,
    pub feedback: Feedback,
    pub mood: CustomerMood,
    pub sound_cue: SoundCue,
    /// A human-readable breakdown of the comparison.
    pub reason: String,
}

/// Scores assembled burgers against recipes.
///
/// Evaluation is a pure function of its inputs; an `Evaluator` only carries the
/// scoring rules and can be reused for every order of a shift.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    settings: EvaluationSettings,
}

impl Evaluator {
    pub fn new(settings: EvaluationSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &EvaluationSettings {
        &self.settings
    }

    /// Compares `burger` against `recipe` and computes score, health change and feedback.
    ///
    /// # Arguments
    ///
    /// * `burger`: The stacked ingredients, bottom layer first.
    /// * `recipe`: The order being served.
    /// * `elapsed_secs`: Time the player took, measured by the host.
    pub fn evaluate(
        &self,
        burger: &AssembledBurger,
        recipe: &RecipeDefinition,
        elapsed_secs: f32,
    ) -> EvaluationResult {
        let s = &self.settings;

        let accuracy = burger.accuracy(recipe);
        let is_perfect = burger.matches_recipe(recipe);
        let is_good = accuracy >= s.good_accuracy;
        let is_fast = elapsed_secs <= s.fast_time_threshold;

        let base_score = if is_perfect {
            recipe.perfect_score()
        } else if is_good {
            recipe.good_score()
        } else {
            recipe.poor_score()
        };

        let speed_bonus_applied = is_fast && base_score > 0;
        let score = if speed_bonus_applied {
            base_score.saturating_add(s.speed_bonus)
        } else {
            base_score
        };

        let health_change = if is_perfect {
            s.perfect_health_gain
        } else if accuracy < s.poor_accuracy {
            s.poor_health_loss
        } else {
            0.0
        };

        let mood = if is_perfect || is_good {
            CustomerMood::Happy
        } else if accuracy >= s.poor_accuracy {
            CustomerMood::Normal
        } else {
            CustomerMood::Sad
        };

        let sound_cue = if score > 0 {
            SoundCue::Score
        } else {
            SoundCue::LostHealth
        };

        let trace = ComparisonTrace::compare(burger, recipe);
        let reason = TraceFormatter::format_trace(&trace);

        tracing::info!(
            "Evaluated '{}': accuracy {:.2}, perfect {}, score {} ({:.1}s)",
            recipe.name(),
            accuracy,
            is_perfect,
            score,
            elapsed_secs
        );

        EvaluationResult {
            is_perfect,
            accuracy,
            score,
            base_score,
            speed_bonus_applied,
            health_change,
            feedback: Feedback::select(is_perfect, is_good, is_fast),
            mood,
            sound_cue,
            reason,
        }
    }
}
