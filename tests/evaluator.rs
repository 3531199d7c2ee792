//! Tests for recipe matching and scoring.
mod common;
use burger_stack::prelude::*;
use common::*;

use burger_stack::ingredient::IngredientId::*;

#[test]
fn test_perfect_and_fast() {
    let evaluator = Evaluator::default();
    let recipe = plain_recipe();

    let result = evaluator.evaluate(&burger(&[Bun, Patty, Bun]), &recipe, 20.0);

    assert!(result.is_perfect);
    assert_eq!(result.accuracy, 1.0);
    assert_eq!(result.base_score, 20);
    assert!(result.speed_bonus_applied);
    assert_eq!(result.score, 25);
    assert_eq!(result.health_change, 0.5);
    assert_eq!(result.feedback.as_str(), "Perfect and fast! Outstanding!");
    assert_eq!(result.mood, CustomerMood::Happy);
    assert_eq!(result.sound_cue, SoundCue::Score);
}

#[test]
fn test_perfect_but_slow() {
    let evaluator = Evaluator::default();
    let result = evaluator.evaluate(&burger(&[Bun, Patty, Bun]), &plain_recipe(), 31.0);

    assert!(result.is_perfect);
    assert_eq!(result.score, 20);
    assert!(!result.speed_bonus_applied);
    assert_eq!(
        result.feedback.to_string(),
        "Perfect burger! Customer is delighted!"
    );
}

#[test]
fn test_speed_threshold_is_inclusive() {
    let evaluator = Evaluator::default();
    let result = evaluator.evaluate(&burger(&[Bun, Patty, Bun]), &plain_recipe(), 30.0);
    assert_eq!(result.score, 25);
    assert_eq!(result.feedback, Feedback::PerfectAndFast);
}

#[test]
fn test_one_wrong_layer_is_good() {
    let evaluator = Evaluator::default();
    let result = evaluator.evaluate(&burger(&[Bun, Lettuce, Cheese, Bun]), &cheese_recipe(), 40.0);

    assert!(!result.is_perfect);
    assert_eq!(result.accuracy, 0.75);
    assert_eq!(result.score, 10);
    assert_eq!(result.health_change, 0.0);
    assert_eq!(result.feedback.as_str(), "Good job! Customer is satisfied.");
    assert_eq!(result.mood, CustomerMood::Happy);
    assert_eq!(result.reason, "Bun ✓, Patty ✗ (got Lettuce), Cheese ✓, Bun ✓");
}

#[test]
fn test_good_burger_made_fast_gets_bonus() {
    let evaluator = Evaluator::default();
    let result = evaluator.evaluate(&burger(&[Bun, Lettuce, Cheese, Bun]), &cheese_recipe(), 10.0);

    assert_eq!(result.score, 15);
    // Speed only changes the line for perfect burgers.
    assert_eq!(result.feedback, Feedback::Good);
}

#[test]
fn test_completely_wrong_burger() {
    let evaluator = Evaluator::default();
    let recipe = RecipeDefinition::new("Tiny", vec![Bun, Patty]);
    let result = evaluator.evaluate(&burger(&[Lettuce, Tomato]), &recipe, 5.0);

    assert_eq!(result.accuracy, 0.0);
    assert_eq!(result.score, -5);
    assert!(!result.speed_bonus_applied);
    assert_eq!(result.health_change, -1.0);
    assert_eq!(result.feedback.as_str(), "Customer is disappointed...");
    assert_eq!(result.mood, CustomerMood::Sad);
    assert_eq!(result.sound_cue, SoundCue::LostHealth);
}

#[test]
fn test_middling_accuracy_keeps_health() {
    let evaluator = Evaluator::default();
    // Two of four layers right: poor score, but above the health-loss line.
    let result = evaluator.evaluate(&burger(&[Bun, Lettuce, Tomato, Bun]), &cheese_recipe(), 50.0);

    assert_eq!(result.accuracy, 0.5);
    assert_eq!(result.score, -5);
    assert_eq!(result.health_change, 0.0);
    assert_eq!(result.mood, CustomerMood::Normal);
    assert_eq!(result.feedback, Feedback::Disappointed);
}

#[test]
fn test_short_burger_counts_against_recipe_length() {
    let evaluator = Evaluator::default();
    let result = evaluator.evaluate(&burger(&[Bun, Patty]), &cheese_recipe(), 50.0);

    assert_eq!(result.accuracy, 0.5);
    assert!(!result.is_perfect);
    assert_eq!(
        result.reason,
        "Bun ✓, Patty ✓, Cheese ✗ (missing), Bun ✗ (missing)"
    );
}

#[test]
fn test_extra_layers_break_exact_match_only() {
    let evaluator = Evaluator::default();
    let result = evaluator.evaluate(&burger(&[Bun, Patty, Bun, Onion]), &plain_recipe(), 50.0);

    assert_eq!(result.accuracy, 1.0);
    assert!(!result.is_perfect);
    assert_eq!(result.score, 10);
    assert_eq!(result.health_change, 0.0);
    assert!(result.reason.ends_with("+Onion (extra)"));
}

#[test]
fn test_empty_recipe_never_matches() {
    let evaluator = Evaluator::default();
    let recipe = RecipeDefinition::new("Air", vec![]);

    let empty = evaluator.evaluate(&AssembledBurger::new(), &recipe, 1.0);
    assert!(!empty.is_perfect);
    assert_eq!(empty.accuracy, 0.0);
    assert_eq!(empty.score, -5);
    assert_eq!(empty.reason, "Nothing to compare");

    let filled = evaluator.evaluate(&burger(&[Bun]), &recipe, 1.0);
    assert!(!filled.is_perfect);
    assert_eq!(filled.accuracy, 0.0);
}

#[test]
fn test_custom_scores_and_settings() {
    let settings = EvaluationSettings {
        fast_time_threshold: 10.0,
        speed_bonus: 3,
        perfect_health_gain: 1.0,
        ..EvaluationSettings::default()
    };
    let evaluator = Evaluator::new(settings);
    let recipe = RecipeDefinition::builder("Deluxe", vec![Bun, Patty, Cheese, Bun])
        .with_scores(50, 25, 0)
        .build();

    let perfect = evaluator.evaluate(&burger(&[Bun, Patty, Cheese, Bun]), &recipe, 9.0);
    assert_eq!(perfect.score, 53);
    assert_eq!(perfect.health_change, 1.0);

    // A zero base score never earns the bonus.
    let poor = evaluator.evaluate(&burger(&[Cheese]), &recipe, 1.0);
    assert_eq!(poor.score, 0);
    assert!(!poor.speed_bonus_applied);
    assert_eq!(poor.sound_cue, SoundCue::LostHealth);
}

#[test]
fn test_negative_good_score_gets_no_bonus() {
    let evaluator = Evaluator::default();
    let recipe = RecipeDefinition::builder("Cursed", vec![Bun, Patty, Cheese, Bun])
        .with_scores(5, -1, -2)
        .build();
    let result = evaluator.evaluate(&burger(&[Bun, Onion, Cheese, Bun]), &recipe, 0.0);
    assert_eq!(result.score, -1);
}

#[test]
fn test_speed_bonus_saturates_at_max_score() {
    let book = RecipeBook::from_json(
        r#"[{ "name": "Big", "requiredIngredients": ["Bun", "Bun"], "perfectScore": 2147483647 }]"#,
    )
    .unwrap();
    let recipe = book.get(0).unwrap();

    let result = Evaluator::default().evaluate(&burger(&[Bun, Bun]), recipe, 1.0);

    assert!(result.is_perfect);
    assert!(result.speed_bonus_applied);
    assert_eq!(result.base_score, i32::MAX);
    assert_eq!(result.score, i32::MAX);
    assert_eq!(result.sound_cue, SoundCue::Score);
}
