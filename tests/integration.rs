//! Integration tests for burger-stack
//!
//! End-to-end tests that drive a shift the way a game host would.
//!
mod common;
use burger_stack::prelude::*;
use common::*;

#[test]
fn test_full_order_from_json_menu() {
    let mut shift = menu_shift();

    for name in ["Bun", "Patty", "Bun"] {
        assert!(shift.drop_ingredient(name));
    }
    assert!(shift.is_perfect_burger(0));
    assert!(!shift.is_perfect_burger(1));

    let result = shift.submit(0, 12.5).expect("order 0 exists");

    assert!(result.is_perfect);
    assert_eq!(result.score, 25);
    assert_eq!(shift.score(), 25);
    assert_eq!(shift.health(), 3.5);
    assert_eq!(shift.dialog(), "Perfect and fast! Outstanding!");
    assert_eq!(shift.orders_served(), 1);
    assert_eq!(shift.last_result(), Some(&result));

    // The pile is cleared for the next order, the stock is not.
    assert_eq!(shift.stack().height(), 0);
    assert_eq!(
        shift.stack().stock(IngredientId::Bun).map(|s| s.current),
        Some(8)
    );
}

#[test]
fn test_scores_accumulate_across_orders() {
    let mut shift = menu_shift();

    // Order 1 uses custom scores: good = 15.
    for name in ["Bun", "Lettuce", "Cheese", "Bun"] {
        shift.drop_ingredient(name);
    }
    let good = shift.submit(1, 60.0).unwrap();
    assert_eq!(good.score, 15);

    // Nothing stacked at all: poor = -10 and a health loss.
    let poor = shift.submit(1, 60.0).unwrap();
    assert_eq!(poor.accuracy, 0.0);
    assert_eq!(poor.score, -10);

    assert_eq!(shift.score(), 5);
    assert_eq!(shift.health(), 2.0);
    assert_eq!(shift.dialog(), "Customer is disappointed...");
    assert_eq!(shift.orders_served(), 2);
}

#[test]
fn test_unknown_order_changes_nothing() {
    let mut shift = menu_shift();
    shift.drop_ingredient("Bun");

    let err = shift.submit(7, 1.0).unwrap_err();

    assert_eq!(
        err,
        ShiftError::UnknownOrder {
            order: 7,
            available: 3
        }
    );
    assert!(err.to_string().contains("only has 3 recipes"));
    assert_eq!(shift.stack().height(), 1);
    assert_eq!(shift.score(), 0);
    assert_eq!(shift.orders_served(), 0);
    assert!(shift.last_result().is_none());
}

#[test]
fn test_menu_lookup_guards_drops_for_missing_orders() {
    let mut shift = menu_shift();

    // Hosts check the menu before collecting drops, so a bad order number
    // leaves nothing behind for the next customer.
    assert!(shift.book().get(7).is_none());
    assert_eq!(shift.stack().height(), 0);
    assert_eq!(shift.stack().stock(IngredientId::Bun), Some(Stock::full(10)));

    for name in ["Bun", "Patty", "Bun"] {
        assert!(shift.drop_ingredient(name));
    }
    let result = shift.submit(0, 5.0).unwrap();
    assert!(result.is_perfect);
}

#[test]
fn test_legacy_sauce_names_in_menu_and_drops() {
    let mut shift = menu_shift();

    for name in ["Bun", "Bulgogi2", "Patty", "Bun", "Patty", "Lettuce", "Bun"] {
        assert!(shift.drop_ingredient(name), "drop of {} refused", name);
    }
    assert!(shift.stack().is_complete());
    // Sealed once the third bun lands.
    assert!(!shift.drop_ingredient("Onion"));

    let result = shift.submit(2, 29.0).unwrap();
    assert!(result.is_perfect);
    assert_eq!(result.score, 25);
}

#[test]
fn test_config_overrides_apply_to_shift() {
    let config = GameConfig::from_json(
        r#"{
            "initial_health": 10.0,
            "evaluation": { "speed_bonus": 0, "poor_health_loss": -2.5 },
            "stack": { "closing_count": 2 }
        }"#,
    )
    .unwrap();
    let book = RecipeBook::from_json(MENU_JSON).unwrap();
    let mut shift = Shift::new(book, config);

    shift.drop_ingredient("Bun");
    shift.drop_ingredient("Bun");
    assert!(shift.stack().is_complete());

    let result = shift.submit(0, 1.0).unwrap();
    // Bun, Bun vs Bun, Patty, Bun: one of three layers right.
    assert!((result.accuracy - 1.0 / 3.0).abs() < 1e-6);
    assert_eq!(result.health_change, 0.0);

    let miss = shift.submit(0, 1.0).unwrap();
    assert_eq!(miss.health_change, -2.5);
    assert_eq!(shift.health(), 7.5);
}

#[test]
fn test_stock_runs_out_over_a_shift() {
    let config = GameConfig {
        stack: small_stock_settings(),
        ..GameConfig::default()
    };
    let book = RecipeBook::new(vec![plain_recipe()]);
    let mut shift = Shift::new(book, config);

    for name in ["Bun", "Patty", "Bun"] {
        assert!(shift.drop_ingredient(name));
    }
    shift.submit(0, 5.0).unwrap();

    // One bun and no patties left.
    assert!(shift.drop_ingredient("Bun"));
    assert!(!shift.drop_ingredient("Patty"));
    assert!(!shift.drop_ingredient("Bun"));

    shift.stack_mut().replenish_all();
    assert!(shift.drop_ingredient("Patty"));
}
