//! Common test utilities for building recipes, burgers and shifts.
use burger_stack::prelude::*;

use burger_stack::ingredient::IngredientId::*;

/// A recipe JSON menu in the authoring format, including a legacy sauce alias.
#[allow(dead_code)]
pub const MENU_JSON: &str = r#"[
    {
        "name": "Plain Burger",
        "orderText": "Just a patty in a bun, please.",
        "requiredIngredients": ["Bun", "Patty", "Bun"]
    },
    {
        "name": "Cheeseburger",
        "requiredIngredients": ["Bun", "Patty", "Cheese", "Bun"],
        "perfectScore": 30,
        "goodScore": 15,
        "poorScore": -10
    },
    {
        "name": "Bulgogi Double",
        "requiredIngredients": ["Bun", "Bulgogi2", "Patty", "Bun", "Patty", "Lettuce", "Bun"]
    }
]"#;

/// `Bun, Patty, Bun` with the default score table.
#[allow(dead_code)]
pub fn plain_recipe() -> RecipeDefinition {
    RecipeDefinition::new("Plain Burger", vec![Bun, Patty, Bun])
}

/// `Bun, Patty, Cheese, Bun` with the default score table.
#[allow(dead_code)]
pub fn cheese_recipe() -> RecipeDefinition {
    RecipeDefinition::new("Cheeseburger", vec![Bun, Patty, Cheese, Bun])
}

#[allow(dead_code)]
pub fn burger(ingredients: &[IngredientId]) -> AssembledBurger {
    ingredients.iter().copied().collect()
}

/// A shift over [`MENU_JSON`] with the default config.
#[allow(dead_code)]
pub fn menu_shift() -> Shift {
    let book = RecipeBook::from_json(MENU_JSON).expect("menu should parse");
    Shift::new(book, GameConfig::default())
}

/// Stack settings with a small, custom stock table.
#[allow(dead_code)]
pub fn small_stock_settings() -> StackSettings {
    StackSettings {
        stock: vec![
            StockEntry {
                ingredient: Bun,
                max_amount: 3,
            },
            StockEntry {
                ingredient: Patty,
                max_amount: 1,
            },
        ],
        ..StackSettings::default()
    }
}
