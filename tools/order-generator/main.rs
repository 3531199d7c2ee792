use burger_stack::ingredient::{IngredientId, IngredientKind};
use burger_stack::recipe::{IntoRecipe, RawRecipe};
use clap::Parser;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fs;

/// A CLI tool to generate random recipe books for the burger evaluator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_recipes.json")]
    output: String,

    /// How many recipes to generate
    #[arg(short, long, default_value_t = 5)]
    count: usize,

    /// The minimum number of fillings between the buns
    #[arg(long, default_value_t = 1)]
    min: usize,

    /// The maximum number of fillings between the buns
    #[arg(long, default_value_t = 5)]
    max: usize,

    /// Chance that a recipe gets a sauce layer on top of the bottom bun
    #[arg(long, default_value_t = 0.5)]
    sauce_chance: f64,
}

const FILLINGS: [IngredientId; 6] = [
    IngredientId::Patty,
    IngredientId::Lettuce,
    IngredientId::Tomato,
    IngredientId::Cheese,
    IngredientId::Pickle,
    IngredientId::Onion,
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.min > cli.max {
        eprintln!(
            "Error: --min ({}) cannot be greater than --max ({})",
            cli.min, cli.max
        );
        std::process::exit(1);
    }
    if !(0.0..=1.0).contains(&cli.sauce_chance) {
        eprintln!("Error: --sauce-chance must be between 0 and 1");
        std::process::exit(1);
    }

    println!(
        "Generating {} recipes (fillings per burger: {} to {})...",
        cli.count, cli.min, cli.max
    );

    let recipes: Vec<RawRecipe> = (0..cli.count)
        .map(|i| generate_recipe(&mut rng, i, &cli))
        .collect();

    // Round-trip through the loader so a broken generator fails here, not in the game.
    for recipe in &recipes {
        recipe.clone().into_recipe()?;
    }

    let json_output = serde_json::to_string_pretty(&recipes)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved {} recipes to '{}'",
        recipes.len(),
        cli.output
    );

    Ok(())
}

fn generate_recipe(rng: &mut impl Rng, index: usize, cli: &Cli) -> RawRecipe {
    let mut layers = vec![IngredientId::Bun];

    if rng.random_bool(cli.sauce_chance) {
        let sauces: Vec<_> = IngredientId::ALL
            .into_iter()
            .filter(|i| i.kind() == IngredientKind::Sauce)
            .collect();
        if let Some(&sauce) = sauces.choose(rng) {
            layers.push(sauce);
        }
    }

    let fillings = rng.random_range(cli.min..=cli.max);
    for _ in 0..fillings {
        if let Some(&filling) = FILLINGS.choose(rng) {
            layers.push(filling);
        }
    }
    layers.push(IngredientId::Bun);

    let size = layers.len() as i32;
    let names: Vec<String> = layers.iter().map(|i| i.name().to_string()).collect();
    println!("-> Recipe {}: {}", index, names.join(" / "));

    RawRecipe {
        name: format!("Special #{}", index + 1),
        order_text: format!("One special, {} layers please!", size),
        required_ingredients: names,
        // Taller burgers pay more.
        perfect_score: 10 + 2 * size,
        good_score: 5 + size,
        poor_score: -5,
    }
}
