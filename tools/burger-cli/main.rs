use burger_stack::prelude::*;
use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::time::Instant;

/// Serve burgers against a recipe book from the command line
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the recipe book JSON file
    recipes_path: Option<String>,
    /// Optional path to a game config JSON file
    #[arg(short, long)]
    config: Option<String>,

    /// Order number (index into the recipe book) to serve
    #[arg(short, long, default_value_t = 0)]
    order: usize,

    /// Comma-separated ingredients, bottom layer first
    #[arg(long, value_delimiter = ',')]
    ingredients: Vec<String>,

    /// Seconds the player took to build the burger
    #[arg(short, long, default_value_t = 0.0)]
    elapsed: f32,

    /// Run in interactive mode to be prompted for every drop
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.human {
        run_interactive(cli);
    } else {
        run_non_interactive(cli);
    }
}

fn load_shift(recipes_path: &str, config_path: Option<&str>) -> Shift {
    let recipes_json = fs::read_to_string(recipes_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read recipe file '{}': {}",
            recipes_path, e
        ))
    });
    let book = RecipeBook::from_json(&recipes_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load recipes: {}", e)));

    let config = match config_path {
        Some(path) => GameConfig::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load config: {}", e))),
        None => GameConfig::default(),
    };

    println!("Loaded {} recipes from '{}'", book.len(), recipes_path);
    Shift::new(book, config)
}

fn print_result(shift: &Shift, order: usize, result: &EvaluationResult) {
    let name = shift.book().get(order).map_or("?", |r| r.name());
    println!("\nServed '{}'", name);
    println!("  -> Perfect:   {}", result.is_perfect);
    println!("  -> Accuracy:  {:.0}%", result.accuracy * 100.0);
    if result.speed_bonus_applied {
        println!("  -> Score:     {} (incl. speed bonus)", result.score);
    } else {
        println!("  -> Score:     {}", result.score);
    }
    println!("  -> Health:    {:+}", result.health_change);
    println!("  -> Customer:  {} ({:?})", result.feedback, result.mood);
    println!("  -> Breakdown: {}", result.reason);
}

/// Runs the CLI in non-interactive mode, taking all arguments from the command line.
fn run_non_interactive(cli: Cli) {
    let recipes_path = cli.recipes_path.unwrap_or_else(|| {
        exit_with_error("Recipe path is required in non-interactive mode.");
    });
    let mut shift = load_shift(&recipes_path, cli.config.as_deref());

    let start = Instant::now();
    for name in &cli.ingredients {
        if !shift.drop_ingredient(name) {
            println!("  '{}' was refused by the drop area", name);
        }
    }

    let result = shift
        .submit(cli.order, cli.elapsed)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    let duration = start.elapsed();

    print_result(&shift, cli.order, &result);
    println!("\nEvaluation took {:?}", duration);
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive(cli: Cli) {
    println!("--- Burger Stack Interactive Mode ---");

    let recipes_path = match cli.recipes_path {
        Some(path) => path,
        None => prompt_for_input("Enter recipe book path", Some("data/recipes.json")),
    };
    let mut shift = load_shift(&recipes_path, cli.config.as_deref());

    loop {
        println!("\nMenu:");
        for (i, recipe) in shift.book().recipes().iter().enumerate() {
            println!("  {}: {}", i, recipe.name());
        }
        let choice = prompt_for_input("Order number (empty to quit)", None);
        if choice.is_empty() {
            break;
        }
        let Ok(order) = choice.parse::<usize>() else {
            println!("Please enter a number.");
            continue;
        };
        let Some(recipe) = shift.book().get(order) else {
            println!("There is no order {} on the menu.", order);
            continue;
        };
        if !recipe.order_text().is_empty() {
            println!("Customer: \"{}\"", recipe.order_text());
        }

        let start = Instant::now();
        while !shift.stack().is_complete() {
            let name = prompt_for_input("Drop ingredient (empty to serve)", None);
            if name.is_empty() {
                break;
            }
            if shift.drop_ingredient(&name) {
                let stack: Vec<_> = shift.stack().sequence().iter().map(|i| i.name()).collect();
                println!("  Stack: {}", stack.join(" / "));
            } else {
                println!("  '{}' was refused", name);
            }
        }

        match shift.submit(order, start.elapsed().as_secs_f32()) {
            Ok(result) => print_result(&shift, order, &result),
            Err(e) => println!("{}", e),
        }
        println!("Total score: {} | Health: {:.1}", shift.score(), shift.health());
    }

    println!("\nServed {} orders. Final score: {}", shift.orders_served(), shift.score());
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    if let Err(e) = io::stdout().flush() {
        exit_with_error(&format!("Failed to flush stdout: {}", e));
    }

    if let Err(e) = io::stdin().read_line(&mut line) {
        exit_with_error(&format!("Failed to read line: {}", e));
    }
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
