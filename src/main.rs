// src/main.rs

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use recipe_blog::recipe::Ingredient;
use recipe_blog::{Blog, BlogConfig, PublishError, Recipe, RecipeDraft, SearchQuery, Session};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "recipe-blog")]
#[command(author, version, about = "Recipe and shopping-list store for the recipe blog", long_about = None)]
struct Cli {
    /// Config file (default: <config dir>/recipe-blog/config.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the snapshot file from the config
    #[arg(short, long, global = true)]
    snapshot: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an empty recipe snapshot
    Init,
    /// List all recipes
    List,
    /// Show a single recipe
    Show {
        /// Recipe ID
        id: String,
    },
    /// Search recipes by title and ingredients
    Search {
        /// Title substring (case-insensitive)
        #[arg(short, long)]
        title: Option<String>,
        /// Required ingredient (repeatable)
        #[arg(short, long = "ingredient")]
        ingredients: Vec<String>,
    },
    /// Add a recipe and persist the snapshot
    Add {
        #[arg(short, long)]
        title: String,
        #[arg(short, long)]
        author: String,
        /// Submission date (default: today, MM/DD/YYYY)
        #[arg(short, long)]
        date: Option<String>,
        /// Ingredient as NAME=QUANTITY (repeatable)
        #[arg(short, long = "ingredient", value_parser = parse_ingredient)]
        ingredients: Vec<Ingredient>,
        /// Instruction step (repeatable, in order)
        #[arg(long = "instruction")]
        instructions: Vec<String>,
    },
    /// Build a shopping list from one or more recipes
    Cart {
        /// Recipe IDs to add to the cart
        #[arg(required = true)]
        ids: Vec<String>,
        /// User name for the temporary session
        #[arg(short, long, default_value = "guest")]
        user: String,
    },
}

fn parse_ingredient(s: &str) -> Result<Ingredient, String> {
    let (name, quantity) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=QUANTITY, got {:?}", s))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("ingredient name is empty in {:?}", s));
    }
    Ok(Ingredient::new(name, quantity.trim()))
}

fn print_summary(recipe: &Recipe) {
    println!(
        "{:>4}  {}  (by {}, {})",
        recipe.id, recipe.title, recipe.author, recipe.date
    );
}

fn print_recipe(recipe: &Recipe) {
    println!("{} [{}]", recipe.title, recipe.id);
    println!("by {} on {}", recipe.author, recipe.date);
    println!();
    println!("Ingredients:");
    for ingredient in recipe.ingredients.values() {
        println!("  - {}: {}", ingredient.name, ingredient.quantity);
    }
    println!();
    println!("Instructions:");
    for (step, instruction) in recipe.instructions.iter().enumerate() {
        println!("  {}. {}", step + 1, instruction);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = BlogConfig::discover(cli.config.as_deref())?;
    if let Some(snapshot) = cli.snapshot {
        config.storage.snapshot = snapshot;
        config.validate()?;
    }

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .init();

    match cli.command {
        Commands::Init => {
            let path = config.snapshot_path();
            if Blog::init_snapshot(path)? {
                println!("Created empty snapshot at: {}", path.display());
            } else {
                println!("Snapshot already exists at: {}", path.display());
            }
            Ok(())
        }
        Commands::List => {
            let blog = Blog::open(&config)?;
            let recipes = blog.recipes().all();
            if recipes.is_empty() {
                println!("No recipes yet.");
            }
            for recipe in &recipes {
                print_summary(recipe);
            }
            Ok(())
        }
        Commands::Show { id } => {
            let blog = Blog::open(&config)?;
            let recipe = blog.recipes().lookup(&id)?;
            print_recipe(&recipe);
            Ok(())
        }
        Commands::Search { title, ingredients } => {
            let blog = Blog::open(&config)?;
            let query = SearchQuery::from_params(title.as_deref(), &ingredients);
            let results = query.run(blog.recipes());
            println!("{} matching recipes", results.len());
            for recipe in &results {
                print_summary(recipe);
            }
            Ok(())
        }
        Commands::Add {
            title,
            author,
            date,
            ingredients,
            instructions,
        } => {
            let blog = Blog::open(&config)?;
            let mut draft = RecipeDraft::new(
                title,
                author,
                date.unwrap_or_else(recipe_blog::submission_date),
            );
            for ingredient in ingredients {
                draft.add_ingredient(ingredient);
            }
            draft.instructions = instructions;

            match blog.add_recipe(draft) {
                Ok(id) => {
                    println!("Added recipe {}", id);
                    Ok(())
                }
                Err(PublishError::NotPersisted { id, source }) => {
                    println!("Added recipe {}, but it may not survive a restart", id);
                    Err(source).context("Failed to write recipe snapshot")
                }
                Err(e) => Err(e.into()),
            }
        }
        Commands::Cart { ids, user } => {
            let blog = Blog::open(&config)?;
            let token = uuid::Uuid::new_v4().to_string();
            blog.sessions().add_session(Session::new(user, token.as_str()));
            info!("Opened temporary session {}", token);

            for id in &ids {
                blog.sessions()
                    .update_cart(&token, id)
                    .with_context(|| format!("Cannot add recipe {} to the cart", id))?;
            }

            let session = blog.sessions().lookup(&token)?;
            blog.sessions().remove_session(&token);

            println!("Shopping list for {}:", session.user);
            for item in session.cart_items() {
                println!("  - {}: {}", item.name, item.quantity);
            }
            Ok(())
        }
    }
}
