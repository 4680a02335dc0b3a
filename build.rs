// build.rs

use clap::{Arg, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Common argument: config file
fn config_arg() -> Arg {
    Arg::new("config")
        .short('c')
        .long("config")
        .value_name("PATH")
        .global(true)
        .help("Config file (default: <config dir>/recipe-blog/config.toml if present)")
}

/// Common argument: snapshot override
fn snapshot_arg() -> Arg {
    Arg::new("snapshot")
        .short('s')
        .long("snapshot")
        .value_name("PATH")
        .global(true)
        .help("Override the snapshot file from the config")
}

fn build_cli() -> Command {
    Command::new("recipe-blog")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Recipe Blog Contributors")
        .about("Recipe and shopping-list store for the recipe blog")
        .arg(config_arg())
        .arg(snapshot_arg())
        .subcommand_required(true)
        .subcommand(Command::new("init").about("Create an empty recipe snapshot"))
        .subcommand(Command::new("list").about("List all recipes"))
        .subcommand(
            Command::new("show")
                .about("Show a single recipe")
                .arg(Arg::new("id").required(true).help("Recipe ID")),
        )
        .subcommand(
            Command::new("search")
                .about("Search recipes by title and ingredients")
                .arg(
                    Arg::new("title")
                        .short('t')
                        .long("title")
                        .help("Title substring (case-insensitive)"),
                )
                .arg(
                    Arg::new("ingredient")
                        .short('i')
                        .long("ingredient")
                        .action(clap::ArgAction::Append)
                        .help("Required ingredient (repeatable)"),
                ),
        )
        .subcommand(
            Command::new("add")
                .about("Add a recipe and persist the snapshot")
                .arg(Arg::new("title").short('t').long("title").required(true))
                .arg(Arg::new("author").short('a').long("author").required(true))
                .arg(
                    Arg::new("date")
                        .short('d')
                        .long("date")
                        .help("Submission date (default: today, MM/DD/YYYY)"),
                )
                .arg(
                    Arg::new("ingredient")
                        .short('i')
                        .long("ingredient")
                        .action(clap::ArgAction::Append)
                        .help("Ingredient as NAME=QUANTITY (repeatable)"),
                )
                .arg(
                    Arg::new("instruction")
                        .long("instruction")
                        .action(clap::ArgAction::Append)
                        .help("Instruction step (repeatable, in order)"),
                ),
        )
        .subcommand(
            Command::new("cart")
                .about("Build a shopping list from one or more recipes")
                .arg(
                    Arg::new("ids")
                        .required(true)
                        .num_args(1..)
                        .help("Recipe IDs to add to the cart"),
                )
                .arg(
                    Arg::new("user")
                        .short('u')
                        .long("user")
                        .default_value("guest")
                        .help("User name for the temporary session"),
                ),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Create man directory - use CARGO_MANIFEST_DIR which is always set by cargo
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("recipe-blog.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}
