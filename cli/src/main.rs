mod items;

use anyhow::{bail, Result};
use chefmate_core::{is_catalog_item, HttpRelay, MealPlanner, CATALOG};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use items::ItemSpec;

#[derive(Parser)]
#[command(name = "chefmate")]
#[command(about = "Generate meal plans from the ingredients you have", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the selectable food items
    Catalog {
        /// Server URL (default: http://localhost:3000)
        #[arg(long, default_value = "http://localhost:3000")]
        server: String,
        /// Print the built-in list instead of asking the server
        #[arg(long)]
        offline: bool,
    },
    /// Generate a meal plan for the given items
    Plan {
        /// Server URL (default: http://localhost:3000)
        #[arg(long, default_value = "http://localhost:3000")]
        server: String,
        /// Item to use, optionally with a quantity: "Chicken=200g" or "Eggs"
        #[arg(long = "item", required = true)]
        items: Vec<ItemSpec>,
        /// Print the raw script instead of the rendered plan
        #[arg(long)]
        raw: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Catalog { server, offline } => {
            catalog(&server, offline).await?;
        }
        Commands::Plan { server, items, raw } => {
            plan(&server, &items, raw).await?;
        }
    }

    Ok(())
}

async fn catalog(server: &str, offline: bool) -> Result<()> {
    let items = if offline {
        CATALOG.iter().map(|item| item.to_string()).collect()
    } else {
        HttpRelay::new(server).fetch_catalog().await?
    };

    for item in items {
        println!("{}", item);
    }

    Ok(())
}

async fn plan(server: &str, items: &[ItemSpec], raw: bool) -> Result<()> {
    let mut planner = MealPlanner::new();

    for spec in items {
        if !is_catalog_item(&spec.name) {
            tracing::warn!(item = %spec.name, "Item is not in the catalog");
        }
        // A repeated item stays selected; the last quantity wins
        if !planner.selection().contains(&spec.name) {
            planner.toggle(&spec.name);
        }
        planner.set_quantity(&spec.name, &spec.quantity);
    }

    if !planner.can_submit() {
        bail!("Nothing selected");
    }

    let relay = HttpRelay::new(server);
    let result = planner.submit(&relay).await?;

    if raw {
        println!("{}", result.script());
    } else {
        print!("{}", result.render());
    }

    Ok(())
}
