//! Shipping tariff catalog: scriptable CLI
//!
//! Non-interactive front end over the tariff catalog, one subcommand per
//! catalog operation.
//!
//! ```sh
//! # Add a tariff
//! tariff-cli add Express 100.00
//!
//! # Set a 25% discount
//! tariff-cli discount Express 25
//!
//! # List all tariffs, cheapest base price first
//! tariff-cli list
//!
//! # Show the tariff with the lowest final price
//! tariff-cli cheapest
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::info;

use tariff_catalog::{
    default_config_path, init_database, AppConfig, DatabaseConfig, SeaOrmTariffStore, Tariff,
    TariffCatalog, TariffStore,
};

/// Shipping tariff catalog: manage tariffs and discounts.
#[derive(Parser, Debug)]
#[command(
    name = "tariff-cli",
    version,
    about = "Manage shipping tariffs and discounts",
    long_about = "Shipping tariff catalog: create named tariffs with a base price, \
                  apply percentage discounts, list tariffs, and find the cheapest \
                  final price.\n\n\
                  Default config: ~/.config/tariff-catalog/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "TARIFF_CONFIG")]
    config: Option<PathBuf>,

    /// Override the SQLite database path.
    #[arg(long)]
    database: Option<String>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a new tariff with a base price
    Add {
        /// Tariff name (unique, case-sensitive)
        name: String,
        /// Base price, must be greater than zero
        price: Decimal,
    },
    /// Set the discount percentage of an existing tariff
    Discount {
        /// Tariff name
        name: String,
        /// Discount percent in [0, 100]; 0 removes the discount
        percent: Decimal,
    },
    /// List all tariffs, ascending by base price
    List,
    /// Show the tariff with the lowest final price
    Cheapest,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.unwrap_or_else(default_config_path);
    let mut config = AppConfig::load(&config_path).unwrap_or_default();

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(path) = cli.database {
        config.database.path = path;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level)),
        )
        .init();
    info!("Using database {}", config.database.path);

    // ── Database & catalog ─────────────────────────────────────
    let db_config = DatabaseConfig {
        url: config.database.connection_url(),
    };
    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Error: failed to connect to database: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let store: Arc<dyn TariffStore> = Arc::new(SeaOrmTariffStore::new(db));
    if let Err(e) = store.create_schema().await {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    let catalog = TariffCatalog::new(store);

    match run(&catalog, cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(catalog: &TariffCatalog, command: Command) -> tariff_catalog::DomainResult<()> {
    match command {
        Command::Add { name, price } => {
            let tariff = Tariff::new(name, price)?;
            catalog.add_tariff(&tariff).await?;
            println!("Added tariff '{}' at {:.2}", tariff.name(), tariff.base_price());
        }
        Command::Discount { name, percent } => {
            catalog.set_tariff_discount(&name, percent).await?;
            println!("Set discount of {:.2}% on '{}'", percent, name);
        }
        Command::List => {
            let tariffs = catalog.get_all_tariffs().await?;
            if tariffs.is_empty() {
                println!("The catalog is empty.");
                return Ok(());
            }
            println!("{:<24} {:>12} {:>10} {:>12}", "NAME", "BASE PRICE", "DISCOUNT", "FINAL PRICE");
            for t in tariffs {
                println!(
                    "{:<24} {:>12.2} {:>9.2}% {:>12.2}",
                    t.name(),
                    t.base_price(),
                    t.discount_percent(),
                    t.final_price()
                );
            }
        }
        Command::Cheapest => {
            let t = catalog.find_min_price_tariff().await?;
            println!(
                "{}: base {:.2}, discount {:.2}%, final {:.2}",
                t.name(),
                t.base_price(),
                t.discount_percent(),
                t.final_price()
            );
        }
    }
    Ok(())
}
