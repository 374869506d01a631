//! Shipping tariff catalog: interactive menu
//!
//! Numbered menu over the tariff catalog, backed by SQLite.
//! Reads configuration from a TOML file (~/.config/tariff-catalog/config.toml),
//! overridable through the TARIFF_CONFIG environment variable.

use std::io::{self, BufRead, Write};
use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, warn};

use tariff_catalog::{
    default_config_path, init_database, AppConfig, DatabaseConfig, DomainError, SeaOrmTariffStore,
    Tariff, TariffCatalog, TariffStore,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("TARIFF_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            warn!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    // ── Database ───────────────────────────────────────────────
    let db_config = DatabaseConfig {
        url: app_cfg.database.connection_url(),
    };
    let db = init_database(&db_config).await?;

    let store: Arc<dyn TariffStore> = Arc::new(SeaOrmTariffStore::new(db));
    store.create_schema().await?;

    let catalog = TariffCatalog::new(store);
    run_menu(&catalog).await;

    Ok(())
}

async fn run_menu(catalog: &TariffCatalog) {
    loop {
        print_menu();
        match prompt("Choose an action (0-4): ").as_str() {
            "1" => add_tariff(catalog).await,
            "2" => set_tariff_discount(catalog).await,
            "3" => show_all_tariffs(catalog).await,
            "4" => find_min_price_tariff(catalog).await,
            "0" => {
                println!("\nGoodbye!");
                break;
            }
            _ => println!("\nError: invalid choice, pick a number from 0 to 4."),
        }
    }
}

fn print_menu() {
    println!("\n=== Shipping Tariff Catalog ===");
    println!("1. Add a new tariff");
    println!("2. Set a discount on an existing tariff");
    println!("3. Show all tariffs");
    println!("4. Find the cheapest tariff");
    println!("0. Exit");
    println!("===============================");
}

async fn add_tariff(catalog: &TariffCatalog) {
    println!("\n--- Add a new tariff ---");
    let name = loop {
        let name = prompt("Tariff name: ");
        if name.is_empty() {
            println!("Error: the tariff name must not be empty.");
            continue;
        }
        match catalog.has_tariff(&name).await {
            Ok(true) => println!("Error: a tariff named '{}' already exists.", name),
            Ok(false) => break name,
            Err(e) => {
                println!("Error: {}", e);
                return;
            }
        }
    };

    let price = input_decimal(
        "Base price (above 0, at most 1000): ",
        Decimal::new(1, 2),
        Decimal::from(1000),
    );

    match Tariff::new(name, price) {
        Ok(tariff) => match catalog.add_tariff(&tariff).await {
            Ok(()) => println!("Tariff added."),
            Err(e) => println!("Error: {}", e),
        },
        Err(e) => println!("Error: {}", e),
    }
}

async fn set_tariff_discount(catalog: &TariffCatalog) {
    println!("\n--- Set a discount on an existing tariff ---");

    let tariffs = match catalog.get_all_tariffs().await {
        Ok(tariffs) => tariffs,
        Err(e) => {
            println!("Error: {}", e);
            return;
        }
    };
    if tariffs.is_empty() {
        println!("Error: no tariffs available.");
        return;
    }

    println!("\nAvailable tariffs:");
    for (i, tariff) in tariffs.iter().enumerate() {
        println!(
            "{}. {} (current discount: {:.2}%)",
            i + 1,
            tariff.name(),
            tariff.discount_percent()
        );
    }

    let name = loop {
        let name = prompt("\nTariff to discount: ");
        if name.is_empty() {
            println!("Error: the tariff name must not be empty.");
            continue;
        }
        match catalog.has_tariff(&name).await {
            Ok(false) => println!("Error: no tariff named '{}'.", name),
            Ok(true) => break name,
            Err(e) => {
                println!("Error: {}", e);
                return;
            }
        }
    };

    let percent = input_decimal("Discount percent (0-100): ", Decimal::ZERO, Decimal::ONE_HUNDRED);
    match catalog.set_tariff_discount(&name, percent).await {
        Ok(()) => println!("Discount set."),
        Err(e) => println!("Error: {}", e),
    }
}

async fn show_all_tariffs(catalog: &TariffCatalog) {
    println!("\n--- All tariffs ---");
    match catalog.get_all_tariffs().await {
        Ok(tariffs) if tariffs.is_empty() => println!("The catalog is empty."),
        Ok(tariffs) => {
            for (i, tariff) in tariffs.iter().enumerate() {
                println!("{}. Name: {}", i + 1, tariff.name());
                println!("   Base price:  {:.2}", tariff.base_price());
                println!("   Discount:    {:.2}%", tariff.discount_percent());
                println!("   Final price: {:.2}", tariff.final_price());
                println!("   ----------------------");
            }
        }
        Err(e) => println!("Error: {}", e),
    }
}

async fn find_min_price_tariff(catalog: &TariffCatalog) {
    println!("\n--- Cheapest tariff ---");
    match catalog.find_min_price_tariff().await {
        Ok(tariff) => {
            println!("Cheapest tariff found:");
            println!("Name:        {}", tariff.name());
            println!("Base price:  {:.2}", tariff.base_price());
            println!("Discount:    {:.2}%", tariff.discount_percent());
            println!("Final price: {:.2}", tariff.final_price());
        }
        Err(e @ DomainError::EmptyCatalog) => println!("{}", e),
        Err(e) => println!("Error: {}", e),
    }
}

/// Read one trimmed line from stdin.
fn prompt(message: &str) -> String {
    print!("{}", message);
    let _ = io::stdout().flush();
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).is_err() {
        return String::new();
    }
    line.trim().to_string()
}

/// Re-prompt until the input parses as a decimal within [min, max].
fn input_decimal(message: &str, min: Decimal, max: Decimal) -> Decimal {
    loop {
        let raw = prompt(message);
        match Decimal::from_str(&raw) {
            Ok(value) if value >= min && value <= max => return value,
            Ok(_) => println!("Error: enter a number between {} and {}.", min, max),
            Err(_) => println!("Error: enter a numeric value."),
        }
    }
}
