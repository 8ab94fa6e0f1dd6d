//! Eco Trend storefront CLI.
//!
//! Commands:
//! - `eco browse` - interactive storefront session in the terminal
//! - `eco render` - print the composed page HTML once

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use dialoguer::Select;
use indicatif::ProgressBar;
use tracing_subscriber::EnvFilter;

use eco_commerce::prelude::*;
use eco_kv::{FileStore, KeyValueStore, MemoryStore};
use eco_storefront::{view, CheckoutOutcome, Intent, Session, StorefrontConfig};

/// Eco Trend storefront
#[derive(Parser)]
#[command(name = "eco")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Product feed URL
    #[arg(long)]
    catalog_url: Option<String>,

    /// Directory for persisted session data (in-memory when omitted)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Browse the catalog interactively
    Browse,
    /// Print the rendered storefront page and exit
    Render,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = StorefrontConfig::new();
    if let Some(url) = cli.catalog_url {
        config = config.with_catalog_url(url);
    }
    if let Some(dir) = cli.data_dir {
        config = config.with_data_dir(dir);
    }

    let store: Arc<dyn KeyValueStore> = match &config.data_dir {
        Some(dir) => Arc::new(FileStore::open(dir)?),
        None => Arc::new(MemoryStore::new()),
    };

    let mut session = Session::new(config, store);
    session.init().await;

    match cli.command {
        Command::Browse => browse(&mut session).await,
        Command::Render => {
            println!("{}", view::render_page(&session));
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

const ACTIONS: [&str; 6] = [
    "Filtrar categoria",
    "Filtrar preço",
    "Adicionar ao carrinho",
    "Remover do carrinho",
    "Finalizar compra",
    "Sair",
];

async fn browse(session: &mut Session) -> Result<()> {
    loop {
        print_state(session);

        let action = Select::new()
            .with_prompt("O que deseja fazer?")
            .items(&ACTIONS)
            .default(0)
            .interact()?;

        match action {
            0 => select_category(session)?,
            1 => select_price_band(session)?,
            2 => add_to_cart(session)?,
            3 => remove_from_cart(session)?,
            4 => finalize(session).await,
            _ => break,
        }
    }
    Ok(())
}

fn print_state(session: &Session) {
    let products = session.visible_products();

    println!("\n{}", style("Eco Trend").bold().underlined());
    if products.is_empty() {
        println!("  {}", style("Nenhum produto encontrado.").dim());
    } else {
        for product in &products {
            println!(
                "  {} - {} ({})",
                product.name,
                style(product.price.display()).green(),
                style(product.category).dim(),
            );
        }
    }

    println!("\n{}", style("Carrinho").bold());
    if session.cart().is_empty() {
        println!("  {}", style("Seu carrinho está vazio.").dim());
    } else {
        for (index, item) in session.cart().iter().enumerate() {
            println!("  [{index}] {} - {}", item.name, item.price.display());
        }
    }
    println!(
        "  Total: {}",
        style(session.cart().total().display()).green().bold()
    );

    let status = session.checkout_status();
    if !status.message.is_empty() {
        println!("  {}", style(&status.message).yellow());
    }
}

fn select_category(session: &mut Session) -> Result<()> {
    let mut labels = vec!["Todas as Categorias"];
    labels.extend(Category::ALL.iter().map(Category::as_str));

    let pick = Select::new()
        .with_prompt("Categoria")
        .items(&labels)
        .default(0)
        .interact()?;

    let filter = if pick == 0 {
        CategoryFilter::Todos
    } else {
        CategoryFilter::Only(Category::ALL[pick - 1])
    };
    session.apply(Intent::SelectCategory(filter));
    Ok(())
}

fn select_price_band(session: &mut Session) -> Result<()> {
    let labels: Vec<&str> = PriceBand::ALL.iter().map(PriceBand::label).collect();

    let pick = Select::new()
        .with_prompt("Faixa de preço")
        .items(&labels)
        .default(0)
        .interact()?;

    session.apply(Intent::SelectPriceBand(PriceBand::ALL[pick]));
    Ok(())
}

fn add_to_cart(session: &mut Session) -> Result<()> {
    let products = session.visible_products();
    if products.is_empty() {
        println!("  {}", style("Nenhum produto encontrado.").dim());
        return Ok(());
    }

    let labels: Vec<String> = products
        .iter()
        .map(|p| format!("{} - {}", p.name, p.price.display()))
        .collect();

    let pick = Select::new()
        .with_prompt("Adicionar ao carrinho")
        .items(&labels)
        .default(0)
        .interact()?;

    session.apply(Intent::AddToCart(products[pick].id));
    Ok(())
}

fn remove_from_cart(session: &mut Session) -> Result<()> {
    if session.cart().is_empty() {
        println!("  {}", style("Seu carrinho está vazio.").dim());
        return Ok(());
    }

    let labels: Vec<String> = session
        .cart()
        .iter()
        .map(|item| format!("{} - {}", item.name, item.price.display()))
        .collect();

    let pick = Select::new()
        .with_prompt("Remover do carrinho")
        .items(&labels)
        .default(0)
        .interact()?;

    session.apply(Intent::RemoveFromCart(pick));
    Ok(())
}

async fn finalize(session: &mut Session) {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Processando...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = session.checkout().await;
    spinner.finish_and_clear();

    let message = &session.checkout_status().message;
    match outcome {
        CheckoutOutcome::Completed => println!("  {}", style(message).green()),
        _ => println!("  {}", style(message).yellow()),
    }
}
