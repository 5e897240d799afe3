//! Weekenders CLI - drive the cart engine from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Add two beanies in size M
//! wk-cli add --product beanie.json --option Size=M --qty 2
//!
//! # Show the cart summary
//! wk-cli show
//!
//! # Open the mail client with the order (or print the mailto: URI)
//! wk-cli checkout
//! wk-cli checkout --print
//!
//! # Copy the order text to the clipboard
//! wk-cli copy
//! ```
//!
//! # Environment
//!
//! Reads `WEEKENDERS_*` variables (and `.env`), see
//! `weekenders_storefront::config`. `RUST_LOG` controls log output, which
//! goes to stderr.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod product_file;
mod system;

#[derive(Parser)]
#[command(name = "wk-cli")]
#[command(author, version, about = "Weekenders cart tools")]
struct Cli {
    /// Directory holding the local cart store (overrides `WEEKENDERS_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Product and option arguments shared by `add` and `buy-now`.
#[derive(clap::Args)]
pub(crate) struct ProductArgs {
    /// Product file (JSON or YAML) with `title`, `sku`, `price` and optional options
    #[arg(short, long)]
    product: PathBuf,

    /// Selected option as `NAME=VALUE`; repeat for several options
    #[arg(short, long = "option", value_name = "NAME=VALUE")]
    options: Vec<String>,

    /// Quantity; read like a number input and never below 1
    #[arg(short, long, default_value = "1")]
    qty: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the cart summary
    Show,
    /// Add a product to the cart
    Add(ProductArgs),
    /// Empty the cart
    Clear,
    /// Print the plain-text order summary
    Text,
    /// Print the rendered cart-summary fragment
    Html,
    /// Email the cart as an order
    Checkout {
        /// Print the mailto: URI instead of opening the mail client
        #[arg(long)]
        print: bool,
    },
    /// Email a single product as an order without touching the cart
    BuyNow {
        #[command(flatten)]
        product: ProductArgs,

        /// Print the mailto: URI instead of opening the mail client
        #[arg(long)]
        print: bool,
    },
    /// Copy the order text to the clipboard
    Copy,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("weekenders_storefront=info,wk_cli=info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.json);

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = commands::open_engine(cli.data_dir)?;
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Show => commands::cart::show(&mut engine, &mut out)?,
        Commands::Add(args) => {
            let selection = commands::Selection::from_args(&args)?;
            commands::cart::add(&mut engine, &selection, &mut out)?;
        }
        Commands::Clear => commands::cart::clear(&mut engine, &mut out)?,
        Commands::Text => commands::cart::text(&mut engine, &mut out)?,
        Commands::Html => commands::cart::html(&mut engine, &mut out)?,
        Commands::Checkout { print } => {
            commands::checkout::checkout(&mut engine, print, &mut out)?;
        }
        Commands::BuyNow { product, print } => {
            let selection = commands::Selection::from_args(&product)?;
            commands::checkout::buy_now(&engine, &selection, print, &mut out)?;
        }
        Commands::Copy => commands::checkout::copy(&mut engine, &mut out).await?,
    }
    Ok(())
}
