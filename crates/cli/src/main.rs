//! Cakes N Bells CLI - data directory and shop management tools.
//!
//! # Usage
//!
//! ```bash
//! # Write the default catalog, collections and an empty wishlist
//! cnb-cli seed --data-dir data
//!
//! # Print the catalog as the storefront would load it
//! cnb-cli catalog list --data-dir data
//!
//! # Compute the digest for ADMIN_PASSWORD_SHA256
//! cnb-cli admin hash-password 'new password'
//!
//! # Show the UPI link and QR code URL for an amount
//! cnb-cli payment preview --tier premium --amount 760
//! ```
//!
//! # Commands
//!
//! - `seed` - Seed the data directory with the default shop data
//! - `catalog list` - List products and collections
//! - `admin hash-password` - Hash an admin password
//! - `payment preview` - Preview payment links

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "cnb-cli")]
#[command(author, version, about = "Cakes N Bells CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the data directory with the default catalog
    Seed {
        /// Storefront data directory
        #[arg(short, long, env = "STOREFRONT_DATA_DIR", default_value = "data")]
        data_dir: PathBuf,

        /// Overwrite existing shop data
        #[arg(long)]
        force: bool,
    },
    /// Inspect the catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Admin password tools
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Payment link tools
    Payment {
        #[command(subcommand)]
        action: PaymentAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List products and collections
    List {
        /// Storefront data directory
        #[arg(short, long, env = "STOREFRONT_DATA_DIR", default_value = "data")]
        data_dir: PathBuf,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Print the SHA-256 digest of a password
    HashPassword {
        /// The new admin password
        password: String,
    },
}

#[derive(Subcommand)]
enum PaymentAction {
    /// Print the UPI deep link and QR code URL for an amount
    Preview {
        /// Payment tier (`standard`, `premium`, `luxury`)
        #[arg(short, long, default_value = "standard")]
        tier: String,

        /// Amount in rupees
        #[arg(short, long)]
        amount: String,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed { data_dir, force } => commands::seed::run(&data_dir, force)?,
        Commands::Catalog { action } => match action {
            CatalogAction::List { data_dir } => commands::catalog::list(&data_dir)?,
        },
        Commands::Admin { action } => match action {
            AdminAction::HashPassword { password } => commands::admin::hash_password(&password),
        },
        Commands::Payment { action } => match action {
            PaymentAction::Preview { tier, amount } => commands::payment::preview(&tier, &amount)?,
        },
    }
    Ok(())
}
