//! Afroman CLI - drive the app core from a terminal.
//!
//! The mobile app's screens are just consumers of the session and cart
//! state; this binary is the same kind of consumer, which makes it handy
//! for exercising the core end to end without a device.
//!
//! # Usage
//!
//! ```bash
//! # Show current session flags
//! afroman status
//!
//! # Admin login (valid for this invocation only; never persisted)
//! afroman login -u admin -p <password>
//!
//! # Subscription flow: open the printed checkout link, then verify
//! afroman subscribe
//! afroman verify AFROMAN2025
//!
//! # Browse and shop
//! afroman videos
//! afroman merch
//! afroman cart add tshirt-black M
//! afroman cart show
//! ```
//!
//! Session and cart state live under `--state-dir` (or `AFROMAN_STATE_DIR`,
//! default `.afroman/`) so flows span invocations.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "afroman")]
#[command(author, version, about = "Afroman fan app CLI")]
struct Cli {
    /// Directory holding session and cart state between invocations
    #[arg(long, env = "AFROMAN_STATE_DIR", default_value = ".afroman", global = true)]
    state_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current session flags
    Status,
    /// Admin login (in-memory only; does not survive the process)
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
    },
    /// Reset all session flags and clear persisted subscription state
    Logout,
    /// Turn guest browsing on or off
    Guest {
        /// `true` to browse as guest, `false` to leave guest mode
        enabled: bool,
    },
    /// Start the external checkout and mark payment as pending
    Subscribe,
    /// Enter a verification code to activate the subscription
    Verify {
        /// Code received after checkout (case-insensitive)
        code: String,
    },
    /// List the video catalog with watchability for this session
    Videos,
    /// List the merchandise catalog
    Merch,
    /// Manage the merch cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add one unit of an item/size pair
    Add { item: String, size: String },
    /// Remove an item/size line entirely
    Remove { item: String, size: String },
    /// Set a line's quantity (0 removes the line)
    Set {
        item: String,
        size: String,
        quantity: u32,
    },
    /// Empty the cart
    Clear,
    /// Show cart lines and totals
    Show,
}

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), commands::CliError> {
    let state_dir = cli.state_dir.as_path();

    match cli.command {
        Commands::Status => commands::session::status(state_dir)?,
        Commands::Login { username, password } => {
            commands::session::login(state_dir, &username, &password)?;
        }
        Commands::Logout => commands::session::logout(state_dir)?,
        Commands::Guest { enabled } => commands::session::guest(state_dir, enabled)?,
        Commands::Subscribe => commands::session::subscribe(state_dir)?,
        Commands::Verify { code } => commands::session::verify(state_dir, &code)?,
        Commands::Videos => commands::catalog::videos(state_dir)?,
        Commands::Merch => commands::catalog::merch(),
        Commands::Cart { action } => match action {
            CartAction::Add { item, size } => commands::cart::add(state_dir, &item, &size)?,
            CartAction::Remove { item, size } => commands::cart::remove(state_dir, &item, &size)?,
            CartAction::Set {
                item,
                size,
                quantity,
            } => commands::cart::set_quantity(state_dir, &item, &size, quantity)?,
            CartAction::Clear => commands::cart::clear(state_dir)?,
            CartAction::Show => commands::cart::show(state_dir)?,
        },
    }
    Ok(())
}
