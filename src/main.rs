//! bookrack CLI entrypoint

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bookrack::store::Store;
use bookrack::ui;

/// bookrack - personal book-catalog manager
///
/// Takes no arguments; the catalog lives at a fixed path under the home
/// directory and everything else happens through the interactive menu.
#[derive(Parser, Debug)]
#[command(name = "bookrack")]
#[command(version, about, long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Rejects stray arguments, answers --help/--version
    let _cli = Cli::parse();

    let store = Store::open_default()?;
    ui::run(&store)
}
