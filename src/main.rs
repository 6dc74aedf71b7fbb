use anyhow::Result;
use clap::Parser;
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

use asset_dashboard::config::Config;
use asset_dashboard::models::DashboardData;
use asset_dashboard::ui;
use asset_dashboard::ui::state::DashboardTab;

#[derive(Parser, Debug)]
#[command(
    name = "asset-dashboard",
    about = "Terminal dashboard for the asset inventory demo metrics"
)]
struct Cli {
    /// Tab to open at startup (overview, analytics, reports, notifications)
    #[arg(long, value_name = "TAB")]
    tab: Option<DashboardTab>,

    /// Event poll interval in milliseconds
    #[arg(long, value_name = "MS")]
    tick_ms: Option<u64>,

    /// Disable mouse capture; chart hover falls back to the arrow keys
    #[arg(long)]
    no_mouse: bool,

    /// Print the demo datasets as JSON and exit
    #[arg(long)]
    dump_data: bool,
}

fn main() -> Result<()> {
    // Initialize logging - suppress most logs for TUI
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::ERROR)
        .with_env_filter("asset_dashboard=error")
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    let cli = Cli::parse();

    if cli.dump_data {
        println!("{}", serde_json::to_string_pretty(&DashboardData::demo())?);
        return Ok(());
    }

    // Load configuration
    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            eprintln!("❌ Configuration Error: {}", e);
            std::process::exit(1);
        }
    };

    // CLI flags win over the environment
    if let Some(tab) = cli.tab {
        config.start_tab = tab;
    }
    if let Some(tick_ms) = cli.tick_ms {
        config.tick_ms = tick_ms;
    }
    if cli.no_mouse {
        config.mouse_capture = false;
    }

    match ui::app::run_app(config) {
        Ok(_) => {
            println!("Thanks for using the Asset Inventory Dashboard!");
        }
        Err(e) => {
            eprintln!("❌ TUI Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
