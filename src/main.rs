use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use mpls_fireworks::config::Config;
use mpls_fireworks::observability::logging::init_logging;
use mpls_fireworks::output::{html, ics};
use mpls_fireworks::pipeline::runner;

#[derive(Parser)]
#[command(name = "mpls-fireworks")]
#[command(about = "Extracts Minneapolis fireworks display permits into a calendar feed and web page")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full extraction and write both outputs
    Run {
        /// Path to the configuration file
        #[arg(long, default_value = "config.toml")]
        config: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging();

    match cli.command {
        Commands::Run { config } => {
            let config = Config::load(&config)?;
            let events = runner::collect_events(&config)?;

            // Renderers run only once the full list is built; a failure
            // above leaves the previous outputs untouched.
            ics::write_ics(&events, &config.calendar, &config.output.ics_path)?;
            info!(path = %config.output.ics_path.display(), "wrote calendar feed");

            let today = chrono::Local::now().date_naive();
            html::write_html(&events, today, &config.output.html_path)?;
            info!(path = %config.output.html_path.display(), "wrote web page");
        }
    }

    Ok(())
}
