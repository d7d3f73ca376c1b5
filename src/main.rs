// Entry point: parses the CLI, loads config, starts file logging and runs the TUI.

use std::path::PathBuf;

use clap::Parser;

use termflix::app::App;
use termflix::config::{Config, API_KEY_ENV};
use termflix::logging;

#[derive(Parser)]
#[command(name = "termflix", about = "Browse TMDB movies and shows from the terminal")]
struct Cli {
    /// Config file to read instead of ~/.config/termflix/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn load_config(cli: &Cli) -> Config {
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    match Config::load_from(&path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: could not read {}: {e}. Using defaults.", path.display());
            let mut config = Config::default();
            config.apply_env();
            config
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli);
    logging::init()?;

    if config.catalog.api_key.is_empty() {
        eprintln!("Warning: no TMDB API key configured. Set {API_KEY_ENV} or catalog.api_key.");
    }

    let mut app = App::new(config)?;
    app.run().await?;

    Ok(())
}
