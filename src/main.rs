//! Movie Chat server
//!
//! Entry point: serves the chat page, or chats on the terminal with `--terminal`.

use mimalloc::MiMalloc;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::sync::Arc;

use clap::Parser;
use dotenvy::dotenv;
use tokio::io::BufReader;

use movie_chat::config::{AppConfig, Cli};
use movie_chat::{server, telemetry, terminal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present) before clap reads env-backed flags
    let _ = dotenv();

    let cli = Cli::parse();
    let config = match AppConfig::from_cli(&cli) {
        Ok(c) => Arc::new(c),
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    telemetry::init(&config.logging)?;

    if cli.terminal {
        let state = server::build_state(Arc::clone(&config))?;
        let stdin = BufReader::new(tokio::io::stdin());
        terminal::run(&state.controller, stdin, std::io::stdout()).await?;
        return Ok(());
    }

    server::start_server(config).await
}
