use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use savethedog::config::GameConfig;
use savethedog::core::engine::Engine;
use savethedog::core::terminal;
use savethedog::DogGame;
use tracing::{error, info};

const LOG_FILE: &str = "savethedog.log";

/// Log to a file; the terminal belongs to the game.
fn init_logging() {
    let Ok(log_file) = std::fs::File::create(LOG_FILE) else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
}

async fn run(config: GameConfig) -> Result<()> {
    let game = DogGame::load(config.clone());
    let terminal = terminal::init(config.window.title)?;

    let result = Engine::new(game).run(terminal).await;

    terminal::restore();
    result
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_logging();
    info!(version = env!("CARGO_PKG_VERSION"), "starting Save the Dog");

    match run(GameConfig::default()).await {
        Ok(()) => {
            info!("bye");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = ?e, "fatal error");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
