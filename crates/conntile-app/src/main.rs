mod app;
mod app_log;
mod command;
mod display;
mod event;
mod keybindings;
mod panes;
mod presenter;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use conntile_config::{check_collisions, validate_keybindings, AppConfig};
use conntile_core::ClientState;

use crate::app::App;
use crate::app_log::AppLogMakeWriter;

#[derive(Parser, Debug)]
#[command(name = "conntile", version, about = "Browse and explore data connections from the terminal")]
struct Args {
    /// Config file to use instead of the default location.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Client state file (remembers the explored connection).
    #[arg(long, value_name = "PATH")]
    state_file: Option<PathBuf>,

    /// Write the default config file and exit.
    #[arg(long)]
    init_config: bool,

    /// Validate keybindings and exit.
    #[arg(long)]
    check_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.init_config {
        let path = AppConfig::init_default()?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load(),
    };

    if args.check_config {
        return check_config(&config);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(AppLogMakeWriter)
        .with_ansi(false)
        .with_target(false)
        .init();

    let state_path = args.state_file.unwrap_or_else(ClientState::default_path);
    tracing::info!("Client state at {}", state_path.display());
    let client_state = ClientState::load(&state_path);

    install_panic_hook();

    terminal::enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config, client_state);
    let result = app.run(&mut terminal).await;

    terminal::disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;

    result
}

fn check_config(config: &AppConfig) -> anyhow::Result<()> {
    let errors = validate_keybindings(&config.keybindings);
    let collisions = check_collisions(&config.keybindings);

    for invalid in &errors {
        eprintln!("keybindings.{}.{}: {}", invalid.group, invalid.name, invalid.reason);
    }
    for collision in &collisions {
        eprintln!("key {:?} bound to both {} and {}", collision.key, collision.first, collision.second);
    }
    for warning in config.general.warnings() {
        eprintln!("warning: {warning}");
    }

    if errors.is_empty() && collisions.is_empty() {
        println!("Config OK");
        Ok(())
    } else {
        anyhow::bail!("{} invalid key(s), {} collision(s)", errors.len(), collisions.len())
    }
}

fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}
