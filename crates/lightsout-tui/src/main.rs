mod animations;
mod app;
mod cli;
mod config;
mod game;
mod layout;
mod logging;
mod render;
mod theme;

use anyhow::Context;
use app::App;
use clap::Parser;
use cli::Cli;
use config::Config;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};
use std::time::{Duration, Instant};
use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::resolve(&cli).context("failed to load configuration")?;

    if let Some(path) = &config.log_file {
        logging::init(path, &config.log_level)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
    }
    info!(?config, "starting lightsout");

    let mut app = App::new(&config).context("failed to create game")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Run the app
    let result = run_app(&mut stdout, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;

    if let Err(e) = &result {
        error!("terminal error: {}", e);
    }
    info!("exiting");

    result.context("terminal error")
}

fn run_app(stdout: &mut io::Stdout, app: &mut App) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        let tick_rate = app.get_tick_rate();

        render::render(stdout, app)?;
        stdout.flush()?;

        // Handle input with timeout for animation updates
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout.min(Duration::from_millis(33)))? {
            let action = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    // Handle Ctrl+C
                    if key.modifiers.contains(KeyModifiers::CONTROL)
                        && key.code == KeyCode::Char('c')
                    {
                        break;
                    }
                    app.handle_key(key)
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => app::AppAction::Continue,
            };
            if action == app::AppAction::Quit {
                break;
            }
        }

        // Tick animations and timer
        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
