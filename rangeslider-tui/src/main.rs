//! Range slider TUI: two value fields and a dual-handle slider.
//!
//! Drag either handle with the mouse, or type a value into the Lower or
//! Upper field and press Enter. The gap between the handles is shown both as
//! a fraction of the track and in real units.

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use rangeslider_core::{RangeSlider, SliderConfig};
use rangeslider_tui::{input, logging, ui, AppState};

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), DisableMouseCapture, LeaveAlternateScreen);
        default_hook(info);
    }));

    let log_guard = logging::setup_logs(&logging::log_dir())?;

    let config_path = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("rangeslider")
        .join("config.toml");
    let config = if config_path.exists() {
        SliderConfig::from_file(&config_path)
            .with_context(|| format!("invalid config {}", config_path.display()))?
    } else {
        SliderConfig::default()
    };
    let slider = RangeSlider::new(&config).context("cannot build slider")?;
    info!(
        start = slider.range().start(),
        end = slider.range().end(),
        log = %log_guard.file().display(),
        "starting"
    );

    let mut app = AppState::new(slider);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    info!(snapshot = ?app.slider.snapshot(), "shutting down");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                _ => {}
            }
        }

        // 3. Pull handle changes into the fields
        app.sync_fields();

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
