//! themecalc: terminal calculator
//!
//! ## Usage
//!
//! ```bash
//! themecalc                        # stored theme, or the terminal's dark/light hint
//! themecalc --theme theme-2        # start on a theme (and store it)
//! themecalc --prefs ./prefs.json   # keep the theme preference elsewhere
//! themecalc -vv --log-file calc.log
//! ```

use std::fs::File;
use std::io;
use std::panic;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;

use clap::{ArgAction, Parser};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::{debug, info};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use themecalc::config::{AppConfig, ColorScheme};
use themecalc::error::{AppError, AppResult};
use themecalc::theme::Theme;
use themecalc::tui::{render, CalculatorApp, CalculatorLayout, InputHandler, KeyAction, Keypad};

/// Themeable four-function calculator for the terminal
#[derive(Debug, Parser)]
#[command(name = "themecalc", version, about)]
struct Cli {
    /// JSON config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Preference file holding the chosen theme
    #[arg(long, value_name = "PATH")]
    prefs: Option<PathBuf>,

    /// Start on this theme (theme-1, theme-2, theme-3)
    #[arg(long, value_name = "THEME")]
    theme: Option<Theme>,

    /// Treat the terminal as dark when no theme is stored
    #[arg(long, conflicts_with = "light")]
    dark: bool,

    /// Treat the terminal as light when no theme is stored
    #[arg(long)]
    light: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;
    init_logging(&config)?;

    let store = config.prefs_store()?;
    info!(path = %store.path().display(), "using preference file");
    let colorfgbg = std::env::var("COLORFGBG").ok();
    let prefers_dark = config.color_scheme.prefers_dark(colorfgbg.as_deref());

    let mut app = CalculatorApp::with_store(Box::new(store), prefers_dark);
    if let Some(theme) = config.theme {
        if theme != app.theme() {
            app.set_theme(theme);
        }
    }

    run_terminal(app)
}

/// Merges the config file (if any) with command-line flags; flags win
fn build_config(cli: &Cli) -> AppResult<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::new(),
    };

    if let Some(path) = &cli.prefs {
        config = config.with_prefs_path(path);
    }
    if let Some(theme) = cli.theme {
        config = config.with_theme(theme);
    }
    if cli.dark {
        config = config.with_color_scheme(ColorScheme::Dark);
    } else if cli.light {
        config = config.with_color_scheme(ColorScheme::Light);
    }
    if let Some(path) = &cli.log_file {
        config = config.with_log_file(path);
    }
    match cli.verbose {
        0 => {}
        1 => config = config.with_log_level("info"),
        2 => config = config.with_log_level("debug"),
        _ => config = config.with_log_level("trace"),
    }

    Ok(config)
}

/// Installs the tracing subscriber; `RUST_LOG` overrides the configured level
fn init_logging(config: &AppConfig) -> AppResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| AppError::config(format!("invalid log level {:?}: {e}", config.log_level)))?;

    let writer = match &config.log_file {
        Some(path) => BoxMakeWriter::new(Mutex::new(File::create(path)?)),
        None => BoxMakeWriter::new(io::stderr),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(config.log_file.is_none())
                .with_writer(writer),
        )
        .with(filter)
        .init();
    Ok(())
}

fn run_terminal(app: CalculatorApp) -> AppResult<()> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: CalculatorApp,
) -> AppResult<()> {
    let input_handler = InputHandler::new();
    let keypad = Keypad::new();

    while !app.should_quit() {
        terminal.draw(|f| render(&app, f))?;

        match event::read()? {
            Event::Key(key) => app.handle(input_handler.handle_key(key)),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let size = terminal.size()?;
                let area = Rect::new(0, 0, size.width, size.height);
                let keypad_area = CalculatorLayout::new(area).keypad;
                if let Some(token) = keypad.hit_test(keypad_area, mouse.column, mouse.row) {
                    app.handle(KeyAction::Press(token));
                }
            }
            _ => {}
        }
    }

    debug!(display = app.display(), theme = %app.theme(), "exiting");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("themecalc").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = build_config(&parse(&[])).unwrap();
        assert_eq!(config, AppConfig::new());
    }

    #[test]
    fn test_flags_override() {
        let config = build_config(&parse(&[
            "--prefs",
            "/tmp/p.json",
            "--theme",
            "theme-2",
            "--dark",
            "-vv",
        ]))
        .unwrap();
        assert_eq!(config.prefs_path, Some(PathBuf::from("/tmp/p.json")));
        assert_eq!(config.theme, Some(Theme::Two));
        assert_eq!(config.color_scheme, ColorScheme::Dark);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_light_flag() {
        let config = build_config(&parse(&["--light"])).unwrap();
        assert_eq!(config.color_scheme, ColorScheme::Light);
    }

    #[test]
    fn test_dark_and_light_conflict() {
        assert!(Cli::try_parse_from(["themecalc", "--dark", "--light"]).is_err());
    }

    #[test]
    fn test_unknown_theme_rejected() {
        assert!(Cli::try_parse_from(["themecalc", "--theme", "theme-9"]).is_err());
    }

    #[test]
    fn test_config_file_then_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"theme": "theme-3", "log_level": "info"}"#).unwrap();

        let config = build_config(&parse(&["--config", path.to_str().unwrap(), "-vvv"])).unwrap();
        assert_eq!(config.theme, Some(Theme::Three));
        assert_eq!(config.log_level, "trace");
    }

    #[test]
    fn test_missing_config_file() {
        let err = build_config(&parse(&["--config", "/nonexistent/themecalc.json"])).unwrap_err();
        assert!(matches!(err, AppError::Config { .. }));
    }
}
