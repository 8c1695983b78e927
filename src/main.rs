use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;

use clipshim::app::App;
use clipshim::config::{self, ClipboardBackend, Config, ConfigResult, InterceptMode};
use clipshim::error::ClipshimError;

/// Clipboard shortcut interceptor playground
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Intercepts Ctrl/Cmd + C, X, V and A on a small terminal form"
)]
struct Args {
    /// How shortcuts are carried out (overrides the config file)
    #[arg(long, value_enum)]
    mode: Option<InterceptMode>,

    /// Clipboard backend (overrides the config file)
    #[arg(long, value_enum)]
    backend: Option<ClipboardBackend>,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    // Writes to /tmp/clipshim-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        if let Ok(log_file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/clipshim-debug.log")
        {
            env_logger::Builder::new()
                .filter_level(log::LevelFilter::Debug)
                .target(env_logger::Target::Pipe(Box::new(log_file)))
                .format(|buf, record| {
                    use std::time::SystemTime;
                    let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                    writeln!(
                        buf,
                        "[{}] [{}] {}",
                        datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                        record.level(),
                        record.args()
                    )
                })
                .init();
        }

        log::debug!("=== CLIPSHIM DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let args = Args::parse();

    let ConfigResult { config, warning } = config::load_config();
    let config = apply_overrides(config, &args);

    if args.print_config {
        if let Some(warning) = &warning {
            eprintln!("warning: {}", warning);
        }
        print!("{}", render_config(&config)?);
        return Ok(());
    }

    let terminal = init_terminal()?;
    let result = run(terminal, App::new(&config), warning);
    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== CLIPSHIM DEBUG SESSION ENDED ===");

    Ok(())
}

/// Command-line flags win over the config file
fn apply_overrides(mut config: Config, args: &Args) -> Config {
    if let Some(mode) = args.mode {
        config.interceptor.mode = mode;
    }
    if let Some(backend) = args.backend {
        config.clipboard.backend = backend;
    }
    config
}

fn render_config(config: &Config) -> Result<String, ClipshimError> {
    toml::to_string(config).map_err(|e| ClipshimError::ConfigRender(e.to_string()))
}

/// Initialize terminal with raw mode, alternate screen, and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste) {
        let _ = disable_raw_mode();
        return Err(ClipshimError::from(e).into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(ClipshimError::from(e).into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App, warning: Option<String>) -> Result<()> {
    if let Some(warning) = warning {
        app.notification.show_warning(&warning);
    }

    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    app.shutdown();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let args = Args::parse_from(["clipshim", "--mode", "native", "--backend", "osc52"]);

        let config = apply_overrides(Config::default(), &args);

        assert_eq!(config.interceptor.mode, InterceptMode::Native);
        assert_eq!(config.clipboard.backend, ClipboardBackend::Osc52);
    }

    #[test]
    fn test_missing_flags_keep_config() {
        let args = Args::parse_from(["clipshim"]);
        let mut config = Config::default();
        config.clipboard.backend = ClipboardBackend::Memory;

        let config = apply_overrides(config, &args);

        assert_eq!(config.interceptor.mode, InterceptMode::Manual);
        assert_eq!(config.clipboard.backend, ClipboardBackend::Memory);
    }

    #[test]
    fn test_render_config_is_toml() {
        let rendered = render_config(&Config::default()).unwrap();
        assert!(rendered.contains("[clipboard]"));
        assert!(rendered.contains("[interceptor]"));
    }
}
