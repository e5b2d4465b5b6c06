mod app;
mod cli;
mod cursor;
mod input;
mod intro;
mod layout;
mod links;
mod logging;
mod page;
mod reveal;
mod scroll;

use clap::Parser;
use ratatui::DefaultTerminal;
use starfolio_config::Config;

use crate::app::App;
use crate::cli::Args;
use crate::input::MouseCapture;
use crate::links::SystemLauncher;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    // Held until after the terminal is restored so the last lines are flushed.
    let log = if args.print_config {
        None
    } else {
        logging::init(args.log_level.as_deref())?
    };
    if let Some(log) = &log {
        tracing::info!(
            "starfolio v{} starting, logging to {}",
            env!("CARGO_PKG_VERSION"),
            log.path.display()
        );
    }

    let config = match starfolio_config::load(args.config.as_deref()) {
        Ok(config) => config,
        // A file named on the command line must be usable.
        Err(e) if args.config.is_some() => return Err(e.into()),
        Err(e) => {
            tracing::warn!("{e}; using default settings");
            Config::default()
        }
    };

    if args.print_config {
        print!("{}", config.to_toml());
        return Ok(());
    }
    tracing::debug!(?config, seed = ?args.seed, "effective settings");

    let terminal = ratatui::init();
    let result = run(terminal, &config, args.seed);
    ratatui::restore();
    drop(log);
    result
}

/// Runs the page with mouse capture held for its whole lifetime.
fn run(terminal: DefaultTerminal, config: &Config, seed: Option<u64>) -> color_eyre::Result<()> {
    let mouse = MouseCapture::acquire(config.mouse)?;
    tracing::debug!(captured = mouse.is_active(), "input ready");
    let result = App::new(config, seed, Box::new(SystemLauncher)).run(terminal);
    drop(mouse);
    result
}
