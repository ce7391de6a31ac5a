//! piemenu CLI
//!
//! Usage: piemenu [OPTIONS] [TITLE] < items
//!
//! Prints the chosen item's output on stdout. Cancelling prints nothing;
//! both exit with status 0.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use piemenu::application::{prepare, run_session, Placement};
use piemenu::config::{Config, Font, Style};
use piemenu::domain::services::{Navigator, Outcome};
use piemenu::infrastructure::terminal::{screen_pixels, CellMetrics, TerminalBackend};
use piemenu::logging;
use piemenu::presentation::{Cli, LayoutView};
use piemenu::ui::terminal::detect_capabilities;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let log_guard = logging::init(cli.verbose);

    let result = run(&cli, &log_guard);
    log_guard.flush();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, log_guard: &logging::LogGuard) -> Result<()> {
    let (config, warnings) = Config::resolve(cli.config.as_deref())?;
    for warning in &warnings {
        log::warn!("{warning}");
    }

    let caps = detect_capabilities();
    let mut style = Style::resolve(&config)?;
    if !caps.supports_unicode {
        log::info!("terminal lacks unicode support, using ascii glyphs");
        style.font = Font::Ascii;
    }

    let shape = config.geometry.shape();
    let screen = screen_pixels(caps.width, caps.height);
    let placement = Placement {
        shape,
        screen,
        pointer: cli.position.unwrap_or_else(|| Placement::screen_center(screen)),
    };

    let metrics = CellMetrics::new(&style, &shape);
    let tree = prepare(io::stdin().lock(), &placement, &metrics)?;

    if cli.dump_layout {
        let json = LayoutView::new(&tree)
            .to_json()
            .context("failed to serialize layout")?;
        println!("{json}");
        return Ok(());
    }

    let mut navigator = Navigator::new(tree, shape);
    log_guard.hold();
    let outcome = {
        let mut backend = TerminalBackend::open(style, shape, &cli.title, &caps)?;
        run_session(&mut navigator, &mut backend)?
        // Backend dropped here, restoring the terminal before anything is printed
    };

    if let Outcome::Chosen(output) = outcome {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{output}")?;
        stdout.flush()?;
    }
    Ok(())
}
