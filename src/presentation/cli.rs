//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::value_objects::Point;

/// piemenu - pie menu for the terminal
///
/// Reads an indented item list on stdin, shows it as nested pie menus and
/// prints the chosen item's output on stdout.
#[derive(Parser, Debug)]
#[command(name = "piemenu")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Items are one per line; each leading tab nests an item one level deeper.")]
pub struct Cli {
    /// Name of the menu surfaces, shown as the terminal title
    #[arg(default_value = "piemenu")]
    pub title: String,

    /// Configuration file (overrides the user config)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Pointer position in pixels the root pie is centred on (default: screen centre)
    #[arg(short, long, value_name = "X,Y", value_parser = parse_position)]
    pub position: Option<Point>,

    /// Print the laid-out menu tree as JSON instead of showing it
    #[arg(long)]
    pub dump_layout: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse `X,Y` into a point
pub fn parse_position(value: &str) -> Result<Point, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{value}'"))?;
    let coord = |s: &str| {
        s.trim()
            .parse::<i32>()
            .map_err(|e| format!("invalid coordinate '{}': {e}", s.trim()))
    };
    Ok(Point::new(coord(x)?, coord(y)?))
}
