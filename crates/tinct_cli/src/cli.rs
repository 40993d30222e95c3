use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tinct_theme::{ColorRole, ThemeMode};

/// Inspect OKLCH colors, WCAG contrast and theme property maps.
#[derive(Parser, Debug)]
#[command(name = "tinct", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (defaults to ./tinct.toml when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format for all subcommands.
    #[arg(long, value_enum, default_value = "human", global = true)]
    pub output: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show a color in every representation.
    Convert {
        /// Hex, rgb(), hsl() or oklch() text.
        color: String,
    },

    /// Contrast ratio and WCAG grades for a color pair.
    Contrast {
        background: String,
        foreground: String,
    },

    /// Print the property map a theme synchronizes.
    Vars(ThemeArgs),

    /// Grade the theme's catalogue of color pairs.
    Audit(ThemeArgs),

    /// Print a theme as TOML.
    Export(ThemeArgs),

    /// List built-in presets.
    Presets,
}

#[derive(Args, Debug)]
pub struct ThemeArgs {
    /// Built-in preset id.
    #[arg(long, conflicts_with = "theme")]
    pub preset: Option<String>,

    /// Theme TOML file.
    #[arg(long)]
    pub theme: Option<PathBuf>,

    /// Color mode.
    #[arg(long, value_parser = parse_mode)]
    pub mode: Option<ThemeMode>,

    /// Override a role's color in the selected mode, e.g. `primary=#3b82f6`.
    #[arg(long = "set", value_name = "ROLE=COLOR", value_parser = parse_override)]
    pub overrides: Vec<ColorOverride>,
}

/// One `--set ROLE=COLOR` argument
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorOverride {
    pub role: ColorRole,
    pub color: String,
}

fn parse_mode(value: &str) -> Result<ThemeMode, String> {
    value.parse()
}

fn parse_override(value: &str) -> Result<ColorOverride, String> {
    let (role, color) = value
        .split_once('=')
        .ok_or_else(|| format!("expected ROLE=COLOR, got `{value}`"))?;
    Ok(ColorOverride {
        role: role.trim().parse()?,
        color: color.trim().to_string(),
    })
}

/// Output format selection for all subcommands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Single JSON document on stdout.
    Json,
    /// Human-readable text on stdout.
    #[default]
    Human,
}
