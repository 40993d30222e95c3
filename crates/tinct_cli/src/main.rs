pub mod cli;
pub mod config;
pub mod output;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tinct_core::{evaluate, parse_any, ColorToken, ContrastResult, Hsv, Rgb};
use tinct_theme::{
    audit, MemoryStyleTarget, StyleTarget, SyncEngine, ThemeData, ThemeMode, ThemePreset,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Command, ThemeArgs};
use crate::config::TinctConfig;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tinct=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = TinctConfig::load(cli.config.as_deref())?;
    let engine = SyncEngine::new(config.sync.clone());

    match cli.command {
        Command::Convert { color } => convert(cli.output, &color),
        Command::Contrast {
            background,
            foreground,
        } => contrast(cli.output, &background, &foreground),
        Command::Vars(args) => vars(cli.output, &engine, &config, &args),
        Command::Audit(args) => {
            let (theme, mode) = resolve_theme(&config, &args)?;
            let reports = audit(theme.colors(mode));
            output::emit(cli.output, &reports, |r| output::audit(r))
        }
        Command::Export(args) => {
            let (theme, _) = resolve_theme(&config, &args)?;
            print!("{}", theme.to_toml()?);
            Ok(())
        }
        Command::Presets => {
            let presets: Vec<PresetInfo> = ThemePreset::all()
                .iter()
                .map(|preset| PresetInfo {
                    id: preset.id(),
                    name: preset.display_name(),
                })
                .collect();
            output::emit(cli.output, &presets, |presets| {
                presets
                    .iter()
                    .map(|p| format!("{:<10} {}\n", p.id, p.name))
                    .collect()
            })
        }
    }
}

#[derive(Serialize)]
struct PresetInfo {
    id: &'static str,
    name: &'static str,
}

#[derive(Serialize)]
struct ColorView {
    oklch: String,
    hex: String,
    rgb: Rgb,
    hsv: Hsv,
}

fn convert(format: cli::OutputFormat, input: &str) -> Result<()> {
    let token = ColorToken::try_from_css("input", input)
        .with_context(|| format!("cannot convert `{input}`"))?;
    let view = ColorView {
        oklch: token.value().to_string(),
        hex: token.hex().to_string(),
        rgb: token.rgb(),
        hsv: token.hsv(),
    };
    output::emit(format, &view, |v| {
        format!(
            "oklch  {}\nhex    {}\nrgb    rgb({}, {}, {})\nhsv    hsv({:.1}, {:.1}%, {:.1}%)\n",
            v.oklch, v.hex, v.rgb.r, v.rgb.g, v.rgb.b, v.hsv.h, v.hsv.s, v.hsv.v
        )
    })
}

fn contrast(format: cli::OutputFormat, background: &str, foreground: &str) -> Result<()> {
    let bg = parse_any(background).with_context(|| format!("invalid background `{background}`"))?;
    let fg = parse_any(foreground).with_context(|| format!("invalid foreground `{foreground}`"))?;
    let result: ContrastResult = evaluate(&bg, &fg);
    output::emit(format, &result, |r| {
        format!(
            "ratio  {:.2}:1\nnormal {}\nlarge  {}\n",
            r.ratio, r.grade, r.large_text_grade
        )
    })
}

fn vars(
    format: cli::OutputFormat,
    engine: &SyncEngine,
    config: &TinctConfig,
    args: &ThemeArgs,
) -> Result<()> {
    let (theme, mode) = resolve_theme(config, args)?;
    let mut target = MemoryStyleTarget::new();
    let written = engine.load_theme(&mut target, &theme, mode)?;
    engine.set_mode(&mut target, mode);
    info!(
        "theme `{}` ({} mode): {} properties, {} flag {}",
        theme.id,
        mode,
        written,
        engine.config().dark_class,
        if target.has_flag(&engine.config().dark_class) { "set" } else { "clear" }
    );
    output::emit(format, &target.snapshot(), |map| output::properties(map))
}

/// `--theme` file, else `--preset`, else the configured defaults, else
/// the neutral preset. `--set` overrides apply to the selected mode.
fn resolve_theme(config: &TinctConfig, args: &ThemeArgs) -> Result<(ThemeData, ThemeMode)> {
    let mode = args
        .mode
        .or(config.defaults.mode)
        .unwrap_or_default();

    let theme = if let Some(path) = &args.theme {
        load_theme_file(path)?
    } else if let Some(id) = &args.preset {
        preset(id)?.theme()
    } else if let Some(path) = &config.defaults.theme {
        load_theme_file(path)?
    } else if let Some(id) = &config.defaults.preset {
        preset(id)?.theme()
    } else {
        ThemeData::default()
    };

    let theme = args.overrides.iter().try_fold(theme, |theme, edit| {
        theme
            .with_css_color(mode, edit.role, &edit.color)
            .with_context(|| format!("invalid color for {}", edit.role))
    })?;
    Ok((theme, mode))
}

fn preset(id: &str) -> Result<ThemePreset> {
    ThemePreset::from_id(id).with_context(|| {
        let known: Vec<&str> = ThemePreset::all().iter().map(|p| p.id()).collect();
        format!("unknown preset `{id}` (known: {})", known.join(", "))
    })
}

fn load_theme_file(path: &Path) -> Result<ThemeData> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    ThemeData::from_toml_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ColorOverride;
    use tinct_theme::ColorRole;

    fn args() -> ThemeArgs {
        ThemeArgs {
            preset: None,
            theme: None,
            mode: None,
            overrides: Vec::new(),
        }
    }

    fn config(preset: Option<&str>, mode: Option<ThemeMode>) -> TinctConfig {
        let mut config = TinctConfig::default();
        config.defaults.preset = preset.map(str::to_string);
        config.defaults.mode = mode;
        config
    }

    #[test]
    fn falls_back_to_neutral_light() {
        let (theme, mode) = resolve_theme(&TinctConfig::default(), &args()).unwrap();
        assert_eq!(theme.id, "neutral");
        assert_eq!(mode, ThemeMode::Light);
    }

    #[test]
    fn config_defaults_apply_when_flags_are_absent() {
        let config = config(Some("blue"), Some(ThemeMode::Dark));
        let (theme, mode) = resolve_theme(&config, &args()).unwrap();
        assert_eq!(theme.id, "blue");
        assert_eq!(mode, ThemeMode::Dark);
    }

    #[test]
    fn flags_win_over_config_defaults() {
        let config = config(Some("blue"), Some(ThemeMode::Dark));
        let args = ThemeArgs {
            preset: Some("neutral".into()),
            mode: Some(ThemeMode::Light),
            ..args()
        };
        let (theme, mode) = resolve_theme(&config, &args).unwrap();
        assert_eq!(theme.id, "neutral");
        assert_eq!(mode, ThemeMode::Light);
    }

    #[test]
    fn theme_file_wins_over_presets() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        let custom = ThemePreset::Blue.theme();
        let custom = ThemeData {
            id: "custom".into(),
            ..custom
        };
        fs::write(&path, custom.to_toml().unwrap()).unwrap();

        let config = config(Some("blue"), None);
        let args = ThemeArgs {
            theme: Some(path),
            ..args()
        };
        let (theme, _) = resolve_theme(&config, &args).unwrap();
        assert_eq!(theme.id, "custom");
    }

    #[test]
    fn unknown_presets_are_rejected() {
        let err = preset("zinc").unwrap_err();
        assert_eq!(err.to_string(), "unknown preset `zinc` (known: neutral, blue)");

        let config = config(Some("zinc"), None);
        assert!(resolve_theme(&config, &args()).is_err());
    }

    #[test]
    fn overrides_apply_to_the_selected_mode() {
        let args = ThemeArgs {
            preset: Some("blue".into()),
            mode: Some(ThemeMode::Dark),
            overrides: vec![ColorOverride {
                role: ColorRole::Primary,
                color: "#ff0000".into(),
            }],
            ..args()
        };
        let (theme, _) = resolve_theme(&TinctConfig::default(), &args).unwrap();
        let dark = theme.colors(ThemeMode::Dark);
        assert_eq!(dark.token(ColorRole::Primary).unwrap().hex(), "#ff0000");
        assert_eq!(dark.oklch(ColorRole::Ring), dark.oklch(ColorRole::Primary));
        assert_ne!(
            theme.colors(ThemeMode::Light).oklch(ColorRole::Primary),
            dark.oklch(ColorRole::Primary)
        );

        let bad = ThemeArgs {
            overrides: vec![ColorOverride {
                role: ColorRole::Primary,
                color: "blurple".into(),
            }],
            ..self::args()
        };
        let err = resolve_theme(&TinctConfig::default(), &bad).unwrap_err();
        assert_eq!(err.to_string(), "invalid color for primary");
    }
}
