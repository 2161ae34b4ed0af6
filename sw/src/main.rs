use std::fs;
use std::path::Path;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use streakwidget::cli::{Cli, Command, InputArgs};
use streakwidget::config::{Config, OutputFormat};
use streakwidget::{CircleState, DayCell, LabelBrightness, ProgressSnapshot, RenderPlan, WidgetEngine};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Priority: CLI --log-level > config file > default (INFO)
    let level = match cli_log_level.or(config_log_level).map(|s| s.to_uppercase()) {
        Some(s) => match s.as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        },
        None => tracing::Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .try_init()
        .map_err(|e| eyre::eyre!("Failed to initialize logging: {}", e))?;

    Ok(())
}

fn read_snapshot(path: Option<&Path>, prefs: bool) -> Result<ProgressSnapshot> {
    let Some(path) = path else {
        debug!("read_snapshot: no snapshot file, using defaults");
        return Ok(ProgressSnapshot::default());
    };

    let content = fs::read_to_string(path).context(format!("Failed to read snapshot: {}", path.display()))?;
    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yml") || e.eq_ignore_ascii_case("yaml"));

    let snapshot = if prefs {
        let map: Map<String, Value> = if is_yaml {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };
        ProgressSnapshot::from_prefs(&map)
    } else if is_yaml {
        serde_yaml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };

    Ok(snapshot)
}

fn derive_plan(input: &InputArgs, config: &Config) -> Result<RenderPlan> {
    let snapshot = read_snapshot(input.snapshot.as_deref(), input.prefs).context("Failed to load snapshot")?;
    let options = config.options_for(input.layout.unwrap_or(config.layout));
    let date = input.date.unwrap_or_else(|| chrono::Local::now().date_naive());

    info!(%date, streak = snapshot.current_streak, "Deriving widget state");
    Ok(WidgetEngine::new(options).derive(&snapshot, &date))
}

fn cell_glyph(cell: &DayCell) -> &'static str {
    match cell.symbol.glyph() {
        "" => "·",
        glyph => glyph,
    }
}

fn print_text(plan: &RenderPlan) {
    println!("{}", plan.counter_text);
    println!("{}", plan.subtitle_text);
    if let Some(cta) = &plan.cta_text {
        println!("[{}]", cta);
    }
    let labels: Vec<String> = plan.days.iter().map(|d| d.weekday_label.to_string()).collect();
    let glyphs: Vec<&str> = plan.days.iter().map(cell_glyph).collect();
    println!("{}", labels.join(" "));
    println!("{}", glyphs.join(" "));
}

fn print_preview(plan: &RenderPlan) {
    println!("{}  {}", plan.counter_text.bold(), plan.subtitle_text);

    let labels: Vec<String> = plan
        .days
        .iter()
        .map(|d| {
            let label = d.weekday_label.to_string();
            match d.label_brightness {
                LabelBrightness::Full => label.bold().to_string(),
                LabelBrightness::Dim => label.dimmed().to_string(),
            }
        })
        .collect();
    println!("{}", labels.join("  "));

    let circles: Vec<String> = plan
        .days
        .iter()
        .map(|d| {
            let glyph = cell_glyph(d);
            match d.circle_state {
                CircleState::Done => glyph.green().to_string(),
                CircleState::DoneToday => glyph.bright_green().bold().to_string(),
                CircleState::TodayPending => glyph.yellow().to_string(),
                CircleState::Missed => glyph.red().to_string(),
                CircleState::Pending => glyph.dimmed().to_string(),
            }
        })
        .collect();
    println!("{}", circles.join("  "));

    if let Some(cta) = &plan.cta_text {
        println!("{} {}", "⚡".yellow(), cta.cyan());
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, config_warnings) = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    setup_logging(cli.log_level.as_deref(), config.log_level.as_deref()).context("Failed to setup logging")?;
    for warning in &config_warnings {
        warn!("{}", warning);
    }
    debug!(?config, "streakwidget starting");

    match cli.command {
        Command::Derive { input, format } => {
            let plan = derive_plan(&input, &config)?;
            match format.unwrap_or(config.output) {
                OutputFormat::Text => print_text(&plan),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
                OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&plan)?),
            }
        }
        Command::Preview { input } => {
            let plan = derive_plan(&input, &config)?;
            print_preview(&plan);
        }
        Command::Config => {
            print!("{}", serde_yaml::to_string(&config)?);
            println!("# resolved options");
            print!("{}", serde_yaml::to_string(&config.options())?);
        }
    }

    Ok(())
}
