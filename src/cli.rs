//! CLI argument definitions and command dispatch using clap
//!
//! Every command opens the file-backed session, applies one operation and
//! lets the store persist the result:
//! - data-playground schema add Product text
//! - data-playground row add Product=Laptop Sales=1200
//! - data-playground add-chart --type pie --x Product
//! - data-playground render active --output chart.svg

use crate::app::Playground;
use crate::data::{MoveDirection, SAMPLE_SCHEMAS, find_sample_schema};
use crate::render::{self, Surface};
use crate::settings::{Settings, StorageBackend};
use crate::types::{ChartConfig, ChartConfigUpdate, ChartType, ColorScheme, DataRow, FieldType};
use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

/// Session id used when no session directory is given
pub const DEFAULT_SESSION_ID: &str = "default";

#[derive(Parser, Debug)]
#[command(name = "data-playground")]
#[command(about = "Define a schema, enter rows and render charts as SVG")]
#[command(version)]
pub struct Cli {
    /// Session directory (defaults to the platform cache dir)
    #[arg(long, global = true, env = "DATA_PLAYGROUND_SESSION")]
    pub session: Option<PathBuf>,

    /// Settings file (defaults to the platform config dir)
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replace schema and rows from an export document
    Import {
        /// JSON file to read
        file: PathBuf,
    },
    /// Print (or write) the export document
    Export {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Inspect or edit the schema
    Schema {
        #[command(subcommand)]
        action: Option<SchemaAction>,
    },
    /// Edit rows
    Row {
        #[command(subcommand)]
        action: RowAction,
    },
    /// Load sample data for the current schema
    Sample,
    /// Add a chart (defaults: bar on the first field and first number field)
    AddChart {
        #[arg(long = "type", value_parser = parse_chart_type)]
        chart_type: Option<ChartType>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        x: Option<String>,
        #[arg(long)]
        y: Option<String>,
        #[arg(long, value_parser = parse_color_scheme)]
        scheme: Option<ColorScheme>,
        /// Disable the entrance animation
        #[arg(long)]
        no_animation: bool,
    },
    /// Change an existing chart; omitted options keep their value
    UpdateChart {
        id: String,
        #[arg(long = "type", value_parser = parse_chart_type)]
        chart_type: Option<ChartType>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        x: Option<String>,
        #[arg(long)]
        y: Option<String>,
        #[arg(long, value_parser = parse_color_scheme)]
        scheme: Option<ColorScheme>,
        #[arg(long)]
        legend: Option<bool>,
        #[arg(long)]
        grid: Option<bool>,
        #[arg(long)]
        labels: Option<bool>,
        #[arg(long)]
        animation: Option<bool>,
    },
    /// Make a chart the active one
    Select { id: String },
    /// List charts
    Charts,
    /// Remove a chart
    RemoveChart { id: String },
    /// Render a chart (by id, or `active`) as SVG
    Render {
        #[arg(default_value = "active")]
        chart: String,
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long)]
        width: Option<f64>,
        #[arg(long)]
        height: Option<f64>,
    },
    /// End the session and delete its stored state
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum SchemaAction {
    /// Print the fields
    Show,
    /// Append a field
    Add {
        name: String,
        #[arg(value_parser = parse_field_type)]
        field_type: FieldType,
    },
    /// Remove a field (clears all rows)
    Remove { index: usize },
    /// Move a field up or down
    Move {
        index: usize,
        #[arg(value_parser = parse_direction)]
        direction: MoveDirection,
    },
    /// Load a sample schema by name (random if omitted)
    Sample { name: Option<String> },
}

#[derive(Subcommand, Debug)]
pub enum RowAction {
    /// Append a row from `field=value` pairs
    Add { values: Vec<String> },
    /// Set one cell
    Set {
        index: usize,
        field: String,
        value: String,
    },
    /// Remove a row
    Remove { index: usize },
    /// Remove all rows
    Clear,
}

fn parse_chart_type(value: &str) -> Result<ChartType, String> {
    ChartType::parse(value).ok_or_else(|| {
        let names: Vec<&str> = ChartType::all().iter().map(ChartType::as_str).collect();
        format!("expected one of: {}", names.join(", "))
    })
}

fn parse_color_scheme(value: &str) -> Result<ColorScheme, String> {
    ColorScheme::parse(value).ok_or_else(|| {
        let names: Vec<&str> = ColorScheme::all().iter().map(ColorScheme::as_str).collect();
        format!("expected one of: {}", names.join(", "))
    })
}

fn parse_field_type(value: &str) -> Result<FieldType, String> {
    FieldType::parse(value).ok_or_else(|| "expected one of: text, number, date".to_string())
}

fn parse_direction(value: &str) -> Result<MoveDirection, String> {
    match value {
        "up" => Ok(MoveDirection::Up),
        "down" => Ok(MoveDirection::Down),
        _ => Err("expected up or down".to_string()),
    }
}

fn parse_pair(pair: &str) -> Result<(String, String)> {
    let (field, value) = pair
        .split_once('=')
        .ok_or_else(|| anyhow!("expected field=value, got \"{}\"", pair))?;
    Ok((field.trim().to_string(), value.to_string()))
}

/// Settings with the CLI's overrides applied; the CLI always uses file storage
pub fn effective_settings(cli: &Cli) -> Settings {
    let mut settings = match &cli.settings {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    settings.storage.backend = StorageBackend::File;
    if let Some(dir) = &cli.session {
        settings.storage.dir = Some(dir.clone());
    }
    settings
}

/// Open the session store described by `settings`
pub fn open_playground(settings: &Settings) -> Playground {
    Playground::with_persistence(settings.storage.open(DEFAULT_SESSION_ID))
}

/// Execute one command; returns text for stdout
pub fn run(cli: Cli) -> Result<String> {
    let settings = effective_settings(&cli);
    let mut playground = open_playground(&settings);

    match cli.command {
        Commands::Import { file } => {
            let text = fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            playground.import_json(&text)?;
            Ok(format!(
                "Imported {} fields and {} rows",
                playground.fields().len(),
                playground.row_count()
            ))
        }
        Commands::Export { output } => {
            let json = playground.export_json();
            match output {
                Some(path) => {
                    fs::write(&path, &json)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    Ok(format!("Wrote {}", path.display()))
                }
                None => Ok(json),
            }
        }
        Commands::Schema { action } => run_schema(&mut playground, action.unwrap_or(SchemaAction::Show)),
        Commands::Row { action } => run_row(&mut playground, action),
        Commands::Sample => {
            if playground.schema().is_empty() {
                bail!("Define a schema before loading sample data");
            }
            let count = playground.load_sample_data();
            Ok(format!("Loaded {} sample rows", count))
        }
        Commands::AddChart {
            chart_type,
            title,
            x,
            y,
            scheme,
            no_animation,
        } => {
            if !playground.has_chartable_data() {
                return Err(crate::data::DataError::NothingToChart.into());
            }
            let mut config = playground.default_chart_config();
            if let Some(chart_type) = chart_type {
                config.chart_type = chart_type;
            }
            if let Some(title) = title {
                config.title = title;
            }
            if let Some(x) = x {
                config.x_axis = x;
            }
            if let Some(y) = y {
                config.y_axis = y;
            }
            if let Some(scheme) = scheme {
                config.color_scheme = scheme;
            }
            config.animation = !no_animation;
            let id = config.id.clone();
            playground.add_chart(config);
            Ok(id)
        }
        Commands::UpdateChart {
            id,
            chart_type,
            title,
            x,
            y,
            scheme,
            legend,
            grid,
            labels,
            animation,
        } => {
            let update = ChartConfigUpdate {
                chart_type,
                title,
                x_axis: x,
                y_axis: y,
                show_legend: legend,
                show_grid: grid,
                show_labels: labels,
                color_scheme: scheme,
                animation,
            };
            if update.is_empty() {
                bail!("Nothing to update");
            }
            if !playground.update_chart(&id, &update) {
                bail!("No chart with id {}", id);
            }
            Ok(format!("Updated {}", id))
        }
        Commands::Select { id } => {
            if playground.chart(&id).is_none() {
                bail!("No chart with id {}", id);
            }
            playground.set_active_chart(Some(id.clone()));
            Ok(format!("Selected {}", id))
        }
        Commands::Charts => Ok(list_charts(&playground)),
        Commands::RemoveChart { id } => match playground.remove_chart(&id) {
            Some(_) => Ok(format!("Removed {}", id)),
            None => bail!("No chart with id {}", id),
        },
        Commands::Render {
            chart,
            output,
            width,
            height,
        } => {
            let mut surface: Surface = settings.chart;
            if let Some(width) = width {
                surface.width = width;
            }
            if let Some(height) = height {
                surface.height = height;
            }

            let config: &ChartConfig = if chart == "active" {
                playground
                    .active_chart()
                    .ok_or_else(|| anyhow!("No active chart"))?
            } else {
                playground
                    .chart(&chart)
                    .ok_or_else(|| anyhow!("No chart with id {}", chart))?
            };
            let svg = render::render_chart(playground.schema(), playground.rows(), config, &surface)
                .context("Failed to draw chart")?
                .svg;

            match output {
                Some(path) => {
                    let path = if path.is_dir() {
                        path.join(render::svg_file_name(config))
                    } else {
                        path
                    };
                    fs::write(&path, &svg)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    Ok(format!("Wrote {}", path.display()))
                }
                None => Ok(svg),
            }
        }
        Commands::Clear => {
            playground.end_session();
            Ok("Session cleared".to_string())
        }
    }
}

fn run_schema(playground: &mut Playground, action: SchemaAction) -> Result<String> {
    match action {
        SchemaAction::Show => Ok(playground
            .fields()
            .iter()
            .enumerate()
            .map(|(i, f)| format!("{}\t{}\t{}", i, f.name, f.field_type.as_str()))
            .collect::<Vec<_>>()
            .join("\n")),
        SchemaAction::Add { name, field_type } => {
            playground.add_field(&name, field_type)?;
            Ok(format!("Added {} ({})", name.trim(), field_type.label()))
        }
        SchemaAction::Remove { index } => {
            let removed = playground.remove_field(index)?;
            Ok(format!("Removed {}; all rows cleared", removed.name))
        }
        SchemaAction::Move { index, direction } => {
            if playground.move_field(index, direction) {
                Ok("Moved".to_string())
            } else {
                Ok("Nothing to move".to_string())
            }
        }
        SchemaAction::Sample { name } => {
            let loaded = match name {
                Some(name) => {
                    let sample = find_sample_schema(&name).ok_or_else(|| {
                        let names: Vec<&str> = SAMPLE_SCHEMAS.iter().map(|s| s.name).collect();
                        anyhow!("Unknown sample schema \"{}\" (available: {})", name, names.join(", "))
                    })?;
                    playground.load_sample_schema(sample);
                    sample.name
                }
                None => playground.load_random_sample_schema(),
            };
            Ok(format!("Loaded sample schema {}", loaded))
        }
    }
}

fn run_row(playground: &mut Playground, action: RowAction) -> Result<String> {
    match action {
        RowAction::Add { values } => {
            let pairs = values
                .iter()
                .map(|pair| parse_pair(pair))
                .collect::<Result<Vec<_>>>()?;
            playground.add_row(DataRow::from_pairs(pairs))?;
            Ok(format!("{} rows", playground.row_count()))
        }
        RowAction::Set { index, field, value } => {
            playground.update_cell(index, &field, value)?;
            Ok("Updated".to_string())
        }
        RowAction::Remove { index } => {
            playground.remove_row(index)?;
            Ok(format!("{} rows", playground.row_count()))
        }
        RowAction::Clear => {
            playground.clear_data();
            Ok("0 rows".to_string())
        }
    }
}

fn list_charts(playground: &Playground) -> String {
    let active = playground.active_chart_id();
    playground
        .charts()
        .iter()
        .map(|c| {
            let marker = if Some(c.id.as_str()) == active { "*" } else { " " };
            format!(
                "{} {}\t{}\t{}\tx={}\ty={}",
                marker,
                c.id,
                c.chart_type.as_str(),
                c.title,
                c.x_axis,
                c.y_axis
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
