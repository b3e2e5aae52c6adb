use std::{io, path::PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{LevelFilter, debug};
use picker_schema::get_schema;
use pickerctl::{
    commands::SchemaHandler,
    config::{CliConfig, OutputFormat},
};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the config file (default: ./.pickerctl.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: SubCommands,
}

#[derive(Subcommand)]
enum SubCommands {
    /// List attribute names in declaration order
    List,
    /// Show the type and default of one attribute
    Show {
        /// Attribute name, e.g. `scanSettings.searchArea`
        attribute: String,
    },
    /// Dump the full schema table
    Dump {
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },
    /// Dump the default values
    Defaults {
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },
    /// Print a JSON Schema for attribute documents
    JsonSchema {
        /// Print the schema of `.pickerctl.toml` instead
        #[arg(long)]
        cli_config: bool,
    },
    /// Type-check a JSON or TOML attribute document
    Check {
        /// Document path
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    let workdir = std::env::current_dir()?;
    let format = match &cli.command {
        SubCommands::Dump { format } | SubCommands::Defaults { format } => *format,
        _ => None,
    };
    let config =
        CliConfig::load(cli.config.as_deref(), &workdir)?.with_overrides(format, cli.no_color);
    debug!("config: {config:?}");

    if !config.color {
        colored::control::set_override(false);
    }

    let handler = SchemaHandler::new(get_schema(), config);
    let mut out = io::stdout().lock();

    match cli.command {
        SubCommands::List => handler.list(&mut out)?,
        SubCommands::Show { attribute } => handler.show(&attribute, &mut out)?,
        SubCommands::Dump { .. } => handler.dump(&mut out)?,
        SubCommands::Defaults { .. } => handler.defaults(&mut out)?,
        SubCommands::JsonSchema { cli_config: false } => handler.json_schema(&mut out)?,
        SubCommands::JsonSchema { cli_config: true } => handler.config_schema(&mut out)?,
        SubCommands::Check { file } => handler.check(&file, &mut out)?,
    }

    Ok(())
}
