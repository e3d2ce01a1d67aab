//! `freela-tokens`: emit, validate and inspect design tokens and brand themes.

mod commands;
mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "freela-tokens")]
#[command(about = "Design tokens and brand themes for the Freela site")]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to ./freela.toml when present)
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Log filter, overriding `[log] level` (RUST_LOG still wins)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the `:root` block of CSS custom properties
    Css {
        #[arg(long)]
        prefix: Option<String>,

        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Print the utility-CSS framework configuration as JSON
    Framework {
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Single-line JSON
        #[arg(long)]
        compact: bool,
    },
    /// Validate the token tree
    Validate {
        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,

        #[arg(long)]
        json: bool,
    },
    /// Resolve a token by dot path (e.g. colors.brand.freela.500)
    Get {
        path: String,

        /// Fail instead of printing the fallback value
        #[arg(long)]
        strict: bool,
    },
    /// Inspect and switch brand themes
    Theme {
        #[command(subcommand)]
        command: ThemeCommand,
    },
}

#[derive(Subcommand)]
enum ThemeCommand {
    /// Print a brand's component styles
    Show {
        brand: String,

        #[arg(long)]
        json: bool,
    },
    /// Print the persisted brand
    Current {
        /// Also print the root properties the brand applies
        #[arg(long)]
        css: bool,
    },
    /// Select and persist a brand
    Set { brand: String },
    /// Forget the persisted brand
    Clear,
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    init_tracing(cli.log_level.as_deref().unwrap_or(&config.log.level));

    match cli.command {
        Commands::Css { prefix, output } => {
            let prefix = prefix.unwrap_or_else(|| config.css.prefix.clone());
            let output = output.or_else(|| config.css.output.clone());
            commands::emit(&commands::css(&prefix), output.as_deref())?;
        }
        Commands::Framework { output, compact } => {
            let pretty = config.framework.pretty && !compact;
            let output = output.or_else(|| config.framework.output.clone());
            commands::emit(&commands::framework(pretty)?, output.as_deref())?;
        }
        Commands::Validate { strict, json } => {
            let (report, text) = commands::validate(json)?;
            println!("{}", text);
            if !report.valid || (strict && !report.warnings.is_empty()) {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Get { path, strict } => {
            println!("{}", commands::get(&path, strict)?);
        }
        Commands::Theme { command } => match command {
            ThemeCommand::Show { brand, json } => {
                println!("{}", commands::theme_show(&brand, json)?);
            }
            ThemeCommand::Current { css } => {
                println!("{}", commands::theme_current(&config, css));
            }
            ThemeCommand::Set { brand } => {
                println!("{}", commands::theme_set(&config, &brand)?);
            }
            ThemeCommand::Clear => {
                println!("{}", commands::theme_clear(&config));
            }
        },
    }

    Ok(ExitCode::SUCCESS)
}
