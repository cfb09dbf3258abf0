use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use aprovechamiento_inputs::{
    build_paired_cell, parse_cells, render_cells, wrap_preview_page, InputDescriptor, Sexo,
    REGISTRY,
};

#[derive(Parser)]
#[command(name = "aprov", version)]
#[command(about = "Render aprovechamiento input fragments")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a single numeric input
    Input {
        /// Aprovechamiento concept id
        concept_id: String,

        /// Category marker (M or F)
        #[arg(long, default_value = "M")]
        sexo: Sexo,

        /// Initial value
        #[arg(long, default_value = "")]
        value: String,

        /// Write output to file instead of stdout
        #[arg(short)]
        o: Option<PathBuf>,
    },

    /// Render the male/female pair for one concept
    Cell {
        /// Aprovechamiento concept id
        concept_id: String,

        /// Initial male count
        #[arg(long, default_value = "")]
        male: String,

        /// Initial female count
        #[arg(long, default_value = "")]
        female: String,

        /// Write output to file instead of stdout
        #[arg(short)]
        o: Option<PathBuf>,
    },

    /// Render every cell listed in a JSON file
    Batch {
        /// JSON array of {concept_id, male, female}
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = BatchFormat::Json)]
        format: BatchFormat,

        /// Page title (page format only)
        #[arg(long, default_value = "Aprovechamiento")]
        title: String,

        /// Write output to file instead of stdout
        #[arg(short)]
        o: Option<PathBuf>,
    },

    /// Print the style/label registry as JSON
    Styles,
}

#[derive(Clone, Copy, ValueEnum)]
enum BatchFormat {
    /// JSON array of {concept_id, html}
    Json,
    /// Cell fragments separated by newlines
    Html,
    /// Standalone preview document
    Page,
}

fn init_logger(verbose: bool) {
    let default = if verbose {
        "aprovechamiento_inputs=debug,aprov=debug,info"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn emit(output: &str, o: Option<&Path>, kind: &str) -> Result<()> {
    match o {
        Some(path) => {
            fs::write(path, output)
                .with_context(|| format!("cannot write '{}'", path.display()))?;
            info!(path = %path.display(), bytes = output.len(), "wrote {kind}");
        }
        None => print!("{output}"),
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Input {
            concept_id,
            sexo,
            value,
            o,
        } => {
            let desc = InputDescriptor::new(concept_id, sexo).with_value(value);
            debug!(id = %desc.element_id(), "rendering input");
            emit(&desc.render(), o.as_deref(), "input")
        }

        Commands::Cell {
            concept_id,
            male,
            female,
            o,
        } => emit(&build_paired_cell(&concept_id, &male, &female), o.as_deref(), "cell"),

        Commands::Batch {
            file,
            format,
            title,
            o,
        } => {
            let source = fs::read_to_string(&file)
                .with_context(|| format!("cannot read '{}'", file.display()))?;
            let cells = parse_cells(&source)
                .with_context(|| format!("invalid batch '{}'", file.display()))?;
            info!(count = cells.len(), "rendering batch");

            let output = match format {
                BatchFormat::Json => serde_json::to_string_pretty(&render_cells(&cells))?,
                BatchFormat::Html => render_cells(&cells)
                    .into_iter()
                    .map(|c| c.html)
                    .collect::<Vec<_>>()
                    .join("\n"),
                BatchFormat::Page => wrap_preview_page(&title, &cells),
            };
            emit(&output, o.as_deref(), "batch")
        }

        Commands::Styles => {
            println!("{}", serde_json::to_string_pretty(&REGISTRY)?);
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
