//! Command-line interface for the harvester.

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use console::style;

use crate::affiliation::NoAffiliations;
use crate::error::Result;
use crate::harvester::{harvest_nma, harvest_production};
use crate::vocabulary::MemoryResolver;

/// CCMM Harvester - Convert CCMM metadata XML to repository records.
#[derive(Parser)]
#[command(name = "ccmm-harvester")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a CCMM XML document to a JSON record.
    Convert {
        /// Path to the CCMM XML document
        input: PathBuf,

        /// Path to the vocabulary YAML file (category -> iri -> id maps)
        #[arg(short, long)]
        vocabularies: PathBuf,

        /// Target record shape
        #[arg(short, long, value_enum, default_value = "nma")]
        target: Target,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// The record shape to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    /// National Metadata Aggregator record
    Nma,
    /// Deposition repository record
    Production,
}

/// Run the CLI.
///
/// # Errors
/// Propagates conversion and IO failures to the caller, which reports them
/// and sets the exit code.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            vocabularies,
            target,
            output,
        } => convert_command(&input, &vocabularies, target, output.as_deref()),
    }
}

/// Execute the convert command.
fn convert_command(
    input: &std::path::Path,
    vocabularies: &std::path::Path,
    target: Target,
    output: Option<&std::path::Path>,
) -> Result<()> {
    let xml = fs::read_to_string(input)?;
    let resolver = MemoryResolver::from_yaml(&fs::read_to_string(vocabularies)?)?;

    let record = match target {
        Target::Nma => harvest_nma(&xml, &resolver)?,
        Target::Production => harvest_production(&xml, &resolver, &NoAffiliations)?,
    };

    let json = serde_json::to_string_pretty(&record)?;
    match output {
        Some(path) => {
            fs::write(path, json)?;
            eprintln!(
                "{} {}",
                style("Saved to:").green().bold(),
                path.display()
            );
        }
        None => println!("{json}"),
    }

    Ok(())
}
