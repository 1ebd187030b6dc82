use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use briefscan::export::{indicator_rows, ABSENT};
use briefscan::parser::document::{self, DocumentSource};
use briefscan::parser::hangul::recompose_hangul;
use briefscan::pipeline::{export_brief, extract_brief_from_path, PipelineConfig};

#[derive(Parser, Debug)]
#[command(name = "briefscan")]
#[command(version, about = "Macroeconomic indicator extraction from Korean country-brief PDFs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract indicators from a brief PDF and export them
    Extract {
        /// Input PDF file path
        input: PathBuf,

        /// Output directory (default: ./<input_name>_output)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Disable progress output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Dump the flattened text layer of a brief PDF to stdout
    Text {
        /// Input PDF file path
        input: PathBuf,
    },

    /// Show information about a brief PDF
    Info {
        /// Input PDF file path
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            input,
            output,
            quiet,
        } => extract(input, output, quiet),
        Commands::Text { input } => dump_text(input),
        Commands::Info { input } => show_info(input),
    }
}

fn validate_input(input: &PathBuf) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("Input file does not exist: {}", input.display());
    }
    if !input.is_file() {
        anyhow::bail!("Input is not a file: {}", input.display());
    }
    Ok(())
}

fn extract(input: PathBuf, output: Option<PathBuf>, quiet: bool) -> Result<()> {
    validate_input(&input)?;

    let output_dir = output.unwrap_or_else(|| {
        let stem = input.file_stem().unwrap().to_string_lossy();
        PathBuf::from(format!("{}_output", stem))
    });
    let config = PipelineConfig::new(input.clone(), output_dir);

    if !quiet {
        println!("[*] Processing: {}", config.input.display());
        println!("[*] Output: {}", config.output.display());
        println!("\n[+] Extracting indicators...");
    }

    let extraction = extract_brief_from_path(&config.input)
        .with_context(|| format!("Failed to process PDF: {}", config.input.display()))?;

    if !quiet {
        let rows = indicator_rows(&extraction.record);
        let found = rows.iter().filter(|(_, value)| value != ABSENT).count();
        println!("    Fields found: {}/{}", found, rows.len());
        for label in ["GDP (USD bn)", "Unemployment", "Trade balance (USD bn)"] {
            if let Some((_, value)) = rows.iter().find(|(row_label, _)| *row_label == label) {
                println!("    {}: {}", label, value);
            }
        }
        println!("\n[+] Exporting results...");
    }

    export_brief(&extraction, &config.output)
        .with_context(|| format!("Failed to export to: {}", config.output.display()))?;

    if !quiet {
        println!("\n[✓] Done! Results saved to: {}", config.output.display());
    }

    Ok(())
}

fn dump_text(input: PathBuf) -> Result<()> {
    validate_input(&input)?;

    let source = DocumentSource::File(input.clone());
    let raw = document::read_text(&source)
        .with_context(|| format!("Failed to read PDF: {}", input.display()))?;
    println!("{}", recompose_hangul(&raw));

    Ok(())
}

fn show_info(input: PathBuf) -> Result<()> {
    validate_input(&input)?;

    let source = DocumentSource::File(input.clone());
    let pages = document::page_count(&source)
        .with_context(|| format!("Failed to open PDF: {}", input.display()))?;

    println!("Brief PDF information");
    println!("=====================");
    println!("File: {}", input.display());
    println!("Pages: {}", pages);

    Ok(())
}
