//! Process command - extract data from a single judgment PDF.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info, warn};

use verdex_core::case::{CaseParser, JudgmentParser};
use verdex_core::models::config::VerdexConfig;
use verdex_core::pdf::{PdfExtractor, PdfProcessor};

use super::output::{format_case, OutputFormat};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Show extraction warnings
    #[arg(long)]
    show_warnings: bool,
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = if let Some(path) = config_path {
        VerdexConfig::from_file(std::path::Path::new(path))?
    } else {
        VerdexConfig::default()
    };

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let extension = args
        .input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    if extension != "pdf" {
        anyhow::bail!("Unsupported file format: {}", extension);
    }

    info!("Processing file: {}", args.input.display());

    let data = fs::read(&args.input)?;
    let mut extractor = PdfExtractor::new();
    extractor.load(&data)?;

    debug!("PDF has {} pages", extractor.page_count());

    let text = extractor.extract_text()?;
    if text.trim().is_empty() {
        anyhow::bail!("No text could be extracted from the PDF");
    }
    if text.len() < config.pdf.min_text_length {
        warn!(
            "Only {} characters of text extracted; results may be incomplete",
            text.len()
        );
    }

    let parser =
        JudgmentParser::new().with_consolidated_dedupe(config.extraction.dedupe_consolidated);
    let result = parser.parse(&text);

    if args.show_warnings && !result.warnings.is_empty() {
        eprintln!("{}", style("Extraction warnings:").yellow());
        for warning in &result.warnings {
            eprintln!("  - {}", warning);
        }
    }

    let output = format_case(&result.case, args.format, &config.export)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}
