//! Batch command - process multiple judgment PDFs.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use verdex_core::batch::{process_documents, DocumentOutcome};
use verdex_core::case::JudgmentParser;
use verdex_core::models::config::VerdexConfig;

use super::output::{flatten_row, format_case, OutputFormat, ROW_HEADER};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Abort on the first failed document instead of continuing
    #[arg(long)]
    fail_fast: bool,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = if let Some(path) = config_path {
        VerdexConfig::from_file(std::path::Path::new(path))?
    } else {
        VerdexConfig::default()
    };

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching PDF files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    // Read all documents up front; unreadable files become error outcomes,
    // slotted back at their input position so ordering is preserved.
    pb.set_message("reading");
    let mut docs = Vec::with_capacity(files.len());
    let mut doc_indexes = Vec::with_capacity(files.len());
    let mut read_failures: Vec<(usize, DocumentOutcome)> = Vec::new();
    for (idx, path) in files.iter().enumerate() {
        let name = path.display().to_string();
        match fs::read(path) {
            Ok(data) => {
                doc_indexes.push(idx);
                docs.push((name, data));
            }
            Err(e) => {
                warn!("Failed to read {}: {}", name, e);
                read_failures.push((
                    idx,
                    DocumentOutcome {
                        name,
                        result: None,
                        error: Some(e.to_string()),
                        processing_time_ms: 0,
                    },
                ));
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let parser =
        JudgmentParser::new().with_consolidated_dedupe(config.extraction.dedupe_consolidated);

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("extracting fields");
    let mut slots: Vec<Option<DocumentOutcome>> = Vec::new();
    slots.resize_with(files.len(), || None);
    for (idx, outcome) in doc_indexes
        .into_iter()
        .zip(process_documents(docs, &parser))
    {
        slots[idx] = Some(outcome);
    }
    for (idx, outcome) in read_failures {
        slots[idx] = Some(outcome);
    }
    let outcomes: Vec<DocumentOutcome> = slots.into_iter().flatten().collect();
    spinner.finish_and_clear();

    if args.fail_fast {
        if let Some(failed) = outcomes.iter().find(|o| !o.is_success()) {
            anyhow::bail!(
                "Processing failed for {}: {}",
                failed.name,
                failed.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    // Write per-file outputs
    if let Some(ref output_dir) = args.output_dir {
        for outcome in &outcomes {
            let Some(result) = &outcome.result else {
                continue;
            };
            let stem = PathBuf::from(&outcome.name)
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("case")
                .to_string();

            let extension = match args.format {
                OutputFormat::Json => "json",
                OutputFormat::Csv => "csv",
                OutputFormat::Text => "md",
            };

            let output_path = output_dir.join(format!("{}.{}", stem, extension));
            let content = format_case(&result.case, args.format, &config.export)?;
            fs::write(&output_path, content)?;
            debug!("Wrote output to {}", output_path.display());
        }
    }

    // Generate summary if requested
    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &outcomes, &config)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let successful = outcomes.iter().filter(|o| o.is_success()).count();
    let failed: Vec<&DocumentOutcome> = outcomes.iter().filter(|o| !o.is_success()).collect();

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        outcomes.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successful).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for outcome in &failed {
            println!(
                "  - {}: {}",
                outcome.name,
                outcome.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn write_summary(
    path: &PathBuf,
    outcomes: &[DocumentOutcome],
    config: &VerdexConfig,
) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    let mut header = vec!["filename", "status"];
    header.extend(ROW_HEADER);
    header.extend(["processing_time_ms", "error"]);
    wtr.write_record(&header)?;

    for outcome in outcomes {
        let mut record = vec![outcome.name.clone()];

        if let Some(result) = &outcome.result {
            record.push("success".to_string());
            record.extend(flatten_row(&result.case, &config.export));
            record.push(outcome.processing_time_ms.to_string());
            record.push(String::new());
        } else {
            record.push("error".to_string());
            record.extend(std::iter::repeat_n(String::new(), ROW_HEADER.len()));
            record.push(outcome.processing_time_ms.to_string());
            record.push(outcome.error.clone().unwrap_or_default());
        }

        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}
