//! Batch processing over in-memory documents.
//!
//! Documents are processed synchronously, one at a time, in input order.
//! The result list is owned by the caller; no state is carried between
//! documents or across calls.

use std::time::Instant;

use tracing::{debug, warn};

use crate::case::{CaseParser, ExtractionResult, JudgmentParser};
use crate::error::PdfError;
use crate::pdf::{PdfExtractor, PdfProcessor};

/// Outcome of processing one document in a batch.
#[derive(Debug)]
pub struct DocumentOutcome {
    /// Source document name.
    pub name: String,
    /// Extraction result, present on success.
    pub result: Option<ExtractionResult>,
    /// User-visible error message, present on failure.
    pub error: Option<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

impl DocumentOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_some()
    }
}

/// Process a batch of PDF documents with the given parser.
///
/// A document whose text extraction fails produces an error outcome and the
/// batch continues; extraction itself never fails, so empty or unrecognized
/// text still yields a success outcome with default field values.
pub fn process_documents<I>(docs: I, parser: &JudgmentParser) -> Vec<DocumentOutcome>
where
    I: IntoIterator<Item = (String, Vec<u8>)>,
{
    let mut outcomes = Vec::new();

    for (name, data) in docs {
        let start = Instant::now();

        let outcome = match extract_one(&data, parser) {
            Ok(result) => {
                debug!("Processed {} in {}ms", name, result.processing_time_ms);
                DocumentOutcome {
                    name,
                    result: Some(result),
                    error: None,
                    processing_time_ms: start.elapsed().as_millis() as u64,
                }
            }
            Err(e) => {
                warn!("Failed to process {}: {}", name, e);
                DocumentOutcome {
                    name,
                    result: None,
                    error: Some(e.to_string()),
                    processing_time_ms: start.elapsed().as_millis() as u64,
                }
            }
        };
        outcomes.push(outcome);
    }

    outcomes
}

fn extract_one(data: &[u8], parser: &JudgmentParser) -> Result<ExtractionResult, PdfError> {
    let mut extractor = PdfExtractor::new();
    extractor.load(data)?;
    let text = extractor.extract_text()?;
    Ok(parser.parse(&text))
}
