//! Core library for court judgment analysis.
//!
//! This crate provides:
//! - PDF text extraction (lopdf + pdf-extract)
//! - Regex-based field extraction from Supreme Court judgments
//!   (case numbers, parties, judgment dates, case background)
//! - Court case data models and batch processing

pub mod error;
pub mod models;
pub mod pdf;
pub mod case;
pub mod batch;

pub use error::{Result, VerdexError};
pub use models::case::{CaseCitation, ConsolidatedCase, CourtCase, Party, DATE_NOT_FOUND};
pub use models::config::VerdexConfig;
pub use pdf::{PdfExtractor, PdfProcessor};
pub use case::{CaseExtractor, CaseParser, ExtractionResult, JudgmentParser};
pub use batch::{process_documents, DocumentOutcome};
