//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the verdex pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VerdexConfig {
    /// PDF processing configuration.
    pub pdf: PdfConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Export/formatting configuration.
    pub export: ExportConfig,
}

/// PDF processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Minimum text length below which a warning is emitted.
    pub min_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            min_text_length: 50,
        }
    }
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Skip "WITH" block consolidated cases whose party pair was already
    /// produced by the "Versus" line scan.
    pub dedupe_consolidated: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            dedupe_consolidated: true,
        }
    }
}

/// Export/formatting configuration for tabular output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Delimiter for list fields flattened into a single column.
    pub list_delimiter: String,

    /// Character budget for long text columns; longer text is truncated
    /// with an ellipsis marker.
    pub max_field_chars: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            list_delimiter: ", ".to_string(),
            max_field_chars: 500,
        }
    }
}

impl VerdexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = VerdexConfig::default();
        assert!(config.extraction.dedupe_consolidated);
        assert_eq!(config.export.max_field_chars, 500);
        assert_eq!(config.export.list_delimiter, ", ");
    }

    #[test]
    fn test_partial_config_deserializes() {
        let config: VerdexConfig =
            serde_json::from_str(r#"{"export": {"max_field_chars": 200}}"#).unwrap();
        assert_eq!(config.export.max_field_chars, 200);
        assert_eq!(config.export.list_delimiter, ", ");
        assert!(config.extraction.dedupe_consolidated);
    }
}
