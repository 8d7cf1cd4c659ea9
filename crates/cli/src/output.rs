//! Record rendering

use anyhow::Result;
use sprime_core::domain::{SemiprimeRecord, SemiprimeView};

use crate::cli::OutputFormat;

/// Render all records at once so nothing is printed on a later failure
pub fn render(records: &[SemiprimeRecord], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(records.iter().map(|r| format!("{}\n", r)).collect()),
        OutputFormat::Json => {
            let views: Vec<SemiprimeView> = records.iter().map(SemiprimeRecord::to_view).collect();
            Ok(format!("{}\n", serde_json::to_string_pretty(&views)?))
        }
    }
}
