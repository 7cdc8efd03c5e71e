//! Report export for the dashboard's spreadsheet download.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::info;

use crate::models::StatisticsReport;
use crate::{ReportError, ReportResult};

/// Export format version written into the metadata.
pub const EXPORT_FORMAT_VERSION: &str = "1.0";

/// A report ready to be written out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportExport {
    /// Export metadata
    pub metadata: ExportMetadata,
    /// The canonical report
    pub report: StatisticsReport,
}

/// Export metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Unique ID of this export
    pub export_id: String,
    /// Export format version
    pub format_version: String,
    /// Export timestamp
    pub exported_at: String,
    /// SHA-256 of the report's JSON, hex encoded
    pub content_hash: String,
    /// Exporting system identifier
    pub system_id: Option<String>,
}

impl ReportExport {
    /// Wrap a report with fresh export metadata.
    pub fn from_report(report: StatisticsReport, system_id: Option<String>) -> ReportResult<Self> {
        let content_hash = content_hash(&report)?;
        let metadata = ExportMetadata {
            export_id: uuid::Uuid::new_v4().to_string(),
            format_version: EXPORT_FORMAT_VERSION.to_string(),
            exported_at: chrono::Utc::now().to_rfc3339(),
            content_hash,
            system_id,
        };
        info!(
            export_id = %metadata.export_id,
            content_hash = %metadata.content_hash,
            months = report.datos_mensuales.len(),
            "report export prepared"
        );

        Ok(Self { metadata, report })
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export the flattened report as CSV (`seccion,indicador,valor`).
    pub fn to_csv(&self) -> ReportResult<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for row in self.report.to_rows() {
            writer.serialize(row)?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| ReportError::Io(e.into_error()))?;

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Hex SHA-256 of the report's compact JSON.
///
/// Field order is fixed by the struct definitions, so equal reports hash equally.
pub fn content_hash(report: &StatisticsReport) -> ReportResult<String> {
    let json = serde_json::to_vec(report)?;
    Ok(hex::encode(Sha256::digest(&json)))
}
