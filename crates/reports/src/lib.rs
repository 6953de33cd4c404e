//! Report exporters.
//!
//! Three independent serializers over one [`ReportSnapshot`]: tabular CSV,
//! a multi-sheet XLSX workbook, and a rasterized PDF. Exporters never
//! re-derive aggregates; they consume whatever snapshot they were handed,
//! so the exported figures always match what was on screen when the export
//! was triggered.

use thiserror::Error;

pub mod csv;
pub mod pdf;
pub mod workbook;

pub use pdf::{CapturedFrame, RenderSurface};

/// Base name shared by all three artifacts.
pub const REPORT_BASE_NAME: &str = "inventory-analysis-report";

/// The three export formats offered by the dashboard's export menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Workbook,
    Pdf,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Workbook => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }

    /// Fixed artifact file name for this format.
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "inventory-analysis-report.csv",
            ExportFormat::Workbook => "inventory-analysis-report.xlsx",
            ExportFormat::Pdf => "inventory-analysis-report.pdf",
        }
    }
}

/// Export failure. Never fatal to the host: the orchestration layer logs it
/// and simply produces no artifact.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("csv serialization failed: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("workbook serialization failed: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    #[error("render surface unavailable: {0}")]
    Surface(String),

    #[error("pdf encoding failed: {0}")]
    Pdf(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
