//! Export orchestration.
//!
//! The snapshot is computed before this layer is reached, so every
//! exporter sees exactly the figures that were on screen. Failures are
//! logged and swallowed; the only state effect of an export, successful
//! or not, is that the export menu ends up closed.

use std::fs;
use std::path::{Path, PathBuf};

use stocklens_analytics::ReportSnapshot;
use stocklens_reports::{ExportFormat, RenderSurface, ReportError, csv, pdf, workbook};

use crate::state::{Action, DashboardState, reduce};

fn encode(
    format: ExportFormat,
    snapshot: &ReportSnapshot,
    surface: &dyn RenderSurface,
) -> Result<Vec<u8>, ReportError> {
    match format {
        ExportFormat::Csv => csv::render(snapshot),
        ExportFormat::Workbook => workbook::render(snapshot),
        ExportFormat::Pdf => {
            let frame = surface.capture()?;
            pdf::render(&frame)
        }
    }
}

/// Run one export end to end: encode, write the artifact into `out_dir`,
/// close the export menu. Returns the new state and the artifact path if
/// one was produced.
pub fn run_export(
    format: ExportFormat,
    snapshot: &ReportSnapshot,
    surface: &dyn RenderSurface,
    out_dir: &Path,
    state: DashboardState,
) -> (DashboardState, Option<PathBuf>) {
    let artifact = match encode(format, snapshot, surface) {
        Ok(bytes) => {
            let path = out_dir.join(format.file_name());
            match fs::write(&path, &bytes) {
                Ok(()) => {
                    tracing::info!(format = format.as_str(), path = %path.display(), "export written");
                    Some(path)
                }
                Err(err) => {
                    tracing::error!(format = format.as_str(), error = %err, "failed to write export artifact");
                    None
                }
            }
        }
        Err(err) => {
            tracing::error!(format = format.as_str(), error = %err, "export failed");
            None
        }
    };
    (reduce(state, Action::CloseExportMenu), artifact)
}
