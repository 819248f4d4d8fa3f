//! Record set export (CSV / JSON).

mod fs_utils;
mod json_csv;
pub mod logic;
mod model;
mod range;

pub use logic::ExportLogic;
pub use model::RecordExport;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    /// One row per record, header from the field names
    Csv,
    /// Pretty-printed array of records
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
        }
    }
}

/// Completion message shared by both writers.
pub(crate) fn notify_export_success(format: ExportFormat, path: &Path) {
    success(format!("{} export completed: {}", format.label(), path.display()));
}
