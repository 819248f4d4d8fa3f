// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::{ExportFormat, RecordExport, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write `rows` to `path` in `format`.
pub(crate) fn write_rows(rows: &[RecordExport], path: &Path, format: ExportFormat) -> AppResult<()> {
    info(format!("Writing {} records to {}", rows.len(), path.display()));

    match format {
        ExportFormat::Json => {
            let mut out = BufWriter::new(File::create(path)?);
            serde_json::to_writer_pretty(&mut out, rows)?;
            out.flush()?;
        }
        ExportFormat::Csv => {
            // Header comes from the serde field names
            let mut wtr = csv::Writer::from_path(path)?;
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
    }

    notify_export_success(format, path);
    Ok(())
}
