// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Make sure the export target can be written.
///
/// Missing parent directories are created. An existing file is replaced when
/// `force` is set; otherwise the user is asked on stdin.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    if force || !path.exists() {
        return Ok(());
    }

    warning(format!("{} already exists", path.display()));
    if confirm("Replace it? [y/N]: ")? {
        info("Replacing the existing file.");
        Ok(())
    } else {
        Err(AppError::Export(format!(
            "{} kept, nothing exported (use --force to replace)",
            path.display()
        )))
    }
}

fn confirm(prompt: &str) -> AppResult<bool> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
