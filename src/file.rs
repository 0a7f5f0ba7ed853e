// src/file.rs

use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::error::ExportError;
use crate::export::render;
use crate::types::WeekReport;

/// Read the saved picks markup. `None` or `-` reads stdin.
pub fn read_markup(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => fs::read_to_string(p),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Render and write the report to the path in `opts`, creating parent dirs.
/// Returns the path written, or `None` when the options point at stdout
/// (the rendered text is returned to the caller in that case).
pub fn write_export(
    report: &WeekReport,
    opts: &ExportOptions,
) -> Result<(Option<PathBuf>, String), ExportError> {
    let contents = render(report, opts)?;

    let Some(path) = opts.out_path() else {
        return Ok((None, contents));
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(&path, &contents)?;
    logf!("Wrote {}", path.display());
    Ok((Some(path), contents))
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.display().to_string()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
