// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/// Where the pick sheet lives in the markup. Defaults mirror the live site;
/// override only when the source changes its element ids or class names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selectors {
    pub table_id: String,
    pub header_row_id: String,
    pub player_rows_id: String,
    pub markers: MarkerClasses,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            table_id: s!(PICKS_TABLE_ID),
            header_row_id: s!(HEADER_ROW_ID),
            player_rows_id: s!(PLAYER_ROWS_ID),
            markers: MarkerClasses::default(),
        }
    }
}

/// Class tokens that flag a pick cell's outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkerClasses {
    pub correct: String,
    pub incorrect: String,
    pub unlocked: String,
}

impl Default for MarkerClasses {
    fn default() -> Self {
        Self {
            correct: s!(MARKER_CORRECT),
            incorrect: s!(MARKER_INCORRECT),
            unlocked: s!(MARKER_UNLOCKED),
        }
    }
}

/// How team labels are read out of a header game cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TeamLabelAccess {
    /// First text node of each of the first two nested rows.
    #[default]
    Positional,
    /// First `<td>` of each `<tr>` found by search.
    Query,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub selectors: Selectors,
    pub access: TeamLabelAccess,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// Column-aligned text for the console.
    #[default]
    Table,
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Table => "txt",
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }

    /// Field separator for the delimited formats.
    pub fn delim(&self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
            ExportFormat::Table | ExportFormat::Json => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    out_path: Option<OutputPath>,
}

impl ExportOptions {
    /// `None` means "print to stdout".
    pub fn out_path(&self) -> Option<PathBuf> {
        let out = self.out_path.as_ref()?;
        let mut path = out.dir.clone();
        let stem = out.file_stem.to_string_lossy();
        match &out.ext {
            Some(ext) => path.push(join!(stem, ".", &ext.to_string_lossy())),
            None => path.push(join!(stem, ".", self.format.ext())),
        }
        Some(path)
    }

    /// Parse user text into dir + stem. A typed extension is kept as-is;
    /// a trailing separator means "directory, default file name".
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            self.out_path = None;
            return;
        }

        if s.ends_with('/') || s.ends_with('\\') {
            self.out_path = Some(OutputPath {
                dir: PathBuf::from(s),
                file_stem: OsString::from(DEFAULT_FILE),
                ext: None,
            });
            return;
        }

        let p = Path::new(s);
        self.out_path = Some(OutputPath {
            dir: p.parent().map(Path::to_path_buf).unwrap_or_default(),
            file_stem: p.file_stem().map(|x| x.to_os_string()).unwrap_or_else(|| OsString::from(DEFAULT_FILE)),
            ext: p.extension().map(|x| x.to_os_string()),
        });
    }

    /// Write to `out/week.<ext>` under the current format.
    pub fn set_default_path(&mut self) {
        self.out_path = Some(OutputPath::default());
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
    ext: Option<OsString>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            ext: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stdout_by_default() {
        assert_eq!(ExportOptions::default().out_path(), None);
    }

    #[test]
    fn default_path_follows_format() {
        let mut opts = ExportOptions::default();
        opts.set_default_path();
        opts.format = ExportFormat::Csv;
        assert_eq!(opts.out_path(), Some(PathBuf::from("out").join("week.csv")));
        opts.format = ExportFormat::Json;
        assert_eq!(opts.out_path(), Some(PathBuf::from("out").join("week.json")));
    }

    #[test]
    fn typed_extension_is_kept() {
        let mut opts = ExportOptions::default();
        opts.format = ExportFormat::Tsv;
        opts.set_path("picks/custom.data");
        assert_eq!(opts.out_path(), Some(PathBuf::from("picks").join("custom.data")));
    }

    #[test]
    fn trailing_separator_is_a_directory() {
        let mut opts = ExportOptions::default();
        opts.format = ExportFormat::Csv;
        opts.set_path("reports/");
        assert_eq!(opts.out_path(), Some(PathBuf::from("reports/").join("week.csv")));
    }

    #[test]
    fn default_selectors_match_consts() {
        let sel = Selectors::default();
        assert_eq!(sel.header_row_id, HEADER_ROW_ID);
        assert_eq!(sel.player_rows_id, PLAYER_ROWS_ID);
        assert_eq!(sel.markers.unlocked, "unlocked");
    }
}
