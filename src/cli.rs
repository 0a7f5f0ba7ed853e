// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::options::{AppOptions, ExportFormat, TeamLabelAccess};
use crate::file::{read_markup, write_export};
use crate::pipeline;

/// Remaining and max possible points for one week of a confidence pool,
/// from a saved picks table (`<table id="nflpicks">`).
#[derive(Parser, Debug)]
#[command(name = "pool_scrape", version, about)]
pub struct Args {
    /// Saved picks markup; omit or `-` for stdin
    pub input: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    pub format: Format,

    /// Output file; a trailing `/` means a directory (file name `week.<ext>`)
    #[arg(short, long)]
    pub out: Option<String>,

    /// Write to `out/week.<ext>` instead of stdout
    #[arg(long, conflicts_with = "out")]
    pub save: bool,

    /// Emit a header line in csv/tsv output
    #[arg(long)]
    pub include_headers: bool,

    /// How team labels are read from the header row
    #[arg(long, value_enum, default_value_t = Access::Positional)]
    pub access: Access,

    /// Picks table id
    #[arg(long)]
    pub table_id: Option<String>,

    /// Header row id
    #[arg(long)]
    pub header_id: Option<String>,

    /// Player rows tbody id
    #[arg(long)]
    pub body_id: Option<String>,

    /// More log output (-v debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    Csv,
    Tsv,
    Json,
}

impl From<Format> for ExportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Table => ExportFormat::Table,
            Format::Csv => ExportFormat::Csv,
            Format::Tsv => ExportFormat::Tsv,
            Format::Json => ExportFormat::Json,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Access {
    Positional,
    Query,
}

impl From<Access> for TeamLabelAccess {
    fn from(a: Access) -> Self {
        match a {
            Access::Positional => TeamLabelAccess::Positional,
            Access::Query => TeamLabelAccess::Query,
        }
    }
}

impl Args {
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }

    pub fn to_options(&self) -> AppOptions {
        let mut opts = AppOptions::default();

        let sel = &mut opts.scrape.selectors;
        if let Some(id) = &self.table_id { sel.table_id = id.clone(); }
        if let Some(id) = &self.header_id { sel.header_row_id = id.clone(); }
        if let Some(id) = &self.body_id { sel.player_rows_id = id.clone(); }
        opts.scrape.access = self.access.into();

        opts.export.format = self.format.into();
        opts.export.include_headers = self.include_headers;
        if let Some(out) = &self.out {
            opts.export.set_path(out);
        } else if self.save {
            opts.export.set_default_path();
        }
        opts
    }
}

/// Read → process → print or write.
pub fn run(args: &Args) -> color_eyre::Result<()> {
    let opts = args.to_options();

    let markup = read_markup(args.input.as_deref())?;
    let report = pipeline::process(&markup, &opts.scrape)?;

    match write_export(&report, &opts.export)? {
        (Some(path), _) => eprintln!("Wrote {}", path.display()),
        (None, text) => print!("{text}"),
    }
    Ok(())
}
