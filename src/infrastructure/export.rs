use crate::domain::employee::PayrollResult;
use crate::domain::ports::ResultSinkBox;
use crate::error::{PayrollError, Result};
use crate::interfaces::csv::result_writer::CsvResultWriter;
use crate::interfaces::json::JsonResultWriter;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub header: bool,
}

pub fn result_sink<'a>(file: &'a mut File, options: ExportOptions) -> ResultSinkBox<'a> {
    let out = BufWriter::new(file);
    match options.format {
        ExportFormat::Csv => Box::new(CsvResultWriter::with_header(out, options.header)),
        ExportFormat::Json => Box::new(JsonResultWriter::new(out)),
    }
}

/// Writes `results` to `path` all-or-nothing.
///
/// Rows go to a temporary file in the destination directory, which is renamed
/// over `path` only after every row has been written and flushed. On error the
/// temporary file is removed and `path` is left as it was.
pub fn export_results(path: &Path, results: &[PayrollResult], options: ExportOptions) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir)?;
    {
        let mut sink = result_sink(staged.as_file_mut(), options);
        sink.write_results(results)?;
    }
    staged.as_file().sync_all()?;
    staged
        .persist(path)
        .map_err(|e| PayrollError::Io(e.error))?;

    info!(rows = results.len(), path = %path.display(), "results exported");
    Ok(())
}
