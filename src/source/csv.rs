//! Local CSV row source.

use std::path::Path;

use csv::ReaderBuilder;

use crate::errors::{AppError, AppResult};
use crate::source::Row;

/// Reads the whole file as raw rows, header included. Ragged rows are
/// tolerated here; missing cells surface as empty strings downstream.
pub fn read_rows(path: &Path) -> AppResult<Vec<Row>> {
    if !path.exists() {
        return Err(AppError::FileNotFound(path.display().to_string()));
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}
