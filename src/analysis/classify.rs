//! Row classification: column resolution, record extraction, skip counting.

use crate::config::{AppConfig, ColumnSelector};
use crate::errors::{AppError, AppResult};
use crate::models::record::Record;
use crate::source::Row;

/// Resolved 0-based cell indices for the fields of interest. Id and
/// timestamp are the first two columns of the sheet layout; the rest come
/// from configuration.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    pub id: usize,
    pub timestamp: usize,
    pub category: usize,
    pub description: usize,
    pub status: Option<usize>,
}

/// Resolves the configured selectors against the header row. A column that
/// cannot be resolved is a configuration error, not a per-row skip.
pub fn resolve_columns(header: &[String], cfg: &AppConfig) -> AppResult<ColumnMap> {
    let category = resolve(header, &cfg.category_column)?;
    let description = resolve(header, &cfg.description_column)?;
    let status = match &cfg.status_column {
        Some(selector) => Some(resolve(header, selector)?),
        None => None,
    };
    Ok(ColumnMap {
        id: 0,
        timestamp: 1,
        category,
        description,
        status,
    })
}

fn resolve(header: &[String], selector: &ColumnSelector) -> AppResult<usize> {
    match selector {
        ColumnSelector::Index(n) => {
            if *n > header.len() {
                Err(AppError::MissingColumn(format!(
                    "column {n} requested but the header has {} columns",
                    header.len()
                )))
            } else {
                Ok(n - 1)
            }
        }
        ColumnSelector::Name(name) => header
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
            .ok_or_else(|| AppError::MissingColumn(format!("no header column named '{name}'"))),
    }
}

/// Classification output: records with a category, and how many rows had
/// none. `records.len() + skipped` always equals the data row count.
#[derive(Debug, Default)]
pub struct Classified {
    pub records: Vec<Record>,
    pub skipped: usize,
}

/// Splits raw data rows (header excluded) into records with a non-empty
/// category and a count of rows skipped for lacking one.
pub fn classify(rows: &[Row], columns: &ColumnMap) -> Classified {
    rows.iter()
        .enumerate()
        .fold(Classified::default(), |mut acc, (i, row)| {
            let category = cell(row, columns.category);
            if category.is_empty() {
                acc.skipped += 1;
                return acc;
            }

            // 1-based sheet position, header is row 1
            let row_number = i + 2;
            let id = match cell(row, columns.id) {
                v if v.is_empty() => row_number.to_string(),
                v => v,
            };
            acc.records.push(Record {
                row_number,
                id,
                timestamp: cell(row, columns.timestamp),
                category,
                description: cell(row, columns.description),
                status: columns
                    .status
                    .map(|c| cell(row, c))
                    .filter(|s| !s.is_empty()),
                annotation: None,
            });
            acc
        })
}

/// Missing cells in short rows read as empty.
fn cell(row: &[String], index: usize) -> String {
    row.get(index).map(|s| s.trim().to_string()).unwrap_or_default()
}
