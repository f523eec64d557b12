use serde::Serialize;

use crate::models::annotation::Annotation;

/// One data row mapped to named fields. Built once per row; only the
/// annotation is attached later.
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    /// 1-based row position in the sheet, header counts as row 1.
    pub row_number: usize,
    pub id: String,
    pub timestamp: String,
    pub category: String,
    pub description: String,
    pub status: Option<String>,
    pub annotation: Option<Annotation>,
}

impl Record {
    /// Descriptions shorter than this are not worth a model round-trip.
    pub const MIN_DESCRIPTION_LEN: usize = 5;

    /// True when the description is substantial enough for LLM analysis.
    pub fn wants_analysis(&self) -> bool {
        self.description.trim().chars().count() >= Self::MIN_DESCRIPTION_LEN
    }
}
