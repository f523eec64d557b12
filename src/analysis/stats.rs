//! Category statistics over classified records.

use crate::models::record::Record;
use crate::models::stats::{AnalysisReport, CategoryStat};

/// Aggregates category counts and percentages. Categories keep the order of
/// first appearance so the most-popular tie-break stays deterministic.
/// An empty record set yields a zero report, never an error.
pub fn aggregate(records: &[Record], total_rows: usize, skipped: usize) -> AnalysisReport {
    let mut categories: Vec<CategoryStat> = Vec::new();
    for record in records {
        match categories.iter_mut().find(|s| s.category == record.category) {
            Some(stat) => stat.count += 1,
            None => categories.push(CategoryStat {
                category: record.category.clone(),
                count: 1,
                percent: 0.0,
            }),
        }
    }

    let record_count = records.len();
    if record_count > 0 {
        for stat in &mut categories {
            stat.percent = round1(stat.count as f64 / record_count as f64 * 100.0);
        }
    }

    AnalysisReport {
        total_rows,
        record_count,
        skipped,
        categories,
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
