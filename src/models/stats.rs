use serde::Serialize;

/// Aggregated count and share for one category value.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryStat {
    pub category: String,
    pub count: usize,
    pub percent: f64,
}

/// Full statistics for one run, recomputed fresh every time.
#[derive(Debug, Default, Serialize)]
pub struct AnalysisReport {
    /// Data rows seen, header excluded.
    pub total_rows: usize,
    /// Rows with a non-empty category.
    pub record_count: usize,
    /// Rows skipped for lacking one.
    pub skipped: usize,
    /// Distinct categories in order of first appearance.
    pub categories: Vec<CategoryStat>,
}

impl AnalysisReport {
    pub fn has_data(&self) -> bool {
        self.record_count > 0
    }

    pub fn unique_categories(&self) -> usize {
        self.categories.len()
    }

    /// Highest count wins; ties go to the category seen first in the data.
    pub fn most_popular(&self) -> Option<&CategoryStat> {
        self.categories.iter().fold(None, |best, stat| match best {
            Some(b) if b.count >= stat.count => Some(b),
            _ => Some(stat),
        })
    }

    /// Categories sorted by count descending for display. The sort is
    /// stable, so equal counts keep their first-appearance order.
    pub fn sorted_by_count(&self) -> Vec<&CategoryStat> {
        let mut sorted: Vec<&CategoryStat> = self.categories.iter().collect();
        sorted.sort_by(|a, b| b.count.cmp(&a.count));
        sorted
    }
}
