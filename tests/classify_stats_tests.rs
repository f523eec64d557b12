use sheetlens::analysis::classify::{self, ColumnMap};
use sheetlens::analysis::stats;
use sheetlens::config::{AppConfig, ColumnSelector};
use sheetlens::models::annotation::Priority;

fn table_config() -> AppConfig {
    AppConfig {
        spreadsheet_id: None,
        sheet_name: "Sheet1".to_string(),
        category_column: ColumnSelector::Index(2),
        description_column: ColumnSelector::Index(3),
        status_column: None,
        credentials: None,
        openrouter_api_key: None,
        openrouter_base_url: "https://openrouter.ai/api/v1".to_string(),
        openrouter_model: "test-model".to_string(),
        llm_timeout_secs: 30,
        llm_request_delay_ms: 0,
        debug: false,
    }
}

fn rows(raw: &[&[&str]]) -> Vec<Vec<String>> {
    raw.iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

fn columns() -> ColumnMap {
    ColumnMap {
        id: 0,
        timestamp: 1,
        category: 1,
        description: 2,
        status: None,
    }
}

#[test]
fn classify_splits_records_and_skips() {
    // three rows, two categories: ID / Cat / Text
    let data = rows(&[&["1", "A", "foo"], &["2", "B", "bar"], &["3", "A", "baz"]]);
    let classified = classify::classify(&data, &columns());

    assert_eq!(classified.records.len(), 3);
    assert_eq!(classified.skipped, 0);

    let report = stats::aggregate(&classified.records, data.len(), classified.skipped);
    assert_eq!(report.record_count, 3);
    let cats: Vec<(&str, usize, f64)> = report
        .categories
        .iter()
        .map(|s| (s.category.as_str(), s.count, s.percent))
        .collect();
    assert_eq!(cats, vec![("A", 2, 66.7), ("B", 1, 33.3)]);
    assert_eq!(report.most_popular().unwrap().category, "A");
}

#[test]
fn classify_skips_rows_without_category() {
    let data = rows(&[
        &["1", "A", "foo"],
        &["4", "", "orphan"],
        &["3", "A", "baz"],
    ]);
    let classified = classify::classify(&data, &columns());

    assert_eq!(classified.records.len(), 2);
    assert_eq!(classified.skipped, 1);
    // invariant: nothing is lost
    assert_eq!(classified.records.len() + classified.skipped, data.len());
}

#[test]
fn classify_tolerates_short_rows() {
    let data = rows(&[&["1"], &["2", "B"], &["3", "A", "baz"]]);
    let classified = classify::classify(&data, &columns());

    // row 1 has no category cell at all -> skipped; row 2 has one but no
    // description
    assert_eq!(classified.records.len(), 2);
    assert_eq!(classified.skipped, 1);
    assert_eq!(classified.records[0].description, "");
    assert!(!classified.records[0].wants_analysis());
}

#[test]
fn classify_fills_missing_id_with_row_number() {
    let data = rows(&[&["", "A", "something broke"]]);
    let classified = classify::classify(&data, &columns());

    // header is row 1, so the first data row is sheet row 2
    assert_eq!(classified.records[0].row_number, 2);
    assert_eq!(classified.records[0].id, "2");
}

#[test]
fn classify_trims_whitespace_categories() {
    let data = rows(&[&["1", "  A  ", "x"], &["2", "   ", "y"]]);
    let classified = classify::classify(&data, &columns());

    assert_eq!(classified.records.len(), 1);
    assert_eq!(classified.records[0].category, "A");
    assert_eq!(classified.skipped, 1);
}

#[test]
fn resolve_columns_by_index_and_name() {
    let header: Vec<String> = ["ID", "Date", "Category", "Description"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut cfg = table_config();
    cfg.category_column = ColumnSelector::Index(3);
    cfg.description_column = ColumnSelector::Name("description".to_string());
    let map = classify::resolve_columns(&header, &cfg).unwrap();
    assert_eq!(map.category, 2);
    assert_eq!(map.description, 3);
}

#[test]
fn resolve_columns_rejects_missing_ones() {
    let header: Vec<String> = ["ID", "Category"].iter().map(|s| s.to_string()).collect();

    let mut cfg = table_config();
    cfg.category_column = ColumnSelector::Index(5);
    assert!(classify::resolve_columns(&header, &cfg).is_err());

    let mut cfg = table_config();
    cfg.category_column = ColumnSelector::Name("Priority".to_string());
    cfg.description_column = ColumnSelector::Index(1);
    assert!(classify::resolve_columns(&header, &cfg).is_err());
}

#[test]
fn aggregate_on_empty_input_yields_zero_report() {
    let report = stats::aggregate(&[], 0, 0);
    assert!(!report.has_data());
    assert_eq!(report.record_count, 0);
    assert!(report.categories.is_empty());
    assert!(report.most_popular().is_none());
}

#[test]
fn aggregate_tie_break_prefers_first_seen() {
    let data = rows(&[
        &["1", "B", "x"],
        &["2", "A", "x"],
        &["3", "A", "x"],
        &["4", "B", "x"],
    ]);
    let classified = classify::classify(&data, &columns());
    let report = stats::aggregate(&classified.records, data.len(), classified.skipped);

    // B and A both count 2; B appeared first
    assert_eq!(report.most_popular().unwrap().category, "B");
}

#[test]
fn aggregate_percentages_sum_close_to_100() {
    let data = rows(&[
        &["1", "A", "x"],
        &["2", "B", "x"],
        &["3", "C", "x"],
        &["4", "D", "x"],
        &["5", "E", "x"],
        &["6", "F", "x"],
        &["7", "G", "x"],
    ]);
    let classified = classify::classify(&data, &columns());
    let report = stats::aggregate(&classified.records, data.len(), classified.skipped);

    let sum: f64 = report.categories.iter().map(|s| s.percent).sum();
    assert!((sum - 100.0).abs() <= 0.1, "sum was {sum}");
}

#[test]
fn sorted_by_count_is_descending_and_stable() {
    let data = rows(&[
        &["1", "A", "x"],
        &["2", "B", "x"],
        &["3", "B", "x"],
        &["4", "C", "x"],
    ]);
    let classified = classify::classify(&data, &columns());
    let report = stats::aggregate(&classified.records, data.len(), classified.skipped);

    let order: Vec<&str> = report
        .sorted_by_count()
        .iter()
        .map(|s| s.category.as_str())
        .collect();
    // B leads; A and C tie at 1 and keep first-appearance order
    assert_eq!(order, vec!["B", "A", "C"]);
}

#[test]
fn priority_parse_is_case_insensitive_with_low_fallback() {
    assert_eq!(Priority::parse("HIGH"), Priority::High);
    assert_eq!(Priority::parse(" Medium "), Priority::Medium);
    assert_eq!(Priority::parse("low"), Priority::Low);
    assert_eq!(Priority::parse("urgent"), Priority::Low);
    assert_eq!(Priority::parse(""), Priority::Low);
}
