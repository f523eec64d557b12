//! Terminal presentation: banner, configuration summary, statistics table,
//! annotation blocks, completion summary.

use chrono::Local;
use textwrap::Options;

use crate::config::AppConfig;
use crate::llm::processor::PipelineSummary;
use crate::models::record::Record;
use crate::models::stats::AnalysisReport;
use crate::source::Row;
use crate::ui::messages;
use crate::utils::colors::{BOLD, CYAN, GREY, RESET};
use crate::utils::formatting::mask_secret;
use crate::utils::table::Table;

const WRAP_WIDTH: usize = 72;
const BLOCK_INDENT: &str = "   ";

pub fn print_banner() {
    println!(
        "{CYAN}{BOLD}sheetlens{RESET} v{}: spreadsheet category analysis",
        env!("CARGO_PKG_VERSION")
    );
}

/// Resolved configuration with secrets masked.
pub fn print_config_summary(cfg: &AppConfig) {
    messages::header("Configuration");
    println!(
        "• Spreadsheet: {}",
        cfg.spreadsheet_id.as_deref().unwrap_or("-- (CSV mode only)")
    );
    println!("• Sheet: {}", cfg.sheet_name);
    println!(
        "• Columns: category {}, description {}",
        cfg.category_column, cfg.description_column
    );
    if let Some(status) = &cfg.status_column {
        println!("• Status column: {status}");
    }
    match cfg.service_email() {
        Some(email) => println!("• Service account: {email}"),
        None => println!("• Service account: {GREY}not configured{RESET}"),
    }
    match &cfg.openrouter_api_key {
        Some(key) => println!(
            "• LLM: {} (key {})",
            cfg.openrouter_model,
            mask_secret(key)
        ),
        None => println!("• LLM: {GREY}disabled, no API key{RESET}"),
    }
    println!();
}

/// Raw row dump, a debugging aid behind --raw.
pub fn print_raw_rows(rows: &[Row]) {
    messages::header("Raw rows");
    for (i, row) in rows.iter().enumerate() {
        println!("{GREY}{i:>4}: {}{RESET}", row.join(" | "));
    }
}

/// Statistics table plus the summary block.
pub fn print_report(report: &AnalysisReport) {
    messages::header("Category statistics");

    let mut table = Table::new(&["Category", "Count", "Percent"]);
    for stat in report.sorted_by_count() {
        table.add_row(vec![
            stat.category.clone(),
            stat.count.to_string(),
            format!("{:.1}%", stat.percent),
        ]);
    }
    print!("{}", table.render());

    println!();
    println!("• Total records: {}", report.record_count);
    println!("• Unique categories: {}", report.unique_categories());
    if let Some(top) = report.most_popular() {
        println!(
            "• Most popular: {} ({} entries, {:.1}%)",
            top.category, top.count, top.percent
        );
    }
    if report.skipped > 0 {
        messages::warning(format!("Skipped {} rows without category", report.skipped));
    }
}

/// One block per annotated record. Silently absent when nothing was
/// annotated.
pub fn print_annotations(records: &[Record]) {
    if records.iter().all(|r| r.annotation.is_none()) {
        return;
    }

    messages::header("LLM analysis");
    for record in records {
        let Some(annotation) = &record.annotation else {
            continue;
        };
        let priority = annotation.priority;
        println!(
            "\n{} {}{}{RESET} request {} ({})",
            priority.glyph(),
            priority.color(),
            priority.label(),
            record.id,
            record.category,
        );
        if !record.timestamp.is_empty() {
            println!("{BLOCK_INDENT}{GREY}Date:{RESET} {}", record.timestamp);
        }
        if let Some(status) = &record.status {
            println!("{BLOCK_INDENT}{GREY}Status:{RESET} {status}");
        }
        println!("{BLOCK_INDENT}{GREY}Summary:{RESET}");
        println!("{}", wrap_block(&annotation.summary));
        println!("{BLOCK_INDENT}{GREY}Recommendation:{RESET}");
        println!("{}", wrap_block(&annotation.recommendation));
        println!(
            "{BLOCK_INDENT}{GREY}Analyzed in {:.1}s{RESET}",
            annotation.elapsed_seconds
        );
    }
}

/// Final status line(s): how much was analyzed, and when the run finished.
pub fn print_completion(report: &AnalysisReport, pipeline: Option<&PipelineSummary>) {
    println!();
    if let Some(summary) = pipeline {
        messages::success(format!(
            "{} of {} successfully analyzed",
            summary.analyzed, summary.eligible
        ));
    }
    messages::success(format!(
        "Run completed at {} ({} records, {} skipped)",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        report.record_count,
        report.skipped
    ));
}

fn wrap_block(text: &str) -> String {
    let options = Options::new(WRAP_WIDTH)
        .initial_indent(BLOCK_INDENT)
        .subsequent_indent(BLOCK_INDENT);
    textwrap::fill(text, options)
}
