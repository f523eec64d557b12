use std::path::PathBuf;
use std::time::Duration;

use crate::analysis::{classify, stats};
use crate::cli::parser::{Cli, Commands};
use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::llm::{OpenRouterClient, processor};
use crate::models::record::Record;
use crate::source::{self, Row, sheets::SheetsClient};
use crate::ui::{messages, render};

pub fn handle(cli: &Cli, cfg: &AppConfig) -> AppResult<()> {
    if let Commands::Analyze { csv, api, llm, raw } = &cli.command {
        render::print_banner();
        if cli.debug {
            render::print_config_summary(cfg);
        }

        let rows = load_rows(csv.as_ref(), *api, cfg)?;
        if rows.len() <= 1 {
            messages::info("No data for analysis.");
            return Ok(());
        }
        messages::success(format!("Loaded {} rows", rows.len()));

        if *raw {
            render::print_raw_rows(&rows);
        }

        let (header, data) = rows
            .split_first()
            .ok_or_else(|| AppError::Config("row source returned no header".to_string()))?;
        let columns = classify::resolve_columns(header, cfg)?;
        let classified = classify::classify(data, &columns);
        let report = stats::aggregate(&classified.records, data.len(), classified.skipped);

        let mut records = classified.records;
        let pipeline = if *llm {
            run_pipeline(cfg, &mut records)
        } else {
            None
        };

        render::print_report(&report);
        render::print_annotations(&records);
        render::print_completion(&report, pipeline.as_ref());
    }
    Ok(())
}

fn load_rows(csv: Option<&PathBuf>, api: bool, cfg: &AppConfig) -> AppResult<Vec<Row>> {
    if api {
        messages::step("Loading rows from Google Sheets...");
        let client = SheetsClient::new(cfg)?;
        return client.fetch_rows();
    }
    match csv {
        Some(path) => {
            messages::step(format!("Loading rows from {}...", path.display()));
            source::csv::read_rows(path)
        }
        // clap's source group guarantees one of the two
        None => Err(AppError::Config("no row source selected".to_string())),
    }
}

/// Runs the annotation pass when a key is configured; a missing key is a
/// warning, not a failure, so the statistics still print.
fn run_pipeline(cfg: &AppConfig, records: &mut [Record]) -> Option<processor::PipelineSummary> {
    if !cfg.is_llm_enabled() {
        messages::warning("LLM analysis disabled (no API key configured)");
        return None;
    }
    let client = match OpenRouterClient::new(cfg) {
        Ok(client) => client,
        Err(e) => {
            messages::warning(format!("LLM client unavailable: {e}"));
            return None;
        }
    };

    let eligible = records.iter().filter(|r| r.wants_analysis()).count();
    if eligible == 0 {
        messages::warning("No records with a description to analyze");
        return None;
    }
    messages::step(format!(
        "Analyzing {eligible} requests via {}...",
        client.model()
    ));
    Some(processor::annotate(
        &client,
        records,
        Duration::from_millis(cfg.llm_request_delay_ms),
    ))
}
