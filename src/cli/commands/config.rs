use crate::cli::parser::Commands;
use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::ui::{messages, render};

/// Handle the `config` subcommand. With no flags it prints the summary.
pub fn handle(cmd: &Commands, cfg: &AppConfig) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config || !*check {
            render::print_config_summary(cfg);
        }

        if *check {
            let mut problems: Vec<&str> = Vec::new();
            if cfg.credentials.is_none() {
                problems.push("GOOGLE_CREDENTIALS_BASE64 not set (API mode unavailable)");
            }
            if cfg.spreadsheet_id.is_none() {
                problems.push("SPREADSHEET_ID not set (API mode unavailable)");
            }
            if !cfg.is_llm_enabled() {
                problems.push("OPENROUTER_API_KEY not set (LLM analysis unavailable)");
            }

            if problems.is_empty() {
                messages::success("Configuration OK");
            } else {
                for problem in problems {
                    messages::warning(problem);
                }
            }
        }
    }
    Ok(())
}
