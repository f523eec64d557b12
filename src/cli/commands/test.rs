use crate::cli::parser::Commands;
use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::llm::OpenRouterClient;
use crate::source::sheets::SheetsClient;
use crate::ui::messages;

/// Connection tests only: no rows are fetched or analyzed. Individual
/// failures are reported but do not abort the other test.
pub fn handle(cmd: &Commands, cfg: &AppConfig) -> AppResult<()> {
    if let Commands::Test { api, llm } = cmd {
        if !*api && !*llm {
            messages::warning("Nothing to test, pass --api and/or --llm");
            return Ok(());
        }
        messages::info("Connection test...");

        if *api {
            test_sheets(cfg);
        }
        if *llm {
            test_llm(cfg);
        }

        messages::success("Testing completed");
    }
    Ok(())
}

fn test_sheets(cfg: &AppConfig) {
    messages::info("Testing Google Sheets...");
    match SheetsClient::new(cfg).and_then(|client| client.test_connection()) {
        Ok(info) => {
            messages::success(format!("Google Sheets: OK, spreadsheet '{}'", info.title));
            messages::info(format!("Available sheets: {}", info.sheet_titles.join(", ")));
            if !info.target_exists {
                messages::warning(format!(
                    "Sheet '{}' not found in spreadsheet",
                    cfg.sheet_name
                ));
            }
        }
        Err(e) => messages::error(format!("Google Sheets: {e}")),
    }
}

fn test_llm(cfg: &AppConfig) {
    messages::info("Testing LLM...");
    if !cfg.is_llm_enabled() {
        messages::error("LLM disabled (no API key in configuration)");
        return;
    }
    match OpenRouterClient::new(cfg) {
        Ok(client) => match client.test_connection() {
            Ok(reply) => {
                messages::success(format!("LLM: OK ({})", client.model()));
                messages::info(format!("Response: {reply}"));
            }
            Err(e) => messages::error(format!("LLM: {e}")),
        },
        Err(e) => messages::error(format!("LLM client: {e}")),
    }
}
