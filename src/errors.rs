//! Unified application error type.
//! All modules (source, analysis, llm, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Transport
    // ---------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // ---------------------------
    // Row source errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Google Sheets error: {0}")]
    Sheets(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid credentials: {0}")]
    Credentials(String),

    #[error("Column not found: {0}")]
    MissingColumn(String),

    // ---------------------------
    // Annotation errors
    // ---------------------------
    #[error("LLM error: {0}")]
    Llm(String),
}

pub type AppResult<T> = Result<T, AppError>;
