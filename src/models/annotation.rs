use serde::Serialize;

use crate::utils::colors::{GREEN, RED, YELLOW};

/// Priority assigned by the language model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Maps free-form model output onto a priority, case-insensitive.
    /// Anything unrecognized falls back to Low.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "high" => Self::High,
            "medium" => Self::Medium,
            _ => Self::Low,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::High => "🔴",
            Self::Medium => "🟡",
            Self::Low => "🟢",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::High => RED,
            Self::Medium => YELLOW,
            Self::Low => GREEN,
        }
    }
}

/// LLM-derived enrichment attached to exactly one record, never mutated
/// after creation. Absence means "not analyzed".
#[derive(Debug, Clone, Serialize)]
pub struct Annotation {
    pub summary: String,
    pub recommendation: String,
    pub priority: Priority,
    pub elapsed_seconds: f64,
}
