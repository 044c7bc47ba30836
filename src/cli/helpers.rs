//! Shared helper functions for CLI commands
//!
//! This module contains utility functions that are used across multiple
//! command modules to avoid code duplication.

use miette::{IntoDiagnostic, Result};
use tracing::debug;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{CoffeeStore, Config};

/// Open the store selected by `--db`, the configuration or the default path
pub fn open_store(global: &GlobalOpts, config: &Config) -> Result<CoffeeStore> {
    let path = config.database_path(global.db.as_deref());
    debug!(path = %path.display(), "resolved database path");
    let store = CoffeeStore::open(&path)?;
    Ok(store.with_seed(config.seed_demo_data()))
}

/// Resolve `auto` against the configured default, then `fallback`
pub fn resolve_format(global: &GlobalOpts, config: &Config, fallback: OutputFormat) -> OutputFormat {
    match global.format {
        OutputFormat::Auto => config
            .default_format
            .as_deref()
            .and_then(|f| f.parse().ok())
            .filter(|f| *f != OutputFormat::Auto)
            .unwrap_or(fallback),
        f => f,
    }
}

/// Display a decimal the way the catalog grid shows it (`1250.0`, `12.5`)
pub fn format_decimal(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// Truncate a string to max_len characters, adding "..." if truncated
///
/// Counts characters, not bytes, so Cyrillic names are cut cleanly.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Ask a yes/no question on stdout and read the answer from stdin
///
/// Anything other than `y`/`yes` (case-insensitive) counts as no.
pub fn ask_yes_no(question: &str) -> Result<bool> {
    use std::io::{self, Write};

    print!("{} [y/N] ", question);
    io::stdout().flush().into_diagnostic()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input).into_diagnostic()?;
    let answer = input.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn global(format: OutputFormat) -> GlobalOpts {
        GlobalOpts {
            format,
            quiet: false,
            verbose: false,
            db: None,
        }
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(1250.0), "1250.0");
        assert_eq!(format_decimal(12.5), "12.5");
        assert_eq!(format_decimal(0.01), "0.01");
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello world", 8), "hello...");
        assert_eq!(truncate_str("hi", 2), "hi");
        assert_eq!(truncate_str("Эфиопия Иргачефф", 10), "Эфиопия...");
    }

    #[test]
    fn test_resolve_format() {
        let config = Config {
            default_format: Some("json".to_string()),
            ..Config::default()
        };
        assert_eq!(
            resolve_format(&global(OutputFormat::Auto), &config, OutputFormat::Table),
            OutputFormat::Json
        );
        assert_eq!(
            resolve_format(&global(OutputFormat::Csv), &config, OutputFormat::Table),
            OutputFormat::Csv
        );
        assert_eq!(
            resolve_format(&global(OutputFormat::Auto), &Config::default(), OutputFormat::Table),
            OutputFormat::Table
        );
    }
}
