//! `coffee init` command - create the catalog table

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::open_store;
use crate::cli::view::print_success;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::Config;

pub fn run(global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let mut store = open_store(global, &config)?;
    let report = store.ensure_schema()?;
    let rows = store.count()?;

    let path = store
        .path()
        .map(|p| p.display().to_string())
        .unwrap_or_default();

    if global.format == OutputFormat::Json {
        let json = serde_json::json!({
            "path": path,
            "rows": rows,
            "initialised": report.initialised,
            "seeded": report.seeded,
        });
        println!("{}", serde_json::to_string_pretty(&json).into_diagnostic()?);
        return Ok(());
    }

    if global.quiet {
        return Ok(());
    }

    if report.initialised {
        print_success(&format!("Initialized catalog at {}", style(&path).cyan()));
    } else {
        print_success(&format!("Catalog already initialized at {}", style(&path).cyan()));
    }
    if report.seeded > 0 {
        println!("  {} demonstration coffee(s) added", style(report.seeded).cyan());
    }
    println!("  {} coffee(s) in the catalog", style(rows).cyan());

    Ok(())
}
