//! Catalog grid formatting for every output format
//!
//! One function turns a slice of rows into text for the chosen
//! [`OutputFormat`], so `list`, `browse` and the post-mutation reload all
//! print the grid the same way.

use miette::{IntoDiagnostic, Result};
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::{format_decimal, truncate_str};
use crate::cli::OutputFormat;
use crate::core::CoffeeItem;

/// Column headers of the catalog grid
pub const HEADERS: [&str; 7] = [
    "ID",
    "Name",
    "Roast",
    "Type",
    "Description",
    "Price (RUB)",
    "Volume (g)",
];

/// Description column width before truncation in the bordered table
const DESCRIPTION_WIDTH: usize = 40;

fn record(item: &CoffeeItem, description: String) -> [String; 7] {
    [
        item.id.to_string(),
        item.name.clone(),
        item.roast_degree.to_string(),
        item.coffee_type.to_string(),
        description,
        format_decimal(item.price),
        format_decimal(item.volume),
    ]
}

/// Render the full grid
///
/// `Auto` is treated as `Table`.
pub fn render_rows(rows: &[CoffeeItem], format: OutputFormat) -> Result<String> {
    let out = match format {
        OutputFormat::Auto | OutputFormat::Table => {
            if rows.is_empty() {
                return Ok("No coffees in the catalog.\n".to_string());
            }
            let mut builder = Builder::default();
            builder.push_record(HEADERS);
            for item in rows {
                builder.push_record(record(item, truncate_str(&item.description, DESCRIPTION_WIDTH)));
            }
            format!("{}\n", builder.build().with(Style::rounded()))
        }
        OutputFormat::Md => {
            let mut builder = Builder::default();
            builder.push_record(HEADERS);
            for item in rows {
                builder.push_record(record(item, item.description.replace('|', "\\|")));
            }
            format!("{}\n", builder.build().with(Style::markdown()))
        }
        OutputFormat::Tsv => {
            let mut out = HEADERS.join("\t");
            out.push('\n');
            for item in rows {
                let fields = record(item, item.description.replace(['\t', '\n'], " "));
                out.push_str(&fields.join("\t"));
                out.push('\n');
            }
            out
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer
                .write_record(["id", "name", "roast_degree", "type", "description", "price", "volume"])
                .into_diagnostic()?;
            for item in rows {
                writer
                    .write_record(record(item, item.description.clone()))
                    .into_diagnostic()?;
            }
            let bytes = writer
                .into_inner()
                .map_err(|e| miette::miette!("failed to write CSV: {}", e.error()))?;
            String::from_utf8(bytes).into_diagnostic()?
        }
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(rows).into_diagnostic()?),
        OutputFormat::Yaml => serde_yml::to_string(&rows).into_diagnostic()?,
        OutputFormat::Id => rows.iter().map(|item| format!("{}\n", item.id)).collect(),
    };

    Ok(out)
}

/// Render a single coffee; `Auto` means YAML
pub fn render_item(item: &CoffeeItem, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Auto | OutputFormat::Yaml => serde_yml::to_string(item).into_diagnostic(),
        OutputFormat::Json => Ok(format!(
            "{}\n",
            serde_json::to_string_pretty(item).into_diagnostic()?
        )),
        OutputFormat::Id => Ok(format!("{}\n", item.id)),
        other => render_rows(std::slice::from_ref(item), other),
    }
}
