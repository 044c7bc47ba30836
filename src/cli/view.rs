//! Terminal implementation of the catalog view

use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm};
use tracing::warn;

use crate::cli::helpers::ask_yes_no;
use crate::cli::table::render_rows;
use crate::cli::OutputFormat;
use crate::core::{CatalogView, CoffeeItem};

/// Prints the grid to stdout and asks confirmations on the terminal
pub struct TerminalView {
    format: OutputFormat,
    show_grid: bool,
    assume_yes: bool,
    dialog: bool,
}

impl TerminalView {
    /// A view that prints the grid on every render
    pub fn grid(format: OutputFormat) -> Self {
        Self {
            format,
            show_grid: true,
            assume_yes: false,
            dialog: false,
        }
    }

    /// A view that keeps the grid to itself (one-shot mutations)
    pub fn hidden() -> Self {
        Self {
            format: OutputFormat::Table,
            show_grid: false,
            assume_yes: false,
            dialog: false,
        }
    }

    /// Answer every confirmation with yes (`--yes`)
    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    /// Use dialoguer prompts instead of a plain `[y/N]` line
    pub fn with_dialogs(mut self) -> Self {
        self.dialog = true;
        self
    }
}

impl CatalogView for TerminalView {
    fn render(&mut self, rows: &[CoffeeItem]) {
        if !self.show_grid {
            return;
        }

        if self.dialog {
            // Fresh screen per reload, like a window repaint
            if let Err(e) = console::Term::stdout().clear_screen() {
                warn!("could not clear screen: {e}");
            }
        }

        match render_rows(rows, self.format) {
            Ok(out) => print!("{}", out),
            Err(e) => print_warning(&format!("could not render catalog: {}", e)),
        }
    }

    fn confirm(&mut self, question: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        let answer = if self.dialog {
            Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(question)
                .default(false)
                .interact()
                .map_err(|e| miette::miette!("{}", e))
        } else {
            ask_yes_no(question)
        };

        answer.unwrap_or_else(|e| {
            warn!("confirmation failed: {e}");
            false
        })
    }
}

/// Green check line on stdout
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Yellow notice on stderr
pub fn print_warning(message: &str) {
    eprintln!("{} {}", style("!").yellow(), message);
}

/// Red notice on stderr
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("✗").red(), message);
}
