//! `coffee browse` command - interactive catalog view
//!
//! Shows the grid and loops over Add / Edit / Delete / Refresh / Quit.
//! Every failure inside an action is reported as a notice and the loop
//! carries on with the grid as it was.

use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Select};
use miette::{IntoDiagnostic, Result};

use crate::cli::form::{run_form, FormPrompt};
use crate::cli::helpers::{format_decimal, open_store};
use crate::cli::view::{print_error, print_success, TerminalView};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{CatalogController, CoffeeForm, CoffeeId, CoffeeItem, Config, DeleteOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Add,
    Edit,
    Delete,
    Refresh,
    Quit,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Add => write!(f, "Add coffee"),
            Action::Edit => write!(f, "Edit coffee"),
            Action::Delete => write!(f, "Delete coffee"),
            Action::Refresh => write!(f, "Refresh"),
            Action::Quit => write!(f, "Quit"),
        }
    }
}

/// Edit and delete need a selected row, so they only show up with rows
fn available_actions(has_rows: bool) -> Vec<Action> {
    if has_rows {
        vec![Action::Add, Action::Edit, Action::Delete, Action::Refresh, Action::Quit]
    } else {
        vec![Action::Add, Action::Refresh, Action::Quit]
    }
}

pub fn run(global: &GlobalOpts) -> Result<()> {
    if !Term::stdout().is_term() {
        miette::bail!("`coffee browse` needs an interactive terminal; use `coffee list` instead");
    }

    let config = Config::load();
    let store = open_store(global, &config)?;
    let view = TerminalView::grid(OutputFormat::Table).with_dialogs();
    let mut controller = CatalogController::new(store, view);
    let theme = ColorfulTheme::default();
    let prompt = FormPrompt::new();

    if let Err(e) = controller.load_and_render() {
        print_error(&e.to_string());
    }

    loop {
        let actions = available_actions(!controller.rows().is_empty());
        let choice = Select::with_theme(&theme)
            .with_prompt("Action")
            .items(&actions)
            .default(0)
            .interact()
            .into_diagnostic()?;

        let outcome = match actions[choice] {
            Action::Add => add(&mut controller, &prompt),
            Action::Edit => edit(&mut controller, &prompt, &theme),
            Action::Delete => delete(&mut controller, &theme),
            Action::Refresh => controller.load_and_render().map(|_| ()).map_err(Into::into),
            Action::Quit => break,
        };

        if let Err(e) = outcome {
            print_error(&e.to_string());
        }
    }

    Ok(())
}

fn add(controller: &mut CatalogController<TerminalView>, prompt: &FormPrompt) -> Result<()> {
    let saved = run_form(
        controller,
        prompt,
        "New coffee",
        CoffeeForm::default(),
        |ctl, form| ctl.submit_new(form),
    )?;
    if let Some(id) = saved {
        print_success(&format!("Added coffee {}", style(format!("#{}", id)).cyan()));
    }
    Ok(())
}

fn edit(
    controller: &mut CatalogController<TerminalView>,
    prompt: &FormPrompt,
    theme: &ColorfulTheme,
) -> Result<()> {
    let Some(id) = pick_row(controller.rows(), "Coffee to edit", theme)? else {
        return Ok(());
    };

    let form = controller.edit_form(id)?;
    let title = format!("Edit coffee #{}", id);
    let saved = run_form(controller, prompt, &title, form, |ctl, form| {
        ctl.submit_edit(id, form)
    })?;
    if saved.is_some() {
        print_success(&format!("Updated coffee {}", style(format!("#{}", id)).cyan()));
    }
    Ok(())
}

fn delete(controller: &mut CatalogController<TerminalView>, theme: &ColorfulTheme) -> Result<()> {
    let Some(id) = pick_row(controller.rows(), "Coffee to delete", theme)? else {
        return Ok(());
    };

    if let DeleteOutcome::Deleted(item) = controller.confirm_delete(id)? {
        print_success(&format!("Deleted coffee '{}'", item.name));
    }
    Ok(())
}

/// Select one displayed row; `None` on Esc
fn pick_row(rows: &[CoffeeItem], prompt: &str, theme: &ColorfulTheme) -> Result<Option<CoffeeId>> {
    let labels: Vec<String> = rows
        .iter()
        .map(|item| {
            format!(
                "#{:<4} {}  ({}, {}, {})",
                item.id,
                item.name,
                item.roast_degree,
                item.coffee_type,
                format_decimal(item.price)
            )
        })
        .collect();

    let picked = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact_opt()
        .into_diagnostic()?;

    Ok(picked.map(|idx| rows[idx].id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_actions_need_rows() {
        assert!(!available_actions(false).contains(&Action::Edit));
        assert!(!available_actions(false).contains(&Action::Delete));
        assert!(available_actions(true).contains(&Action::Delete));
        assert_eq!(available_actions(true).last(), Some(&Action::Quit));
    }
}
