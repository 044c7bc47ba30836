//! Interactive add/edit form
//!
//! The form prompts every field with dialoguer, then asks Save or Cancel.
//! Validation happens in the controller; a rejected form is reopened with
//! what the user typed so it can be corrected.

use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use miette::{IntoDiagnostic, Result};

use crate::cli::view::print_warning;
use crate::core::controller::Result as CatalogResult;
use crate::core::{CatalogController, CatalogView, CoffeeForm, CoffeeType, RoastDegree};

/// Prompts for the six coffee fields
pub struct FormPrompt {
    theme: ColorfulTheme,
}

impl Default for FormPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl FormPrompt {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    /// Show the form pre-filled with `initial`; `None` means cancelled
    pub fn prompt(&self, title: &str, initial: &CoffeeForm) -> Result<Option<CoffeeForm>> {
        println!();
        println!("{} {}", style("◆").cyan(), style(title).bold());
        println!("{}", style("─".repeat(50)).dim());

        let name = self.text("Name", &initial.name)?;

        let roast_idx = Select::with_theme(&self.theme)
            .with_prompt("Roast degree")
            .items(&RoastDegree::ALL)
            .default(position(&RoastDegree::ALL, &initial.roast_degree))
            .interact()
            .into_diagnostic()?;

        let type_idx = Select::with_theme(&self.theme)
            .with_prompt("Type")
            .items(&CoffeeType::ALL)
            .default(position(&CoffeeType::ALL, &initial.coffee_type))
            .interact()
            .into_diagnostic()?;

        let description = self.text("Description", &initial.description)?;
        let price = self.text("Price (RUB)", &initial.price)?;
        let volume = self.text("Package volume (g)", &initial.volume)?;

        let action = Select::with_theme(&self.theme)
            .items(&["Save", "Cancel"])
            .default(0)
            .interact()
            .into_diagnostic()?;

        if action != 0 {
            return Ok(None);
        }

        Ok(Some(CoffeeForm {
            name,
            roast_degree: RoastDegree::ALL[roast_idx],
            coffee_type: CoffeeType::ALL[type_idx],
            description,
            price,
            volume,
        }))
    }

    fn text(&self, prompt: &str, initial: &str) -> Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text()
            .into_diagnostic()
    }
}

fn position<T: PartialEq>(choices: &[T], current: &T) -> usize {
    choices.iter().position(|c| c == current).unwrap_or(0)
}

/// Keep the form open until `submit` accepts it or the user cancels
///
/// Validation errors are shown as notices and the form is reopened with the
/// entered values. Storage errors end the form.
pub fn run_form<V, T>(
    controller: &mut CatalogController<V>,
    prompt: &FormPrompt,
    title: &str,
    initial: CoffeeForm,
    mut submit: impl FnMut(&mut CatalogController<V>, &CoffeeForm) -> CatalogResult<T>,
) -> Result<Option<T>>
where
    V: CatalogView,
{
    let mut current = initial;

    loop {
        let Some(form) = prompt.prompt(title, &current)? else {
            return Ok(None);
        };

        match submit(controller, &form) {
            Ok(value) => return Ok(Some(value)),
            Err(e) if e.is_validation() => {
                print_warning(&e.to_string());
                current = form;
            }
            Err(e) => return Err(e.into()),
        }
    }
}
