//! `coffee add` command - add a coffee to the catalog

use console::style;
use miette::Result;

use crate::cli::form::{run_form, FormPrompt};
use crate::cli::helpers::open_store;
use crate::cli::table::render_item;
use crate::cli::view::{print_success, TerminalView};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{CatalogController, CoffeeForm, CoffeeType, Config, RoastDegree};

/// Coffee fields shared by `add` and `edit`
///
/// Price and volume stay raw text so they go through form validation.
#[derive(clap::Args, Debug, Default)]
pub struct FieldArgs {
    /// Coffee name
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Roast degree (light/medium/dark)
    #[arg(long, short = 'r')]
    pub roast: Option<RoastDegree>,

    /// Whole beans or ground (beans/ground)
    #[arg(long = "type", short = 't')]
    pub coffee_type: Option<CoffeeType>,

    /// Flavour description
    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// Price in rubles
    #[arg(long, short = 'p', allow_hyphen_values = true)]
    pub price: Option<String>,

    /// Package volume in grams
    #[arg(long, allow_hyphen_values = true)]
    pub volume: Option<String>,
}

impl FieldArgs {
    /// True if no field flag was given
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.roast.is_none()
            && self.coffee_type.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.volume.is_none()
    }

    /// Overwrite the form fields that were given on the command line
    pub fn apply(self, form: &mut CoffeeForm) {
        if let Some(name) = self.name {
            form.name = name;
        }
        if let Some(roast) = self.roast {
            form.roast_degree = roast;
        }
        if let Some(coffee_type) = self.coffee_type {
            form.coffee_type = coffee_type;
        }
        if let Some(description) = self.description {
            form.description = description;
        }
        if let Some(price) = self.price {
            form.price = price;
        }
        if let Some(volume) = self.volume {
            form.volume = volume;
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    #[command(flatten)]
    pub fields: FieldArgs,

    /// Fill in the fields with the interactive form
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

pub fn run(args: AddArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let store = open_store(global, &config)?;
    let mut controller = CatalogController::new(store, TerminalView::hidden());
    controller.load_and_render()?;

    let mut form = CoffeeForm::default();
    args.fields.apply(&mut form);

    let id = if args.interactive {
        let submitted = run_form(
            &mut controller,
            &FormPrompt::new(),
            "New coffee",
            form,
            |ctl, form| ctl.submit_new(form),
        )?;
        match submitted {
            Some(id) => id,
            None => {
                println!("Cancelled.");
                return Ok(());
            }
        }
    } else {
        controller.submit_new(&form)?
    };

    let item = controller.get(id)?;
    match global.format {
        OutputFormat::Auto | OutputFormat::Table => {
            if !global.quiet {
                print_success(&format!(
                    "Added coffee {} '{}'",
                    style(format!("#{}", item.id)).cyan(),
                    item.name
                ));
            }
        }
        format => print!("{}", render_item(&item, format)?),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_args_apply_only_given_fields() {
        let mut form = CoffeeForm {
            name: "Old".to_string(),
            price: "10".to_string(),
            volume: "250".to_string(),
            ..CoffeeForm::default()
        };

        FieldArgs {
            price: Some("12".to_string()),
            roast: Some(RoastDegree::Dark),
            ..FieldArgs::default()
        }
        .apply(&mut form);

        assert_eq!(form.name, "Old");
        assert_eq!(form.price, "12");
        assert_eq!(form.volume, "250");
        assert_eq!(form.roast_degree, RoastDegree::Dark);
    }

    #[test]
    fn test_field_args_is_empty() {
        assert!(FieldArgs::default().is_empty());
        assert!(!FieldArgs {
            description: Some(String::new()),
            ..FieldArgs::default()
        }
        .is_empty());
    }
}
