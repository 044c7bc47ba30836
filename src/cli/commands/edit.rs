//! `coffee edit` command - change an existing coffee

use console::style;
use miette::Result;

use crate::cli::commands::add::FieldArgs;
use crate::cli::form::{run_form, FormPrompt};
use crate::cli::helpers::open_store;
use crate::cli::table::render_item;
use crate::cli::view::{print_success, TerminalView};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{CatalogController, CoffeeId, Config};

#[derive(clap::Args, Debug)]
pub struct EditArgs {
    /// Coffee ID
    pub id: CoffeeId,

    #[command(flatten)]
    pub fields: FieldArgs,

    /// Edit the fields with the interactive form (pre-filled)
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

pub fn run(args: EditArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let store = open_store(global, &config)?;
    let mut controller = CatalogController::new(store, TerminalView::hidden());
    controller.load_and_render()?;

    let mut form = controller.edit_form(args.id)?;
    let id = args.id;

    if args.interactive {
        args.fields.apply(&mut form);
        let title = format!("Edit coffee #{}", id);
        let saved = run_form(&mut controller, &FormPrompt::new(), &title, form, |ctl, form| {
            ctl.submit_edit(id, form)
        })?;
        if saved.is_none() {
            println!("Cancelled.");
            return Ok(());
        }
    } else {
        if args.fields.is_empty() {
            miette::bail!("nothing to change: pass field options (e.g. --price 600) or use -i");
        }
        args.fields.apply(&mut form);
        controller.submit_edit(id, &form)?;
    }

    let item = controller.get(id)?;
    match global.format {
        OutputFormat::Auto | OutputFormat::Table => {
            if !global.quiet {
                print_success(&format!(
                    "Updated coffee {} '{}'",
                    style(format!("#{}", item.id)).cyan(),
                    item.name
                ));
            }
        }
        format => print!("{}", render_item(&item, format)?),
    }

    Ok(())
}
