//! `coffee delete` command - remove a coffee after confirmation

use miette::Result;

use crate::cli::helpers::open_store;
use crate::cli::view::{print_success, TerminalView};
use crate::cli::GlobalOpts;
use crate::core::{CatalogController, CoffeeId, Config, DeleteOutcome};

#[derive(clap::Args, Debug)]
pub struct DeleteArgs {
    /// Coffee ID
    pub id: CoffeeId,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

pub fn run(args: DeleteArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let store = open_store(global, &config)?;
    let view = TerminalView::hidden().assume_yes(args.yes);
    let mut controller = CatalogController::new(store, view);
    controller.load_and_render()?;

    match controller.confirm_delete(args.id)? {
        DeleteOutcome::Deleted(item) => {
            if !global.quiet {
                print_success(&format!("Deleted coffee '{}'", item.name));
            }
        }
        DeleteOutcome::Declined => println!("Aborted."),
    }

    Ok(())
}
