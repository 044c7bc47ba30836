//! `coffee show` command - one catalog row

use miette::Result;

use crate::cli::helpers::open_store;
use crate::cli::table::render_item;
use crate::cli::view::TerminalView;
use crate::cli::GlobalOpts;
use crate::core::{CatalogController, CoffeeId, Config};

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Coffee ID
    pub id: CoffeeId,
}

pub fn run(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let store = open_store(global, &config)?;
    let mut controller = CatalogController::new(store, TerminalView::hidden());
    controller.load_and_render()?;

    let item = controller.get(args.id)?;
    print!("{}", render_item(&item, global.format)?);
    Ok(())
}
