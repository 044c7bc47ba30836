//! `coffee list` command - the catalog grid

use miette::Result;

use crate::cli::helpers::{open_store, resolve_format};
use crate::cli::view::TerminalView;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{CatalogController, Config};

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Show count only, not the items
    #[arg(long)]
    pub count: bool,
}

pub fn run(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let store = open_store(global, &config)?;

    if args.count {
        let mut controller = CatalogController::new(store, TerminalView::hidden());
        let rows = controller.load_and_render()?;
        println!("{}", rows.len());
        return Ok(());
    }

    let format = resolve_format(global, &config, OutputFormat::Table);
    let mut controller = CatalogController::new(store, TerminalView::grid(format));
    controller.load_and_render()?;
    Ok(())
}
