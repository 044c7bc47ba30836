//! Coffee Catalog
//!
//! A catalog manager for coffee products kept in a local SQLite file, with a
//! table view and validated add/edit/delete forms in the terminal.

pub mod cli;
pub mod core;
