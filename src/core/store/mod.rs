//! SQLite-backed coffee store
//!
//! This module owns the single `coffee` table:
//! - Opens (or creates) the database file once and keeps the connection
//! - Creates the table on demand and seeds demonstration rows on first run
//! - Exposes list/get/insert/update/delete over [`CoffeeItem`]
//!
//! Every call is a direct single-row or full-table statement; there is no
//! caching layer between the caller and SQLite.

mod error;
mod schema;
mod seed;

pub use error::StoreError;
pub use schema::SchemaReport;

use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::debug;

use crate::core::coffee::{CoffeeId, CoffeeItem, NewCoffee};

pub type Result<T> = std::result::Result<T, StoreError>;

/// Columns in the order [`row_to_item`] reads them
const COLUMNS: &str = "id, name, roast_degree, type, description, price, volume";

/// The coffee catalog store
pub struct CoffeeStore {
    conn: Connection,
    path: Option<PathBuf>,
    seed_demo_data: bool,
}

impl CoffeeStore {
    /// Open or create the database file at `path`
    ///
    /// The parent directory is created if missing. The schema is not touched
    /// until [`CoffeeStore::ensure_schema`] is called.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let conn = Connection::open(path).map_err(StoreError::sqlite("opening database"))?;
        debug!(path = %path.display(), "opened coffee database");

        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
            seed_demo_data: true,
        })
    }

    /// Create an in-memory store (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn =
            Connection::open_in_memory().map_err(StoreError::sqlite("opening in-memory database"))?;

        Ok(Self {
            conn,
            path: None,
            seed_demo_data: true,
        })
    }

    /// Enable or disable first-run demonstration rows
    pub fn with_seed(mut self, seed_demo_data: bool) -> Self {
        self.seed_demo_data = seed_demo_data;
        self
    }

    /// Database file backing this store, `None` when in memory
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Every row, in primary key order
    pub fn list_all(&self) -> Result<Vec<CoffeeItem>> {
        let context = "listing coffees";
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {COLUMNS} FROM coffee ORDER BY id"))
            .map_err(StoreError::sqlite(context))?;

        let rows = stmt
            .query_map([], row_to_item)
            .map_err(StoreError::sqlite(context))?;

        let items = rows
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(StoreError::sqlite(context))?;

        debug!(rows = items.len(), "listed coffees");
        Ok(items)
    }

    /// Fetch one row by id
    pub fn get(&self, id: CoffeeId) -> Result<Option<CoffeeItem>> {
        self.conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM coffee WHERE id = ?1"),
                params![id],
                row_to_item,
            )
            .optional()
            .map_err(StoreError::sqlite("loading coffee"))
    }

    /// Insert a new row and return its assigned id
    pub fn insert(&self, coffee: &NewCoffee) -> Result<CoffeeId> {
        check_amounts(coffee)?;
        insert_with(&self.conn, coffee).map_err(StoreError::sqlite("saving coffee"))?;
        let id = self.conn.last_insert_rowid();
        debug!(id, name = %coffee.name, "inserted coffee");
        Ok(id)
    }

    /// Replace every field except the id
    ///
    /// Reports [`StoreError::NotFound`] when no row has this id.
    pub fn update(&self, id: CoffeeId, coffee: &NewCoffee) -> Result<()> {
        check_amounts(coffee)?;
        let changed = self
            .conn
            .execute(
                "UPDATE coffee
                 SET name = ?1, roast_degree = ?2, type = ?3, description = ?4, price = ?5, volume = ?6
                 WHERE id = ?7",
                params![
                    coffee.name,
                    coffee.roast_degree,
                    coffee.coffee_type,
                    coffee.description,
                    coffee.price,
                    coffee.volume,
                    id
                ],
            )
            .map_err(StoreError::sqlite("updating coffee"))?;

        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }

        debug!(id, "updated coffee");
        Ok(())
    }

    /// Remove a row; returns `false` if there was nothing to remove
    pub fn delete(&self, id: CoffeeId) -> Result<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM coffee WHERE id = ?1", params![id])
            .map_err(StoreError::sqlite("deleting coffee"))?;

        debug!(id, removed = changed > 0, "deleted coffee");
        Ok(changed > 0)
    }

    /// Number of rows in the table
    pub fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM coffee", [], |row| row.get(0))
            .map_err(StoreError::sqlite("counting coffees"))?;
        Ok(count as usize)
    }

    #[cfg(test)]
    pub(crate) fn conn_for_tests(&self) -> &Connection {
        &self.conn
    }
}

/// Price and volume must be finite and strictly positive
fn check_amounts(coffee: &NewCoffee) -> Result<()> {
    for (field, value) in [("price", coffee.price), ("volume", coffee.volume)] {
        if !(value.is_finite() && value > 0.0) {
            return Err(StoreError::InvalidValue { field, value });
        }
    }
    Ok(())
}

fn insert_with(conn: &Connection, coffee: &NewCoffee) -> rusqlite::Result<usize> {
    conn.execute(
        "INSERT INTO coffee (name, roast_degree, type, description, price, volume)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            coffee.name,
            coffee.roast_degree,
            coffee.coffee_type,
            coffee.description,
            coffee.price,
            coffee.volume
        ],
    )
}

fn row_to_item(row: &Row<'_>) -> rusqlite::Result<CoffeeItem> {
    Ok(CoffeeItem {
        id: row.get(0)?,
        name: row.get(1)?,
        roast_degree: row.get(2)?,
        coffee_type: row.get(3)?,
        description: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
        price: row.get(5)?,
        volume: row.get(6)?,
    })
}

#[cfg(test)]
mod tests;
