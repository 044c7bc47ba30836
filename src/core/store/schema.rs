//! Table creation and first-run seeding

use rusqlite::Connection;
use serde::Serialize;
use tracing::{debug, info};

use super::{insert_with, seed, CoffeeStore, Result, StoreError};

/// Stored in `PRAGMA user_version` once the table has been initialised
const SCHEMA_VERSION: i32 = 1;

/// What [`CoffeeStore::ensure_schema`] did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SchemaReport {
    /// The database had not been initialised before this call
    pub initialised: bool,
    /// Number of demonstration rows inserted
    pub seeded: usize,
}

impl CoffeeStore {
    /// Create the `coffee` table if absent and seed it on first run
    ///
    /// Idempotent. Demonstration rows are inserted at most once per database
    /// file: only when the file has never been initialised and the table is
    /// empty. A file created by an older build (rows present, no version mark)
    /// is just marked.
    pub fn ensure_schema(&mut self) -> Result<SchemaReport> {
        let context = "creating schema";
        let seed_demo_data = self.seed_demo_data;

        let tx = self.conn.transaction().map_err(StoreError::sqlite(context))?;

        tx.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS coffee (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                roast_degree TEXT NOT NULL,
                type TEXT NOT NULL,
                description TEXT,
                price REAL NOT NULL,
                volume REAL NOT NULL
            );
            "#,
        )
        .map_err(StoreError::sqlite(context))?;

        let version = user_version(&tx).map_err(StoreError::sqlite(context))?;
        if version >= SCHEMA_VERSION {
            tx.commit().map_err(StoreError::sqlite(context))?;
            debug!(version, "schema already initialised");
            return Ok(SchemaReport::default());
        }

        let mut report = SchemaReport {
            initialised: true,
            seeded: 0,
        };

        let existing: i64 = tx
            .query_row("SELECT COUNT(*) FROM coffee", [], |row| row.get(0))
            .map_err(StoreError::sqlite(context))?;

        if existing == 0 && seed_demo_data {
            for coffee in seed::demo_coffees() {
                insert_with(&tx, &coffee).map_err(StoreError::sqlite("seeding demo data"))?;
                report.seeded += 1;
            }
        }

        tx.pragma_update(None, "user_version", SCHEMA_VERSION)
            .map_err(StoreError::sqlite(context))?;
        tx.commit().map_err(StoreError::sqlite(context))?;

        if report.seeded > 0 {
            info!(rows = report.seeded, "seeded demonstration coffees");
        }
        Ok(report)
    }
}

fn user_version(conn: &Connection) -> rusqlite::Result<i32> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
}
