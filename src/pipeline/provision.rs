//! Schema Provisioner
//! Creates the namespace and table when absent. Failures are reported on the
//! console and swallowed.

use crate::config::TableTarget;
use crate::data::create_table_sql;
use crate::store::StatementExecutor;
use crate::trino::TrinoError;
use std::io::{self, Write};

fn try_create<E: StatementExecutor>(executor: &mut E, catalog: &str, target: &TableTarget) -> Result<(), TrinoError> {
    executor.execute(&format!(
        "CREATE SCHEMA IF NOT EXISTS {}",
        target.qualified_schema(catalog)
    ))?;
    executor.execute(&create_table_sql(catalog, target))?;
    Ok(())
}

/// Ensure `catalog.schema.table` exists. Safe to call repeatedly.
///
/// Only writing to `out` can fail; store errors are printed instead.
pub fn create_schema_and_table<E: StatementExecutor, W: Write>(
    executor: &mut E,
    catalog: &str,
    target: &TableTarget,
    out: &mut W,
) -> io::Result<()> {
    match try_create(executor, catalog, target) {
        Ok(()) => writeln!(out, "Schema and table created successfully"),
        Err(err) => {
            tracing::debug!(table = %target.qualified(catalog), %err, "provisioning failed");
            writeln!(out, "Error creating table: {}", err)
        }
    }
}
