//! Provision the suicide statistics table and reload it from the CSV.

use anyhow::Result;
use std::path::Path;
use suicide_stats::config::{ConnectionConfig, TableTarget, DEFAULT_CSV_PATH};
use suicide_stats::pipeline::{create_schema_and_table, CsvIngest};
use suicide_stats::trino::TrinoConnection;

fn main() -> Result<()> {
    suicide_stats::init_logging();

    let config = ConnectionConfig::default();
    let target = TableTarget::default();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let mut conn = TrinoConnection::connect(&config)?;
    create_schema_and_table(&mut conn, &config.catalog, &target, &mut out)?;
    conn.close();

    let outcome = CsvIngest::new(&config.catalog, target).load_csv(
        Path::new(DEFAULT_CSV_PATH),
        || TrinoConnection::connect(&config),
        &mut out,
    )?;
    tracing::info!(?outcome, "load finished");
    Ok(())
}
