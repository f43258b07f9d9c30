//! Print the countries with the highest average suicide rate.

use anyhow::Result;
use suicide_stats::config::{ConnectionConfig, TableTarget, TOP_N};
use suicide_stats::pipeline::{print_ranking, top_countries};
use suicide_stats::trino::TrinoConnection;

fn main() -> Result<()> {
    suicide_stats::init_logging();

    let target = TableTarget::default();
    let config = ConnectionConfig::default().with_schema(&target.schema);

    let mut conn = TrinoConnection::connect(&config)?;
    let ranking = top_countries(&mut conn, &target.table, TOP_N)?;
    print_ranking(TOP_N, &ranking, &mut std::io::stdout().lock())?;
    conn.close();
    Ok(())
}
