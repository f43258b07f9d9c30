//! Pipeline module - provisioning, bulk loading and the ranking report

mod ingest;
mod provision;
mod report;

pub use ingest::{CsvIngest, IngestError, LoadOutcome};
pub use provision::create_schema_and_table;
pub use report::{print_ranking, ranking_sql, top_countries, CountryRate, ReportError};
