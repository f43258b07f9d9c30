//! Query Runner
//! Ranks countries by their average suicide rate.

use crate::format::rate;
use crate::store::{QueryOutput, StatementExecutor};
use crate::trino::TrinoError;
use serde_json::Value;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Store(#[from] TrinoError),
    #[error("unexpected result row: {0}")]
    UnexpectedRow(String),
}

/// One line of the ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryRate {
    pub country: String,
    /// Average suicides per 100k population, rounded to two decimals.
    pub rate: f64,
}

pub fn ranking_sql(table: &str, limit: usize) -> String {
    format!(
        "SELECT\n    country,\n    ROUND(AVG(suicides_100k_pop), 2) AS avg_suicide_rate\nFROM {}\nGROUP BY country\nORDER BY avg_suicide_rate DESC\nLIMIT {}",
        table, limit
    )
}

fn parse_row(row: &[Value]) -> Result<CountryRate, ReportError> {
    match row {
        [country, avg, ..] => {
            let country = country
                .as_str()
                .ok_or_else(|| ReportError::UnexpectedRow(format!("{:?}", row)))?;
            let rate = avg
                .as_f64()
                .ok_or_else(|| ReportError::UnexpectedRow(format!("{:?}", row)))?;
            Ok(CountryRate {
                country: country.to_string(),
                rate,
            })
        }
        _ => Err(ReportError::UnexpectedRow(format!("{:?}", row))),
    }
}

fn parse(output: &QueryOutput) -> Result<Vec<CountryRate>, ReportError> {
    output.rows.iter().map(|row| parse_row(row)).collect()
}

/// The `limit` countries with the highest average rate, highest first.
pub fn top_countries<E: StatementExecutor>(
    executor: &mut E,
    table: &str,
    limit: usize,
) -> Result<Vec<CountryRate>, ReportError> {
    let output = executor.execute(&ranking_sql(table, limit))?;
    parse(&output)
}

/// Print a ranking requested with `limit` as a 1-indexed list.
pub fn print_ranking<W: Write>(limit: usize, ranking: &[CountryRate], out: &mut W) -> io::Result<()> {
    writeln!(out, "TOP {} COUNTRIES BY AVERAGE SUICIDE RATE:", limit)?;
    for (i, entry) in ranking.iter().enumerate() {
        writeln!(out, "{}. {}: {} per 100k", i + 1, entry.country, rate(entry.rate))?;
    }
    Ok(())
}
