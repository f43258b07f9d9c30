//! Table Layout
//! The fixed twelve-column layout shared by the DDL, the CSV mapping and the
//! insert placeholders.

use crate::config::TableTarget;

/// Column type as declared in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    Varchar,
    Integer,
    BigInt,
    Double,
}

impl SqlType {
    pub fn as_sql(self) -> &'static str {
        match self {
            SqlType::Varchar => "VARCHAR",
            SqlType::Integer => "INTEGER",
            SqlType::BigInt => "BIGINT",
            SqlType::Double => "DOUBLE",
        }
    }
}

/// Substitute for a missing source value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FillValue {
    Text(&'static str),
    Int(i64),
    Float(f64),
}

/// One table column and the CSV header it is read from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnDef {
    pub name: &'static str,
    pub source: &'static str,
    pub sql_type: SqlType,
    pub fill: FillValue,
    /// Source values carry `$` and `,` formatting that must be stripped.
    pub currency: bool,
}

const fn column(name: &'static str, source: &'static str, sql_type: SqlType, fill: FillValue) -> ColumnDef {
    ColumnDef {
        name,
        source,
        sql_type,
        fill,
        currency: false,
    }
}

pub const UNKNOWN: &str = "Unknown";

pub const COLUMNS: [ColumnDef; 12] = [
    column("country", "country", SqlType::Varchar, FillValue::Text(UNKNOWN)),
    column("year", "year", SqlType::Integer, FillValue::Int(0)),
    column("sex", "sex", SqlType::Varchar, FillValue::Text(UNKNOWN)),
    column("age", "age", SqlType::Varchar, FillValue::Text(UNKNOWN)),
    column("suicides_no", "suicides_no", SqlType::Integer, FillValue::Int(0)),
    column("population", "population", SqlType::Integer, FillValue::Int(0)),
    column("suicides_100k_pop", "suicides/100k pop", SqlType::Double, FillValue::Float(0.0)),
    column("country_year", "country-year", SqlType::Varchar, FillValue::Text(UNKNOWN)),
    column("hdi_for_year", "HDI for year", SqlType::Double, FillValue::Float(0.0)),
    ColumnDef {
        name: "gdp_for_year",
        source: " gdp_for_year ($) ",
        sql_type: SqlType::BigInt,
        fill: FillValue::Int(0),
        currency: true,
    },
    column("gdp_per_capita", "gdp_per_capita ($)", SqlType::Double, FillValue::Float(0.0)),
    column("generation", "generation", SqlType::Varchar, FillValue::Text(UNKNOWN)),
];

/// `CREATE TABLE IF NOT EXISTS` for the target, backed by files at its location.
pub fn create_table_sql(catalog: &str, target: &TableTarget) -> String {
    let columns: Vec<String> = COLUMNS
        .iter()
        .map(|c| format!("    {} {}", c.name, c.sql_type.as_sql()))
        .collect();
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n{}\n) WITH (\n    location = '{}',\n    format = '{}'\n)",
        target.qualified(catalog),
        columns.join(",\n"),
        target.location.replace('\'', "''"),
        target.format.replace('\'', "''"),
    )
}

/// Multi-row insert with one `?` per value for `rows` rows, without padding
/// so a full batch stays well under the coordinator's query length limit.
pub fn insert_sql(table: &str, rows: usize) -> String {
    let tuple = format!("({})", vec!["?"; COLUMNS.len()].join(","));
    let tuples = vec![tuple.as_str(); rows].join(",");
    format!("INSERT INTO {} VALUES {}", table, tuples)
}
