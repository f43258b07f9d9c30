//! Data Processor Module
//! Fills missing values, normalizes currency formatting and types each column.

use super::record::SuicideRecord;
use super::schema::{ColumnDef, FillValue, SqlType, COLUMNS, UNKNOWN};
use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("CSV is missing column {0:?}")]
    MissingColumn(String),
}

/// Handles data cleaning and conversion into table rows.
pub struct DataProcessor;

impl DataProcessor {
    /// Map the raw CSV frame onto the table layout.
    ///
    /// Output has one column per [`COLUMNS`] entry, named and typed as in the
    /// table, with no nulls.
    pub fn clean(df: &DataFrame) -> Result<DataFrame, ProcessorError> {
        let present: Vec<&str> = df.get_column_names().iter().map(|s| s.as_str()).collect();
        if let Some(missing) = COLUMNS.iter().find(|c| !present.contains(&c.source)) {
            return Err(ProcessorError::MissingColumn(missing.source.to_string()));
        }

        let exprs: Vec<Expr> = COLUMNS.iter().map(Self::column_expr).collect();
        let cleaned = df.clone().lazy().select(exprs).collect()?;
        Ok(cleaned)
    }

    fn column_expr(def: &ColumnDef) -> Expr {
        let source = col(def.source);
        let source = if def.currency {
            // "$2,156,624,900" -> "2156624900"
            source
                .cast(DataType::String)
                .str()
                .replace_all(lit("[$,]"), lit(""), false)
        } else {
            source
        };

        let typed = match def.sql_type {
            SqlType::Varchar => source.cast(DataType::String),
            SqlType::Integer => Self::truncate(source, DataType::Int32),
            SqlType::BigInt => Self::truncate(source, DataType::Int64),
            SqlType::Double => source.cast(DataType::Float64),
        };
        let filled = match def.fill {
            FillValue::Text(text) => typed.fill_null(lit(text)),
            FillValue::Int(v) => typed.fill_null(lit(v)),
            FillValue::Float(v) => typed.fill_null(lit(v)),
        };

        let dtype = match def.sql_type {
            SqlType::Varchar => DataType::String,
            SqlType::Integer => DataType::Int32,
            SqlType::BigInt => DataType::Int64,
            SqlType::Double => DataType::Float64,
        };
        filled.cast(dtype).alias(def.name)
    }

    /// Parse as a float, then truncate toward zero. Unparseable or
    /// out-of-range values become null.
    fn truncate(expr: Expr, dtype: DataType) -> Expr {
        expr.cast(DataType::Float64).cast(dtype)
    }

    /// Extract typed rows from a frame produced by [`DataProcessor::clean`].
    pub fn to_records(df: &DataFrame) -> Result<Vec<SuicideRecord>, ProcessorError> {
        let country = df.column("country")?.str()?;
        let year = df.column("year")?.i32()?;
        let sex = df.column("sex")?.str()?;
        let age = df.column("age")?.str()?;
        let suicides_no = df.column("suicides_no")?.i32()?;
        let population = df.column("population")?.i32()?;
        let suicides_100k_pop = df.column("suicides_100k_pop")?.f64()?;
        let country_year = df.column("country_year")?.str()?;
        let hdi_for_year = df.column("hdi_for_year")?.f64()?;
        let gdp_for_year = df.column("gdp_for_year")?.i64()?;
        let gdp_per_capita = df.column("gdp_per_capita")?.f64()?;
        let generation = df.column("generation")?.str()?;

        let text = |value: Option<&str>| value.unwrap_or(UNKNOWN).to_string();

        let records = (0..df.height())
            .map(|i| SuicideRecord {
                country: text(country.get(i)),
                year: year.get(i).unwrap_or(0),
                sex: text(sex.get(i)),
                age: text(age.get(i)),
                suicides_no: suicides_no.get(i).unwrap_or(0),
                population: population.get(i).unwrap_or(0),
                suicides_100k_pop: suicides_100k_pop.get(i).unwrap_or(0.0),
                country_year: text(country_year.get(i)),
                hdi_for_year: hdi_for_year.get(i).unwrap_or(0.0),
                gdp_for_year: gdp_for_year.get(i).unwrap_or(0),
                gdp_per_capita: gdp_per_capita.get(i).unwrap_or(0.0),
                generation: text(generation.get(i)),
            })
            .collect();
        Ok(records)
    }

    /// Clean the raw frame and extract its rows.
    pub fn prepare(df: &DataFrame) -> Result<Vec<SuicideRecord>, ProcessorError> {
        let cleaned = Self::clean(df)?;
        Self::to_records(&cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataLoader;
    use std::io::Write;

    const HEADER: &str = "country,year,sex,age,suicides_no,population,suicides/100k pop,country-year,HDI for year, gdp_for_year ($) ,gdp_per_capita ($),generation";

    fn load(rows: &[&str]) -> DataFrame {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        for row in rows {
            writeln!(file, "{}", row).unwrap();
        }
        file.flush().unwrap();
        DataLoader::load_csv(file.path()).unwrap()
    }

    #[test]
    fn cleans_a_complete_row() {
        let df = load(&["Albania,1987,male,15-24 years,21,312900,6.71,Albania1987,,\"2,156,624,900\",796,Generation X"]);
        let records = DataProcessor::prepare(&df).unwrap();
        assert_eq!(
            records,
            vec![SuicideRecord {
                country: "Albania".to_string(),
                year: 1987,
                sex: "male".to_string(),
                age: "15-24 years".to_string(),
                suicides_no: 21,
                population: 312900,
                suicides_100k_pop: 6.71,
                country_year: "Albania1987".to_string(),
                hdi_for_year: 0.0,
                gdp_for_year: 2156624900,
                gdp_per_capita: 796.0,
                generation: "Generation X".to_string(),
            }]
        );
    }

    #[test]
    fn missing_values_take_column_defaults() {
        let df = load(&[
            ",,,,,,,,,,,",
            "Albania,1987,male,15-24 years,21,312900,6.71,Albania1987,0.6,\"$1,000\",796,Boomers",
        ]);
        let records = DataProcessor::prepare(&df).unwrap();
        let empty = &records[0];
        assert_eq!(empty.country, "Unknown");
        assert_eq!(empty.sex, "Unknown");
        assert_eq!(empty.age, "Unknown");
        assert_eq!(empty.country_year, "Unknown");
        assert_eq!(empty.generation, "Unknown");
        assert_eq!(empty.year, 0);
        assert_eq!(empty.suicides_no, 0);
        assert_eq!(empty.population, 0);
        assert_eq!(empty.suicides_100k_pop, 0.0);
        assert_eq!(empty.hdi_for_year, 0.0);
        assert_eq!(empty.gdp_for_year, 0);
        assert_eq!(empty.gdp_per_capita, 0.0);
    }

    #[test]
    fn cleaned_frame_has_no_nulls() {
        let df = load(&[",,,,,,,,,,,", "Albania,1987,male,15-24 years,21,312900,6.71,Albania1987,,\"2,156,624,900\",796,Generation X"]);
        let cleaned = DataProcessor::clean(&df).unwrap();
        assert_eq!(cleaned.width(), COLUMNS.len());
        for column in cleaned.get_columns() {
            assert_eq!(column.null_count(), 0, "{} has nulls", column.name());
        }
    }

    #[test]
    fn gdp_strips_currency_formatting() {
        let df = load(&[
            "A,2000,male,5-14 years,1,100,1.0,A2000,0.5,\"$1,234,567\",10,G.I. Generation",
            "B,2000,male,5-14 years,1,100,1.0,B2000,0.5,not a number,10,G.I. Generation",
            "C,2000,male,5-14 years,1,100,1.0,C2000,0.5,\"1,234.9\",10,G.I. Generation",
        ]);
        let records = DataProcessor::prepare(&df).unwrap();
        let gdp: Vec<i64> = records.iter().map(|r| r.gdp_for_year).collect();
        assert_eq!(gdp, vec![1234567, 0, 1234]);
    }

    #[test]
    fn missing_source_column_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "country,year").unwrap();
        writeln!(file, "Albania,1987").unwrap();
        file.flush().unwrap();
        let df = DataLoader::load_csv(file.path()).unwrap();

        let err = DataProcessor::prepare(&df).unwrap_err();
        assert!(matches!(err, ProcessorError::MissingColumn(ref name) if name == "sex"));
    }
}
