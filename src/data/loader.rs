//! CSV Data Loader Module
//! Reads the source CSV fully into memory using Polars.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("CSV file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
}

/// Reads raw, uncleaned CSV contents.
pub struct DataLoader;

impl DataLoader {
    /// Load a CSV file using Polars. Header names are kept verbatim.
    pub fn load_csv(file_path: &Path) -> Result<DataFrame, LoaderError> {
        if !file_path.exists() {
            return Err(LoaderError::NotFound(file_path.to_path_buf()));
        }

        let df = LazyCsvReader::new(file_path)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .finish()?
            .collect()?;
        tracing::debug!(path = %file_path.display(), rows = df.height(), "csv loaded");
        Ok(df)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_is_reported_before_parsing() {
        let err = DataLoader::load_csv(Path::new("./no/such/master.csv")).unwrap_err();
        assert!(matches!(err, LoaderError::NotFound(_)));
        assert_eq!(err.to_string(), "CSV file not found: ./no/such/master.csv");
    }

    #[test]
    fn keeps_header_names_verbatim() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "country,HDI for year, gdp_for_year ($) ").unwrap();
        writeln!(file, "Albania,,\"2,156,624,900\"").unwrap();
        writeln!(file, "Albania,0.5,\"2,126,000,000\"").unwrap();
        file.flush().unwrap();

        let df = DataLoader::load_csv(file.path()).unwrap();
        assert_eq!(df.height(), 2);
        let columns: Vec<&str> = df.get_column_names().iter().map(|s| s.as_str()).collect();
        assert_eq!(columns, vec!["country", "HDI for year", " gdp_for_year ($) "]);
    }
}
