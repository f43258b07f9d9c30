//! CSV Ingestion Pipeline
//! Reads, cleans and fully replaces the table contents in fixed-size batches.
//!
//! The load is not transactional: each batch commits on its own, so a failure
//! part way through leaves the batches already inserted in the table.

use crate::config::{TableTarget, BATCH_SIZE};
use crate::data::{insert_sql, DataLoader, DataProcessor, LoaderError, ProcessorError, SuicideRecord, COLUMNS};
use crate::format::thousands;
use crate::store::StatementExecutor;
use crate::trino::TrinoError;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error(transparent)]
    Loader(#[from] LoaderError),
    #[error(transparent)]
    Processor(#[from] ProcessorError),
    #[error(transparent)]
    Store(#[from] TrinoError),
    #[error("console write failed: {0}")]
    Io(#[from] io::Error),
}

/// How a load invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The CSV path does not exist; nothing was touched.
    MissingFile,
    /// Every batch went in; `rows` is what the table reports afterwards.
    Loaded { rows: u64 },
    /// A store error stopped the load after `committed` rows were inserted.
    Aborted { committed: usize },
}

/// Loads one CSV file into the target table.
pub struct CsvIngest {
    catalog: String,
    target: TableTarget,
    batch_size: usize,
}

impl CsvIngest {
    pub fn new(catalog: &str, target: TableTarget) -> Self {
        Self {
            catalog: catalog.to_string(),
            target,
            batch_size: BATCH_SIZE,
        }
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Replace the table contents with the rows of `path`.
    ///
    /// `connect` is only called once the file has been read and cleaned.
    /// Connection and `USE` failures, as well as unreadable CSV, are returned;
    /// failures while deleting, inserting or counting are printed and end the
    /// load with [`LoadOutcome::Aborted`].
    pub fn load_csv<E, F, W>(&self, path: &Path, connect: F, out: &mut W) -> Result<LoadOutcome, IngestError>
    where
        E: StatementExecutor,
        F: FnOnce() -> Result<E, TrinoError>,
        W: Write,
    {
        let df = match DataLoader::load_csv(path) {
            Ok(df) => df,
            Err(LoaderError::NotFound(missing)) => {
                writeln!(out, "Error: CSV file not found: {}", missing.display())?;
                return Ok(LoadOutcome::MissingFile);
            }
            Err(err) => return Err(err.into()),
        };
        let records = DataProcessor::prepare(&df)?;
        tracing::info!(path = %path.display(), rows = records.len(), "csv cleaned");

        let mut executor = connect()?;
        executor.execute(&format!("USE {}", self.target.qualified_schema(&self.catalog)))?;

        let mut committed = 0;
        match self.replace(&mut executor, &records, &mut committed, out) {
            Ok(rows) => Ok(LoadOutcome::Loaded { rows }),
            Err(IngestError::Store(err)) => {
                tracing::info!(committed, total = records.len(), "load aborted, table left partially filled");
                writeln!(out, "Error loading data: {}", err)?;
                Ok(LoadOutcome::Aborted { committed })
            }
            Err(err) => Err(err),
        }
    }

    fn replace<E: StatementExecutor, W: Write>(
        &self,
        executor: &mut E,
        records: &[SuicideRecord],
        committed: &mut usize,
        out: &mut W,
    ) -> Result<u64, IngestError> {
        let table = &self.target.table;
        executor.execute(&format!("DELETE FROM {}", table))?;

        for (index, batch) in records.chunks(self.batch_size).enumerate() {
            let mut params = Vec::with_capacity(batch.len() * COLUMNS.len());
            for record in batch {
                record.bind(&mut params);
            }
            executor.execute_with(&insert_sql(table, batch.len()), &params)?;
            *committed += batch.len();
            writeln!(out, "Inserted chunk {}: {} rows", index + 1, thousands(*committed as u64))?;
        }

        let count = executor.execute(&format!("SELECT COUNT(*) FROM {}", table))?;
        let rows = count
            .scalar()
            .and_then(|v| v.as_u64())
            .ok_or_else(|| TrinoError::Malformed("row count query returned no number".to_string()))?;
        writeln!(out, "Total rows loaded: {}", thousands(rows))?;
        Ok(rows)
    }
}
