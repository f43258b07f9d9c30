//! Connection and Table Configuration
//! Explicit settings handed to each entry point instead of process-wide constants.

use serde::{Deserialize, Serialize};

/// Default location of the source CSV, relative to the working directory.
pub const DEFAULT_CSV_PATH: &str = "./data/master.csv";

/// Number of rows carried by a single insert statement.
pub const BATCH_SIZE: usize = 4000;

/// Number of countries reported by the ranking query.
pub const TOP_N: usize = 3;

/// Where and as whom to reach the Trino coordinator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub catalog: String,
    /// Default schema for unqualified table names.
    pub schema: Option<String>,
    /// Reported to the coordinator as the client source.
    pub source: String,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 8080,
            user: "admin".to_string(),
            catalog: "iceberg".to_string(),
            schema: None,
            source: "suicide-stats".to_string(),
        }
    }
}

impl ConnectionConfig {
    /// Copy of this configuration scoped to `schema`.
    pub fn with_schema(&self, schema: &str) -> Self {
        Self {
            schema: Some(schema.to_string()),
            ..self.clone()
        }
    }

    /// Base URL of the coordinator's HTTP endpoint.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// The table the loader provisions and fills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableTarget {
    pub schema: String,
    pub table: String,
    /// Object storage path backing the table's data files.
    pub location: String,
    pub format: String,
}

impl Default for TableTarget {
    fn default() -> Self {
        Self {
            schema: "suicide_data".to_string(),
            table: "suicide_rates".to_string(),
            location: "s3://warehouse/suicide_data/suicide_rates".to_string(),
            format: "PARQUET".to_string(),
        }
    }
}

impl TableTarget {
    /// `catalog.schema`
    pub fn qualified_schema(&self, catalog: &str) -> String {
        format!("{}.{}", catalog, self.schema)
    }

    /// `catalog.schema.table`
    pub fn qualified(&self, catalog: &str) -> String {
        format!("{}.{}.{}", catalog, self.schema, self.table)
    }
}
