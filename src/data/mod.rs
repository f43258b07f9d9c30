//! Data module - CSV loading, cleaning and the table's column layout

mod loader;
mod processor;
mod record;
mod schema;

pub use loader::{DataLoader, LoaderError};
pub use processor::{DataProcessor, ProcessorError};
pub use record::SuicideRecord;
pub use schema::{create_table_sql, insert_sql, ColumnDef, FillValue, SqlType, COLUMNS};
