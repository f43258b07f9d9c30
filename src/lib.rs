//! Suicide Stats - CSV loader and ranking query for an Iceberg table served by Trino
//!
//! The `create_table` binary provisions the table and reloads it from the
//! source CSV; the `query` binary prints the countries with the highest
//! average suicide rate.

pub mod config;
pub mod data;
pub mod format;
pub mod pipeline;
pub mod store;
pub mod trino;

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset. Failures the console already
/// reports are logged below this level.
const DEFAULT_FILTER: &str = "warn";

/// Install the stderr diagnostics subscriber, filtered by `RUST_LOG`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
pub(crate) mod testing {
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::EnvFilter;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Run `f` under the default filter and return what it logged.
    pub fn default_filter_output<F: FnOnce()>(f: F) -> String {
        let buf = SharedBuf::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(super::DEFAULT_FILTER))
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = buf.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }
}
