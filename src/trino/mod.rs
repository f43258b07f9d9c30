//! Trino module - synchronous client for the coordinator's REST protocol

mod client;
mod error;
mod literal;
mod model;

pub use client::TrinoConnection;
pub use error::TrinoError;
