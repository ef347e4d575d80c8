//! Filesystem layer for the policy rule exporter
//!
//! Provides atomic output writes, format-detecting config loading and
//! content checksums.

pub mod checksum;
pub mod config;
pub mod error;
pub mod io;

pub use config::ConfigStore;
pub use error::{Error, Result};
