//! Core components of the `yahoo-fin-rs` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The [`YfClient`] and its builder.
//! - The [`YfError`] type.
//! - The tabular result types ([`Table`], [`StatementTable`]).
//! - Internal networking helpers.

/// The client (`YfClient`), builder, and endpoint defaults.
pub mod client;
/// Date and display-number conversions.
pub mod conversions;
/// The primary error type (`YfError`) for the crate.
pub mod error;
/// Tabular result types.
pub mod table;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::YfClient`
pub use client::{YfClient, YfClientBuilder};
pub use error::YfError;
pub use table::{Cell, StatementRow, StatementTable, Table};
