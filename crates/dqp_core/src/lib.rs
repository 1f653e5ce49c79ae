//! # Data Quality Pipeline Core
//!
//! Core types for the data quality pipeline.
//!
//! This crate provides the building blocks the engine, the I/O adapters, and
//! the CLI share:
//!
//! - **Dataset model**: typed cell [`Value`]s, [`Row`]s, and the immutable
//!   [`Dataset`] they belong to
//! - **Rule capability**: the [`Rule`] trait, [`Severity`], and the
//!   [`Violation`] findings rules produce
//! - **Reports**: [`DqReport`] and the grouped [`Summary`]
//! - **Collaborator seams**: [`Extractor`] and [`Loader`] for the I/O
//!   boundary, [`Reporter`] for logging
//! - **Faults**: the [`PipelineError`] taxonomy
//!
//! ## Example
//!
//! ```rust
//! use dqp_core::{Dataset, Row, Value};
//!
//! let mut dataset = Dataset::new(vec!["Id".into(), "SedentaryMinutes".into()]);
//! dataset.push_row(Row::new(vec![Value::Int(1001), Value::Int(728)]));
//!
//! assert_eq!(dataset.len(), 1);
//! assert_eq!(dataset.value(0, "SedentaryMinutes"), Some(&Value::Int(728)));
//! ```

mod collaborators;
mod dataset;
mod error;
mod options;
mod report;
mod reporter;
mod rule;

pub use collaborators::*;
pub use dataset::*;
pub use error::*;
pub use options::*;
pub use report::*;
pub use reporter::*;
pub use rule::*;
