//! # Data Quality Engine
//!
//! Rule engine and orchestrator for the data quality pipeline. This crate
//! provides:
//!
//! - The standard [`RuleSet`] (invalid dates, missing values, negative
//!   minutes, duplicate records)
//! - The [`Evaluator`] that applies rules and collects violations
//! - The [`Reconciler`] that derives the clean subset and verifies the
//!   row-count invariant
//! - The [`Summarizer`] that groups findings for reporting
//! - The [`Pipeline`] orchestrator tying the stages to the extraction and
//!   load collaborators
//!
//! ## Example
//!
//! ```rust
//! use dqp_core::{CapturingReporter, Dataset, PipelineOptions, Row, Value};
//! use dqp_engine::{Evaluator, Reconciler, RuleSet};
//!
//! let dataset = Dataset::from_rows(
//!     vec!["Date".into(), "SedentaryMinutes".into()],
//!     vec![
//!         Row::new(vec![Value::String("2022-01-01".into()), Value::Int(10)]),
//!         Row::new(vec![Value::String("invalid_date".into()), Value::Int(30)]),
//!     ],
//! );
//!
//! let reporter = CapturingReporter::new();
//! let ruleset = RuleSet::standard(&PipelineOptions::default());
//! let report = Evaluator::new().evaluate(&dataset, &ruleset, &reporter);
//! let clean = Reconciler::new().reconcile(&dataset, &report, &reporter)?;
//!
//! assert_eq!(report.violations.len(), 1);
//! assert_eq!(clean.len(), 1);
//! # Ok::<(), dqp_core::PipelineError>(())
//! ```

mod evaluator;
mod pipeline;
mod reconciler;
mod rules;
mod summarizer;

pub use evaluator::*;
pub use pipeline::*;
pub use reconciler::*;
pub use rules::*;
pub use summarizer::*;
