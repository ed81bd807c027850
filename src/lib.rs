#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
use core::fmt::Debug;
use std::num::ParseIntError;
use thiserror::Error;

pub mod aggregate;
pub mod annotations;
pub mod case;
pub mod corpus;
pub mod inheritance;
pub mod ontology;
pub mod parser;
pub mod report;
pub mod run;
pub mod stats;
pub mod term;

pub use aggregate::{Aggregator, DiagnosisOutcome};
pub use annotations::{DiseaseEntry, DiseaseId, DiseaseReference, Gene};
pub use case::{CaseRecord, Diagnosis};
pub use inheritance::{InheritanceCounts, InheritanceMode};
pub use ontology::Ontology;
pub use report::ReportWriter;
pub use stats::Summary;
pub use term::HpoTermId;

/// Most diseases are annotated with one or two modes of inheritance
const DEFAULT_NUM_MODES: usize = 2;

/// Error type for all fallible operations of `phenostats`
#[derive(Error, Debug)]
pub enum StatsError {
    /// A file or directory could not be opened or read
    #[error("cannot open file {0}")]
    CannotOpenFile(String),
    /// Source data does not follow the expected format
    #[error("invalid input data: {0}")]
    InvalidInput(String),
    /// A numerical part of an identifier is not an integer
    #[error("unable to parse Integer")]
    ParseIntError,
    /// A disease is annotated with a mode of inheritance outside of the known buckets
    ///
    /// This error is fatal for a run, no statistics must be reported afterwards.
    #[error("could not identify inheritance mode {mode} for disease {disease}")]
    UnrecognizedInheritance {
        /// The unknown inheritance term
        mode: HpoTermId,
        /// The disease that is annotated with `mode`
        disease: String,
    },
    /// Writing the report failed
    #[error("unable to write report: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ParseIntError> for StatsError {
    fn from(_: ParseIntError) -> Self {
        StatsError::ParseIntError
    }
}

/// Shortcut for `Result<T, StatsError>`
pub type StatsResult<T> = Result<T, StatsError>;

/// Lossless conversion of counts to `f64` for the descriptive statistics
///
/// # Panics
///
/// Panics if `n` does not fit into a `u32`. A corpus of that size is
/// not something this crate is built for.
fn f64_from_usize(n: usize) -> f64 {
    let intermediate: u32 = n
        .try_into()
        .expect("cannot safely create f64 from large usize");
    intermediate.into()
}
