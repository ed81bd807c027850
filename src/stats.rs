//! Descriptive statistics of an aggregated corpus
//!
//! The [`Summary`] is calculated once, after all case records are recorded
//! by the [`Aggregator`]. It only contains descriptive values
//! (median, mean, maximum) and counts.
//!
//! # Percentiles
//!
//! Medians are the 50th percentile as calculated by
//! [`statrs`](statrs::statistics::OrderStatistics::percentile). For the 50th
//! percentile, this is the middle value of an odd number of values and the
//! mean of the two middle values of an even number of values:
//!
//! ```
//! use phenostats::stats::Distribution;
//!
//! assert_eq!(Distribution::from_counts(&[1, 2, 3, 4]).median(), 2.5);
//! assert_eq!(Distribution::from_counts(&[5, 1, 3]).median(), 3.0);
//! ```
//!
//! All values of an empty distribution are `0`.
use std::fmt::Display;

use statrs::statistics::{Data, OrderStatistics, Statistics};

use crate::aggregate::Aggregator;
use crate::inheritance::{InheritanceCounts, InheritanceMode};
use crate::f64_from_usize;

/// Median, mean and maximum of a list of counts
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Distribution {
    median: f64,
    mean: f64,
    max: usize,
}

impl Distribution {
    /// Describes the distribution of `counts`
    pub fn from_counts(counts: &[usize]) -> Self {
        let Some(max) = counts.iter().max().copied() else {
            return Self::default();
        };
        let values: Vec<f64> = counts.iter().map(|count| f64_from_usize(*count)).collect();
        let mean = Statistics::mean(&values);
        let mut data = Data::new(values);
        // medians of integers are multiples of 0.5, this removes float noise of the interpolation
        let median = (data.percentile(50) * 2.0).round() / 2.0;
        Self { median, mean, max }
    }

    /// The 50th percentile
    pub fn median(&self) -> f64 {
        self.median
    }

    /// The arithmetic mean
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// The largest count
    pub fn max(&self) -> usize {
        self.max
    }
}

/// Summary statistics of a corpus
///
/// # Examples
///
/// ```
/// use phenostats::{Aggregator, DiseaseReference, Summary};
///
/// let reference = DiseaseReference::new();
/// let aggregator = Aggregator::new(&reference);
///
/// let summary = Summary::from(&aggregator);
/// assert_eq!(summary.cases(), 0);
/// assert_eq!(summary.mean_usage_per_term(), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Summary {
    cases: usize,
    diseases: usize,
    cases_per_disease: Distribution,
    observed_per_case: Distribution,
    negated_per_case: Distribution,
    distinct_terms: usize,
    mean_usage_per_term: f64,
    genes: usize,
    inheritance: InheritanceCounts,
    unmatched: usize,
    no_inheritance: usize,
}

impl From<&Aggregator<'_>> for Summary {
    fn from(aggregator: &Aggregator<'_>) -> Self {
        let disease_counts: Vec<usize> = aggregator.disease_counts().values().copied().collect();

        let term_usage = aggregator.term_usage();
        let mean_usage_per_term = if term_usage.is_empty() {
            0.0
        } else {
            f64_from_usize(term_usage.values().sum()) / f64_from_usize(term_usage.len())
        };

        Self {
            cases: aggregator.cases(),
            diseases: disease_counts.len(),
            cases_per_disease: Distribution::from_counts(&disease_counts),
            observed_per_case: Distribution::from_counts(aggregator.observed_per_case()),
            negated_per_case: Distribution::from_counts(aggregator.negated_per_case()),
            distinct_terms: term_usage.len(),
            mean_usage_per_term,
            genes: aggregator.genes().len(),
            inheritance: aggregator.inheritance().clone(),
            unmatched: aggregator.unmatched(),
            no_inheritance: aggregator.no_inheritance(),
        }
    }
}

impl Summary {
    /// Number of recorded case records
    pub fn cases(&self) -> usize {
        self.cases
    }

    /// Number of distinct diagnosed diseases
    pub fn diseases(&self) -> usize {
        self.diseases
    }

    /// Distribution of the number of cases per disease
    pub fn cases_per_disease(&self) -> &Distribution {
        &self.cases_per_disease
    }

    /// Distribution of the number of observed terms per case
    pub fn observed_per_case(&self) -> &Distribution {
        &self.observed_per_case
    }

    /// Distribution of the number of negated terms per case
    pub fn negated_per_case(&self) -> &Distribution {
        &self.negated_per_case
    }

    /// Number of distinct phenotype terms
    pub fn distinct_terms(&self) -> usize {
        self.distinct_terms
    }

    /// Sum of all term usage counts, divided by the number of distinct terms
    ///
    /// `0` if no terms were used at all
    pub fn mean_usage_per_term(&self) -> f64 {
        self.mean_usage_per_term
    }

    /// Number of distinct genes
    pub fn genes(&self) -> usize {
        self.genes
    }

    /// Diagnoses per mode of inheritance
    ///
    /// Counts are per case, not per distinct disease. Together with
    /// [`Summary::unmatched`] and [`Summary::no_inheritance`] they add up
    /// to [`Summary::cases`].
    pub fn inheritance(&self) -> &InheritanceCounts {
        &self.inheritance
    }

    /// Diagnoses of diseases that are not part of the reference
    pub fn unmatched(&self) -> usize {
        self.unmatched
    }

    /// Diagnoses of diseases without any mode of inheritance
    pub fn no_inheritance(&self) -> usize {
        self.no_inheritance
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Number of diseases: {} (median {:.1}, max {})",
            self.diseases,
            self.cases_per_disease.median(),
            self.cases_per_disease.max()
        )?;
        for mode in InheritanceMode::ALL {
            writeln!(f, "{}: {}", mode, self.inheritance.get(mode))?;
        }
        writeln!(f, "multiple MoI: {}", self.inheritance.multiple())?;
        writeln!(f, "Number of genes: {}", self.genes)?;
        writeln!(
            f,
            "Total number of HPO terms used in phenopackets: {}",
            self.distinct_terms
        )?;
        writeln!(
            f,
            "Mean number of times each HPO term was used: {:.2}",
            self.mean_usage_per_term
        )?;
        writeln!(
            f,
            "Mean negated {:.2}, median {:.1} max {}",
            self.negated_per_case.mean(),
            self.negated_per_case.median(),
            self.negated_per_case.max()
        )?;
        write!(
            f,
            "Mean {:.2}, median {:.1} max {}",
            self.observed_per_case.mean(),
            self.observed_per_case.median(),
            self.observed_per_case.max()
        )
    }
}
