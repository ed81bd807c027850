//! Accumulation of corpus-wide counts from individual case records
//!
//! The [`Aggregator`] consumes [`CaseRecord`]s one at a time and keeps
//! running counts of diagnoses, phenotype term usage, genes and the number
//! of terms per case. Once all cases are recorded, the accumulated
//! state is summarized via [`Summary`](crate::Summary).
use std::collections::HashMap;

use tracing::{error, warn};

use crate::annotations::{DiseaseId, DiseaseReference, Genes};
use crate::case::{CaseRecord, Diagnosis};
use crate::inheritance::{InheritanceCounts, InheritanceMode};
use crate::{HpoTermId, StatsError, StatsResult};

/// How a single diagnosis was classified by its mode of inheritance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosisOutcome {
    /// The disease is not part of the [`DiseaseReference`]
    Unmatched,
    /// The disease is present but has no mode of inheritance
    NoInheritance,
    /// The disease has more than one mode of inheritance
    Multiple,
    /// The disease has exactly one, recognized, mode of inheritance
    Classified(InheritanceMode),
}

/// Running counts over all recorded [`CaseRecord`]s
///
/// # Examples
///
/// ```
/// use phenostats::{Aggregator, CaseRecord, Diagnosis, DiseaseId, DiseaseReference, Gene, HpoTermId};
///
/// let reference = DiseaseReference::new();
/// let mut aggregator = Aggregator::new(&reference);
///
/// let case = CaseRecord::new(
///     Diagnosis::new(DiseaseId::try_from("OMIM:101200").unwrap(), "APERT SYNDROME"),
///     Gene::new("NCBIGene:2263", "FGFR2"),
///     "proband_1",
///     "PMID:1234567",
/// )
/// .with_observed(vec![1u32.into(), 2u32.into()])
/// .with_negated(vec![2u32.into(), 3u32.into()]);
///
/// aggregator.record(&case).unwrap();
///
/// assert_eq!(aggregator.cases(), 1);
/// assert_eq!(aggregator.term_usage().get(&HpoTermId::from(1u32)), Some(&0));
/// assert_eq!(aggregator.term_usage().get(&HpoTermId::from(2u32)), Some(&1));
/// ```
#[derive(Debug)]
pub struct Aggregator<'a> {
    reference: &'a DiseaseReference,
    disease_counts: HashMap<DiseaseId, usize>,
    term_usage: HashMap<HpoTermId, usize>,
    genes: Genes,
    observed_per_case: Vec<usize>,
    negated_per_case: Vec<usize>,
    inheritance: InheritanceCounts,
    unmatched: usize,
    no_inheritance: usize,
}

impl<'a> Aggregator<'a> {
    /// Constructs an empty `Aggregator` that classifies diagnoses with `reference`
    pub fn new(reference: &'a DiseaseReference) -> Self {
        Self {
            reference,
            disease_counts: HashMap::new(),
            term_usage: HashMap::new(),
            genes: Genes::new(),
            observed_per_case: Vec::new(),
            negated_per_case: Vec::new(),
            inheritance: InheritanceCounts::default(),
            unmatched: 0,
            no_inheritance: 0,
        }
    }

    /// Records all data of a single case
    ///
    /// # Errors
    ///
    /// [`StatsError::UnrecognizedInheritance`] if the diagnosed disease has a
    /// single mode of inheritance that is not part of the classification.
    /// The run must be aborted in this case. The phenotypes and gene of the
    /// case are not recorded.
    pub fn record(&mut self, case: &CaseRecord) -> StatsResult<DiagnosisOutcome> {
        let outcome = self.record_diagnosis(case.diagnosis())?;
        self.record_phenotypes(case.observed(), case.negated());
        self.record_gene(case.gene().id());
        Ok(outcome)
    }

    /// Counts the diagnosis and classifies it by its mode of inheritance
    ///
    /// Unmatched diseases and diseases without inheritance information are
    /// logged and skipped. Diseases with more than one mode of inheritance
    /// only count as [`DiagnosisOutcome::Multiple`].
    ///
    /// # Errors
    ///
    /// [`StatsError::UnrecognizedInheritance`] if the single mode of inheritance
    /// of the disease is not part of the classification. The diagnosis is
    /// counted nevertheless.
    pub fn record_diagnosis(&mut self, diagnosis: &Diagnosis) -> StatsResult<DiagnosisOutcome> {
        *self.disease_counts.entry(diagnosis.id().clone()).or_insert(0) += 1;

        let Some(disease) = self.reference.get(diagnosis.id()) else {
            warn!("Could not retrieve data for {}", diagnosis);
            self.unmatched += 1;
            return Ok(DiagnosisOutcome::Unmatched);
        };

        match disease.modes_of_inheritance() {
            [] => {
                warn!("Could not find inheritance term for {}", disease.name());
                self.no_inheritance += 1;
                Ok(DiagnosisOutcome::NoInheritance)
            }
            [mode] => match InheritanceMode::classify(*mode) {
                Some(bucket) => {
                    self.inheritance.increment(bucket);
                    Ok(DiagnosisOutcome::Classified(bucket))
                }
                None => {
                    error!("Could not identify id {} for disease {}", mode, diagnosis);
                    Err(StatsError::UnrecognizedInheritance {
                        mode: *mode,
                        disease: diagnosis.to_string(),
                    })
                }
            },
            _ => {
                self.inheritance.increment_multiple();
                Ok(DiagnosisOutcome::Multiple)
            }
        }
    }

    /// Records the number of terms of a case and the usage of each term
    ///
    /// Only negated terms increase the usage count of a term. Observed
    /// terms are added to the usage map with a count of `0` if they
    /// are not yet present, but never increment it.
    pub fn record_phenotypes(&mut self, observed: &[HpoTermId], negated: &[HpoTermId]) {
        self.observed_per_case.push(observed.len());
        self.negated_per_case.push(negated.len());
        for term in observed {
            self.term_usage.entry(*term).or_insert(0);
        }
        for term in negated {
            *self.term_usage.entry(*term).or_insert(0) += 1;
        }
    }

    /// Adds the gene to the set of distinct genes
    pub fn record_gene(&mut self, gene_id: &str) {
        if !self.genes.contains(gene_id) {
            self.genes.insert(gene_id.to_string());
        }
    }

    /// The number of recorded diagnoses
    pub fn cases(&self) -> usize {
        self.disease_counts.values().sum()
    }

    /// Number of cases per diagnosed disease
    pub fn disease_counts(&self) -> &HashMap<DiseaseId, usize> {
        &self.disease_counts
    }

    /// Usage count per phenotype term
    pub fn term_usage(&self) -> &HashMap<HpoTermId, usize> {
        &self.term_usage
    }

    /// Distinct genes of all cases
    pub fn genes(&self) -> &Genes {
        &self.genes
    }

    /// Number of observed terms of each case, in recording order
    pub fn observed_per_case(&self) -> &[usize] {
        &self.observed_per_case
    }

    /// Number of negated terms of each case, in recording order
    pub fn negated_per_case(&self) -> &[usize] {
        &self.negated_per_case
    }

    /// Diagnoses per mode of inheritance
    ///
    /// Every recorded diagnosis is counted, so a disease that is diagnosed
    /// in several cases is counted once per case.
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
