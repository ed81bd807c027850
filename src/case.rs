//! A single diagnosed case of the corpus
//!
//! [`CaseRecord`]s are usually parsed from Phenopackets via
//! [`parser::phenopacket`](crate::parser::phenopacket), but they can also be
//! assembled manually:
//!
//! ```
//! use phenostats::{CaseRecord, Diagnosis, DiseaseId, Gene, HpoTermId};
//!
//! let case = CaseRecord::new(
//!     Diagnosis::new(DiseaseId::try_from("OMIM:101200").unwrap(), "APERT SYNDROME"),
//!     Gene::new("NCBIGene:2263", "FGFR2"),
//!     "proband_1",
//!     "PMID:1234567",
//! )
//! .with_observed(vec![HpoTermId::from(11304u32)])
//! .with_negated(vec![HpoTermId::from(1249u32), HpoTermId::from(1250u32)]);
//!
//! assert_eq!(case.total_terms(), 3);
//! ```
use std::fmt::Display;

use crate::annotations::{DiseaseId, Gene};
use crate::{HpoTermId, StatsError, StatsResult};

/// The diagnosed disease of a case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnosis {
    id: DiseaseId,
    label: String,
}

impl Diagnosis {
    /// Constructs a new `Diagnosis`
    pub fn new(id: DiseaseId, label: &str) -> Self {
        Self {
            id,
            label: label.to_string(),
        }
    }

    /// The identifier of the diagnosed disease
    pub fn id(&self) -> &DiseaseId {
        &self.id
    }

    /// The label of the disease, as given in the case record
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Display for Diagnosis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label, self.id)
    }
}

/// Zygosity of a pathogenic variant, from the GENO ontology
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zygosity {
    /// `GENO:0000136`
    Homozygous,
    /// `GENO:0000135`
    Heterozygous,
    /// `GENO:0000134`
    Hemizygous,
}

impl Zygosity {
    /// Number of pathogenic alleles a variant with this zygosity contributes
    pub fn allele_count(&self) -> usize {
        match self {
            Zygosity::Homozygous => 2,
            Zygosity::Heterozygous | Zygosity::Hemizygous => 1,
        }
    }
}

impl TryFrom<&str> for Zygosity {
    type Error = StatsError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "GENO:0000136" => Ok(Zygosity::Homozygous),
            "GENO:0000135" => Ok(Zygosity::Heterozygous),
            "GENO:0000134" => Ok(Zygosity::Hemizygous),
            _ => Err(StatsError::InvalidInput(format!(
                "could not identify genotype: {value}"
            ))),
        }
    }
}

/// One diagnosed patient of the corpus
///
/// A case record is immutable once it is created. The phenotype terms
/// keep the order of the source file.
#[derive(Debug, Clone)]
pub struct CaseRecord {
    diagnosis: Diagnosis,
    observed: Vec<HpoTermId>,
    negated: Vec<HpoTermId>,
    gene: Gene,
    sample_name: String,
    publication: String,
    zygosities: Vec<String>,
}

impl CaseRecord {
    /// Constructs a new `CaseRecord` without any phenotype terms or variants
    pub fn new(diagnosis: Diagnosis, gene: Gene, sample_name: &str, publication: &str) -> Self {
        Self {
            diagnosis,
            observed: Vec::new(),
            negated: Vec::new(),
            gene,
            sample_name: sample_name.to_string(),
            publication: publication.to_string(),
            zygosities: Vec::new(),
        }
    }

    /// Sets the phenotype terms that were observed in the patient
    #[must_use]
    pub fn with_observed(mut self, observed: Vec<HpoTermId>) -> Self {
        self.observed = observed;
        self
    }

    /// Sets the phenotype terms that were explicitly excluded in the patient
    #[must_use]
    pub fn with_negated(mut self, negated: Vec<HpoTermId>) -> Self {
        self.negated = negated;
        self
    }

    /// Sets the zygosity identifiers (e.g. `GENO:0000135`) of the patient's variants
    #[must_use]
    pub fn with_zygosities(mut self, zygosities: Vec<String>) -> Self {
        self.zygosities = zygosities;
        self
    }

    /// The diagnosed disease
    pub fn diagnosis(&self) -> &Diagnosis {
        &self.diagnosis
    }

    /// Observed phenotype terms
    pub fn observed(&self) -> &[HpoTermId] {
        &self.observed
    }

    /// Excluded phenotype terms
    pub fn negated(&self) -> &[HpoTermId] {
        &self.negated
    }

    /// The causative gene
    pub fn gene(&self) -> &Gene {
        &self.gene
    }

    /// Free text name of the sample or proband
    pub fn sample_name(&self) -> &str {
        &self.sample_name
    }

    /// Identifier of the source publication, e.g. `PMID:1234567`
    pub fn publication(&self) -> &str {
        &self.publication
    }

    /// Number of observed and excluded phenotype terms
    pub fn total_terms(&self) -> usize {
        self.observed.len() + self.negated.len()
    }

    /// Number of pathogenic alleles over all variants of the case
    ///
    /// # Errors
    ///
    /// [`StatsError::InvalidInput`] if a variant has an unknown zygosity
    pub fn pathogenic_allele_count(&self) -> StatsResult<usize> {
        self.zygosities.iter().try_fold(0, |count, zygosity| {
            Ok(count + Zygosity::try_from(zygosity.as_str())?.allele_count())
        })
    }
}
