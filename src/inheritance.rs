//! Classification of diseases by their mode of inheritance
//!
//! The HPO describes modes of inheritance as terms below
//! `Mode of inheritance` (`HP:0000005`). For the corpus statistics, only a
//! fixed set of these terms is recognized and each of them maps to exactly
//! one [`InheritanceMode`] bucket. Closely related terms share a bucket,
//! e.g. all X-linked modes are counted together.
//!
//! Diseases with more than one mode of inheritance are not classified
//! individually but counted as [`InheritanceCounts::multiple`].
use std::fmt::Display;

use crate::HpoTermId;

/// `HP:0000007` Autosomal recessive inheritance
pub const AUTOSOMAL_RECESSIVE: HpoTermId = HpoTermId::from_u32(7);
/// `HP:0000006` Autosomal dominant inheritance
pub const AUTOSOMAL_DOMINANT: HpoTermId = HpoTermId::from_u32(6);
/// `HP:0001452` Autosomal dominant contiguous gene syndrome
pub const CONTIGUOUS_GENE_SYNDROME_AUTOSOMAL_DOMINANT: HpoTermId = HpoTermId::from_u32(1452);
/// `HP:0001417` X-linked inheritance
pub const X_LINKED: HpoTermId = HpoTermId::from_u32(1417);
/// `HP:0001419` X-linked recessive inheritance
pub const X_LINKED_RECESSIVE: HpoTermId = HpoTermId::from_u32(1419);
/// `HP:0001423` X-linked dominant inheritance
pub const X_LINKED_DOMINANT: HpoTermId = HpoTermId::from_u32(1423);
/// `HP:0001425` Heterogeneous
pub const HETEROGENEOUS: HpoTermId = HpoTermId::from_u32(1425);
/// `HP:0001428` Somatic mutation
pub const SOMATIC_MUTATION: HpoTermId = HpoTermId::from_u32(1428);
/// `HP:0003745` Sporadic
pub const SPORADIC: HpoTermId = HpoTermId::from_u32(3745);
/// `HP:0001442` Somatic mosaicism
pub const SOMATIC_MOSAICISM: HpoTermId = HpoTermId::from_u32(1442);

/// The bucket that a single mode of inheritance is counted in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InheritanceMode {
    /// Autosomal recessive
    AutosomalRecessive,
    /// Autosomal dominant, including contiguous gene syndromes
    AutosomalDominant,
    /// X-linked, X-linked recessive and X-linked dominant
    XLinked,
    /// Heterogeneous
    Heterogeneous,
    /// Somatic mutation
    Somatic,
    /// Sporadic
    Sporadic,
    /// Somatic mosaicism
    SomaticMosaicism,
}

impl InheritanceMode {
    /// All buckets, in the order they are reported
    pub const ALL: [InheritanceMode; 7] = [
        InheritanceMode::AutosomalRecessive,
        InheritanceMode::AutosomalDominant,
        InheritanceMode::XLinked,
        InheritanceMode::Heterogeneous,
        InheritanceMode::Somatic,
        InheritanceMode::SomaticMosaicism,
        InheritanceMode::Sporadic,
    ];

    /// Maps an HPO inheritance term to its bucket
    ///
    /// Returns `None` for terms that are not part of the classification.
    ///
    /// # Examples
    ///
    /// ```
    /// use phenostats::{HpoTermId, InheritanceMode};
    ///
    /// let xlr = HpoTermId::try_from("HP:0001419").unwrap();
    /// assert_eq!(InheritanceMode::classify(xlr), Some(InheritanceMode::XLinked));
    ///
    /// // Mitochondrial inheritance is not part of the buckets
    /// let mito = HpoTermId::try_from("HP:0001427").unwrap();
    /// assert_eq!(InheritanceMode::classify(mito), None);
    /// ```
    pub fn classify(term: HpoTermId) -> Option<Self> {
        match term {
            AUTOSOMAL_RECESSIVE => Some(Self::AutosomalRecessive),
            AUTOSOMAL_DOMINANT | CONTIGUOUS_GENE_SYNDROME_AUTOSOMAL_DOMINANT => {
                Some(Self::AutosomalDominant)
            }
            X_LINKED | X_LINKED_RECESSIVE | X_LINKED_DOMINANT => Some(Self::XLinked),
            HETEROGENEOUS => Some(Self::Heterogeneous),
            SOMATIC_MUTATION => Some(Self::Somatic),
            SPORADIC => Some(Self::Sporadic),
            SOMATIC_MOSAICISM => Some(Self::SomaticMosaicism),
            _ => None,
        }
    }

    /// The label used in the summary output
    pub fn label(&self) -> &'static str {
        match self {
            Self::AutosomalRecessive => "Autosomal recessive",
            Self::AutosomalDominant => "Autosomal dominant",
            Self::XLinked => "X chromosomal",
            Self::Heterogeneous => "heterogeneous",
            Self::Somatic => "somatic",
            Self::Sporadic => "sporadic",
            Self::SomaticMosaicism => "somatic mosaic",
        }
    }
}

impl Display for InheritanceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Number of classified diagnoses per [`InheritanceMode`]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InheritanceCounts {
    autosomal_recessive: usize,
    autosomal_dominant: usize,
    x_linked: usize,
    heterogeneous: usize,
    somatic: usize,
    sporadic: usize,
    somatic_mosaicism: usize,
    multiple: usize,
}

impl InheritanceCounts {
    /// Increments the bucket of `mode` by one
    pub fn increment(&mut self, mode: InheritanceMode) {
        *self.bucket_mut(mode) += 1;
    }

    /// Increments the count of diagnoses with more than one mode of inheritance
    pub fn increment_multiple(&mut self) {
        self.multiple += 1;
    }

    /// The count of a single bucket
    pub fn get(&self, mode: InheritanceMode) -> usize {
        match mode {
            InheritanceMode::AutosomalRecessive => self.autosomal_recessive,
            InheritanceMode::AutosomalDominant => self.autosomal_dominant,
            InheritanceMode::XLinked => self.x_linked,
            InheritanceMode::Heterogeneous => self.heterogeneous,
            InheritanceMode::Somatic => self.somatic,
            InheritanceMode::Sporadic => self.sporadic,
            InheritanceMode::SomaticMosaicism => self.somatic_mosaicism,
        }
    }

    /// The count of diagnoses with more than one mode of inheritance
    pub fn multiple(&self) -> usize {
        self.multiple
    }

    /// The sum of all single-mode buckets, excluding [`InheritanceCounts::multiple`]
    pub fn classified(&self) -> usize {
        InheritanceMode::ALL.iter().map(|mode| self.get(*mode)).sum()
    }

    /// The sum of all buckets, including [`InheritanceCounts::multiple`]
    pub fn total(&self) -> usize {
        self.classified() + self.multiple
    }

    fn bucket_mut(&mut self, mode: InheritanceMode) -> &mut usize {
        match mode {
            InheritanceMode::AutosomalRecessive => &mut self.autosomal_recessive,
            InheritanceMode::AutosomalDominant => &mut self.autosomal_dominant,
            InheritanceMode::XLinked => &mut self.x_linked,
            InheritanceMode::Heterogeneous => &mut self.heterogeneous,
            InheritanceMode::Somatic => &mut self.somatic,
            InheritanceMode::Sporadic => &mut self.sporadic,
            InheritanceMode::SomaticMosaicism => &mut self.somatic_mosaicism,
        }
    }
}
