//! Diseases and genes that case records are annotated with
//!
//! This module contains the [`DiseaseReference`], the lookup table from a
//! [`DiseaseId`] to its name and modes of inheritance, as well as the
//! [`Gene`] of a case record.
//!
//! The reference is built once per run, usually from the `phenotype.hpoa`
//! file (see [`DiseaseReference::from_hpoa`]), and is only read afterwards.

mod disease;
mod gene;

pub use disease::{DiseaseEntry, DiseaseId, DiseaseReference};
pub use gene::{Gene, Genes};
