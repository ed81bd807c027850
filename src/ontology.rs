//! Normalization of HPO term IDs via the `hp.obo` ontology
use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::parser;
use crate::{HpoTermId, StatsResult};

#[derive(Debug, Clone)]
struct TermEntry {
    name: String,
    obsolete: bool,
    replaced_by: Option<HpoTermId>,
}

#[cfg_attr(doc, aquamarine::aquamarine)]
/// A minimal view of the HPO to normalize the terms of case records
///
/// Case records are often curated against older releases of the HPO. Terms
/// may have been merged since (their ID is now an alternative ID of
/// another term) or were made obsolete. The `Ontology` maps every
/// known ID to the current primary ID.
///
/// ```mermaid
/// graph LR
///     A[HP:0000001 alt_id] --> P[primary term]
///     O[obsolete term] -- replaced_by --> P
///     P --> P
/// ```
///
/// # Examples
///
/// ```
/// use phenostats::{HpoTermId, Ontology};
///
/// let mut ontology = Ontology::empty();
/// ontology.add_term(118u32.into(), "Phenotypic abnormality");
/// ontology.add_alt_id(118u32.into(), 1u32.into());
///
/// assert_eq!(ontology.primary_id(1u32.into()), Some(HpoTermId::from(118u32)));
/// assert_eq!(ontology.primary_id(118u32.into()), Some(HpoTermId::from(118u32)));
/// assert_eq!(ontology.primary_id(2u32.into()), None);
/// ```
#[derive(Debug, Default)]
pub struct Ontology {
    terms: HashMap<HpoTermId, TermEntry>,
    alt_ids: HashMap<HpoTermId, HpoTermId>,
}

impl Ontology {
    /// Constructs an empty `Ontology`
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads the ontology from an `hp.obo` file
    ///
    /// # Errors
    ///
    /// - [`StatsError::CannotOpenFile`](crate::StatsError::CannotOpenFile): obo file not present or available
    /// - [`StatsError::InvalidInput`](crate::StatsError::InvalidInput): a term stanza is malformed
    pub fn from_obo<P: AsRef<Path>>(file: P) -> StatsResult<Self> {
        let mut ontology = Self::empty();
        parser::hp_obo::read_obo_file(file, &mut ontology)?;
        debug!("Loaded {} terms from obo", ontology.len());
        Ok(ontology)
    }

    /// Adds a term with its primary ID
    pub fn add_term(&mut self, id: HpoTermId, name: &str) {
        self.terms.insert(
            id,
            TermEntry {
                name: name.to_string(),
                obsolete: false,
                replaced_by: None,
            },
        );
    }

    /// Registers `alt_id` as alternative ID of the term `primary`
    pub fn add_alt_id(&mut self, primary: HpoTermId, alt_id: HpoTermId) {
        self.alt_ids.insert(alt_id, primary);
    }

    /// Marks an existing term as obsolete, optionally with a replacement term
    ///
    /// Returns `false` if the term does not exist
    pub fn set_obsolete(&mut self, id: HpoTermId, replaced_by: Option<HpoTermId>) -> bool {
        match self.terms.get_mut(&id) {
            Some(term) => {
                term.obsolete = true;
                term.replaced_by = replaced_by;
                true
            }
            None => false,
        }
    }

    /// Returns the current primary ID for `id`
    ///
    /// - primary IDs of active terms are returned unchanged
    /// - alternative IDs return the primary ID of their term
    /// - obsolete terms return their replacement, if any
    ///
    /// Returns `None` for unknown IDs and obsolete terms without replacement
    pub fn primary_id(&self, id: HpoTermId) -> Option<HpoTermId> {
        let id = self.alt_ids.get(&id).copied().unwrap_or(id);
        let term = self.terms.get(&id)?;
        if term.obsolete {
            term.replaced_by
                .filter(|replacement| self.terms.get(replacement).map_or(false, |t| !t.obsolete))
        } else {
            Some(id)
        }
    }

    /// The name of the term
    pub fn name(&self, id: HpoTermId) -> Option<&str> {
        self.terms.get(&id).map(|term| term.name.as_str())
    }

    /// Number of terms, including obsolete ones
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns `true` if the ontology does not contain any terms
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
