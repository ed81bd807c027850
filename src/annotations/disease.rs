use std::collections::hash_map::Values;
use std::collections::HashMap;
use std::fmt::Display;
use std::path::Path;

use smallvec::SmallVec;

use crate::parser;
use crate::{HpoTermId, StatsError, StatsResult, DEFAULT_NUM_MODES};

/// A unique identifier of a disease, e.g. `OMIM:101200` or `ORPHA:87`
///
/// The identifier consists of a database prefix and an accession,
/// separated by a colon. Diseases from any database are accepted,
/// even if the [`DiseaseReference`] only knows about some of them.
///
/// # Examples
///
/// ```
/// use phenostats::DiseaseId;
///
/// let id = DiseaseId::try_from("OMIM:101200").unwrap();
/// assert_eq!(id.database(), "OMIM");
/// assert_eq!(id.accession(), "101200");
///
/// assert!(DiseaseId::try_from("101200").is_err());
/// ```
#[derive(Clone, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub struct DiseaseId {
    inner: String,
    split: usize,
}

impl DiseaseId {
    /// The database prefix, e.g. `OMIM`
    pub fn database(&self) -> &str {
        &self.inner[..self.split]
    }

    /// The accession within the database, e.g. `101200`
    pub fn accession(&self) -> &str {
        &self.inner[self.split + 1..]
    }

    /// The full identifier, e.g. `OMIM:101200`
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl TryFrom<&str> for DiseaseId {
    type Error = StatsError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let value = value.trim();
        match value.split_once(':') {
            Some((db, acc)) if !db.is_empty() && !acc.is_empty() => Ok(DiseaseId {
                inner: value.to_string(),
                split: db.len(),
            }),
            _ => Err(StatsError::InvalidInput(format!(
                "not a disease identifier: {value}"
            ))),
        }
    }
}

impl Display for DiseaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

/// A single disease of the [`DiseaseReference`]
///
/// A disease has a unique [`DiseaseId`], a display name and
/// zero or more modes of inheritance
#[derive(Debug, Clone)]
pub struct DiseaseEntry {
    id: DiseaseId,
    name: String,
    modes: SmallVec<[HpoTermId; DEFAULT_NUM_MODES]>,
}

impl DiseaseEntry {
    /// Initializes a new disease without any mode of inheritance
    pub fn new(id: DiseaseId, name: &str) -> DiseaseEntry {
        DiseaseEntry {
            id,
            name: name.to_string(),
            modes: SmallVec::new(),
        }
    }

    /// The unique [`DiseaseId`] of the disease
    pub fn id(&self) -> &DiseaseId {
        &self.id
    }

    /// The display name of the disease
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The modes of inheritance, in the order they were first annotated
    pub fn modes_of_inheritance(&self) -> &[HpoTermId] {
        &self.modes
    }

    /// Annotate the disease with a mode of inheritance
    ///
    /// Returns `false` if the disease was already annotated with the mode
    pub fn add_mode_of_inheritance<I: Into<HpoTermId>>(&mut self, mode: I) -> bool {
        let mode = mode.into();
        if self.modes.contains(&mode) {
            false
        } else {
            self.modes.push(mode);
            true
        }
    }
}

impl PartialEq for DiseaseEntry {
    fn eq(&self, other: &DiseaseEntry) -> bool {
        self.id == other.id
    }
}

impl Eq for DiseaseEntry {}

/// Lookup table from [`DiseaseId`] to [`DiseaseEntry`]
///
/// Diseases that are missing from the reference are not an error, a
/// corpus is allowed to contain diagnoses from other sources.
#[derive(Debug, Default)]
pub struct DiseaseReference {
    diseases: HashMap<DiseaseId, DiseaseEntry>,
}

impl DiseaseReference {
    /// Constructs an empty reference
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the reference from a `phenotype.hpoa` file
    ///
    /// # Errors
    ///
    /// - [`StatsError::CannotOpenFile`]: Source file not present or can't be opened
    /// - [`StatsError::InvalidInput`]: A line of the file is malformed
    /// - [`StatsError::ParseIntError`]: A line contains an invalid [`HpoTermId`]
    pub fn from_hpoa<P: AsRef<Path>>(file: P) -> StatsResult<Self> {
        let mut reference = Self::new();
        parser::phenotype_hpoa::parse(file, &mut reference)?;
        Ok(reference)
    }

    /// Returns the [`DiseaseEntry`] of `id`, if present
    pub fn get(&self, id: &DiseaseId) -> Option<&DiseaseEntry> {
        self.diseases.get(id)
    }

    /// Adds a new disease to the reference and returns it
    ///
    /// If the disease is already present, the existing entry is returned
    /// and `name` is ignored.
    pub fn add_disease(&mut self, id: DiseaseId, name: &str) -> &mut DiseaseEntry {
        self.diseases
            .entry(id)
            .or_insert_with_key(|id| DiseaseEntry::new(id.clone(), name))
    }

    /// The number of diseases in the reference
    pub fn len(&self) -> usize {
        self.diseases.len()
    }

    /// Returns `true` if the reference does not contain any diseases
    pub fn is_empty(&self) -> bool {
        self.diseases.is_empty()
    }

    /// Iterates all [`DiseaseEntry`]s in arbitrary order
    pub fn iter(&self) -> Values<'_, DiseaseId, DiseaseEntry> {
        self.diseases.values()
    }
}

impl<'a> IntoIterator for &'a DiseaseReference {
    type Item = &'a DiseaseEntry;
    type IntoIter = Values<'a, DiseaseId, DiseaseEntry>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn id(s: &str) -> DiseaseId {
        DiseaseId::try_from(s).expect("valid disease id")
    }

    #[test]
    fn disease_id_parts() {
        let orpha = id("ORPHA:87");
        assert_eq!(orpha.database(), "ORPHA");
        assert_eq!(orpha.accession(), "87");
        assert_eq!(orpha.to_string(), "ORPHA:87");
    }

    #[test]
    fn invalid_disease_ids() {
        assert!(DiseaseId::try_from("").is_err());
        assert!(DiseaseId::try_from("OMIM").is_err());
        assert!(DiseaseId::try_from(":123").is_err());
        assert!(DiseaseId::try_from("OMIM:").is_err());
    }

    #[test]
    fn modes_are_unique() {
        let mut disease = DiseaseEntry::new(id("OMIM:101200"), "Apert syndrome");
        assert!(disease.add_mode_of_inheritance(6u32));
        assert!(!disease.add_mode_of_inheritance(6u32));
        assert!(disease.add_mode_of_inheritance(7u32));
        assert_eq!(
            disease.modes_of_inheritance(),
            &[HpoTermId::from(6u32), HpoTermId::from(7u32)]
        );
    }

    #[test]
    fn add_disease_only_once() {
        let mut reference = DiseaseReference::new();
        reference
            .add_disease(id("OMIM:101200"), "Apert syndrome")
            .add_mode_of_inheritance(6u32);
        let existing = reference.add_disease(id("OMIM:101200"), "Something else");
        assert_eq!(existing.name(), "Apert syndrome");
        assert_eq!(existing.modes_of_inheritance().len(), 1);
        assert_eq!(reference.len(), 1);
    }

    #[test]
    fn missing_disease() {
        let reference = DiseaseReference::new();
        assert!(reference.is_empty());
        assert!(reference.get(&id("OMIM:101200")).is_none());
    }
}
