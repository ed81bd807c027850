//! Identifiers of terms of the Human Phenotype Ontology
use core::fmt::Debug;
use std::fmt::Display;

use crate::{StatsError, StatsResult};

/// The unique identifier of an HPO term, e.g. `HP:0000118`
///
/// Only the numerical part is stored, the `HP:` prefix is implied.
///
/// # Examples
///
/// ```
/// use phenostats::HpoTermId;
///
/// let id = HpoTermId::try_from("HP:0000007").unwrap();
/// assert_eq!(id.as_u32(), 7);
/// assert_eq!(id.to_string(), "HP:0000007");
/// assert_eq!(id, HpoTermId::from(7u32));
/// ```
#[derive(Copy, Clone, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct HpoTermId {
    inner: u32,
}

impl HpoTermId {
    /// Constructs an `HpoTermId` from its numerical part in `const` contexts
    pub const fn from_u32(inner: u32) -> Self {
        Self { inner }
    }

    /// Returns the numerical part of the ID
    pub fn as_u32(&self) -> u32 {
        self.inner
    }
}

impl TryFrom<&str> for HpoTermId {
    type Error = StatsError;
    /// Parses `HP:0000118` into an `HpoTermId`
    ///
    /// # Errors
    ///
    /// - [`StatsError::InvalidInput`] if the prefix is not `HP:`
    /// - [`StatsError::ParseIntError`] if the accession is not numerical
    fn try_from(s: &str) -> StatsResult<Self> {
        let Some(accession) = s.strip_prefix("HP:") else {
            return Err(StatsError::InvalidInput(format!("not an HPO term: {s}")));
        };
        Ok(HpoTermId {
            inner: accession.parse::<u32>()?,
        })
    }
}

impl From<u32> for HpoTermId {
    fn from(inner: u32) -> Self {
        Self { inner }
    }
}

impl Debug for HpoTermId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HpoTermId({self})")
    }
}

impl Display for HpoTermId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HP:{:07}", self.inner)
    }
}

impl PartialEq<str> for HpoTermId {
    fn eq(&self, other: &str) -> bool {
        HpoTermId::try_from(other).map_or(false, |other| self == &other)
    }
}
