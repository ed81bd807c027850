//! Discovery of the case record files of a corpus
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::case::CaseRecord;
use crate::parser::phenopacket;
use crate::{Ontology, StatsError, StatsResult};

/// File extension of case record files
const CASE_EXTENSION: &str = "json";

/// The case record files of a directory
///
/// Files are listed once, when the corpus is opened, and sorted by their
/// path so that every run processes the cases in the same order.
/// They are only read while iterating.
///
/// # Examples
///
/// ```no_run
/// use phenostats::corpus::Corpus;
///
/// let corpus = Corpus::from_dir("phenopackets").unwrap();
/// for case in corpus.cases(None) {
///     let case = case.unwrap();
///     println!("{}", case.diagnosis());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Corpus {
    files: Vec<PathBuf>,
}

impl Corpus {
    /// Lists all `*.json` files of `dir`
    ///
    /// Subdirectories are not traversed.
    ///
    /// # Errors
    ///
    /// [`StatsError::CannotOpenFile`] if `dir` is not a readable directory
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> StatsResult<Self> {
        let dir = dir.as_ref();
        let cannot_open = || {
            StatsError::CannotOpenFile(format!(
                "Could not open Phenopackets directory at {}",
                dir.display()
            ))
        };
        if !dir.is_dir() {
            return Err(cannot_open());
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(dir).map_err(|_| cannot_open())? {
            let path = entry.map_err(|_| cannot_open())?.path();
            if path.is_file() && path.extension().map_or(false, |ext| ext == CASE_EXTENSION) {
                debug!("Phenopacket: {}", path.display());
                files.push(path);
            }
        }
        files.sort();
        info!("Found {} phenopackets in {}", files.len(), dir.display());
        Ok(Self { files })
    }

    /// Constructs a corpus from an explicit, ordered list of files
    pub fn from_files(files: Vec<PathBuf>) -> Self {
        Self { files }
    }

    /// The case record files, in processing order
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Number of case record files
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns `true` if the corpus does not contain any files
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterates the parsed [`CaseRecord`]s in processing order
    ///
    /// Each file is parsed on demand. If a file was removed after the corpus
    /// was listed, the iterator yields [`StatsError::CannotOpenFile`].
    pub fn cases<'a>(&'a self, ontology: Option<&'a Ontology>) -> CaseIterator<'a> {
        CaseIterator {
            files: self.files.iter(),
            ontology,
        }
    }
}

/// Iterates the [`CaseRecord`]s of a [`Corpus`]
pub struct CaseIterator<'a> {
    files: std::slice::Iter<'a, PathBuf>,
    ontology: Option<&'a Ontology>,
}

impl Iterator for CaseIterator<'_> {
    type Item = StatsResult<CaseRecord>;
    fn next(&mut self) -> Option<Self::Item> {
        self.files.next().map(|file| {
            if !file.exists() {
                return Err(StatsError::CannotOpenFile(format!(
                    "Could not find phenopacket file at {}",
                    file.display()
                )));
            }
            phenopacket::parse(file, self.ontology)
        })
    }
}
