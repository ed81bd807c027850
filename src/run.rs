//! Processing a complete corpus
//!
//! A run reads the reference data, streams every case record of the corpus
//! through the [`Aggregator`] and the [`ReportWriter`] and finally
//! calculates the [`Summary`].
//!
//! A run either succeeds completely or fails with the first fatal error.
//! The report file is only created when the run succeeds.
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::aggregate::Aggregator;
use crate::annotations::DiseaseReference;
use crate::case::CaseRecord;
use crate::corpus::Corpus;
use crate::report::ReportWriter;
use crate::stats::Summary;
use crate::{Ontology, StatsError, StatsResult};

/// Input and output locations of a run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// The `phenotype.hpoa` file with the disease reference
    pub hpoa: PathBuf,
    /// Directory with the Phenopacket files
    pub cases: PathBuf,
    /// Optional `hp.obo` file to normalize phenotype terms
    pub obo: Option<PathBuf>,
    /// Path of the LaTeX report
    pub output: PathBuf,
}

#[cfg_attr(doc, aquamarine::aquamarine)]
/// Records every case and writes its report row
///
/// ```mermaid
/// graph LR
///     C[CaseRecord] --> A[Aggregator]
///     C --> R[ReportWriter]
///     A --> S[Summary]
/// ```
///
/// Cases are processed strictly in iteration order. Processing stops at the
/// first error, which is returned as is. The header and footer of the
/// report are only complete if the run succeeds.
///
/// # Errors
///
/// - any error yielded by `cases`, e.g. [`StatsError::CannotOpenFile`]
/// - [`StatsError::UnrecognizedInheritance`] from the [`Aggregator`]
/// - [`StatsError::Io`] if the report cannot be written
pub fn process<W, I>(
    cases: I,
    reference: &DiseaseReference,
    writer: &mut ReportWriter<W>,
) -> StatsResult<Summary>
where
    W: Write,
    I: IntoIterator<Item = StatsResult<CaseRecord>>,
{
    let mut aggregator = Aggregator::new(reference);
    writer.write_header()?;
    for case in cases {
        let case = case?;
        aggregator.record(&case)?;
        writer.write_row(&case)?;
    }
    writer.write_footer()?;
    Ok(Summary::from(&aggregator))
}

/// Runs the full analysis as configured in `config`
///
/// The report is written into a temporary file next to `config.output`
/// and only moved to its final location when all cases were processed.
///
/// # Errors
///
/// - [`StatsError::CannotOpenFile`] if any input can't be read or the
///   report can't be created
/// - every error of [`process`]
pub fn run(config: &RunConfig) -> StatsResult<Summary> {
    let reference = DiseaseReference::from_hpoa(&config.hpoa)?;
    info!("Loaded {} diseases", reference.len());

    let ontology = config.obo.as_ref().map(Ontology::from_obo).transpose()?;
    let corpus = Corpus::from_dir(&config.cases)?;

    let partial = partial_path(&config.output);
    let file = File::create(&partial)
        .map_err(|_| StatsError::CannotOpenFile(partial.display().to_string()))?;
    let mut writer = ReportWriter::new(BufWriter::new(file));

    match process(corpus.cases(ontology.as_ref()), &reference, &mut writer) {
        Ok(summary) => {
            drop(writer);
            fs::rename(&partial, &config.output)?;
            info!(
                "Wrote {} cases to {}",
                summary.cases(),
                config.output.display()
            );
            Ok(summary)
        }
        Err(err) => {
            drop(writer);
            error!("Aborting run: {}", err);
            if let Err(io_err) = fs::remove_file(&partial) {
                error!("Unable to remove {}: {}", partial.display(), io_err);
            }
            Err(err)
        }
    }
}

fn partial_path(output: &Path) -> PathBuf {
    let mut name = output
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".partial");
    output.with_file_name(name)
}
