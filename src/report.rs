//! LaTeX table of all case records of a corpus
//!
//! Each case record is rendered as a single row of a `longtable`:
//!
//! ```text
//! Disease & Gene & Proband & n. HPO terms & Publication \\
//! ```
//!
//! The disease name is normalized to title case (see [`normalize_disease_name`])
//! and underscores in the sample name are replaced by hyphens, because LaTeX
//! would interpret them as subscripts.
use std::fmt::Display;
use std::io::Write;

use crate::case::CaseRecord;
use crate::StatsResult;

/// Static header of the `longtable`
pub const TABLE_HEADER: &str = "\\begin{longtable}{|p{8cm}|p{2cm}|p{2cm}|p{1cm}|l|}\n\
\\caption{Phenopackets analyzed in this work}  \\label{table:phenopackets} \\\\\n\
\\hline\n\
\\textbf{Disease} & \\textbf{Gene} & \\textbf{Proband} & \\textbf{n. HPO terms}& \\textbf{Publication} \\\\\n\
\\hline\n\
\\endfirsthead\n\
\\multicolumn{5}{c}%\n\
{\\tablename\\ \\thetable\\ -- \\textit{Continued from previous page}} \\\\\n\
\\hline\n\
\\textbf{Disease} & \\textbf{Gene} & \\textbf{Proband} & \\textbf{n. HPO terms}& \\textbf{Publication} \\\\\n\
\\hline\n\
\\endhead\n\
\\hline \\multicolumn{5}{r}{\\textit{Continued on next page}} \\\\\n\
\\endfoot\n\
\\hline\n\
\\endlastfoot \n";

/// Static footer of the `longtable`
pub const TABLE_FOOTER: &str = "\\end{longtable}\n";

/// Re-cases `name` so that every word starts with an upper case letter
///
/// A word starts at the beginning of the string and after every space or
/// hyphen. Letters at the start of a word are capitalized, all
/// other letters are converted to lower case, including non-ASCII letters.
/// Other characters are not changed.
///
/// # Examples
///
/// ```
/// use phenostats::report::title_case;
///
/// assert_eq!(title_case("APERT SYNDROME"), "Apert Syndrome");
/// assert_eq!(title_case("pfeiffer-like dISEASE"), "Pfeiffer-Like Disease");
/// assert_eq!(title_case("3-methylglutaconic aciduria"), "3-Methylglutaconic Aciduria");
/// ```
pub fn title_case(name: &str) -> String {
    let mut word_start = true;
    let mut res = String::with_capacity(name.len());
    for c in name.chars() {
        if word_start && c != ' ' {
            res.extend(c.to_uppercase());
        } else {
            res.extend(c.to_lowercase());
        }
        word_start = c == ' ' || c == '-';
    }
    res
}

/// Normalizes the disease label of a case record for the report
///
/// 1. Only the part before the first `;` is used
/// 2. The name is converted to [`title_case`]
/// 3. `Syndrome` is written in lower case
///
/// # Examples
///
/// ```
/// use phenostats::report::normalize_disease_name;
///
/// assert_eq!(normalize_disease_name("APERT SYNDROME; TYPE 1"), "Apert syndrome");
/// ```
pub fn normalize_disease_name(label: &str) -> String {
    let name = match label.find(';') {
        Some(idx) => &label[..idx],
        None => label,
    };
    title_case(name).replace("Syndrome", "syndrome")
}

/// Replaces all underscores of a sample name with hyphens
///
/// ```
/// use phenostats::report::normalize_sample_name;
///
/// assert_eq!(normalize_sample_name("sample_001_A"), "sample-001-A");
/// ```
pub fn normalize_sample_name(name: &str) -> String {
    name.replace('_', "-")
}

/// A single, normalized row of the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    disease: String,
    gene: String,
    sample: String,
    terms: usize,
    publication: String,
}

impl ReportRow {
    /// The normalized disease name
    pub fn disease(&self) -> &str {
        &self.disease
    }

    /// The gene symbol
    pub fn gene(&self) -> &str {
        &self.gene
    }

    /// The normalized sample name
    pub fn sample(&self) -> &str {
        &self.sample
    }

    /// Number of observed and negated terms
    pub fn terms(&self) -> usize {
        self.terms
    }

    /// The publication identifier
    pub fn publication(&self) -> &str {
        &self.publication
    }
}

impl From<&CaseRecord> for ReportRow {
    fn from(case: &CaseRecord) -> Self {
        Self {
            disease: normalize_disease_name(case.diagnosis().label()),
            gene: case.gene().symbol().to_string(),
            sample: normalize_sample_name(case.sample_name()),
            terms: case.total_terms(),
            publication: case.publication().to_string(),
        }
    }
}

impl Display for ReportRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} & {} & {} & {} & {}\\\\ ",
            self.disease, self.gene, self.sample, self.terms, self.publication
        )
    }
}

/// Writes the report table, one row per case record
///
/// Rows are written in the order in which [`ReportWriter::write_row`] is called.
///
/// # Examples
///
/// ```
/// use phenostats::{CaseRecord, Diagnosis, DiseaseId, Gene, ReportWriter};
///
/// let case = CaseRecord::new(
///     Diagnosis::new(DiseaseId::try_from("OMIM:101200").unwrap(), "APERT SYNDROME; APRS"),
///     Gene::new("NCBIGene:2263", "FGFR2"),
///     "proband_1",
///     "PMID:1234567",
/// );
///
/// let mut writer = ReportWriter::new(Vec::new());
/// writer.write_row(&case).unwrap();
/// let output = String::from_utf8(writer.into_inner()).unwrap();
///
/// assert_eq!(output, "Apert syndrome & FGFR2 & proband-1 & 0 & PMID:1234567\\\\ \n");
/// ```
#[derive(Debug)]
pub struct ReportWriter<W: Write> {
    inner: W,
    rows: usize,
}

impl<W: Write> ReportWriter<W> {
    /// Constructs a new `ReportWriter` that writes into `inner`
    pub fn new(inner: W) -> Self {
        Self { inner, rows: 0 }
    }

    /// Writes the static table header
    ///
    /// # Errors
    ///
    /// [`StatsError::Io`](crate::StatsError::Io) if writing fails
    pub fn write_header(&mut self) -> StatsResult<()> {
        self.inner.write_all(TABLE_HEADER.as_bytes())?;
        Ok(())
    }

    /// Renders and writes the row of a single case record
    ///
    /// # Errors
    ///
    /// [`StatsError::Io`](crate::StatsError::Io) if writing fails
    pub fn write_row(&mut self, case: &CaseRecord) -> StatsResult<ReportRow> {
        let row = ReportRow::from(case);
        writeln!(self.inner, "{row}")?;
        self.rows += 1;
        Ok(row)
    }

    /// Writes the static table footer and flushes the writer
    ///
    /// # Errors
    ///
    /// [`StatsError::Io`](crate::StatsError::Io) if writing fails
    pub fn write_footer(&mut self) -> StatsResult<()> {
        self.inner.write_all(TABLE_FOOTER.as_bytes())?;
        self.inner.flush()?;
        Ok(())
    }

    /// Number of rows written so far
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the underlying writer
    pub fn into_inner(self) -> W {
        self.inner
    }
}
