//! Parsing the HPO master data provided by Jax and the case records
//!
//! - [`phenotype_hpoa`]: the disease reference table
//! - [`hp_obo`]: the HPO itself, for term id normalization
//! - [`phenopacket`]: individual case records

/// Module to parse `hp.obo` file
pub mod hp_obo;
pub mod phenopacket;

/// Module to parse diseases and their modes of inheritance from `phenotype.hpoa` file
///
/// Every disease row adds the disease to the [`DiseaseReference`](crate::DiseaseReference).
/// Rows of the inheritance aspect (`I`) add their HPO term as a mode of
/// inheritance to the disease.
///
/// # Example lines
///
/// ```text
/// #DatabaseID  DiseaseName       Qualifier  HPO_ID      Reference     Evidence  Onset  Frequency  Sex  Modifier  Aspect  Biocuration
/// OMIM:101200  Apert syndrome               HP:0000006  OMIM:101200   IEA                                     I       HPO:iea[2009-02-17]
/// OMIM:101200  Apert syndrome               HP:0011304  OMIM:101200   IEA                                     P       HPO:iea[2009-02-17]
/// ```
pub mod phenotype_hpoa {
    use std::fs::File;
    use std::io::BufRead;
    use std::io::BufReader;
    use std::path::Path;

    use tracing::debug;

    use crate::annotations::{DiseaseId, DiseaseReference};
    use crate::{HpoTermId, StatsError, StatsResult};

    /// Index of the aspect column
    const ASPECT_COLUMN: usize = 10;

    /// Aspect of rows that describe the mode of inheritance
    const INHERITANCE_ASPECT: &str = "I";

    struct HpoaRow<'a> {
        id: &'a str,
        name: &'a str,
        inheritance: Option<HpoTermId>,
    }

    fn is_header(line: &str) -> bool {
        line.is_empty() || line.starts_with('#') || line.starts_with("database_id")
    }

    fn parse_line(line: &str) -> StatsResult<Option<HpoaRow<'_>>> {
        if is_header(line) {
            return Ok(None);
        }

        let cols: Vec<&str> = line.trim_end_matches(['\r', '\n']).split('\t').collect();
        if cols.len() <= ASPECT_COLUMN {
            return Err(StatsError::InvalidInput(line.to_string()));
        }

        let hpo_id = HpoTermId::try_from(cols[3])?;
        let inheritance = if cols[2] != "NOT" && cols[ASPECT_COLUMN] == INHERITANCE_ASPECT {
            Some(hpo_id)
        } else {
            None
        };

        Ok(Some(HpoaRow {
            id: cols[0],
            name: cols[1],
            inheritance,
        }))
    }

    /// Parses `phenotype.hpoa` into the `reference`
    ///
    /// # Errors
    ///
    /// - [`StatsError::CannotOpenFile`]: Source file not present or can't be opened
    /// - [`StatsError::InvalidInput`]: A line has too few columns or an invalid disease id
    /// - [`StatsError::ParseIntError`]: A line contains an invalid [`HpoTermId`]
    pub fn parse<P: AsRef<Path>>(file: P, reference: &mut DiseaseReference) -> StatsResult<()> {
        let filename = file.as_ref().display().to_string();
        let file = File::open(file).map_err(|_| StatsError::CannotOpenFile(filename.clone()))?;
        parse_reader(BufReader::new(file), reference)?;
        debug!("Loaded {} diseases from {}", reference.len(), filename);
        Ok(())
    }

    pub(crate) fn parse_reader<R: BufRead>(
        reader: R,
        reference: &mut DiseaseReference,
    ) -> StatsResult<()> {
        for line in reader.lines() {
            let line = line.map_err(|_| {
                StatsError::InvalidInput("Invalid data in phenotype.hpoa".to_string())
            })?;
            if let Some(row) = parse_line(&line)? {
                let disease = reference.add_disease(DiseaseId::try_from(row.id)?, row.name);
                if let Some(mode) = row.inheritance {
                    disease.add_mode_of_inheritance(mode);
                }
            }
        }
        Ok(())
    }

    #[cfg(test)]
    mod test_hpoa_parsing {
        use super::*;

        const INHERITANCE_ROW: &str = "OMIM:101200\tApert syndrome\t\tHP:0000006\tOMIM:101200\tIEA\t\t\t\t\tI\tHPO:iea[2009-02-17]";
        const PHENOTYPE_ROW: &str = "OMIM:101200\tApert syndrome\t\tHP:0011304\tOMIM:101200\tIEA\t\t\t\t\tP\tHPO:iea[2009-02-17]";

        #[test]
        fn test_skip_headers() {
            assert!(parse_line("#description: HPO annotations for rare diseases")
                .expect("comment")
                .is_none());
            assert!(parse_line("database_id\tdisease_name\tqualifier\thpo_id")
                .expect("header")
                .is_none());
            assert!(parse_line("").expect("empty line").is_none());
        }

        #[test]
        fn test_inheritance_row() {
            let row = parse_line(INHERITANCE_ROW)
                .expect("This line has the correct format")
                .expect("Line describes a disease");
            assert_eq!(row.id, "OMIM:101200");
            assert_eq!(row.name, "Apert syndrome");
            assert_eq!(row.inheritance, Some(HpoTermId::from(6u32)));
        }

        #[test]
        fn test_phenotype_row() {
            let row = parse_line(PHENOTYPE_ROW)
                .expect("This line has the correct format")
                .expect("Line describes a disease");
            assert_eq!(row.id, "OMIM:101200");
            assert!(row.inheritance.is_none());
        }

        #[test]
        fn test_not_inheritance_row() {
            let s = "OMIM:101200\tApert syndrome\tNOT\tHP:0000007\tOMIM:101200\tIEA\t\t\t\t\tI\tHPO:iea[2009-02-17]";
            let row = parse_line(s)
                .expect("This line has the correct format")
                .expect("Line describes a disease");
            assert!(row.inheritance.is_none());
        }

        #[test]
        fn test_too_few_columns() {
            let s = "OMIM:101200\tApert syndrome\t\tHP:0000006\tOMIM:101200";
            assert!(parse_line(s).is_err());
        }

        #[test]
        fn test_invalid_hpo_id() {
            let s = "OMIM:101200\tApert syndrome\t\tHP:00000A6\tOMIM:101200\tIEA\t\t\t\t\tI\tHPO:iea[2009-02-17]";
            assert!(parse_line(s).is_err());
        }

        #[test]
        fn test_build_reference() {
            let data = format!(
                "#DatabaseID\tDiseaseName\n{INHERITANCE_ROW}\n{PHENOTYPE_ROW}\n{}\n{}\n",
                "OMIM:101200\tApert syndrome\t\tHP:0000006\tPMID:1\tPCS\t\t\t\t\tI\tHPO:iea[2009-02-17]",
                "ORPHA:87\tApert syndrome\t\tHP:0011304\tORPHA:87\tTAS\t\t\t\t\tP\tORPHA:orphadata[2022-06-01]",
            );
            let mut reference = DiseaseReference::new();
            parse_reader(data.as_bytes(), &mut reference).expect("valid hpoa data");

            assert_eq!(reference.len(), 2);
            let apert = reference
                .get(&DiseaseId::try_from("OMIM:101200").expect("valid id"))
                .expect("Apert syndrome is present");
            assert_eq!(apert.modes_of_inheritance(), &[HpoTermId::from(6u32)]);

            let orpha = reference
                .get(&DiseaseId::try_from("ORPHA:87").expect("valid id"))
                .expect("Orpha disease is present");
            assert!(orpha.modes_of_inheritance().is_empty());
        }

        #[test]
        fn test_missing_file() {
            let mut reference = DiseaseReference::new();
            assert!(matches!(
                parse("does/not/exist.hpoa", &mut reference),
                Err(StatsError::CannotOpenFile(_))
            ));
        }
    }
}
