//! Module to parse a [`CaseRecord`] from a Phenopacket (schema v1, JSON)
//!
//! Only the fields that are needed for the corpus statistics are read:
//!
//! | Phenopacket field | `CaseRecord` |
//! | --- | --- |
//! | `diseases[0].term` | [`CaseRecord::diagnosis`] |
//! | `phenotypicFeatures[].type.id` | [`CaseRecord::observed`] / [`CaseRecord::negated`] |
//! | `genes[0]` | [`CaseRecord::gene`] |
//! | `subject.id` | [`CaseRecord::sample_name`] |
//! | `metaData.externalReferences[0].id` | [`CaseRecord::publication`] |
//! | `variants[].zygosity.id` | [`CaseRecord::pathogenic_allele_count`] |
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::annotations::{DiseaseId, Gene};
use crate::case::{CaseRecord, Diagnosis};
use crate::{HpoTermId, Ontology, StatsError, StatsResult};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Phenopacket {
    #[serde(default)]
    id: String,
    subject: Option<Individual>,
    #[serde(default)]
    phenotypic_features: Vec<PhenotypicFeature>,
    #[serde(default)]
    genes: Vec<GeneEntry>,
    #[serde(default)]
    variants: Vec<Variant>,
    #[serde(default)]
    diseases: Vec<DiseaseEntry>,
    meta_data: Option<MetaData>,
}

#[derive(Debug, Deserialize)]
struct OntologyClass {
    id: String,
    #[serde(default)]
    label: String,
}

#[derive(Debug, Deserialize)]
struct Individual {
    id: String,
}

#[derive(Debug, Deserialize)]
struct PhenotypicFeature {
    #[serde(rename = "type")]
    term: OntologyClass,
    #[serde(default)]
    negated: bool,
}

#[derive(Debug, Deserialize)]
struct GeneEntry {
    id: String,
    #[serde(default)]
    symbol: String,
}

#[derive(Debug, Deserialize)]
struct Variant {
    zygosity: Option<OntologyClass>,
}

#[derive(Debug, Deserialize)]
struct DiseaseEntry {
    term: OntologyClass,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MetaData {
    #[serde(default)]
    external_references: Vec<ExternalReference>,
}

#[derive(Debug, Deserialize)]
struct ExternalReference {
    id: String,
}

/// Parses a Phenopacket JSON file into a [`CaseRecord`]
///
/// If an [`Ontology`] is provided, all phenotype terms are replaced by their
/// current primary ID. Terms that are unknown to the ontology are dropped.
///
/// # Errors
///
/// - [`StatsError::CannotOpenFile`]: the file does not exist (anymore) or can't be read
/// - [`StatsError::InvalidInput`]: the file is not a valid Phenopacket or lacks a
///   diagnosis, a gene or a subject
/// - [`StatsError::ParseIntError`]: a phenotypic feature has an invalid [`HpoTermId`]
pub fn parse<P: AsRef<Path>>(file: P, ontology: Option<&Ontology>) -> StatsResult<CaseRecord> {
    let filename = file.as_ref().display().to_string();
    let content = fs::read_to_string(file).map_err(|_| StatsError::CannotOpenFile(filename.clone()))?;
    from_json(&content, ontology).map_err(|err| match err {
        StatsError::InvalidInput(msg) => StatsError::InvalidInput(format!("{filename}: {msg}")),
        err => err,
    })
}

/// Parses a Phenopacket from a JSON string
///
/// See [`parse`] for details.
///
/// # Errors
///
/// - [`StatsError::InvalidInput`]: the input is not a valid Phenopacket or lacks a
///   diagnosis, a gene or a subject
/// - [`StatsError::ParseIntError`]: a phenotypic feature has an invalid [`HpoTermId`]
pub fn from_json(json: &str, ontology: Option<&Ontology>) -> StatsResult<CaseRecord> {
    let packet: Phenopacket =
        serde_json::from_str(json).map_err(|err| StatsError::InvalidInput(err.to_string()))?;

    let Some(disease) = packet.diseases.first() else {
        return Err(StatsError::InvalidInput(format!(
            "phenopacket {} has no diagnosis",
            packet.id
        )));
    };
    let diagnosis = Diagnosis::new(DiseaseId::try_from(disease.term.id.as_str())?, &disease.term.label);

    let Some(gene) = packet.genes.first() else {
        return Err(StatsError::InvalidInput(format!(
            "phenopacket {} has no gene",
            packet.id
        )));
    };
    let gene = Gene::new(&gene.id, &gene.symbol);

    let Some(subject) = &packet.subject else {
        return Err(StatsError::InvalidInput(format!(
            "phenopacket {} has no subject",
            packet.id
        )));
    };

    let publication = packet
        .meta_data
        .as_ref()
        .and_then(|meta| meta.external_references.first())
        .map(|reference| reference.id.as_str())
        .unwrap_or_default();

    let mut observed = Vec::new();
    let mut negated = Vec::new();
    for feature in &packet.phenotypic_features {
        let Some(id) = term_id(&feature.term.id, ontology)? else {
            continue;
        };
        if feature.negated {
            negated.push(id);
        } else {
            observed.push(id);
        }
    }

    let zygosities = packet
        .variants
        .iter()
        .filter_map(|variant| variant.zygosity.as_ref())
        .map(|zygosity| zygosity.id.clone())
        .collect();

    Ok(CaseRecord::new(diagnosis, gene, &subject.id, publication)
        .with_observed(observed)
        .with_negated(negated)
        .with_zygosities(zygosities))
}

/// Parses the term ID and replaces it by its primary ID, if an ontology is present
fn term_id(id: &str, ontology: Option<&Ontology>) -> StatsResult<Option<HpoTermId>> {
    let id = HpoTermId::try_from(id)?;
    match ontology {
        None => Ok(Some(id)),
        Some(ontology) => {
            let primary = ontology.primary_id(id);
            if primary.is_none() {
                warn!("Skipping unknown term {}", id);
            }
            Ok(primary)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const PACKET: &str = r#"{
        "id": "PMID_1234567-proband_1",
        "subject": { "id": "proband_1", "sex": "MALE" },
        "phenotypicFeatures": [
            { "type": { "id": "HP:0011304", "label": "Broad thumb" } },
            { "type": { "id": "HP:0001249", "label": "Intellectual disability" }, "negated": true },
            { "type": { "id": "HP:0000119", "label": "Abnormality of the genitourinary system" } }
        ],
        "genes": [ { "id": "NCBIGene:2263", "symbol": "FGFR2" } ],
        "variants": [
            { "zygosity": { "id": "GENO:0000135", "label": "heterozygous" } }
        ],
        "diseases": [ { "term": { "id": "OMIM:101200", "label": "APERT SYNDROME; APRS" } } ],
        "metaData": {
            "createdBy": "Hpo Case Annotator",
            "externalReferences": [ { "id": "PMID:1234567", "description": "A case report" } ]
        }
    }"#;

    #[test]
    fn parse_phenopacket() {
        let case = from_json(PACKET, None).expect("valid phenopacket");
        assert_eq!(case.diagnosis().id().as_str(), "OMIM:101200");
        assert_eq!(case.diagnosis().label(), "APERT SYNDROME; APRS");
        assert_eq!(
            case.observed(),
            &[HpoTermId::from(11304u32), HpoTermId::from(119u32)]
        );
        assert_eq!(case.negated(), &[HpoTermId::from(1249u32)]);
        assert_eq!(case.gene().id(), "NCBIGene:2263");
        assert_eq!(case.gene().symbol(), "FGFR2");
        assert_eq!(case.sample_name(), "proband_1");
        assert_eq!(case.publication(), "PMID:1234567");
        assert_eq!(case.pathogenic_allele_count().expect("known zygosity"), 1);
    }

    #[test]
    fn normalize_terms_with_ontology() {
        let mut ontology = Ontology::empty();
        ontology.add_term(118u32.into(), "Phenotypic abnormality");
        ontology.add_alt_id(118u32.into(), 119u32.into());
        ontology.add_term(11304u32.into(), "Broad thumb");

        let case = from_json(PACKET, Some(&ontology)).expect("valid phenopacket");
        assert_eq!(
            case.observed(),
            &[HpoTermId::from(11304u32), HpoTermId::from(118u32)]
        );
        // HP:0001249 is not part of the ontology
        assert!(case.negated().is_empty());
    }

    #[test]
    fn missing_publication() {
        let json = r#"{
            "subject": { "id": "P1" },
            "genes": [ { "id": "NCBIGene:2263", "symbol": "FGFR2" } ],
            "diseases": [ { "term": { "id": "OMIM:101200", "label": "APERT SYNDROME" } } ]
        }"#;
        let case = from_json(json, None).expect("valid phenopacket");
        assert_eq!(case.publication(), "");
        assert_eq!(case.total_terms(), 0);
    }

    #[test]
    fn missing_diagnosis() {
        let json = r#"{
            "subject": { "id": "P1" },
            "genes": [ { "id": "NCBIGene:2263", "symbol": "FGFR2" } ]
        }"#;
        assert!(matches!(
            from_json(json, None),
            Err(StatsError::InvalidInput(_))
        ));
    }

    #[test]
    fn missing_gene() {
        let json = r#"{
            "subject": { "id": "P1" },
            "diseases": [ { "term": { "id": "OMIM:101200", "label": "APERT SYNDROME" } } ]
        }"#;
        assert!(from_json(json, None).is_err());
    }

    #[test]
    fn invalid_json() {
        assert!(from_json("{ not json", None).is_err());
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            parse("does/not/exist.json", None),
            Err(StatsError::CannotOpenFile(_))
        ));
    }
}
