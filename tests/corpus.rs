use std::fs;
use std::path::PathBuf;

use phenostats::corpus::Corpus;
use phenostats::report::{ReportWriter, TABLE_FOOTER, TABLE_HEADER};
use phenostats::run::{process, run, RunConfig};
use phenostats::{DiseaseReference, InheritanceMode, StatsError};

fn data(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(path)
}

fn config(output: PathBuf, obo: Option<PathBuf>) -> RunConfig {
    RunConfig {
        hpoa: data("phenotype.hpoa"),
        cases: data("cases"),
        obo,
        output,
    }
}

#[test]
fn full_run() {
    let dir = tempfile::tempdir().expect("can create temp dir");
    let output = dir.path().join("stats.tex");
    let summary = run(&config(output.clone(), None)).expect("run succeeds");

    assert_eq!(summary.cases(), 6);
    assert_eq!(summary.diseases(), 5);
    assert!((summary.cases_per_disease().median() - 1.0).abs() < f64::EPSILON);
    assert_eq!(summary.cases_per_disease().max(), 2);

    let inheritance = summary.inheritance();
    assert_eq!(inheritance.get(InheritanceMode::AutosomalDominant), 2);
    assert_eq!(inheritance.get(InheritanceMode::AutosomalRecessive), 1);
    assert_eq!(inheritance.get(InheritanceMode::XLinked), 0);
    assert_eq!(inheritance.multiple(), 1);
    assert_eq!(summary.unmatched(), 1);
    assert_eq!(summary.no_inheritance(), 1);
    assert_eq!(
        inheritance.total() + summary.unmatched() + summary.no_inheritance(),
        summary.cases()
    );

    // observed: [2, 1, 1, 2, 0, 1], negated: [1, 2, 0, 0, 1, 0]
    assert!((summary.observed_per_case().median() - 1.0).abs() < f64::EPSILON);
    assert!((summary.observed_per_case().mean() - 7.0 / 6.0).abs() < 1e-12);
    assert_eq!(summary.observed_per_case().max(), 2);
    assert!((summary.negated_per_case().median() - 0.5).abs() < f64::EPSILON);
    assert!((summary.negated_per_case().mean() - 4.0 / 6.0).abs() < 1e-12);
    assert_eq!(summary.negated_per_case().max(), 2);

    assert_eq!(summary.distinct_terms(), 6);
    assert!((summary.mean_usage_per_term() - 4.0 / 6.0).abs() < 1e-12);
    assert_eq!(summary.genes(), 4);

    let report = fs::read_to_string(&output).expect("report was written");
    let body = report
        .strip_prefix(TABLE_HEADER)
        .and_then(|rest| rest.strip_suffix(TABLE_FOOTER))
        .expect("report has header and footer");
    let rows: Vec<&str> = body.lines().collect();
    assert_eq!(
        rows,
        vec![
            "Apert syndrome & FGFR2 & family-1-II-1 & 3 & PMID:111\\\\ ",
            "Apert syndrome & FGFR2 & P2 & 3 & PMID:222\\\\ ",
            "Recessive Disorder & SYM1 & proband-c & 1 & PMID:333\\\\ ",
            "X-Linked Disorder & SYM2 & proband-d & 2 & PMID:444\\\\ ",
            "Unknown syndrome & FGFR2 & proband-e & 1 & PMID:555\\\\ ",
            "Disorder Without Inheritance & SYM3 & proband-f & 1 & PMID:666\\\\ ",
        ]
    );
    assert!(!dir.path().join("stats.tex.partial").exists());
}

#[test]
fn full_run_with_ontology() {
    let dir = tempfile::tempdir().expect("can create temp dir");
    let output = dir.path().join("stats.tex");
    let summary =
        run(&config(output, Some(data("hp.obo")))).expect("run succeeds");

    // HP:0000119 (alt_id) and HP:0000200 (obsolete) both map to HP:0000118
    assert_eq!(summary.distinct_terms(), 5);
    assert!((summary.mean_usage_per_term() - 0.8).abs() < 1e-12);
    assert_eq!(summary.cases(), 6);
}

#[test]
fn unrecognized_inheritance_aborts_run() {
    let cases = tempfile::tempdir().expect("can create temp dir");
    fs::copy(data("cases/a_apert.json"), cases.path().join("1.json")).expect("can copy");
    fs::copy(data("mitochondrial.json"), cases.path().join("2.json")).expect("can copy");
    fs::copy(data("cases/c_recessive.json"), cases.path().join("3.json")).expect("can copy");

    let out = tempfile::tempdir().expect("can create temp dir");
    let output = out.path().join("stats.tex");
    let config = RunConfig {
        hpoa: data("phenotype.hpoa"),
        cases: cases.path().to_path_buf(),
        obo: None,
        output: output.clone(),
    };

    match run(&config) {
        Err(StatsError::UnrecognizedInheritance { mode, disease }) => {
            assert_eq!(mode.to_string(), "HP:0001427");
            assert!(disease.contains("OMIM:500000"));
        }
        other => panic!("expected fatal error, got {other:?}"),
    }
    assert!(!output.exists());
    assert!(!out.path().join("stats.tex.partial").exists());
}

#[test]
fn vanished_case_file_aborts_run() {
    let cases = tempfile::tempdir().expect("can create temp dir");
    fs::copy(data("cases/a_apert.json"), cases.path().join("1.json")).expect("can copy");
    fs::copy(data("cases/b_apert.json"), cases.path().join("2.json")).expect("can copy");

    let corpus = Corpus::from_dir(cases.path()).expect("directory exists");
    assert_eq!(corpus.len(), 2);
    fs::remove_file(cases.path().join("2.json")).expect("can remove file");

    let reference = DiseaseReference::from_hpoa(data("phenotype.hpoa")).expect("valid hpoa");
    let mut writer = ReportWriter::new(Vec::<u8>::new());
    let res = process(corpus.cases(None), &reference, &mut writer);
    assert!(matches!(res, Err(StatsError::CannotOpenFile(_))));
    assert_eq!(writer.rows(), 1);
}

#[test]
fn empty_corpus() {
    let cases = tempfile::tempdir().expect("can create temp dir");
    let out = tempfile::tempdir().expect("can create temp dir");
    let output = out.path().join("stats.tex");
    let config = RunConfig {
        hpoa: data("phenotype.hpoa"),
        cases: cases.path().to_path_buf(),
        obo: None,
        output: output.clone(),
    };

    let summary = run(&config).expect("empty corpus is valid");
    assert_eq!(summary.cases(), 0);
    assert_eq!(summary.diseases(), 0);
    assert_eq!(summary.distinct_terms(), 0);
    assert_eq!(summary.genes(), 0);
    assert!(summary.mean_usage_per_term().abs() < f64::EPSILON);

    let report = fs::read_to_string(output).expect("report was written");
    assert_eq!(report, format!("{TABLE_HEADER}{TABLE_FOOTER}"));
}

#[test]
fn missing_reference() {
    let out = tempfile::tempdir().expect("can create temp dir");
    let config = RunConfig {
        hpoa: data("does-not-exist.hpoa"),
        cases: data("cases"),
        obo: None,
        output: out.path().join("stats.tex"),
    };
    assert!(matches!(run(&config), Err(StatsError::CannotOpenFile(_))));
}

#[test]
fn reference_from_fixture() {
    let reference = DiseaseReference::from_hpoa(data("phenotype.hpoa")).expect("valid hpoa");
    assert_eq!(reference.len(), 7);
    let x_linked = reference
        .iter()
        .find(|disease| disease.name() == "X-linked disorder")
        .expect("disease is present");
    assert_eq!(x_linked.modes_of_inheritance().len(), 2);
    let no_inheritance = reference
        .iter()
        .find(|disease| disease.id().as_str() == "OMIM:400000")
        .expect("disease is present");
    assert!(no_inheritance.modes_of_inheritance().is_empty());
}
