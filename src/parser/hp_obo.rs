use std::fs;
use std::path::Path;

use tracing::{trace, warn};

use crate::{HpoTermId, Ontology, StatsError, StatsResult};

/// Everything needed from a single `[Term]` stanza
#[derive(Debug, Default)]
struct RawTerm<'a> {
    id: Option<&'a str>,
    name: Option<&'a str>,
    alt_ids: Vec<&'a str>,
    obsolete: bool,
    replaced_by: Option<&'a str>,
}

pub(crate) fn read_obo_file<P: AsRef<Path>>(filename: P, ontology: &mut Ontology) -> StatsResult<()> {
    let path = filename.as_ref().display().to_string();
    let file_content =
        fs::read_to_string(filename).map_err(|_| StatsError::CannotOpenFile(path))?;
    read_obo_str(&file_content, ontology)
}

pub(crate) fn read_obo_str(content: &str, ontology: &mut Ontology) -> StatsResult<()> {
    // obsolete terms may reference replacements that are defined later
    let mut obsoletes: Vec<(HpoTermId, Option<HpoTermId>)> = Vec::new();
    let content = content.replace("\r\n", "\n");
    let mut terms = 0usize;

    for term in content.split("\n\n") {
        if let Some(term) = term.trim_start().strip_prefix("[Term]\n") {
            let raw = term_from_obo(term);
            let (Some(id), Some(name)) = (raw.id, raw.name) else {
                warn!("Unable to parse: {}", term);
                continue;
            };
            let id = HpoTermId::try_from(id)?;
            ontology.add_term(id, name);
            terms += 1;
            for alt_id in raw.alt_ids {
                ontology.add_alt_id(id, HpoTermId::try_from(alt_id)?);
            }
            if raw.obsolete {
                let replacement = raw.replaced_by.map(HpoTermId::try_from).transpose()?;
                obsoletes.push((id, replacement));
            }
        } else {
            trace!("Ignoring: {}", term);
        }
    }

    if terms == 0 {
        warn!("No terms found in ontology data");
    }
    for (id, replacement) in obsoletes {
        ontology.set_obsolete(id, replacement);
    }
    Ok(())
}

fn term_from_obo(term: &str) -> RawTerm<'_> {
    let mut raw = RawTerm::default();
    for line in term.lines() {
        match parse_line(line) {
            Some(("id", value)) => raw.id = Some(value),
            Some(("name", value)) => raw.name = Some(value),
            Some(("alt_id", value)) => raw.alt_ids.push(value),
            Some(("is_obsolete", "true")) => raw.obsolete = true,
            Some(("replaced_by", value)) => raw.replaced_by = Some(value),
            _ => (),
        }
    }
    raw
}

fn parse_line(line: &str) -> Option<(&str, &str)> {
    line.split_once(": ")
        .map(|(key, value)| (key, value.trim_end()))
}
