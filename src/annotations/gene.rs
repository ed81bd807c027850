use std::collections::HashSet;
use std::fmt::Display;

/// A set of distinct gene identifiers
///
/// Only the identifier is stored, e.g. `NCBIGene:2263`, because a corpus
/// only needs to know how many different genes it covers.
pub type Genes = HashSet<String>;

/// The causative gene of a case record
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Gene {
    id: String,
    symbol: String,
}

impl Gene {
    /// Initializes a new Gene
    pub fn new(id: &str, symbol: &str) -> Gene {
        Gene {
            id: id.to_string(),
            symbol: symbol.to_string(),
        }
    }

    /// The identifier of the gene, e.g. `NCBIGene:2263`
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The gene symbol, e.g. `FGFR2`
    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

impl Display for Gene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.symbol, self.id)
    }
}
