// ---------------------------------------------------------------------------
// Protein source reference table (static, hand-curated)
// ---------------------------------------------------------------------------

/// Whether a protein source is plant- or animal-derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Plant,
    Animal,
}

impl SourceKind {
    pub fn label(self) -> &'static str {
        match self {
            SourceKind::Plant => "Plant",
            SourceKind::Animal => "Animal",
        }
    }
}

/// One row of the protein-source reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProteinSource {
    pub name: &'static str,
    pub product_count: u32,
    pub kind: SourceKind,
}

/// Hand-curated counts of the top protein sources found in Blue Ocean
/// products. Not derived from the main table.
const PROTEIN_SOURCES: [ProteinSource; 7] = [
    ProteinSource { name: "Peanut", product_count: 799, kind: SourceKind::Plant },
    ProteinSource { name: "Soy / Soybean", product_count: 669, kind: SourceKind::Plant },
    ProteinSource { name: "Almond", product_count: 397, kind: SourceKind::Plant },
    ProteinSource { name: "Beef", product_count: 135, kind: SourceKind::Animal },
    ProteinSource { name: "Nuts", product_count: 125, kind: SourceKind::Plant },
    ProteinSource { name: "Whey", product_count: 111, kind: SourceKind::Animal },
    ProteinSource { name: "Soy Protein", product_count: 62, kind: SourceKind::Plant },
];

/// The reference table sorted ascending by product count, ready to render.
pub fn protein_sources() -> Vec<ProteinSource> {
    let mut rows = PROTEIN_SOURCES.to_vec();
    rows.sort_by_key(|s| s.product_count);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_sort_ascending_by_count() {
        let rows = protein_sources();
        assert_eq!(rows.len(), 7);
        assert!(rows.windows(2).all(|w| w[0].product_count <= w[1].product_count));
        assert_eq!(rows.first().unwrap().name, "Soy Protein");
        assert_eq!(rows.last().unwrap().name, "Peanut");
    }

    #[test]
    fn kinds_are_preserved() {
        let rows = protein_sources();
        let whey = rows.iter().find(|s| s.name == "Whey").unwrap();
        assert_eq!(whey.kind, SourceKind::Animal);
        let peanut = rows.iter().find(|s| s.name == "Peanut").unwrap();
        assert_eq!(peanut.kind, SourceKind::Plant);
    }
}
