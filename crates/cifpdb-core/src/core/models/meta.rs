use std::collections::{BTreeMap, HashMap};

/// Primary citation fields extracted from the `_citation` and
/// `_citation_author` categories. All values are stored as read (quotes
/// stripped); `?` sentinels are normalized to empty during the scan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Citation {
    pub title: String,
    pub journal_abbrev: String,
    pub journal_volume: String,
    pub page_first: String,
    pub year: String,
    pub journal_id_astm: String,
    pub country: String,
    pub journal_id_issn: String,
    pub pubmed_id: String,
    pub doi: String,
}

/// Unit-cell parameters destined for the `CRYST1` record.
///
/// The six numeric fields are stored pre-formatted at their PDB widths
/// (lengths 9.3, angles 7.2); a `CRYST1` record is only emitted when all six
/// are present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellParams {
    pub length_a: String,
    pub length_b: String,
    pub length_c: String,
    pub angle_alpha: String,
    pub angle_beta: String,
    pub angle_gamma: String,
    pub space_group: String,
    pub z_value: String,
}

impl CellParams {
    /// True when every numeric cell parameter was seen in the input.
    pub fn is_complete(&self) -> bool {
        [
            &self.length_a,
            &self.length_b,
            &self.length_c,
            &self.angle_alpha,
            &self.angle_beta,
            &self.angle_gamma,
        ]
        .iter()
        .all(|v| !v.is_empty())
    }
}

/// The fractional-coordinate transform written as `SCALE1`-`SCALE3`.
///
/// Each row holds the three matrix components followed by the translation
/// vector component, pre-formatted (matrix 10.6, vector 10.5). Partial data
/// suppresses the whole record group.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleMatrix {
    pub rows: [[String; 4]; 3],
}

impl Default for ScaleMatrix {
    fn default() -> Self {
        Self {
            rows: std::array::from_fn(|_| std::array::from_fn(|_| String::new())),
        }
    }
}

impl ScaleMatrix {
    pub fn is_complete(&self) -> bool {
        self.rows.iter().flatten().all(|v| !v.is_empty())
    }
}

/// Structure-level metadata aggregated across the whole input file and
/// duplicated verbatim into every bundle's header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructureMeta {
    pub keywords: String,
    pub deposition_date: String,
    pub revision_date: String,
    pub authors: Vec<String>,
    pub citation_authors: Vec<String>,
    pub citation: Citation,
    pub cell: CellParams,
    pub scale: ScaleMatrix,
}

/// Polymer sequence information, used only when SEQRES conversion is
/// requested.
///
/// `strands[entity]` is the comma-separated chain-id list declared by
/// `_entity_poly.pdbx_strand_id`; `sequences[entity]` is the ordered list of
/// monomer codes from `_entity_poly_seq`, each padded to the three-column
/// SEQRES residue field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityMeta {
    pub strands: Vec<String>,
    pub sequences: BTreeMap<usize, Vec<String>>,
}

impl EntityMeta {
    pub fn is_empty(&self) -> bool {
        self.strands.is_empty() || self.sequences.is_empty()
    }

    /// Inverts the entity-to-strands table into a chain-to-entity lookup.
    pub fn chain_to_entity(&self) -> HashMap<String, usize> {
        let mut map = HashMap::new();
        for (entity, strands) in self.strands.iter().enumerate() {
            for chain in strands.split(',') {
                if !chain.is_empty() {
                    map.insert(chain.to_string(), entity);
                }
            }
        }
        map
    }
}
