use std::collections::HashMap;

/// Highest atom serial number a PDB file can carry (5-digit column).
pub const MAX_SERIALS: usize = 99999;

/// The single-character chain-id alphabet available to one bundle, in
/// assignment order.
pub const CHAIN_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Per-chain statistics gathered from the first model during the input scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainStats {
    /// Chain id exactly as read, possibly multi-character.
    pub id: String,
    /// Coordinate records in the first model (all classes).
    pub atom_count: usize,
    /// Hydrogen subset of `atom_count`, excluded from the MASTER tally.
    pub hydrogen_count: usize,
}

impl ChainStats {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            atom_count: 0,
            hydrogen_count: 0,
        }
    }
}

/// One output PDB file's worth of chains, with its chain-id remapping.
///
/// Invariants guaranteed by the bundler: the serial numbers consumed by the
/// bundle's chains (atoms plus one TER each) stay below [`MAX_SERIALS`], at
/// most 62 chains are assigned, and the remapping is injective.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChainBundle {
    /// Original chain ids in encounter order.
    pub chains: Vec<String>,
    /// Original id to assigned single-character id.
    pub remap: HashMap<String, char>,
}

impl ChainBundle {
    /// The output chain id assigned to an original chain id.
    pub fn mapped_id(&self, chain: &str) -> char {
        self.remap.get(chain).copied().unwrap_or(' ')
    }
}

/// The complete bundle assignment for one structure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BundlePlan {
    pub bundles: Vec<ChainBundle>,
}

impl BundlePlan {
    /// Index of the bundle a chain was assigned to.
    pub fn bundle_of(&self, chain: &str) -> Option<usize> {
        self.bundles
            .iter()
            .position(|b| b.chains.iter().any(|c| c == chain))
    }
}
