/// Distinguishes the two PDB coordinate record kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    /// A polymer atom, written as an `ATOM` record.
    Atom,
    /// A heterogen atom, written as a `HETATM` record.
    Hetatm,
}

impl GroupKind {
    /// The six-character PDB record name for this group.
    pub fn record_name(self) -> &'static str {
        match self {
            GroupKind::Atom => "ATOM  ",
            GroupKind::Hetatm => "HETATM",
        }
    }

    /// Parses the mmCIF `group_PDB` value. Anything that is not exactly
    /// `ATOM` is treated as a heterogen, matching the PDB archive's usage.
    pub fn from_group_pdb(raw: &str) -> Self {
        if raw == "ATOM" {
            GroupKind::Atom
        } else {
            GroupKind::Hetatm
        }
    }

    /// Matches a PDB line's record name, if it is a coordinate record.
    pub fn from_record(line: &str) -> Option<Self> {
        if line.starts_with("ATOM  ") {
            Some(GroupKind::Atom)
        } else if line.starts_with("HETATM") {
            Some(GroupKind::Hetatm)
        } else {
            None
        }
    }
}

/// Placement class of an atom within the output file.
///
/// Polymer atoms are written first (one `TER`-terminated run per chain),
/// followed by ligand atoms and finally waters, neither of which receive a
/// `TER` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtomClass {
    Polymer,
    Ligand,
    Water,
}

/// One atom row, created once during the input scan and immutable afterward.
///
/// Textual fields are stored pre-padded to their PDB column widths (name 4,
/// residue 3, sequence 4, coordinates 8, occupancy/B-factor 6, element and
/// charge 2, model number 4) so the writers can emit them verbatim. The
/// chain id is kept exactly as read, possibly multi-character; the bundler
/// decides the single-character id it maps to on output.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    pub group: GroupKind,
    pub class: AtomClass,
    pub name: String,
    pub alt_loc: char,
    pub res_name: String,
    pub chain_id: String,
    pub seq_id: String,
    pub insert_code: char,
    pub x: String,
    pub y: String,
    pub z: String,
    pub occupancy: String,
    pub b_factor: String,
    pub element: String,
    pub charge: String,
    pub model: String,
}

impl AtomRecord {
    /// Whether the element field identifies a hydrogen. Hydrogen counts are
    /// excluded from the `MASTER` coordinate tally.
    pub fn is_hydrogen(&self) -> bool {
        self.element == " H"
    }

    /// The identity key under which an anisotropic tensor for this atom
    /// would have been registered.
    pub fn anisou_key(&self) -> AnisouKey {
        AnisouKey {
            name: self.name.clone(),
            alt_loc: self.alt_loc,
            res_name: self.res_name.clone(),
            seq_id: self.seq_id.clone(),
            insert_code: self.insert_code,
            chain_id: self.chain_id.clone(),
        }
    }
}

/// Lookup key joining an `ANISOU` tensor to its coordinate record.
///
/// All components use the same padded representation as [`AtomRecord`], so a
/// key built from a tensor row matches the key built from the atom row it
/// describes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnisouKey {
    pub name: String,
    pub alt_loc: char,
    pub res_name: String,
    pub seq_id: String,
    pub insert_code: char,
    pub chain_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_atom() -> AtomRecord {
        AtomRecord {
            group: GroupKind::Atom,
            class: AtomClass::Polymer,
            name: " CA ".to_string(),
            alt_loc: ' ',
            res_name: "ALA".to_string(),
            chain_id: "AB".to_string(),
            seq_id: "   7".to_string(),
            insert_code: ' ',
            x: "   1.000".to_string(),
            y: "   2.000".to_string(),
            z: "   3.000".to_string(),
            occupancy: "  1.00".to_string(),
            b_factor: "  0.00".to_string(),
            element: " C".to_string(),
            charge: "  ".to_string(),
            model: "   1".to_string(),
        }
    }

    #[test]
    fn group_kind_parses_atom_and_everything_else_as_hetatm() {
        assert_eq!(GroupKind::from_group_pdb("ATOM"), GroupKind::Atom);
        assert_eq!(GroupKind::from_group_pdb("HETATM"), GroupKind::Hetatm);
        assert_eq!(GroupKind::from_group_pdb("ATM"), GroupKind::Hetatm);
        assert_eq!(GroupKind::Atom.record_name(), "ATOM  ");
        assert_eq!(GroupKind::Hetatm.record_name(), "HETATM");
    }

    #[test]
    fn hydrogen_detection_uses_padded_element_field() {
        let mut atom = sample_atom();
        assert!(!atom.is_hydrogen());
        atom.element = " H".to_string();
        assert!(atom.is_hydrogen());
    }

    #[test]
    fn anisou_key_round_trips_atom_identity() {
        let atom = sample_atom();
        let key = atom.anisou_key();
        assert_eq!(key.name, " CA ");
        assert_eq!(key.chain_id, "AB");
        assert_eq!(key, atom.anisou_key());
    }
}
