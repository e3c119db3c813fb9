//! Fixed-column PDB coordinate parser.
//!
//! The scan keeps per-column presence flags alongside the atom list: a
//! column that is blank in every coordinate record of the file is left out
//! of the generated `_atom_site` loop entirely, so a minimal PDB file round
//! trips to a minimal loop. Only `HEADER`, `MODEL`, `ATOM`, and `HETATM`
//! records participate; everything else is skipped.

use crate::core::models::atom::GroupKind;

use super::PdbError;

/// One coordinate record with its columns trimmed of padding.
#[derive(Debug, Clone, PartialEq)]
pub struct PdbAtom {
    pub group: GroupKind,
    pub name: String,
    pub alt_loc: String,
    pub res_name: String,
    pub chain_id: String,
    pub seq_id: String,
    pub insert_code: String,
    pub x: String,
    pub y: String,
    pub z: String,
    pub occupancy: String,
    pub b_factor: String,
    pub element: String,
    pub charge: String,
    pub model: String,
}

/// A scanned PDB file: its entry id, coordinate records in file order, and
/// which optional columns carried data anywhere in the file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdbStructure {
    pub pdb_id: String,
    pub atoms: Vec<PdbAtom>,
    pub has_alt_loc: bool,
    pub has_insert_code: bool,
    pub has_occupancy: bool,
    pub has_b_factor: bool,
    pub has_element: bool,
    pub has_charge: bool,
    pub multi_model: bool,
}

impl PdbStructure {
    pub fn parse(content: &str) -> Result<Self, PdbError> {
        let mut scan = Self {
            pdb_id: "XXXX".to_string(),
            ..Self::default()
        };
        let mut model = "1".to_string();
        let mut model_count = 0usize;
        for line in content.lines() {
            if line.starts_with("HEADER") {
                let id = column(line, 62, 66).trim();
                if !id.is_empty() {
                    scan.pdb_id = id.to_string();
                }
            } else if line.starts_with("MODEL ") {
                model_count += 1;
                let number = column(line, 10, 14).trim();
                model = if number.is_empty() {
                    model_count.to_string()
                } else {
                    number.to_string()
                };
            } else if let Some(group) = GroupKind::from_record(line) {
                // xyz ends at column 54; shorter lines cannot be coordinates
                if line.len() < 54 {
                    continue;
                }
                scan.push_atom(line, group, &model);
            }
        }
        if scan.atoms.is_empty() {
            return Err(PdbError::EmptyStructure);
        }
        scan.multi_model = model_count > 1;
        Ok(scan)
    }

    fn push_atom(&mut self, line: &str, group: GroupKind, model: &str) {
        let atom = PdbAtom {
            group,
            name: column(line, 12, 16).trim().to_string(),
            alt_loc: column(line, 16, 17).trim().to_string(),
            res_name: column(line, 17, 20).trim().to_string(),
            chain_id: column(line, 21, 22).trim().to_string(),
            seq_id: column(line, 22, 26).trim().to_string(),
            insert_code: column(line, 26, 27).trim().to_string(),
            x: column(line, 30, 38).trim().to_string(),
            y: column(line, 38, 46).trim().to_string(),
            z: column(line, 46, 54).trim().to_string(),
            occupancy: column(line, 54, 60).trim().to_string(),
            b_factor: column(line, 60, 66).trim().to_string(),
            element: column(line, 76, 78).trim().to_string(),
            charge: column(line, 78, 80).trim().to_string(),
            model: model.to_string(),
        };
        self.has_alt_loc |= !atom.alt_loc.is_empty();
        self.has_insert_code |= !atom.insert_code.is_empty();
        self.has_occupancy |= !atom.occupancy.is_empty();
        self.has_b_factor |= !atom.b_factor.is_empty();
        self.has_element |= !atom.element.is_empty();
        self.has_charge |= !atom.charge.is_empty();
        self.atoms.push(atom);
    }
}

/// Half-open column slice, tolerant of lines shorter than 80 characters.
fn column(line: &str, start: usize, end: usize) -> &str {
    let end = end.min(line.len());
    if start >= end {
        return "";
    }
    line.get(start..end).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
HEADER    HYDROLASE                               02-MAY-98   1ABC
ATOM      1  N   MET A   1      27.340  24.430   2.614  1.00  9.67           N
ATOM      2  CA  MET A   1      26.266  25.413   2.842  1.00 10.38           C
TER       3      MET A   1
HETATM    4  O   HOH A 201      10.000  11.000  12.000  1.00 20.00           O
END
";

    #[test]
    fn coordinate_columns_are_trimmed_into_fields() {
        let structure = PdbStructure::parse(SAMPLE).unwrap();
        assert_eq!(structure.pdb_id, "1ABC");
        assert_eq!(structure.atoms.len(), 3);
        let first = &structure.atoms[0];
        assert_eq!(first.group, GroupKind::Atom);
        assert_eq!(first.name, "N");
        assert_eq!(first.res_name, "MET");
        assert_eq!(first.chain_id, "A");
        assert_eq!(first.seq_id, "1");
        assert_eq!(first.x, "27.340");
        assert_eq!(first.occupancy, "1.00");
        assert_eq!(first.element, "N");
        let water = &structure.atoms[2];
        assert_eq!(water.group, GroupKind::Hetatm);
        assert_eq!(water.res_name, "HOH");
        assert_eq!(water.seq_id, "201");
    }

    #[test]
    fn presence_flags_reflect_the_whole_file() {
        let structure = PdbStructure::parse(SAMPLE).unwrap();
        assert!(structure.has_occupancy);
        assert!(structure.has_b_factor);
        assert!(structure.has_element);
        assert!(!structure.has_alt_loc);
        assert!(!structure.has_insert_code);
        assert!(!structure.has_charge);
        assert!(!structure.multi_model);
    }

    #[test]
    fn truncated_lines_drop_their_trailing_columns() {
        let input = "\
ATOM      1  N   MET A   1      27.340  24.430   2.614
";
        let structure = PdbStructure::parse(input).unwrap();
        assert_eq!(structure.atoms.len(), 1);
        assert!(!structure.has_occupancy);
        assert!(!structure.has_element);
        assert_eq!(structure.atoms[0].z, "2.614");
    }

    #[test]
    fn lines_too_short_for_coordinates_are_skipped() {
        let input = "\
ATOM      1  N   MET A   1
HETATM
";
        assert_eq!(PdbStructure::parse(input), Err(PdbError::EmptyStructure));
    }

    #[test]
    fn missing_header_falls_back_to_a_placeholder_id() {
        let input = "\
ATOM      1  N   MET A   1      27.340  24.430   2.614  1.00  9.67           N
";
        let structure = PdbStructure::parse(input).unwrap();
        assert_eq!(structure.pdb_id, "XXXX");
    }

    #[test]
    fn model_records_are_counted_and_numbered() {
        let input = "\
MODEL        1
ATOM      1  N   MET A   1      27.340  24.430   2.614  1.00  9.67           N
ENDMDL
MODEL        2
ATOM      1  N   MET A   1      27.000  24.000   2.000  1.00  9.67           N
ENDMDL
";
        let structure = PdbStructure::parse(input).unwrap();
        assert!(structure.multi_model);
        assert_eq!(structure.atoms[0].model, "1");
        assert_eq!(structure.atoms[1].model, "2");
    }
}
