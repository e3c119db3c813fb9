//! Generates a minimal `_atom_site` loop from a scanned PDB file.
//!
//! The loop's column set is conditional: optional categories (alternate
//! locations, insertion codes, occupancies, B-factors, model numbers,
//! elements, formal charges) appear only when the source file carried data
//! for them somewhere, as recorded by the [`PdbStructure`] presence flags.
//! Atom serials are renumbered over the emitted rows, so a chain filter
//! produces a gap-free file.

use crate::core::io::pdb::{PdbAtom, PdbStructure};
use crate::core::models::atom::GroupKind;

/// Renders the structure as an mmCIF fragment with a single `_atom_site`
/// loop. A non-empty `chains` list restricts output to those chain ids.
pub fn render_cif(structure: &PdbStructure, chains: &[String]) -> String {
    let mut out = String::new();
    out.push_str(&format!("data_{}\n# \n", structure.pdb_id));
    out.push_str(&format!("_entry.id   {}\n# \n", structure.pdb_id));
    out.push_str("loop_\n");
    for tag in column_tags(structure) {
        out.push_str("_atom_site.");
        out.push_str(tag);
        out.push_str(" \n");
    }
    let mut serial = 0usize;
    for atom in structure
        .atoms
        .iter()
        .filter(|a| chains.is_empty() || chains.iter().any(|c| *c == a.chain_id))
    {
        serial += 1;
        out.push_str(&row(structure, atom, serial));
        out.push('\n');
    }
    out.push_str("# \n");
    out
}

fn column_tags(structure: &PdbStructure) -> Vec<&'static str> {
    let mut tags = vec![
        "group_PDB",
        "id",
        "label_atom_id",
        "label_comp_id",
        "auth_asym_id",
        "auth_seq_id",
        "Cartn_x",
        "Cartn_y",
        "Cartn_z",
    ];
    if structure.has_occupancy {
        tags.push("occupancy");
    }
    if structure.has_b_factor {
        tags.push("B_iso_or_equiv");
    }
    if structure.multi_model {
        tags.push("pdbx_PDB_model_num");
    }
    if structure.has_element {
        tags.push("type_symbol");
    }
    if structure.has_charge {
        tags.push("pdbx_formal_charge");
    }
    tags.push("label_asym_id");
    tags.push("label_seq_id");
    if structure.has_alt_loc {
        tags.push("label_alt_id");
    }
    if structure.has_insert_code {
        tags.push("pdbx_PDB_ins_code");
    }
    tags
}

fn row(structure: &PdbStructure, atom: &PdbAtom, serial: usize) -> String {
    let mut fields = vec![
        match atom.group {
            GroupKind::Atom => "ATOM".to_string(),
            GroupKind::Hetatm => "HETATM".to_string(),
        },
        serial.to_string(),
        quote_name(&atom.name),
        or_dot(&atom.res_name),
        or_dot(&atom.chain_id),
        or_dot(&atom.seq_id),
        or_dot(&atom.x),
        or_dot(&atom.y),
        or_dot(&atom.z),
    ];
    if structure.has_occupancy {
        fields.push(or_unknown(&atom.occupancy));
    }
    if structure.has_b_factor {
        fields.push(or_unknown(&atom.b_factor));
    }
    if structure.multi_model {
        fields.push(atom.model.clone());
    }
    if structure.has_element {
        fields.push(or_dot(&atom.element));
    }
    if structure.has_charge {
        fields.push(or_unknown(&atom.charge));
    }
    fields.push(or_dot(&atom.chain_id));
    fields.push(match atom.group {
        GroupKind::Atom => or_dot(&atom.seq_id),
        GroupKind::Hetatm => ".".to_string(),
    });
    if structure.has_alt_loc {
        fields.push(or_dot(&atom.alt_loc));
    }
    if structure.has_insert_code {
        fields.push(or_dot(&atom.insert_code));
    }
    fields.join(" ")
}

/// A name holding a quote character would break whitespace tokenization, so
/// it is wrapped in the other quote kind.
fn quote_name(name: &str) -> String {
    if name.contains('\'') {
        format!("\"{name}\"")
    } else if name.contains('"') {
        format!("'{name}'")
    } else {
        or_dot(name)
    }
}

fn or_dot(value: &str) -> String {
    if value.is_empty() {
        ".".to_string()
    } else {
        value.to_string()
    }
}

fn or_unknown(value: &str) -> String {
    if value.is_empty() {
        "?".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
HEADER    HYDROLASE                               02-MAY-98   1ABC
ATOM      1  N   MET A   1      27.340  24.430   2.614  1.00  9.67           N
ATOM      2  O5'   U B   1      26.266  25.413   2.842  1.00 10.38           O
HETATM    3  O   HOH A 201      10.000  11.000  12.000  1.00 20.00           O
";

    fn sample_structure() -> PdbStructure {
        PdbStructure::parse(SAMPLE).unwrap()
    }

    #[test]
    fn loop_carries_only_columns_the_file_populates() {
        let cif = render_cif(&sample_structure(), &[]);
        assert!(cif.starts_with("data_1ABC\n# \n_entry.id   1ABC\n# \nloop_\n"));
        assert!(cif.contains("_atom_site.occupancy \n"));
        assert!(cif.contains("_atom_site.type_symbol \n"));
        assert!(!cif.contains("_atom_site.label_alt_id"));
        assert!(!cif.contains("_atom_site.pdbx_PDB_ins_code"));
        assert!(!cif.contains("_atom_site.pdbx_PDB_model_num"));
        assert!(cif.ends_with("# \n"));
    }

    #[test]
    fn heterogens_get_no_label_sequence_number() {
        let cif = render_cif(&sample_structure(), &[]);
        let rows: Vec<&str> = cif
            .lines()
            .filter(|l| l.starts_with("ATOM") || l.starts_with("HETATM"))
            .collect();
        assert_eq!(rows[0], "ATOM 1 N MET A 1 27.340 24.430 2.614 1.00 9.67 N A 1");
        assert_eq!(
            rows[2],
            "HETATM 3 O HOH A 201 10.000 11.000 12.000 1.00 20.00 O A ."
        );
    }

    #[test]
    fn primed_atom_names_are_quoted() {
        let cif = render_cif(&sample_structure(), &[]);
        assert!(cif.contains(" \"O5'\" "));
    }

    #[test]
    fn chain_filter_renumbers_the_surviving_rows() {
        let cif = render_cif(&sample_structure(), &["B".to_string()]);
        let rows: Vec<&str> = cif
            .lines()
            .filter(|l| l.starts_with("ATOM") || l.starts_with("HETATM"))
            .collect();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].starts_with("ATOM 1 \"O5'\" U B 1 "));
    }

    #[test]
    fn multiple_models_add_the_model_column() {
        let input = "\
MODEL        1
ATOM      1  N   MET A   1      27.340  24.430   2.614  1.00  9.67           N
ENDMDL
MODEL        2
ATOM      1  N   MET A   1      27.000  24.000   2.000  1.00  9.67           N
ENDMDL
";
        let structure = PdbStructure::parse(input).unwrap();
        let cif = render_cif(&structure, &[]);
        assert!(cif.contains("_atom_site.pdbx_PDB_model_num \n"));
        assert!(cif.contains("ATOM 2 N MET A 1 27.000 24.000 2.000 1.00 9.67 2 N A 1"));
    }
}
