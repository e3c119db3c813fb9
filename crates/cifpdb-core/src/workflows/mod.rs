//! # Workflows Module
//!
//! Complete conversions assembled from the core components. Each function
//! takes the full input text and returns named output files; reading and
//! writing actual files is left to the caller.

use thiserror::Error;

use crate::core::io::OutputFile;
use crate::core::io::cif::{self, CifError, CifStructure};
use crate::core::io::pdb::{self, PdbError, PdbStructure};

/// Errors surfaced by a conversion, in either direction.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Cif(#[from] CifError),
    #[error(transparent)]
    Pdb(#[from] PdbError),
}

/// Knobs for the mmCIF-to-PDB direction.
#[derive(Debug, Clone, Default)]
pub struct BundleOptions {
    /// Convert `_entity_poly_seq` into SEQRES records.
    pub seqres: bool,
    /// Output file name prefix, replacing the entry id.
    pub prefix: Option<String>,
}

/// Converts one mmCIF file into its set of bundle PDB files plus the
/// chain-id mapping table (always the last element of the returned list).
pub fn cif_to_pdb_bundles(
    content: &str,
    options: &BundleOptions,
) -> Result<Vec<OutputFile>, ConvertError> {
    let mut structure = CifStructure::parse(content, options.seqres)?;
    if let Some(prefix) = &options.prefix {
        structure.pdb_id = prefix.clone();
    }
    let plan = pdb::bundler::plan_bundles(&structure.chains);
    Ok(pdb::writer::render_bundles(&structure, &plan))
}

/// Converts one PDB file into a single mmCIF file carrying a conditional
/// `_atom_site` loop. A non-empty `chains` list restricts the output to
/// those chains; the surviving rows are renumbered from 1.
pub fn pdb_to_cif(content: &str, chains: &[String]) -> Result<OutputFile, ConvertError> {
    let structure = PdbStructure::parse(content)?;
    Ok(OutputFile {
        name: format!("{}.cif", structure.pdb_id.to_lowercase()),
        content: cif::writer::render_cif(&structure, chains),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CIF: &str = "\
data_1abc
#
loop_
_atom_site.group_PDB
_atom_site.id
_atom_site.type_symbol
_atom_site.label_atom_id
_atom_site.label_alt_id
_atom_site.label_comp_id
_atom_site.label_seq_id
_atom_site.pdbx_PDB_ins_code
_atom_site.Cartn_x
_atom_site.Cartn_y
_atom_site.Cartn_z
_atom_site.occupancy
_atom_site.B_iso_or_equiv
_atom_site.auth_seq_id
_atom_site.auth_asym_id
ATOM 1 N N . MET 1 ? 27.340 24.430 2.614 1.00 9.67 1 AB
ATOM 2 C CA . MET 1 ? 26.266 25.413 2.842 1.00 10.38 1 AB
#
";

    const PDB: &str = "\
HEADER    HYDROLASE                               02-MAY-98   1ABC
ATOM      1  N   MET A   1      27.340  24.430   2.614  1.00  9.67           N
";

    #[test]
    fn cif_conversion_yields_bundles_then_the_mapping_table() {
        let files = cif_to_pdb_bundles(CIF, &BundleOptions::default()).unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].name, "1abc-pdb-bundle1.pdb");
        assert_eq!(files[1].name, "1abc-chain-id-mapping.txt");
        assert!(files[0].content.contains("TER "));
    }

    #[test]
    fn prefix_overrides_the_entry_id_in_file_names() {
        let options = BundleOptions {
            prefix: Some("renamed".to_string()),
            ..BundleOptions::default()
        };
        let files = cif_to_pdb_bundles(CIF, &options).unwrap();
        assert_eq!(files[0].name, "renamed-pdb-bundle1.pdb");
        assert!(files[1].content.contains("renamed-pdb-bundle1.pdb:"));
    }

    #[test]
    fn pdb_conversion_names_the_output_after_the_entry() {
        let file = pdb_to_cif(PDB, &[]).unwrap();
        assert_eq!(file.name, "1abc.cif");
        assert!(file.content.starts_with("data_1ABC\n"));
    }

    #[test]
    fn parse_failures_surface_as_conversion_errors() {
        assert!(matches!(
            cif_to_pdb_bundles("data_none\n#\n", &BundleOptions::default()),
            Err(ConvertError::Cif(CifError::EmptyStructure))
        ));
        assert!(matches!(
            pdb_to_cif("REMARK nothing here\n", &[]),
            Err(ConvertError::Pdb(PdbError::EmptyStructure))
        ));
    }
}
