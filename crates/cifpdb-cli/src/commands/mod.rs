pub mod to_cif;
pub mod to_pdb;
