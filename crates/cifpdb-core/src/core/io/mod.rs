//! Parsing, formatting, and record-writing for both conversion directions.
//!
//! The [`cif`] submodule hosts the mmCIF category/loop parser, its
//! column-resolution dictionaries, and the reverse-direction `_atom_site`
//! writer. The [`pdb`] submodule hosts the chain bundler, the fixed-column
//! bundle writer, and the presence scanner for PDB input. Shared fixed-width
//! numeric formatting lives in [`format`].

pub mod cif;
pub mod format;
pub mod pdb;

/// One rendered output file, named but not yet written anywhere.
///
/// The core never touches the filesystem; the driver decides where these
/// land and whether they are compressed on the way out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub name: String,
    pub content: String,
}
