//! PDB-side reading and writing.
//!
//! [`bundler`] decides how chains are split across output files so that no
//! file exceeds the format's 5-digit serial and single-character chain-id
//! limits; [`writer`] renders the bundle files and their chain-id mapping
//! table; [`reader`] scans PDB input for the reverse conversion.

pub mod bundler;
pub mod reader;
pub mod writer;

pub use reader::{PdbAtom, PdbStructure};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PdbError {
    #[error("empty structure")]
    EmptyStructure,
}
