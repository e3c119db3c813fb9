//! PDBx/mmCIF parsing and writing.
//!
//! Reading follows the shape of the format itself: a quote-aware line
//! splitter ([`line`]), a category/loop state machine that resolves
//! multi-line `;`-delimited values ([`tracker`]), per-category column
//! dictionaries ([`fields`]), and a single-pass record assembler
//! ([`reader`]) that aggregates everything into a [`CifStructure`]. The
//! reverse direction writes a single conditional `_atom_site` loop
//! ([`writer`]).

pub mod fields;
pub mod line;
pub mod reader;
pub mod tracker;
pub mod writer;

pub use reader::CifStructure;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CifError {
    #[error("empty structure")]
    EmptyStructure,
    #[error("parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: CifParseErrorKind,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CifParseErrorKind {
    #[error("data row for {category} ended at end of file ({have} of {want} values)")]
    UnterminatedRow {
        category: &'static str,
        have: usize,
        want: usize,
    },
    #[error("multi-line text field is never closed")]
    UnterminatedText,
}
