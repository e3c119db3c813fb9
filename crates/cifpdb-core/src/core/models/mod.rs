//! Data structures shared by both conversion directions: individual atom
//! records, aggregated structure-level metadata, and the chain-bundle
//! partitioning produced for oversized structures.

pub mod atom;
pub mod bundle;
pub mod meta;
