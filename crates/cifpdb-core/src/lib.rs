//! # cifpdb Core Library
//!
//! A conversion engine between the PDBx/mmCIF text format and the legacy
//! fixed-column PDB format, in both directions.
//!
//! Structures deposited today routinely exceed the PDB format's hard limits
//! (5-digit atom serial numbers, single-character chain identifiers drawn
//! from a 62-symbol alphabet). This library makes such structures
//! representable by partitioning them into a set of "bundle" PDB files with
//! a deterministic chain-id remapping, and recovers header, citation, cell,
//! and coordinate information from the richer, self-describing mmCIF format.
//!
//! ## Architectural Philosophy
//!
//! The library is split into two layers:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`AtomRecord`,
//!   `StructureMeta`, `ChainBundle`), the mmCIF category/loop parser and its
//!   column-resolution dictionaries, the fixed-width formatters, and the
//!   chain-bundling algorithm. Everything here operates on in-memory text;
//!   no file paths, processes, or streams appear at this layer.
//!
//! - **[`workflows`]: The Public API.** Ties the core components together
//!   into complete conversions: mmCIF in, bundle files out (and the reverse).
//!   Callers hand in the full input text and receive named output files as
//!   plain strings, leaving actual I/O to the surrounding driver.

pub mod core;
pub mod workflows;
