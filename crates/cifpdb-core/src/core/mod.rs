//! # Core Module
//!
//! The fundamental building blocks of the conversion engine.
//!
//! ## Architecture
//!
//! - **Structure Representation** ([`models`]) - Atom records, aggregated
//!   per-structure metadata, and the chain-bundle partitioning types
//! - **File I/O** ([`io`]) - The mmCIF category/loop parser, fixed-width
//!   formatters, the chain bundler, and the record writers for both
//!   directions of conversion
//!
//! The conversion pipeline is strictly forward: input text is scanned once,
//! all derived tables are held in memory for the duration of one conversion,
//! and everything is dropped when the output files have been rendered. There
//! is no shared state between conversions, so independent files may be
//! converted concurrently by the caller without further coordination.

pub mod io;
pub mod models;
