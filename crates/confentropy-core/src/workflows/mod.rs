//! # Workflows Module
//!
//! Entry points that run the extraction pipeline.
//!
//! - **Molecule Extraction** ([`extract`]) - Loads one molecule's structure and logs and
//!   decides whether it yields a record.
//! - **Corpus Extraction** ([`corpus`]) - Enumerates a corpus directory and extracts every
//!   molecule in it, in parallel when the `parallel` feature is enabled.

pub mod corpus;
pub mod extract;
