//! # Core Module
//!
//! Stateless building blocks of the extraction pipeline.
//!
//! - **Data Models** ([`models`]) - Molecules, thermodynamic quantities, descriptors and records
//! - **File I/O** ([`io`]) - Named-field log parsers, the structure reader and the record writer
//! - **Analysis** ([`analysis`]) - Energy threshold counts, graph patterns and shape descriptors
//! - **Descriptors** ([`descriptors`]) - The descriptor provider seam and its implementations

pub mod analysis;
pub mod descriptors;
pub mod io;
pub mod models;
