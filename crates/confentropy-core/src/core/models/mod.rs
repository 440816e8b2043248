//! # Core Models Module
//!
//! This module contains the data structures that flow through the extraction pipeline,
//! from the parsed molecular structure to the final flat record.
//!
//! ## Key Components
//!
//! - [`element`] - Static element data (atomic numbers and masses) keyed by symbol
//! - [`atom`] - Individual atom representation with element symbol and coordinates
//! - [`topology`] - Bond connectivity and bond orders
//! - [`molecule`] - A complete molecular structure plus its identity within a corpus
//! - [`thermo`] - Thermodynamic quantities extracted from simulation logs
//! - [`descriptors`] - The fixed-order descriptor vector supplied for each molecule
//! - [`record`] - The final per-molecule record

pub mod atom;
pub mod descriptors;
pub mod element;
pub mod molecule;
pub mod record;
pub mod thermo;
pub mod topology;
