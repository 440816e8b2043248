//! # confentropy
//!
//! Builds a per-molecule dataset from a corpus of conformer-search results. Each molecule
//! directory holds an ensemble log with the conformational entropy and the relative
//! energies of the unique conformers, a thermodynamic log with the vibrational, rotational
//! and translational entropy, and a structure file. Every molecule with a computed
//! ensemble entropy becomes one flat record.
//!
//! ## Layers
//!
//! - **[`core`]** - Data models, log and structure parsers, energy and shape analysis,
//!   and the descriptor provider seam.
//! - **[`engine`]** - Configuration, errors, progress reporting and the per-molecule emit
//!   decision.
//! - **[`workflows`]** - Single-molecule and whole-corpus extraction.

pub mod core;
pub mod engine;
pub mod workflows;
