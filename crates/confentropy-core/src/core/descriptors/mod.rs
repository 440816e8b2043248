//! The descriptor collaborator: everything derived from a molecule's structure rather
//! than from its simulation logs.
//!
//! The pipeline only fixes the order of the descriptor vector and the canonical structure
//! string it needs; how the values are obtained is up to a [`DescriptorProvider`].
//! [`table::TabulatedDescriptors`] serves values precomputed by an external
//! cheminformatics toolkit, filling structure-derivable gaps through
//! [`structure::StructuralDescriptors`].

pub mod structure;
pub mod table;

use crate::core::models::descriptors::MolecularDescriptors;
use crate::core::models::molecule::MoleculeIdentity;
use std::path::PathBuf;
use thiserror::Error;

/// The canonical structure string and descriptor vector of one molecule.
#[derive(Debug, Clone, PartialEq)]
pub struct DescribedMolecule {
    pub canonical: String,
    pub descriptors: MolecularDescriptors,
}

/// Supplies descriptors for a loaded molecule.
pub trait DescriptorProvider {
    /// Describes `identity`.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError::Canonicalization`] when no canonical structure string
    /// can be produced; the molecule is then skipped.
    fn describe(&self, identity: &MoleculeIdentity) -> Result<DescribedMolecule, DescriptorError>;
}

#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("Cannot canonicalize structure of '{key}': {reason}")]
    Canonicalization { key: String, reason: String },
    #[error("Unknown element '{symbol}' at atom {index}")]
    UnknownElement { symbol: String, index: usize },
    #[error("Descriptor table '{path}' is invalid: {source}")]
    Table {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("Descriptor table lists '{0}' more than once")]
    DuplicateEntry(String),
}
