use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use super::config::ConfigError;
use crate::core::descriptors::DescriptorError;
use crate::core::io::fields::LogError;
use crate::core::io::sdf::SdfError;

/// Failures that abort a whole batch.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Cannot read corpus directory '{path}': {source}")]
    Corpus {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failures confined to a single molecule, which is then skipped.
#[derive(Debug, Error)]
pub enum MoleculeError {
    #[error("Structure file not found: {0}")]
    MissingStructure(PathBuf),

    #[error("Failed to load structure '{path}': {source}")]
    Structure {
        path: PathBuf,
        #[source]
        source: SdfError,
    },

    #[error("Descriptor evaluation failed: {0}")]
    Descriptor(#[from] DescriptorError),

    #[error("Failed to parse ensemble log '{path}': {source}")]
    EnsembleLog {
        path: PathBuf,
        #[source]
        source: LogError,
    },
}

impl MoleculeError {
    pub fn skip_reason(&self) -> SkipReason {
        match self {
            MoleculeError::MissingStructure(_) => SkipReason::MissingStructure,
            MoleculeError::Structure { .. } => SkipReason::InvalidStructure,
            MoleculeError::Descriptor(DescriptorError::UnknownElement { .. }) => {
                SkipReason::UnknownElement
            }
            MoleculeError::Descriptor(_) => SkipReason::Canonicalization,
            MoleculeError::EnsembleLog { .. } => SkipReason::MalformedEnsembleLog,
        }
    }
}

/// Why a molecule produced no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SkipReason {
    MissingStructure,
    InvalidStructure,
    UnknownElement,
    Canonicalization,
    MalformedEnsembleLog,
    EntropyNotComputed,
}

impl SkipReason {
    pub const ALL: [SkipReason; 6] = [
        SkipReason::MissingStructure,
        SkipReason::InvalidStructure,
        SkipReason::UnknownElement,
        SkipReason::Canonicalization,
        SkipReason::MalformedEnsembleLog,
        SkipReason::EntropyNotComputed,
    ];
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkipReason::MissingStructure => "missing structure file",
            SkipReason::InvalidStructure => "unreadable structure file",
            SkipReason::UnknownElement => "element without mass data",
            SkipReason::Canonicalization => "descriptor evaluation failed",
            SkipReason::MalformedEnsembleLog => "malformed ensemble log",
            SkipReason::EntropyNotComputed => "ensemble entropy absent or zero",
        };
        f.write_str(text)
    }
}
