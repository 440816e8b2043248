use crate::core::descriptors::DescribedMolecule;
use crate::core::models::record::MoleculeRecord;
use crate::core::models::thermo::{EntropyTriple, ThresholdCounts};

/// Everything gathered for one molecule before the emit decision.
#[derive(Debug, Clone)]
pub struct RecordParts {
    pub file_name: String,
    pub described: DescribedMolecule,
    pub ensemble_entropy: Option<f64>,
    pub entropy: EntropyTriple,
    pub counts: ThresholdCounts,
}

/// Combines the parts into a record, or `None` when the ensemble entropy is absent or
/// exactly zero.
pub fn assemble(parts: RecordParts) -> Option<MoleculeRecord> {
    let ensemble_entropy = parts.ensemble_entropy.filter(|&s| s != 0.0)?;

    Some(MoleculeRecord {
        file_name: parts.file_name,
        canonical: parts.described.canonical,
        ensemble_entropy,
        entropy: parts.entropy,
        descriptors: parts.described.descriptors,
        counts: parts.counts,
    })
}
