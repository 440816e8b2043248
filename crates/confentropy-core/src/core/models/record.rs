use super::descriptors::{DescriptorValue, MolecularDescriptors};
use super::thermo::{EntropyTriple, ThresholdCounts};

/// The flat, emittable record for one molecule.
///
/// Records are only constructed by the record assembler, which guarantees a present,
/// non-zero ensemble entropy.
#[derive(Debug, Clone, PartialEq)]
pub struct MoleculeRecord {
    /// File name of the ensemble log the record was derived from.
    pub file_name: String,
    /// Canonical structure string supplied by the descriptor provider.
    pub canonical: String,
    pub ensemble_entropy: f64,
    pub entropy: EntropyTriple,
    pub descriptors: MolecularDescriptors,
    pub counts: ThresholdCounts,
}

impl MoleculeRecord {
    /// Renders every field after the run label, in output column order.
    pub fn fields(&self) -> Vec<String> {
        let mut fields = vec![
            self.file_name.clone(),
            self.canonical.clone(),
            DescriptorValue::Scalar(self.ensemble_entropy).to_string(),
            DescriptorValue::Scalar(self.entropy.vibrational).to_string(),
            DescriptorValue::Scalar(self.entropy.rotational).to_string(),
            DescriptorValue::Scalar(self.entropy.translational).to_string(),
        ];
        fields.extend(self.descriptors.values().iter().map(ToString::to_string));
        fields.extend(self.counts.as_array().iter().map(ToString::to_string));
        fields
    }
}
