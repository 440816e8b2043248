//! Thermodynamic quantities extracted from the simulation logs.

/// Conversion factor from kilocalorie-based to kilojoule-based units.
pub const KCAL_TO_KJ: f64 = 4.184;

/// Relative-energy cutoffs (kcal/mol) used to tally low-lying conformers.
pub const ENERGY_THRESHOLDS_KCAL_MOL: [f64; 6] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];

/// Vibrational, rotational and translational entropy contributions in kJ-based units.
///
/// Components that could not be extracted are zero; see [`EntropyTriple::zero_filled`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EntropyTriple {
    pub vibrational: f64,
    pub rotational: f64,
    pub translational: f64,
}

impl EntropyTriple {
    pub fn new(vibrational: f64, rotational: f64, translational: f64) -> Self {
        Self {
            vibrational,
            rotational,
            translational,
        }
    }

    /// Builds a triple from optionally-extracted components, substituting zero for any
    /// component that is absent.
    pub fn zero_filled(
        vibrational: Option<f64>,
        rotational: Option<f64>,
        translational: Option<f64>,
    ) -> Self {
        Self::new(
            vibrational.unwrap_or(0.0),
            rotational.unwrap_or(0.0),
            translational.unwrap_or(0.0),
        )
    }
}

/// Relative conformer energies in kcal/mol, in the order reported by the ensemble log.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConformerEnergies(Vec<f64>);

impl ConformerEnergies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, energy: f64) {
        self.0.push(energy);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }
}

impl From<Vec<f64>> for ConformerEnergies {
    fn from(energies: Vec<f64>) -> Self {
        Self(energies)
    }
}

impl Extend<f64> for ConformerEnergies {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

/// Number of conformers strictly below each of [`ENERGY_THRESHOLDS_KCAL_MOL`], in
/// ascending threshold order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThresholdCounts([usize; 6]);

impl ThresholdCounts {
    pub fn from_counts(counts: [usize; 6]) -> Self {
        Self(counts)
    }

    pub fn as_array(&self) -> &[usize; 6] {
        &self.0
    }

    /// Count for the threshold at `index` (0 for the 1 kcal/mol cutoff).
    pub fn get(&self, index: usize) -> Option<usize> {
        self.0.get(index).copied()
    }

    /// Pairs each count with its threshold.
    pub fn iter(&self) -> impl Iterator<Item = (f64, usize)> + '_ {
        ENERGY_THRESHOLDS_KCAL_MOL.iter().copied().zip(self.0.iter().copied())
    }
}
