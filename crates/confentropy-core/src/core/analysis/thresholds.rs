use crate::core::models::thermo::{ConformerEnergies, ENERGY_THRESHOLDS_KCAL_MOL, ThresholdCounts};

/// Tallies, for each threshold, how many conformers lie strictly below it.
///
/// Every conformer is tested against every threshold independently, so one conformer
/// contributes to all counters whose threshold exceeds its energy. Non-finite energies
/// never satisfy a threshold.
pub fn count_below_thresholds(energies: &ConformerEnergies) -> ThresholdCounts {
    let mut counts = [0usize; 6];
    for energy in energies.iter() {
        for (count, &threshold) in counts.iter_mut().zip(ENERGY_THRESHOLDS_KCAL_MOL.iter()) {
            if energy < threshold {
                *count += 1;
            }
        }
    }
    ThresholdCounts::from_counts(counts)
}
