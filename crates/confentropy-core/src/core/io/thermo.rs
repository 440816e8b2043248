use super::fields::{LogError, LogField, Marker};
use super::traits::LogReport;
use crate::core::models::thermo::{EntropyTriple, KCAL_TO_KJ};
use std::io::BufRead;
use std::path::Path;
use tracing::debug;

/// Header of the partition-function table; fields are only read after it.
pub const PARTITION_FUNCTION: Marker = Marker::Phrase("partition function");

/// `298.15  VIB  <q>  <H>  <Cp>  <S>`; entropy is the sixth token.
pub const VIBRATIONAL_ENTROPY: LogField =
    LogField::new("vibrational entropy", Marker::Token("VIB"), 5);

/// `ROT  <q>  <H>  <Cp>  <S>`; entropy is the fifth token.
pub const ROTATIONAL_ENTROPY: LogField =
    LogField::new("rotational entropy", Marker::Token("ROT"), 4);

/// `TR  <q>  <H>  <Cp>  <S>`; entropy is the fifth token.
pub const TRANSLATIONAL_ENTROPY: LogField =
    LogField::new("translational entropy", Marker::Token("TR"), 4);

/// Entropy components found in the partition-function block of a thermodynamic log,
/// already converted to kJ-based units.
///
/// A component is `None` when its line never appeared after the block header.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThermoReport {
    pub vibrational: Option<f64>,
    pub rotational: Option<f64>,
    pub translational: Option<f64>,
}

impl ThermoReport {
    pub fn entropy(&self) -> EntropyTriple {
        EntropyTriple::zero_filled(self.vibrational, self.rotational, self.translational)
    }

    /// Reads the entropy triple from a log, degrading to all zeros when the log is
    /// missing, unreadable or malformed.
    pub fn read_entropy_or_zero(path: &Path) -> EntropyTriple {
        match Self::read_from_path(path) {
            Ok(report) => report.entropy(),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Thermodynamic log unusable; zero-filling entropy.");
                EntropyTriple::default()
            }
        }
    }
}

impl LogReport for ThermoReport {
    type Error = LogError;

    fn read_from(reader: &mut impl BufRead) -> Result<Self, Self::Error> {
        let mut report = ThermoReport::default();
        let mut armed = false;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_num = index + 1;

            if PARTITION_FUNCTION.matches(&line) {
                armed = true;
            }
            if !armed {
                continue;
            }

            let kj = |field: &LogField| -> Result<Option<f64>, LogError> {
                Ok(Some(field.extract::<f64>(&line, line_num)? * KCAL_TO_KJ))
            };
            if VIBRATIONAL_ENTROPY.matches(&line) {
                report.vibrational = kj(&VIBRATIONAL_ENTROPY)?;
            }
            if ROTATIONAL_ENTROPY.matches(&line) {
                report.rotational = kj(&ROTATIONAL_ENTROPY)?;
            }
            if TRANSLATIONAL_ENTROPY.matches(&line) {
                report.translational = kj(&TRANSLATIONAL_ENTROPY)?;
            }
        }

        Ok(report)
    }
}
