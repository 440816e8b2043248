use super::cursor::LineCursor;
use super::fields::{LogError, LogField, Marker};
use super::traits::LogReport;
use crate::core::models::thermo::ConformerEnergies;
use std::io::BufRead;

/// Total conformational entropy of the ensemble, e.g.
/// `ensemble entropy (J/mol K, cal/mol K) :   84.123   20.106`.
pub const ENSEMBLE_ENTROPY: LogField =
    LogField::new("ensemble entropy", Marker::Phrase("ensemble entropy"), 7);

/// Size of the conformer table that immediately follows, e.g.
/// `number of unique conformers for further calc   12`.
pub const UNIQUE_CONFORMERS: LogField = LogField::new(
    "number of unique conformers",
    Marker::Phrase("number of unique conformers"),
    7,
);

/// Relative energy column of a conformer table row.
pub const RELATIVE_ENERGY: LogField = LogField::new("relative energy", Marker::Any, 1);

/// What the conformer-ensemble log reports about a molecule.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EnsembleReport {
    /// The last ensemble entropy value in the log, if the log reports one.
    pub ensemble_entropy: Option<f64>,
    /// Relative conformer energies (kcal/mol) from every conformer table, in log order.
    pub energies: ConformerEnergies,
}

impl LogReport for EnsembleReport {
    type Error = LogError;

    fn read_from(reader: &mut impl BufRead) -> Result<Self, Self::Error> {
        let mut report = EnsembleReport::default();
        let mut cursor = LineCursor::new(reader);

        while let Some(line) = cursor.next_line()? {
            let line_num = cursor.line_number();

            if ENSEMBLE_ENTROPY.matches(&line) {
                report.ensemble_entropy = Some(ENSEMBLE_ENTROPY.extract(&line, line_num)?);
            }

            if UNIQUE_CONFORMERS.matches(&line) {
                let count: usize = UNIQUE_CONFORMERS.extract(&line, line_num)?;
                for (row_num, row) in cursor.take_lines(count)? {
                    report.energies.push(RELATIVE_ENERGY.extract(&row, row_num)?);
                }
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(text: &str) -> Result<EnsembleReport, LogError> {
        EnsembleReport::read_from(&mut Cursor::new(text))
    }

    const LOG: &str = "\
 CREST conformer search
 T /K                                  :   298.15
 number of unique conformers for further calc            3
 1   0.500   -46.45893
 2   1.500   -46.45734
 3   2.500   -46.45570
 ensemble average energy (kcal)        :    0.316
 ensemble entropy (J/mol K, cal/mol K) :   12.34   2.949
 ensemble free energy (kcal/mol)       :   -0.879
";

    #[test]
    fn extracts_entropy_and_conformer_energies() {
        let report = parse(LOG).unwrap();
        assert_eq!(report.ensemble_entropy, Some(12.34));
        assert_eq!(report.energies.as_slice(), &[0.5, 1.5, 2.5]);
    }

    #[test]
    fn missing_entropy_marker_yields_none() {
        let report = parse(
            " number of unique conformers for further calc  1\n 1  0.000  -1.0\n",
        )
        .unwrap();
        assert_eq!(report.ensemble_entropy, None);
        assert_eq!(report.energies.len(), 1);
    }

    #[test]
    fn empty_log_yields_empty_report() {
        assert_eq!(parse("").unwrap(), EnsembleReport::default());
    }

    #[test]
    fn table_consumes_exactly_declared_rows() {
        // The row after the table would be a malformed energy if it were consumed.
        let text = "\
 number of unique conformers for further calc 2
 1  0.1
 2  0.2
 trailing text that is not a table row
 3  9.9
";
        let report = parse(text).unwrap();
        assert_eq!(report.energies.as_slice(), &[0.1, 0.2]);
    }

    #[test]
    fn zero_conformers_consumes_nothing() {
        let text = "\
 number of unique conformers for further calc 0
 ensemble entropy (J/mol K, cal/mol K) :   5.5   1.3
";
        let report = parse(text).unwrap();
        assert!(report.energies.is_empty());
        assert_eq!(report.ensemble_entropy, Some(5.5));
    }

    #[test]
    fn table_rows_are_not_scanned_for_markers() {
        let text = "\
 number of unique conformers for further calc 1
 1  0.0  ensemble entropy x x x x 99.0
";
        let report = parse(text).unwrap();
        assert_eq!(report.ensemble_entropy, None);
        assert_eq!(report.energies.as_slice(), &[0.0]);
    }

    #[test]
    fn repeated_tables_append_and_last_entropy_wins() {
        let text = "\
 ensemble entropy (J/mol K, cal/mol K) :   1.0   0.2
 number of unique conformers for further calc 1
 1  0.0
 number of unique conformers for further calc 1
 1  3.0
 ensemble entropy (J/mol K, cal/mol K) :   2.0   0.5
";
        let report = parse(text).unwrap();
        assert_eq!(report.energies.as_slice(), &[0.0, 3.0]);
        assert_eq!(report.ensemble_entropy, Some(2.0));
    }

    #[test]
    fn truncated_table_is_an_error() {
        let text = " number of unique conformers for further calc 3\n 1  0.0\n";
        let err = parse(text).unwrap_err();
        assert!(matches!(
            err,
            LogError::UnexpectedEof {
                expected: 3,
                consumed: 1,
                ..
            }
        ));
    }

    #[test]
    fn oversized_declared_count_is_a_truncation_error() {
        let text = " number of unique conformers for further calc 18446744073709551615\n 1 0.0\n";
        let err = parse(text).unwrap_err();
        assert!(matches!(
            err,
            LogError::UnexpectedEof {
                consumed: 1,
                line: 2,
                ..
            }
        ));
    }

    #[test]
    fn malformed_table_row_is_an_error() {
        let text = " number of unique conformers for further calc 1\n 1  abc\n";
        let err = parse(text).unwrap_err();
        assert!(matches!(
            err,
            LogError::InvalidValue {
                field: "relative energy",
                line: 2,
                ..
            }
        ));
    }

    #[test]
    fn short_table_row_is_an_error() {
        let text = " number of unique conformers for further calc 1\n\n";
        let err = parse(text).unwrap_err();
        assert!(matches!(err, LogError::MissingToken { position: 2, .. }));
    }

    #[test]
    fn malformed_entropy_value_is_an_error() {
        let text = " ensemble entropy (J/mol K, cal/mol K) :   ****   ****\n";
        assert!(matches!(
            parse(text).unwrap_err(),
            LogError::InvalidValue {
                field: "ensemble entropy",
                ..
            }
        ));
    }

    #[test]
    fn reads_gzip_compressed_log_from_path() {
        use flate2::{Compression, write::GzEncoder};
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mol.out.gz");
        let mut encoder =
            GzEncoder::new(std::fs::File::create(&path).unwrap(), Compression::default());
        encoder.write_all(LOG.as_bytes()).unwrap();
        encoder.finish().unwrap();

        let report = EnsembleReport::read_from_path(&path).unwrap();
        assert_eq!(report.ensemble_entropy, Some(12.34));
        assert_eq!(report.energies.len(), 3);
    }

    #[test]
    fn missing_log_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = EnsembleReport::read_from_path(dir.path().join("absent.out.gz")).unwrap_err();
        assert!(matches!(err, LogError::Io(_)));
    }
}
