use crate::core::models::atom::Atom;
use crate::core::models::molecule::Molecule;
use crate::core::models::topology::{Bond, BondOrder};
use nalgebra::Point3;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdfError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: SdfParseErrorKind },
    #[error("Unsupported molfile version: {0}")]
    UnsupportedVersion(String),
    #[error("Structure block ended before {0} were complete")]
    Truncated(&'static str),
}

#[derive(Debug, Error)]
pub enum SdfParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },
    #[error("Atom symbol in columns 32-34 is empty")]
    MissingSymbol,
    #[error("Unsupported bond type code {0}")]
    UnsupportedBondType(u8),
    #[error("Bond references atom {index}, but only {atom_count} atoms are declared")]
    AtomOutOfRange { index: usize, atom_count: usize },
    #[error("Malformed charge property line")]
    InvalidChargeProperty,
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end.min(line.len()))
        .unwrap_or("")
        .trim()
}

fn parse_int<T: std::str::FromStr>(
    line: &str,
    line_num: usize,
    start: usize,
    end: usize,
) -> Result<T, SdfError> {
    let raw = slice_and_trim(line, start, end);
    raw.parse().map_err(|_| SdfError::Parse {
        line: line_num,
        kind: SdfParseErrorKind::InvalidInt {
            columns: format!("{}-{}", start + 1, end),
            value: raw.into(),
        },
    })
}

fn parse_float(line: &str, line_num: usize, start: usize, end: usize) -> Result<f64, SdfError> {
    let raw = slice_and_trim(line, start, end);
    raw.parse().map_err(|_| SdfError::Parse {
        line: line_num,
        kind: SdfParseErrorKind::InvalidFloat {
            columns: format!("{}-{}", start + 1, end),
            value: raw.into(),
        },
    })
}

/// Reader for MDL V2000 molfiles and the first record of SD files.
pub struct SdfFile;

impl SdfFile {
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Molecule, SdfError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    pub fn read_from(reader: &mut impl BufRead) -> Result<Molecule, SdfError> {
        let mut lines = reader.lines().enumerate().map(|(i, l)| l.map(|l| (i + 1, l)));
        let mut next = |what: &'static str| -> Result<(usize, String), SdfError> {
            lines.next().ok_or(SdfError::Truncated(what))?.map_err(SdfError::from)
        };

        let (_, name) = next("header")?;
        next("header")?;
        next("header")?;

        let (counts_num, counts) = next("counts line")?;
        if counts.contains("V3000") {
            return Err(SdfError::UnsupportedVersion("V3000".into()));
        }
        let atom_count: usize = parse_int(&counts, counts_num, 0, 3)?;
        let bond_count: usize = parse_int(&counts, counts_num, 3, 6)?;

        let mut atoms = Vec::with_capacity(atom_count);
        for _ in 0..atom_count {
            let (line_num, line) = next("atom block")?;
            let x = parse_float(&line, line_num, 0, 10)?;
            let y = parse_float(&line, line_num, 10, 20)?;
            let z = parse_float(&line, line_num, 20, 30)?;
            let symbol = slice_and_trim(&line, 31, 34);
            if symbol.is_empty() {
                return Err(SdfError::Parse {
                    line: line_num,
                    kind: SdfParseErrorKind::MissingSymbol,
                });
            }
            atoms.push(Atom::new(symbol, Point3::new(x, y, z)));
        }

        let mut bonds = Vec::with_capacity(bond_count);
        for _ in 0..bond_count {
            let (line_num, line) = next("bond block")?;
            let a1: usize = parse_int(&line, line_num, 0, 3)?;
            let a2: usize = parse_int(&line, line_num, 3, 6)?;
            let code: u8 = parse_int(&line, line_num, 6, 9)?;
            for index in [a1, a2] {
                if index == 0 || index > atom_count {
                    return Err(SdfError::Parse {
                        line: line_num,
                        kind: SdfParseErrorKind::AtomOutOfRange { index, atom_count },
                    });
                }
            }
            let order = BondOrder::from_mdl_code(code).ok_or(SdfError::Parse {
                line: line_num,
                kind: SdfParseErrorKind::UnsupportedBondType(code),
            })?;
            bonds.push(Bond::new(a1 - 1, a2 - 1, order));
        }

        // Properties block; a missing "M  END" is tolerated.
        for entry in lines {
            let (line_num, line) = entry?;
            if line.starts_with("M  END") || line.trim() == "$$$$" {
                break;
            }
            if line.starts_with("M  CHG") {
                apply_charges(&mut atoms, &line, line_num)?;
            }
        }

        Ok(Molecule::new(name.trim(), atoms, bonds))
    }
}

fn apply_charges(atoms: &mut [Atom], line: &str, line_num: usize) -> Result<(), SdfError> {
    let invalid = || SdfError::Parse {
        line: line_num,
        kind: SdfParseErrorKind::InvalidChargeProperty,
    };
    let tokens: Vec<&str> = line.split_whitespace().skip(3).collect();
    if tokens.len() % 2 != 0 {
        return Err(invalid());
    }
    for pair in tokens.chunks(2) {
        let index: usize = pair[0].parse().map_err(|_| invalid())?;
        let charge: i8 = pair[1].parse().map_err(|_| invalid())?;
        let atom = index
            .checked_sub(1)
            .and_then(|i| atoms.get_mut(i))
            .ok_or_else(invalid)?;
        atom.formal_charge = charge;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const METHANOL: &str = "\
methanol
  generated

  6  5  0  0  0  0  0  0  0  0999 V2000
   -0.3540    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0
    1.0560    0.0000    0.0000 O   0  0  0  0  0  0  0  0  0  0  0  0
    1.3800    0.9200    0.0000 H   0  0  0  0  0  0  0  0  0  0  0  0
   -0.7100    1.0200    0.0000 H   0  0  0  0  0  0  0  0  0  0  0  0
   -0.7100   -0.5100    0.8800 H   0  0  0  0  0  0  0  0  0  0  0  0
   -0.7100   -0.5100   -0.8800 H   0  0  0  0  0  0  0  0  0  0  0  0
  1  2  1  0
  2  3  1  0
  1  4  1  0
  1  5  1  0
  1  6  1  0
M  END
$$$$
";

    fn parse(text: &str) -> Result<Molecule, SdfError> {
        SdfFile::read_from(&mut Cursor::new(text))
    }

    #[test]
    fn reads_atoms_bonds_and_coordinates() {
        let mol = parse(METHANOL).unwrap();
        assert_eq!(mol.name(), "methanol");
        assert_eq!(mol.atom_count(), 6);
        assert_eq!(mol.bond_count(), 5);
        assert_eq!(mol.atoms()[1].symbol, "O");
        assert_eq!(mol.atoms()[1].position, Point3::new(1.056, 0.0, 0.0));
        assert_eq!(mol.bonds()[0], Bond::new(0, 1, BondOrder::Single));
        assert_eq!(mol.hydrogen_count(0), 3);
    }

    #[test]
    fn applies_charge_property_lines() {
        let text = METHANOL.replace("M  END", "M  CHG  2   1   1   2  -1\nM  END");
        let mol = parse(&text).unwrap();
        assert_eq!(mol.atoms()[0].formal_charge, 1);
        assert_eq!(mol.atoms()[1].formal_charge, -1);
    }

    #[test]
    fn rejects_v3000_molfiles() {
        let text = "x\n\n\n  0  0  0     0  0            999 V3000\n";
        assert!(matches!(
            parse(text).unwrap_err(),
            SdfError::UnsupportedVersion(_)
        ));
    }

    #[test]
    fn truncated_atom_block_is_an_error() {
        let text: String = METHANOL.lines().take(6).map(|l| format!("{l}\n")).collect();
        assert!(matches!(
            parse(&text).unwrap_err(),
            SdfError::Truncated("atom block")
        ));
    }

    #[test]
    fn bond_to_undeclared_atom_is_an_error() {
        let text = METHANOL.replace("  1  6  1  0", "  1  7  1  0");
        assert!(matches!(
            parse(&text).unwrap_err(),
            SdfError::Parse {
                line: 15,
                kind: SdfParseErrorKind::AtomOutOfRange {
                    index: 7,
                    atom_count: 6
                }
            }
        ));
    }

    #[test]
    fn invalid_coordinate_reports_columns() {
        let text = METHANOL.replace("   -0.3540", "   -0.3x40");
        match parse(&text).unwrap_err() {
            SdfError::Parse {
                line,
                kind: SdfParseErrorKind::InvalidFloat { columns, .. },
            } => {
                assert_eq!(line, 5);
                assert_eq!(columns, "1-10");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn read_from_path_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            SdfFile::read_from_path(dir.path().join("absent.sdf")).unwrap_err(),
            SdfError::Io(_)
        ));
    }
}
