use crate::core::analysis::thresholds::count_below_thresholds;
use crate::core::descriptors::DescriptorProvider;
use crate::core::io::ensemble::EnsembleReport;
use crate::core::io::sdf::SdfFile;
use crate::core::io::thermo::ThermoReport;
use crate::core::io::traits::LogReport;
use crate::core::models::molecule::MoleculeIdentity;
use crate::core::models::record::MoleculeRecord;
use crate::engine::assemble::{RecordParts, assemble};
use crate::engine::config::CorpusLayout;
use crate::engine::error::{MoleculeError, SkipReason};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// The files belonging to one molecule of the corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoleculeJob {
    /// Molecule base name, the ensemble log file name without its suffix.
    pub base: String,
    pub file_name: String,
    pub ensemble_path: PathBuf,
    pub thermo_path: PathBuf,
    pub structure_path: PathBuf,
}

impl MoleculeJob {
    /// Builds the job for an ensemble log, or `None` if `ensemble_path` is not one.
    pub fn from_ensemble_path(ensemble_path: &Path, layout: &CorpusLayout) -> Option<Self> {
        let file_name = ensemble_path.file_name()?.to_str()?;
        let base = layout.base_name(file_name)?;
        let dir = ensemble_path.parent().unwrap_or_else(|| Path::new(""));

        Some(Self {
            base: base.to_string(),
            file_name: file_name.to_string(),
            ensemble_path: ensemble_path.to_path_buf(),
            thermo_path: dir.join(layout.thermo_file_name(base)),
            structure_path: dir.join(layout.structure_file_name(base)),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MoleculeOutcome {
    Emitted(MoleculeRecord),
    Skipped(SkipReason),
}

/// Runs the full per-molecule pipeline. Every per-molecule failure becomes a skip.
#[instrument(skip_all, name = "extract_molecule", fields(molecule = %job.base))]
pub fn extract_molecule<P>(job: &MoleculeJob, provider: &P) -> MoleculeOutcome
where
    P: DescriptorProvider + ?Sized,
{
    match try_extract(job, provider) {
        Ok(Some(record)) => MoleculeOutcome::Emitted(record),
        Ok(None) => {
            debug!("Ensemble entropy absent or zero; skipping.");
            MoleculeOutcome::Skipped(SkipReason::EntropyNotComputed)
        }
        Err(err) => {
            debug!(error = %err, "Skipping molecule.");
            MoleculeOutcome::Skipped(err.skip_reason())
        }
    }
}

fn try_extract<P>(
    job: &MoleculeJob,
    provider: &P,
) -> Result<Option<MoleculeRecord>, MoleculeError>
where
    P: DescriptorProvider + ?Sized,
{
    if !job.structure_path.is_file() {
        return Err(MoleculeError::MissingStructure(job.structure_path.clone()));
    }
    let structure =
        SdfFile::read_from_path(&job.structure_path).map_err(|source| MoleculeError::Structure {
            path: job.structure_path.clone(),
            source,
        })?;
    let described = provider.describe(&MoleculeIdentity::new(job.base.as_str(), structure))?;

    let entropy = ThermoReport::read_entropy_or_zero(&job.thermo_path);

    let ensemble = EnsembleReport::read_from_path(&job.ensemble_path).map_err(|source| {
        MoleculeError::EnsembleLog {
            path: job.ensemble_path.clone(),
            source,
        }
    })?;
    let counts = count_below_thresholds(&ensemble.energies);

    Ok(assemble(RecordParts {
        file_name: job.file_name.clone(),
        described,
        ensemble_entropy: ensemble.ensemble_entropy,
        entropy,
        counts,
    }))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::descriptors::{DescribedMolecule, DescriptorError};
    use crate::core::models::descriptors::MolecularDescriptors;
    use crate::core::models::thermo::EntropyTriple;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::fs;
    use std::io::Write;
    use tempfile::TempDir;

    pub(crate) const METHANE_SDF: &str = "\
methane
  generated

  5  4  0  0  0  0  0  0  0  0999 V2000
    0.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0
    0.6290    0.6290    0.6290 H   0  0  0  0  0  0  0  0  0  0  0  0
   -0.6290   -0.6290    0.6290 H   0  0  0  0  0  0  0  0  0  0  0  0
   -0.6290    0.6290   -0.6290 H   0  0  0  0  0  0  0  0  0  0  0  0
    0.6290   -0.6290   -0.6290 H   0  0  0  0  0  0  0  0  0  0  0  0
  1  2  1  0
  1  3  1  0
  1  4  1  0
  1  5  1  0
M  END
$$$$
";

    pub(crate) fn ensemble_log(entropy: &str, energies: &[f64]) -> String {
        let mut text = String::from(" CREST conformer search\n");
        text.push_str(&format!(
            " number of unique conformers for further calc      {}\n",
            energies.len()
        ));
        for (i, energy) in energies.iter().enumerate() {
            text.push_str(&format!(" {}   {:.3}   -46.45893\n", i + 1, energy));
        }
        text.push_str(&format!(
            " ensemble entropy (J/mol K, cal/mol K) :   {entropy}   2.949\n"
        ));
        text
    }

    pub(crate) const THERMO_LOG: &str = "\
   temp. (K)  partition function   enthalpy   heat capacity  entropy
  298.15  VIB   412.3             2345.6      22.3      2.0      8.4
          ROT   0.123E+06          888.9      2.981     1.0      4.2
          TR    0.456E+27         1481.2      4.968     3.0     12.6
";

    pub(crate) fn write_gz(path: &Path, text: &str) {
        let mut encoder = GzEncoder::new(fs::File::create(path).unwrap(), Compression::default());
        encoder.write_all(text.as_bytes()).unwrap();
        encoder.finish().unwrap();
    }

    /// Describes every molecule as "C" unless its key is listed as uncanonicalizable.
    pub(crate) struct FixedProvider {
        pub(crate) rejected: Vec<&'static str>,
    }

    impl DescriptorProvider for FixedProvider {
        fn describe(
            &self,
            identity: &MoleculeIdentity,
        ) -> Result<DescribedMolecule, DescriptorError> {
            if self.rejected.contains(&identity.key.as_str()) {
                return Err(DescriptorError::Canonicalization {
                    key: identity.key.clone(),
                    reason: "rejected".to_string(),
                });
            }
            Ok(DescribedMolecule {
                canonical: "C".to_string(),
                descriptors: MolecularDescriptors {
                    atom_count: identity.structure.atom_count(),
                    ..MolecularDescriptors::default()
                },
            })
        }
    }

    fn accept_all() -> FixedProvider {
        FixedProvider { rejected: vec![] }
    }

    fn job_in(dir: &Path, base: &str) -> MoleculeJob {
        let path = dir.join(format!("{base}.out.gz"));
        MoleculeJob::from_ensemble_path(&path, &CorpusLayout::default()).unwrap()
    }

    #[test]
    fn job_derives_companion_paths() {
        let job = job_in(Path::new("/corpus/m1"), "methane");
        assert_eq!(job.base, "methane");
        assert_eq!(job.file_name, "methane.out.gz");
        assert_eq!(job.thermo_path, Path::new("/corpus/m1/methane-vib.out.gz"));
        assert_eq!(job.structure_path, Path::new("/corpus/m1/methane.sdf"));

        let thermo = Path::new("/corpus/m1/methane-vib.out.gz");
        assert!(MoleculeJob::from_ensemble_path(thermo, &CorpusLayout::default()).is_none());
    }

    #[test]
    fn complete_molecule_is_emitted() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("methane.sdf"), METHANE_SDF).unwrap();
        write_gz(
            &dir.path().join("methane.out.gz"),
            &ensemble_log("12.34", &[0.5, 1.5, 2.5]),
        );
        write_gz(&dir.path().join("methane-vib.out.gz"), THERMO_LOG);

        let outcome = extract_molecule(&job_in(dir.path(), "methane"), &accept_all());
        let MoleculeOutcome::Emitted(record) = outcome else {
            panic!("expected an emitted record");
        };
        assert_eq!(record.file_name, "methane.out.gz");
        assert_eq!(record.canonical, "C");
        assert_eq!(record.ensemble_entropy, 12.34);
        assert!((record.entropy.vibrational - 8.368).abs() < 1e-9);
        assert!((record.entropy.translational - 12.552).abs() < 1e-9);
        assert_eq!(record.descriptors.atom_count, 5);
        assert_eq!(record.counts.as_array(), &[1, 2, 3, 3, 3, 3]);
    }

    #[test]
    fn missing_thermo_log_is_zero_filled() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("methane.sdf"), METHANE_SDF).unwrap();
        write_gz(
            &dir.path().join("methane.out.gz"),
            &ensemble_log("5.0", &[0.1]),
        );

        let outcome = extract_molecule(&job_in(dir.path(), "methane"), &accept_all());
        let MoleculeOutcome::Emitted(record) = outcome else {
            panic!("expected an emitted record");
        };
        assert_eq!(record.entropy, EntropyTriple::default());
        assert_eq!(record.counts.as_array(), &[1, 1, 1, 1, 1, 1]);
    }

    #[test]
    fn zero_entropy_is_skipped() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("methane.sdf"), METHANE_SDF).unwrap();
        write_gz(
            &dir.path().join("methane.out.gz"),
            &ensemble_log("0.0", &[0.1]),
        );

        let outcome = extract_molecule(&job_in(dir.path(), "methane"), &accept_all());
        assert_eq!(
            outcome,
            MoleculeOutcome::Skipped(SkipReason::EntropyNotComputed)
        );
    }

    #[test]
    fn missing_structure_is_skipped() {
        let dir = TempDir::new().unwrap();
        write_gz(
            &dir.path().join("methane.out.gz"),
            &ensemble_log("12.34", &[0.1]),
        );

        let outcome = extract_molecule(&job_in(dir.path(), "methane"), &accept_all());
        assert_eq!(outcome, MoleculeOutcome::Skipped(SkipReason::MissingStructure));
    }

    #[test]
    fn canonicalization_failure_is_skipped() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("methane.sdf"), METHANE_SDF).unwrap();
        write_gz(
            &dir.path().join("methane.out.gz"),
            &ensemble_log("12.34", &[0.1]),
        );

        let provider = FixedProvider {
            rejected: vec!["methane"],
        };
        let outcome = extract_molecule(&job_in(dir.path(), "methane"), &provider);
        assert_eq!(outcome, MoleculeOutcome::Skipped(SkipReason::Canonicalization));
    }

    #[test]
    fn truncated_conformer_table_is_skipped() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("methane.sdf"), METHANE_SDF).unwrap();
        let text = " number of unique conformers for further calc      4\n 1   0.100   -46.4\n";
        write_gz(&dir.path().join("methane.out.gz"), text);

        let outcome = extract_molecule(&job_in(dir.path(), "methane"), &accept_all());
        assert_eq!(
            outcome,
            MoleculeOutcome::Skipped(SkipReason::MalformedEnsembleLog)
        );
    }
}
