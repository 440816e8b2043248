use super::extract::{MoleculeJob, MoleculeOutcome, extract_molecule};
use crate::core::descriptors::DescriptorProvider;
use crate::core::models::record::MoleculeRecord;
use crate::engine::config::{CorpusLayout, ExtractionConfig};
use crate::engine::error::{EngineError, SkipReason};
use crate::engine::progress::{Progress, ProgressReporter};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Per-run tallies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub discovered: usize,
    pub emitted: usize,
    pub skipped: BTreeMap<SkipReason, usize>,
}

impl BatchSummary {
    pub fn skipped_total(&self) -> usize {
        self.skipped.values().sum()
    }

    fn record(&mut self, outcome: &MoleculeOutcome) {
        match outcome {
            MoleculeOutcome::Emitted(_) => self.emitted += 1,
            MoleculeOutcome::Skipped(reason) => *self.skipped.entry(*reason).or_default() += 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BatchResult {
    /// Emitted records in discovery order.
    pub records: Vec<MoleculeRecord>,
    pub summary: BatchSummary,
}

/// Enumerates every `<root>/<molecule dir>/<base><ensemble suffix>` file.
///
/// Jobs are sorted by ensemble log path so output order does not depend on the
/// filesystem.
pub fn discover(root: &Path, layout: &CorpusLayout) -> Result<Vec<MoleculeJob>, EngineError> {
    let corpus_error = |path: &Path| {
        let path = path.to_path_buf();
        move |source: io::Error| EngineError::Corpus { path, source }
    };

    let mut ensemble_paths: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(root).map_err(corpus_error(root))? {
        let dir = entry.map_err(corpus_error(root))?.path();
        if !dir.is_dir() {
            continue;
        }
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(directory = %dir.display(), error = %e, "Skipping unreadable molecule directory.");
                continue;
            }
        };
        ensemble_paths.extend(
            entries
                .filter_map(Result::ok)
                .map(|e| e.path())
                .filter(|p| p.is_file()),
        );
    }
    ensemble_paths.sort();

    Ok(ensemble_paths
        .iter()
        .filter_map(|path| MoleculeJob::from_ensemble_path(path, layout))
        .collect())
}

/// Processes every molecule under the corpus root.
///
/// Per-molecule failures are skipped and tallied; only an unreadable corpus root fails
/// the batch.
#[instrument(skip_all, name = "corpus_workflow", fields(root = %config.corpus_root.display()))]
pub fn run<P>(
    config: &ExtractionConfig,
    provider: &P,
    reporter: &ProgressReporter,
) -> Result<BatchResult, EngineError>
where
    P: DescriptorProvider + Sync + ?Sized,
{
    let jobs = discover(&config.corpus_root, &config.layout)?;
    info!(molecules = jobs.len(), "Corpus enumerated.");
    reporter.report(Progress::BatchStart {
        molecules: jobs.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = jobs.iter();

    #[cfg(feature = "parallel")]
    let iterator = jobs.par_iter();

    let outcomes: Vec<MoleculeOutcome> = iterator
        .map(|job| {
            let outcome = extract_molecule(job, provider);
            reporter.report(Progress::MoleculeDone {
                emitted: matches!(outcome, MoleculeOutcome::Emitted(_)),
            });
            outcome
        })
        .collect();

    let mut summary = BatchSummary {
        discovered: jobs.len(),
        ..BatchSummary::default()
    };
    let mut records = Vec::with_capacity(outcomes.len());
    for (job, outcome) in jobs.iter().zip(outcomes) {
        summary.record(&outcome);
        match outcome {
            MoleculeOutcome::Emitted(record) => records.push(record),
            MoleculeOutcome::Skipped(reason) => {
                debug!(molecule = %job.base, %reason, "Molecule skipped.");
            }
        }
    }

    reporter.report(Progress::BatchFinish);
    info!(
        emitted = summary.emitted,
        skipped = summary.skipped_total(),
        "Corpus extraction finished."
    );

    Ok(BatchResult { records, summary })
}
