use crate::cli::ExtractArgs;
use crate::config::PartialExtractionConfig;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use confentropy::{
    core::{
        descriptors::table::TabulatedDescriptors, io::record::RecordWriter,
        models::record::MoleculeRecord,
    },
    engine::{error::SkipReason, progress::ProgressReporter},
    workflows::{self, corpus::BatchSummary},
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};

pub fn run(args: ExtractArgs) -> Result<()> {
    let partial_config = PartialExtractionConfig::load(&args)?;
    info!("Merging configuration from file and CLI arguments...");
    let settings = partial_config.merge_with_cli(&args)?;

    info!("Loading descriptor table from {:?}", &settings.descriptor_table);
    let provider = TabulatedDescriptors::load(&settings.descriptor_table)?;
    info!(entries = provider.len(), "Descriptor table loaded.");

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the corpus extraction workflow...");
    let result = workflows::corpus::run(&settings.extraction, &provider, &reporter)?;

    if result.records.is_empty() {
        warn!("Extraction completed but no molecule produced a record.");
    }

    match &settings.output {
        Some(path) => {
            info!("Writing {} record(s) to {:?}", result.records.len(), path);
            write_records(File::create(path)?, &settings.extraction.label, &result.records)?;
        }
        None => {
            let stdout = io::stdout();
            write_records(stdout.lock(), &settings.extraction.label, &result.records)?;
        }
    }

    eprint!("{}", render_summary(&result.summary, settings.output.as_deref()));
    Ok(())
}

fn write_records<W: Write>(sink: W, label: &str, records: &[MoleculeRecord]) -> Result<()> {
    let mut writer = RecordWriter::new(BufWriter::new(sink), label);
    for record in records {
        writer.write(record)?;
    }
    writer.flush()?;
    Ok(())
}

fn render_summary(summary: &BatchSummary, output: Option<&Path>) -> String {
    let mut text = format!(
        "Scanned {} molecule(s): {} record(s) written, {} skipped.\n",
        summary.discovered,
        summary.emitted,
        summary.skipped_total()
    );
    for reason in SkipReason::ALL {
        if let Some(count) = summary.skipped.get(&reason) {
            text.push_str(&format!("  {:>6}  {}\n", count, reason));
        }
    }
    if let Some(path) = output {
        text.push_str(&format!("✓ Records written to: {}\n", path.display()));
    }
    text
}
