use crate::core::models::record::MoleculeRecord;
use std::io::Write;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes molecule records as header-less comma-separated lines, each prefixed with the
/// run label.
pub struct RecordWriter<W: Write> {
    writer: csv::Writer<W>,
    label: String,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(inner: W, label: impl Into<String>) -> Self {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .flexible(false)
            .from_writer(inner);
        Self {
            writer,
            label: label.into(),
        }
    }

    pub fn write(&mut self, record: &MoleculeRecord) -> Result<(), RecordError> {
        let mut fields = Vec::with_capacity(1 + 6 + 37 + 6);
        fields.push(self.label.clone());
        fields.extend(record.fields());
        self.writer.write_record(&fields)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), RecordError> {
        self.writer.flush()?;
        Ok(())
    }

    /// Flushes and returns the underlying writer.
    pub fn into_inner(self) -> Result<W, RecordError> {
        self.writer
            .into_inner()
            .map_err(|e| RecordError::Io(e.into_error()))
    }
}
