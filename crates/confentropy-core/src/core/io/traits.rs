use flate2::read::MultiGzDecoder;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Defines the interface for reports parsed out of a text log.
pub trait LogReport: Sized {
    /// The error type for parsing operations.
    type Error: Error + From<io::Error>;

    /// Parses the report from a buffered reader over the decompressed log text.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or a required field is malformed.
    fn read_from(reader: &mut impl BufRead) -> Result<Self, Self::Error>;

    /// Parses the report from a log file, decompressing it if it is gzip-compressed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, Self::Error> {
        let mut reader = open_text(path.as_ref())?;
        Self::read_from(&mut reader)
    }
}

/// Opens a log as buffered text. Files ending in `.gz` are decompressed transparently.
///
/// The returned reader owns the file handle, which is closed when it is dropped.
pub fn open_text(path: &Path) -> io::Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    let is_gzip = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));
    if is_gzip {
        let decoder = MultiGzDecoder::new(BufReader::new(file));
        Ok(Box::new(BufReader::new(decoder)))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}
