use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for '{parameter}': {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },
}

/// File naming convention of a corpus with one directory per molecule.
///
/// Each directory holds `<base><ensemble_suffix>` (the ensemble log),
/// `<base><thermo_suffix>` (the thermodynamic log) and
/// `<base><structure_extension>` (the structure file).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusLayout {
    pub ensemble_suffix: String,
    pub thermo_suffix: String,
    pub structure_extension: String,
}

impl Default for CorpusLayout {
    fn default() -> Self {
        Self {
            ensemble_suffix: ".out.gz".to_string(),
            thermo_suffix: "-vib.out.gz".to_string(),
            structure_extension: ".sdf".to_string(),
        }
    }
}

impl CorpusLayout {
    /// Derives the molecule base name from an ensemble log file name.
    ///
    /// Returns `None` for files that are not ensemble logs, including thermodynamic logs
    /// whose suffix also ends in the ensemble suffix.
    pub fn base_name<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        if file_name.ends_with(&self.thermo_suffix) {
            return None;
        }
        file_name
            .strip_suffix(&self.ensemble_suffix)
            .filter(|base| !base.is_empty())
    }

    pub fn thermo_file_name(&self, base: &str) -> String {
        format!("{}{}", base, self.thermo_suffix)
    }

    pub fn structure_file_name(&self, base: &str) -> String {
        format!("{}{}", base, self.structure_extension)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |parameter, reason: &str| ConfigError::InvalidParameter {
            parameter,
            reason: reason.to_string(),
        };
        if self.ensemble_suffix.is_empty() {
            return Err(invalid("ensemble_suffix", "must not be empty"));
        }
        if self.thermo_suffix.is_empty() {
            return Err(invalid("thermo_suffix", "must not be empty"));
        }
        if self.thermo_suffix == self.ensemble_suffix {
            return Err(invalid("thermo_suffix", "must differ from the ensemble suffix"));
        }
        if self.structure_extension.is_empty() {
            return Err(invalid("structure_extension", "must not be empty"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionConfig {
    pub corpus_root: PathBuf,
    /// Run label written as the first column of every record.
    pub label: String,
    pub layout: CorpusLayout,
}

#[derive(Default)]
pub struct ExtractionConfigBuilder {
    corpus_root: Option<PathBuf>,
    label: Option<String>,
    ensemble_suffix: Option<String>,
    thermo_suffix: Option<String>,
    structure_extension: Option<String>,
}

impl ExtractionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn corpus_root(mut self, path: PathBuf) -> Self {
        self.corpus_root = Some(path);
        self
    }
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
    pub fn ensemble_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.ensemble_suffix = Some(suffix.into());
        self
    }
    pub fn thermo_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.thermo_suffix = Some(suffix.into());
        self
    }
    pub fn structure_extension(mut self, extension: impl Into<String>) -> Self {
        self.structure_extension = Some(extension.into());
        self
    }

    pub fn build(self) -> Result<ExtractionConfig, ConfigError> {
        let defaults = CorpusLayout::default();
        let layout = CorpusLayout {
            ensemble_suffix: self.ensemble_suffix.unwrap_or(defaults.ensemble_suffix),
            thermo_suffix: self.thermo_suffix.unwrap_or(defaults.thermo_suffix),
            structure_extension: self
                .structure_extension
                .unwrap_or(defaults.structure_extension),
        };
        layout.validate()?;

        Ok(ExtractionConfig {
            corpus_root: self
                .corpus_root
                .ok_or(ConfigError::MissingParameter("corpus_root"))?,
            label: self.label.ok_or(ConfigError::MissingParameter("label"))?,
            layout,
        })
    }
}
