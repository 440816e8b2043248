use crate::cli::ExtractArgs;
use crate::error::{CliError, Result};
use confentropy::engine::config::{ExtractionConfig, ExtractionConfigBuilder};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialCorpusConfig {
    root: Option<PathBuf>,
    ensemble_suffix: Option<String>,
    thermo_suffix: Option<String>,
    structure_extension: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialDescriptorsConfig {
    table: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOutputConfig {
    label: Option<String>,
    path: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialExtractionConfig {
    corpus: Option<PartialCorpusConfig>,
    descriptors: Option<PartialDescriptorsConfig>,
    output: Option<PartialOutputConfig>,
}

/// Fully merged settings for one `extract` run.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractSettings {
    pub extraction: ExtractionConfig,
    pub descriptor_table: PathBuf,
    /// `None` writes to standard output.
    pub output: Option<PathBuf>,
}

impl PartialExtractionConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the file named by `--config`, or starts empty when none is given.
    pub fn load(args: &ExtractArgs) -> Result<Self> {
        match &args.config {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn merge_with_cli(mut self, args: &ExtractArgs) -> Result<ExtractSettings> {
        self.apply_set_values(&args.set_values)?;

        let corpus = self.corpus.take().unwrap_or_default();
        let descriptors = self.descriptors.take().unwrap_or_default();
        let output = self.output.take().unwrap_or_default();

        let root = args.corpus.clone().or(corpus.root).ok_or_else(|| {
            CliError::Config(
                "A corpus root is required either as `corpus.root` or via --corpus.".to_string(),
            )
        })?;
        let label = args.label.clone().or(output.label).ok_or_else(|| {
            CliError::Config(
                "A run label is required either as `output.label` or via --label.".to_string(),
            )
        })?;
        let descriptor_table = args
            .descriptors
            .clone()
            .or(descriptors.table)
            .ok_or_else(|| {
                CliError::Config(
                    "A descriptor table is required either as `descriptors.table` or via --descriptors."
                        .to_string(),
                )
            })?;

        let mut builder = ExtractionConfigBuilder::new().corpus_root(root).label(label);
        if let Some(suffix) = args.ensemble_suffix.clone().or(corpus.ensemble_suffix) {
            builder = builder.ensemble_suffix(suffix);
        }
        if let Some(suffix) = args.thermo_suffix.clone().or(corpus.thermo_suffix) {
            builder = builder.thermo_suffix(suffix);
        }
        if let Some(ext) = args
            .structure_extension
            .clone()
            .or(corpus.structure_extension)
        {
            builder = builder.structure_extension(ext);
        }
        let extraction = builder
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        Ok(ExtractSettings {
            extraction,
            descriptor_table,
            output: args.output.clone().or(output.path),
        })
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };
            let value = value.to_string();

            match key {
                "corpus.root" => {
                    self.corpus.get_or_insert_with(Default::default).root = Some(value.into());
                }
                "corpus.ensemble-suffix" => {
                    self.corpus
                        .get_or_insert_with(Default::default)
                        .ensemble_suffix = Some(value);
                }
                "corpus.thermo-suffix" => {
                    self.corpus.get_or_insert_with(Default::default).thermo_suffix = Some(value);
                }
                "corpus.structure-extension" => {
                    self.corpus
                        .get_or_insert_with(Default::default)
                        .structure_extension = Some(value);
                }
                "descriptors.table" => {
                    self.descriptors.get_or_insert_with(Default::default).table =
                        Some(value.into());
                }
                "output.label" => {
                    self.output.get_or_insert_with(Default::default).label = Some(value);
                }
                "output.path" => {
                    self.output.get_or_insert_with(Default::default).path = Some(value.into());
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}
