use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_BATCH_FRAMES;
use crate::error::{Result, TbcError};
use crate::frame::OutputFormat;

/// Which decoder to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecoderKind {
    #[default]
    Mono,
}

impl std::fmt::Display for DecoderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mono => write!(f, "Mono"),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DecodeConfig {
    /// Raw `.tbc` input file.
    pub input: PathBuf,
    /// Raw output file.
    pub output: PathBuf,
    /// Capture metadata; defaults to the input path with `.toml` appended.
    #[serde(default)]
    pub metadata: Option<PathBuf>,
    #[serde(default)]
    pub decoder: DecoderKind,
    #[serde(default)]
    pub output_format: OutputFormat,
    #[serde(default = "default_chroma_gain")]
    pub chroma_gain: f64,
    /// Luma noise reduction threshold in IRE (0 = off).
    #[serde(default)]
    pub luma_nr_level: f64,
    /// Worker threads; defaults to the available parallelism.
    #[serde(default)]
    pub threads: Option<usize>,
    #[serde(default = "default_batch_frames")]
    pub batch_frames: usize,
    /// First frame to decode (0-based).
    #[serde(default)]
    pub start_frame: usize,
    /// Number of frames to decode; all remaining frames if absent.
    #[serde(default)]
    pub length: Option<usize>,
}

fn default_chroma_gain() -> f64 {
    1.0
}

fn default_batch_frames() -> usize {
    DEFAULT_BATCH_FRAMES
}

impl DecodeConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            metadata: None,
            decoder: DecoderKind::default(),
            output_format: OutputFormat::default(),
            chroma_gain: default_chroma_gain(),
            luma_nr_level: 0.0,
            threads: None,
            batch_frames: default_batch_frames(),
            start_frame: 0,
            length: None,
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(contents).map_err(|e| TbcError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Path of the capture metadata file.
    pub fn metadata_path(&self) -> PathBuf {
        match &self.metadata {
            Some(path) => path.clone(),
            None => {
                let mut path = self.input.clone().into_os_string();
                path.push(".toml");
                PathBuf::from(path)
            }
        }
    }

    /// Number of worker threads to start.
    pub fn thread_count(&self) -> usize {
        self.threads.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.batch_frames == 0 {
            return Err(TbcError::InvalidConfig("batch_frames must be at least 1".into()));
        }
        if self.threads == Some(0) {
            return Err(TbcError::InvalidConfig("threads must be at least 1".into()));
        }
        if !self.chroma_gain.is_finite() || self.chroma_gain < 0.0 {
            return Err(TbcError::InvalidConfig(format!(
                "chroma_gain {} must be a non-negative number",
                self.chroma_gain
            )));
        }
        if !self.luma_nr_level.is_finite() || self.luma_nr_level < 0.0 {
            return Err(TbcError::InvalidConfig(format!(
                "luma_nr_level {} must be a non-negative number",
                self.luma_nr_level
            )));
        }
        Ok(())
    }
}
