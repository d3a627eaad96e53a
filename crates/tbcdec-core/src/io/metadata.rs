use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TbcError};
use crate::frame::{FieldMetadata, VideoParameters};

/// Capture metadata stored alongside a `.tbc` file.
///
/// ```toml
/// [video]
/// system = "ntsc"
/// field_width = 910
/// field_height = 263
/// active_video_start = 134
/// active_video_end = 894
/// first_active_frame_line = 40
/// last_active_frame_line = 525
/// black_16b_ire = 15360
/// white_16b_ire = 51200
///
/// [[fields]]
/// seq_no = 1
/// is_first_field = true
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataFile {
    #[serde(default)]
    pub fields: Vec<FieldMetadata>,
    pub video: VideoParameters,
}

impl MetadataFile {
    pub fn parse(contents: &str) -> Result<Self> {
        let metadata: Self =
            toml::from_str(contents).map_err(|e| TbcError::Metadata(e.to_string()))?;
        metadata.video.validate()?;
        Ok(metadata)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| TbcError::Metadata(e.to_string()))
    }
}

/// Read just the video parameters from a metadata file.
pub fn load_video_parameters(path: &Path) -> Result<VideoParameters> {
    Ok(MetadataFile::load(path)?.video)
}
