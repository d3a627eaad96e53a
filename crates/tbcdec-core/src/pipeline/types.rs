use crate::frame::OutputFormat;

use super::config::DecoderKind;

/// Decode run stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    LoadingMetadata,
    Configuring,
    Decoding,
    Finishing,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LoadingMetadata => write!(f, "Loading metadata"),
            Self::Configuring => write!(f, "Configuring decoder"),
            Self::Decoding => write!(f, "Decoding frames"),
            Self::Finishing => write!(f, "Flushing output"),
        }
    }
}

/// Thread-safe progress reporting for a decode run.
///
/// `advance` is called from worker threads as frames are written. All
/// methods default to no-ops.
pub trait ProgressReporter: Send + Sync {
    /// A stage has started. `total_items` is the number of frames in this
    /// stage, if known.
    fn begin_stage(&self, _stage: PipelineStage, _total_items: Option<usize>) {}

    /// `items_done` frames of the current stage are complete.
    fn advance(&self, _items_done: usize) {}

    fn finish_stage(&self) {}
}

pub(super) struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}

/// What a decode run produced.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodeSummary {
    pub decoder: DecoderKind,
    pub output_format: OutputFormat,
    pub output_width: i32,
    pub output_height: i32,
    pub top_pad_lines: i32,
    pub bottom_pad_lines: i32,
    pub threads: usize,
    pub frames_written: usize,
}
