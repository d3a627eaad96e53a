pub mod config;
mod orchestrator;
mod types;

pub use config::{DecodeConfig, DecoderKind};
pub use orchestrator::{build_decoder, run_decode, run_decode_reported};
pub use types::{DecodeSummary, PipelineStage, ProgressReporter};
