use std::sync::Arc;

use tracing::{info, warn};

use crate::decoder::{run_decoder, Configuration, Decoder, MonoDecoder};
use crate::error::{Result, TbcError};
use crate::io::metadata::MetadataFile;
use crate::io::raw::{RawFilePool, RawPoolOptions};
use crate::pool::DecoderPool;

use super::config::{DecodeConfig, DecoderKind};
use super::types::{DecodeSummary, NoOpReporter, PipelineStage, ProgressReporter};

/// Build the decoder selected by `config`, not yet configured.
pub fn build_decoder(config: &DecodeConfig) -> Box<dyn Decoder> {
    let decoder_config = Configuration::new(config.output_format)
        .with_chroma_gain(config.chroma_gain)
        .with_luma_nr(config.luma_nr_level);
    match config.decoder {
        DecoderKind::Mono => Box::new(MonoDecoder::new(decoder_config)),
    }
}

/// Decode `config.input` into `config.output`, reporting progress.
pub fn run_decode_reported(
    config: &DecodeConfig,
    reporter: Arc<dyn ProgressReporter>,
) -> Result<DecodeSummary> {
    config.validate()?;

    reporter.begin_stage(PipelineStage::LoadingMetadata, None);
    let metadata_path = config.metadata_path();
    let metadata = MetadataFile::load(&metadata_path)?;
    info!(
        metadata = %metadata_path.display(),
        system = ?metadata.video.system,
        field_width = metadata.video.field_width,
        field_height = metadata.video.field_height,
        "Loaded capture metadata"
    );
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::Configuring, None);
    let mut decoder = build_decoder(config);
    decoder.configure(&metadata.video)?;
    let geometry = decoder
        .configuration()
        .cloned()
        .ok_or_else(|| {
            TbcError::InvalidConfig("decoder did not keep its configuration".into())
        })?;
    reporter.finish_stage();

    let options = RawPoolOptions {
        start_frame: config.start_frame,
        length: config.length,
        batch_frames: config.batch_frames,
        look_behind: decoder.look_behind(),
        look_ahead: decoder.look_ahead(),
    };
    let pool = Arc::new(
        RawFilePool::open(&config.input, &config.output, metadata.video, &options)?
            .with_field_metadata(metadata.fields)
            .with_reporter(reporter.clone()),
    );

    let threads = config.thread_count();
    reporter.begin_stage(PipelineStage::Decoding, Some(pool.frame_count()));
    let run = run_decoder(decoder.as_ref(), pool.clone() as Arc<dyn DecoderPool>, threads)?;
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::Finishing, None);
    let frames_written = pool.finish()?;
    reporter.finish_stage();

    if run.aborted || pool.is_aborted() {
        warn!(frames_written, "Decode stopped before the end of the input");
        return Err(TbcError::Aborted);
    }

    info!(
        frames_written,
        output = %config.output.display(),
        format = %config.output_format,
        "Decode complete"
    );

    Ok(DecodeSummary {
        decoder: config.decoder,
        output_format: config.output_format,
        output_width: geometry.output_width(),
        output_height: geometry.output_height(),
        top_pad_lines: geometry.top_pad_lines,
        bottom_pad_lines: geometry.bottom_pad_lines,
        threads: run.threads,
        frames_written,
    })
}

/// Decode without progress reporting.
pub fn run_decode(config: &DecodeConfig) -> Result<DecodeSummary> {
    run_decode_reported(config, Arc::new(NoOpReporter))
}
