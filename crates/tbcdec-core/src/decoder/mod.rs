//! Decoder framework.
//!
//! Each decoder implements [`Decoder`], and has a matching worker type
//! implementing [`DecoderThread`]. The pool side calls
//! [`Decoder::configure`] with the input video parameters, then
//! [`Decoder::make_thread`] once per worker. Each worker fetches batches of
//! fields from the [`DecoderPool`] and hands decoded frames back until the
//! input runs out or the shared [`AbortFlag`] is set.
//!
//! State shared by all workers lives in the decoder's [`Configuration`],
//! behind an `Arc`; per-worker scratch buffers live in the thread value.

pub mod mono;

use std::sync::Arc;
use std::thread;

use tracing::{debug, error, info, warn};

use crate::error::{Result, TbcError};
use crate::frame::{DecodedFrame, InputField, OutputFormat, VideoParameters};
use crate::pool::{AbortFlag, DecoderPool};

pub use mono::MonoDecoder;

/// Parameters shared by a decoder and its threads. Fixed once
/// [`Decoder::configure`] has run.
#[derive(Clone, Debug)]
pub struct Configuration {
    /// Input parameters, with the active video region widened so the
    /// output width is a multiple of 8.
    pub video_parameters: VideoParameters,
    pub top_pad_lines: i32,
    pub bottom_pad_lines: i32,
    pub output_format: OutputFormat,
    /// Gain applied to the chroma components.
    pub chroma_gain: f64,
    /// Luma noise reduction threshold in IRE; 0 disables it.
    pub luma_nr_level: f64,
}

impl Configuration {
    pub fn new(output_format: OutputFormat) -> Self {
        Self {
            video_parameters: VideoParameters::default(),
            top_pad_lines: 0,
            bottom_pad_lines: 0,
            output_format,
            chroma_gain: 1.0,
            luma_nr_level: 0.0,
        }
    }

    pub fn with_chroma_gain(mut self, chroma_gain: f64) -> Self {
        self.chroma_gain = chroma_gain;
        self
    }

    pub fn with_luma_nr(mut self, level_ire: f64) -> Self {
        self.luma_nr_level = level_ire;
        self
    }

    pub fn first_active_line(&self) -> i32 {
        self.video_parameters.first_active_frame_line
    }

    pub fn last_active_line(&self) -> i32 {
        self.video_parameters.last_active_frame_line
    }

    /// Output frame width in pixels.
    pub fn output_width(&self) -> i32 {
        self.video_parameters.active_video_end - self.video_parameters.active_video_start
    }

    /// Output frame height in lines, padding included.
    pub fn output_height(&self) -> i32 {
        self.top_pad_lines
            + (self.last_active_line() - self.first_active_line())
            + self.bottom_pad_lines
    }
}

/// What every decoder provides to the pool.
pub trait Decoder: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Configure for the input video. Fails if the video is not compatible
    /// with this decoder.
    fn configure(&mut self, video_parameters: &VideoParameters) -> Result<()>;

    /// The configuration fixed by the last successful [`Decoder::configure`].
    fn configuration(&self) -> Option<&Configuration>;

    /// Frames of history (two fields each) a worker needs before the frame
    /// being decoded.
    fn look_behind(&self) -> usize {
        0
    }

    /// Frames of future context a worker needs after the frame being decoded.
    fn look_ahead(&self) -> usize {
        0
    }

    /// Build a worker. Fails if the decoder has not been configured.
    fn make_thread(
        &self,
        abort: Arc<AbortFlag>,
        pool: Arc<dyn DecoderPool>,
    ) -> Result<Box<dyn DecoderThread>>;
}

/// What a worker needs to talk to its pool.
#[derive(Clone)]
pub struct WorkerContext {
    pub abort: Arc<AbortFlag>,
    pub pool: Arc<dyn DecoderPool>,
}

/// A decoder worker.
pub trait DecoderThread: Send {
    fn context(&self) -> &WorkerContext;

    /// Decode the field pairs in `fields[start_index..end_index]`, pushing
    /// one frame per pair onto `output` in order. Always produces the whole
    /// batch; the abort flag is only checked between batches.
    ///
    /// Frame line `y` comes from the first field of the pair when `y` is
    /// even and from the second when it is odd, at field row `y / 2`.
    fn decode_frames(
        &mut self,
        fields: &[InputField],
        start_index: usize,
        end_index: usize,
        output: &mut Vec<DecodedFrame>,
    );

    /// Worker loop: fetch, decode, submit, until input runs out or the run
    /// is aborted. Returns the number of frames submitted.
    fn run(&mut self) -> usize {
        let ctx = self.context().clone();
        let mut submitted = 0;

        while !ctx.abort.is_set() {
            let Some(batch) = ctx.pool.get_input_frames() else {
                break;
            };

            let mut frames = Vec::with_capacity(batch.frame_count());
            self.decode_frames(&batch.fields, batch.start_index, batch.end_index, &mut frames);
            let count = frames.len();
            debug!(
                start_frame = batch.start_frame_number,
                frames = count,
                "Decoded batch"
            );

            if !ctx.pool.put_output_frames(batch.start_frame_number, frames) {
                warn!(
                    start_frame = batch.start_frame_number,
                    "Pool refused output, aborting run"
                );
                ctx.abort.set();
                break;
            }
            submitted += count;
        }

        submitted
    }
}

/// Outcome of [`run_decoder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub threads: usize,
    pub frames_submitted: usize,
    pub aborted: bool,
}

/// Run a configured decoder against `pool` on `threads` worker threads and
/// wait for them all to finish.
pub fn run_decoder(
    decoder: &dyn Decoder,
    pool: Arc<dyn DecoderPool>,
    threads: usize,
) -> Result<RunSummary> {
    let threads = threads.max(1);
    let abort = Arc::new(AbortFlag::new());

    let mut workers = (0..threads)
        .map(|_| decoder.make_thread(abort.clone(), pool.clone()))
        .collect::<Result<Vec<_>>>()?;

    info!(decoder = decoder.name(), threads, "Starting decoder threads");

    let frames_submitted = thread::scope(|scope| -> Result<usize> {
        let mut handles = Vec::with_capacity(threads);
        for (i, worker) in workers.iter_mut().enumerate() {
            let spawned = thread::Builder::new()
                .name(format!("{}-{i}", decoder.name()))
                .spawn_scoped(scope, move || worker.run());
            match spawned {
                Ok(handle) => handles.push(handle),
                Err(e) => {
                    abort.set();
                    return Err(TbcError::Io(e));
                }
            }
        }

        let mut total = 0;
        for handle in handles {
            match handle.join() {
                Ok(n) => total += n,
                Err(_) => {
                    error!("Decoder thread panicked");
                    abort.set();
                }
            }
        }
        Ok(total)
    })?;

    let aborted = abort.is_set();
    if aborted {
        warn!(frames_submitted, "Decode aborted");
    } else {
        info!(frames_submitted, "Decoder threads finished");
    }

    Ok(RunSummary {
        threads,
        frames_submitted,
        aborted,
    })
}
