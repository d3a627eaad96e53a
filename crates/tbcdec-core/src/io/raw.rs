use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};
use memmap2::Mmap;
use tracing::{debug, error, info, warn};

use crate::consts::DEFAULT_BATCH_FRAMES;
use crate::error::{Result, TbcError};
use crate::frame::{DecodedFrame, FieldMetadata, InputField, VideoParameters};
use crate::pipeline::ProgressReporter;
use crate::pool::{AbortFlag, BatchPlanner, DecoderPool, FrameReorderer, InputBatch};

/// Which frames to decode and how to batch them.
#[derive(Clone, Debug)]
pub struct RawPoolOptions {
    /// First frame to decode (0-based).
    pub start_frame: usize,
    /// Number of frames to decode; `None` runs to the end of the input.
    pub length: Option<usize>,
    pub batch_frames: usize,
    pub look_behind: usize,
    pub look_ahead: usize,
}

impl Default for RawPoolOptions {
    fn default() -> Self {
        Self {
            start_frame: 0,
            length: None,
            batch_frames: DEFAULT_BATCH_FRAMES,
            look_behind: 0,
            look_ahead: 0,
        }
    }
}

/// A pool reading fields from a raw `.tbc` file and writing frames to a raw
/// output file.
///
/// The input is a sequence of fields, each `field_width * field_height`
/// little-endian `u16` samples. Output frames are written little-endian in
/// frame order: Y, U, V planes one after the other for YUV444P16, or
/// interleaved R, G, B for RGB48.
pub struct RawFilePool {
    params: VideoParameters,
    input: Mmap,
    field_count: usize,
    field_metadata: Vec<FieldMetadata>,
    first_frame: usize,
    end_frame: usize,
    abort: AbortFlag,
    reporter: Option<Arc<dyn ProgressReporter>>,
    state: Mutex<RawPoolState>,
}

struct RawPoolState {
    planner: BatchPlanner,
    reorder: FrameReorderer,
    writer: BufWriter<File>,
}

impl RawFilePool {
    /// Map `input` and create `output`.
    pub fn open(
        input: &Path,
        output: &Path,
        params: VideoParameters,
        options: &RawPoolOptions,
    ) -> Result<Self> {
        params.validate()?;

        let file = File::open(input)?;
        let input_map = unsafe { Mmap::map(&file)? };

        let field_bytes = params.field_len() * 2;
        let field_count = input_map.len() / field_bytes;
        if input_map.len() % field_bytes != 0 {
            warn!(
                trailing_bytes = input_map.len() % field_bytes,
                "Input ends with a partial field, ignoring it"
            );
        }

        let total_frames = field_count / 2;
        if options.start_frame > total_frames {
            return Err(TbcError::InvalidConfig(format!(
                "start frame {} is past the end of the input ({total_frames} frames)",
                options.start_frame
            )));
        }
        let end_frame = match options.length {
            Some(length) => (options.start_frame + length).min(total_frames),
            None => total_frames,
        };

        let writer = BufWriter::new(File::create(output)?);

        info!(
            input = %input.display(),
            fields = field_count,
            first_frame = options.start_frame,
            end_frame,
            "Opened raw input"
        );

        Ok(Self {
            params,
            input: input_map,
            field_count,
            field_metadata: Vec::new(),
            first_frame: options.start_frame,
            end_frame,
            abort: AbortFlag::new(),
            reporter: None,
            state: Mutex::new(RawPoolState {
                planner: BatchPlanner::new(
                    options.start_frame,
                    end_frame,
                    options.batch_frames,
                    options.look_behind,
                    options.look_ahead,
                ),
                reorder: FrameReorderer::new(options.start_frame),
                writer,
            }),
        })
    }

    /// Attach the per-field records from the capture metadata.
    pub fn with_field_metadata(mut self, fields: Vec<FieldMetadata>) -> Self {
        self.field_metadata = fields;
        self
    }

    /// Report frames written as they leave the pool.
    pub fn with_reporter(mut self, reporter: Arc<dyn ProgressReporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Number of frames this pool will hand out.
    pub fn frame_count(&self) -> usize {
        self.end_frame - self.first_frame
    }

    /// Number of complete fields in the input file.
    pub fn field_count(&self) -> usize {
        self.field_count
    }

    pub fn is_aborted(&self) -> bool {
        self.abort.is_set()
    }

    /// Flush the output and return the number of frames written.
    pub fn finish(&self) -> Result<usize> {
        let mut state = self.lock();
        state.writer.flush()?;

        let pending = state.reorder.pending_frames();
        if pending > 0 {
            warn!(pending, "Frames still waiting for an earlier batch were dropped");
        }
        Ok(state.reorder.next_frame() - self.first_frame)
    }

    fn read_field(&self, field_number: usize) -> Option<InputField> {
        if field_number >= self.field_count {
            return None;
        }
        let field_bytes = self.params.field_len() * 2;
        let offset = field_number * field_bytes;
        let bytes = self.input.get(offset..offset + field_bytes)?;

        let mut data = vec![0u16; self.params.field_len()];
        LittleEndian::read_u16_into(bytes, &mut data);

        let metadata = self
            .field_metadata
            .get(field_number)
            .cloned()
            .unwrap_or_else(|| FieldMetadata {
                seq_no: field_number,
                is_first_field: field_number % 2 == 0,
                pad: false,
            });
        Some(InputField::new(metadata, data))
    }

    fn lock(&self) -> MutexGuard<'_, RawPoolState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DecoderPool for RawFilePool {
    fn get_input_frames(&self) -> Option<InputBatch> {
        if self.abort.is_set() {
            return None;
        }
        // Copy the fields outside the lock so readers don't serialise.
        let (start, end, planner) = {
            let mut state = self.lock();
            let (start, end) = state.planner.next_range()?;
            (start, end, state.planner.clone())
        };
        debug!(start, end, "Reading input batch");
        Some(planner.assemble(&self.params, start, end, |n| self.read_field(n)))
    }

    fn put_output_frames(&self, start_frame_number: usize, frames: Vec<DecodedFrame>) -> bool {
        if self.abort.is_set() {
            return false;
        }
        let mut state = self.lock();
        let RawPoolState {
            reorder, writer, ..
        } = &mut *state;

        match reorder.push(start_frame_number, frames, |_, frame| {
            write_frame(writer, &frame)
        }) {
            Ok(written) => {
                if written > 0 {
                    if let Some(reporter) = &self.reporter {
                        reporter.advance(reorder.next_frame() - self.first_frame);
                    }
                }
                true
            }
            Err(e) => {
                error!(error = %e, frame = reorder.next_frame(), "Writing output failed");
                self.abort.set();
                false
            }
        }
    }
}

/// Write one frame's planes, little-endian, row by row.
pub fn write_frame(writer: &mut impl Write, frame: &DecodedFrame) -> Result<()> {
    for plane in frame.planes() {
        for &sample in plane.iter() {
            writer.write_u16::<LittleEndian>(sample)?;
        }
    }
    Ok(())
}
