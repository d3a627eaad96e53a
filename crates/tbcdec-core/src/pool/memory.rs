use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::frame::{DecodedFrame, InputField, VideoParameters};

use super::ordering::FrameReorderer;
use super::{AbortFlag, BatchPlanner, DecoderPool, InputBatch};

/// A pool over fields already held in memory, collecting the output frames
/// in frame order. Used by tests and by callers that decode in-process.
pub struct MemoryPool {
    params: VideoParameters,
    fields: Vec<InputField>,
    batch_frames: usize,
    abort: AbortFlag,
    state: Mutex<MemoryPoolState>,
}

struct MemoryPoolState {
    planner: BatchPlanner,
    reorder: FrameReorderer,
    output: Vec<DecodedFrame>,
}

impl MemoryPool {
    /// Pool over `fields` (two per frame), handing out `batch_frames`
    /// frames at a time. A trailing unpaired field is ignored.
    pub fn new(params: VideoParameters, fields: Vec<InputField>, batch_frames: usize) -> Self {
        let total_frames = fields.len() / 2;
        Self {
            params,
            fields,
            batch_frames,
            abort: AbortFlag::new(),
            state: Mutex::new(MemoryPoolState {
                planner: BatchPlanner::new(0, total_frames, batch_frames, 0, 0),
                reorder: FrameReorderer::new(0),
                output: Vec::with_capacity(total_frames),
            }),
        }
    }

    /// Include `look_behind` / `look_ahead` frames of context in each batch.
    pub fn with_context(mut self, look_behind: usize, look_ahead: usize) -> Self {
        let planner = BatchPlanner::new(
            0,
            self.frame_count(),
            self.batch_frames,
            look_behind,
            look_ahead,
        );
        self.state
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .planner = planner;
        self
    }

    /// Number of frames in the input.
    pub fn frame_count(&self) -> usize {
        self.fields.len() / 2
    }

    /// Stop handing out input and refuse further output.
    pub fn abort(&self) {
        self.abort.set();
    }

    pub fn is_aborted(&self) -> bool {
        self.abort.is_set()
    }

    /// Frames written so far, in order.
    pub fn frames_written(&self) -> usize {
        self.lock().output.len()
    }

    /// The ordered output frames.
    pub fn into_frames(self) -> Vec<DecodedFrame> {
        self.state
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .output
    }

    fn lock(&self) -> MutexGuard<'_, MemoryPoolState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DecoderPool for MemoryPool {
    fn get_input_frames(&self) -> Option<InputBatch> {
        if self.abort.is_set() {
            return None;
        }
        let mut state = self.lock();
        let (start, end) = state.planner.next_range()?;
        debug!(start, end, "Handing out input batch");
        Some(
            state
                .planner
                .assemble(&self.params, start, end, |n| self.fields.get(n).cloned()),
        )
    }

    fn put_output_frames(&self, start_frame_number: usize, frames: Vec<DecodedFrame>) -> bool {
        if self.abort.is_set() {
            return false;
        }
        let mut state = self.lock();
        let MemoryPoolState {
            reorder, output, ..
        } = &mut *state;
        reorder
            .push(start_frame_number, frames, |_, frame| {
                output.push(frame);
                Ok(())
            })
            .is_ok()
    }
}
