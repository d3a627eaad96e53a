//! The decoder pool: where worker threads get their input fields and hand
//! back finished frames.

pub mod memory;
mod ordering;

use std::sync::atomic::{AtomicBool, Ordering};

use crate::frame::{DecodedFrame, InputField, VideoParameters};

pub use memory::MemoryPool;
pub use ordering::FrameReorderer;

/// A batch of consecutive input fields handed to one worker.
///
/// `fields[start_index..end_index]` are the field pairs to decode; fields
/// outside that range are look-behind / look-ahead context.
#[derive(Clone, Debug)]
pub struct InputBatch {
    /// Index of the first frame to be decoded from this batch.
    pub start_frame_number: usize,
    pub fields: Vec<InputField>,
    pub start_index: usize,
    pub end_index: usize,
}

impl InputBatch {
    /// Number of frames the batch should produce.
    pub fn frame_count(&self) -> usize {
        (self.end_index - self.start_index) / 2
    }
}

/// Source of input fields and sink for decoded frames, shared by all the
/// worker threads of one run.
pub trait DecoderPool: Send + Sync {
    /// Next batch of input, or `None` when the input is exhausted (or the
    /// pool has been aborted). May block.
    fn get_input_frames(&self) -> Option<InputBatch>;

    /// Hand back decoded frames starting at `start_frame_number`.
    ///
    /// Returns `false` if the pool has been aborted or the frames could not
    /// be written; the caller must then stop.
    fn put_output_frames(&self, start_frame_number: usize, frames: Vec<DecodedFrame>) -> bool;
}

/// Cancellation flag shared by a run's worker threads.
#[derive(Debug, Default)]
pub struct AbortFlag(AtomicBool);

impl AbortFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Hands out frame ranges in order, `batch_frames` at a time.
#[derive(Clone, Debug)]
pub(crate) struct BatchPlanner {
    next_frame: usize,
    end_frame: usize,
    batch_frames: usize,
    look_behind: usize,
    look_ahead: usize,
}

impl BatchPlanner {
    pub(crate) fn new(
        start_frame: usize,
        end_frame: usize,
        batch_frames: usize,
        look_behind: usize,
        look_ahead: usize,
    ) -> Self {
        Self {
            next_frame: start_frame,
            end_frame,
            batch_frames: batch_frames.max(1),
            look_behind,
            look_ahead,
        }
    }

    /// Claim the next frame range `[start, end)`.
    pub(crate) fn next_range(&mut self) -> Option<(usize, usize)> {
        if self.next_frame >= self.end_frame {
            return None;
        }
        let start = self.next_frame;
        let end = (start + self.batch_frames).min(self.end_frame);
        self.next_frame = end;
        Some((start, end))
    }

    /// Assemble a batch for frames `[start, end)`, with context frames
    /// either side. `field_at` returns the field for a field number, or
    /// `None` past either end of the input; missing fields become blank
    /// padding at the black level.
    pub(crate) fn assemble(
        &self,
        params: &VideoParameters,
        start: usize,
        end: usize,
        mut field_at: impl FnMut(usize) -> Option<InputField>,
    ) -> InputBatch {
        let first_frame = start as isize - self.look_behind as isize;
        let last_frame = (end + self.look_ahead) as isize;
        let black = params.black_16b_ire.clamp(0, u16::MAX as i32) as u16;

        let mut fields = Vec::with_capacity((last_frame - first_frame) as usize * 2);
        for frame in first_frame..last_frame {
            for half in 0..2 {
                let field_number = frame * 2 + half;
                let field = if field_number < 0 {
                    None
                } else {
                    field_at(field_number as usize)
                };
                fields.push(field.unwrap_or_else(|| {
                    InputField::blank(params, field_number.max(0) as usize, black)
                }));
            }
        }

        let start_index = self.look_behind * 2;
        InputBatch {
            start_frame_number: start,
            fields,
            start_index,
            end_index: start_index + (end - start) * 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planner_splits_range_into_batches() {
        let mut planner = BatchPlanner::new(2, 9, 3, 0, 0);
        assert_eq!(planner.next_range(), Some((2, 5)));
        assert_eq!(planner.next_range(), Some((5, 8)));
        assert_eq!(planner.next_range(), Some((8, 9)));
        assert_eq!(planner.next_range(), None);
    }

    #[test]
    fn test_abort_flag_starts_clear() {
        let flag = AbortFlag::new();
        assert!(!flag.is_set());
        flag.set();
        assert!(flag.is_set());
    }
}
