use std::collections::BTreeMap;

use crate::error::Result;
use crate::frame::DecodedFrame;

/// Holds batches that finish early until every frame before them has been
/// written, so frames leave in ascending order whatever order the workers
/// finish in.
#[derive(Debug, Default)]
pub struct FrameReorderer {
    next_frame: usize,
    pending: BTreeMap<usize, Vec<DecodedFrame>>,
}

impl FrameReorderer {
    pub fn new(first_frame: usize) -> Self {
        Self {
            next_frame: first_frame,
            pending: BTreeMap::new(),
        }
    }

    /// Next frame number expected by the sink.
    pub fn next_frame(&self) -> usize {
        self.next_frame
    }

    /// Number of frames waiting for an earlier batch.
    pub fn pending_frames(&self) -> usize {
        self.pending.values().map(Vec::len).sum()
    }

    /// Queue a batch, then pass every frame that is now in order to
    /// `write(frame_number, frame)`. Returns how many frames were written.
    pub fn push(
        &mut self,
        start_frame_number: usize,
        frames: Vec<DecodedFrame>,
        mut write: impl FnMut(usize, DecodedFrame) -> Result<()>,
    ) -> Result<usize> {
        self.pending.insert(start_frame_number, frames);

        let mut written = 0;
        while let Some(frames) = self.pending.remove(&self.next_frame) {
            for frame in frames {
                write(self.next_frame, frame)?;
                self.next_frame += 1;
                written += 1;
            }
        }
        Ok(written)
    }
}
