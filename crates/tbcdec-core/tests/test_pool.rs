mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tbcdec_core::decoder::{run_decoder, Configuration, Decoder, DecoderThread, MonoDecoder};
use tbcdec_core::frame::{DecodedFrame, OutputFormat};
use tbcdec_core::pool::{AbortFlag, DecoderPool, InputBatch, MemoryPool};

use common::{decode_in_memory, frame_sequence, small_params, BLACK};

/// Frame `n` is filled with a level that identifies it.
fn level_for(n: usize) -> u16 {
    (20_000 + n * 500) as u16
}

fn luma_at_origin(frame: &DecodedFrame) -> u16 {
    match frame {
        DecodedFrame::Yuv { y, .. } => y[[0, 0]],
        DecodedFrame::Rgb(rgb) => rgb[[0, 0]],
    }
}

// ---------------------------------------------------------------------------
// MemoryPool
// ---------------------------------------------------------------------------

#[test]
fn test_memory_pool_hands_out_batches_in_order() {
    let params = small_params();
    let pool = MemoryPool::new(params.clone(), frame_sequence(&params, 5, level_for), 2);
    assert_eq!(pool.frame_count(), 5);

    let batches: Vec<InputBatch> = std::iter::from_fn(|| pool.get_input_frames()).collect();
    let starts: Vec<usize> = batches.iter().map(|b| b.start_frame_number).collect();
    assert_eq!(starts, vec![0, 2, 4]);
    assert_eq!(batches[2].frame_count(), 1);
    assert_eq!(batches[1].fields[0].data[0], level_for(2));
    assert_eq!(batches[1].start_index, 0);
    assert_eq!(batches[1].end_index, 4);
}

#[test]
fn test_memory_pool_reorders_output() {
    let params = small_params();
    let pool = MemoryPool::new(params.clone(), frame_sequence(&params, 4, level_for), 2);
    let frame = |width| DecodedFrame::blank(OutputFormat::Yuv444p16, width, 8);

    assert!(pool.put_output_frames(2, vec![frame(16), frame(24)]));
    assert_eq!(pool.frames_written(), 0);
    assert!(pool.put_output_frames(0, vec![frame(8), frame(8)]));
    assert_eq!(pool.frames_written(), 4);

    let widths: Vec<usize> = pool.into_frames().iter().map(DecodedFrame::width).collect();
    assert_eq!(widths, vec![8, 8, 16, 24]);
}

#[test]
fn test_memory_pool_pads_context_with_black_fields() {
    let params = small_params();
    let pool = MemoryPool::new(params.clone(), frame_sequence(&params, 3, level_for), 2)
        .with_context(1, 1);

    let first = pool.get_input_frames().unwrap();
    // one frame behind, two to decode, one ahead
    assert_eq!(first.fields.len(), 8);
    assert_eq!(first.start_index, 2);
    assert_eq!(first.end_index, 6);
    assert!(first.fields[0].metadata.pad);
    assert!(first.fields[1].data.iter().all(|&s| s == BLACK as u16));
    assert_eq!(first.fields[2].data[0], level_for(0));
    assert_eq!(first.fields[6].data[0], level_for(2));

    let second = pool.get_input_frames().unwrap();
    assert_eq!(second.start_frame_number, 2);
    assert_eq!(second.fields[0].data[0], level_for(1));
    assert!(second.fields[4].metadata.pad);
    assert!(pool.get_input_frames().is_none());
}

#[test]
fn test_aborted_memory_pool_stops() {
    let params = small_params();
    let pool = MemoryPool::new(params.clone(), frame_sequence(&params, 2, level_for), 1);
    pool.abort();
    assert!(pool.is_aborted());
    assert!(pool.get_input_frames().is_none());
    assert!(!pool.put_output_frames(0, Vec::new()));
}

// ---------------------------------------------------------------------------
// run_decoder
// ---------------------------------------------------------------------------

#[test]
fn test_threads_deliver_frames_in_order() {
    let params = small_params();
    let frames = 23;
    for threads in [1, 2, 5] {
        let output = decode_in_memory(
            Configuration::new(OutputFormat::Rgb48),
            &params,
            frame_sequence(&params, frames, level_for),
            threads,
            1,
        );
        assert_eq!(output.len(), frames);

        let levels: Vec<u16> = output.iter().map(luma_at_origin).collect();
        let mut sorted = levels.clone();
        sorted.sort_unstable();
        assert_eq!(levels, sorted, "{threads} threads");
        assert!(levels.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn test_run_summary_counts_frames() {
    let params = small_params();
    let mut decoder = MonoDecoder::new(Configuration::new(OutputFormat::Yuv444p16));
    decoder.configure(&params).unwrap();
    let pool = Arc::new(MemoryPool::new(params.clone(), frame_sequence(&params, 7, level_for), 3));

    let summary = run_decoder(&decoder, pool.clone(), 0).unwrap();
    assert_eq!(summary.threads, 1);
    assert_eq!(summary.frames_submitted, 7);
    assert!(!summary.aborted);
    assert_eq!(pool.frames_written(), 7);
}

/// A pool that refuses output after a number of batches.
struct RefusingPool {
    inner: MemoryPool,
    accept: usize,
    accepted: AtomicUsize,
}

impl DecoderPool for RefusingPool {
    fn get_input_frames(&self) -> Option<InputBatch> {
        self.inner.get_input_frames()
    }

    fn put_output_frames(&self, start_frame_number: usize, frames: Vec<DecodedFrame>) -> bool {
        if self.accepted.fetch_add(1, Ordering::SeqCst) >= self.accept {
            return false;
        }
        self.inner.put_output_frames(start_frame_number, frames)
    }
}

#[test]
fn test_refused_output_aborts_every_thread() {
    let params = small_params();
    let mut decoder = MonoDecoder::new(Configuration::new(OutputFormat::Yuv444p16));
    decoder.configure(&params).unwrap();

    let pool = Arc::new(RefusingPool {
        inner: MemoryPool::new(params.clone(), frame_sequence(&params, 40, level_for), 1),
        accept: 3,
        accepted: AtomicUsize::new(0),
    });
    let summary = run_decoder(&decoder, pool.clone(), 4).unwrap();

    assert!(summary.aborted);
    assert!(summary.frames_submitted <= 3);
    // Workers stop promptly instead of draining the input.
    assert!(pool.accepted.load(Ordering::SeqCst) < 40);
}

#[test]
fn test_abort_does_not_truncate_a_batch() {
    let params = small_params();
    let mut decoder = MonoDecoder::new(Configuration::new(OutputFormat::Yuv444p16));
    decoder.configure(&params).unwrap();

    let pool = Arc::new(MemoryPool::new(params.clone(), frame_sequence(&params, 3, level_for), 3));
    let abort = Arc::new(AbortFlag::new());
    let mut worker = decoder.make_thread(abort.clone(), pool.clone()).unwrap();

    let batch = pool.get_input_frames().unwrap();
    abort.set();
    let mut frames = Vec::new();
    worker.decode_frames(&batch.fields, batch.start_index, batch.end_index, &mut frames);

    // A submitted batch always covers its whole frame range.
    assert_eq!(frames.len(), batch.frame_count());
    assert!(pool.put_output_frames(batch.start_frame_number, frames));
    assert_eq!(pool.frames_written(), 3);
}
