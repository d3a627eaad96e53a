//! Monochrome decoder: luma only, no chroma separation.

use std::sync::Arc;

use ndarray::{ArrayView1, ArrayViewMut1};
use rayon::prelude::*;
use tracing::{error, warn};

use crate::color::{LineConverter, Yiq};
use crate::consts::{PARALLEL_PIXEL_THRESHOLD, RGB_CHANNEL_COUNT};
use crate::error::{Result, TbcError};
use crate::filters::noise::LumaNoiseReducer;
use crate::frame::{DecodedFrame, InputField, VideoParameters};
use crate::geometry::{crop_output_frame, set_video_parameters};
use crate::pool::{AbortFlag, DecoderPool};

use super::{Configuration, Decoder, DecoderThread, WorkerContext};

/// Decoder that treats the composite signal as luma.
///
/// Chroma is zero in the output (`128*256` for YUV, equal channels for
/// RGB). The 75% white point flag is not applied.
pub struct MonoDecoder {
    config: Configuration,
    shared: Option<Arc<Configuration>>,
}

impl MonoDecoder {
    pub fn new(config: Configuration) -> Self {
        Self {
            config,
            shared: None,
        }
    }
}

impl Decoder for MonoDecoder {
    fn name(&self) -> &'static str {
        "mono"
    }

    fn configure(&mut self, video_parameters: &VideoParameters) -> Result<()> {
        if let Err(e) = set_video_parameters(&mut self.config, video_parameters) {
            error!(error = %e, "Input video is not compatible with the mono decoder");
            self.shared = None;
            return Err(e);
        }
        self.shared = Some(Arc::new(self.config.clone()));
        Ok(())
    }

    fn configuration(&self) -> Option<&Configuration> {
        self.shared.as_deref()
    }

    fn make_thread(
        &self,
        abort: Arc<AbortFlag>,
        pool: Arc<dyn DecoderPool>,
    ) -> Result<Box<dyn DecoderThread>> {
        let config = self.shared.clone().ok_or_else(|| {
            TbcError::InvalidConfig("mono decoder used before configure".into())
        })?;
        Ok(Box::new(MonoThread::new(WorkerContext { abort, pool }, config)))
    }
}

/// Per-line work, shared across Rayon tasks within one frame.
struct LineDecoder {
    field_width: usize,
    active_start: usize,
    active_end: usize,
    black_level: f64,
    converter: LineConverter,
    noise_reducer: Option<LumaNoiseReducer>,
}

impl LineDecoder {
    fn new(config: &Configuration) -> Self {
        let vp = &config.video_parameters;
        let black = f64::from(vp.black_16b_ire);
        let white = f64::from(vp.white_16b_ire);

        let noise_reducer = (config.luma_nr_level > 0.0)
            .then(|| LumaNoiseReducer::new(config.luma_nr_level, white - black));

        Self {
            field_width: vp.field_width as usize,
            active_start: vp.active_video_start as usize,
            active_end: vp.active_video_end as usize,
            black_level: black,
            converter: LineConverter::new(
                config.output_format,
                white,
                black,
                false,
                config.chroma_gain,
            ),
            noise_reducer,
        }
    }

    /// Decode frame line `y` into `field_width * 3` samples: three planar
    /// segments for YUV, interleaved pixels for RGB. Samples past the end
    /// of a short field read as black.
    fn decode(&self, first: &InputField, second: &InputField, y: usize) -> Vec<u16> {
        let field = if y % 2 == 0 { first } else { second };
        let width = self.field_width;

        let mut luma: Vec<f64> = Vec::with_capacity(width);
        luma.extend(field.line(width, y / 2).iter().map(|&s| f64::from(s)));
        luma.resize(width, self.black_level);
        if let Some(nr) = &self.noise_reducer {
            nr.apply(&mut luma[self.active_start..self.active_end]);
        }
        let line: Vec<Yiq> = luma.into_iter().map(Yiq::mono).collect();

        let mut out = vec![0u16; width * RGB_CHANNEL_COUNT];
        match &self.converter {
            LineConverter::Yuv(conv) => {
                let (out_y, rest) = out.split_at_mut(width);
                let (out_u, out_v) = rest.split_at_mut(width);
                conv.convert_line(&line, out_y, out_u, out_v);
            }
            LineConverter::Rgb(conv) => conv.convert_line(&line, &mut out),
        }
        out
    }
}

struct MonoThread {
    ctx: WorkerContext,
    config: Arc<Configuration>,
    lines: LineDecoder,
    frame_height: usize,
}

impl MonoThread {
    fn new(ctx: WorkerContext, config: Arc<Configuration>) -> Self {
        let lines = LineDecoder::new(&config);
        let frame_height = config.video_parameters.frame_height() as usize;
        Self {
            ctx,
            config,
            lines,
            frame_height,
        }
    }

    /// Decode one field pair into a full-size frame, then crop it.
    fn decode_pair(&self, first: &InputField, second: &InputField) -> DecodedFrame {
        let field_len = self.config.video_parameters.field_len();
        for field in [first, second] {
            if field.data.len() != field_len {
                let e = TbcError::FieldSizeMismatch {
                    expected: field_len,
                    actual: field.data.len(),
                };
                warn!(
                    seq_no = field.metadata.seq_no,
                    error = %e,
                    "Missing samples decode as black"
                );
            }
        }

        let first_line = self.config.first_active_line() as usize;
        let last_line = self.config.last_active_line() as usize;
        let width = self.lines.field_width;

        let pixels = (last_line - first_line) * width;
        let rows: Vec<Vec<u16>> = if pixels >= PARALLEL_PIXEL_THRESHOLD {
            (first_line..last_line)
                .into_par_iter()
                .map(|y| self.lines.decode(first, second, y))
                .collect()
        } else {
            (first_line..last_line)
                .map(|y| self.lines.decode(first, second, y))
                .collect()
        };

        let mut frame = DecodedFrame::blank(self.config.output_format, width, self.frame_height);
        match &mut frame {
            DecodedFrame::Yuv { y, u, v } => {
                for (line, samples) in (first_line..).zip(&rows) {
                    let (ys, rest) = samples.split_at(width);
                    let (us, vs) = rest.split_at(width);
                    copy_row(y.row_mut(line), ys);
                    copy_row(u.row_mut(line), us);
                    copy_row(v.row_mut(line), vs);
                }
            }
            DecodedFrame::Rgb(rgb) => {
                for (line, samples) in (first_line..).zip(&rows) {
                    copy_row(rgb.row_mut(line), samples);
                }
            }
        }

        crop_output_frame(&self.config, &frame)
    }
}

fn copy_row(mut dst: ArrayViewMut1<u16>, src: &[u16]) {
    dst.assign(&ArrayView1::from(src));
}

impl DecoderThread for MonoThread {
    fn context(&self) -> &WorkerContext {
        &self.ctx
    }

    fn decode_frames(
        &mut self,
        fields: &[InputField],
        start_index: usize,
        end_index: usize,
        output: &mut Vec<DecodedFrame>,
    ) {
        for pair in fields[start_index..end_index].chunks_exact(2) {
            output.push(self.decode_pair(&pair[0], &pair[1]));
        }
    }
}
