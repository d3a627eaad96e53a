//! Output frame geometry.
//!
//! Video codecs expect both frame dimensions to be divisible by 8. The
//! active picture is widened sideways and padded with black lines top and
//! bottom until it is, alternating sides so the original active area stays
//! centred.

use ndarray::{s, Array2, ArrayView2};
use tracing::info;

use crate::consts::{C_ZERO, OUTPUT_BLOCK_SIZE, RGB_CHANNEL_COUNT, Y_BLACK};
use crate::decoder::Configuration;
use crate::error::{Result, TbcError};
use crate::frame::{DecodedFrame, VideoParameters};

/// Copy `video_parameters` into `config` and compute the output frame size,
/// widening the active video region and adding padding lines as required.
///
/// Width: while not a multiple of 8, grow the end when the current width is
/// even, otherwise move the start left. Height: while the padded height is
/// not a multiple of 8, add a bottom line when it is even, otherwise a top
/// line.
pub fn set_video_parameters(
    config: &mut Configuration,
    video_parameters: &VideoParameters,
) -> Result<()> {
    video_parameters.validate()?;

    config.video_parameters = video_parameters.clone();
    config.top_pad_lines = 0;
    config.bottom_pad_lines = 0;

    let vp = &mut config.video_parameters;
    let output_width = loop {
        let width = vp.active_video_end - vp.active_video_start;
        if width % OUTPUT_BLOCK_SIZE == 0 {
            break width;
        }
        if width % 2 == 0 {
            vp.active_video_end += 1;
        } else {
            vp.active_video_start -= 1;
        }
    };

    if vp.active_video_start < 0 || vp.active_video_end > vp.field_width {
        return Err(TbcError::InvalidVideoParameters(format!(
            "active video widened to {}..{} to reach a multiple of {OUTPUT_BLOCK_SIZE}, \
             outside field width {}",
            vp.active_video_start, vp.active_video_end, vp.field_width
        )));
    }

    let num_active_lines =
        video_parameters.last_active_frame_line - video_parameters.first_active_frame_line;
    let output_height = loop {
        let height = config.top_pad_lines + num_active_lines + config.bottom_pad_lines;
        if height % OUTPUT_BLOCK_SIZE == 0 {
            break height;
        }
        if height % 2 == 0 {
            config.bottom_pad_lines += 1;
        } else {
            config.top_pad_lines += 1;
        }
    };

    info!(
        input_width = config.video_parameters.field_width,
        input_height = config.video_parameters.frame_height(),
        output_width,
        output_height,
        top_pad = config.top_pad_lines,
        bottom_pad = config.bottom_pad_lines,
        format = %config.output_format,
        "Computed output frame geometry"
    );

    Ok(())
}

/// Crop a full decoded frame (`field_width x frame_height`) down to the
/// output frame size, inserting black padding lines.
///
/// # Panics
///
/// Panics if `frame` is smaller than the geometry recorded in `config`.
pub fn crop_output_frame(config: &Configuration, frame: &DecodedFrame) -> DecodedFrame {
    match frame {
        DecodedFrame::Yuv { y, u, v } => DecodedFrame::Yuv {
            y: crop_plane(config, y.view(), 1, Y_BLACK),
            u: crop_plane(config, u.view(), 1, C_ZERO),
            v: crop_plane(config, v.view(), 1, C_ZERO),
        },
        DecodedFrame::Rgb(rgb) => {
            DecodedFrame::Rgb(crop_plane(config, rgb.view(), RGB_CHANNEL_COUNT, 0))
        }
    }
}

/// Crop one plane holding `samples_per_pixel` samples per pixel.
fn crop_plane(
    config: &Configuration,
    plane: ArrayView2<u16>,
    samples_per_pixel: usize,
    fill: u16,
) -> Array2<u16> {
    let vp = &config.video_parameters;
    let first = vp.first_active_frame_line as usize;
    let last = vp.last_active_frame_line as usize;
    let start = vp.active_video_start as usize * samples_per_pixel;
    let end = vp.active_video_end as usize * samples_per_pixel;
    let top = config.top_pad_lines as usize;

    let out_rows = config.output_height() as usize;
    let mut out = Array2::from_elem((out_rows, end - start), fill);
    out.slice_mut(s![top..top + (last - first), ..])
        .assign(&plane.slice(s![first..last, start..end]));
    out
}
