mod common;

use ndarray::Array2;

use tbcdec_core::consts::{C_ZERO, Y_BLACK};
use tbcdec_core::decoder::Configuration;
use tbcdec_core::error::TbcError;
use tbcdec_core::frame::{DecodedFrame, OutputFormat, VideoParameters};
use tbcdec_core::geometry::{crop_output_frame, set_video_parameters};

use common::{ntsc_params, small_params};

fn configure(format: OutputFormat, params: &VideoParameters) -> Configuration {
    let mut config = Configuration::new(format);
    set_video_parameters(&mut config, params).expect("geometry");
    config
}

// ---------------------------------------------------------------------------
// set_video_parameters
// ---------------------------------------------------------------------------

#[test]
fn test_aligned_ntsc_geometry_is_unchanged() {
    let params = ntsc_params();
    let config = configure(OutputFormat::Yuv444p16, &params);

    assert_eq!(config.video_parameters, params);
    assert_eq!(config.top_pad_lines, 0);
    assert_eq!(config.bottom_pad_lines, 0);
    assert_eq!(config.output_width(), 720);
    assert_eq!(config.output_height(), 480);
}

#[test]
fn test_pal_width_is_widened_alternately() {
    let params = VideoParameters {
        field_width: 1135,
        field_height: 313,
        active_video_start: 185,
        active_video_end: 1107,
        first_active_frame_line: 44,
        last_active_frame_line: 620,
        ..ntsc_params()
    };
    let config = configure(OutputFormat::Yuv444p16, &params);

    // 922 -> 928: end, start, end, start, end, start
    assert_eq!(config.video_parameters.active_video_start, 182);
    assert_eq!(config.video_parameters.active_video_end, 1110);
    assert_eq!(config.output_width(), 928);
    assert_eq!(config.output_height(), 576);
}

#[test]
fn test_odd_line_count_pads_top_first() {
    let params = VideoParameters {
        first_active_frame_line: 9,
        last_active_frame_line: 70,
        ..small_params()
    };
    let config = configure(OutputFormat::Yuv444p16, &params);

    // 61 lines: odd -> top (62), even -> bottom (63), odd -> top (64)
    assert_eq!(config.top_pad_lines, 2);
    assert_eq!(config.bottom_pad_lines, 1);
    assert_eq!(config.output_height(), 64);
}

#[test]
fn test_geometry_is_aligned_and_centred_for_many_inputs() {
    let base = VideoParameters {
        field_width: 200,
        field_height: 120,
        ..small_params()
    };

    for start in 20..30 {
        for end in 150..160 {
            for first in 10..14 {
                for last in 200..209 {
                    let params = VideoParameters {
                        active_video_start: start,
                        active_video_end: end,
                        first_active_frame_line: first,
                        last_active_frame_line: last,
                        ..base.clone()
                    };
                    let config = configure(OutputFormat::Rgb48, &params);
                    let vp = &config.video_parameters;

                    assert_eq!(config.output_width() % 8, 0);
                    assert_eq!(config.output_height() % 8, 0);
                    assert!(config.output_width() - (end - start) < 8);
                    assert!(config.output_height() - (last - first) < 8);

                    let grow_left = start - vp.active_video_start;
                    let grow_right = vp.active_video_end - end;
                    assert!(grow_left >= 0 && grow_right >= 0);
                    assert!((grow_left - grow_right).abs() <= 1);
                    assert!((config.top_pad_lines - config.bottom_pad_lines).abs() <= 1);

                    // Active lines are never moved.
                    assert_eq!(vp.first_active_frame_line, first);
                    assert_eq!(vp.last_active_frame_line, last);
                }
            }
        }
    }
}

#[test]
fn test_reconfigure_does_not_accumulate_padding() {
    let params = VideoParameters {
        first_active_frame_line: 9,
        last_active_frame_line: 70,
        active_video_start: 10,
        active_video_end: 23,
        ..small_params()
    };
    let mut config = Configuration::new(OutputFormat::Yuv444p16);
    set_video_parameters(&mut config, &params).unwrap();
    let first = config.clone();
    set_video_parameters(&mut config, &params).unwrap();

    assert_eq!(config.video_parameters, first.video_parameters);
    assert_eq!(config.top_pad_lines, first.top_pad_lines);
    assert_eq!(config.bottom_pad_lines, first.bottom_pad_lines);
}

#[test]
fn test_widening_past_right_edge_is_rejected() {
    let params = VideoParameters {
        active_video_start: 10,
        active_video_end: 64,
        ..small_params()
    };
    let mut config = Configuration::new(OutputFormat::Yuv444p16);
    let err = set_video_parameters(&mut config, &params);
    assert!(matches!(err, Err(TbcError::InvalidVideoParameters(_))));
}

#[test]
fn test_invalid_parameters_are_rejected() {
    let mut config = Configuration::new(OutputFormat::Yuv444p16);

    let reversed = VideoParameters {
        active_video_start: 40,
        active_video_end: 20,
        ..small_params()
    };
    assert!(set_video_parameters(&mut config, &reversed).is_err());

    let too_tall = VideoParameters {
        last_active_frame_line: 80,
        ..small_params()
    };
    assert!(set_video_parameters(&mut config, &too_tall).is_err());

    let levels = VideoParameters {
        black_16b_ire: 50000,
        white_16b_ire: 40000,
        ..small_params()
    };
    assert!(set_video_parameters(&mut config, &levels).is_err());
}

// ---------------------------------------------------------------------------
// crop_output_frame
// ---------------------------------------------------------------------------

/// Full-size frame where every sample encodes its position.
fn numbered_plane(rows: usize, cols: usize) -> Array2<u16> {
    Array2::from_shape_fn((rows, cols), |(r, c)| (r * 500 + c) as u16)
}

#[test]
fn test_crop_yuv_inserts_black_padding() {
    let params = VideoParameters {
        first_active_frame_line: 10,
        last_active_frame_line: 72,
        ..small_params()
    };
    let config = configure(OutputFormat::Yuv444p16, &params);
    assert_eq!(config.top_pad_lines, 1);
    assert_eq!(config.bottom_pad_lines, 1);

    let frame = DecodedFrame::Yuv {
        y: numbered_plane(79, 64),
        u: numbered_plane(79, 64),
        v: numbered_plane(79, 64),
    };
    let cropped = crop_output_frame(&config, &frame);
    assert_eq!(cropped.width(), 48);
    assert_eq!(cropped.height(), 64);

    let DecodedFrame::Yuv { y, u, v } = cropped else {
        panic!("expected a YUV frame");
    };
    assert!(y.row(0).iter().all(|&s| s == Y_BLACK));
    assert!(y.row(63).iter().all(|&s| s == Y_BLACK));
    assert!(u.row(0).iter().all(|&s| s == C_ZERO));
    assert!(v.row(63).iter().all(|&s| s == C_ZERO));

    // Output row 1 is frame line 10, output column 0 is field sample 8.
    assert_eq!(y[[1, 0]], 10 * 500 + 8);
    assert_eq!(y[[62, 47]], 71 * 500 + 55);
    assert_eq!(u[[5, 3]], 14 * 500 + 11);
}

#[test]
fn test_crop_rgb_keeps_interleaved_samples() {
    let params = VideoParameters {
        first_active_frame_line: 10,
        last_active_frame_line: 72,
        ..small_params()
    };
    let config = configure(OutputFormat::Rgb48, &params);

    let frame = DecodedFrame::Rgb(numbered_plane(79, 64 * 3));
    let cropped = crop_output_frame(&config, &frame);
    assert_eq!(cropped.width(), 48);
    assert_eq!(cropped.height(), 64);

    let DecodedFrame::Rgb(rgb) = cropped else {
        panic!("expected an RGB frame");
    };
    assert_eq!(rgb.ncols(), 48 * 3);
    assert!(rgb.row(0).iter().all(|&s| s == 0));
    assert!(rgb.row(63).iter().all(|&s| s == 0));
    // Pixel 0 of output row 1 is pixel 8 of frame line 10: samples 24..27.
    assert_eq!(rgb[[1, 0]], 10 * 500 + 24);
    assert_eq!(rgb[[1, 2]], 10 * 500 + 26);
}

#[test]
fn test_crop_without_padding_is_a_plain_window() {
    let config = configure(OutputFormat::Yuv444p16, &small_params());
    let plane = numbered_plane(79, 64);
    let frame = DecodedFrame::Yuv {
        y: plane.clone(),
        u: plane.clone(),
        v: plane.clone(),
    };
    let DecodedFrame::Yuv { y, .. } = crop_output_frame(&config, &frame) else {
        panic!("expected a YUV frame");
    };
    assert_eq!(y, plane.slice(ndarray::s![8..72, 8..56]).to_owned());
}
