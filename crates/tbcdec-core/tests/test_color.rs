use tbcdec_core::color::{LineConverter, RgbConverter, Yiq, YuvConverter};
use tbcdec_core::consts::{C_ZERO, Y_BLACK};
use tbcdec_core::frame::OutputFormat;

const BLACK: f64 = 16384.0;
const WHITE: f64 = 54016.0;
const Y_WHITE: i32 = 16 * 256 + 219 * 257;

fn within(actual: u16, expected: i32, tolerance: i32) -> bool {
    (i32::from(actual) - expected).abs() <= tolerance
}

// ---------------------------------------------------------------------------
// YUV
// ---------------------------------------------------------------------------

#[test]
fn test_yuv_black_level() {
    let conv = YuvConverter::new(WHITE, BLACK, false, 1.0);
    assert_eq!(conv.convert(Yiq::mono(BLACK)), (Y_BLACK, C_ZERO, C_ZERO));
}

#[test]
fn test_yuv_luma_is_linear_between_black_and_white() {
    let conv = YuvConverter::new(WHITE, BLACK, false, 1.0);
    let mid = (BLACK + WHITE) / 2.0;
    let (y, _, _) = conv.convert(Yiq::mono(mid));
    let expected = (i32::from(Y_BLACK) + Y_WHITE) / 2;
    assert!(within(y, expected, 1), "y = {y}, expected {expected}");
}

#[test]
fn test_yuv_clamps_out_of_range_luma() {
    let conv = YuvConverter::new(WHITE, BLACK, false, 1.0);
    assert_eq!(conv.convert(Yiq::mono(0.0)).0, 0);
    assert_eq!(conv.convert(Yiq::mono(65535.0)).0, u16::MAX);
}

#[test]
fn test_yuv_chroma_follows_iq_rotation() {
    let conv = YuvConverter::new(WHITE, BLACK, false, 1.0);

    // +Q lies 33 degrees from +U towards +V: both rise above zero.
    let (_, cb, cr) = conv.convert(Yiq::new(BLACK, 0.0, 5000.0));
    assert!(cb > C_ZERO && cr > C_ZERO);

    // +I has a negative U component and a positive V component.
    let (_, cb, cr) = conv.convert(Yiq::new(BLACK, 5000.0, 0.0));
    assert!(cb < C_ZERO && cr > C_ZERO);
}

#[test]
fn test_yuv_chroma_gain_scales_colour_difference() {
    let plain = YuvConverter::new(WHITE, BLACK, false, 1.0);
    let muted = YuvConverter::new(WHITE, BLACK, false, 0.0);
    let doubled = YuvConverter::new(WHITE, BLACK, false, 2.0);
    let sample = Yiq::new(BLACK, 2000.0, 0.0);

    let (_, _, cr1) = plain.convert(sample);
    let (_, _, cr0) = muted.convert(sample);
    let (_, _, cr2) = doubled.convert(sample);
    assert_eq!(cr0, C_ZERO);
    let d1 = i32::from(cr1) - i32::from(C_ZERO);
    let d2 = i32::from(cr2) - i32::from(C_ZERO);
    assert!((d2 - 2 * d1).abs() <= 1, "d1 = {d1}, d2 = {d2}");
}

#[test]
fn test_yuv_convert_line_fills_planes() {
    let conv = YuvConverter::new(WHITE, BLACK, false, 1.0);
    let line: Vec<Yiq> = [BLACK, WHITE, BLACK].into_iter().map(Yiq::mono).collect();
    let (mut y, mut u, mut v) = (vec![0u16; 3], vec![0u16; 3], vec![0u16; 3]);
    conv.convert_line(&line, &mut y, &mut u, &mut v);

    assert_eq!(y[0], Y_BLACK);
    assert!(within(y[1], Y_WHITE, 1));
    assert_eq!(y[2], Y_BLACK);
    assert!(u.iter().chain(&v).all(|&c| c == C_ZERO));
}

// ---------------------------------------------------------------------------
// RGB
// ---------------------------------------------------------------------------

#[test]
fn test_rgb_black_and_white() {
    let conv = RgbConverter::new(WHITE, BLACK, false, 1.0);
    assert_eq!(conv.convert(Yiq::mono(BLACK)), [0, 0, 0]);
    let white = conv.convert(Yiq::mono(WHITE));
    assert!(white.iter().all(|&c| within(c, 65535, 1)), "{white:?}");
}

#[test]
fn test_rgb_grey_has_equal_channels() {
    let conv = RgbConverter::new(WHITE, BLACK, false, 1.0);
    let [r, g, b] = conv.convert(Yiq::mono(30000.0));
    assert_eq!(r, g);
    assert_eq!(g, b);
}

#[test]
fn test_rgb_positive_i_is_orange() {
    let conv = RgbConverter::new(WHITE, BLACK, false, 1.0);
    let mid = (BLACK + WHITE) / 2.0;
    let [r, g, b] = conv.convert(Yiq::new(mid, 0.1 * (WHITE - BLACK), 0.0));
    assert!(r > g && g > b, "r={r} g={g} b={b}");
}

#[test]
fn test_rgb_white_point_75_boosts_luma() {
    let normal = RgbConverter::new(WHITE, BLACK, false, 1.0);
    let boosted = RgbConverter::new(WHITE, BLACK, true, 1.0);
    let sample = Yiq::mono(BLACK + 0.5 * (WHITE - BLACK));

    let [n, _, _] = normal.convert(sample);
    let [b, _, _] = boosted.convert(sample);
    assert!(within(n, 32767, 1));
    assert!(within(b, 40959, 1));
}

#[test]
fn test_rgb_convert_line_interleaves() {
    let conv = RgbConverter::new(WHITE, BLACK, false, 1.0);
    let line: Vec<Yiq> = [BLACK, WHITE].into_iter().map(Yiq::mono).collect();
    let mut out = vec![7u16; 6];
    conv.convert_line(&line, &mut out);
    assert_eq!(&out[..3], &[0, 0, 0]);
    assert!(out[3..].iter().all(|&c| within(c, 65535, 1)));
}

// ---------------------------------------------------------------------------
// LineConverter
// ---------------------------------------------------------------------------

#[test]
fn test_line_converter_matches_format() {
    let yuv = LineConverter::new(OutputFormat::Yuv444p16, WHITE, BLACK, false, 1.0);
    let rgb = LineConverter::new(OutputFormat::Rgb48, WHITE, BLACK, false, 1.0);
    assert!(matches!(yuv, LineConverter::Yuv(_)));
    assert!(matches!(rgb, LineConverter::Rgb(_)));
}
