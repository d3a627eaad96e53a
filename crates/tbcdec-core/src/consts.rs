/// Output frame width and height must both be a multiple of this.
/// Video codecs downstream work in 8x8 blocks.
pub const OUTPUT_BLOCK_SIZE: i32 = 8;

/// Largest value of an unsigned 16-bit sample, as f64.
pub const SAMPLE_MAX: f64 = 65535.0;

/// 16-bit luma level for black (8-bit 16 scaled by 256).
pub const Y_BLACK: u16 = 16 * 256;

/// 16-bit chroma level for zero colour difference (8-bit 128 scaled by 256).
pub const C_ZERO: u16 = 128 * 256;

/// Luma excursion from black to white, in 16-bit units (219 * 257).
pub const Y_RANGE: f64 = 219.0 * 257.0;

/// Extra luma gain when the source uses a 75% white point (100 IRE lands
/// 25% above nominal white).
pub const WHITE_POINT_75_GAIN: f64 = 125.0 / 100.0;

/// BT.601 `1 - Kb`.
pub const BT601_KB: f64 = 1.0 - 0.114;

/// BT.601 `1 - Kr`.
pub const BT601_KR: f64 = 1.0 - 0.299;

/// Poynton, "Digital Video and HDTV" 1st ed., Eq 28.1.
pub const POYNTON_KB: f64 = 0.49211104112248356308804691718185;

/// Poynton, "Digital Video and HDTV" 1st ed., Eq 28.1.
pub const POYNTON_KR: f64 = 0.877283221458919247158029475165;

/// sin(33°): rotation between the I/Q and U/V colour-difference axes.
pub const SIN33: f64 = 0.54463903501502708222408369208157;

/// cos(33°).
pub const COS33: f64 = 0.83867056794542402963759094180455;

/// FCC YIQ to RGB matrix, rows R, G, B; columns Y, I, Q.
pub const YIQ_TO_RGB: [[f64; 3]; 3] = [
    [1.0, 0.956, 0.621],
    [1.0, -0.272, -0.647],
    [1.0, -1.106, 1.703],
];

/// Samples per RGB48 pixel.
pub const RGB_CHANNEL_COUNT: usize = 3;

/// Minimum output-frame pixel count to decode rows with Rayon.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Default number of frames handed to a worker per batch.
pub const DEFAULT_BATCH_FRAMES: usize = 16;

/// Default FM de-emphasis time constant, in seconds.
pub const DEFAULT_FM_DEEMPHASIS_TAU: f64 = 1.25e-6;
