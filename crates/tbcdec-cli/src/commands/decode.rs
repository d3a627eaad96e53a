use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use tbcdec_core::consts::DEFAULT_BATCH_FRAMES;
use tbcdec_core::frame::OutputFormat;
use tbcdec_core::pipeline::{
    run_decode_reported, DecodeConfig, PipelineStage, ProgressReporter,
};
use tracing::warn;

use crate::summary::{print_decode_config, print_decode_result};

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    /// Planar 16-bit Y, U, V
    Yuv,
    /// Interleaved 16-bit R, G, B
    Rgb,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Yuv => OutputFormat::Yuv444p16,
            OutputFormatArg::Rgb => OutputFormat::Rgb48,
        }
    }
}

#[derive(Args)]
pub struct DecodeArgs {
    /// Input .tbc file
    #[arg(required_unless_present = "config")]
    pub file: Option<PathBuf>,

    /// Decode config file (TOML); replaces the options below
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Capture metadata file (defaults to <input>.toml)
    #[arg(long)]
    pub metadata: Option<PathBuf>,

    /// Output sample format
    #[arg(long, value_enum, default_value = "yuv")]
    pub format: OutputFormatArg,

    /// Chroma gain
    #[arg(long, default_value = "1.0")]
    pub chroma_gain: f64,

    /// Luma noise reduction threshold in IRE (0 disables it)
    #[arg(long, default_value = "0.0")]
    pub luma_nr: f64,

    /// Worker threads (defaults to the number of CPUs)
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Frames handed to a worker at a time
    #[arg(long, default_value_t = DEFAULT_BATCH_FRAMES)]
    pub batch: usize,

    /// First frame to decode (0-based)
    #[arg(long, default_value = "0")]
    pub start: usize,

    /// Number of frames to decode
    #[arg(long)]
    pub length: Option<usize>,

    /// Output file path (defaults to the input with a .yuv or .rgb extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Drives an indicatif bar from the decode stages.
struct BarReporter {
    bar: ProgressBar,
}

impl ProgressReporter for BarReporter {
    fn begin_stage(&self, stage: PipelineStage, total_items: Option<usize>) {
        self.bar.set_message(stage.to_string());
        self.bar.set_position(0);
        self.bar.set_length(total_items.unwrap_or(0) as u64);
    }

    fn advance(&self, items_done: usize) {
        self.bar.set_position(items_done as u64);
    }
}

pub fn run(args: &DecodeArgs) -> Result<()> {
    let config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        DecodeConfig::from_toml_str(&contents).context("Invalid decode config")?
    } else {
        build_config_from_args(args)?
    };

    // Row-level parallelism inside each worker shares the global rayon pool.
    let threads = config.thread_count();
    if let Err(e) = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
    {
        warn!(error = %e, "Could not size the rayon thread pool");
    }

    print_decode_config(&config);

    let bar = ProgressBar::new(0);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{msg:20} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    let reporter = Arc::new(BarReporter { bar: bar.clone() });

    let summary = run_decode_reported(&config, reporter)
        .with_context(|| format!("Failed to decode {}", config.input.display()))?;

    bar.finish_with_message("Done");
    print_decode_result(&summary);
    println!("Output saved to {}", config.output.display());

    Ok(())
}

fn build_config_from_args(args: &DecodeArgs) -> Result<DecodeConfig> {
    let Some(ref input) = args.file else {
        bail!("No input file given");
    };
    let format = OutputFormat::from(args.format);
    let output = match args.output {
        Some(ref output) => output.clone(),
        None => input.with_extension(if format.is_yuv() { "yuv" } else { "rgb" }),
    };
    if output == *input {
        bail!("Output would overwrite the input {}", input.display());
    }

    let mut config = DecodeConfig::new(input, output);
    config.metadata = args.metadata.clone();
    config.output_format = format;
    config.chroma_gain = args.chroma_gain;
    config.luma_nr_level = args.luma_nr;
    config.threads = args.threads;
    config.batch_frames = args.batch;
    config.start_frame = args.start;
    config.length = args.length;
    config.validate()?;
    Ok(config)
}
