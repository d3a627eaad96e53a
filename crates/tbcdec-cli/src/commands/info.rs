use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tbcdec_core::decoder::{Configuration, Decoder, MonoDecoder};
use tbcdec_core::frame::OutputFormat;
use tbcdec_core::io::MetadataFile;

#[derive(Args)]
pub struct InfoArgs {
    /// Input .tbc file
    pub file: PathBuf,

    /// Capture metadata file (defaults to <input>.toml)
    #[arg(long)]
    pub metadata: Option<PathBuf>,

    /// Print the output geometry as TOML
    #[arg(long)]
    pub toml: bool,
}

/// Output geometry after alignment to the block size.
#[derive(Serialize)]
struct Geometry {
    active_video_start: i32,
    active_video_end: i32,
    first_active_frame_line: i32,
    last_active_frame_line: i32,
    top_pad_lines: i32,
    bottom_pad_lines: i32,
    output_width: i32,
    output_height: i32,
}

impl From<&Configuration> for Geometry {
    fn from(config: &Configuration) -> Self {
        let vp = &config.video_parameters;
        Self {
            active_video_start: vp.active_video_start,
            active_video_end: vp.active_video_end,
            first_active_frame_line: vp.first_active_frame_line,
            last_active_frame_line: vp.last_active_frame_line,
            top_pad_lines: config.top_pad_lines,
            bottom_pad_lines: config.bottom_pad_lines,
            output_width: config.output_width(),
            output_height: config.output_height(),
        }
    }
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let metadata_path = args.metadata.clone().unwrap_or_else(|| {
        let mut path = args.file.as_os_str().to_owned();
        path.push(".toml");
        PathBuf::from(path)
    });
    let metadata = MetadataFile::load(&metadata_path)
        .with_context(|| format!("Failed to load metadata {}", metadata_path.display()))?;
    let vp = &metadata.video;

    let mut decoder = MonoDecoder::new(Configuration::new(OutputFormat::default()));
    decoder.configure(vp)?;
    let Some(config) = decoder.configuration() else {
        anyhow::bail!("Decoder did not keep its configuration");
    };
    let geometry = Geometry::from(config);

    if args.toml {
        print!("{}", toml::to_string_pretty(&geometry)?);
        return Ok(());
    }

    println!("File:         {}", args.file.display());
    println!("Metadata:     {}", metadata_path.display());
    println!("System:       {:?}", vp.system);
    println!("Field size:   {}x{}", vp.field_width, vp.field_height);
    println!(
        "Active video: {}..{} (lines {}..{})",
        vp.active_video_start,
        vp.active_video_end,
        vp.first_active_frame_line,
        vp.last_active_frame_line
    );
    println!("Black/white:  {} / {}", vp.black_16b_ire, vp.white_16b_ire);
    if vp.white_point_75 {
        println!("White point:  75%");
    }

    if let Ok(meta) = std::fs::metadata(&args.file) {
        let field_bytes = (vp.field_len() * 2) as u64;
        if field_bytes > 0 {
            let fields = meta.len() / field_bytes;
            println!("Fields:       {} ({} frames)", fields, fields / 2);
        }
    }
    if !metadata.fields.is_empty() {
        println!("Field records: {}", metadata.fields.len());
    }

    println!(
        "Output:       {}x{} (active {}..{}, pad {} top / {} bottom)",
        geometry.output_width,
        geometry.output_height,
        geometry.active_video_start,
        geometry.active_video_end,
        geometry.top_pad_lines,
        geometry.bottom_pad_lines
    );

    Ok(())
}
