use console::Style;
use tbcdec_core::pipeline::{DecodeConfig, DecodeSummary};

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_decode_config(config: &DecodeConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("TBC Decode"));
    println!("  {}", s.title.apply_to("\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}"));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(config.input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Metadata"),
        s.path.apply_to(config.metadata_path().display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(config.output.display())
    );
    println!();

    println!("  {}", s.header.apply_to("Decoder"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Method"),
        s.method.apply_to(config.decoder)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Format"),
        s.value.apply_to(config.output_format)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Chroma gain"),
        s.value.apply_to(format!("{:.2}", config.chroma_gain))
    );
    if config.luma_nr_level > 0.0 {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Luma NR"),
            s.value.apply_to(format!("{:.1} IRE", config.luma_nr_level))
        );
    } else {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Luma NR"),
            s.disabled.apply_to("disabled")
        );
    }
    println!();

    println!("  {}", s.header.apply_to("Frames"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Start"),
        s.value.apply_to(config.start_frame)
    );
    match config.length {
        Some(length) => println!(
            "    {:<12}{}",
            s.label.apply_to("Length"),
            s.value.apply_to(length)
        ),
        None => println!(
            "    {:<12}{}",
            s.label.apply_to("Length"),
            s.disabled.apply_to("to end")
        ),
    }
    println!(
        "    {:<12}{}",
        s.label.apply_to("Threads"),
        s.value.apply_to(config.thread_count())
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Batch"),
        s.value.apply_to(config.batch_frames)
    );
    println!();
}

pub fn print_decode_result(summary: &DecodeSummary) {
    let s = Styles::new();

    println!();
    println!("  {}", s.header.apply_to("Result"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Frame size"),
        s.value.apply_to(format!(
            "{}x{}",
            summary.output_width, summary.output_height
        ))
    );
    if summary.top_pad_lines > 0 || summary.bottom_pad_lines > 0 {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Padding"),
            s.value.apply_to(format!(
                "{} top, {} bottom",
                summary.top_pad_lines, summary.bottom_pad_lines
            ))
        );
    }
    println!(
        "    {:<12}{}",
        s.label.apply_to("Frames"),
        s.value.apply_to(summary.frames_written)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Threads"),
        s.value.apply_to(summary.threads)
    );
    println!();
}
