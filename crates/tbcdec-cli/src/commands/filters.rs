use anyhow::Result;
use clap::Args;
use tbcdec_core::filters::{DigitalFilter, FilterBank};

#[derive(Args)]
pub struct FiltersArgs {
    /// Print the magnitude response of one filter (e.g. "lpf")
    #[arg(long)]
    pub response: Option<String>,

    /// Number of frequency points for --response
    #[arg(long, default_value = "16")]
    pub points: usize,
}

/// Gain at half the sample rate, `H(-1)`.
fn nyquist_gain(filter: &DigitalFilter) -> f64 {
    let alternating = |coeffs: &[f64]| {
        coeffs
            .iter()
            .enumerate()
            .map(|(k, &c)| if k % 2 == 0 { c } else { -c })
            .sum::<f64>()
    };
    (alternating(filter.b()) / alternating(filter.a())).abs()
}

pub fn run(args: &FiltersArgs) -> Result<()> {
    let bank = FilterBank::global();

    if let Some(ref name) = args.response {
        let filter = bank.get(name)?;
        println!("{name}: |H| over [0, fs/2)");
        for (i, gain) in filter.frequency_response(args.points).iter().enumerate() {
            let freq = i as f64 / (args.points * 2) as f64;
            println!("  {freq:>6.3} fs  {gain:>10.6}");
        }
        return Ok(());
    }

    println!(
        "{:<12}{:<6}{:>6}{:>12}{:>12}",
        "Name", "Kind", "Taps", "DC gain", "fs/2 gain"
    );
    for (role, filter) in bank.iter() {
        let kind = if filter.is_fir() { "FIR" } else { "IIR" };
        println!(
            "{:<12}{:<6}{:>6}{:>12.6}{:>12.6}",
            role.name(),
            kind,
            filter.b().len(),
            filter.dc_gain(),
            nyquist_gain(filter)
        );
    }
    println!("\n{} filters", bank.len());

    Ok(())
}
