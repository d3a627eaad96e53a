use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::{Result, TbcError};

use super::coefficients as c;
use super::digital::DigitalFilter;

/// Pipeline role of a catalogue filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterRole {
    /// De-emphasis at standard speed (IIR).
    Deemp,
    /// De-emphasis at the 10x rate (IIR).
    Deemp10,
    Boost,
    Boost10,
    Color,
    ColorLp4,
    ColorWideLp4,
    ColorBp4,
    ColorBp8,
    Lpf,
    Lpf4,
    Lpf10,
    Lpf42,
    Lpf10h,
    Sync,
    DSync,
    Sync4,
    DSync4,
    Sync10,
    DSync10,
    /// Luma noise reduction.
    Nr,
    /// Chroma noise reduction.
    Nrc,
    /// Audio input anti-alias (IIR).
    AudioIn,
    AudioLp,
    AudioLp20,
    A500At48k,
    A500At44k,
    A40hAt48k,
    LeftBp,
    RightBp,
    /// Delay matched to the Hilbert kernel (real part).
    HilbertR,
    /// Hilbert transform kernel (imaginary part).
    HilbertI,
    FmDeemp,
}

impl FilterRole {
    pub const ALL: [FilterRole; 33] = [
        Self::Deemp,
        Self::Deemp10,
        Self::Boost,
        Self::Boost10,
        Self::Color,
        Self::ColorLp4,
        Self::ColorWideLp4,
        Self::ColorBp4,
        Self::ColorBp8,
        Self::Lpf,
        Self::Lpf4,
        Self::Lpf10,
        Self::Lpf42,
        Self::Lpf10h,
        Self::Sync,
        Self::DSync,
        Self::Sync4,
        Self::DSync4,
        Self::Sync10,
        Self::DSync10,
        Self::Nr,
        Self::Nrc,
        Self::AudioIn,
        Self::AudioLp,
        Self::AudioLp20,
        Self::A500At48k,
        Self::A500At44k,
        Self::A40hAt48k,
        Self::LeftBp,
        Self::RightBp,
        Self::HilbertR,
        Self::HilbertI,
        Self::FmDeemp,
    ];

    /// Catalogue name of the role.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Deemp => "deemp",
            Self::Deemp10 => "deemp10",
            Self::Boost => "boost",
            Self::Boost10 => "boost10",
            Self::Color => "color",
            Self::ColorLp4 => "colorlp4",
            Self::ColorWideLp4 => "colorwlp4",
            Self::ColorBp4 => "colorbp4",
            Self::ColorBp8 => "colorbp8",
            Self::Lpf => "lpf",
            Self::Lpf4 => "lpf4",
            Self::Lpf10 => "lpf10",
            Self::Lpf42 => "lpf42",
            Self::Lpf10h => "lpf10h",
            Self::Sync => "sync",
            Self::DSync => "dsync",
            Self::Sync4 => "sync4",
            Self::DSync4 => "dsync4",
            Self::Sync10 => "sync10",
            Self::DSync10 => "dsync10",
            Self::Nr => "nr",
            Self::Nrc => "nrc",
            Self::AudioIn => "audioin",
            Self::AudioLp => "audiolp",
            Self::AudioLp20 => "audiolp20",
            Self::A500At48k => "a500_48k",
            Self::A500At44k => "a500_44k",
            Self::A40hAt48k => "a40h_48k",
            Self::LeftBp => "leftbp",
            Self::RightBp => "rightbp",
            Self::HilbertR => "hilbertr",
            Self::HilbertI => "hilberti",
            Self::FmDeemp => "fmdeemp",
        }
    }

    fn table(&self) -> (&'static [f64], &'static [f64]) {
        match self {
            Self::Deemp => (c::DEEMP_B, c::DEEMP_A),
            Self::Deemp10 => (c::DEEMP10_B, c::DEEMP10_A),
            Self::Boost => (c::BOOST_B, c::BOOST_A),
            Self::Boost10 => (c::BOOST10_B, c::BOOST10_A),
            Self::Color => (c::COLOR_B, c::COLOR_A),
            Self::ColorLp4 => (c::COLORLP4_B, c::COLORLP4_A),
            Self::ColorWideLp4 => (c::COLORWLP4_B, c::COLORWLP4_A),
            Self::ColorBp4 => (c::COLORBP4_B, c::COLORBP4_A),
            Self::ColorBp8 => (c::COLORBP8_B, c::COLORBP8_A),
            Self::Lpf => (c::LPF_B, c::LPF_A),
            Self::Lpf4 => (c::LPF4_B, c::LPF4_A),
            Self::Lpf10 => (c::LPF10_B, c::LPF10_A),
            Self::Lpf42 => (c::LPF42_B, c::LPF42_A),
            Self::Lpf10h => (c::LPF10H_B, c::LPF10H_A),
            Self::Sync => (c::SYNC_B, c::SYNC_A),
            Self::DSync => (c::DSYNC_B, c::DSYNC_A),
            Self::Sync4 => (c::SYNC4_B, c::SYNC4_A),
            Self::DSync4 => (c::DSYNC4_B, c::DSYNC4_A),
            Self::Sync10 => (c::SYNC10_B, c::SYNC10_A),
            Self::DSync10 => (c::DSYNC10_B, c::DSYNC10_A),
            Self::Nr => (c::NR_B, c::NR_A),
            Self::Nrc => (c::NRC_B, c::NRC_A),
            Self::AudioIn => (c::AUDIOIN_B, c::AUDIOIN_A),
            Self::AudioLp => (c::AUDIOLP_B, c::AUDIOLP_A),
            Self::AudioLp20 => (c::AUDIOLP20_B, c::AUDIOLP20_A),
            Self::A500At48k => (c::A500_48K_B, c::A500_48K_A),
            Self::A500At44k => (c::A500_44K_B, c::A500_44K_A),
            Self::A40hAt48k => (c::A40H_48K_B, c::A40H_48K_A),
            Self::LeftBp => (c::LEFTBP_B, c::LEFTBP_A),
            Self::RightBp => (c::RIGHTBP_B, c::RIGHTBP_A),
            Self::HilbertR => (c::HILBERTR_B, c::HILBERTR_A),
            Self::HilbertI => (c::HILBERTI_B, c::HILBERTI_A),
            Self::FmDeemp => (c::FMDEEMP_B, c::FMDEEMP_A),
        }
    }
}

impl std::fmt::Display for FilterRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for FilterRole {
    type Err = TbcError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|role| role.name() == s)
            .ok_or_else(|| TbcError::UnknownFilter(s.to_string()))
    }
}

static GLOBAL_BANK: LazyLock<FilterBank> = LazyLock::new(FilterBank::build);

/// The process-wide filter catalogue, keyed by role.
///
/// Built once on first use and never mutated, so it can be shared by every
/// decoder thread without locking.
#[derive(Debug)]
pub struct FilterBank {
    filters: BTreeMap<FilterRole, DigitalFilter>,
}

impl FilterBank {
    fn build() -> Self {
        let filters = FilterRole::ALL
            .iter()
            .map(|&role| {
                let (b, a) = role.table();
                (role, DigitalFilter::from_table(b, a))
            })
            .collect();
        Self { filters }
    }

    pub fn global() -> &'static FilterBank {
        &GLOBAL_BANK
    }

    /// Filter for a typed role. Every role is present.
    pub fn filter(&self, role: FilterRole) -> &DigitalFilter {
        &self.filters[&role]
    }

    /// Filter by catalogue name, e.g. `"lpf"` or `"hilberti"`.
    pub fn get(&self, name: &str) -> Result<&DigitalFilter> {
        let role: FilterRole = name.parse()?;
        Ok(self.filter(role))
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// All filters in catalogue order.
    pub fn iter(&self) -> impl Iterator<Item = (FilterRole, &DigitalFilter)> {
        self.filters.iter().map(|(&role, f)| (role, f))
    }
}

/// Shorthand for `FilterBank::global().filter(role)`.
pub fn filter(role: FilterRole) -> &'static DigitalFilter {
    FilterBank::global().filter(role)
}
