pub mod bank;
pub(crate) mod coefficients;
pub mod design;
pub mod digital;
pub mod noise;

pub use bank::{FilterBank, FilterRole};
pub use digital::{DigitalFilter, FilterState};
