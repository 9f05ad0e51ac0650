mod extrema;
mod is_valid;

pub use extrema::{Extrema, ValueRange};
pub use is_valid::IsValid;
