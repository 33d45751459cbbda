//! Intervals spelled diatonically: an octave count, a step of the diatonic scale, and a
//! chromatic offset. From these, the quality (major, minor, perfect, augmented, diminished)
//! is derived, and intervals can be stacked on top of each other.

use std::{error::Error, fmt};

pub mod base;
pub mod presets;
pub mod quality;
pub mod size;
pub mod step;

pub use base::*;
pub use presets::*;
pub use quality::*;
pub use size::*;
pub use step::*;

/// The type of integer coordinates of [Interval]s: octaves, chromatic offsets, numeric sizes,
/// and the multiplicities of [Quality]s.
pub type IntervalCoeff = i64;

#[derive(Debug, Clone, PartialEq)]
pub enum IntervalErr {
    DiatonicOutOfRange(&'static str, IntervalCoeff),
}

impl fmt::Display for IntervalErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntervalErr::DiatonicOutOfRange(fname, d) => write!(
                f,
                "diatonic step out of range in function '{}': expected a value between 0 and 6, got {}",
                fname, d
            ),
        }
    }
}

impl Error for IntervalErr {}
