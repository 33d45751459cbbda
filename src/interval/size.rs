//! Numeric interval sizes, counted the musical way: the unison is 1, the octave is 8.

use crate::interval::IntervalCoeff;

pub const UNISON: IntervalCoeff = 1;
pub const SECOND: IntervalCoeff = 2;
pub const THIRD: IntervalCoeff = 3;
pub const FOURTH: IntervalCoeff = 4;
pub const FIFTH: IntervalCoeff = 5;
pub const SIXTH: IntervalCoeff = 6;
pub const SEVENTH: IntervalCoeff = 7;
pub const OCTAVE: IntervalCoeff = 8;
pub const NINTH: IntervalCoeff = 9;
pub const TENTH: IntervalCoeff = 10;
pub const ELEVENTH: IntervalCoeff = 11;
pub const TWELFTH: IntervalCoeff = 12;
pub const THIRTEENTH: IntervalCoeff = 13;
pub const FOURTEENTH: IntervalCoeff = 14;
/// The double octave. The name is kept as downstream code spells it.
pub const FIFTHEENTH: IntervalCoeff = 15;
