//! The seven steps of the diatonic scale, and where they sit chromatically.

use std::fmt;

use num_integer::Integer;
use serde_derive::{Deserialize, Serialize};

use crate::interval::{IntervalCoeff, IntervalErr};

/// Semitones above the tonic for each step of the major scale.
const NATURAL_CHROMATIC: [IntervalCoeff; 7] = [0, 2, 4, 5, 7, 9, 11];

/// A zero-based position in the seven-note major scale. The numeric interval "third" is
/// [DiatonicStep::Third], which has index 2.
///
/// Serialized as its index, so that a stored interval reads like its [Display][fmt::Display]
/// rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "IntervalCoeff", into = "IntervalCoeff")]
pub enum DiatonicStep {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
}

impl DiatonicStep {
    pub const ALL: [DiatonicStep; 7] = [
        DiatonicStep::First,
        DiatonicStep::Second,
        DiatonicStep::Third,
        DiatonicStep::Fourth,
        DiatonicStep::Fifth,
        DiatonicStep::Sixth,
        DiatonicStep::Seventh,
    ];

    /// The step of a numeric interval size (1 = unison, 8 = octave, ...), folded into one
    /// octave. Sizes below 1 fold downwards, so that 0 is a seventh.
    pub fn from_size(size: IntervalCoeff) -> Self {
        Self::ALL[size.wrapping_sub(1).mod_floor(&7) as usize]
    }

    /// The zero-based index, between 0 and 6.
    pub fn index(self) -> IntervalCoeff {
        self as IntervalCoeff
    }

    /// Semitones above the tonic of this step on the unaltered major scale.
    pub fn natural_chromatic(self) -> IntervalCoeff {
        NATURAL_CHROMATIC[self as usize]
    }

    /// Unison, fourth and fifth are measured on the perfect/augmented/diminished axis; all
    /// other steps on the major/minor/augmented/diminished axis.
    pub fn is_perfect(self) -> bool {
        matches!(
            self,
            DiatonicStep::First | DiatonicStep::Fourth | DiatonicStep::Fifth
        )
    }

    /// Stack two steps. Returns the number of octaves crossed and the remaining step.
    pub fn add_steps(self, other: DiatonicStep) -> (IntervalCoeff, DiatonicStep) {
        let (carry, rem) = (self.index() + other.index()).div_mod_floor(&7);
        (carry, Self::ALL[rem as usize])
    }

    pub(crate) fn checked(fname: &'static str, index: IntervalCoeff) -> Result<Self, IntervalErr> {
        if (0..7).contains(&index) {
            Ok(Self::ALL[index as usize])
        } else {
            Err(IntervalErr::DiatonicOutOfRange(fname, index))
        }
    }
}

impl TryFrom<IntervalCoeff> for DiatonicStep {
    type Error = IntervalErr;

    fn try_from(value: IntervalCoeff) -> Result<Self, Self::Error> {
        Self::checked("DiatonicStep::try_from", value)
    }
}

impl From<DiatonicStep> for IntervalCoeff {
    fn from(value: DiatonicStep) -> Self {
        value.index()
    }
}

impl fmt::Display for DiatonicStep {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DiatonicStep::First => write!(f, "unison"),
            DiatonicStep::Second => write!(f, "second"),
            DiatonicStep::Third => write!(f, "third"),
            DiatonicStep::Fourth => write!(f, "fourth"),
            DiatonicStep::Fifth => write!(f, "fifth"),
            DiatonicStep::Sixth => write!(f, "sixth"),
            DiatonicStep::Seventh => write!(f, "seventh"),
        }
    }
}

/// The natural chromatic value of a raw diatonic step: `[0, 2, 4, 5, 7, 9, 11]` for the steps
/// 0 to 6. Anything else is an error.
pub fn diatonic_to_chromatic(diatonic: IntervalCoeff) -> Result<IntervalCoeff, IntervalErr> {
    Ok(DiatonicStep::checked("diatonic_to_chromatic", diatonic)?.natural_chromatic())
}
