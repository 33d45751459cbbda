//! Constructors for intervals of a fixed quality, taking the numeric size:
//! `major(THIRD)`, `diminished(FIFTH)`, `perfect(OCTAVE)`...

use crate::interval::{base::Interval, quality::Quality, IntervalCoeff};

pub fn perfect(size: IntervalCoeff) -> Interval {
    Interval::with_quality(Quality::Perfect, size)
}

pub fn major(size: IntervalCoeff) -> Interval {
    Interval::with_quality(Quality::Major, size)
}

pub fn minor(size: IntervalCoeff) -> Interval {
    Interval::with_quality(Quality::Minor, size)
}

pub fn augmented(size: IntervalCoeff) -> Interval {
    Interval::with_quality(Quality::Augmented(1), size)
}

pub fn doubly_augmented(size: IntervalCoeff) -> Interval {
    Interval::with_quality(Quality::Augmented(2), size)
}

pub fn diminished(size: IntervalCoeff) -> Interval {
    Interval::with_quality(Quality::Diminished(1), size)
}

pub fn doubly_diminished(size: IntervalCoeff) -> Interval {
    Interval::with_quality(Quality::Diminished(2), size)
}
