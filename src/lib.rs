//! Musical intervals, spelled diatonically.
//!
//! An [Interval][interval::Interval] knows its number of octaves, its step in the diatonic
//! scale, and its chromatic offset. From that, it derives its
//! [quality][interval::Quality] and its size in semitones, and it can be stacked on top of
//! other intervals:
//!
//! ```
//! use diatonic::interval::*;
//!
//! let fifth = major(THIRD) + minor(THIRD);
//! assert_eq!(fifth.semitones(), 7);
//! assert_eq!(fifth.quality(), Quality::Perfect);
//! ```
pub mod config;
pub mod interval;
