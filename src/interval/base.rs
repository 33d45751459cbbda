use std::{fmt, ops};

use num_integer::Integer;
use serde_derive::{Deserialize, Serialize};

use crate::interval::{
    quality::{diff_quality, quality_diff, Quality, QualityType},
    step::DiatonicStep,
    IntervalCoeff, IntervalErr,
};

/// The type of interval sizes measured in equally tempered semitones
pub type Semitones = f64;

/// An interval, spelled diatonically.
///
/// Three numbers describe it: how many whole octaves it spans, which [DiatonicStep] it
/// reaches within the last octave, and its chromatic offset (in semitones) from the tonic
/// within that octave. The chromatic offset is not normalised: an augmented seventh has
/// chromatic offset 12, but is still a seventh.
///
/// The [quality][Interval::quality] is not stored; it's computed from how far the chromatic
/// offset lies from the [natural chromatic value][DiatonicStep::natural_chromatic] of the step.
///
/// All arithmetic on the coordinates wraps around at the bounds of [IntervalCoeff] instead of
/// panicking. Results are only meaningful while octaves times 12 fit into an [IntervalCoeff].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Interval {
    octaves: IntervalCoeff,
    diatonic: DiatonicStep,
    chromatic: IntervalCoeff,
}

impl Interval {
    /// The interval of numeric size `size` (1 = unison, 3 = third, 8 = octave, ...), sitting
    /// `offset` semitones above the natural position of its step. `Interval::new(3, -1)` is a
    /// minor third.
    pub fn new(size: IntervalCoeff, offset: IntervalCoeff) -> Self {
        let (octaves, rem) = size.wrapping_sub(1).div_mod_floor(&7);
        let diatonic = DiatonicStep::ALL[rem as usize];
        Interval {
            octaves,
            diatonic,
            chromatic: diatonic.natural_chromatic().wrapping_add(offset),
        }
    }

    /// The interval of numeric size `size` with the given quality.
    pub fn with_quality(quality: Quality, size: IntervalCoeff) -> Self {
        let diff = quality_diff(DiatonicStep::from_size(size).is_perfect(), quality);
        Self::new(size, diff)
    }

    pub fn from_parts(
        octaves: IntervalCoeff,
        diatonic: DiatonicStep,
        chromatic: IntervalCoeff,
    ) -> Self {
        Interval {
            octaves,
            diatonic,
            chromatic,
        }
    }

    /// Like [from_parts][Interval::from_parts], with the diatonic step given by its index.
    pub fn try_from_parts(
        octaves: IntervalCoeff,
        diatonic: IntervalCoeff,
        chromatic: IntervalCoeff,
    ) -> Result<Self, IntervalErr> {
        Ok(Self::from_parts(
            octaves,
            DiatonicStep::checked("Interval::try_from_parts", diatonic)?,
            chromatic,
        ))
    }

    pub fn octaves(&self) -> IntervalCoeff {
        self.octaves
    }

    /// The index of the [diatonic_step][Interval::diatonic_step], between 0 and 6.
    pub fn diatonic(&self) -> IntervalCoeff {
        self.diatonic.index()
    }

    pub fn diatonic_step(&self) -> DiatonicStep {
        self.diatonic
    }

    pub fn chromatic(&self) -> IntervalCoeff {
        self.chromatic
    }

    /// Semitones above (or, if negative, below) the natural chromatic value of the step.
    pub fn diff(&self) -> IntervalCoeff {
        self.chromatic.wrapping_sub(self.diatonic.natural_chromatic())
    }

    /// The total size in semitones.
    pub fn semitones(&self) -> IntervalCoeff {
        self.octaves.wrapping_mul(12).wrapping_add(self.chromatic)
    }

    /// The frequency ratio of this interval in twelve-tone equal temperament.
    pub fn equal_tempered_ratio(&self) -> f64 {
        (self.semitones() as Semitones / 12.0).exp2()
    }

    /// Intervals with a negative number of octaves are measured downwards, so they report the
    /// [inverted][Quality::invert] quality: a downward major third is minor.
    pub fn quality(&self) -> Quality {
        let quality = diff_quality(self.diatonic.is_perfect(), self.diff());
        if self.octaves < 0 {
            quality.invert()
        } else {
            quality
        }
    }

    pub fn has_quality_type(&self, t: QualityType) -> bool {
        self.quality().kind() == t
    }

    /// Stack `other` on top of this interval.
    ///
    /// When the diatonic steps add up to an octave or more, the octave count goes up by one
    /// and the summed chromatic offset is reduced modulo 12. Otherwise the chromatic offsets
    /// are simply added, even if the sum leaves the octave.
    pub fn add_interval(&self, other: &Interval) -> Interval {
        let (carry, diatonic) = self.diatonic.add_steps(other.diatonic);
        let mut chromatic = self.chromatic.wrapping_add(other.chromatic);
        if carry > 0 {
            chromatic = chromatic.mod_floor(&12);
        }

        Interval {
            octaves: self.octaves.wrapping_add(other.octaves).wrapping_add(carry),
            diatonic,
            chromatic,
        }
    }
}

impl ops::Add for Interval {
    type Output = Self;

    /// See [add_interval][Interval::add_interval].
    fn add(self, x: Self) -> Self {
        self.add_interval(&x)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "(octaves: {}, diatonic: {}, chromatic: {})",
            self.octaves,
            self.diatonic.index(),
            self.chromatic
        )
    }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::interval::{presets::*, size::*};

    #[test]
    fn test_new() {
        let i = Interval::new(TENTH, -1);
        assert_eq!(i.octaves(), 1);
        assert_eq!(i.diatonic(), 2);
        assert_eq!(i.chromatic(), 3);
        assert_eq!(i.diff(), -1);
        assert_eq!(i.semitones(), 15);

        let i = Interval::new(OCTAVE, 0);
        assert_eq!((i.octaves(), i.diatonic(), i.chromatic()), (1, 0, 0));

        let i = Interval::new(FIFTHEENTH, 0);
        assert_eq!((i.octaves(), i.diatonic(), i.chromatic()), (2, 0, 0));

        // sizes below unison count downwards
        let i = Interval::new(-1, 0);
        assert_eq!((i.octaves(), i.diatonic(), i.chromatic()), (-1, 5, 9));
    }

    #[test]
    fn test_perfect_steps_roundtrip() {
        for size in [UNISON, FOURTH, FIFTH, OCTAVE, ELEVENTH, TWELFTH] {
            for d in -4..=4 {
                let expected = if d == 0 {
                    Quality::Perfect
                } else if d > 0 {
                    Quality::Augmented(d)
                } else {
                    Quality::Diminished(-d)
                };
                assert_eq!(
                    Interval::new(size, d).quality(),
                    expected,
                    "size: {size}, offset: {d}"
                );
            }
        }
    }

    #[test]
    fn test_imperfect_steps_roundtrip() {
        for size in [SECOND, THIRD, SIXTH, SEVENTH, NINTH, TENTH, THIRTEENTH, FOURTEENTH] {
            for d in -4..=4 {
                let expected = match d {
                    0 => Quality::Major,
                    -1 => Quality::Minor,
                    d if d > 0 => Quality::Augmented(d),
                    d => Quality::Diminished(-(d + 1)),
                };
                assert_eq!(
                    Interval::new(size, d).quality(),
                    expected,
                    "size: {size}, offset: {d}"
                );
            }
        }
    }

    #[test]
    fn test_with_quality_roundtrip() {
        let qualities = [
            Quality::Perfect,
            Quality::Major,
            Quality::Minor,
            Quality::Augmented(1),
            Quality::Augmented(2),
            Quality::Diminished(1),
            Quality::Diminished(2),
        ];
        for size in UNISON..=FIFTHEENTH {
            let perfect = DiatonicStep::from_size(size).is_perfect();
            for q in qualities {
                match q {
                    Quality::Perfect if !perfect => continue,
                    Quality::Major | Quality::Minor if perfect => continue,
                    _ => {}
                }
                assert_eq!(
                    Interval::with_quality(q, size).quality(),
                    q,
                    "size: {size}, quality: {q}"
                );
            }
        }
    }

    #[test]
    fn test_downward_quality() {
        for step in DiatonicStep::ALL {
            for d in -3..=3 {
                let chromatic = step.natural_chromatic() + d;
                let up = Interval::from_parts(0, step, chromatic);
                let down = Interval::from_parts(-1, step, chromatic);
                assert_eq!(down.quality(), up.quality().invert());
            }
        }

        assert_eq!(
            Interval::from_parts(-1, DiatonicStep::Third, 4).quality(),
            Quality::Minor
        );
        assert_eq!(
            Interval::from_parts(-2, DiatonicStep::Fourth, 6).quality(),
            Quality::Diminished(1)
        );
    }

    #[test]
    fn test_named_semitones() {
        assert_eq!(major(THIRD).semitones(), 4);
        assert_eq!(minor(THIRD).semitones(), 3);
        assert_eq!(perfect(FIFTH).semitones(), 7);
        assert_eq!(augmented(FOURTH).semitones(), 6);
        assert_eq!(diminished(FIFTH).semitones(), 6);
        assert_eq!(perfect(OCTAVE).semitones(), 12);
        assert_eq!(diminished(SEVENTH).semitones(), 9);
        assert_eq!(doubly_augmented(FOURTH).semitones(), 7);
        assert_eq!(doubly_diminished(FIFTH).semitones(), 5);
        assert_eq!(major(THIRTEENTH).semitones(), 21);
    }

    #[test]
    fn test_has_quality_type() {
        assert!(major(SIXTH).has_quality_type(QualityType::Major));
        assert!(!major(SIXTH).has_quality_type(QualityType::Minor));
        assert!(doubly_diminished(SECOND).has_quality_type(QualityType::Diminished));
        assert!(perfect(TWELFTH).has_quality_type(QualityType::Perfect));
    }

    #[test]
    fn test_add_thirds() {
        let fifth = major(THIRD).add_interval(&minor(THIRD));
        assert_eq!(fifth, perfect(FIFTH));
        assert_eq!(fifth.semitones(), 7);
        assert_eq!(fifth.quality(), Quality::Perfect);

        assert_eq!(minor(THIRD) + major(THIRD), perfect(FIFTH));
        assert_eq!(major(THIRD) + major(THIRD), augmented(FIFTH));
        assert_eq!(minor(THIRD) + minor(THIRD), diminished(FIFTH));
    }

    #[test]
    fn test_add_octave_carry() {
        // 4 + 4 diatonic steps cross the octave: chromatic 7 + 7 = 14 wraps to 2
        let ninth = perfect(FIFTH) + perfect(FIFTH);
        assert_eq!(ninth.octaves(), 1);
        assert_eq!(ninth.diatonic_step(), DiatonicStep::Second);
        assert_eq!(ninth.chromatic(), 2);
        assert_eq!(ninth, major(NINTH));

        let i = major(SEVENTH) + major(SECOND);
        assert_eq!(i.octaves(), 1);
        assert_eq!(i.diatonic_step(), DiatonicStep::First);
        assert_eq!(i.chromatic(), 1);
        assert_eq!(i.quality(), Quality::Augmented(1));

        // the carry is one octave on top of the inputs' own octaves
        let i = major(TENTH) + major(THIRTEENTH);
        assert_eq!(i.octaves(), 1 + 1 + 1);
        assert_eq!(i.diatonic_step(), DiatonicStep::First);
        assert_eq!(i.chromatic(), 1);

        // a negative chromatic sum wraps into 0..12 as well: -4 + 2 = -2 becomes 10
        let i = Interval::new(SEVENTH, -15) + Interval::new(SECOND, 0);
        assert_eq!(i.octaves(), 1);
        assert_eq!(i.diatonic_step(), DiatonicStep::First);
        assert_eq!(i.chromatic(), 10);
    }

    #[test]
    fn test_extreme_sizes_wrap() {
        // IntervalCoeff::MAX is a multiple of 7, so MAX - 1 lands on the seventh
        let i = Interval::new(IntervalCoeff::MAX, 0);
        assert_eq!(i.diatonic_step(), DiatonicStep::Seventh);
        assert_eq!(i.octaves(), IntervalCoeff::MAX / 7 - 1);
        assert_eq!(i.chromatic(), 11);
        assert_eq!(i.quality(), Quality::Major);
        assert_eq!(
            i.semitones(),
            (IntervalCoeff::MAX / 7 - 1).wrapping_mul(12).wrapping_add(11)
        );

        // MIN - 1 wraps to MAX, which lands on the unison
        let i = Interval::new(IntervalCoeff::MIN, IntervalCoeff::MAX);
        assert_eq!(i.diatonic_step(), DiatonicStep::First);
        assert_eq!(i.chromatic(), IntervalCoeff::MAX);
        assert_eq!(i.quality(), Quality::Augmented(IntervalCoeff::MAX));
        let doubled = i + i;
        assert_eq!(doubled.chromatic(), IntervalCoeff::MAX.wrapping_mul(2));
        let _ = doubled.semitones();
    }

    #[test]
    fn test_add_without_carry_keeps_chromatic() {
        // six diatonic steps don't cross the octave, so the chromatic sum of 12 is kept
        let i = augmented(FOURTH) + augmented(FOURTH);
        assert_eq!(i.octaves(), 0);
        assert_eq!(i.diatonic_step(), DiatonicStep::Seventh);
        assert_eq!(i.chromatic(), 12);
        assert_eq!(i.quality(), Quality::Augmented(1));
        assert_eq!(i.semitones(), 12);

        let i = perfect(OCTAVE) + perfect(OCTAVE);
        assert_eq!((i.octaves(), i.diatonic(), i.chromatic()), (2, 0, 0));
    }

    #[test]
    fn test_try_from_parts() {
        assert_eq!(Interval::try_from_parts(1, 2, 4), Ok(major(TENTH)));
        assert_eq!(
            Interval::try_from_parts(0, 7, 12),
            Err(IntervalErr::DiatonicOutOfRange("Interval::try_from_parts", 7))
        );
    }

    #[test]
    fn test_equal_tempered_ratio() {
        let eps = 0.00000000001;
        assert_relative_eq!(perfect(OCTAVE).equal_tempered_ratio(), 2.0, max_relative = eps);
        assert_relative_eq!(perfect(UNISON).equal_tempered_ratio(), 1.0, max_relative = eps);
        assert_relative_eq!(
            perfect(FIFTH).equal_tempered_ratio(),
            (7.0 / 12.0 as f64).exp2(),
            max_relative = eps
        );
        assert_relative_eq!(
            Interval::from_parts(-1, DiatonicStep::First, 0).equal_tempered_ratio(),
            0.5,
            max_relative = eps
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            major(TENTH).to_string(),
            "(octaves: 1, diatonic: 2, chromatic: 4)"
        );
        assert_eq!(
            diminished(UNISON).to_string(),
            "(octaves: 0, diatonic: 0, chromatic: -1)"
        );
    }

    #[test]
    fn test_serialize() {
        assert_eq!(
            serde_yml::to_string(&minor(TENTH)).unwrap(),
            "octaves: 1\ndiatonic: 2\nchromatic: 3\n"
        );
    }

    #[test]
    fn test_deserialize() {
        assert_eq!(
            serde_yml::from_str::<Interval>("octaves: 0\ndiatonic: 4\nchromatic: 8\n").unwrap(),
            augmented(FIFTH)
        );
        assert!(
            serde_yml::from_str::<Interval>("octaves: 0\ndiatonic: 7\nchromatic: 0\n").is_err()
        );
    }
}
