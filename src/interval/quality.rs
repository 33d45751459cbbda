//! Interval qualities, and the translation between a quality and the chromatic offset it
//! implies relative to the natural (major scale) position of a diatonic step.

use std::fmt;

use serde_derive::{Deserialize, Serialize};

use crate::interval::IntervalCoeff;

/// The five kinds of [Quality], without the multiplicity of augmented/diminished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QualityType {
    Perfect,
    Major,
    Minor,
    Augmented,
    Diminished,
}

impl fmt::Display for QualityType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            QualityType::Perfect => write!(f, "perfect"),
            QualityType::Major => write!(f, "major"),
            QualityType::Minor => write!(f, "minor"),
            QualityType::Augmented => write!(f, "augmented"),
            QualityType::Diminished => write!(f, "diminished"),
        }
    }
}

/// The quality of an interval.
///
/// The payload of [Quality::Augmented] and [Quality::Diminished] is the multiplicity: 1 for
/// a plain augmented/diminished interval, 2 for doubly augmented/diminished, and so on. The
/// qualities computed by [diff_quality] always have a positive multiplicity.
///
/// Serialized as a map with the keys `kind` and (for augmented and diminished) `size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "QualityFields", into = "QualityFields")]
pub enum Quality {
    Perfect,
    Major,
    Minor,
    Augmented(IntervalCoeff),
    Diminished(IntervalCoeff),
}

fn is_zero(n: &IntervalCoeff) -> bool {
    *n == 0
}

#[derive(Serialize, Deserialize, Clone, Copy)]
#[serde(deny_unknown_fields)]
#[serde(rename_all = "kebab-case")]
struct QualityFields {
    kind: QualityType,
    #[serde(default, skip_serializing_if = "is_zero")]
    size: IntervalCoeff,
}

impl From<QualityFields> for Quality {
    fn from(value: QualityFields) -> Self {
        Quality::new(value.kind, value.size)
    }
}

impl From<Quality> for QualityFields {
    fn from(value: Quality) -> Self {
        QualityFields {
            kind: value.kind(),
            size: value.size(),
        }
    }
}

impl Quality {
    /// Assemble a quality from its kind and multiplicity. The multiplicity is ignored for
    /// perfect, major, and minor.
    pub fn new(kind: QualityType, size: IntervalCoeff) -> Self {
        match kind {
            QualityType::Perfect => Quality::Perfect,
            QualityType::Major => Quality::Major,
            QualityType::Minor => Quality::Minor,
            QualityType::Augmented => Quality::Augmented(size),
            QualityType::Diminished => Quality::Diminished(size),
        }
    }

    pub fn kind(&self) -> QualityType {
        match self {
            Quality::Perfect => QualityType::Perfect,
            Quality::Major => QualityType::Major,
            Quality::Minor => QualityType::Minor,
            Quality::Augmented(_) => QualityType::Augmented,
            Quality::Diminished(_) => QualityType::Diminished,
        }
    }

    /// The multiplicity of augmented and diminished qualities, zero for all others.
    pub fn size(&self) -> IntervalCoeff {
        match self {
            Quality::Augmented(n) | Quality::Diminished(n) => *n,
            _ => 0,
        }
    }

    /// The quality seen from the other end of the interval: major and minor swap, augmented
    /// and diminished swap (keeping their multiplicity), perfect stays perfect.
    pub fn invert(self) -> Self {
        match self {
            Quality::Perfect => Quality::Perfect,
            Quality::Major => Quality::Minor,
            Quality::Minor => Quality::Major,
            Quality::Augmented(n) => Quality::Diminished(n),
            Quality::Diminished(n) => Quality::Augmented(n),
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.size() {
            0 | 1 => {}
            2 => write!(f, "doubly ")?,
            3 => write!(f, "triply ")?,
            n => write!(f, "{n}-fold ")?,
        }
        write!(f, "{}", self.kind())
    }
}

/// How many semitones an interval of the given quality lies above the natural chromatic
/// value of its diatonic step. `perfect` tells whether the step is one of unison, fourth,
/// or fifth.
///
/// [Quality::Perfect] on an imperfect step has offset 0, just like [Quality::Major].
pub fn quality_diff(perfect: bool, quality: Quality) -> IntervalCoeff {
    match quality {
        Quality::Perfect | Quality::Major => 0,
        Quality::Minor => -1,
        Quality::Augmented(n) => n,
        Quality::Diminished(n) => {
            if perfect {
                n.wrapping_neg()
            } else {
                n.wrapping_add(1).wrapping_neg()
            }
        }
    }
}

/// The inverse of [quality_diff]: classify an offset from the natural chromatic value.
pub fn diff_quality(perfect: bool, diff: IntervalCoeff) -> Quality {
    if perfect {
        return match diff {
            0 => Quality::Perfect,
            d if d > 0 => Quality::Augmented(d),
            d => Quality::Diminished(d.wrapping_neg()),
        };
    }

    match diff {
        0 => Quality::Major,
        -1 => Quality::Minor,
        d if d > 0 => Quality::Augmented(d),
        d => Quality::Diminished(d.wrapping_add(1).wrapping_neg()),
    }
}
