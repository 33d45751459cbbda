//! Tables of named intervals, as they may appear in configuration files.
//!
//! Each entry gives a name, a short name, a quality and a numeric size. Entries are checked
//! for consistency when a table is built (no perfect thirds, no major fifths, no duplicate
//! names) and resolved to [Interval]s.

use std::{collections::HashMap, error::Error, fmt, sync::LazyLock};

use serde_derive::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::interval::{size::*, DiatonicStep, Interval, IntervalCoeff, Quality, QualityType};

fn single() -> IntervalCoeff {
    1
}

fn is_single(n: &IntervalCoeff) -> bool {
    *n == 1
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[serde(rename_all = "kebab-case")]
pub struct NamedIntervalConfig {
    pub name: String,
    pub short_name: String,
    pub quality: QualityType,
    /// Only used for augmented and diminished intervals: 2 means "doubly", and so on.
    #[serde(default = "single", skip_serializing_if = "is_single")]
    pub multiplicity: IntervalCoeff,
    pub size: IntervalCoeff,
}

impl NamedIntervalConfig {
    pub fn new(
        name: &str,
        short_name: &str,
        quality: QualityType,
        multiplicity: IntervalCoeff,
        size: IntervalCoeff,
    ) -> Self {
        NamedIntervalConfig {
            name: name.into(),
            short_name: short_name.into(),
            quality,
            multiplicity,
            size,
        }
    }

    pub fn quality(&self) -> Quality {
        Quality::new(self.quality, self.multiplicity)
    }

    fn validate(&self) -> Result<(), ConfigErr> {
        if self.size < 1 {
            return Err(ConfigErr::InvalidSize(self.name.clone(), self.size));
        }

        let perfect = DiatonicStep::from_size(self.size).is_perfect();
        match self.quality {
            QualityType::Augmented | QualityType::Diminished if self.multiplicity < 1 => Err(
                ConfigErr::InvalidMultiplicity(self.name.clone(), self.multiplicity),
            ),
            QualityType::Perfect if !perfect => Err(ConfigErr::QualityMismatch(
                self.name.clone(),
                self.quality,
                self.size,
            )),
            QualityType::Major | QualityType::Minor if perfect => Err(
                ConfigErr::QualityMismatch(self.name.clone(), self.quality, self.size),
            ),
            _ => Ok(()),
        }
    }
}

/// An entry of an [IntervalTable], together with the [Interval] it describes.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedInterval {
    config: NamedIntervalConfig,
    interval: Interval,
}

impl NamedInterval {
    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn short_name(&self) -> &str {
        &self.config.short_name
    }

    pub fn quality(&self) -> Quality {
        self.config.quality()
    }

    pub fn interval(&self) -> &Interval {
        &self.interval
    }

    pub fn config(&self) -> &NamedIntervalConfig {
        &self.config
    }
}

#[derive(Debug, Clone, Default)]
pub struct IntervalTable {
    entries: Vec<NamedInterval>,
    by_name: HashMap<String, usize>,
    by_short_name: HashMap<String, usize>,
}

impl IntervalTable {
    pub fn from_configs(configs: Vec<NamedIntervalConfig>) -> Result<Self, ConfigErr> {
        let mut table = IntervalTable::default();
        for config in configs {
            if let Err(e) = table.push(config) {
                warn!("rejecting interval table: {e}");
                return Err(e);
            }
        }
        debug!("resolved interval table with {} entries", table.len());
        Ok(table)
    }

    /// Read a YAML list of [NamedIntervalConfig]s.
    pub fn from_yaml(src: &str) -> Result<Self, ConfigErr> {
        let configs: Vec<NamedIntervalConfig> = serde_yml::from_str(src)?;
        Self::from_configs(configs)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigErr> {
        let configs: Vec<&NamedIntervalConfig> = self.entries.iter().map(|e| &e.config).collect();
        Ok(serde_yml::to_string(&configs)?)
    }

    /// The simple intervals from the perfect unison to the perfect octave, with the tritone
    /// spelled both as augmented fourth and as diminished fifth.
    pub fn standard() -> &'static IntervalTable {
        &STANDARD_TABLE
    }

    fn push(&mut self, config: NamedIntervalConfig) -> Result<(), ConfigErr> {
        config.validate()?;
        if self.by_name.contains_key(&config.name) {
            return Err(ConfigErr::DuplicateName(config.name));
        }
        if self.by_short_name.contains_key(&config.short_name) {
            return Err(ConfigErr::DuplicateShortName(config.short_name));
        }

        let interval = Interval::with_quality(config.quality(), config.size);
        trace!("{} ({}): {interval}", config.name, config.short_name);

        let ix = self.entries.len();
        self.by_name.insert(config.name.clone(), ix);
        self.by_short_name.insert(config.short_name.clone(), ix);
        self.entries.push(NamedInterval { config, interval });
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&NamedInterval> {
        self.by_name.get(name).map(|&ix| &self.entries[ix])
    }

    pub fn get_by_short_name(&self, short_name: &str) -> Option<&NamedInterval> {
        self.by_short_name.get(short_name).map(|&ix| &self.entries[ix])
    }

    /// The first entry that describes exactly the given interval. Enharmonic equivalents
    /// (like the augmented fourth and the diminished fifth) don't match each other.
    pub fn find(&self, interval: &Interval) -> Option<&NamedInterval> {
        self.entries.iter().find(|e| e.interval == *interval)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedInterval> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn standard_configs() -> Vec<NamedIntervalConfig> {
    use QualityType::*;
    vec![
        NamedIntervalConfig::new("perfect unison", "P1", Perfect, 1, UNISON),
        NamedIntervalConfig::new("minor second", "m2", Minor, 1, SECOND),
        NamedIntervalConfig::new("major second", "M2", Major, 1, SECOND),
        NamedIntervalConfig::new("minor third", "m3", Minor, 1, THIRD),
        NamedIntervalConfig::new("major third", "M3", Major, 1, THIRD),
        NamedIntervalConfig::new("perfect fourth", "P4", Perfect, 1, FOURTH),
        NamedIntervalConfig::new("augmented fourth", "A4", Augmented, 1, FOURTH),
        NamedIntervalConfig::new("diminished fifth", "d5", Diminished, 1, FIFTH),
        NamedIntervalConfig::new("perfect fifth", "P5", Perfect, 1, FIFTH),
        NamedIntervalConfig::new("minor sixth", "m6", Minor, 1, SIXTH),
        NamedIntervalConfig::new("major sixth", "M6", Major, 1, SIXTH),
        NamedIntervalConfig::new("minor seventh", "m7", Minor, 1, SEVENTH),
        NamedIntervalConfig::new("major seventh", "M7", Major, 1, SEVENTH),
        NamedIntervalConfig::new("perfect octave", "P8", Perfect, 1, OCTAVE),
    ]
}

// The entries above are fixed, and checked by the tests below, so this can't fail.
static STANDARD_TABLE: LazyLock<IntervalTable> =
    LazyLock::new(|| IntervalTable::from_configs(standard_configs()).unwrap());

#[derive(Debug)]
pub enum ConfigErr {
    FromYaml(serde_yml::Error),
    InvalidSize(String, IntervalCoeff),
    InvalidMultiplicity(String, IntervalCoeff),
    QualityMismatch(String, QualityType, IntervalCoeff),
    DuplicateName(String),
    DuplicateShortName(String),
}

impl fmt::Display for ConfigErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigErr::FromYaml(e) => write!(f, "could not read interval table: {}", e),
            ConfigErr::InvalidSize(name, size) => write!(
                f,
                "interval '{}' has size {}, but sizes start at 1 (the unison)",
                name, size
            ),
            ConfigErr::InvalidMultiplicity(name, n) => write!(
                f,
                "interval '{}' has multiplicity {}, but it must be at least 1",
                name, n
            ),
            ConfigErr::QualityMismatch(name, quality, size) => write!(
                f,
                "interval '{}': there is no {} interval of size {}",
                name, quality, size
            ),
            ConfigErr::DuplicateName(name) => {
                write!(f, "the interval name '{}' is used more than once", name)
            }
            ConfigErr::DuplicateShortName(name) => {
                write!(f, "the short name '{}' is used more than once", name)
            }
        }
    }
}

impl Error for ConfigErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigErr::FromYaml(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_yml::Error> for ConfigErr {
    fn from(value: serde_yml::Error) -> Self {
        Self::FromYaml(value)
    }
}
