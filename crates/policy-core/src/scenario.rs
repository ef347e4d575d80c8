//! Simulated district scenarios
//!
//! Scenarios exist only to narrate a run. They are drawn, folded into a
//! [`ScenarioSummary`] and dropped; the exported rules never see them.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::ops::RangeInclusive;

/// Inclusive range of simulated enrollment saturation, in percent
pub const SATURATION_RANGE: RangeInclusive<u8> = 10..=90;

/// Saturation below this counts as a low-saturation district
pub const LOW_SATURATION_THRESHOLD: u8 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Area {
    Rural,
    Urban,
}

impl Area {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rural => "Rural",
            Self::Urban => "Urban",
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One simulated district
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    pub saturation: u8,
    pub area: Area,
}

impl Scenario {
    /// Draw a scenario: uniform saturation over [`SATURATION_RANGE`],
    /// uniform choice of area.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let saturation = rng.gen_range(SATURATION_RANGE);
        let area = if rng.gen_bool(0.5) {
            Area::Rural
        } else {
            Area::Urban
        };
        Self { saturation, area }
    }
}

/// Aggregate of a batch of scenarios, used for log narration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScenarioSummary {
    pub total: usize,
    pub rural: usize,
    pub urban: usize,
    pub low_saturation: usize,
    pub min_saturation: Option<u8>,
    pub max_saturation: Option<u8>,
    saturation_sum: u64,
}

impl ScenarioSummary {
    pub fn record(&mut self, scenario: &Scenario) {
        self.total += 1;
        match scenario.area {
            Area::Rural => self.rural += 1,
            Area::Urban => self.urban += 1,
        }
        if scenario.saturation < LOW_SATURATION_THRESHOLD {
            self.low_saturation += 1;
        }
        self.min_saturation = Some(
            self.min_saturation
                .map_or(scenario.saturation, |m| m.min(scenario.saturation)),
        );
        self.max_saturation = Some(
            self.max_saturation
                .map_or(scenario.saturation, |m| m.max(scenario.saturation)),
        );
        self.saturation_sum += u64::from(scenario.saturation);
    }

    /// Mean saturation, or 0.0 for an empty batch
    pub fn mean_saturation(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.saturation_sum as f64 / self.total as f64
        }
    }
}

impl<'a> FromIterator<&'a Scenario> for ScenarioSummary {
    fn from_iter<I: IntoIterator<Item = &'a Scenario>>(iter: I) -> Self {
        let mut summary = Self::default();
        for scenario in iter {
            summary.record(scenario);
        }
        summary
    }
}

/// Draws a fixed number of scenarios from a seedable RNG
pub struct ScenarioGenerator {
    count: usize,
    rng: StdRng,
}

impl ScenarioGenerator {
    /// Generator seeded from OS entropy
    pub fn new(count: usize) -> Self {
        Self {
            count,
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible generator
    pub fn with_seed(count: usize, seed: u64) -> Self {
        Self {
            count,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw `count` scenarios, keeping only their summary.
    pub fn generate(&mut self) -> ScenarioSummary {
        let mut summary = ScenarioSummary::default();
        for _ in 0..self.count {
            summary.record(&Scenario::random(&mut self.rng));
        }
        summary
    }

    /// Draw `count` scenarios and keep them.
    pub fn sample(&mut self) -> Vec<Scenario> {
        (0..self.count)
            .map(|_| Scenario::random(&mut self.rng))
            .collect()
    }
}
