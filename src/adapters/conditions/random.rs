//! Random Conditions Adapter
//!
//! Stand-in for real weather, safety and accessibility feeds. Values are
//! drawn uniformly from plausible ranges and never fail.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;
use std::sync::{Mutex, MutexGuard};

use crate::domain::enrichment::{Hostility, SafetySnapshot, WeatherSnapshot};
use crate::ports::ConditionsProvider;

pub const TEMPERATURE_C: RangeInclusive<i32> = 5..=32;
pub const HUMIDITY_PCT: RangeInclusive<u8> = 30..=90;
pub const WIND_SPEED_KMH: RangeInclusive<u8> = 0..=40;
pub const PRECIPITATION_PCT: RangeInclusive<u8> = 0..=100;
pub const ACCESSIBILITY_SCORE: RangeInclusive<u8> = 40..=100;

#[derive(Debug)]
pub struct RandomConditionsProvider {
    rng: Mutex<StdRng>,
}

impl RandomConditionsProvider {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Reproducible sequence, for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn rng(&self) -> MutexGuard<'_, StdRng> {
        self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for RandomConditionsProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ConditionsProvider for RandomConditionsProvider {
    fn weather(&self) -> WeatherSnapshot {
        let mut rng = self.rng();
        WeatherSnapshot {
            temperature: rng.gen_range(TEMPERATURE_C),
            humidity: rng.gen_range(HUMIDITY_PCT),
            wind_speed: rng.gen_range(WIND_SPEED_KMH),
            precipitation_probability: rng.gen_range(PRECIPITATION_PCT),
        }
    }

    fn safety(&self) -> SafetySnapshot {
        let hostility = Hostility::ALL
            .choose(&mut *self.rng())
            .copied()
            .unwrap_or(Hostility::Low);
        SafetySnapshot { hostility }
    }

    fn accessibility_score(&self) -> u8 {
        self.rng().gen_range(ACCESSIBILITY_SCORE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_stays_in_range() {
        let provider = RandomConditionsProvider::with_seed(7);
        for _ in 0..200 {
            let weather = provider.weather();
            assert!(TEMPERATURE_C.contains(&weather.temperature));
            assert!(HUMIDITY_PCT.contains(&weather.humidity));
            assert!(WIND_SPEED_KMH.contains(&weather.wind_speed));
            assert!(PRECIPITATION_PCT.contains(&weather.precipitation_probability));
        }
    }

    #[test]
    fn accessibility_stays_in_range() {
        let provider = RandomConditionsProvider::new();
        for _ in 0..200 {
            assert!(ACCESSIBILITY_SCORE.contains(&provider.accessibility_score()));
        }
    }

    #[test]
    fn safety_covers_every_level() {
        let provider = RandomConditionsProvider::with_seed(42);
        let seen: std::collections::HashSet<Hostility> =
            (0..300).map(|_| provider.safety().hostility).collect();
        assert_eq!(seen.len(), Hostility::ALL.len());
    }

    #[test]
    fn same_seed_same_sequence() {
        let a = RandomConditionsProvider::with_seed(1);
        let b = RandomConditionsProvider::with_seed(1);
        assert_eq!(a.weather(), b.weather());
        assert_eq!(a.accessibility_score(), b.accessibility_score());
    }
}
