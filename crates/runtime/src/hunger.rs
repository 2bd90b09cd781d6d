//! Hunger meter with hysteresis.
use crate::config::HungerConfig;

#[derive(Clone, Debug)]
pub struct Hunger {
    config: HungerConfig,
    level: f32,
    hungry: bool,
}

impl Hunger {
    /// Starts at `max`, i.e. hungry.
    pub fn new(config: HungerConfig) -> Self {
        let level = config.max;
        Self::with_level(config, level)
    }

    pub fn with_level(config: HungerConfig, level: f32) -> Self {
        let level = level.clamp(0.0, config.max);
        let hungry = level >= config.hungry_at;
        Self {
            config,
            level,
            hungry,
        }
    }

    /// Integrates one tick. Hunger falls while eating and rises otherwise.
    pub fn tick(&mut self, dt: f32, eating: bool) {
        let delta = if eating {
            -self.config.replenish_rate * dt
        } else {
            self.config.deplete_rate * dt
        };
        self.level = (self.level + delta).clamp(0.0, self.config.max);

        if self.hungry && self.level <= self.config.sated_at {
            self.hungry = false;
        } else if !self.hungry && self.level >= self.config.hungry_at {
            self.hungry = true;
        }
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn is_hungry(&self) -> bool {
        self.hungry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> HungerConfig {
        HungerConfig {
            max: 10.0,
            deplete_rate: 1.0,
            replenish_rate: 5.0,
            hungry_at: 6.0,
            sated_at: 2.0,
        }
    }

    #[test]
    fn starts_hungry_at_max() {
        let hunger = Hunger::new(config());
        assert_eq!(hunger.level(), 10.0);
        assert!(hunger.is_hungry());
    }

    #[test]
    fn eating_clears_hunger_only_below_sated() {
        let mut hunger = Hunger::new(config());
        hunger.tick(1.0, true);
        assert_eq!(hunger.level(), 5.0);
        assert!(hunger.is_hungry());
        hunger.tick(1.0, true);
        assert_eq!(hunger.level(), 0.0);
        assert!(!hunger.is_hungry());
    }

    #[test]
    fn hunger_returns_at_threshold() {
        let mut hunger = Hunger::with_level(config(), 0.0);
        assert!(!hunger.is_hungry());
        for _ in 0..5 {
            hunger.tick(1.0, false);
        }
        assert!(!hunger.is_hungry());
        hunger.tick(1.0, false);
        assert!(hunger.is_hungry());
    }

    #[test]
    fn level_is_clamped() {
        let mut hunger = Hunger::new(config());
        hunger.tick(100.0, false);
        assert_eq!(hunger.level(), 10.0);
        hunger.tick(100.0, true);
        assert_eq!(hunger.level(), 0.0);
    }
}
