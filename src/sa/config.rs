//! SA configuration.

use super::schedule::{CoolingSchedule, TemperatureRange, TemperatureSchedule};
use crate::error::ConfigError;
use std::time::Duration;

/// Configuration for the Simulated Annealing engine.
///
/// # Examples
///
/// ```
/// use u_coloring::sa::{SaConfig, CoolingSchedule};
///
/// let config = SaConfig::default()
///     .with_initial_temperature(100.0)
///     .with_min_temperature(0.1)
///     .with_cooling(CoolingSchedule::Geometric { alpha: 0.98 })
///     .with_iterations_per_temperature(200)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Minimum temperature. Stages run while T stays above this.
    pub min_temperature: f64,

    /// Cooling schedule.
    pub cooling: CoolingSchedule,

    /// Number of trials at each temperature level.
    pub iterations_per_temperature: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,

    /// Relative selection weights, one per neighborhood. `None` = uniform.
    pub neighbor_weights: Option<Vec<f64>>,

    /// Wall-clock budget, checked between stages only.
    pub time_limit: Option<Duration>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            min_temperature: 1e-6,
            cooling: CoolingSchedule::default(),
            iterations_per_temperature: 100,
            seed: None,
            neighbor_weights: None,
            time_limit: None,
        }
    }
}

impl SaConfig {
    /// Parameters of the reference graph coloring run:
    /// `T_start = 10^4`, `T_stop = 0.5`, 100 trials per stage.
    pub fn reference() -> Self {
        Self::default()
            .with_initial_temperature(1e4)
            .with_min_temperature(0.5)
            .with_iterations_per_temperature(100)
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_iterations_per_temperature(mut self, n: usize) -> Self {
        self.iterations_per_temperature = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_neighbor_weights(mut self, weights: Vec<f64>) -> Self {
        self.neighbor_weights = Some(weights);
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Temperature bounds of the run.
    pub fn range(&self) -> TemperatureRange {
        TemperatureRange {
            start: self.initial_temperature,
            stop: self.min_temperature,
        }
    }

    /// Validates the configuration, including its cooling schedule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_run()?;
        self.cooling.validate()
    }

    /// Validates everything except the cooling schedule.
    pub(crate) fn validate_run(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("initial_temperature", self.initial_temperature),
            ("min_temperature", self.min_temperature),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::NonPositiveTemperature { name, value });
            }
        }
        if self.min_temperature >= self.initial_temperature {
            return Err(ConfigError::TemperatureOrder {
                start: self.initial_temperature,
                stop: self.min_temperature,
            });
        }
        if self.iterations_per_temperature == 0 {
            return Err(ConfigError::ZeroRepeats);
        }
        if let Some(ref weights) = self.neighbor_weights {
            for (index, &weight) in weights.iter().enumerate() {
                if !(weight > 0.0 && weight.is_finite()) {
                    return Err(ConfigError::NeighborWeight { index, weight });
                }
            }
            let total: f64 = weights.iter().sum();
            if !total.is_finite() {
                return Err(ConfigError::NeighborWeightSum { total });
            }
        }
        Ok(())
    }

    /// Checks the configuration against the number of supplied neighborhoods.
    pub(crate) fn validate_neighborhoods(&self, count: usize) -> Result<(), ConfigError> {
        if count == 0 {
            return Err(ConfigError::NoNeighborhoods);
        }
        match self.neighbor_weights {
            Some(ref weights) if weights.len() != count => Err(ConfigError::NeighborWeightCount {
                expected: count,
                got: weights.len(),
            }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SaConfig::default();
        assert!((config.initial_temperature - 100.0).abs() < 1e-10);
        assert!((config.min_temperature - 1e-6).abs() < 1e-15);
        assert_eq!(config.iterations_per_temperature, 100);
        assert!(config.neighbor_weights.is_none());
    }

    #[test]
    fn test_reference_config() {
        let config = SaConfig::reference();
        assert_eq!(config.initial_temperature, 1e4);
        assert_eq!(config.min_temperature, 0.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_ok() {
        assert!(SaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_temperature() {
        let config = SaConfig::default().with_initial_temperature(-1.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositiveTemperature {
                name: "initial_temperature",
                value: -1.0
            })
        );

        let config = SaConfig::default().with_min_temperature(0.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveTemperature {
                name: "min_temperature",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_min_ge_initial() {
        let config = SaConfig::default()
            .with_initial_temperature(10.0)
            .with_min_temperature(20.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::TemperatureOrder {
                start: 10.0,
                stop: 20.0
            })
        );

        let config = SaConfig::default()
            .with_initial_temperature(10.0)
            .with_min_temperature(10.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_repeats() {
        let config = SaConfig::default().with_iterations_per_temperature(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroRepeats));
    }

    #[test]
    fn test_validate_bad_alpha() {
        let config = SaConfig::default().with_cooling(CoolingSchedule::Geometric { alpha: 1.5 });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_neighbor_weights() {
        let config = SaConfig::default().with_neighbor_weights(vec![1.0, 0.0]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NeighborWeight {
                index: 1,
                weight: 0.0
            })
        );

        let config = SaConfig::default().with_neighbor_weights(vec![1.0, 2.0]);
        assert!(config.validate().is_ok());
        assert_eq!(
            config.validate_neighborhoods(3),
            Err(ConfigError::NeighborWeightCount {
                expected: 3,
                got: 2
            })
        );
        assert!(config.validate_neighborhoods(2).is_ok());
    }

    #[test]
    fn test_validate_neighbor_weight_sum_overflow() {
        let config = SaConfig::default().with_neighbor_weights(vec![f64::MAX, f64::MAX]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NeighborWeightSum {
                total: f64::INFINITY
            })
        );
    }

    #[test]
    fn test_validate_no_neighborhoods() {
        assert_eq!(
            SaConfig::default().validate_neighborhoods(0),
            Err(ConfigError::NoNeighborhoods)
        );
    }
}
