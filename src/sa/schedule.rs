//! Cooling schedules.
//!
//! A schedule maps the temperature of one stage to the temperature of the
//! next. The engine only sees the [`TemperatureSchedule`] trait, so custom
//! schedules can replace the built-in [`CoolingSchedule`] variants without
//! touching the annealing loop.

use crate::error::ConfigError;

/// Temperature bounds of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureRange {
    /// Temperature of the first stage.
    pub start: f64,
    /// Stages run only while the temperature is strictly above this floor.
    pub stop: f64,
}

/// Produces the temperature sequence consumed by the engine.
///
/// Schedules are non-adaptive: the next temperature depends only on the
/// current one, the stage index and the run's bounds, never on search
/// progress.
pub trait TemperatureSchedule: std::fmt::Debug {
    /// Returns the temperature of the stage following `stage` (zero-based),
    /// which ran at `temperature`.
    ///
    /// Returning a non-finite or non-positive value ends the run.
    fn next_temperature(&self, temperature: f64, stage: usize, range: TemperatureRange) -> f64;

    /// Checks the schedule's own parameters.
    fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }
}

/// Built-in cooling schedules.
///
/// # References
///
/// - Geometric: standard textbook approach
/// - Linear: fixed-duration cooling
/// - LundyMees: Lundy & Mees (1986), with convergence proof
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoolingSchedule {
    /// Geometric (exponential) cooling: `T_{k+1} = alpha * T_k`.
    ///
    /// Runs `ceil(ln(T_stop / T_start) / ln(alpha))` stages.
    Geometric {
        /// Cooling factor in (0, 1). Higher = slower cooling.
        alpha: f64,
    },

    /// Linear cooling: `T_k = T_start - k * (T_start - T_stop) / steps`.
    ///
    /// Runs exactly `steps` stages.
    Linear {
        /// Number of stages between the start and stop temperatures.
        steps: usize,
    },

    /// Lundy-Mees cooling: `T_{k+1} = T_k / (1 + beta * T_k)`.
    ///
    /// Cools fast at high T, slow at low T.
    LundyMees {
        /// Cooling parameter. Typically `(T_0 - T_min) / (stages * T_0 * T_min)`.
        beta: f64,
    },
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Geometric { alpha: 0.95 }
    }
}

impl TemperatureSchedule for CoolingSchedule {
    fn next_temperature(&self, temperature: f64, stage: usize, range: TemperatureRange) -> f64 {
        match *self {
            CoolingSchedule::Geometric { alpha } => temperature * alpha,
            CoolingSchedule::Linear { steps } => {
                if stage + 1 >= steps {
                    range.stop
                } else {
                    range.start - (stage + 1) as f64 * (range.start - range.stop) / steps as f64
                }
            }
            CoolingSchedule::LundyMees { beta } => temperature / (1.0 + beta * temperature),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            CoolingSchedule::Geometric { alpha } => {
                if !(alpha > 0.0 && alpha < 1.0) {
                    return Err(ConfigError::CoolingFactor { alpha });
                }
            }
            CoolingSchedule::Linear { steps } => {
                if steps == 0 {
                    return Err(ConfigError::LinearSteps);
                }
            }
            CoolingSchedule::LundyMees { beta } => {
                if !(beta > 0.0 && beta.is_finite()) {
                    return Err(ConfigError::LundyMeesBeta { beta });
                }
            }
        }
        Ok(())
    }
}

/// Iterator over the stage temperatures of a run.
///
/// Yields `range.start` first and keeps yielding while the temperature
/// stays strictly above `range.stop`.
#[derive(Debug, Clone)]
pub struct Temperatures<'a, C: TemperatureSchedule + ?Sized> {
    schedule: &'a C,
    range: TemperatureRange,
    next: Option<f64>,
    stage: usize,
}

impl<'a, C: TemperatureSchedule + ?Sized> Temperatures<'a, C> {
    pub fn new(schedule: &'a C, range: TemperatureRange) -> Self {
        Self {
            schedule,
            range,
            next: Some(range.start),
            stage: 0,
        }
    }

    /// Temperature the sequence stopped at (below the floor), if exhausted.
    pub fn peek(&self) -> Option<f64> {
        self.next
    }
}

impl<C: TemperatureSchedule + ?Sized> Iterator for Temperatures<'_, C> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let temperature = self.next?;
        if !(temperature > self.range.stop && temperature.is_finite()) {
            return None;
        }
        let following = self
            .schedule
            .next_temperature(temperature, self.stage, self.range);
        self.stage += 1;
        self.next = if following.is_finite() && following > 0.0 {
            Some(following)
        } else {
            None
        };
        Some(temperature)
    }
}

/// Number of stages a schedule runs between the bounds of `range`.
pub fn stage_count<C: TemperatureSchedule + ?Sized>(schedule: &C, range: TemperatureRange) -> usize {
    Temperatures::new(schedule, range).count()
}
