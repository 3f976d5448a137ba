//! Time step selection for explicit schemes.
//!
//! The stability number is trusted: a Courant number above one or
//! a Von Neumann number above one half will produce a growing solution,
//! which the engine reports as an instability once values stop being finite.

use crate::error::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StabilityKind {
    /// `dt = S * h / C`
    Advective,

    /// `dt = S * h^2 / nu`
    Diffusive,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TimeStep {
    pub dt: f64,

    /// Exclusive loop bound, `floor(Time / dt)` unless overridden.
    pub steps: usize,
}

impl TimeStep {
    pub fn derive(
        kind: StabilityKind,
        h: f64,
        coefficient: f64,
        stability_number: f64,
        total_time: Option<f64>,
        step_override: Option<usize>,
    ) -> Result<Self> {
        if !coefficient.is_finite() || coefficient <= 0.0 {
            return Err(Error::config(format!(
                "transport coefficient must be positive, found {coefficient}"
            )));
        }
        let dt = match kind {
            StabilityKind::Advective => stability_number * h / coefficient,
            StabilityKind::Diffusive => stability_number * h * h / coefficient,
        };
        if !dt.is_finite() || dt <= 0.0 {
            return Err(Error::config(format!(
                "time step must be positive, found {dt}"
            )));
        }

        let steps = match (step_override, total_time) {
            (Some(steps), _) => steps,
            (None, Some(time)) => {
                if !time.is_finite() || time < 0.0 {
                    return Err(Error::config(format!(
                        "total time must be non-negative, found {time}"
                    )));
                }
                let steps = (time / dt).floor();
                if steps >= usize::MAX as f64 {
                    return Err(Error::config(format!(
                        "total time {time} needs more than {} steps",
                        usize::MAX
                    )));
                }
                steps as usize
            }
            (None, None) => {
                return Err(Error::config("no total time or step count given"))
            }
        };

        tracing::info!("Computed dt = {dt}");
        tracing::info!("Computed NT = {steps}");
        Ok(TimeStep { dt, steps })
    }

    /// Steps the engine applies, the seeded field is level zero.
    pub fn applied_steps(&self) -> usize {
        self.steps.saturating_sub(1)
    }
}
