use log::debug;
use thiserror::Error;

/// Speed of light (m/s), rounded the way the calculator has always used it.
pub const C: f64 = 300_000_000.0;

/// Reasons a kinematic quantity has no physical value.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum DomainError {
    #[error("relative speed {speed} m/s is not below the speed of light ({c} m/s)")]
    SpeedOfLightExceeded { speed: f64, c: f64 },
    #[error("Lorentz factor {0} must be greater than or equal to 1")]
    GammaBelowOne(f64),
    #[error("Lorentz factor must be finite, got {0}")]
    NonFiniteGamma(f64),
    #[error("speed of light must be positive and finite, got {0}")]
    InvalidSpeedOfLight(f64),
}

/// A point in one frame: location in light-seconds, time in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    pub location: f64,
    pub time: f64,
}

impl Event {
    pub fn new(location: f64, time: f64) -> Self {
        Self { location, time }
    }
}

/// Special relativity kinematics for collinear motion along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculator {
    c: f64,
}

impl Default for Calculator {
    fn default() -> Self {
        Self { c: C }
    }
}

impl Calculator {
    pub fn new(speed_of_light: f64) -> Result<Self, DomainError> {
        if !(speed_of_light.is_finite() && speed_of_light > 0.0) {
            return Err(DomainError::InvalidSpeedOfLight(speed_of_light));
        }
        Ok(Self { c: speed_of_light })
    }

    pub fn speed_of_light(&self) -> f64 {
        self.c
    }

    /// Lorentz factor γ = 1 / sqrt(1 - v^2/c^2)
    ///
    /// `v` is in m/s. Only `|v| < c` has a solution; the sign of `v` is
    /// irrelevant.
    pub fn speed_to_gamma(&self, v: f64) -> Result<f64, DomainError> {
        // written negated so NaN falls on the rejecting side
        if !(v.abs() < self.c) {
            debug!("rejecting speed {v} m/s (c = {})", self.c);
            return Err(DomainError::SpeedOfLightExceeded { speed: v, c: self.c });
        }
        let beta = v / self.c;
        Ok(1.0 / (1.0 - beta * beta).sqrt())
    }

    /// Relative speed v = c * sqrt(1 - 1/γ^2), in m/s.
    ///
    /// `gamma == 1` is the rest frame and gives exactly zero. Infinite and NaN
    /// factors have no speed below c.
    pub fn gamma_to_speed(&self, gamma: f64) -> Result<f64, DomainError> {
        if !(gamma >= 1.0) {
            debug!("rejecting Lorentz factor {gamma}");
            return Err(DomainError::GammaBelowOne(gamma));
        }
        // an infinite factor would give exactly c
        if gamma.is_infinite() {
            return Err(DomainError::NonFiniteGamma(gamma));
        }
        Ok(self.c * (1.0 - 1.0 / (gamma * gamma)).sqrt())
    }

    /// Lab-frame location x_l = γ (x_r + β t_r).
    ///
    /// Locations are in light-seconds and times in seconds, so β multiplies
    /// `rocket_time` directly.
    pub fn lorentz_location(
        &self,
        v: f64,
        rocket_location: f64,
        rocket_time: f64,
    ) -> Result<f64, DomainError> {
        let (beta, gamma) = self.beta_gamma(v)?;
        Ok(gamma * (rocket_location + beta * rocket_time))
    }

    /// Lab-frame time t_l = γ (t_r + β x_r).
    pub fn lorentz_time(
        &self,
        v: f64,
        rocket_location: f64,
        rocket_time: f64,
    ) -> Result<f64, DomainError> {
        let (beta, gamma) = self.beta_gamma(v)?;
        Ok(gamma * (rocket_time + beta * rocket_location))
    }

    /// Boost a rocket-frame event into the lab frame.
    pub fn to_lab_frame(&self, v: f64, rocket: Event) -> Result<Event, DomainError> {
        Ok(Event {
            location: self.lorentz_location(v, rocket.location, rocket.time)?,
            time: self.lorentz_time(v, rocket.location, rocket.time)?,
        })
    }

    fn beta_gamma(&self, v: f64) -> Result<(f64, f64), DomainError> {
        let beta = v / self.c;
        let gamma = self.speed_to_gamma(beta * self.c)?;
        Ok((beta, gamma))
    }
}

/// [`Calculator::speed_to_gamma`] with the default speed of light.
pub fn lorentz_factor(v: f64) -> Result<f64, DomainError> {
    Calculator::default().speed_to_gamma(v)
}

/// [`Calculator::gamma_to_speed`] with the default speed of light.
pub fn relative_speed(gamma: f64) -> Result<f64, DomainError> {
    Calculator::default().gamma_to_speed(gamma)
}

/// [`Calculator::lorentz_location`] with the default speed of light.
pub fn lorentz_location(
    v: f64,
    rocket_location: f64,
    rocket_time: f64,
) -> Result<f64, DomainError> {
    Calculator::default().lorentz_location(v, rocket_location, rocket_time)
}

/// [`Calculator::lorentz_time`] with the default speed of light.
pub fn lorentz_time(v: f64, rocket_location: f64, rocket_time: f64) -> Result<f64, DomainError> {
    Calculator::default().lorentz_time(v, rocket_location, rocket_time)
}
