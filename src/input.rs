//! Parsing of user-entered speeds.
//!
//! A bare number is a speed in km/s. A number immediately followed by `c`
//! (for example `0.5c`) is a fraction of the speed of light.

use std::num::ParseFloatError;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
#[error("`{text}` is not a speed (expected km/s like `1500` or a fraction of c like `0.5c`)")]
pub struct ParseSpeedError {
    pub text: String,
    #[source]
    source: ParseFloatError,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpeedInput {
    KilometresPerSecond(f64),
    FractionOfLight(f64),
}

impl SpeedInput {
    pub fn to_metres_per_second(self, speed_of_light: f64) -> f64 {
        match self {
            SpeedInput::KilometresPerSecond(v) => v * 1_000.0,
            SpeedInput::FractionOfLight(beta) => beta * speed_of_light,
        }
    }
}

impl FromStr for SpeedInput {
    type Err = ParseSpeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let wrap = |source| ParseSpeedError {
            text: text.to_string(),
            source,
        };
        match text.strip_suffix('c') {
            Some(fraction) => fraction
                .parse::<f64>()
                .map(SpeedInput::FractionOfLight)
                .map_err(wrap),
            None => text
                .parse::<f64>()
                .map(SpeedInput::KilometresPerSecond)
                .map_err(wrap),
        }
    }
}

/// Parse a speed expression straight to m/s.
pub fn parse_speed(text: &str, speed_of_light: f64) -> Result<f64, ParseSpeedError> {
    Ok(text.parse::<SpeedInput>()?.to_metres_per_second(speed_of_light))
}
