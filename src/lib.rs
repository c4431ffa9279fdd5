//! Special relativity calculator.
//!
//! Lorentz factor from a relative speed, relative speed from a Lorentz factor,
//! and the Lorentz transformation of a rocket-frame event into the lab frame.
//!
//! ```
//! use relcalc::{Calculator, Event};
//!
//! let calc = Calculator::default();
//! let gamma = calc.speed_to_gamma(297_000_000.0).unwrap();
//! assert!((gamma - 7.088812050083354).abs() < 1e-9);
//!
//! let lab = calc.to_lab_frame(30_000_000.0, Event::new(0.0, 10.0)).unwrap();
//! assert!((lab.time - 10.05037815259212).abs() < 1e-9);
//! ```

pub mod config;
pub mod input;
pub mod logging;
pub mod relativity;
pub mod shell;
pub mod tui;

pub use config::{Config, ConfigError, TuiConfig};
pub use input::{ParseSpeedError, SpeedInput, parse_speed};
pub use relativity::special::{
    C, Calculator, DomainError, Event, lorentz_factor, lorentz_location, lorentz_time,
    relative_speed,
};
pub use shell::Shell;
