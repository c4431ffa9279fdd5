//! Numbered-menu text shell around [`Calculator`].

use std::io::{BufRead, Write};

use log::debug;

use crate::input::parse_speed;
use crate::relativity::special::{Calculator, Event};

const MENU: [&str; 4] = [
    "1. Compute Lorentz Factor from relative speed",
    "2. Compute relative speed from Lorentz Factor",
    "3. Compute Lorentz transformation",
    "4. Exit",
];

/// Interactive loop reading commands from `input` and writing to `output`.
pub struct Shell<R, W> {
    calc: Calculator,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(calc: Calculator, input: R, output: W) -> Self {
        Self { calc, input, output }
    }

    /// Run until the exit command or end of input.
    pub fn run(&mut self) -> anyhow::Result<()> {
        writeln!(
            self.output,
            "\nWelcome to Relativity Calculator {}\n",
            env!("CARGO_PKG_VERSION")
        )?;

        loop {
            for line in MENU {
                writeln!(self.output, "{line}")?;
            }
            writeln!(self.output)?;
            let Some(command) = self.prompt("Enter Command Number: ")? else {
                break;
            };

            let Ok(number) = command.parse::<i64>() else {
                writeln!(self.output, "Enter a number. For example if you want to exit enter 4.")?;
                continue;
            };
            debug!("shell command {number}");

            let keep_going = match number {
                1 => self.gamma_from_speed()?,
                2 => self.speed_from_gamma()?,
                3 => self.transformation()?,
                4 => {
                    writeln!(self.output, "Bye!")?;
                    false
                }
                _ => {
                    writeln!(self.output, "\nInvalid command! Enter command Number (1, 2, ...).")?;
                    true
                }
            };
            if !keep_going {
                break;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn gamma_from_speed(&mut self) -> anyhow::Result<bool> {
        writeln!(
            self.output,
            "You have two options for providing relative speed: km/s or relative to c (For example: 0.5c)"
        )?;
        let Some(text) = self.prompt("Enter relative speed: ")? else {
            return Ok(false);
        };
        let gamma = parse_speed(&text, self.calc.speed_of_light())
            .ok()
            .and_then(|v| self.calc.speed_to_gamma(v).ok());
        match gamma {
            Some(gamma) => writeln!(self.output, "\nLorentz Factor is: {gamma}\n")?,
            None => self.invalid_speed()?,
        }
        Ok(true)
    }

    fn speed_from_gamma(&mut self) -> anyhow::Result<bool> {
        let Some(text) = self.prompt("Enter Lorentz Factor (>= 1): ")? else {
            return Ok(false);
        };
        let speed = text
            .parse::<f64>()
            .ok()
            .and_then(|gamma| self.calc.gamma_to_speed(gamma).ok());
        match speed {
            Some(v) => writeln!(
                self.output,
                "\nRelative Speed is: {:.4} m/s = {:.4} km/s = {:.10}c\n",
                v,
                v / 1_000.0,
                v / self.calc.speed_of_light()
            )?,
            None => writeln!(
                self.output,
                "\nInvalid Lorentz Factor. It must be greater than or equal to 1.\n"
            )?,
        }
        Ok(true)
    }

    fn transformation(&mut self) -> anyhow::Result<bool> {
        writeln!(
            self.output,
            "Relative speed of the rocket: km/s or relative to c (For example: 0.5c)"
        )?;
        let Some(speed_text) = self.prompt("Enter relative speed: ")? else {
            return Ok(false);
        };
        let Some(location_text) = self.prompt("Enter rocket location (light-seconds): ")? else {
            return Ok(false);
        };
        let Some(time_text) = self.prompt("Enter rocket time (seconds): ")? else {
            return Ok(false);
        };

        let speed = parse_speed(&speed_text, self.calc.speed_of_light());
        let (Ok(v), Ok(location), Ok(time)) = (
            speed,
            location_text.parse::<f64>(),
            time_text.parse::<f64>(),
        ) else {
            writeln!(self.output, "\nEnter numbers only. Please try again.\n")?;
            return Ok(true);
        };

        match self.calc.to_lab_frame(v, Event::new(location, time)) {
            Ok(lab) => {
                writeln!(self.output, "\nLab location: {:.2} light-seconds", lab.location)?;
                writeln!(self.output, "Lab time: {:.2} seconds\n", lab.time)?;
            }
            Err(_) => self.invalid_speed()?,
        }
        Ok(true)
    }

    fn invalid_speed(&mut self) -> anyhow::Result<()> {
        writeln!(
            self.output,
            "\nInvalid speed. Relative speed must be a number and cannot be greater than c ({} km/s).\n",
            self.calc.speed_of_light() / 1_000.0
        )?;
        Ok(())
    }

    /// Print `message` and read one trimmed line; `None` at end of input.
    fn prompt(&mut self, message: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
