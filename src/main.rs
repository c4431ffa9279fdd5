use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::debug;

use relcalc::{Calculator, Config, Event, Shell, logging, parse_speed, tui};

/// Relativity Calculator - Lorentz factor, relative speed and Lorentz transformations
#[derive(Parser)]
#[command(name = "relcalc", version, about)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Speed of light in m/s (overrides the config file)
    #[arg(long, global = true, allow_hyphen_values = true)]
    speed_of_light: Option<f64>,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the numbered-menu calculator
    Shell,
    /// Run interactive TUI simulation
    Tui,
    /// Lorentz factor from a relative speed (km/s, or a fraction of c like 0.5c)
    Gamma {
        #[arg(allow_hyphen_values = true)]
        speed: String,
    },
    /// Relative speed from a Lorentz factor
    Speed {
        #[arg(allow_hyphen_values = true)]
        gamma: f64,
    },
    /// Transform a rocket-frame event into the lab frame
    Transform {
        /// Relative speed (km/s, or a fraction of c like 0.5c)
        #[arg(long, allow_hyphen_values = true)]
        speed: String,
        /// Rocket-frame location in light-seconds
        #[arg(long, allow_hyphen_values = true)]
        location: f64,
        /// Rocket-frame time in seconds
        #[arg(long, allow_hyphen_values = true)]
        time: f64,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(c) = cli.speed_of_light {
        config.speed_of_light = c;
    }
    let calc = config.calculator()?;
    debug!("speed of light {} m/s", calc.speed_of_light());

    match cli.command {
        // default
        Some(Commands::Shell) | None => {
            Shell::new(calc, io::stdin().lock(), io::stdout()).run()?
        }
        Some(Commands::Tui) => tui::start(calc, &config.tui)?,
        Some(Commands::Gamma { speed }) => run_gamma(&calc, &speed)?,
        Some(Commands::Speed { gamma }) => run_speed(&calc, gamma)?,
        Some(Commands::Transform {
            speed,
            location,
            time,
        }) => run_transform(&calc, &speed, location, time)?,
    }

    Ok(())
}

fn run_gamma(calc: &Calculator, speed: &str) -> anyhow::Result<()> {
    let v = parse_speed(speed, calc.speed_of_light())?;
    let gamma = calc.speed_to_gamma(v)?;
    println!("Lorentz Factor is: {gamma}");
    Ok(())
}

fn run_speed(calc: &Calculator, gamma: f64) -> anyhow::Result<()> {
    let v = calc.gamma_to_speed(gamma)?;
    println!(
        "Relative Speed is: {:.4} m/s = {:.4} km/s = {:.10}c",
        v,
        v / 1_000.0,
        v / calc.speed_of_light()
    );
    Ok(())
}

fn run_transform(calc: &Calculator, speed: &str, location: f64, time: f64) -> anyhow::Result<()> {
    let v = parse_speed(speed, calc.speed_of_light())?;
    let lab = calc.to_lab_frame(v, Event::new(location, time))?;
    println!("Lab location: {:.2} light-seconds", lab.location);
    println!("Lab time: {:.2} seconds", lab.time);
    Ok(())
}
