use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

use crate::config::TuiConfig;
use crate::relativity::special::{Calculator, Event};

/// Highest slider position, as a fraction of c.
const MAX_FRACTION: f64 = 0.99;

/// Slider state shown by the terminal UI.
#[derive(Debug, Clone, PartialEq)]
pub struct TuiState {
    calc: Calculator,
    step: f64,
    pub velocity_fraction: f64,
    pub rocket: Event,
}

impl TuiState {
    pub fn new(calc: Calculator, config: &TuiConfig) -> Self {
        Self {
            calc,
            step: config.step,
            velocity_fraction: 0.0,
            rocket: Event::new(config.rocket_location, config.rocket_time),
        }
    }

    pub fn faster(&mut self) {
        self.velocity_fraction = snap(self.velocity_fraction + self.step).min(MAX_FRACTION);
    }

    pub fn slower(&mut self) {
        self.velocity_fraction = snap(self.velocity_fraction - self.step).max(0.0);
    }

    pub fn later(&mut self) {
        self.rocket.time += 1.0;
    }

    pub fn earlier(&mut self) {
        self.rocket.time -= 1.0;
    }

    /// Text for each panel, top to bottom.
    pub fn lines(&self) -> [String; 4] {
        let v = self.velocity_fraction * self.calc.speed_of_light();
        let velocity = format!(
            "Velocity: {:.2}c = {:.1} km/s",
            self.velocity_fraction,
            v / 1_000.0
        );
        let rocket = format!(
            "Rocket event: x = {:.2} light-seconds | t = {:.2} s",
            self.rocket.location, self.rocket.time
        );
        let (gamma, lab) = match (
            self.calc.speed_to_gamma(v),
            self.calc.to_lab_frame(v, self.rocket),
        ) {
            (Ok(gamma), Ok(lab)) => (
                format!("Lorentz factor (γ): {gamma:.4}"),
                format!(
                    "Lab event: x = {:.2} light-seconds | t = {:.2} s",
                    lab.location, lab.time
                ),
            ),
            (Err(e), _) | (_, Err(e)) => (
                format!("Lorentz factor (γ): {e}"),
                "Lab event: -".to_string(),
            ),
        };
        [velocity, gamma, rocket, lab]
    }
}

// keeps repeated steps from drifting off the two-decimal grid
fn snap(fraction: f64) -> f64 {
    (fraction * 1e6).round() / 1e6
}

pub fn start(calc: Calculator, config: &TuiConfig) -> anyhow::Result<()> {
    // Setup terminal
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    crossterm::terminal::enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = TuiState::new(calc, config);
    let result = event_loop(&mut terminal, &mut state);

    crossterm::terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut TuiState,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .margin(2)
                .constraints(
                    [
                        Constraint::Length(3),
                        Constraint::Length(3),
                        Constraint::Length(3),
                        Constraint::Length(3),
                        Constraint::Length(1),
                    ]
                    .as_ref(),
                )
                .split(f.area());

            for (i, text) in state.lines().into_iter().enumerate() {
                let block = Paragraph::new(text).block(Block::default().borders(Borders::ALL));
                f.render_widget(block, chunks[i]);
            }
            f.render_widget(
                Paragraph::new("←/→ speed  ↑/↓ rocket time  q quit"),
                chunks[4],
            );
        })?;

        // Input handling
        if event::poll(std::time::Duration::from_millis(200))? {
            if let TermEvent::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Right => state.faster(),
                    KeyCode::Left => state.slower(),
                    KeyCode::Up => state.later(),
                    KeyCode::Down => state.earlier(),
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    _ => {}
                }
            }
        }
    }
}
