use env_logger::{Builder, Env};
use log::LevelFilter;

/// Send calculator diagnostics (command dispatch, rejected speeds and
/// Lorentz factors) to stderr.
///
/// Results are printed on stdout, so by default only warnings are logged;
/// `-v` turns on the debug trace. `RUST_LOG` overrides both.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let env = Env::default().default_filter_or(level.to_string());
    // a logger may already be installed (tests); keep it
    let _ = Builder::from_env(env).try_init();
}
