//! Tracing subscriber setup shared by the binaries.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Maps the `-v` count and `-q` flag to a log level.
/// Default level is INFO, `-v` is DEBUG, `-vv` and above TRACE.
pub fn level_for(verbose: u8, quiet: bool) -> Level {
    if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

/// Initializes the tracing subscriber for the logiview crates.
/// `RUST_LOG` directives are honoured alongside the computed level.
pub fn init_logging(verbose: u8, quiet: bool) {
    let level = level_for(verbose, quiet);

    let mut filter = EnvFilter::from_default_env();
    for target in ["logiview", "logiview_gui", "logiview_mockgen"] {
        if let Ok(directive) = format!("{}={}", target, level).parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
