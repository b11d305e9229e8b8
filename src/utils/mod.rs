//! Utilities: logging setup.
//!
//! Key items:
//!   derive_level / init_logging
//!
//! Logs always go to stderr: in `serve` mode stdout carries the MCP protocol.

/// Logging helpers.
pub mod logging {
    use tracing::Level;
    use tracing_subscriber::EnvFilter;

    /// Map `-v` / `-q` flags to a level. `-q` wins over any `-v`.
    pub fn derive_level(verbose: u8, quiet: bool) -> Level {
        if quiet {
            return Level::ERROR;
        }
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    /// `RUST_LOG`, when set, overrides the flag-derived level.
    pub fn filter_for(level: Level) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()))
    }

    /// Install the global stderr subscriber. Safe to call twice; the second
    /// call is a no-op.
    pub fn init_logging(level: Level) {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter_for(level))
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_ansi(std::env::var_os("NO_COLOR").is_none())
            .try_init();
    }

}

pub use logging::{derive_level, init_logging};
