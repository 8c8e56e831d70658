#![deny(missing_docs)]

//! Defines the output format of traces, events, and spans produced
//! by gqldoc and the libraries it uses.

use std::io;
use tracing_subscriber::{EnvFilter, filter::LevelFilter, fmt};

pub use tracing_core::Level;

/// possible log levels
pub const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Environment variable read for filter directives (`gqldoc_render=debug`)
/// when no level is passed to [`init`].
pub const FILTER_ENV: &str = "GQLDOC_LOG";

/// Initializes a global tracing subscriber writing to stderr.
///
/// An explicit `level` wins. Without one, directives from [`FILTER_ENV`] are
/// used, and when that is unset or unreadable no logs are printed.
pub fn init(level: Option<Level>) {
    let Some(filter) = filter(level) else {
        return;
    };
    let format = fmt::format().without_time().with_target(false).compact();
    // a subscriber may already be installed, e.g. by a test harness
    let _ = fmt()
        .with_env_filter(filter)
        .event_format(format)
        .with_writer(io::stderr)
        .try_init();
}

fn filter(level: Option<Level>) -> Option<EnvFilter> {
    match level {
        Some(level) => {
            Some(EnvFilter::default().add_directive(LevelFilter::from_level(level).into()))
        }
        None => EnvFilter::try_from_env(FILTER_ENV).ok(),
    }
}

#[cfg(test)]
mod tests {
    use tracing_core::metadata::ParseLevelError;

    use super::{LEVELS, Level, LevelFilter, filter};
    use std::str::FromStr;

    #[test]
    fn it_parses_all_possible_levels() -> Result<(), ParseLevelError> {
        for level in &LEVELS {
            Level::from_str(level)?;
        }
        Ok(())
    }

    #[test]
    fn it_uses_an_explicit_level() {
        let filter = filter(Some(Level::DEBUG)).expect("a level always yields a filter");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
