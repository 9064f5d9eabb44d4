//! # Configuration
//!
//! In-memory editor constants. There is no configuration file support: the
//! editor always runs with `Config::default()`, and the fields below are the
//! only knobs the rest of the crate reads.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// The column width of a tab stop. Must be > 0.
    pub tab_stop: usize,
    /// The number of consecutive Ctrl-Q presses needed to quit with unsaved
    /// changes.
    pub quit_times: usize,
    /// The duration for which a status message stays visible in the message
    /// bar before it fades.
    pub message_dur: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self { tab_stop: 8, quit_times: 3, message_dur: Duration::from_secs(5) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_spec() {
        let config = Config::default();
        assert_eq!(config.tab_stop, 8);
        assert_eq!(config.quit_times, 3);
        assert_eq!(config.message_dur, Duration::from_secs(5));
    }
}
