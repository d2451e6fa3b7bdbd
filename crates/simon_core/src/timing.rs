use std::time::Duration;

pub const DEFAULT_PAUSE: Duration = Duration::from_millis(500);
pub const DEFAULT_SHOW: Duration = Duration::from_millis(1000);
pub const DEFAULT_RESTART_DELAY: Duration = Duration::from_millis(1000);

/// Cadence of machine playback and of the delayed restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Gap with no highlight before each revealed color.
    pub pause: Duration,
    /// How long a revealed color stays highlighted.
    pub show: Duration,
    pub restart_delay: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            pause: DEFAULT_PAUSE,
            show: DEFAULT_SHOW,
            restart_delay: DEFAULT_RESTART_DELAY,
        }
    }
}
