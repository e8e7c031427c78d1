use embassy_time::Duration;

/// Timing thresholds for gesture classification.
///
/// Fixed at construction of the state machine; there is no way to change
/// them afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SwitchConfig {
    /// Press duration at or above which a press counts as "long".
    ///
    /// A press shorter than this is a tap and latches hold mode; a press at
    /// least this long is a momentary gesture ending on release.
    pub long_press_threshold: Duration,

    /// Maximum gap between the press that entered hold mode and a
    /// subsequent press for that press to count as "exit hold" rather than
    /// a tap within hold.
    pub double_tap_window: Duration,
}

impl SwitchConfig {
    /// Whether the two thresholds are logically consistent.
    ///
    /// A `double_tap_window` at or above `long_press_threshold` makes the
    /// exit-hold window overlap the next gesture's tap window. The state
    /// machine runs with such a configuration anyway; rejecting it is the
    /// application's job.
    pub fn is_consistent(&self) -> bool {
        self.double_tap_window < self.long_press_threshold
    }
}

impl Default for SwitchConfig {
    /// Defaults matching a typical chord pedal:
    ///
    /// - long press threshold: 400ms
    /// - double tap window: 300ms
    fn default() -> Self {
        Self {
            long_press_threshold: Duration::from_millis(400),
            double_tap_window: Duration::from_millis(300),
        }
    }
}
