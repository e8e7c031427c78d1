#![no_std]
#![allow(async_fn_in_trait)]

pub mod config;
pub mod gpio;
pub mod presets;

pub use config::*;
use embassy_time::Instant;

/// Abstraction over any hardware source that can deliver asynchronous
/// "pressed" and "released" edges for a single switch.
///
/// Implementations are expected to hand over *clean* edges: one
/// `wait_for_press` completion per physical press, one `wait_for_release`
/// completion per physical release. Contact debouncing belongs to the
/// driver (or the pin hardware), not to the gesture layer.
pub trait SwitchDriver {
    async fn wait_for_press(&mut self);
    async fn wait_for_release(&mut self);
}

/// A recognized foot-switch gesture.
///
/// The vocabulary deliberately inverts the naive press-duration mapping:
/// a *short* tap from idle latches [`SwitchMode::Hold`], while keeping the
/// switch *down* gives a momentary gesture that ends on release. This lets
/// one switch serve both sustain-while-held control and hands-free chord
/// cycling.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// The switch went down from idle.
    MomentaryStart,
    /// A long momentary press ended; the switch is idle again.
    MomentaryEnd,
    /// A momentary press ended early, before the long-press threshold.
    /// Always immediately followed by [`Gesture::EnterHold`].
    MomentaryCancel,
    /// A quick tap latched hold mode.
    EnterHold,
    /// Hold mode was left, either by a double tap or by a long press.
    ExitHold,
    /// The switch was tapped while hold mode was already latched,
    /// e.g. "advance to the next chord without leaving hold".
    HoldTap,
}

/// Classification state of the switch.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwitchMode {
    /// Switch is up and no latched state is active.
    #[default]
    Idle,
    /// Switch is down but not yet classified as long.
    Momentary,
    /// Latched hold state; persists while the switch is up.
    Hold,
}

/// Receiver for gestures emitted by [`FootSwitch`].
///
/// A sink that ignores a variant simply drops it; every gesture is optional
/// to handle. Ad-hoc closures can be passed through [`FnSink`].
///
/// Dispatch is synchronous: the sink runs inside `process_press` /
/// `process_release` and must not call back into them.
pub trait GestureSink {
    fn on_gesture(&mut self, gesture: Gesture);
}

/// Adapter turning an `FnMut(Gesture)` closure into a [`GestureSink`].
pub struct FnSink<F: FnMut(Gesture)>(pub F);

impl<F: FnMut(Gesture)> GestureSink for FnSink<F> {
    fn on_gesture(&mut self, gesture: Gesture) {
        (self.0)(gesture)
    }
}

/// Gesture state machine for a single foot switch.
///
/// Purely event-driven: state changes only inside [`process_press`] and
/// [`process_release`], never from elapsed time alone. The caller supplies
/// the timestamp of each edge from a monotonically non-decreasing clock;
/// every operation is O(1) and infallible.
///
/// Transition summary, starting from [`SwitchMode::Idle`]:
/// - press, release before `long_press_threshold`: `Idle → Momentary → Hold`
///   (`MomentaryStart`, then `MomentaryCancel` + `EnterHold`)
/// - press, release at or after the threshold: `Idle → Momentary → Idle`
///   (`MomentaryStart`, then `MomentaryEnd`)
/// - press while `Hold` within `double_tap_window` of the previous press:
///   `Hold → Idle` (`HoldTap`, then `ExitHold`); the paired release is
///   swallowed
/// - press while `Hold` outside the window: stays `Hold` (`HoldTap` only);
///   a long release then exits (`ExitHold`)
///
/// [`process_press`]: FootSwitch::process_press
/// [`process_release`]: FootSwitch::process_release
pub struct FootSwitch {
    config: SwitchConfig,
    mode: SwitchMode,
    last_press: Instant,
    skip_next_release: bool,
}

impl FootSwitch {
    pub fn new(config: SwitchConfig) -> Self {
        Self {
            config,
            mode: SwitchMode::Idle,
            last_press: Instant::from_ticks(0),
            skip_next_release: false,
        }
    }

    /// Feed a press edge observed at `now`.
    ///
    /// Emits at most two gestures, in order: a double-tap exit produces
    /// `HoldTap` then `ExitHold`.
    pub fn process_press<S: GestureSink + ?Sized>(&mut self, now: Instant, sink: &mut S) {
        match self.mode {
            SwitchMode::Hold => {
                sink.on_gesture(Gesture::HoldTap);
                let gap = now.saturating_duration_since(self.last_press);
                if gap < self.config.double_tap_window {
                    // Double tap: unlatch and swallow the paired release so
                    // it is not reinterpreted as a fresh tap.
                    self.mode = SwitchMode::Idle;
                    self.skip_next_release = true;
                    sink.on_gesture(Gesture::ExitHold);
                    return;
                }
            }
            SwitchMode::Idle => {
                self.mode = SwitchMode::Momentary;
                sink.on_gesture(Gesture::MomentaryStart);
            }
            // Press while already down means the release edge was lost;
            // restamp and wait for the next release.
            SwitchMode::Momentary => {}
        }

        self.last_press = now;
    }

    /// Feed a release edge observed at `now`.
    ///
    /// The press duration is measured against the timestamp recorded by the
    /// matching press edge. A release with no open press (mode `Idle`) is a
    /// silent no-op.
    pub fn process_release<S: GestureSink + ?Sized>(&mut self, now: Instant, sink: &mut S) {
        if self.skip_next_release {
            self.skip_next_release = false;
            return;
        }

        if self.mode == SwitchMode::Idle {
            return;
        }

        let held = now.saturating_duration_since(self.last_press);

        if held < self.config.long_press_threshold {
            match self.mode {
                SwitchMode::Momentary => {
                    sink.on_gesture(Gesture::MomentaryCancel);
                    self.mode = SwitchMode::Hold;
                    sink.on_gesture(Gesture::EnterHold);
                }
                // A tap while latched was already reported on its press edge.
                SwitchMode::Hold => {}
                SwitchMode::Idle => {}
            }
        } else {
            match self.mode {
                SwitchMode::Momentary => {
                    self.mode = SwitchMode::Idle;
                    sink.on_gesture(Gesture::MomentaryEnd);
                }
                SwitchMode::Hold => {
                    self.mode = SwitchMode::Idle;
                    sink.on_gesture(Gesture::ExitHold);
                }
                SwitchMode::Idle => {}
            }
        }
    }

    /// Current classification state, e.g. for a mode LED.
    pub fn mode(&self) -> SwitchMode {
        self.mode
    }

    /// Return to `Idle` and clear any pending release suppression.
    pub fn reset(&mut self) {
        self.mode = SwitchMode::Idle;
        self.skip_next_release = false;
    }
}

// One edge emits at most two gestures.
#[derive(Default)]
struct EdgeGestures {
    slots: [Option<Gesture>; 2],
}

impl GestureSink for EdgeGestures {
    fn on_gesture(&mut self, gesture: Gesture) {
        if self.slots[0].is_none() {
            self.slots[0] = Some(gesture);
        } else {
            self.slots[1] = Some(gesture);
        }
    }
}

/// A complete pedal switch: an edge driver plus the gesture state machine.
///
/// Awaiting [`next_gesture`] runs the edge loop: wait for the next press or
/// release, timestamp it, feed it to the [`FootSwitch`] core and yield
/// whatever gestures it emitted, one per call.
///
/// [`next_gesture`]: PedalSwitch::next_gesture
pub struct PedalSwitch<T: SwitchDriver> {
    driver: T,
    machine: FootSwitch,
    pressed: bool,
    pending: Option<Gesture>,
}

impl<T: SwitchDriver> PedalSwitch<T> {
    pub fn new(driver: T, config: SwitchConfig) -> Self {
        Self {
            driver,
            machine: FootSwitch::new(config),
            pressed: false,
            pending: None,
        }
    }

    /// Wait for and return the next recognized gesture.
    pub async fn next_gesture(&mut self) -> Gesture {
        if let Some(gesture) = self.pending.take() {
            return gesture;
        }

        loop {
            let mut emitted = EdgeGestures::default();

            if self.pressed {
                self.driver.wait_for_release().await;
                self.pressed = false;
                self.machine.process_release(Instant::now(), &mut emitted);
            } else {
                self.driver.wait_for_press().await;
                self.pressed = true;
                self.machine.process_press(Instant::now(), &mut emitted);
            }

            let [first, second] = emitted.slots;
            if let Some(gesture) = first {
                self.pending = second;
                return gesture;
            }
        }
    }

    /// Current classification state of the underlying machine.
    pub fn mode(&self) -> SwitchMode {
        self.machine.mode()
    }

    /// Immutable reference to the underlying driver.
    pub fn driver(&self) -> &T {
        &self.driver
    }

    /// Mutable reference to the underlying driver.
    pub fn driver_mut(&mut self) -> &mut T {
        &mut self.driver
    }

    /// Reset the gesture machine to its idle state.
    pub fn reset(&mut self) {
        self.machine.reset();
        self.pending = None;
    }
}
