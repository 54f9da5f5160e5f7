//! Session observer trait for status messages and progress reporting.

use ap_core::{SignalId, Tick};
use ap_overlay::OverlayMode;
use ap_services::Route;

/// Callbacks invoked while the session handles events.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: status bar
///
/// ```rust,ignore
/// struct StatusBar;
///
/// impl SessionObserver for StatusBar {
///     fn on_status(&mut self, message: &str) {
///         println!("[status] {message}");
///     }
/// }
/// ```
pub trait SessionObserver {
    /// Called after each scheduler tick with the signals that changed colour.
    fn on_tick(&mut self, _tick: Tick, _flipped: &[SignalId]) {}

    /// Non-blocking status line update.
    fn on_status(&mut self, _message: &str) {}

    /// Something the user must acknowledge (a browser `alert`).
    fn on_alert(&mut self, _message: &str) {}

    /// A new route is on the map.
    fn on_route(&mut self, _route: &Route) {}

    /// The overlay mode changed.
    fn on_mode(&mut self, _mode: OverlayMode) {}
}

/// A [`SessionObserver`] that does nothing.
pub struct NoopObserver;

impl SessionObserver for NoopObserver {}

/// A [`SessionObserver`] that keeps everything it is told.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub ticks:    Vec<(Tick, usize)>,
    pub statuses: Vec<String>,
    pub alerts:   Vec<String>,
    pub routes:   Vec<Route>,
    pub modes:    Vec<OverlayMode>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_status(&self) -> Option<&str> {
        self.statuses.last().map(String::as_str)
    }

    pub fn last_alert(&self) -> Option<&str> {
        self.alerts.last().map(String::as_str)
    }
}

impl SessionObserver for RecordingObserver {
    fn on_tick(&mut self, tick: Tick, flipped: &[SignalId]) {
        self.ticks.push((tick, flipped.len()));
    }

    fn on_status(&mut self, message: &str) {
        self.statuses.push(message.to_string());
    }

    fn on_alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn on_route(&mut self, route: &Route) {
        self.routes.push(route.clone());
    }

    fn on_mode(&mut self, mode: OverlayMode) {
        self.modes.push(mode);
    }
}
