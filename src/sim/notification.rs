//! Timed message banner

use crate::consts::NOTIFICATION_MS;

/// A single on-screen message. A new `show` replaces whatever is displayed.
#[derive(Debug, Clone, Default)]
pub struct Notification {
    pub message: String,
    /// Absolute expiry time (ms, same clock as `now`)
    pub display_until: f64,
    pub is_active: bool,
}

impl Notification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display `message` for `duration_ms` starting at `now`.
    ///
    /// Durations of zero or less produce a notification that is already expired.
    pub fn show(&mut self, message: impl Into<String>, duration_ms: f64, now: f64) {
        self.message = message.into();
        self.display_until = now + duration_ms;
        self.is_active = true;
    }

    /// Display `message` for the default two seconds
    pub fn show_default(&mut self, message: impl Into<String>, now: f64) {
        self.show(message, NOTIFICATION_MS, now);
    }

    /// Observe expiry. Call once per frame before rendering.
    pub fn tick(&mut self, now: f64) {
        if self.is_active && now >= self.display_until {
            self.is_active = false;
        }
    }

    pub fn is_visible(&self, now: f64) -> bool {
        self.is_active && now < self.display_until
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_until_expiry() {
        let mut note = Notification::new();
        note.show("hello", 2000.0, 1000.0);

        for now in [1000.0, 1500.0, 2999.9] {
            note.tick(now);
            assert!(note.is_active, "should be active at {now}");
            assert!(note.is_visible(now));
        }

        note.tick(3000.0);
        assert!(!note.is_active);
        assert!(!note.is_visible(3000.0));
    }

    #[test]
    fn test_show_default_lasts_two_seconds() {
        let mut note = Notification::new();
        note.show_default("default", 500.0);
        assert_eq!(note.display_until, 2500.0);

        note.tick(2499.0);
        assert!(note.is_visible(2499.0));
        note.tick(2500.0);
        assert!(!note.is_active);
    }

    #[test]
    fn test_show_overwrites_in_flight_message() {
        let mut note = Notification::new();
        note.show("first", 2000.0, 0.0);
        note.show("second", 500.0, 100.0);
        assert_eq!(note.message, "second");
        assert_eq!(note.display_until, 600.0);

        note.tick(700.0);
        assert!(!note.is_active);
    }

    #[test]
    fn test_non_positive_duration_expires_immediately() {
        let mut note = Notification::new();
        note.show("gone", 0.0, 50.0);
        assert!(!note.is_visible(50.0));
        note.tick(50.0);
        assert!(!note.is_active);

        note.show("negative", -10.0, 50.0);
        note.tick(50.0);
        assert!(!note.is_active);
    }
}
