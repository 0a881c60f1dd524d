//! Click counter for the hidden admin unlock gesture.
//!
//! The counter itself is pure state. The caller owns the single debounce
//! timer: every click cancels the pending reset (if any) and schedules a new
//! one, and when a reset fires uncancelled it calls [`ClickGesture::expire`].
//! Both run as discrete turns of the browser event queue, so no click is ever
//! processed concurrently with a reset.

/// Number of rapid clicks that complete the gesture.
pub const UNLOCK_CLICKS: u8 = 3;

/// Gap in milliseconds after which a partial gesture expires.
pub const DEBOUNCE_MS: u32 = 450;

#[derive(Default)]
pub struct ClickGesture {
    clicks: u8,
}

impl ClickGesture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one click. Returns true exactly when this click completes
    /// the gesture. Completion resets the counter synchronously, so a stray
    /// fourth click starts a fresh sequence instead of firing twice.
    pub fn click(&mut self) -> bool {
        self.clicks += 1;
        if self.clicks >= UNLOCK_CLICKS {
            self.clicks = 0;
            return true;
        }
        false
    }

    /// The debounce window elapsed with no further click. Normal idle
    /// behavior, not an error.
    pub fn expire(&mut self) {
        self.clicks = 0;
    }

    pub fn clicks(&self) -> u8 {
        self.clicks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicks_accumulate_within_the_window() {
        let mut gesture = ClickGesture::new();
        assert!(!gesture.click());
        assert!(!gesture.click());
        assert_eq!(gesture.clicks(), 2);
    }

    #[test]
    fn third_click_completes_and_resets() {
        let mut gesture = ClickGesture::new();
        assert!(!gesture.click());
        assert!(!gesture.click());
        assert!(gesture.click());
        assert_eq!(gesture.clicks(), 0);

        // A stray fourth click starts a fresh sequence
        assert!(!gesture.click());
        assert_eq!(gesture.clicks(), 1);
    }

    #[test]
    fn expiry_resets_and_next_click_counts_from_one() {
        let mut gesture = ClickGesture::new();
        gesture.click();
        gesture.click();
        gesture.expire();
        assert_eq!(gesture.clicks(), 0);
        assert!(!gesture.click());
        assert_eq!(gesture.clicks(), 1);
    }

    #[test]
    fn two_clicks_pause_two_clicks_never_completes() {
        let mut gesture = ClickGesture::new();
        assert!(!gesture.click());
        assert!(!gesture.click());
        gesture.expire(); // 500 ms pause
        assert!(!gesture.click());
        assert!(!gesture.click());
        assert_eq!(gesture.clicks(), 2);
    }

    #[test]
    fn completion_still_fires_after_earlier_expiries() {
        let mut gesture = ClickGesture::new();
        gesture.click();
        gesture.expire();
        gesture.click();
        gesture.expire();
        assert!(!gesture.click());
        assert!(!gesture.click());
        assert!(gesture.click());
    }
}
