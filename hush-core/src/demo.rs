//! Boot demonstration cue.
//!
//! Eight seconds after startup the lamp switches to blinking blue, once,
//! forever. This is scaffolding for bring-up: the main loop is the only
//! caller, so swapping in a real trigger (microphone level, remote
//! command) replaces exactly one call site.

use crate::color::LedColor;

/// Milliseconds after `start_ms` at which the cue fires.
pub const DEMO_AFTER_MS: u64 = 8000;

pub struct BootDemo {
    start_ms: u64,
    fired: bool,
}

impl BootDemo {
    /// Arm the cue, measuring from `start_ms`.
    pub const fn new(start_ms: u64) -> Self {
        Self {
            start_ms,
            fired: false,
        }
    }

    /// Returns the target `(color, blink)` exactly once, on the first
    /// poll at or after the threshold. `None` before and ever after.
    pub fn poll(&mut self, now_ms: u64) -> Option<(LedColor, bool)> {
        if self.fired || now_ms.wrapping_sub(self.start_ms) < DEMO_AFTER_MS {
            return None;
        }
        self.fired = true;
        Some((LedColor::Blue, true))
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silent_before_threshold() {
        let mut demo = BootDemo::new(0);
        for now in [0, 1, 4000, 7999] {
            assert_eq!(demo.poll(now), None);
        }
        assert!(!demo.has_fired());
    }

    #[test]
    fn fires_exactly_once_at_threshold() {
        let mut demo = BootDemo::new(0);
        assert_eq!(demo.poll(8000), Some((LedColor::Blue, true)));
        assert!(demo.has_fired());
        assert_eq!(demo.poll(8000), None);
        assert_eq!(demo.poll(9000), None);
        assert_eq!(demo.poll(u64::MAX), None);
    }

    #[test]
    fn fires_on_first_late_poll() {
        // A slow loop that skips past the threshold still fires.
        let mut demo = BootDemo::new(500);
        assert_eq!(demo.poll(8000), None); // 7500 elapsed
        assert_eq!(demo.poll(12_345), Some((LedColor::Blue, true)));
        assert_eq!(demo.poll(12_346), None);
    }

    #[test]
    fn drives_the_status_led_like_the_main_loop() {
        use crate::blink::StatusLed;
        use crate::color::Pattern;

        let mut demo = BootDemo::new(0);
        let mut led = StatusLed::new();

        // 10ms polling cadence, as in the firmware loop.
        for tick in 0..2000u64 {
            let now = tick * 10;
            if let Some((color, blink)) = demo.poll(now) {
                led.set(color, blink);
            }
            let pattern = led.service(now);
            if now < 8000 {
                assert_eq!(led.color(), LedColor::Off);
                assert!(!led.is_blinking());
                assert_eq!(pattern, Pattern::OFF);
            }
        }

        // Well past the cue: blinking blue.
        assert_eq!(led.color(), LedColor::Blue);
        assert!(led.is_blinking());
    }

    #[test]
    fn measures_from_start_not_from_zero() {
        let mut demo = BootDemo::new(10_000);
        assert_eq!(demo.poll(17_999), None);
        assert_eq!(demo.poll(18_000), Some((LedColor::Blue, true)));
    }
}
