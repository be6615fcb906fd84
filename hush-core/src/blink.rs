//! Status-LED state machine.
//!
//! One owned struct instead of the usual pile of firmware globals:
//! target color, blink enable, current visibility phase, and the last
//! toggle timestamp all live here, written only by `service()` and
//! `set()`. `service()` is the render step — call it every polling
//! tick with the current uptime and drive the pins with what it
//! returns. It is idempotent within a tick and has no side effects
//! beyond its own bookkeeping.

use log::debug;

use crate::color::{LedColor, Pattern};

/// Blink phase length. A full on/off cycle is twice this.
pub const BLINK_INTERVAL_MS: u64 = 1000;

pub struct StatusLed {
    color: LedColor,
    blink: bool,
    visible: bool,
    last_toggle_ms: u64,
}

impl StatusLed {
    pub const fn new() -> Self {
        Self {
            color: LedColor::Off,
            blink: false,
            visible: true,
            last_toggle_ms: 0,
        }
    }

    /// Replace the target color and blink mode.
    ///
    /// The visibility phase and toggle timestamp carry over, so a color
    /// change mid-blink keeps the current phase instead of restarting it.
    pub fn set(&mut self, color: LedColor, blink: bool) {
        if color != self.color || blink != self.blink {
            debug!("status led: {} (blink={})", color, blink);
        }
        self.color = color;
        self.blink = blink;
    }

    pub fn color(&self) -> LedColor {
        self.color
    }

    pub fn is_blinking(&self) -> bool {
        self.blink
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Render step: advance the blink phase and return the channel
    /// pattern to drive.
    ///
    /// `Off` short-circuits past the blink bookkeeping entirely; the
    /// phase resumes where it left off if the color comes back.
    pub fn service(&mut self, now_ms: u64) -> Pattern {
        if self.color == LedColor::Off {
            return Pattern::OFF;
        }

        if self.blink {
            if now_ms.wrapping_sub(self.last_toggle_ms) >= BLINK_INTERVAL_MS {
                self.visible = !self.visible;
                self.last_toggle_ms = now_ms;
            }
        } else {
            self.visible = true;
        }

        if self.visible {
            self.color.pattern()
        } else {
            Pattern::OFF
        }
    }
}

impl Default for StatusLed {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_dark_and_steady() {
        let mut led = StatusLed::new();
        assert_eq!(led.color(), LedColor::Off);
        assert!(!led.is_blinking());
        assert_eq!(led.service(0), Pattern::OFF);
    }

    #[test]
    fn off_ignores_blink_mode() {
        let mut led = StatusLed::new();
        led.set(LedColor::Off, true);
        for now in [0, 500, 1500, 10_000] {
            assert_eq!(led.service(now), Pattern::OFF);
        }
    }

    #[test]
    fn steady_color_renders_continuously() {
        let mut led = StatusLed::new();
        led.set(LedColor::Green, false);
        for now in [0, 100, 999, 1000, 5000] {
            assert_eq!(led.service(now), LedColor::Green.pattern());
        }
    }

    #[test]
    fn blink_toggles_once_per_interval() {
        let mut led = StatusLed::new();
        led.set(LedColor::Red, true);

        // First service at t=1000 crosses the initial window: hidden.
        assert_eq!(led.service(1000), Pattern::OFF);
        // Within the new window nothing toggles.
        assert_eq!(led.service(1500), Pattern::OFF);
        assert_eq!(led.service(1999), Pattern::OFF);
        // Next window boundary: visible again.
        assert_eq!(led.service(2000), LedColor::Red.pattern());
        assert_eq!(led.service(2999), LedColor::Red.pattern());
        assert_eq!(led.service(3000), Pattern::OFF);
    }

    #[test]
    fn toggle_window_measured_from_last_toggle() {
        let mut led = StatusLed::new();
        led.set(LedColor::Blue, true);

        // Late service: window restarts from the observed toggle time,
        // not from a fixed grid.
        assert_eq!(led.service(2500), Pattern::OFF);
        assert_eq!(led.service(3400), Pattern::OFF);
        assert_eq!(led.service(3500), LedColor::Blue.pattern());
    }

    #[test]
    fn disabling_blink_forces_visible() {
        let mut led = StatusLed::new();
        led.set(LedColor::White, true);
        assert_eq!(led.service(1000), Pattern::OFF); // hidden phase

        led.set(LedColor::White, false);
        assert_eq!(led.service(1001), LedColor::White.pattern());
        assert!(led.is_visible());
    }

    #[test]
    fn color_change_keeps_blink_phase() {
        let mut led = StatusLed::new();
        led.set(LedColor::Red, true);
        assert_eq!(led.service(1000), Pattern::OFF);

        // Swap color mid-phase: still hidden until the window elapses.
        led.set(LedColor::Blue, true);
        assert_eq!(led.service(1500), Pattern::OFF);
        assert_eq!(led.service(2000), LedColor::Blue.pattern());
    }

    #[test]
    fn service_is_idempotent_within_a_tick() {
        let mut led = StatusLed::new();
        led.set(LedColor::Red, true);
        let first = led.service(4000);
        // Same instant again: same answer, no extra toggle.
        assert_eq!(led.service(4000), first);
        assert_eq!(led.service(4000), first);
    }
}
