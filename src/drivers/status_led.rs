// RGB status LED driver: hush-core state machine bound to three GPIOs.
//
// Generic over embedded-hal OutputPin so the logic stays board-agnostic;
// the board hands in concrete esp-hal Outputs (common cathode, so a set
// channel drives the pin high).

use embedded_hal::digital::OutputPin;
use hush_core::{LedColor, Pattern, StatusLed};

pub struct StatusLedDriver<P: OutputPin> {
    state: StatusLed,
    r: P,
    g: P,
    b: P,
}

impl<P: OutputPin> StatusLedDriver<P> {
    pub fn new(r: P, g: P, b: P) -> Self {
        Self {
            state: StatusLed::new(),
            r,
            g,
            b,
        }
    }

    /// Replace the target color and blink mode.
    pub fn set(&mut self, color: LedColor, blink: bool) {
        self.state.set(color, blink);
    }

    pub fn color(&self) -> LedColor {
        self.state.color()
    }

    /// Advance the blink phase and drive the channels. Call once per
    /// polling tick with the current uptime.
    pub fn service(&mut self, now_ms: u64) -> Result<(), P::Error> {
        let pattern = self.state.service(now_ms);
        self.apply(pattern)
    }

    fn apply(&mut self, pattern: Pattern) -> Result<(), P::Error> {
        self.r.set_state(pattern.r.into())?;
        self.g.set_state(pattern.g.into())?;
        self.b.set_state(pattern.b.into())?;
        Ok(())
    }
}
