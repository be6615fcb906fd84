//! Status-LED colors and their channel patterns.
//!
//! The KY-016 module has no PWM here: a color is three on/off channels.
//! `pattern()` is total, with `Off` as the explicit fallback so "anything
//! unmapped renders dark" is a contract rather than an accident.

/// Steady-state color of the RGB status LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LedColor {
    #[default]
    Off,
    Red,
    Green,
    Blue,
    White,
}

impl LedColor {
    pub const fn name(self) -> &'static str {
        match self {
            LedColor::Off => "off",
            LedColor::Red => "red",
            LedColor::Green => "green",
            LedColor::Blue => "blue",
            LedColor::White => "white",
        }
    }

    /// Channel pattern for this color at full visibility.
    pub const fn pattern(self) -> Pattern {
        match self {
            LedColor::Red => Pattern::new(true, false, false),
            LedColor::Green => Pattern::new(false, true, false),
            LedColor::Blue => Pattern::new(false, false, true),
            LedColor::White => Pattern::new(true, true, true),
            LedColor::Off => Pattern::OFF,
        }
    }
}

impl core::fmt::Display for LedColor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Logic levels for the three LED channels, in (r, g, b) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub r: bool,
    pub g: bool,
    pub b: bool,
}

impl Pattern {
    pub const OFF: Pattern = Pattern::new(false, false, false);

    pub const fn new(r: bool, g: bool, b: bool) -> Self {
        Self { r, g, b }
    }

    pub const fn is_off(self) -> bool {
        !self.r && !self.g && !self.b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_match_wiring() {
        assert_eq!(LedColor::Red.pattern(), Pattern::new(true, false, false));
        assert_eq!(LedColor::Green.pattern(), Pattern::new(false, true, false));
        assert_eq!(LedColor::Blue.pattern(), Pattern::new(false, false, true));
        assert_eq!(LedColor::White.pattern(), Pattern::new(true, true, true));
    }

    #[test]
    fn off_is_all_low() {
        assert_eq!(LedColor::Off.pattern(), Pattern::OFF);
        assert!(LedColor::Off.pattern().is_off());
    }

    #[test]
    fn default_color_is_off() {
        assert_eq!(LedColor::default(), LedColor::Off);
    }
}
