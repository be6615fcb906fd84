//! Hush lamp Board Support Package (BSP)
//!
//! This module provides hardware abstraction for the hush lamp main board.
//! It maps physical hardware to named subsystems so that application code
//! doesn't need to know GPIO numbers or peripheral details.

pub mod pins;

use esp_hal::{
    gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull},
    peripherals::Peripherals,
};

// Hardware Bundles
/// Status-LED subsystem hardware: three push-pull channel outputs.
pub struct StatusLedHw {
    pub r: Output<'static>,
    pub g: Output<'static>,
    pub b: Output<'static>,
}

/// DIP-switch bank. Switches short to ground, so "on" reads low.
pub struct ConfigHw {
    pub standalone: Input<'static>,
    pub access_point: Input<'static>,
    pub dynamic_mode: Input<'static>,
    pub dynamic_color: Input<'static>,
}

/// Snapshot of the DIP bank, converted to active-high booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DipConfig {
    pub standalone: bool,
    pub access_point: bool,
    pub dynamic_mode: bool,
    pub dynamic_color: bool,
}

impl ConfigHw {
    pub fn read(&self) -> DipConfig {
        DipConfig {
            standalone: self.standalone.is_low(),
            access_point: self.access_point.is_low(),
            dynamic_mode: self.dynamic_mode.is_low(),
            dynamic_color: self.dynamic_color.is_low(),
        }
    }
}

/// Ultrasonic subsystem hardware. Declared and idled only; ranging is
/// not wired up yet.
pub struct SonicHw {
    pub trig: Output<'static>,
    pub echo: Input<'static>,
}

/// User-facing odds and ends: push button and vibration motor.
pub struct UserHw {
    pub button: Input<'static>,
    pub motor: Output<'static>,
}

/// Complete board hardware, ready for driver initialization.
///
/// The LED ring data pin and the microphone ADC pin are pin-map
/// constants only; nothing here claims them.
pub struct Board {
    pub status_led: StatusLedHw,
    pub config: ConfigHw,
    pub sonic: SonicHw,
    pub user: UserHw,
}

impl Board {
    pub fn init(p: Peripherals) -> Self {
        // All outputs low at boot: LED dark, trigger idle, motor off.
        let status_led = StatusLedHw {
            r: Output::new(p.GPIO27, Level::Low, OutputConfig::default()),
            g: Output::new(p.GPIO14, Level::Low, OutputConfig::default()),
            b: Output::new(p.GPIO26, Level::Low, OutputConfig::default()),
        };

        let config = ConfigHw {
            standalone: Input::new(p.GPIO13, InputConfig::default().with_pull(Pull::Up)),
            access_point: Input::new(p.GPIO25, InputConfig::default().with_pull(Pull::Up)),
            dynamic_mode: Input::new(p.GPIO33, InputConfig::default().with_pull(Pull::Up)),
            dynamic_color: Input::new(p.GPIO32, InputConfig::default().with_pull(Pull::Up)),
        };

        let sonic = SonicHw {
            trig: Output::new(p.GPIO21, Level::Low, OutputConfig::default()),
            echo: Input::new(p.GPIO18, InputConfig::default().with_pull(Pull::None)),
        };

        let user = UserHw {
            button: Input::new(p.GPIO19, InputConfig::default().with_pull(Pull::Up)),
            motor: Output::new(p.GPIO23, Level::Low, OutputConfig::default()),
        };

        Board {
            status_led,
            config,
            sonic,
            user,
        }
    }
}
