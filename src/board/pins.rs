//! GPIO |      Function      |      Notes
//! -----+--------------------+----------------------------------
//!  4   | LED ring data      | WS2812B, 16 LEDs
//! 13   | DIP 1 - Standalone | Radio off, run local only
//! 14   | Status LED G       |
//! 18   | Sonic ECHO         | HC-SR04 echo
//! 19   | Push button        | Active LOW, reboot
//! 21   | Sonic TRIG         | HC-SR04 trigger (moved from 5)
//! 23   | Vibration motor    |
//! 25   | DIP 2 - AP master  | This unit starts the access point
//! 26   | Status LED B       |
//! 27   | Status LED R       | KY-016, common cathode
//! 32   | DIP 4 - Dyn color  | Dynamic ring color vs. fixed white
//! 33   | DIP 3 - Dynamic    | Dynamic level mode vs. static (80%)
//! 34   | Microphone ADC     | MAX9814 AGC, input-only pin

// ----- LED Ring (WS2812B) -----
pub const LED_RING_DATA: u8 = 4;
pub const LED_RING_COUNT: usize = 16;

// ----- Ultrasonic (HC-SR04) -----
pub const SONIC_TRIG: u8 = 21; // was 5, conflicted with strapping
pub const SONIC_ECHO: u8 = 18;

// ----- DIP Switches (configuration, active LOW) -----
pub const DIP_STANDALONE: u8 = 13;
pub const DIP_ACCESS_POINT: u8 = 25;
pub const DIP_DYNAMIC_MODE: u8 = 33;
pub const DIP_DYNAMIC_COLOR: u8 = 32;

// ----- RGB Status LED (KY-016, common cathode) -----
pub const STATUS_LED_R: u8 = 27;
pub const STATUS_LED_G: u8 = 14;
pub const STATUS_LED_B: u8 = 26;

// ----- Button -----
pub const BUTTON_PUSH: u8 = 19; // active LOW, reboot

// ----- Vibration Motor -----
pub const VIBRATION_MOTOR: u8 = 23;

// ----- Microphone (MAX9814 AGC) -----
pub const MIC_ADC: u8 = 34; // ADC1 channel 6, input-only
