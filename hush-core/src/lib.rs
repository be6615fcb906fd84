// hush-core: status-LED logic for the hush lamp, no hardware attached.
// color: LedColor enum and the total color -> channel-pattern mapping
// blink: StatusLed state machine (steady/blinking x visible/hidden)
// demo:  one-shot boot demonstration cue (blinking blue after 8s)
//
// Everything here takes time as a u64 millisecond argument so the
// firmware feeds it esp-hal uptime and the tests feed it numbers.

#![no_std]

pub mod blink;
pub mod color;
pub mod demo;

pub use blink::StatusLed;
pub use color::{LedColor, Pattern};
pub use demo::BootDemo;
