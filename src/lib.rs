// Firmware support library for the hush lamp (ESP32, WS2812B ring + RGB status LED)

#![no_std]

pub mod board;
pub mod drivers;
pub mod kernel;
