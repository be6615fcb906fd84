// Wake/sleep primitives for the main polling loop
// Everything runs on the app core, no preemption. WFI idles the CPU
// between timer ticks.

pub mod wake;

pub use wake::{signal_timer, take_timer_tick, uptime_ms, wait_for_interrupt};
