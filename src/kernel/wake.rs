// Wake flag signaling between the timer ISR and the main loop
//
// The ISR sets an atomic flag and advances the uptime counter; the
// main loop consumes the flag via take_timer_tick(). Uptime is kept
// in 10ms ticks behind a critical section so the ISR increment and
// main-loop reads can't interleave.

use core::sync::atomic::{AtomicBool, Ordering};

/// Timer tick period. Uptime advances by this much per interrupt.
pub const TICK_MS: u64 = 10;

static WAKE_TIMER: AtomicBool = AtomicBool::new(false);

static UPTIME_TICKS: critical_section::Mutex<core::cell::Cell<u32>> =
    critical_section::Mutex::new(core::cell::Cell::new(0));

/// Called from the timer ISR: wake the main loop and advance uptime.
#[inline]
pub fn signal_timer() {
    WAKE_TIMER.store(true, Ordering::Release);
    critical_section::with(|cs| {
        let ticks = UPTIME_TICKS.borrow(cs);
        ticks.set(ticks.get().wrapping_add(1));
    });
}

/// Consume a pending timer wake, if any.
#[inline]
pub fn take_timer_tick() -> bool {
    WAKE_TIMER.swap(false, Ordering::Acquire)
}

pub fn uptime_ticks() -> u32 {
    critical_section::with(|cs| UPTIME_TICKS.borrow(cs).get())
}

/// Milliseconds since the periodic timer started.
pub fn uptime_ms() -> u64 {
    uptime_ticks() as u64 * TICK_MS
}

pub fn uptime_secs() -> u32 {
    (uptime_ms() / 1000) as u32
}

#[inline]
pub fn wait_for_interrupt() {
    #[cfg(target_arch = "xtensa")]
    unsafe {
        core::arch::asm!("waiti 0", options(nomem, nostack));
    }

    #[cfg(not(target_arch = "xtensa"))]
    core::hint::spin_loop();
}
