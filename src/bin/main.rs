// hush-lamp entry point and main loop
//
// Boot sequence: logger -> timer -> board -> DIP diagnostic -> loop
// Main loop: WFI -> consume timer tick -> demo cue -> service status LED
//
// The 10ms periodic timer is the only wake source; its ISR advances
// the uptime counter that feeds the blink state machine. The 8-second
// switch to blinking blue is a bring-up demo cue; a real trigger
// (microphone level, remote command) replaces that single call site.

#![no_std]
#![no_main]

use esp_backtrace as _;
use esp_hal::clock::CpuClock;
use esp_hal::time::Duration;
use esp_hal::timer::PeriodicTimer;
use esp_hal::timer::timg::TimerGroup;
use log::info;

use core::cell::RefCell;
use critical_section::Mutex;

use hush_core::BootDemo;
use hush_lamp::board::{pins, Board};
use hush_lamp::drivers::StatusLedDriver;
use hush_lamp::kernel::wake::{self, TICK_MS};

esp_bootloader_esp_idf::esp_app_desc!();

static TIMER0: Mutex<RefCell<Option<PeriodicTimer<'static, esp_hal::Blocking>>>> =
    Mutex::new(RefCell::new(None));

#[esp_hal::handler(priority = esp_hal::interrupt::Priority::Priority1)]
fn timer0_handler() {
    critical_section::with(|cs| {
        if let Some(timer) = TIMER0.borrow_ref_mut(cs).as_mut() {
            timer.clear_interrupt();
        }
    });
    wake::signal_timer();
}

#[esp_hal::main]
fn main() -> ! {
    esp_println::logger::init_logger_from_env();
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    info!("booting...");

    let timg0 = TimerGroup::new(unsafe { peripherals.TIMG0.clone_unchecked() });
    let mut timer0 = PeriodicTimer::new(timg0.timer0);
    critical_section::with(|cs| {
        timer0.set_interrupt_handler(timer0_handler);
        timer0.start(Duration::from_millis(TICK_MS)).unwrap();
        timer0.listen();
        TIMER0.borrow_ref_mut(cs).replace(timer0);
    });
    info!("timer initialized.");

    let board = Board::init(peripherals);
    info!("hardware initialized.");
    info!(
        "ring: {} LEDs on GPIO{}, mic on GPIO{}",
        pins::LED_RING_COUNT,
        pins::LED_RING_DATA,
        pins::MIC_ADC
    );

    // DIP bank is diagnostic-only for now; nothing downstream reads it.
    let dip = board.config.read();
    info!(
        "dip: standalone={} ap_master={} dynamic_mode={} dynamic_color={}",
        dip.standalone, dip.access_point, dip.dynamic_mode, dip.dynamic_color
    );

    let hw = board.status_led;
    let mut status_led = StatusLedDriver::new(hw.r, hw.g, hw.b);
    let mut demo = BootDemo::new(wake::uptime_ms());
    info!("ready.");

    loop {
        if !wake::take_timer_tick() {
            wake::wait_for_interrupt();
            continue;
        }

        let now_ms = wake::uptime_ms();

        if let Some((color, blink)) = demo.poll(now_ms) {
            info!("demo cue: {} (blink={})", color, blink);
            status_led.set(color, blink);
        }

        // esp-hal outputs are infallible; unreachable error arm.
        let _ = status_led.service(now_ms);
    }
}
