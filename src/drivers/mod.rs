// Hardware drivers — chip-level, board-independent.
//
// Each module is reusable across boards; only pin assignments and
// wiring (in board/) are board-specific.

pub mod status_led;

pub use status_led::StatusLedDriver;
