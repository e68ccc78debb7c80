//! Background Tasks Module
//!
//! Periodic maintenance tasks that run alongside request handling: the TTL
//! sweep and the optional memory watchdog.

mod memory;
mod sweep;

pub use memory::spawn_memory_watchdog;
pub use sweep::spawn_sweep_task;
