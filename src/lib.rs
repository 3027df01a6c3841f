//!
//! A probe that answers how much cpu was consumed and against which
//! ceiling, read from the linux accounting files.  
//! Either the whole host (`/proc/stat`) or the current container
//! (cgroup cpu allocation and usage plus `/proc/uptime`) is read,
//! depending on the configured [`Mode`](config::Mode).
//!
//! ## Errors
//! A snapshot is never an error. Missing or malformed sources are
//! logged through the `log` facade and produce an invalid
//! [`CpuTimes`](cpu::CpuTimes).
//!
//! ## Async
//! Every method here reads from /proc or /sys which
//! does not benefit from async code.

/// Take cpu snapshots.
pub mod cpu;
/// Select the mode and the source files.
pub mod config;
/// Failures while reading a source.
pub mod error;
/// Read the cgroup cpu counters.
pub mod cgroup;
/// Read the system uptime.
pub mod system;

mod util;

pub use cpu::{CpuStatsReader, CpuTimes, LinuxCpuStatsReader};
pub use config::{Mode, StatsPaths};
