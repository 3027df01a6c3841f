//! Prints cpu utilization every second.  
//! `cargo run --example cpu_times -- container`


use cpu_utilization::{CpuStatsReader, CpuTimes, LinuxCpuStatsReader, Mode, StatsPaths};

use std::thread;
use std::time::Duration;


fn main() {
	env_logger::init();

	let mode: Mode = match std::env::args().nth(1) {
		Some(m) => m.parse().expect("expected host or container"),
		None => Mode::Host
	};
	let reader = LinuxCpuStatsReader::new(mode, StatsPaths::default());

	let mut previous = reader.cpu_times();
	loop {
		thread::sleep(Duration::from_secs(1));
		let current = reader.cpu_times();
		if let Some(usage) = utilization(&previous, &current) {
			println!("{} cpu {:.1}%", mode, usage * 100.0);
		}
		previous = current;
	}
}

// both snapshots need to be valid and apart
fn utilization(previous: &CpuTimes, current: &CpuTimes) -> Option<f64> {
	if !previous.is_valid() || !current.is_valid() {
		return None
	}

	let work = current.work_time() - previous.work_time();
	let total = current.total_time() - previous.total_time();
	if total <= 0.0 {
		return None
	}

	// in container mode this is allocation units per second of uptime
	Some(work / total)
}
