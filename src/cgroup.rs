//! Read the cpu allocation and usage counters of a cgroup.
//!
//! Both files hold a single number: the allocation in whatever unit the
//! controller uses (for example `cpu.shares`), the usage as the cumulative
//! consumed cpu time in nanoseconds (`cpuacct.usage`).

use crate::error::StatsError;
use crate::util::{read_source, first_u64};

use std::path::Path;

/// Nanoseconds of usage per unit of allocation.
const USAGE_PER_ALLOCATION: f64 = 1_000_000.0;

/// A snapshot of the two cgroup counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CgroupCpu {
	allocated: u64,
	usage: u64
}

impl CgroupCpu {

	/// Reads both counters. Fails if either file is missing or malformed.
	pub fn read(allocated: &Path, usage: &Path) -> Result<Self, StatsError> {
		let allocated = read_counter(allocated)?;
		let usage = read_counter(usage)?;
		Ok(Self { allocated, usage })
	}

	/// The cpu allocation (quota).
	pub fn allocated(&self) -> u64 {
		self.allocated
	}

	/// The cumulative usage counter.
	pub fn usage(&self) -> u64 {
		self.usage
	}

	/// `usage / (allocated * 1_000_000)`.
	///
	/// Returns `None` for a zero allocation.
	pub fn usage_ratio(&self) -> Option<f64> {
		if self.allocated == 0 {
			return None
		}
		Some(self.usage as f64 / (self.allocated as f64 * USAGE_PER_ALLOCATION))
	}

}

fn read_counter(path: &Path) -> Result<u64, StatsError> {
	let raw = read_source(path)?;
	first_u64(&raw)
		.ok_or_else(|| StatsError::value(path))
}

#[cfg(test)]
mod tests {
	use super::*;

	use std::fs;

	#[test]
	fn ratio() {
		let cpu = CgroupCpu { allocated: 1000, usage: 10_000_000_000 };
		assert_eq!(cpu.usage_ratio(), Some(10.0));

		let cpu = CgroupCpu { allocated: 0, usage: 10_000_000_000 };
		assert_eq!(cpu.usage_ratio(), None);
	}

	#[test]
	fn read_counters() {
		let dir = tempfile::tempdir().unwrap();
		let allocated = dir.path().join("cpu.shares");
		let usage = dir.path().join("cpuacct.usage");
		fs::write(&allocated, "1000101\n").unwrap();
		fs::write(&usage, "100000\n").unwrap();

		let cpu = CgroupCpu::read(&allocated, &usage).unwrap();
		assert_eq!(cpu.allocated(), 1000101);
		assert_eq!(cpu.usage(), 100000);

		fs::write(&usage, "notanumb3r\n").unwrap();
		let e = CgroupCpu::read(&allocated, &usage).unwrap_err();
		assert!(matches!(e, StatsError::Value { .. }));
		assert_eq!(e.path(), usage.as_path());

		let missing = dir.path().join("cpu.shares.not_exists");
		let e = CgroupCpu::read(&missing, &usage).unwrap_err();
		assert!(matches!(e, StatsError::Open { .. }));
	}

}
