//!
//! Cpu times of the host (`/proc/stat`) or of the current container
//! (cgroup allocation and usage plus `/proc/uptime`).
//!
//! ```no_run
//! use cpu_utilization::cpu::{CpuStatsReader, LinuxCpuStatsReader};
//! let reader = LinuxCpuStatsReader::host("/proc/stat");
//! let times = reader.cpu_times();
//! if times.is_valid() {
//! 	println!("{} of {}", times.work_time(), times.total_time());
//! }
//! ```
//!
//! Every call opens its sources again, nothing is cached between calls.
//! Failures are logged and turn into an invalid [`CpuTimes`].

use crate::cgroup::CgroupCpu;
use crate::config::{Mode, StatsPaths};
use crate::error::StatsError;
use crate::system::read_uptime;
use crate::util::{parse_u64, skip_whitespace};

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use byte_parser::StrParser;

#[cfg(feature = "serde")]
use serde1::Serialize;

/// The aggregate line, the double space distinguishes it from `cpu0 `.
const AGGREGATE_TOKEN: &[u8; 5] = b"cpu  ";

/// user, nice, system and idle.
const NUMBER_OF_CPU_TIMES_TO_PARSE: usize = 4;

/// One snapshot returned by [`CpuStatsReader::cpu_times`].
///
/// In [`Mode::Host`] both values are cumulative kernel ticks which need to be
/// differenced between two snapshots. In [`Mode::Container`] `work_time` is the
/// usage to allocation ratio and `total_time` the uptime in seconds.
///
/// An invalid snapshot always has both values set to `0`. It can only be
/// serialized, so that invariant can't be bypassed by deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(crate = "serde1"))]
pub struct CpuTimes {
	is_valid: bool,
	work_time: f64,
	total_time: f64
}

impl CpuTimes {

	/// A snapshot that could not be taken.
	pub const fn invalid() -> Self {
		Self { is_valid: false, work_time: 0.0, total_time: 0.0 }
	}

	pub(crate) const fn valid(work_time: f64, total_time: f64) -> Self {
		Self { is_valid: true, work_time, total_time }
	}

	/// Returns true if every required source was read.
	pub fn is_valid(&self) -> bool {
		self.is_valid
	}

	pub fn work_time(&self) -> f64 {
		self.work_time
	}

	pub fn total_time(&self) -> f64 {
		self.total_time
	}

}

/// Something that can take a cpu snapshot.
pub trait CpuStatsReader {
	/// Takes a snapshot. Never fails, see [`CpuTimes::is_valid`].
	fn cpu_times(&self) -> CpuTimes;
}

/// Reads cpu times from the linux pseudo files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinuxCpuStatsReader {
	mode: Mode,
	paths: StatsPaths
}

impl LinuxCpuStatsReader {

	pub fn new(mode: Mode, paths: StatsPaths) -> Self {
		Self { mode, paths }
	}

	/// A host reader for the given stats file.
	pub fn host(host_stats: impl AsRef<Path>) -> Self {
		Self::new(Mode::Host, StatsPaths::default().with_host_stats(host_stats))
	}

	/// A container reader for the given cgroup and uptime files.
	pub fn container(
		cpu_allocated: impl AsRef<Path>,
		cpu_usage: impl AsRef<Path>,
		uptime: impl AsRef<Path>
	) -> Self {
		let paths = StatsPaths::default()
			.with_cpu_allocated(cpu_allocated)
			.with_cpu_usage(cpu_usage)
			.with_uptime(uptime);
		Self::new(Mode::Container, paths)
	}

	pub fn mode(&self) -> Mode {
		self.mode
	}

	pub fn paths(&self) -> &StatsPaths {
		&self.paths
	}

	fn try_cpu_times(&self) -> Result<CpuTimes, StatsError> {
		match self.mode {
			Mode::Host => {
				let [user, nice, system, idle] = read_host_times(&self.paths.host_stats)?;
				let work_time = user.saturating_add(nice).saturating_add(system);
				let total_time = work_time.saturating_add(idle);
				Ok(CpuTimes::valid(work_time as f64, total_time as f64))
			},
			Mode::Container => {
				let cgroup = CgroupCpu::read(
					&self.paths.cpu_allocated,
					&self.paths.cpu_usage
				)?;
				let uptime = read_uptime(&self.paths.uptime)?;
				let work_time = cgroup.usage_ratio()
					.ok_or_else(|| StatsError::value(&self.paths.cpu_allocated))?;
				Ok(CpuTimes::valid(work_time, uptime))
			}
		}
	}

}

impl Default for LinuxCpuStatsReader {
	fn default() -> Self {
		Self::new(Mode::default(), StatsPaths::default())
	}
}

impl CpuStatsReader for LinuxCpuStatsReader {
	fn cpu_times(&self) -> CpuTimes {
		match self.try_cpu_times() {
			Ok(times) => {
				log::trace!("{} cpu times {:?}", self.mode, times);
				times
			},
			Err(e) => {
				log::error!("{}", e);
				CpuTimes::invalid()
			}
		}
	}
}

/// Reads user, nice, system and idle following the aggregate token which
/// needs to start the file. Any whitespace, newlines included, separates
/// the numbers.
fn read_host_times(path: &Path) -> Result<[u64; NUMBER_OF_CPU_TIMES_TO_PARSE], StatsError> {
	let file = File::open(path)
		.map_err(|e| StatsError::open(path, e))?;
	let mut reader = BufReader::new(file);

	// a short read is a format error
	let mut header = [0u8; 5];
	reader.read_exact(&mut header)
		.map_err(|_| StatsError::header(path))?;
	if &header != AGGREGATE_TOKEN {
		return Err(StatsError::header(path))
	}

	let mut rest = String::new();
	reader.read_to_string(&mut rest)
		.map_err(|e| match e.kind() {
			io::ErrorKind::InvalidData => StatsError::value(path),
			_ => StatsError::open(path, e)
		})?;

	let mut parser = StrParser::new(&rest);
	let mut times = [0; NUMBER_OF_CPU_TIMES_TO_PARSE];
	for time in &mut times {
		skip_whitespace(&mut parser);
		*time = parse_u64(&mut parser)
			.ok_or_else(|| StatsError::value(path))?;
	}

	Ok(times)
}
