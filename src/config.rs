//! Which sources to read and how to interpret them.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::fmt;

use thiserror::Error;

#[cfg(feature = "serde")]
use serde1::{Serialize, Deserialize};

/// Selects the sources and the formula of a reader.
/// Fixed at construction, never inferred from the files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(crate = "serde1", rename_all = "UPPERCASE"))]
pub enum Mode {
	/// Whole machine accounting from `/proc/stat`.
	#[default]
	Host,
	/// Cgroup accounting of the current container.
	Container
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown cpu stats mode {0:?}")]
pub struct ParseModeError(String);

impl FromStr for Mode {
	type Err = ParseModeError;
	fn from_str(s: &str) -> Result<Self, ParseModeError> {
		match s.trim() {
			m if m.eq_ignore_ascii_case("host") => Ok(Self::Host),
			m if m.eq_ignore_ascii_case("container") => Ok(Self::Container),
			m => Err(ParseModeError(m.to_string()))
		}
	}
}

impl fmt::Display for Mode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Host => f.write_str("HOST"),
			Self::Container => f.write_str("CONTAINER")
		}
	}
}

/// The locations of every source a reader may need.
///
/// Which of them are opened depends on the [`Mode`]. Nothing is checked
/// until read time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(crate = "serde1", default))]
pub struct StatsPaths {
	pub host_stats: PathBuf,
	pub cpu_allocated: PathBuf,
	pub cpu_usage: PathBuf,
	pub uptime: PathBuf
}

impl StatsPaths {

	pub const HOST_STATS: &'static str = "/proc/stat";
	pub const CPU_ALLOCATED: &'static str = "/sys/fs/cgroup/cpu/cpu.shares";
	pub const CPU_USAGE: &'static str = "/sys/fs/cgroup/cpu/cpuacct.usage";
	pub const UPTIME: &'static str = "/proc/uptime";

	pub fn with_host_stats(mut self, path: impl AsRef<Path>) -> Self {
		self.host_stats = path.as_ref().to_path_buf();
		self
	}

	pub fn with_cpu_allocated(mut self, path: impl AsRef<Path>) -> Self {
		self.cpu_allocated = path.as_ref().to_path_buf();
		self
	}

	pub fn with_cpu_usage(mut self, path: impl AsRef<Path>) -> Self {
		self.cpu_usage = path.as_ref().to_path_buf();
		self
	}

	pub fn with_uptime(mut self, path: impl AsRef<Path>) -> Self {
		self.uptime = path.as_ref().to_path_buf();
		self
	}

}

impl Default for StatsPaths {
	fn default() -> Self {
		Self {
			host_stats: Self::HOST_STATS.into(),
			cpu_allocated: Self::CPU_ALLOCATED.into(),
			cpu_usage: Self::CPU_USAGE.into(),
			uptime: Self::UPTIME.into()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parse_mode() {
		assert_eq!("host".parse::<Mode>().unwrap(), Mode::Host);
		assert_eq!(" CONTAINER\n".parse::<Mode>().unwrap(), Mode::Container);
		assert!("cgroup".parse::<Mode>().is_err());
		assert_eq!(Mode::Container.to_string(), "CONTAINER");
		assert_eq!(Mode::default(), Mode::Host);
	}

	#[test]
	fn default_paths() {
		let paths = StatsPaths::default()
			.with_uptime("/tmp/uptime");
		assert_eq!(paths.host_stats, Path::new("/proc/stat"));
		assert_eq!(paths.cpu_usage, Path::new("/sys/fs/cgroup/cpu/cpuacct.usage"));
		assert_eq!(paths.uptime, Path::new("/tmp/uptime"));
	}

	#[cfg(feature = "serde")]
	#[test]
	fn deserialize_config() {
		let mode: Mode = serde_json::from_str("\"CONTAINER\"").unwrap();
		assert_eq!(mode, Mode::Container);

		let paths: StatsPaths = serde_json::from_str(
			r#"{"cpu_allocated": "/cg/cpu.max"}"#
		).unwrap();
		assert_eq!(paths.cpu_allocated, Path::new("/cg/cpu.max"));
		assert_eq!(paths.host_stats, Path::new(StatsPaths::HOST_STATS));
	}

}
