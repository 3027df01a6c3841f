//! Why a snapshot could not be taken.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A failure while reading one of the cpu sources.
///
/// These never reach the caller of
/// [`cpu_times`](crate::cpu::CpuStatsReader::cpu_times), they are only logged.
#[derive(Debug, Error)]
pub enum StatsError {
	/// The source could not be opened or read.
	#[error("can't open linux cpu stats file {}: {}", .path.display(), .source)]
	Open {
		path: PathBuf,
		#[source]
		source: io::Error
	},
	/// The aggregate `cpu  ` line is missing or not first.
	#[error("unexpected header in linux cpu stats file {}", .path.display())]
	Header {
		path: PathBuf
	},
	/// A required number is absent or not numeric.
	#[error("unexpected format in linux cpu stats file {}", .path.display())]
	Value {
		path: PathBuf
	}
}

impl StatsError {

	pub(crate) fn open(path: &Path, source: io::Error) -> Self {
		Self::Open { path: path.to_path_buf(), source }
	}

	pub(crate) fn header(path: &Path) -> Self {
		Self::Header { path: path.to_path_buf() }
	}

	pub(crate) fn value(path: &Path) -> Self {
		Self::Value { path: path.to_path_buf() }
	}

	/// The file that caused the failure.
	pub fn path(&self) -> &Path {
		match self {
			Self::Open { path, .. } |
			Self::Header { path } |
			Self::Value { path } => path
		}
	}

}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn message_names_path_and_class() {
		let path = Path::new("/proc/stat");

		let e = StatsError::open(path, io::ErrorKind::NotFound.into());
		assert!(e.to_string().starts_with("can't open linux cpu stats file /proc/stat"));

		let e = StatsError::header(path);
		assert_eq!(e.to_string(), "unexpected header in linux cpu stats file /proc/stat");

		let e = StatsError::value(path);
		assert_eq!(e.to_string(), "unexpected format in linux cpu stats file /proc/stat");
		assert_eq!(e.path(), path);
	}

}
