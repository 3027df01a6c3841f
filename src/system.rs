//! Read the system uptime (`/proc/uptime` format).

use crate::error::StatsError;
use crate::util::{read_source, first_f64};

use std::path::Path;

/// The raw content of an uptime source: seconds since boot followed by
/// the summed idle time of every core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Uptime {
	raw: String
}

impl Uptime {

	#[cfg(test)]
	fn from_string(raw: String) -> Self {
		Self {raw}
	}

	/// Read the uptime source, opened fresh on every call.
	pub fn read(path: &Path) -> Result<Self, StatsError> {
		Ok(Self {
			raw: read_source(path)?
		})
	}

	/// Seconds since boot, the first field.
	/// The second field (idle time) is never looked at.
	pub fn uptime(&self) -> Option<f64> {
		first_f64(&self.raw)
	}

}

/// Reads the uptime in seconds from `path`.
pub(crate) fn read_uptime(path: &Path) -> Result<f64, StatsError> {
	Uptime::read(path)?
		.uptime()
		.ok_or_else(|| StatsError::value(path))
}
