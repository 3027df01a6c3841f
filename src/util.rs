use crate::error::StatsError;

use std::{fs, io};
use std::path::Path;

use byte_parser::{StrParser, ParseIterator};

/// Reads a whole source. Content that is not utf8 is a format error,
/// every other io failure means the source is unavailable.
pub(crate) fn read_source(path: &Path) -> Result<String, StatsError> {
	fs::read_to_string(path)
		.map_err(|e| match e.kind() {
			io::ErrorKind::InvalidData => StatsError::value(path),
			_ => StatsError::open(path, e)
		})
}

/// Parses the leading number of the first whitespace-delimited token.
pub(crate) fn first_u64(raw: &str) -> Option<u64> {
	let token = raw.split_ascii_whitespace().next()?;
	parse_u64(&mut StrParser::new(token))
}

/// Parses the leading decimal of the first whitespace-delimited token.
pub(crate) fn first_f64(raw: &str) -> Option<f64> {
	let token = raw.split_ascii_whitespace().next()?;
	parse_f64(&mut StrParser::new(token))
}

/// Skips any ascii whitespace, newlines included.
pub(crate) fn skip_whitespace<'s, I>(iter: &mut I)
where I: ParseIterator<'s> {
	iter.consume_while_byte_fn(u8::is_ascii_whitespace);
}

// parses an unsigned integer
pub(crate) fn parse_u64<'s, I>(iter: &mut I) -> Option<u64>
where I: ParseIterator<'s> {

	let mut iter = iter.record();

	iter.while_byte_fn(u8::is_ascii_digit)
		.consume_at_least(1)
		.ok()?;

	iter.to_str()
		.parse().ok()
}

// parses a part of a slice
// Panics if Iterator contains not valid utf8
pub(crate) fn parse_f64<'s, I>(iter: &mut I) -> Option<f64>
where I: ParseIterator<'s> {

	let mut iter = iter.record();

	// consume first digits
	iter.while_byte_fn(u8::is_ascii_digit)
		.consume_at_least(1)
		.ok()?;

	// dot
	let has_dot = iter
		.next_if(|&b| b == b'.')
		.is_some();

	if has_dot {
		// consume next digits
		iter.consume_while_byte_fn(u8::is_ascii_digit);
	}

	iter.to_str()
		.parse().ok()
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn first_tokens() {
		assert_eq!(first_u64("1000\n"), Some(1000));
		assert_eq!(first_u64("  42 7"), Some(42));
		assert_eq!(first_u64("notanumb3r\n"), None);
		assert_eq!(first_u64(""), None);
		assert_eq!(first_u64("-5"), None);

		assert_eq!(first_f64("10000.0 123788.9\n"), Some(10000.0));
		assert_eq!(first_f64("220420.83 5275548.45"), Some(220420.83));
		assert_eq!(first_f64("17"), Some(17.0));
		assert_eq!(first_f64("notnumb3r\n"), None);
	}

	#[test]
	fn scan_numbers() {
		let mut iter = StrParser::new("14987204 4857\t3003536\n11594988\ncpu0");
		assert_eq!(parse_u64(&mut iter), Some(14987204));
		skip_whitespace(&mut iter);
		assert_eq!(parse_u64(&mut iter), Some(4857));
		skip_whitespace(&mut iter);
		assert_eq!(parse_u64(&mut iter), Some(3003536));
		skip_whitespace(&mut iter);
		assert_eq!(parse_u64(&mut iter), Some(11594988));
		skip_whitespace(&mut iter);
		assert_eq!(parse_u64(&mut iter), None);
	}

	#[test]
	fn read_source_errors() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("cpuacct.usage");
		fs::write(&path, b"\xff\xfe\n").unwrap();
		assert!(matches!(read_source(&path), Err(StatsError::Value { .. })));

		let missing = dir.path().join("cpuacct.usage.not_exists");
		assert!(matches!(read_source(&missing), Err(StatsError::Open { .. })));

		fs::write(&path, "100000\n").unwrap();
		assert_eq!(read_source(&path).unwrap(), "100000\n");
	}

}
