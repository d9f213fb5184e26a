//! Utility functions and constants for RESP protocol.

/// CRLF line ending
pub const CRLF: &[u8] = b"\r\n";

/// Type markers for RESP2
pub const SIMPLE_STRING: u8 = b'+';
pub const ERROR: u8 = b'-';
pub const INTEGER: u8 = b':';
pub const BULK_STRING: u8 = b'$';
pub const ARRAY: u8 = b'*';

/// Find the position of CRLF in a byte slice
#[inline]
pub fn find_crlf(buf: &[u8]) -> Option<usize> {
	memchr::memmem::find(buf, CRLF)
}

/// Split the header line off a frame.
///
/// Returns the bytes between the type marker and the terminator together
/// with the number of bytes the header occupies including the terminator.
/// An unterminated frame takes the rest of the buffer as its line.
#[inline]
pub fn header_line(buf: &[u8]) -> (&[u8], usize) {
	match find_crlf(buf) {
		Some(pos) => (&buf[1.min(pos)..pos], pos + CRLF.len()),
		None => (buf.get(1..).unwrap_or_default(), buf.len()),
	}
}

/// Parse a signed base-10 integer, `None` on anything else
#[inline]
pub fn parse_integer(buf: &[u8]) -> Option<i64> {
	std::str::from_utf8(buf).ok()?.parse::<i64>().ok()
}

/// Parse a length header. Unparsable lengths count as zero.
#[inline]
pub fn parse_length(buf: &[u8]) -> i64 {
	parse_integer(buf).unwrap_or(0)
}
