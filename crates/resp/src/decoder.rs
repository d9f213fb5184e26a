//! Lenient recursive-descent decoder for RESP2 replies.
//!
//! Every step returns the value together with the number of bytes it
//! accounted for, so arrays decode their children by slicing past what the
//! previous child consumed. Malformed content degrades to `Null` or an
//! empty bulk string instead of failing. The only errors are nesting past
//! [`DecodeOptions::max_depth`] and array counts above
//! [`DecodeOptions::max_elements`].

use bytes::Bytes;
use log::trace;

use crate::error::DecodeError;
use crate::options::DecodeOptions;
use crate::types::ReplyValue;
use crate::utils::*;

/// Decode one reply starting at `offset`, with default limits.
///
/// Returns the value and the number of bytes consumed from `offset`.
///
/// ```
/// use resp::ReplyValue;
///
/// let (value, consumed) = resp::decode(b"+OK\r\n", 0).unwrap();
/// assert_eq!(value, ReplyValue::simple_string("OK"));
/// assert_eq!(consumed, 5);
/// ```
pub fn decode(buf: &[u8], offset: usize) -> Result<(ReplyValue, usize), DecodeError> {
	decode_with(buf, offset, &DecodeOptions::default())
}

/// Decode one reply starting at `offset` using the given limits.
pub fn decode_with(
	buf: &[u8],
	offset: usize,
	options: &DecodeOptions,
) -> Result<(ReplyValue, usize), DecodeError> {
	let slice = buf.get(offset..).unwrap_or_default();
	let (value, consumed) = decode_value(slice, 0, options)?;
	trace!("Decoded {} of {} bytes at offset {}", consumed, slice.len(), offset);
	Ok((value, consumed))
}

fn decode_value(
	buf: &[u8],
	depth: usize,
	options: &DecodeOptions,
) -> Result<(ReplyValue, usize), DecodeError> {
	let Some(&type_marker) = buf.first() else {
		return Ok((ReplyValue::Null, 0));
	};

	match type_marker {
		SIMPLE_STRING => Ok(decode_simple_string(buf)),
		ERROR => Ok(decode_error(buf)),
		INTEGER => Ok(decode_integer(buf)),
		BULK_STRING => Ok(decode_bulk_string(buf)),
		ARRAY => decode_array(buf, depth, options),
		_ => Ok((ReplyValue::Null, 0)),
	}
}

/// `+OK\r\n`
fn decode_simple_string(buf: &[u8]) -> (ReplyValue, usize) {
	let (line, consumed) = header_line(buf);
	(
		ReplyValue::SimpleString(Bytes::copy_from_slice(line)),
		consumed,
	)
}

/// `-ERR message\r\n`
fn decode_error(buf: &[u8]) -> (ReplyValue, usize) {
	let (line, consumed) = header_line(buf);
	(ReplyValue::Error(Bytes::copy_from_slice(line)), consumed)
}

/// `:1000\r\n`, or `Null` when the payload is not a number
fn decode_integer(buf: &[u8]) -> (ReplyValue, usize) {
	let (line, consumed) = header_line(buf);
	(parse_integer(line).into(), consumed)
}

/// `$6\r\nfoobar\r\n` or `$-1\r\n`.
///
/// The payload is only kept when the terminator follows it exactly. The
/// consumed count always covers header, payload and terminator, even if
/// the buffer is shorter than that.
fn decode_bulk_string(buf: &[u8]) -> (ReplyValue, usize) {
	let (line, header_len) = header_line(buf);
	let length = parse_length(line);
	if length < 0 {
		return (ReplyValue::Null, header_len);
	}

	let length = usize::try_from(length).unwrap_or(usize::MAX);
	let end = header_len.saturating_add(length);
	let terminated = buf.get(end..end.saturating_add(CRLF.len())) == Some(CRLF);
	let data = match buf.get(header_len..end) {
		Some(payload) if terminated => Bytes::copy_from_slice(payload),
		_ => Bytes::new(),
	};

	(
		ReplyValue::BulkString(data),
		end.saturating_add(CRLF.len()),
	)
}

/// `*2\r\n$3\r\nfoo\r\n$3\r\nbar\r\n` or `*-1\r\n`
fn decode_array(
	buf: &[u8],
	depth: usize,
	options: &DecodeOptions,
) -> Result<(ReplyValue, usize), DecodeError> {
	let (line, header_len) = header_line(buf);
	let length = parse_length(line);
	if length < 0 {
		return Ok((ReplyValue::Null, header_len));
	}

	let level = depth + 1;
	if level > options.max_depth {
		return Err(DecodeError::NestingTooDeep {
			depth: level,
			limit: options.max_depth,
		});
	}

	let length = usize::try_from(length).unwrap_or(usize::MAX);
	if length > options.max_elements {
		return Err(DecodeError::ArrayTooLarge {
			len: length,
			limit: options.max_elements,
		});
	}

	// The header count is untrusted; never reserve more than the bytes left.
	let mut elements = Vec::with_capacity(length.min(buf.len().saturating_sub(header_len)));
	let mut consumed = header_len;

	for _ in 0..length {
		let rest = buf.get(consumed..).unwrap_or_default();
		if rest.is_empty() {
			break;
		}

		let (value, used) = decode_value(rest, level, options)?;
		elements.push(value);
		consumed = consumed.saturating_add(used);

		// Unknown marker: the slice cannot advance, every remaining slot is null.
		if used == 0 {
			elements.resize(length, ReplyValue::Null);
			break;
		}
	}

	Ok((ReplyValue::Array(elements), consumed))
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[test]
	fn test_decode_empty() {
		assert_eq!(decode(b"", 0).unwrap(), (ReplyValue::Null, 0));
	}

	#[test]
	fn test_decode_simple_string() {
		let (value, consumed) = decode(b"+OK\r\n", 0).unwrap();
		assert_eq!(value, ReplyValue::simple_string("OK"));
		assert_eq!(consumed, 5);
	}

	#[test]
	fn test_decode_error_strips_marker() {
		let (value, consumed) = decode(b"-ERR unknown command\r\n", 0).unwrap();
		assert_eq!(value, ReplyValue::error("ERR unknown command"));
		assert_eq!(consumed, 22);
	}

	#[rstest]
	#[case(b":1000\r\n", ReplyValue::Integer(1000))]
	#[case(b":-42\r\n", ReplyValue::Integer(-42))]
	#[case(b":abc\r\n", ReplyValue::Null)]
	#[case(b":\r\n", ReplyValue::Null)]
	fn test_decode_integer(#[case] input: &[u8], #[case] expected: ReplyValue) {
		let (value, consumed) = decode(input, 0).unwrap();
		assert_eq!(value, expected);
		assert_eq!(consumed, input.len());
	}

	#[test]
	fn test_decode_unknown_marker() {
		assert_eq!(decode(b"?what\r\n", 0).unwrap(), (ReplyValue::Null, 0));
	}

	#[test]
	fn test_decode_at_offset() {
		let buf = b"+skip\r\n:7\r\n";
		let (value, consumed) = decode(buf, 7).unwrap();
		assert_eq!(value, ReplyValue::Integer(7));
		assert_eq!(consumed, 4);

		assert_eq!(decode(buf, 100).unwrap(), (ReplyValue::Null, 0));
	}

	#[test]
	fn test_decode_array_pads_after_unknown_child() {
		let (value, consumed) = decode(b"*3\r\n+a\r\n?\r\n", 0).unwrap();
		assert_eq!(
			value,
			ReplyValue::array([
				ReplyValue::simple_string("a"),
				ReplyValue::Null,
				ReplyValue::Null,
			])
		);
		assert_eq!(consumed, 8);
	}

	#[test]
	fn test_decode_unknown_first_child_fills_count() {
		let (value, _) = decode(b"*4\r\n!x\r\n", 0).unwrap();
		assert_eq!(value.as_array().map(|a| a.len()), Some(4));
		assert!(value.as_array().unwrap().iter().all(ReplyValue::is_null));
	}

	#[test]
	fn test_decode_huge_array_header() {
		let result = decode(b"*9223372036854775807\r\n?\r\n", 0);
		assert_eq!(
			result,
			Err(DecodeError::ArrayTooLarge {
				len: 9223372036854775807,
				limit: crate::options::DEFAULT_MAX_ELEMENTS,
			})
		);
	}

	#[test]
	fn test_decode_element_limit() {
		let options = DecodeOptions::new().max_elements(2);
		assert!(decode_with(b"*2\r\n:1\r\n:2\r\n", 0, &options).is_ok());
		assert_eq!(
			decode_with(b"*3\r\n:1\r\n:2\r\n:3\r\n", 0, &options),
			Err(DecodeError::ArrayTooLarge { len: 3, limit: 2 })
		);
	}

	#[test]
	fn test_decode_depth_limit() {
		let options = DecodeOptions::new().max_depth(2);
		assert!(decode_with(b"*1\r\n*1\r\n+x\r\n", 0, &options).is_ok());

		let result = decode_with(b"*1\r\n*1\r\n*1\r\n+x\r\n", 0, &options);
		assert_eq!(
			result,
			Err(DecodeError::NestingTooDeep { depth: 3, limit: 2 })
		);
	}
}
