//! Decoded reply values.

use bytes::Bytes;

/// A decoded RESP2 reply.
///
/// The decoder only ever produces `Null`, `SimpleString`, `Error`,
/// `Integer`, `BulkString` and `Array`. `Boolean` and `StringList` are
/// display leaves that callers may build themselves and hand to the
/// printer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReplyValue {
	/// `$-1\r\n`, `*-1\r\n`, or anything that could not be decoded
	Null,

	/// Simple string: `+OK\r\n`
	SimpleString(Bytes),

	/// Error: `-ERR message\r\n`, stored without the `-` marker
	Error(Bytes),

	/// Integer: `:1000\r\n`
	Integer(i64),

	/// Bulk string: `$6\r\nfoobar\r\n`
	BulkString(Bytes),

	/// Array: `*2\r\n$3\r\nfoo\r\n$3\r\nbar\r\n`
	Array(Vec<ReplyValue>),

	/// Boolean display leaf
	Boolean(bool),

	/// Flat list of strings, rendered line by line at the top level
	StringList(Vec<Bytes>),
}

impl ReplyValue {
	/// Check if the value is an error
	pub fn is_error(&self) -> bool {
		matches!(self, ReplyValue::Error(_))
	}

	/// Check if the value is null
	pub fn is_null(&self) -> bool {
		matches!(self, ReplyValue::Null)
	}

	/// Try to convert to a string slice
	pub fn as_str(&self) -> Option<&str> {
		match self {
			ReplyValue::SimpleString(s) | ReplyValue::BulkString(s) | ReplyValue::Error(s) => {
				std::str::from_utf8(s).ok()
			}
			_ => None,
		}
	}

	/// Try to convert to integer
	pub fn as_integer(&self) -> Option<i64> {
		match self {
			ReplyValue::Integer(i) => Some(*i),
			_ => None,
		}
	}

	/// Try to convert to array
	pub fn as_array(&self) -> Option<&[ReplyValue]> {
		match self {
			ReplyValue::Array(a) => Some(a),
			_ => None,
		}
	}

	// Convenience constructors

	/// Create a simple string value
	pub fn simple_string(s: impl Into<Bytes>) -> Self {
		ReplyValue::SimpleString(s.into())
	}

	/// Create a bulk string value
	pub fn bulk_string(s: impl Into<Bytes>) -> Self {
		ReplyValue::BulkString(s.into())
	}

	/// Create an error value
	pub fn error(e: impl Into<Bytes>) -> Self {
		ReplyValue::Error(e.into())
	}

	/// Create an array value from an iterator
	pub fn array(items: impl IntoIterator<Item = ReplyValue>) -> Self {
		ReplyValue::Array(items.into_iter().collect())
	}

	/// Create a string list value from an iterator
	pub fn string_list<S: Into<Bytes>>(items: impl IntoIterator<Item = S>) -> Self {
		ReplyValue::StringList(items.into_iter().map(Into::into).collect())
	}
}

impl From<i64> for ReplyValue {
	fn from(i: i64) -> Self {
		ReplyValue::Integer(i)
	}
}

impl From<bool> for ReplyValue {
	fn from(b: bool) -> Self {
		ReplyValue::Boolean(b)
	}
}

impl<T: Into<ReplyValue>> From<Option<T>> for ReplyValue {
	fn from(o: Option<T>) -> Self {
		match o {
			Some(v) => v.into(),
			None => ReplyValue::Null,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_is_error() {
		assert!(ReplyValue::error("ERR").is_error());
		assert!(!ReplyValue::simple_string("OK").is_error());
	}

	#[test]
	fn test_as_str() {
		assert_eq!(ReplyValue::simple_string("hello").as_str(), Some("hello"));
		assert_eq!(ReplyValue::bulk_string("bulk").as_str(), Some("bulk"));
		assert_eq!(ReplyValue::Integer(42).as_str(), None);
		assert_eq!(
			ReplyValue::bulk_string(&b"\xff\xfe"[..]).as_str(),
			None
		);
	}

	#[test]
	fn test_from_conversions() {
		let i: ReplyValue = 42i64.into();
		assert_eq!(i.as_integer(), Some(42));

		let b: ReplyValue = true.into();
		assert_eq!(b, ReplyValue::Boolean(true));

		let n: ReplyValue = Option::<i64>::None.into();
		assert!(n.is_null());
	}

	#[test]
	fn test_convenience_constructors() {
		let arr = ReplyValue::array(vec![ReplyValue::Integer(1), ReplyValue::Integer(2)]);
		assert_eq!(arr.as_array().map(|a| a.len()), Some(2));

		let list = ReplyValue::string_list(["a", "b"]);
		assert_eq!(
			list,
			ReplyValue::StringList(vec![Bytes::from("a"), Bytes::from("b")])
		);
	}
}
