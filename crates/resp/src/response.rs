//! Raw reply buffer with on-demand decoding.

use std::fmt;

use bytes::Bytes;
use bytes::BytesMut;
use log::debug;
use log::warn;

use crate::decoder;
use crate::options::DecodeOptions;
use crate::types::ReplyValue;
use crate::validator;
use crate::validator::ReplyKind;

/// Prefix of the generic Redis error class.
const GENERIC_ERROR_PREFIX: &[u8] = b"-ERR";

/// A reply as received from the server.
///
/// The transport appends bytes as they arrive and polls [`is_valid`] before
/// calling [`decode`]. Decoding never fails: hard decoder errors come back as
/// a [`ReplyValue::Error`] carrying the error message.
///
/// ```
/// use resp::{ReplyValue, Response};
///
/// let mut response = Response::new();
/// response.append(b"*1\r\n+a");
/// assert!(!response.is_valid());
///
/// response.append(b"\r\n");
/// assert!(response.is_valid());
/// assert_eq!(response.decode(), ReplyValue::array([ReplyValue::simple_string("a")]));
/// assert_eq!(response.items_count(), 1);
/// ```
///
/// [`is_valid`]: Response::is_valid
/// [`decode`]: Response::decode
#[derive(Debug, Clone, Default)]
pub struct Response {
	source: BytesMut,
	items_count: usize,
	options: DecodeOptions,
}

impl Response {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_options(options: DecodeOptions) -> Self {
		Self {
			options,
			..Self::default()
		}
	}

	/// Replace the raw buffer.
	pub fn set_source(&mut self, src: impl AsRef<[u8]>) {
		self.source.clear();
		self.source.extend_from_slice(src.as_ref());
	}

	/// Append freshly received bytes.
	pub fn append(&mut self, src: impl AsRef<[u8]>) {
		self.source.extend_from_slice(src.as_ref());
	}

	/// Drop the buffer and reset the item counter.
	pub fn clear(&mut self) {
		self.source.clear();
		self.items_count = 0;
	}

	pub fn source(&self) -> &[u8] {
		&self.source
	}

	pub fn options(&self) -> &DecodeOptions {
		&self.options
	}

	/// Kind of the buffered reply, `None` while the buffer is empty.
	pub fn reply_kind(&self) -> Option<ReplyKind> {
		ReplyKind::of(&self.source)
	}

	/// Whether the buffer looks like a complete reply.
	pub fn is_valid(&self) -> bool {
		validator::is_complete(&self.source)
	}

	/// Decode the buffer as a single reply.
	///
	/// Any bytes past the first reply are ignored. A top-level array updates
	/// [`items_count`](Response::items_count).
	pub fn decode(&mut self) -> ReplyValue {
		if self.source.is_empty() {
			return ReplyValue::Null;
		}

		match decoder::decode_with(&self.source, 0, &self.options) {
			Ok((value, consumed)) => {
				if consumed < self.source.len() {
					debug!(
						"Ignoring {} trailing bytes after reply",
						self.source.len() - consumed
					);
				}
				if let ReplyValue::Array(items) = &value {
					self.items_count = items.len();
				}
				value
			}
			Err(e) => {
				warn!("Failed to decode reply: {}", e);
				ReplyValue::Error(Bytes::from(e.to_string()))
			}
		}
	}

	/// Whether the reply is a generic `ERR` server error.
	///
	/// Typed errors such as `WRONGTYPE` or `NOAUTH` are not flagged.
	pub fn is_error_message(&self) -> bool {
		self.reply_kind() == Some(ReplyKind::Error) && self.source.starts_with(GENERIC_ERROR_PREFIX)
	}

	/// Element count of the last decoded top-level array.
	///
	/// Only [`decode`](Response::decode) of an array reply updates this;
	/// other replies leave the previous count in place.
	pub fn items_count(&self) -> usize {
		self.items_count
	}
}

impl From<&[u8]> for Response {
	fn from(src: &[u8]) -> Self {
		let mut response = Self::new();
		response.set_source(src);
		response
	}
}

impl From<Vec<u8>> for Response {
	fn from(src: Vec<u8>) -> Self {
		Self {
			source: BytesMut::from(&src[..]),
			..Self::default()
		}
	}
}

impl From<Bytes> for Response {
	fn from(src: Bytes) -> Self {
		Self {
			source: BytesMut::from(&src[..]),
			..Self::default()
		}
	}
}

/// Shows at most `preview_len` raw bytes; never decodes.
impl fmt::Display for Response {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let end = self.source.len().min(self.options.preview_len);
		f.write_str(&String::from_utf8_lossy(&self.source[..end]))
	}
}
