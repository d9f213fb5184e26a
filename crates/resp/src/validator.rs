//! Cheap completeness check used while reply bytes trickle in.

use log::trace;

use crate::utils::*;

/// Reply category named by the first byte of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
	/// `+`
	Status,
	/// `-`
	Error,
	/// `:`
	Integer,
	/// `$`
	Bulk,
	/// `*`
	MultiBulk,
	/// any other byte
	Unknown,
}

impl ReplyKind {
	pub fn from_marker(marker: u8) -> Self {
		match marker {
			SIMPLE_STRING => ReplyKind::Status,
			ERROR => ReplyKind::Error,
			INTEGER => ReplyKind::Integer,
			BULK_STRING => ReplyKind::Bulk,
			ARRAY => ReplyKind::MultiBulk,
			_ => ReplyKind::Unknown,
		}
	}

	/// Kind of the reply held in `buf`, `None` for an empty buffer.
	pub fn of(buf: &[u8]) -> Option<Self> {
		buf.first().copied().map(Self::from_marker)
	}
}

/// Whether `buf` looks like a complete reply.
///
/// Only the tail is inspected: a buffer is complete when it ends with the
/// line terminator. Bulk and array lengths are not cross-checked, so a
/// payload that happens to end in `\r\n` mid-frame reads as complete.
pub fn is_complete(buf: &[u8]) -> bool {
	let Some(kind) = ReplyKind::of(buf) else {
		return false;
	};

	let complete = match kind {
		ReplyKind::Status
		| ReplyKind::Error
		| ReplyKind::Integer
		| ReplyKind::Bulk
		| ReplyKind::MultiBulk
		| ReplyKind::Unknown => ends_with_terminator(buf),
	};
	trace!("{:?} reply of {} bytes complete: {}", kind, buf.len(), complete);
	complete
}

#[inline]
fn ends_with_terminator(buf: &[u8]) -> bool {
	buf.ends_with(CRLF)
}
