//! Error types for RESP decoding and rendering.
//!
//! Malformed protocol content never shows up here: bad integers and
//! truncated payloads are absorbed into [`ReplyValue::Null`] or empty
//! strings. These errors only cover hard limits on nesting and array size.
//!
//! [`ReplyValue::Null`]: crate::ReplyValue::Null

use thiserror::Error;

/// Main error type for RESP operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RespError {
	/// Error during decoding
	#[error("Decode error: {0}")]
	Decode(#[from] DecodeError),

	/// Error during rendering
	#[error("Render error: {0}")]
	Render(#[from] RenderError),
}

/// Errors that can occur while decoding a reply.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
	/// Array nesting reached the configured limit
	#[error("Frame too deeply nested: depth {depth} exceeds limit {limit}")]
	NestingTooDeep { depth: usize, limit: usize },

	/// Array header claims more elements than allowed
	#[error("Array too large: {len} elements exceeds limit {limit}")]
	ArrayTooLarge { len: usize, limit: usize },
}

/// Errors that can occur while rendering a value tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
	/// Value nesting reached the configured limit
	#[error("Value too deeply nested: depth {depth} exceeds limit {limit}")]
	NestingTooDeep { depth: usize, limit: usize },
}
