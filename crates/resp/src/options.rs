//! Tunables shared by the decoder, the printer and [`Response`].
//!
//! [`Response`]: crate::Response

/// Default maximum array nesting accepted by the decoder and printer.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Default maximum element count an array header may claim.
pub const DEFAULT_MAX_ELEMENTS: usize = 1 << 20;

/// Default number of raw bytes shown by `Response`'s `Display` impl.
pub const DEFAULT_PREVIEW_LEN: usize = 1500;

/// Limits applied while decoding and rendering replies.
///
/// # Example
///
/// ```
/// use resp::DecodeOptions;
///
/// let options = DecodeOptions::new().max_depth(8).preview_len(256);
/// assert_eq!(options.max_depth, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
	/// Deepest array nesting level that may be decoded or rendered.
	pub max_depth: usize,
	/// Largest element count an array header may claim.
	pub max_elements: usize,
	/// Number of raw bytes kept by the diagnostic preview.
	pub preview_len: usize,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self::new()
	}
}

impl DecodeOptions {
	pub const fn new() -> Self {
		Self {
			max_depth: DEFAULT_MAX_DEPTH,
			max_elements: DEFAULT_MAX_ELEMENTS,
			preview_len: DEFAULT_PREVIEW_LEN,
		}
	}

	pub const fn max_depth(mut self, depth: usize) -> Self {
		self.max_depth = depth;
		self
	}

	pub const fn max_elements(mut self, count: usize) -> Self {
		self.max_elements = count;
		self
	}

	pub const fn preview_len(mut self, len: usize) -> Self {
		self.preview_len = len;
		self
	}
}
