use std::path::PathBuf;

pub use clap::Parser;
use resp::DEFAULT_MAX_DEPTH;
use resp::DEFAULT_MAX_ELEMENTS;
use resp::DEFAULT_PREVIEW_LEN;
use resp::DecodeOptions;

/// Command-line arguments for respview
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
	/// File holding one raw reply; stdin is read when omitted
	pub input: Option<PathBuf>,

	/// Log level (trace, debug, info, warn, error)
	#[arg(short, long, default_value = "warn")]
	pub log_level: String,

	/// Deepest array nesting accepted while decoding and rendering
	#[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
	pub max_depth: usize,

	/// Largest element count an array header may claim
	#[arg(long, default_value_t = DEFAULT_MAX_ELEMENTS)]
	pub max_elements: usize,

	/// Bytes shown by --raw
	#[arg(long, default_value_t = DEFAULT_PREVIEW_LEN)]
	pub preview_len: usize,

	/// Print the raw reply preview instead of decoding it
	#[arg(long)]
	pub raw: bool,

	/// Fail when the reply is not terminated
	#[arg(long)]
	pub check: bool,
}

impl Cli {
	pub fn decode_options(&self) -> DecodeOptions {
		DecodeOptions::new()
			.max_depth(self.max_depth)
			.max_elements(self.max_elements)
			.preview_len(self.preview_len)
	}
}
