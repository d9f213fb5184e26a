use std::io::Read;
use std::path::Path;

use log::debug;
use log::info;
use resp::RenderError;
use resp::Response;
use thiserror::Error;

use crate::config::Cli;

#[derive(Error, Debug)]
pub enum InspectError {
	#[error("Failed to read input: {0}")]
	Io(#[from] std::io::Error),

	#[error("Incomplete reply: {0} bytes without a trailing terminator")]
	Incomplete(usize),

	#[error("Failed to render reply: {0}")]
	Render(#[from] RenderError),
}

/// What respview prints for one reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
	pub text: String,
	pub complete: bool,
	pub generic_error: bool,
	pub items: usize,
}

/// Read the whole reply from `path`, or from stdin when `None`.
pub fn read_input(path: Option<&Path>) -> Result<Vec<u8>, InspectError> {
	let buf = match path {
		Some(path) => {
			debug!("Reading reply from {}", path.display());
			std::fs::read(path)?
		}
		None => {
			debug!("Reading reply from stdin");
			let mut buf = Vec::new();
			std::io::stdin().lock().read_to_end(&mut buf)?;
			buf
		}
	};
	Ok(buf)
}

/// Decode and render `buf` as configured by `cli`.
pub fn inspect(buf: &[u8], cli: &Cli) -> Result<Report, InspectError> {
	let options = cli.decode_options();
	let mut response = Response::with_options(options);
	response.set_source(buf);

	let complete = response.is_valid();
	info!(
		"Read {} bytes, kind {:?}, complete: {}",
		buf.len(),
		response.reply_kind(),
		complete
	);
	if cli.check && !complete {
		return Err(InspectError::Incomplete(buf.len()));
	}

	let text = if cli.raw {
		response.to_string()
	} else {
		resp::render_with(&response.decode(), 0, &options)?
	};

	Ok(Report {
		text,
		complete,
		generic_error: response.is_error_message(),
		items: response.items_count(),
	})
}
