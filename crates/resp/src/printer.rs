//! Render value trees as indented text.
//!
//! Level 0 output is meant to be copy-pasted like CLI output: strings are
//! printed bare and string lists one per line. Nested levels quote every
//! string so that mixed arrays stay unambiguous. Every rendered value is
//! prefixed with one tab per indent level.

use std::borrow::Cow;

use bytes::Bytes;

use crate::error::RenderError;
use crate::options::DecodeOptions;
use crate::types::ReplyValue;

const LINE_BREAK: &str = "\r\n";
const ITEM_SEPARATOR: &str = ", \r\n";

/// Render `value` at `indent_level` with the default depth limit.
///
/// ```
/// use resp::ReplyValue;
///
/// let value = ReplyValue::array([ReplyValue::simple_string("a"), ReplyValue::Integer(1)]);
/// assert_eq!(resp::render(&value, 0).unwrap(), "[\r\n\t\"a\", \r\n\t1\r\n]");
/// ```
pub fn render(value: &ReplyValue, indent_level: usize) -> Result<String, RenderError> {
	render_with(value, indent_level, &DecodeOptions::default())
}

/// Render `value` at `indent_level`, refusing arrays nested past
/// `options.max_depth`.
///
/// Depth counts array levels inside `value` only, so a large starting
/// indent does not eat into the limit.
pub fn render_with(
	value: &ReplyValue,
	indent_level: usize,
	options: &DecodeOptions,
) -> Result<String, RenderError> {
	render_value(value, indent_level, 0, options)
}

fn render_value(
	value: &ReplyValue,
	indent_level: usize,
	depth: usize,
	options: &DecodeOptions,
) -> Result<String, RenderError> {
	let indent = "\t".repeat(indent_level);
	let nested = indent_level > 0;

	let body = match value {
		ReplyValue::Null => "null".to_string(),
		ReplyValue::Boolean(b) => b.to_string(),
		ReplyValue::SimpleString(text) | ReplyValue::BulkString(text) | ReplyValue::Error(text) => {
			if nested {
				quoted(text)
			} else {
				lossy(text).into_owned()
			}
		}
		ReplyValue::StringList(items) => {
			if nested {
				let items: Vec<String> = items.iter().map(quoted).collect();
				format!("[{}]", items.join(", "))
			} else {
				let items: Vec<Cow<'_, str>> = items.iter().map(lossy).collect();
				items.join(LINE_BREAK)
			}
		}
		ReplyValue::Array(items) => {
			let level = depth + 1;
			if level > options.max_depth {
				return Err(RenderError::NestingTooDeep {
					depth: level,
					limit: options.max_depth,
				});
			}

			let children = items
				.iter()
				.map(|item| render_value(item, indent_level + 1, level, options))
				.collect::<Result<Vec<_>, _>>()?;
			format!(
				"[{LINE_BREAK}{}{LINE_BREAK}{indent}]",
				children.join(ITEM_SEPARATOR)
			)
		}
		ReplyValue::Integer(i) => i.to_string(),
	};

	Ok(indent + &body)
}

#[inline]
fn lossy(text: &Bytes) -> Cow<'_, str> {
	String::from_utf8_lossy(text)
}

#[inline]
fn quoted(text: &Bytes) -> String {
	format!("\"{}\"", lossy(text))
}
