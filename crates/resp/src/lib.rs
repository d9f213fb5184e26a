//! # RESP - Redis reply decoding for display
//!
//! A lenient RESP2 reply decoder, frame completeness check and
//! pretty-printer for client tools that show server replies to people.
//!
//! ## Features
//!
//! - **Best-effort decoding**: malformed integers and truncated bulk strings
//!   degrade to `Null` or empty strings instead of failing
//! - **Compositional**: every decode step reports the bytes it consumed
//! - **Bounded recursion**: nesting past a configurable depth is a typed error
//! - **Bounded arrays**: headers claiming too many elements are a typed error
//! - **CLI-like rendering**: flat top level, quoted and indented nested levels
//!
//! ## Example
//!
//! ```rust
//! use resp::{ReplyValue, Response};
//!
//! let mut response = Response::new();
//! response.append(b"*2\r\n$3\r\nfoo\r\n:42\r\n");
//! assert!(response.is_valid());
//!
//! let value = response.decode();
//! assert_eq!(
//!     value,
//!     ReplyValue::array([ReplyValue::bulk_string("foo"), ReplyValue::Integer(42)])
//! );
//! assert_eq!(resp::render(&value, 0).unwrap(), "[\r\n\t\"foo\", \r\n\t42\r\n]");
//! ```

mod decoder;
mod error;
mod options;
mod printer;
mod response;
mod types;
mod utils;
mod validator;

pub use decoder::decode;
pub use decoder::decode_with;
pub use error::DecodeError;
pub use error::RenderError;
pub use error::RespError;
pub use options::DEFAULT_MAX_DEPTH;
pub use options::DEFAULT_MAX_ELEMENTS;
pub use options::DEFAULT_PREVIEW_LEN;
pub use options::DecodeOptions;
pub use printer::render;
pub use printer::render_with;
pub use response::Response;
pub use types::ReplyValue;
pub use validator::ReplyKind;
pub use validator::is_complete;
