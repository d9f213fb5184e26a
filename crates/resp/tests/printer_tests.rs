use resp::ReplyValue;
use resp::Response;

fn render_reply(buf: &[u8]) -> String {
	let mut response = Response::from(buf);
	resp::render(&response.decode(), 0).unwrap()
}

#[test]
fn test_render_top_level_leaves() {
	assert_eq!(render_reply(b"+OK\r\n"), "OK");
	assert_eq!(render_reply(b"$5\r\nhello\r\n"), "hello");
	assert_eq!(render_reply(b":42\r\n"), "42");
	assert_eq!(render_reply(b"$-1\r\n"), "null");
	assert_eq!(render_reply(b"-ERR boom\r\n"), "ERR boom");
}

#[test]
fn test_render_flat_array() {
	let value = ReplyValue::array([ReplyValue::simple_string("a"), ReplyValue::simple_string("b")]);
	assert_eq!(resp::render(&value, 0).unwrap(), "[\r\n\t\"a\", \r\n\t\"b\"\r\n]");
}

#[test]
fn test_render_decoded_nested_array() {
	assert_eq!(
		render_reply(b"*2\r\n*2\r\n:1\r\n$-1\r\n+end\r\n"),
		"[\r\n\t[\r\n\t\t1, \r\n\t\tnull\r\n\t], \r\n\t\"end\"\r\n]"
	);
}

#[test]
fn test_render_nested_string_list() {
	let value = ReplyValue::array([
		ReplyValue::string_list(["k1", "k2"]),
		ReplyValue::Boolean(true),
	]);
	assert_eq!(
		resp::render(&value, 0).unwrap(),
		"[\r\n\t[\"k1\", \"k2\"], \r\n\ttrue\r\n]"
	);
}

#[test]
fn test_render_top_level_string_list() {
	let value = ReplyValue::string_list(["line one", "line two", "line three"]);
	assert_eq!(
		resp::render(&value, 0).unwrap(),
		"line one\r\nline two\r\nline three"
	);
}

#[test]
fn test_render_lossy_utf8() {
	let value = ReplyValue::bulk_string(&b"caf\xc3\xa9 \xff"[..]);
	assert_eq!(resp::render(&value, 0).unwrap(), "caf\u{e9} \u{fffd}");
}

#[test]
fn test_render_is_deterministic() {
	let buf = b"*3\r\n+a\r\n:2\r\n*1\r\n$1\r\nc\r\n";
	assert_eq!(render_reply(buf), render_reply(buf));
}
