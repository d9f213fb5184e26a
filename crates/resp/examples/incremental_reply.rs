use resp::Response;

fn main() {
	println!("--- RESP Incremental Reply Example ---");

	// Simulate a reply to `HGETALL user:1` arriving in fragments:
	// *4\r\n$4\r\nname\r\n$5\r\nalice\r\n$3\r\nage\r\n:30\r\n
	let data_chunks = vec![
		b"*4\r\n$4\r\nna".as_slice(),
		b"me\r\n$5\r\nalice\r".as_slice(),
		b"\n$3\r\nage\r\n".as_slice(),
		b":30\r\n".as_slice(),
	];

	let mut response = Response::new();

	for (i, chunk) in data_chunks.iter().enumerate() {
		println!(
			"\n[Stream] Received Chunk {}: {:?}",
			i,
			String::from_utf8_lossy(chunk)
		);
		response.append(chunk);

		// The validator only looks at the tail, so chunk 2 already reads
		// as complete even though one element is still missing.
		if response.is_valid() {
			println!("[Reply] Looks complete, decoding...");
			let value = response.decode();
			match resp::render(&value, 0) {
				Ok(text) => println!("[Reply] {} item(s):\n{}", response.items_count(), text),
				Err(e) => eprintln!("[Reply] Render error: {}", e),
			}
		} else {
			println!("[Reply] Incomplete, waiting for more data...");
		}
	}
}
