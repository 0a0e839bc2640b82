/* demos/walk_tlv.rs */

#![allow(missing_docs)]

// Walks a small DER structure, printing each element's tag, header size and
// value length. Constructed elements are descended into; primitive values
// are stepped over.
//
// Set `RUST_LOG=der_length=trace` to see why a malformed field is rejected.

use tracing_subscriber::EnvFilter;

const CONSTRUCTED: u8 = 0x20;

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.init();

	let der = build_sample();
	println!("walking {} bytes of DER", der.len());
	if let Err(e) = walk(&der, 0) {
		eprintln!("walk error: {e}");
	}

	// An indefinite-length SEQUENCE is BER, not DER.
	let ber = [0x30, 0x80, 0x02, 0x01, 0x05, 0x00, 0x00];
	match der_length::skip_length(&ber[1..]) {
		Ok(n) => println!("unexpected: {n} byte length field"),
		Err(e) => println!("indefinite form rejected: {e}"),
	}
}

fn walk(mut buf: &[u8], depth: usize) -> Result<(), der_length::Error> {
	while let Some((&tag, rest)) = buf.split_first() {
		let (value_len, header_len) = der_length::read_length(rest)?;
		let Some(value) = usize::try_from(value_len)
			.ok()
			.and_then(|len| rest.get(header_len..header_len.checked_add(len)?))
		else {
			eprintln!(
				"{:indent$}tag {tag:#04x}: value of {value_len} bytes exceeds buffer",
				"",
				indent = depth * 2
			);
			return Ok(());
		};

		println!(
			"{:indent$}tag {tag:#04x}: header {} bytes, value {} bytes",
			"",
			1 + header_len,
			value.len(),
			indent = depth * 2
		);
		if tag & CONSTRUCTED != 0 {
			walk(value, depth + 1)?;
		}
		buf = &rest[header_len + value.len()..];
	}
	Ok(())
}

fn build_sample() -> Vec<u8> {
	// SEQUENCE { INTEGER 5, OCTET STRING (300 bytes), SEQUENCE { NULL } }
	let mut inner = vec![0x02, 0x01, 0x05];
	inner.extend_from_slice(&[0x04, 0x82, 0x01, 0x2c]);
	inner.extend_from_slice(&[0xab; 300]);
	inner.extend_from_slice(&[0x30, 0x02, 0x05, 0x00]);

	let mut der = vec![0x30, 0x82];
	der.extend_from_slice(&(inner.len() as u16).to_be_bytes());
	der.extend_from_slice(&inner);
	der
}
