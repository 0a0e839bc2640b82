/* tests/properties.rs */

#![allow(missing_docs)]

use der_length::{LengthMode, MAX_LENGTH_OCTETS, decode_length, read_length, skip_length};
use proptest::prelude::*;

/// Minimal DER encoding of `len`.
fn encode_length(len: u64) -> Vec<u8> {
	if len < 0x80 {
		return vec![len as u8];
	}
	let bytes = len.to_be_bytes();
	let skip = bytes.iter().take_while(|&&b| b == 0).count();
	let mut out = Vec::with_capacity(1 + bytes.len() - skip);
	out.push(0x80 | (bytes.len() - skip) as u8);
	out.extend_from_slice(&bytes[skip..]);
	out
}

proptest! {
	#[test]
	fn round_trip(len in any::<u64>(), tail in proptest::collection::vec(any::<u8>(), 0..8)) {
		let mut buf = encode_length(len);
		let encoded = buf.len();
		buf.extend_from_slice(&tail);

		let (val, consumed) = read_length(&buf).unwrap();
		prop_assert_eq!(val, len);
		prop_assert_eq!(consumed, encoded);
	}

	#[test]
	fn deterministic(buf in proptest::collection::vec(any::<u8>(), 0..16)) {
		prop_assert_eq!(read_length(&buf), read_length(&buf));
		prop_assert_eq!(
			decode_length(&buf, LengthMode::Skip),
			decode_length(&buf, LengthMode::Skip)
		);
	}

	#[test]
	fn skip_advances_like_decode(buf in proptest::collection::vec(any::<u8>(), 0..16)) {
		let decoded = decode_length(&buf, LengthMode::Decode).map(|l| l.encoded_len());
		prop_assert_eq!(skip_length(&buf), decoded);
	}

	#[test]
	fn consumed_within_input(buf in proptest::collection::vec(any::<u8>(), 0..16)) {
		if let Ok((_, consumed)) = read_length(&buf) {
			prop_assert!(consumed <= buf.len());
			prop_assert!(consumed <= 1 + MAX_LENGTH_OCTETS);
		}
	}
}
