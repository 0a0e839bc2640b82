/* src/lib.rs */

//! Decoder for the ASN.1 DER length field.
//!
//! Every DER element is a Tag-Length-Value triple. This crate decodes the
//! Length part: given the bytes immediately following a tag, it reports how
//! many bytes the length field itself occupies and how many bytes of value
//! follow it. Tag and value decoding are left to the caller.
//!
//! Both X.690 forms are supported:
//!
//! - **short form**, a single byte `0..=127` holding the length;
//! - **long form**, `0x80 | n` followed by `n` big-endian length octets.
//!
//! The BER indefinite form (`0x80`) is rejected, as are long forms wider than
//! [`MAX_LENGTH_OCTETS`].
//!
//! ```
//! use der_length::{LengthMode, decode_length, read_length};
//!
//! let (len, consumed) = read_length(&[0x82, 0x01, 0x00]).unwrap();
//! assert_eq!((len, consumed), (256, 3));
//!
//! let skipped = decode_length(&[0x82, 0x01, 0x00], LengthMode::Skip).unwrap();
//! assert_eq!(skipped.value(), None);
//! assert_eq!(skipped.encoded_len(), 3);
//! ```

mod error;
mod length;

pub use error::Error;
pub use length::{
	DerLength, LengthMode, LengthValue, MAX_LENGTH_OCTETS, decode_length, read_length, skip_length,
};
