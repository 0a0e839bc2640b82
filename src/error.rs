/* src/error.rs */

/// Errors that can occur while decoding a DER length field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	/// The input ends before the length field does.
	#[error("buffer overflow: need at least {need} bytes, have {have}")]
	BufferOverflow {
		/// Number of bytes the length field occupies.
		need: usize,
		/// Actual number of bytes available.
		have: usize,
	},

	/// The long form declares zero length octets, which is the BER
	/// indefinite-length form and is not permitted in DER.
	#[error("indefinite length form is not permitted in DER")]
	Asn1Format,

	/// The long form declares more length octets than the decoded length
	/// type can hold.
	#[error("length field declares {octets} octets, at most {max} are supported")]
	Overflow {
		/// Number of length octets declared by the first byte.
		octets: usize,
		/// Maximum number of length octets that fit the decoded value.
		max: usize,
	},
}
