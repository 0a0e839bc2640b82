/* src/length.rs */

use tracing::trace;

use crate::error::Error;

/// Unsigned integer type a decoded length is stored in.
pub type LengthValue = u64;

/// Maximum number of octets a long-form length field may declare.
///
/// This is the byte width of [`LengthValue`]. A field declaring more octets
/// is rejected with [`Error::Overflow`] instead of being truncated.
pub const MAX_LENGTH_OCTETS: usize = core::mem::size_of::<LengthValue>();

const LONG_FORM: u8 = 0x80;

/// Selects whether [`decode_length`] materializes the length value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthMode {
	/// Read the length octets and return the decoded value.
	Decode,
	/// Step over the length octets without accumulating them.
	Skip,
}

/// A decoded DER length field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerLength {
	value: Option<LengthValue>,
	encoded_len: usize,
}

impl DerLength {
	/// Decode the length field at the start of `data`.
	///
	/// # Errors
	///
	/// See [`decode_length`].
	pub fn parse(data: &[u8]) -> Result<Self, Error> {
		decode_length(data, LengthMode::Decode)
	}

	/// Measure the length field at the start of `data` without decoding it.
	///
	/// # Errors
	///
	/// See [`decode_length`].
	pub fn skip(data: &[u8]) -> Result<Self, Error> {
		decode_length(data, LengthMode::Skip)
	}

	/// The decoded length, or `None` when the field was skipped.
	#[inline]
	#[must_use]
	pub fn value(&self) -> Option<LengthValue> {
		self.value
	}

	/// Number of bytes the length field occupied in the input.
	#[inline]
	#[must_use]
	pub fn encoded_len(&self) -> usize {
		self.encoded_len
	}

	/// Whether the field used the long form (`0x80 | n` followed by `n`
	/// octets).
	#[inline]
	#[must_use]
	pub fn is_long_form(&self) -> bool {
		self.encoded_len > 1
	}
}

/// Decode the DER length field (X.690 §8.1.3) at the start of `data`.
///
/// The whole of `data` is treated as the bytes available to the field. Bytes
/// after the field are never read. In [`LengthMode::Skip`] the consumed byte
/// count is identical to [`LengthMode::Decode`], but the value is left out.
///
/// # Errors
///
/// - [`Error::BufferOverflow`] when `data` is empty or shorter than the
///   declared long-form field.
/// - [`Error::Asn1Format`] for the indefinite form `0x80`.
/// - [`Error::Overflow`] when the long form declares more than
///   [`MAX_LENGTH_OCTETS`] octets. This is enforced in both modes.
pub fn decode_length(data: &[u8], mode: LengthMode) -> Result<DerLength, Error> {
	let field = length_field(data)?;
	let value = match mode {
		LengthMode::Decode => Some(field.value()),
		LengthMode::Skip => None,
	};
	Ok(DerLength {
		value,
		encoded_len: field.encoded_len(),
	})
}

/// Decode a DER length field from the start of `data`.
///
/// Returns the decoded length and the number of bytes consumed.
///
/// # Errors
///
/// See [`decode_length`].
#[must_use = "returns the decoded length without modifying the buffer"]
pub fn read_length(data: &[u8]) -> Result<(LengthValue, usize), Error> {
	let field = length_field(data)?;
	Ok((field.value(), field.encoded_len()))
}

/// Return the number of bytes occupied by the DER length field at the start
/// of `data`, without decoding its value.
///
/// # Errors
///
/// See [`decode_length`].
#[must_use = "returns the field size without modifying the buffer"]
pub fn skip_length(data: &[u8]) -> Result<usize, Error> {
	length_field(data).map(|field| field.encoded_len())
}

enum LengthField<'a> {
	Short(u8),
	Long(&'a [u8]),
}

impl LengthField<'_> {
	fn encoded_len(&self) -> usize {
		match self {
			Self::Short(_) => 1,
			Self::Long(octets) => 1 + octets.len(),
		}
	}

	fn value(&self) -> LengthValue {
		match self {
			Self::Short(v) => LengthValue::from(*v),
			Self::Long(octets) => octets
				.iter()
				.fold(0, |acc, &b| (acc << 8) | LengthValue::from(b)),
		}
	}
}

fn length_field(data: &[u8]) -> Result<LengthField<'_>, Error> {
	let &first = data
		.first()
		.ok_or(Error::BufferOverflow { need: 1, have: 0 })?;

	if first & LONG_FORM == 0 {
		return Ok(LengthField::Short(first));
	}

	let octets = usize::from(first & !LONG_FORM);
	if octets == 0 {
		trace!("rejecting indefinite length form");
		return Err(Error::Asn1Format);
	}
	if octets > MAX_LENGTH_OCTETS {
		trace!(octets, max = MAX_LENGTH_OCTETS, "length field too wide");
		return Err(Error::Overflow {
			octets,
			max: MAX_LENGTH_OCTETS,
		});
	}

	let need = 1 + octets;
	let long = data.get(1..need).ok_or_else(|| {
		trace!(need, have = data.len(), "length field truncated");
		Error::BufferOverflow {
			need,
			have: data.len(),
		}
	})?;
	Ok(LengthField::Long(long))
}
