//! USB STRING descriptors built at compile time.
//!
//! Wire layout (USB 2.0 §9.6.7):
//!
//! | Offset | Field             | Value                          |
//! |--------|-------------------|--------------------------------|
//! | 0      | `bLength`         | `2 + 2 * N`                    |
//! | 1      | `bDescriptorType` | `3` (STRING)                   |
//! | 2..    | `wString`         | N little-endian 16-bit units   |
//!
//! `bLength` is always derived from the character count, never stored
//! separately, so a descriptor cannot disagree with its own contents.


use crate::error::DescriptorError;
use heapless::String;

/// `bDescriptorType` for STRING descriptors.
pub const STRING_DESCRIPTOR_TYPE: u8 = 3;

/// `bLength` + `bDescriptorType`.
pub const HEADER_LEN: usize = 2;

/// Most code units that fit under the 255-byte `bLength` ceiling.
pub const MAX_STRING_UNITS: usize = 126;

/// Total byte length of a string descriptor holding `units` code units.
pub const fn descriptor_length(units: usize) -> u8 {
    assert!(
        units <= MAX_STRING_UNITS,
        "string descriptor exceeds 126 code units"
    );
    (HEADER_LEN + 2 * units) as u8
}

/// An immutable STRING descriptor of `N` ASCII characters.
///
/// Fields are private: the only constructor derives `length` from `N`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StringDescriptor<const N: usize> {
    length: u8,
    descriptor_type: u8,
    characters: [u16; N],
}

impl<const N: usize> StringDescriptor<N> {
    /// Build a descriptor from ASCII text, widening each byte to 16 bits.
    ///
    /// Meant for `const`/`static` initialisers: a length mismatch, an
    /// over-long string or a non-ASCII byte stops the build.
    pub const fn from_ascii(text: &str) -> Self {
        let bytes = text.as_bytes();
        assert!(
            bytes.len() == N,
            "text length does not match descriptor size"
        );

        let mut characters = [0u16; N];
        let mut i = 0;
        while i < N {
            assert!(bytes[i].is_ascii(), "string descriptor text must be ASCII");
            characters[i] = bytes[i] as u16;
            i += 1;
        }

        Self {
            length: descriptor_length(N),
            descriptor_type: STRING_DESCRIPTOR_TYPE,
            characters,
        }
    }

    /// `bLength`: total size in bytes, header included.
    pub const fn length(&self) -> u8 {
        self.length
    }

    /// `bDescriptorType`, always [`STRING_DESCRIPTOR_TYPE`].
    pub const fn descriptor_type(&self) -> u8 {
        self.descriptor_type
    }

    /// `wString` code units, in order.
    pub const fn characters(&self) -> &[u16; N] {
        &self.characters
    }

    /// Number of characters.
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.characters.iter().map(|&unit| unit as u8 as char)
    }

    /// True when the descriptor encodes exactly `text`.
    pub fn matches(&self, text: &str) -> bool {
        text.len() == N
            && text
                .bytes()
                .zip(self.characters.iter())
                .all(|(b, &unit)| b as u16 == unit)
    }

    /// Write the wire form into `buf`.
    ///
    /// Returns the number of bytes written, or 0 if `buf` is too small.
    pub fn serialize(&self, buf: &mut [u8]) -> usize {
        let len = self.length as usize;
        if buf.len() < len {
            return 0;
        }

        buf[0] = self.length;
        buf[1] = self.descriptor_type;
        for (dst, unit) in buf[HEADER_LEN..len]
            .chunks_exact_mut(2)
            .zip(self.characters.iter())
        {
            dst.copy_from_slice(&unit.to_le_bytes());
        }
        len
    }

    /// The wire form as a fixed array, usable in `static` initialisers.
    ///
    /// `B` must equal `2 + 2 * N`.
    pub const fn to_bytes<const B: usize>(&self) -> [u8; B] {
        assert!(
            B == HEADER_LEN + 2 * N,
            "output size does not match descriptor length"
        );

        let mut out = [0u8; B];
        out[0] = self.length;
        out[1] = self.descriptor_type;
        let mut i = 0;
        while i < N {
            let [lo, hi] = self.characters[i].to_le_bytes();
            out[HEADER_LEN + 2 * i] = lo;
            out[HEADER_LEN + 2 * i + 1] = hi;
            i += 1;
        }
        out
    }
}

/// Build a [`StringDescriptor`] sized from the text itself.
///
/// ```
/// use usb_event_marker::string_descriptor;
///
/// let desc = string_descriptor!("Event");
/// assert_eq!(desc.length(), 12);
/// ```
#[macro_export]
macro_rules! string_descriptor {
    ($text:expr) => {
        $crate::descriptor::StringDescriptor::<{ $text.len() }>::from_ascii($text)
    };
}

fn code_units(payload: &[u8]) -> impl Iterator<Item = u16> + '_ {
    payload
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
}

/// Check raw descriptor bytes and return the character count.
///
/// Bytes past `bLength` are ignored, as a host would.
pub fn validate(bytes: &[u8]) -> Result<usize, DescriptorError> {
    if bytes.len() < HEADER_LEN {
        return Err(DescriptorError::Truncated);
    }

    let length = bytes[0];
    let descriptor_type = bytes[1];

    if (length as usize) < HEADER_LEN || length % 2 != 0 {
        return Err(DescriptorError::InvalidLength(length));
    }
    if bytes.len() < length as usize {
        return Err(DescriptorError::Truncated);
    }
    if descriptor_type != STRING_DESCRIPTOR_TYPE {
        return Err(DescriptorError::WrongDescriptorType(descriptor_type));
    }

    if let Some(unit) = code_units(&bytes[HEADER_LEN..length as usize]).find(|&u| u > 0x7F) {
        return Err(DescriptorError::NonAscii(unit));
    }

    Ok((length as usize - HEADER_LEN) / 2)
}

/// Decode raw descriptor bytes back into the text they carry.
pub fn decode(bytes: &[u8]) -> Result<String<MAX_STRING_UNITS>, DescriptorError> {
    let count = validate(bytes)?;

    let mut text = String::new();
    for unit in code_units(&bytes[HEADER_LEN..HEADER_LEN + 2 * count]) {
        // Even bLength <= 254 bounds count to MAX_STRING_UNITS.
        if text.push(unit as u8 as char).is_err() {
            break;
        }
    }
    Ok(text)
}
