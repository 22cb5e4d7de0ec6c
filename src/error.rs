//! Error types for descriptor decoding and host-side port lookup.
//!
//! Building a descriptor cannot fail at runtime; a bad product name is a
//! const-evaluation error. These variants only arise when inspecting raw
//! descriptor bytes received from (or destined for) the wire.

/// Reasons a raw string descriptor is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DescriptorError {
    /// Fewer bytes than the header, or than `bLength` claims.
    Truncated,

    /// `bLength` is below the 2-byte header or leaves half a code unit.
    InvalidLength(u8),

    /// `bDescriptorType` is not STRING (3).
    WrongDescriptorType(u8),

    /// A code unit outside the ASCII range.
    NonAscii(u16),
}

/// Host-side port search failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FindError {
    /// No enumerated port reports the event marker's product string.
    NotFound,
}
