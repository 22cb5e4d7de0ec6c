//! Product-name string descriptor for the USB Event Marker.
//!
//! The event marker is a Teensy that pulses output pins for event codes
//! written to its serial port. This crate supplies the USB STRING
//! descriptor that renames it to `USBEventMarker`, plus the lookup a
//! device stack calls for it and the matching check host tools use.
//!
//! Everything here is `no_std`, allocation-free and immutable, so the same
//! code links into firmware and runs in host tests.
//!
//! A USB stack answers `GET_DESCRIPTOR(STRING)` by calling
//! [`strings::get_descriptor`] and falling back to its own strings on `None`.
//!
//! With `--features defmt`, lookups are logged through `defmt`.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod config;
pub mod descriptor;
pub mod error;
pub mod product;
pub mod strings;

pub use descriptor::StringDescriptor;
pub use error::{DescriptorError, FindError};
pub use product::{find_event_marker, PRODUCT_NAME, PRODUCT_NAME_BYTES};

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
