//! Product-name override for the USB Event Marker.
//!
//! The Teensy core reports a generic product string. Replacing it with
//! [`USB_PRODUCT`](crate::config::USB_PRODUCT) lets host tools pick the
//! event marker's serial port out from every other USB device, instead of
//! writing event codes to something like a keyboard.

use crate::config;
use crate::descriptor::{self, StringDescriptor, HEADER_LEN};
use crate::error::FindError;

/// Character count of the product name.
pub const PRODUCT_NAME_LEN: usize = config::USB_PRODUCT.len();

/// Wire size of the product name descriptor.
pub const PRODUCT_NAME_DESCRIPTOR_LEN: usize = HEADER_LEN + 2 * PRODUCT_NAME_LEN;

const DESCRIPTOR: StringDescriptor<PRODUCT_NAME_LEN> =
    StringDescriptor::from_ascii(config::USB_PRODUCT);

/// The product name string descriptor.
pub static PRODUCT_NAME: StringDescriptor<PRODUCT_NAME_LEN> = DESCRIPTOR;

/// [`PRODUCT_NAME`] in wire form, for stacks that send raw descriptor bytes.
pub static PRODUCT_NAME_BYTES: [u8; PRODUCT_NAME_DESCRIPTOR_LEN] = DESCRIPTOR.to_bytes();

/// Host side: does a port's reported USB product string name the event marker?
pub fn is_event_marker(product: Option<&str>) -> bool {
    product.is_some_and(|name| PRODUCT_NAME.matches(name))
}

/// Host side: same check against a raw string descriptor read off the bus.
pub fn is_event_marker_descriptor(bytes: &[u8]) -> bool {
    match descriptor::decode(bytes) {
        Ok(name) => is_event_marker(Some(name.as_str())),
        Err(e) => {
            debug!("product descriptor rejected: {}", e);
            false
        }
    }
}

/// Host side: pick the event marker out of the enumerated serial ports.
///
/// `ports` pairs each port handle (a path, an index, ...) with its
/// reported USB product string. With several markers attached the first
/// one wins.
pub fn find_event_marker<'a, P, I>(ports: I) -> Result<P, FindError>
where
    I: IntoIterator<Item = (P, Option<&'a str>)>,
{
    let mut matches = ports
        .into_iter()
        .filter(|(_, product)| is_event_marker(*product))
        .map(|(port, _)| port);

    let first = matches.next().ok_or(FindError::NotFound)?;
    if matches.next().is_some() {
        warn!("multiple USB event markers found, picking the first");
    }
    Ok(first)
}
