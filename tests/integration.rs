//! Integration tests for the public descriptor API.

use usb_event_marker::descriptor::{decode, validate};
use usb_event_marker::strings::get_descriptor;
use usb_event_marker::{config, string_descriptor, DescriptorError, PRODUCT_NAME_BYTES};

#[test]
fn product_string_as_a_host_sees_it() {
    // What a GET_DESCRIPTOR(STRING, iProduct) handler hands back.
    let bytes = get_descriptor(config::STRING_INDEX_PRODUCT, config::USB_LANGUAGE_ID)
        .expect("product string is overridden");

    assert_eq!(bytes[0] as usize, bytes.len());
    assert_eq!(validate(bytes), Ok(14));
    assert_eq!(decode(bytes).unwrap().as_str(), "USBEventMarker");
}

#[test]
fn custom_descriptor_roundtrip() {
    let desc = string_descriptor!("Marker v2");
    let mut out = [0u8; 32];
    let written = desc.serialize(&mut out);
    assert_eq!(written, 20);
    assert_eq!(decode(&out[..written]).unwrap().as_str(), "Marker v2");
}

#[test]
fn corrupted_length_is_rejected() {
    let mut bytes = PRODUCT_NAME_BYTES;
    bytes[0] = 31;
    assert_eq!(validate(&bytes), Err(DescriptorError::InvalidLength(31)));

    bytes[0] = 32;
    assert_eq!(validate(&bytes), Err(DescriptorError::Truncated));
}
