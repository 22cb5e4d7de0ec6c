//! Application-wide constants and compile-time configuration.
//!
//! The product name is what host-side tools match on to find the event
//! marker's serial port, so it must stay in sync with them.

// USB strings

/// USB product string reported in place of the Teensy default.
pub const USB_PRODUCT: &str = "USBEventMarker";

/// LANGID advertised in string descriptor zero (US English).
pub const USB_LANGUAGE_ID: u16 = 0x0409;

/// String index of the LANGID table.
pub const STRING_INDEX_LANGUAGES: u8 = 0;

/// String index the device descriptor's `iProduct` points at.
/// Teensyduino uses 1 for the manufacturer, 2 for the product and 3 for
/// the serial number.
pub const STRING_INDEX_PRODUCT: u8 = 2;
