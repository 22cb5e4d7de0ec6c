//! String descriptor table served during `GET_DESCRIPTOR(STRING)`.
//!
//! Only the slots this crate overrides are answered here: the LANGID
//! table and the product name. Every other index returns `None` so the
//! surrounding USB stack falls back to its own manufacturer and serial
//! number strings.

use crate::config;
use crate::descriptor::STRING_DESCRIPTOR_TYPE;
use crate::product::PRODUCT_NAME_BYTES;

/// String descriptor zero: one supported LANGID.
pub static LANGUAGES: [u8; 4] = {
    let [lo, hi] = config::USB_LANGUAGE_ID.to_le_bytes();
    [4, STRING_DESCRIPTOR_TYPE, lo, hi]
};

/// Look up the raw descriptor for `index`.
///
/// `lang_id` is not used to refuse a request; hosts commonly ask with 0
/// or another id and still expect the string.
pub fn get_descriptor(index: u8, lang_id: u16) -> Option<&'static [u8]> {
    trace!("string descriptor request: index={} lang={=u16:#x}", index, lang_id);

    match index {
        config::STRING_INDEX_LANGUAGES => Some(&LANGUAGES),
        config::STRING_INDEX_PRODUCT => {
            if lang_id != config::USB_LANGUAGE_ID {
                warn!("product string requested for LANGID {=u16:#x}", lang_id);
            }
            Some(&PRODUCT_NAME_BYTES)
        }
        _ => {
            debug!("string index {} not overridden", index);
            None
        }
    }
}
