use crate::{constants::PAGE_PAYLOAD_LEN, error::ParserError, sylphide::check_page_len};

/// G page: a slice of the receiver's UBX byte stream, with no alignment to
/// UBX frame boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GpsPage {
    pub raw: [u8; PAGE_PAYLOAD_LEN],
}

impl Default for GpsPage {
    fn default() -> Self {
        Self {
            raw: [0; PAGE_PAYLOAD_LEN],
        }
    }
}

impl GpsPage {
    pub const NAME: &'static str = "G page";

    pub fn decode(payload: &[u8]) -> Result<Self, ParserError> {
        check_page_len(Self::NAME, payload)?;
        let mut raw = [0; PAGE_PAYLOAD_LEN];
        raw.copy_from_slice(&payload[..PAGE_PAYLOAD_LEN]);
        Ok(Self { raw })
    }
}
