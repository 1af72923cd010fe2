use crate::error::{Error, Result};

/// The manufacturer-data tag byte identifying an Instant Readout
/// advertisement.
pub const INSTANT_READOUT_TAG: u8 = 0x10;

/// The Bluetooth SIG manufacturer identifier Victron advertises under.
pub const VICTRON_MANUFACTURER_ID: u16 = 0x02E1;

/// The parsed fixed header of an Instant Readout frame, plus the
/// still-encrypted body (including its leading key-check byte).
#[derive(Debug, Clone)]
pub struct Frame<'a> {
    pub prefix: u16,
    pub model_id: u16,
    pub readout_type: u8,
    pub iv: u16,
    pub encrypted_body: &'a [u8],
}

impl<'a> Frame<'a> {
    /// Parses raw manufacturer-data bytes into a [`Frame`]. Requires at
    /// least 8 bytes total (7-byte header plus a key-check byte) and the
    /// Instant Readout tag as the first byte.
    pub fn parse(raw: &'a [u8]) -> Result<Self> {
        if raw.len() < 8 {
            return Err(Error::MalformedFrame {
                reason: "frame shorter than 8 bytes",
                len: raw.len(),
            });
        }
        if raw[0] != INSTANT_READOUT_TAG {
            return Err(Error::MalformedFrame {
                reason: "missing instant-readout tag byte",
                len: raw.len(),
            });
        }

        let model_id = u16::from_le_bytes([raw[2], raw[3]]);
        let readout_type = raw[4];
        let iv = u16::from_le_bytes([raw[5], raw[6]]);

        Ok(Self {
            prefix: u16::from_le_bytes([raw[0], raw[1]]),
            model_id,
            readout_type,
            iv,
            encrypted_body: &raw[7..],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_frames() {
        let raw = hex::decode("10020000").unwrap();
        assert!(Frame::parse(&raw).is_err());
    }

    #[test]
    fn rejects_missing_tag() {
        let mut raw = hex::decode("100289a302b040af925d09a4d89aa0128bdef48c6298a9").unwrap();
        raw[0] = 0x11;
        assert!(matches!(
            Frame::parse(&raw),
            Err(Error::MalformedFrame { .. })
        ));
    }

    #[test]
    fn parses_header_fields() {
        let raw = hex::decode("100289a302b040af925d09a4d89aa0128bdef48c6298a9").unwrap();
        let frame = Frame::parse(&raw).unwrap();
        assert_eq!(frame.model_id, 0xA389);
        assert_eq!(frame.readout_type, 0x02);
        assert_eq!(frame.encrypted_body.len(), raw.len() - 7);
    }
}
