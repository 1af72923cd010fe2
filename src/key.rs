/// A 16-byte AES key belonging to a single physical device.
///
/// Keys are per-MAC secrets owned by the caller's keyring; the decoder
/// only ever borrows one for the duration of a single [`crate::parse`]
/// call. `Debug` is redacted so a `DeviceKey` can sit in a log-adjacent
/// struct without leaking into a trace line by accident.
#[derive(Clone, PartialEq, Eq)]
pub struct DeviceKey([u8; 16]);

impl DeviceKey {
    pub fn new(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Parses a 32-character hex string into a key.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        let array: [u8; 16] = bytes
            .try_into()
            .map_err(|_| hex::FromHexError::InvalidStringLength)?;
        Ok(Self(array))
    }

    pub(crate) fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

impl std::fmt::Debug for DeviceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DeviceKey(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_never_prints_key_bytes() {
        let key = DeviceKey::from_hex("aff4d0995b7d1e176c0c33ecb9e70dcd").unwrap();
        let printed = format!("{key:?}");
        assert!(!printed.contains("aff4"));
    }
}
