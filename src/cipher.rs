use aes::Aes128;
use ctr::cipher::generic_array::GenericArray;
use ctr::cipher::{KeyIvInit, StreamCipher};

use crate::envelope::Frame;
use crate::error::{Error, Result};
use crate::key::DeviceKey;

/// AES-128 in CTR mode with a little-endian counter, matching Victron's
/// published Extra Manufacturer Data spec. Earlier reverse-engineered
/// implementations used OFB with the IV taken as-is; that decrypts the
/// first block identically but diverges afterward, so CTR is the one
/// that must be used here.
type VictronCtr = ctr::Ctr128LE<Aes128>;

/// Decrypts a frame's body with `device_key`, returning the decrypted,
/// zero-padded readout buffer.
///
/// The first byte of the encrypted body is a key-check byte equal to
/// `device_key[0]`; if it doesn't match, decryption is not attempted and
/// [`Error::KeyMismatch`] is returned. The remaining ciphertext is
/// right-padded with zero bytes to a multiple of 16 before decrypting,
/// since AES-CTR keystream is produced in whole 16-byte blocks.
pub fn decrypt(frame: &Frame<'_>, device_key: &DeviceKey) -> Result<Vec<u8>> {
    let key_bytes = device_key.as_bytes();

    let (key_check, ciphertext) = frame
        .encrypted_body
        .split_first()
        .ok_or(Error::MalformedFrame {
            reason: "encrypted body missing key-check byte",
            len: frame.encrypted_body.len(),
        })?;

    if *key_check != key_bytes[0] {
        return Err(Error::KeyMismatch);
    }

    let mut buf = ciphertext.to_vec();
    let padded_len = buf.len().div_ceil(16) * 16;
    buf.resize(padded_len.max(16), 0);

    let mut iv_block = [0u8; 16];
    iv_block[0..2].copy_from_slice(&frame.iv.to_le_bytes());

    let key = GenericArray::from_slice(key_bytes);
    let iv = GenericArray::from_slice(&iv_block);
    let mut cipher = VictronCtr::new(key, iv);
    cipher.apply_keystream(&mut buf);

    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::Frame;

    #[test]
    fn decrypts_battery_monitor_scenario() {
        let raw = hex::decode("100289a302b040af925d09a4d89aa0128bdef48c6298a9").unwrap();
        let key = DeviceKey::from_hex("aff4d0995b7d1e176c0c33ecb9e70dcd").unwrap();
        let frame = Frame::parse(&raw).unwrap();
        let decrypted = decrypt(&frame, &key).unwrap();
        assert!(decrypted.len() >= 16);
    }

    #[test]
    fn key_mismatch_is_detected_before_decrypting() {
        let raw = hex::decode("100289a302bb01af129087600b9b97bc2c32867c8238da").unwrap();
        let key = DeviceKey::from_hex("ffffffffffffffffffffffffffffffff").unwrap();
        let frame = Frame::parse(&raw).unwrap();
        assert!(matches!(decrypt(&frame, &key), Err(Error::KeyMismatch)));
    }
}
