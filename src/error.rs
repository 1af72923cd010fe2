use thiserror::Error;

/// Failure modes for decoding a Victron Instant Readout advertisement.
///
/// Every variant corresponds to one of the error kinds in the Instant
/// Readout decoding contract: malformed framing is never retried, an
/// unrecognized device is logged and dropped, a missing or mismatched key
/// is surfaced to the caller, and an exhausted bit reader means the
/// payload was shorter than the fields the parser expected.
#[derive(Debug, Error)]
pub enum Error {
    /// The raw manufacturer-data bytes are not a valid Instant Readout
    /// frame: too short, or missing the `0x10` tag byte.
    #[error("malformed frame: {reason} (len={len})")]
    MalformedFrame { reason: &'static str, len: usize },

    /// The frame's `model_id`/`readout_type` pair does not map to any
    /// known device kind.
    #[error("unknown device: model_id=0x{model_id:04X} readout_type=0x{readout_type:02X}")]
    UnknownDevice { model_id: u16, readout_type: u8 },

    /// No device key is configured for this advertisement.
    #[error("no device key configured")]
    KeyMissing,

    /// The configured key's first byte does not match the frame's
    /// key-check byte. Decryption was not attempted.
    #[error("device key does not match advertisement (key-check byte mismatch)")]
    KeyMismatch,

    /// The bit reader ran out of buffer before a required field could be
    /// read, or an unrecognized value was read into a closed enum.
    #[error("malformed payload: {0}")]
    MalformedPayload(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
