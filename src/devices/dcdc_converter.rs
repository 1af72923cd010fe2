use serde::{Deserialize, Serialize};

use crate::bit_reader::BitReader;
use crate::enums::{ChargerError, OffReason, OperationMode};
use crate::error::Result;

/// A decoded Orion Smart DC-DC converter reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DcDcConverterReading {
    pub model_id: u16,
    pub device_state: Option<OperationMode>,
    pub charger_error: Option<ChargerError>,
    pub input_voltage: Option<f64>,
    pub output_voltage: Option<f64>,
    pub off_reason: OffReason,
}

impl DcDcConverterReading {
    pub fn model_name(&self) -> String {
        crate::model::model_name(self.model_id)
    }
}

pub(crate) fn parse(model_id: u16, decrypted: &[u8]) -> Result<DcDcConverterReading> {
    let mut reader = BitReader::new(decrypted);

    let device_state = reader.read_unsigned(8)? as u8;
    let charger_error = reader.read_unsigned(8)? as u8;
    let input_voltage = reader.read_unsigned(16)? as u16;
    let output_voltage = reader.read_signed(16)?;
    let off_reason = reader.read_unsigned(32)? as u32;

    Ok(DcDcConverterReading {
        model_id,
        device_state: OperationMode::from_wire(device_state),
        charger_error: ChargerError::from_wire(charger_error),
        input_voltage: if input_voltage != 0xFFFF {
            Some(input_voltage as f64 / 100.0)
        } else {
            None
        },
        output_voltage: if output_voltage != 0x7FFF {
            Some(output_voltage as f64 / 100.0)
        } else {
            None
        },
        off_reason: OffReason::from_bits_truncate(off_reason),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_charging_state_and_voltages() {
        // device_state=3 (Bulk), charger_error=0, input 13.01V, output 13.20V, off_reason=0
        let decrypted = hex::decode("03001505280500000000").unwrap();
        let reading = parse(0xA3C0, &decrypted).unwrap();
        assert_eq!(reading.device_state, Some(OperationMode::Bulk));
        assert_eq!(reading.charger_error, Some(ChargerError::NoError));
        assert_eq!(reading.input_voltage, Some(13.01));
        assert_eq!(reading.output_voltage, Some(13.2));
        assert_eq!(reading.off_reason, OffReason::empty());
    }

    #[test]
    fn unavailable_voltages_are_none() {
        let decrypted = hex::decode("aa00ffffff7f00000000").unwrap();
        let reading = parse(0, &decrypted).unwrap();
        assert_eq!(reading.device_state, None);
        assert_eq!(reading.input_voltage, None);
        assert_eq!(reading.output_voltage, None);
    }

    #[test]
    fn device_state_sentinel_is_unavailable_not_a_variant() {
        let decrypted = hex::decode("ff00ffffff7f00000000").unwrap();
        let reading = parse(0, &decrypted).unwrap();
        assert_eq!(reading.device_state, None);
        assert_eq!(reading.charger_error, Some(ChargerError::NoError));
    }
}
