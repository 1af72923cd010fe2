use serde::{Deserialize, Serialize};

use crate::bit_reader::BitReader;
use crate::enums::{ChargerError, OffReason, OperationMode};
use crate::error::Result;

/// A decoded Orion XS DC-DC converter reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrionXSReading {
    pub model_id: u16,
    pub device_state: Option<OperationMode>,
    pub charger_error: Option<ChargerError>,
    pub output_voltage: Option<f64>,
    pub output_current: Option<f64>,
    pub input_voltage: Option<f64>,
    pub input_current: Option<f64>,
    pub off_reason: OffReason,
}

impl OrionXSReading {
    pub fn model_name(&self) -> String {
        crate::model::model_name(self.model_id)
    }
}

pub(crate) fn parse(model_id: u16, decrypted: &[u8]) -> Result<OrionXSReading> {
    let mut reader = BitReader::new(decrypted);

    let device_state = reader.read_unsigned(8)? as u8;
    let charger_error = reader.read_unsigned(8)? as u8;
    let output_voltage = reader.read_unsigned(16)? as u16;
    let output_current = reader.read_unsigned(16)? as u16;
    let input_voltage = reader.read_unsigned(16)? as u16;
    let input_current = reader.read_unsigned(16)? as u16;
    let off_reason = reader.read_unsigned(32)? as u32;

    Ok(OrionXSReading {
        model_id,
        device_state: OperationMode::from_wire(device_state),
        charger_error: ChargerError::from_wire(charger_error),
        output_voltage: if output_voltage != 0xFFFF {
            Some(output_voltage as f64 / 100.0)
        } else {
            None
        },
        output_current: if output_current != 0xFFFF {
            Some(output_current as f64 / 10.0)
        } else {
            None
        },
        input_voltage: if input_voltage != 0xFFFF {
            Some(input_voltage as f64 / 100.0)
        } else {
            None
        },
        input_current: if input_current != 0xFFFF {
            Some(input_current as f64 / 10.0)
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
    fn decodes_bulk_charging_currents() {
        // device_state=3 (Bulk), no error, output 14.40V/20.0A,
        // input 12.60V/25.3A, no off_reason bits set.
        let decrypted = hex::decode("0300a005c800e404fd0100000000").unwrap();
        let reading = parse(0xA3F0, &decrypted).unwrap();
        assert_eq!(reading.device_state, Some(OperationMode::Bulk));
        assert_eq!(reading.output_voltage, Some(14.4));
        assert_eq!(reading.output_current, Some(20.0));
        assert_eq!(reading.input_voltage, Some(12.6));
        assert_eq!(reading.input_current, Some(25.3));
        assert_eq!(reading.off_reason, OffReason::empty());
    }

    #[test]
    fn device_state_sentinel_is_unavailable_not_a_variant() {
        let decrypted = hex::decode("ff00a005c800e404fd0100000000").unwrap();
        let reading = parse(0, &decrypted).unwrap();
        assert_eq!(reading.device_state, None);
        assert_eq!(reading.charger_error, Some(ChargerError::NoError));
    }
}
