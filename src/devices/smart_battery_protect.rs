use serde::{Deserialize, Serialize};

use crate::bit_reader::BitReader;
use crate::enums::{AlarmReason, OffReason, OperationMode, OutputState};
use crate::error::Result;

/// A decoded Smart BatteryProtect reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmartBatteryProtectReading {
    pub model_id: u16,
    pub device_state: Option<OperationMode>,
    pub output_state: Option<OutputState>,
    pub error_code: u8,
    pub alarm_reason: AlarmReason,
    pub warning_reason: AlarmReason,
    pub input_voltage: Option<f64>,
    pub output_voltage: Option<f64>,
    pub off_reason: OffReason,
}

impl SmartBatteryProtectReading {
    pub fn model_name(&self) -> String {
        crate::model::model_name(self.model_id)
    }
}

pub(crate) fn parse(model_id: u16, decrypted: &[u8]) -> Result<SmartBatteryProtectReading> {
    let mut reader = BitReader::new(decrypted);

    let device_state = reader.read_unsigned(8)? as u8;
    let output_state = reader.read_unsigned(8)? as u8;
    let error_code = reader.read_unsigned(8)? as u8;
    let alarm_reason = reader.read_unsigned(16)? as u16;
    let warning_reason = reader.read_unsigned(16)? as u16;
    let input_voltage = reader.read_signed(16)?;
    let output_voltage = reader.read_unsigned(16)? as u16;
    let off_reason = reader.read_unsigned(32)? as u32;

    Ok(SmartBatteryProtectReading {
        model_id,
        device_state: OperationMode::from_wire(device_state),
        output_state: OutputState::from_wire(output_state),
        error_code,
        alarm_reason: AlarmReason::from_bits_truncate(alarm_reason),
        warning_reason: AlarmReason::from_bits_truncate(warning_reason),
        input_voltage: if input_voltage != 0x7FFF {
            Some(input_voltage as f64 / 100.0)
        } else {
            None
        },
        output_voltage: if output_voltage != 0xFFFF {
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
    fn decodes_on_state_with_no_alarms() {
        // device_state=9 (Inverting, reused as "on"), output_state=1 (On),
        // no error, no alarms, input 12.60V, output unavailable.
        let decrypted = hex::decode("09010000000000ec04ffffffffffff").unwrap();
        let reading = parse(0xA3B0, &decrypted).unwrap();
        assert_eq!(reading.output_state, Some(OutputState::On));
        assert_eq!(reading.error_code, 0);
        assert_eq!(reading.alarm_reason, AlarmReason::empty());
        assert_eq!(reading.input_voltage, Some(12.6));
        assert_eq!(reading.output_voltage, None);
    }

    #[test]
    fn unmapped_output_state_is_none() {
        let decrypted = hex::decode("0900000000000000ffffffffffffffff").unwrap();
        let reading = parse(0, &decrypted).unwrap();
        assert_eq!(reading.output_state, None);
    }

    #[test]
    fn device_state_sentinel_is_unavailable_not_a_variant() {
        let decrypted = hex::decode("ff010000000000ec04ffffffffffff").unwrap();
        let reading = parse(0, &decrypted).unwrap();
        assert_eq!(reading.device_state, None);
        assert_eq!(reading.output_state, Some(OutputState::On));
    }
}
