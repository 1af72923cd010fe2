use serde::{Deserialize, Serialize};

use crate::bit_reader::BitReader;
use crate::enums::AlarmReason;
use crate::error::Result;

/// A decoded Phoenix Inverter reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InverterReading {
    pub model_id: u16,
    pub device_state: u8,
    pub alarm: AlarmReason,
    pub battery_voltage: Option<f64>,
    pub ac_apparent_power: Option<f64>,
    pub ac_voltage: Option<f64>,
    pub ac_current: Option<f64>,
}

impl InverterReading {
    pub fn model_name(&self) -> String {
        crate::model::model_name(self.model_id)
    }
}

pub(crate) fn parse(model_id: u16, decrypted: &[u8]) -> Result<InverterReading> {
    let mut reader = BitReader::new(decrypted);

    let device_state = reader.read_unsigned(8)? as u8;
    let alarm = reader.read_unsigned(16)? as u16;
    let battery_voltage = reader.read_signed(16)?;
    let ac_apparent_power = reader.read_unsigned(16)? as u16;
    let ac_voltage = reader.read_unsigned(15)? as u16;
    let ac_current = reader.read_unsigned(11)? as u16;

    Ok(InverterReading {
        model_id,
        device_state,
        alarm: AlarmReason::from_bits_truncate(alarm),
        battery_voltage: if battery_voltage != 0x7FFF {
            Some(battery_voltage as f64 / 100.0)
        } else {
            None
        },
        ac_apparent_power: if ac_apparent_power != 0xFFFF {
            Some(ac_apparent_power as f64)
        } else {
            None
        },
        ac_voltage: if ac_voltage != 0x7FFF {
            Some(ac_voltage as f64 / 100.0)
        } else {
            None
        },
        ac_current: if ac_current != 0x7FF {
            Some(ac_current as f64 / 10.0)
        } else {
            None
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_inverting_state_with_no_alarms() {
        let decrypted = hex::decode("0900002805ffffffffff03").unwrap();
        let reading = parse(0xA204, &decrypted).unwrap();
        assert_eq!(reading.device_state, 9);
        assert_eq!(reading.alarm, AlarmReason::empty());
        assert_eq!(reading.battery_voltage, Some(13.2));
        assert_eq!(reading.ac_apparent_power, None);
    }
}
