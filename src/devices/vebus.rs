use serde::{Deserialize, Serialize};

use crate::bit_reader::BitReader;
use crate::enums::{ACInState, AlarmNotification};
use crate::error::Result;

/// A decoded VE.Bus (Multi/Quattro) system reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VEBusReading {
    pub model_id: u16,
    pub device_state: u8,
    pub error: u8,
    pub battery_current: Option<f64>,
    pub battery_voltage: Option<f64>,
    pub ac_in_state: Option<ACInState>,
    pub ac_in_power: Option<f64>,
    pub ac_out_power: Option<f64>,
    pub alarm: Option<AlarmNotification>,
    pub battery_temperature: Option<f64>,
    pub soc: Option<f64>,
}

impl VEBusReading {
    pub fn model_name(&self) -> String {
        crate::model::model_name(self.model_id)
    }
}

pub(crate) fn parse(model_id: u16, decrypted: &[u8]) -> Result<VEBusReading> {
    let mut reader = BitReader::new(decrypted);

    let device_state = reader.read_unsigned(8)? as u8;
    let error = reader.read_unsigned(8)? as u8;
    let battery_current = reader.read_signed(16)?;
    let battery_voltage = reader.read_unsigned(14)? as u16;
    let ac_in_state = reader.read_unsigned(2)? as u8;
    let ac_in_power = reader.read_signed(19)?;
    let ac_out_power = reader.read_signed(19)?;
    let alarm = reader.read_unsigned(2)? as u8;
    let battery_temperature = reader.read_unsigned(7)? as u16;
    let soc = reader.read_unsigned(7)? as u16;

    Ok(VEBusReading {
        model_id,
        device_state,
        error,
        battery_current: if battery_current != 0x7FFF {
            Some(battery_current as f64 / 10.0)
        } else {
            None
        },
        battery_voltage: if battery_voltage != 0x3FFF {
            Some(battery_voltage as f64 / 100.0)
        } else {
            None
        },
        ac_in_state: if ac_in_state != 3 {
            ACInState::from_wire(ac_in_state)
        } else {
            None
        },
        ac_in_power: if ac_in_power != 0x3FFFF {
            Some(ac_in_power as f64)
        } else {
            None
        },
        ac_out_power: if ac_out_power != 0x3FFFF {
            Some(ac_out_power as f64)
        } else {
            None
        },
        alarm: if alarm != 3 {
            AlarmNotification::from_wire(alarm)
        } else {
            None
        },
        battery_temperature: if battery_temperature != 0x7F {
            Some(battery_temperature as f64 - 40.0)
        } else {
            None
        },
        soc: if soc != 0x7F {
            Some(soc as f64)
        } else {
            None
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_zeroed_payload_with_ac_in_1_active() {
        let decrypted = hex::decode("09000000000000000000000000").unwrap();
        let reading = parse(0x2780, &decrypted).unwrap();
        assert_eq!(reading.device_state, 9);
        assert_eq!(reading.error, 0);
        assert_eq!(reading.battery_current, Some(0.0));
        assert_eq!(reading.battery_voltage, Some(0.0));
        assert_eq!(reading.ac_in_state, Some(ACInState::AcIn1));
        assert_eq!(reading.alarm, Some(AlarmNotification::NoAlarm));
        assert_eq!(reading.battery_temperature, Some(-40.0));
        assert_eq!(reading.soc, Some(0.0));
    }
}
