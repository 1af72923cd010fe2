use serde::{Deserialize, Serialize};

use crate::bit_reader::BitReader;
use crate::enums::{ChargerError, MultiRsOperationMode};
use crate::error::Result;

/// A decoded Multi RS (hybrid inverter/charger) reading.
///
/// Unlike most other device kinds, the Multi RS payload is laid out as
/// plain little-endian integers rather than a tightly packed bitstream,
/// mirroring the original implementation's `struct.unpack` decoding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MultiRSReading {
    pub model_id: u16,
    pub device_state: Option<MultiRsOperationMode>,
    pub charger_error: Option<ChargerError>,
    pub battery_current: Option<f64>,
    pub battery_voltage: Option<f64>,
    pub active_ac_in: Option<u8>,
    pub ac_in_power: Option<f64>,
    pub ac_out_power: Option<f64>,
    pub pv_power: Option<f64>,
    pub yield_today: Option<f64>,
}

impl MultiRSReading {
    pub fn model_name(&self) -> String {
        crate::model::model_name(self.model_id)
    }
}

pub(crate) fn parse(model_id: u16, decrypted: &[u8]) -> Result<MultiRSReading> {
    let mut reader = BitReader::new(decrypted);

    let device_state = reader.read_unsigned(8)? as u8;
    let charger_error = reader.read_unsigned(8)? as u8;
    let battery_current = reader.read_signed(16)?;
    let combined = reader.read_unsigned(16)? as u16;
    let ac_in_power = reader.read_signed(16)?;
    let ac_out_power = reader.read_signed(16)?;
    let pv_power = reader.read_unsigned(16)? as u16;
    let yield_today = reader.read_unsigned(16)? as u16;

    let battery_voltage = combined & 0x3FFF;
    let active_ac_in = (combined >> 14) & 0x3;

    Ok(MultiRSReading {
        model_id,
        device_state: MultiRsOperationMode::from_wire(device_state),
        charger_error: ChargerError::from_wire(charger_error),
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
        active_ac_in: if active_ac_in != 3 {
            Some(active_ac_in as u8)
        } else {
            None
        },
        ac_in_power: if ac_in_power != 0x7FFF {
            Some(ac_in_power as f64)
        } else {
            None
        },
        ac_out_power: if ac_out_power != 0x7FFF {
            Some(ac_out_power as f64)
        } else {
            None
        },
        pv_power: if pv_power != 0xFFFF {
            Some(pv_power as f64)
        } else {
            None
        },
        yield_today: if yield_today != 0xFFFF {
            Some(yield_today as f64 * 10.0)
        } else {
            None
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_inverting_state_and_battery_voltage() {
        // device_state=9 (Inverting), battery 53.20V on AC-in 1,
        // current 5.0A, everything else unavailable.
        let decrypted = hex::decode("09003200c814ff7fff7fffffffff").unwrap();
        let reading = parse(0xA443, &decrypted).unwrap();
        assert_eq!(
            reading.device_state,
            Some(MultiRsOperationMode::Inverting)
        );
        assert_eq!(reading.battery_current, Some(5.0));
        assert_eq!(reading.battery_voltage, Some(53.2));
        assert_eq!(reading.active_ac_in, Some(0));
        assert_eq!(reading.ac_in_power, None);
        assert_eq!(reading.pv_power, None);
        assert_eq!(reading.model_name(), "Multi RS Solar 48V/6000VA/100A");
    }

    #[test]
    fn device_state_sentinel_is_unavailable_not_a_variant() {
        let decrypted = hex::decode("ff003200c814ff7fff7fffffffff").unwrap();
        let reading = parse(0, &decrypted).unwrap();
        assert_eq!(reading.device_state, None);
        assert_eq!(reading.charger_error, Some(ChargerError::NoError));
    }
}
