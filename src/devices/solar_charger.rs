use serde::{Deserialize, Serialize};

use crate::bit_reader::BitReader;
use crate::enums::{ChargerError, OperationMode};
use crate::error::Result;

/// A decoded SmartSolar/BlueSolar MPPT charge controller reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarChargerReading {
    pub model_id: u16,
    pub charge_state: Option<OperationMode>,
    pub charger_error: Option<ChargerError>,
    pub battery_voltage: Option<f64>,
    pub battery_charging_current: Option<f64>,
    pub yield_today: Option<f64>,
    pub solar_power: Option<f64>,
    pub external_device_load: Option<f64>,
}

impl SolarChargerReading {
    pub fn model_name(&self) -> String {
        crate::model::model_name(self.model_id)
    }
}

pub(crate) fn parse(model_id: u16, decrypted: &[u8]) -> Result<SolarChargerReading> {
    let mut reader = BitReader::new(decrypted);

    let charge_state = reader.read_unsigned(8)? as u8;
    let charger_error = reader.read_unsigned(8)? as u8;
    let battery_voltage = reader.read_signed(16)?;
    let battery_charging_current = reader.read_signed(16)?;
    let yield_today = reader.read_unsigned(16)? as u16;
    let solar_power = reader.read_unsigned(16)? as u16;
    let external_device_load = reader.read_unsigned(9)? as u16;

    Ok(SolarChargerReading {
        model_id,
        charge_state: OperationMode::from_wire(charge_state),
        charger_error: ChargerError::from_wire(charger_error),
        battery_voltage: if battery_voltage != 0x7FFF {
            Some(battery_voltage as f64 / 100.0)
        } else {
            None
        },
        battery_charging_current: if battery_charging_current != 0x7FFF {
            Some(battery_charging_current as f64 / 10.0)
        } else {
            None
        },
        yield_today: if yield_today != 0xFFFF {
            Some(yield_today as f64 * 10.0)
        } else {
            None
        },
        solar_power: if solar_power != 0xFFFF {
            Some(solar_power as f64)
        } else {
            None
        },
        external_device_load: if external_device_load != 0x1FF {
            Some(external_device_load as f64 / 10.0)
        } else {
            None
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_bulk_charging_state() {
        // charge_state=3 (Bulk), charger_error=0, battery 13.20V, charging 5.4A,
        // yield_today 1.2kWh, solar_power 45W, no external load.
        let decrypted = hex::decode("03002805360078002d00ff01").unwrap();
        let reading = parse(0xA057, &decrypted).unwrap();
        assert_eq!(reading.charge_state, Some(OperationMode::Bulk));
        assert_eq!(reading.battery_voltage, Some(13.2));
        assert_eq!(reading.battery_charging_current, Some(5.4));
        assert_eq!(reading.yield_today, Some(1200.0));
        assert_eq!(reading.solar_power, Some(45.0));
        assert_eq!(reading.external_device_load, None);
    }

    #[test]
    fn charge_state_sentinel_is_unavailable_not_a_variant() {
        let decrypted = hex::decode("ff0000000000ffffffffffff").unwrap();
        let reading = parse(0, &decrypted).unwrap();
        assert_eq!(reading.charge_state, None);
        assert_eq!(reading.charger_error, Some(ChargerError::NoError));
    }
}
