use serde::{Deserialize, Serialize};

use crate::bit_reader::BitReader;
use crate::enums::AlarmReason;
use crate::error::{Error, Result};

use super::kelvin_to_celsius;

/// The battery monitor's multiplexed auxiliary input, decoded according
/// to the currently active [`crate::enums::AuxMode`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AuxReading {
    StarterVoltage(f64),
    MidpointVoltage(f64),
    Temperature(f64),
    Disabled,
}

/// A decoded BatteryMonitor (BMV / SmartShunt) reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatteryMonitorReading {
    pub model_id: u16,
    pub remaining_mins: Option<u16>,
    pub voltage: Option<f64>,
    pub alarm: AlarmReason,
    pub current: Option<f64>,
    pub consumed_ah: Option<f64>,
    pub soc: Option<f64>,
    pub aux: AuxReading,
}

impl BatteryMonitorReading {
    pub fn model_name(&self) -> String {
        crate::model::model_name(self.model_id)
    }
}

pub(crate) fn parse(model_id: u16, decrypted: &[u8]) -> Result<BatteryMonitorReading> {
    let mut reader = BitReader::new(decrypted);

    let remaining_mins = reader.read_unsigned(16)? as u16;
    let voltage = reader.read_signed(16)?;
    let alarm = reader.read_unsigned(16)? as u16;
    let aux = reader.read_unsigned(16)? as u16;
    let aux_mode = reader.read_unsigned(2)?;
    let current = reader.read_signed(22)?;
    let consumed_ah = reader.read_unsigned(20)?;
    let soc = reader.read_unsigned(10)?;

    // aux_mode is a 2-bit field, so all four values are covered below.
    let aux = match aux_mode {
        0 => AuxReading::StarterVoltage(BitReader::to_signed(aux as u64, 16) as f64 / 100.0),
        1 => AuxReading::MidpointVoltage(aux as f64 / 100.0),
        2 => AuxReading::Temperature(kelvin_to_celsius(aux as f64 / 100.0)),
        _ => AuxReading::Disabled,
    };

    Ok(BatteryMonitorReading {
        model_id,
        remaining_mins: if remaining_mins != 0xFFFF {
            Some(remaining_mins)
        } else {
            None
        },
        voltage: if voltage != 0x7FFF {
            Some(voltage as f64 / 100.0)
        } else {
            None
        },
        alarm: AlarmReason::from_bits_truncate(alarm),
        current: if current != 0x3FFFFF {
            Some(current as f64 / 1000.0)
        } else {
            None
        },
        consumed_ah: if consumed_ah != 0xFFFFF {
            Some(-(consumed_ah as f64) / 10.0)
        } else {
            None
        },
        soc: if soc != 0x3FF {
            Some(soc as f64 / 10.0)
        } else {
            None
        },
        aux,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_to_end_smartshunt() {
        let raw = hex::decode("100289a302b040af925d09a4d89aa0128bdef48c6298a9").unwrap();
        let key = crate::key::DeviceKey::from_hex("aff4d0995b7d1e176c0c33ecb9e70dcd").unwrap();
        let reading = match crate::parse(&raw, &key).unwrap() {
            crate::Reading::BatteryMonitor(r) => r,
            _ => panic!("expected BatteryMonitor"),
        };
        assert_eq!(reading.aux, AuxReading::Disabled);
        assert_eq!(reading.consumed_ah, Some(-50.0));
        assert_eq!(reading.current, Some(0.0));
        assert_eq!(reading.remaining_mins, None);
        assert_eq!(reading.soc, Some(50.0));
        assert_eq!(reading.voltage, Some(12.53));
        assert_eq!(reading.alarm, AlarmReason::empty());
        assert_eq!(reading.model_name(), "SmartShunt 500A/50mV");
    }

    #[test]
    fn aux_temperature_rounds_kelvin_conversion() {
        let decrypted = hex::decode("ffffe6040000ffff020000000080fede").unwrap();
        let reading = parse(0, &decrypted).unwrap();
        assert_eq!(reading.aux, AuxReading::Temperature(382.2));
    }

    #[test]
    fn aux_midpoint_voltage() {
        let decrypted = hex::decode("ffffe6040000feff010000000080fe0c").unwrap();
        let reading = parse(0, &decrypted).unwrap();
        assert_eq!(reading.aux, AuxReading::MidpointVoltage(655.34));
    }

    #[test]
    fn aux_starter_voltage_is_signed() {
        let decrypted = hex::decode("ffffe6040000feff000000000080feac").unwrap();
        let reading = parse(0, &decrypted).unwrap();
        assert_eq!(reading.aux, AuxReading::StarterVoltage(-0.02));
    }

    #[test]
    fn key_mismatch_is_rejected() {
        let raw = hex::decode("100289a302bb01af129087600b9b97bc2c32867c8238da").unwrap();
        let key = crate::key::DeviceKey::from_hex("ffffffffffffffffffffffffffffffff").unwrap();
        assert!(matches!(
            crate::parse(&raw, &key),
            Err(Error::KeyMismatch)
        ));
    }
}
