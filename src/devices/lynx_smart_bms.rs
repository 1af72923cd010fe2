use serde::{Deserialize, Serialize};

use crate::bit_reader::BitReader;
use crate::error::Result;

/// A decoded Lynx Smart BMS reading.
///
/// `io_status` and `alarm_flags` are exposed as raw bitfields: Victron
/// has not published a stable meaning for every bit, so downstream code
/// reads the ones it needs directly rather than relying on an
/// incomplete enum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LynxSmartBMSReading {
    pub model_id: u16,
    pub error_flags: u8,
    pub remaining_mins: Option<u16>,
    pub voltage: Option<f64>,
    pub current: Option<f64>,
    pub io_status: u16,
    pub alarm_flags: u32,
    pub soc: Option<f64>,
    pub consumed_ah: Option<f64>,
    pub battery_temperature: Option<f64>,
}

impl LynxSmartBMSReading {
    pub fn model_name(&self) -> String {
        crate::model::model_name(self.model_id)
    }
}

pub(crate) fn parse(model_id: u16, decrypted: &[u8]) -> Result<LynxSmartBMSReading> {
    let mut reader = BitReader::new(decrypted);

    let error_flags = reader.read_unsigned(8)? as u8;
    let remaining_mins = reader.read_unsigned(16)? as u16;
    let voltage = reader.read_signed(16)?;
    let current = reader.read_signed(16)?;
    let io_status = reader.read_unsigned(16)? as u16;
    let alarm_flags = reader.read_unsigned(18)? as u32;
    let soc = reader.read_unsigned(10)? as u16;
    let consumed_ah = reader.read_unsigned(20)? as u32;
    let battery_temperature = reader.read_unsigned(7)? as u16;

    Ok(LynxSmartBMSReading {
        model_id,
        error_flags,
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
        current: if current != 0x7FFF {
            Some(current as f64 / 10.0)
        } else {
            None
        },
        io_status,
        alarm_flags,
        soc: if soc != 0x3FF {
            Some(soc as f64 / 10.0)
        } else {
            None
        },
        consumed_ah: if consumed_ah != 0xFFFFF {
            Some(consumed_ah as f64 / 10.0)
        } else {
            None
        },
        battery_temperature: if battery_temperature != 0x7F {
            Some(battery_temperature as f64 - 40.0)
        } else {
            None
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_healthy_bank_with_no_errors() {
        let decrypted = hex::decode("00ffffff7fff7f000000000000000000").unwrap();
        let reading = parse(0xA3E6, &decrypted).unwrap();
        assert_eq!(reading.error_flags, 0);
        assert_eq!(reading.remaining_mins, None);
        assert_eq!(reading.voltage, None);
        assert_eq!(reading.current, None);
        assert_eq!(reading.io_status, 0);
    }
}
