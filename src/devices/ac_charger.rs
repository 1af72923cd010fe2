use serde::{Deserialize, Serialize};

use crate::bit_reader::BitReader;
use crate::enums::{ChargerError, OperationMode};
use crate::error::Result;

/// A single output channel of a Phoenix Smart IP43 charger.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AcChargerOutput {
    pub voltage: Option<f64>,
    pub current: Option<f64>,
}

/// A decoded Phoenix Smart IP43 AC charger reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AcChargerReading {
    pub model_id: u16,
    pub charge_state: Option<OperationMode>,
    pub charger_error: Option<ChargerError>,
    pub outputs: [AcChargerOutput; 3],
    pub temperature: Option<f64>,
    pub ac_current: Option<f64>,
}

impl AcChargerReading {
    pub fn model_name(&self) -> String {
        crate::model::model_name(self.model_id)
    }
}

pub(crate) fn parse(model_id: u16, decrypted: &[u8]) -> Result<AcChargerReading> {
    let mut reader = BitReader::new(decrypted);

    let charge_state = reader.read_unsigned(8)? as u8;
    let charger_error = reader.read_unsigned(8)? as u8;

    let mut outputs = [AcChargerOutput {
        voltage: None,
        current: None,
    }; 3];
    for output in outputs.iter_mut() {
        let voltage = reader.read_unsigned(13)? as u16;
        let current = reader.read_unsigned(11)? as u16;
        output.voltage = if voltage != 0x1FFF {
            Some(voltage as f64 / 100.0)
        } else {
            None
        };
        output.current = if current != 0x7FF {
            Some(current as f64 / 10.0)
        } else {
            None
        };
    }

    let temperature = reader.read_unsigned(7)? as u16;
    let ac_current = reader.read_unsigned(9)? as u16;

    Ok(AcChargerReading {
        model_id,
        charge_state: OperationMode::from_wire(charge_state),
        charger_error: ChargerError::from_wire(charger_error),
        outputs,
        temperature: if temperature != 0x7F {
            Some(temperature as f64 - 40.0)
        } else {
            None
        },
        ac_current: if ac_current != 0x1FF {
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
    fn unavailable_fields_are_none() {
        let decrypted = hex::decode("0300ffffffffffffffffff0000").unwrap();
        let reading = parse(0xA340, &decrypted).unwrap();
        assert_eq!(reading.charge_state, Some(OperationMode::Bulk));
        assert_eq!(reading.charger_error, Some(ChargerError::NoError));
        for output in &reading.outputs {
            assert_eq!(output.voltage, None);
            assert_eq!(output.current, None);
        }
    }

    #[test]
    fn charge_state_sentinel_is_unavailable_not_a_variant() {
        let decrypted = hex::decode("ff00ffffffffffffffffff0000").unwrap();
        let reading = parse(0, &decrypted).unwrap();
        assert_eq!(reading.charge_state, None);
        assert_eq!(reading.charger_error, Some(ChargerError::NoError));
    }
}
