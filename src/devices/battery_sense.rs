use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A decoded Smart Battery Sense reading.
///
/// The wire layout is identical to [`super::battery_monitor`]'s; Battery
/// Sense is a voltage/temperature-only sensor, so only those two fields
/// are exposed here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatterySenseReading {
    pub model_id: u16,
    pub voltage: Option<f64>,
    pub temperature: Option<f64>,
}

impl BatterySenseReading {
    pub fn model_name(&self) -> String {
        crate::model::model_name(self.model_id)
    }
}

pub(crate) fn parse(model_id: u16, decrypted: &[u8]) -> Result<BatterySenseReading> {
    let full = super::battery_monitor::parse(model_id, decrypted)?;

    let temperature = match full.aux {
        super::AuxReading::Temperature(t) => Some(t),
        _ => None,
    };

    Ok(BatterySenseReading {
        model_id,
        voltage: full.voltage,
        temperature,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposes_only_voltage_and_temperature() {
        let decrypted = hex::decode("ffffe6040000ffff020000000080fede").unwrap();
        let reading = parse(0xA3A4, &decrypted).unwrap();
        assert_eq!(reading.temperature, Some(382.2));
        assert_eq!(reading.model_name(), "Smart Battery Sense");
    }
}
