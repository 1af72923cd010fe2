use serde::{Deserialize, Serialize};

use crate::bit_reader::BitReader;
use crate::enums::BalancerStatus;
use crate::error::Result;

/// A single SmartLithium cell voltage reading.
///
/// `0x00` and `0x7E` are reported by the hardware to mean "below
/// measurable range" and "above measurable range" respectively, and are
/// surfaced as the corresponding infinities rather than folded into
/// `None`, matching how the original implementation distinguishes
/// out-of-range from genuinely absent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CellVoltage {
    BelowRange,
    AboveRange,
    Voltage(f64),
}

/// A decoded SmartLithium battery reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmartLithiumReading {
    pub model_id: u16,
    pub bms_flags: u32,
    pub error_flags: u16,
    pub cell_voltages: [Option<CellVoltage>; 8],
    pub battery_voltage: Option<f64>,
    pub balancer_status: Option<BalancerStatus>,
    pub battery_temperature: Option<f64>,
}

impl SmartLithiumReading {
    pub fn model_name(&self) -> String {
        crate::model::model_name(self.model_id)
    }
}

fn parse_cell_voltage(raw: u64) -> Option<CellVoltage> {
    match raw {
        0x00 => Some(CellVoltage::BelowRange),
        0x7E => Some(CellVoltage::AboveRange),
        0x7F => None,
        other => Some(CellVoltage::Voltage((260 + other) as f64 / 100.0)),
    }
}

pub(crate) fn parse(model_id: u16, decrypted: &[u8]) -> Result<SmartLithiumReading> {
    let mut reader = BitReader::new(decrypted);

    let bms_flags = reader.read_unsigned(32)? as u32;
    let error_flags = reader.read_unsigned(16)? as u16;

    let mut cell_voltages = [None; 8];
    for cell in cell_voltages.iter_mut() {
        let raw = reader.read_unsigned(7)?;
        *cell = parse_cell_voltage(raw);
    }

    let battery_voltage = reader.read_unsigned(12)? as u16;
    let balancer_status = reader.read_unsigned(4)?;
    let battery_temperature = reader.read_unsigned(7)? as u16;

    Ok(SmartLithiumReading {
        model_id,
        bms_flags,
        error_flags,
        cell_voltages,
        battery_voltage: if battery_voltage != 0x0FFF {
            Some(battery_voltage as f64 / 100.0)
        } else {
            None
        },
        balancer_status: BalancerStatus::from_wire(balancer_status),
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
    fn cell_voltage_sentinels_map_to_infinities_and_absent() {
        assert_eq!(parse_cell_voltage(0x00), Some(CellVoltage::BelowRange));
        assert_eq!(parse_cell_voltage(0x7E), Some(CellVoltage::AboveRange));
        assert_eq!(parse_cell_voltage(0x7F), None);
        assert_eq!(parse_cell_voltage(0x28), Some(CellVoltage::Voltage(3.0)));
    }

    #[test]
    fn decodes_all_cells_absent_and_balancer_unknown() {
        let decrypted =
            hex::decode("000000000000ffffffffffffff000000").unwrap();
        let reading = parse(0xA0EC, &decrypted).unwrap();
        assert_eq!(reading.bms_flags, 0);
        assert_eq!(reading.error_flags, 0);
        assert_eq!(reading.cell_voltages, [None; 8]);
        assert_eq!(reading.battery_voltage, Some(0.0));
        assert_eq!(reading.balancer_status, Some(BalancerStatus::Unknown));
        assert_eq!(reading.battery_temperature, Some(-40.0));
    }
}
