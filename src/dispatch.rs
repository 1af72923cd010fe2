use crate::envelope::Frame;
use crate::error::{Error, Result};

/// The device kind an Instant Readout advertisement was identified as,
/// prior to payload parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceKind {
    SolarCharger,
    BatteryMonitor,
    Inverter,
    DcDcConverter,
    SmartLithium,
    AcCharger,
    SmartBatteryProtect,
    LynxSmartBMS,
    MultiRS,
    VEBus,
    DcEnergyMeter,
    OrionXS,
    BatterySense,
}

/// Per-model-id overrides that take precedence over `readout_type`
/// dispatch. Currently only the Smart Battery Sense product line, whose
/// `readout_type` otherwise collides with `BatteryMonitor`.
const MODEL_OVERRIDES: &[(u16, DeviceKind)] = &[
    (0xA3A4, DeviceKind::BatterySense),
    (0xA3A5, DeviceKind::BatterySense),
];

/// Identifies the device kind for a raw advertisement without requiring
/// a device key.
pub fn detect_device_type(raw: &[u8]) -> Result<DeviceKind> {
    let frame = Frame::parse(raw)?;

    for (model_id, kind) in MODEL_OVERRIDES {
        if frame.model_id == *model_id {
            return Ok(*kind);
        }
    }

    use DeviceKind::*;
    let kind = match frame.readout_type {
        0x01 => SolarCharger,
        0x02 => BatteryMonitor,
        0x03 => Inverter,
        0x04 => DcDcConverter,
        0x05 => SmartLithium,
        0x08 => AcCharger,
        0x09 => SmartBatteryProtect,
        0x0A => LynxSmartBMS,
        0x0B => MultiRS,
        0x0C => VEBus,
        0x0D => DcEnergyMeter,
        0x0F => OrionXS,
        other => {
            return Err(Error::UnknownDevice {
                model_id: frame.model_id,
                readout_type: other,
            })
        }
    };
    Ok(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_readout_type_is_rejected() {
        let raw = hex::decode("10020000").unwrap();
        assert!(detect_device_type(&raw).is_err());
    }

    #[test]
    fn battery_monitor_dispatches_on_readout_type() {
        let raw = hex::decode("100289a3020000000000").unwrap();
        assert_eq!(
            detect_device_type(&raw).unwrap(),
            DeviceKind::BatteryMonitor
        );
    }

    #[test]
    fn battery_sense_model_override_wins() {
        // readout_type 0x02 would normally mean BatteryMonitor, but the
        // Smart Battery Sense model ids are special-cased.
        let raw = hex::decode("1000a4a3020000000000").unwrap();
        assert_eq!(
            detect_device_type(&raw).unwrap(),
            DeviceKind::BatterySense
        );
    }
}
