//! Decode Victron Energy "Instant Readout" Bluetooth Low Energy
//! manufacturer-data advertisements into typed telemetry readings.
//!
//! Victron's newer products broadcast their state continuously over BLE
//! advertisements rather than requiring a pairing and GATT read. Each
//! advertisement carries a 7-byte plaintext header followed by an
//! AES-128-CTR-encrypted payload; once decrypted, the payload is a
//! tightly packed, device-specific bitstream. This crate turns that raw
//! advertisement payload into a [`Reading`] without opening a BLE
//! connection itself — scanning for advertisements is left to the
//! caller (see the `victron-ble-scan` demo binary in this crate's
//! repository for one way to do that with `bluest`).
//!
//! ```
//! use victron_ble_reader::{parse, DeviceKey};
//!
//! let raw = hex::decode("100289a302b040af925d09a4d89aa0128bdef48c6298a9").unwrap();
//! let key = DeviceKey::from_hex("aff4d0995b7d1e176c0c33ecb9e70dcd").unwrap();
//!
//! let reading = parse(&raw, &key).unwrap();
//! println!("{}: {:?}", reading.model_name(), reading);
//! ```

mod bit_reader;
mod cipher;
mod devices;
mod dispatch;
mod enums;
mod envelope;
mod error;
mod key;
mod model;
mod reading;

pub use devices::{
    AcChargerOutput, AcChargerReading, AuxReading, BatteryMonitorReading, BatterySenseReading,
    CellVoltage, DcDcConverterReading, DcEnergyMeterReading, InverterReading,
    LynxSmartBMSReading, MultiRSReading, OrionXSReading, SmartBatteryProtectReading,
    SmartLithiumReading, SolarChargerReading, VEBusReading,
};
pub use dispatch::{detect_device_type, DeviceKind};
pub use enums::{
    ACInState, AlarmNotification, AlarmReason, AuxMode, BalancerStatus, ChargerError, MeterType,
    MultiRsOperationMode, OffReason, OperationMode, OutputState,
};
pub use envelope::{Frame, INSTANT_READOUT_TAG, VICTRON_MANUFACTURER_ID};
pub use error::{Error, Result};
pub use key::DeviceKey;
pub use model::{model_name, UnknownModel};
pub use reading::Reading;

/// Decrypts and parses a raw Instant Readout advertisement payload into
/// a typed [`Reading`].
///
/// `raw` is the manufacturer-specific data field of a BLE advertisement
/// carrying company id `0x02E1` (see [`VICTRON_MANUFACTURER_ID`]),
/// including its 7-byte header. `device_key` is the per-device
/// encryption key, obtained once out of band (typically from the
/// VictronConnect app).
pub fn parse(raw: &[u8], device_key: &DeviceKey) -> Result<Reading> {
    let frame = Frame::parse(raw)?;
    let kind = dispatch::detect_device_type(raw)?;
    let decrypted = cipher::decrypt(&frame, device_key)?;
    let model_id = frame.model_id;

    use dispatch::DeviceKind::*;
    Ok(match kind {
        SolarCharger => {
            Reading::SolarCharger(devices::solar_charger::parse(model_id, &decrypted)?)
        }
        BatteryMonitor => {
            Reading::BatteryMonitor(devices::battery_monitor::parse(model_id, &decrypted)?)
        }
        Inverter => Reading::Inverter(devices::inverter::parse(model_id, &decrypted)?),
        DcDcConverter => {
            Reading::DcDcConverter(devices::dcdc_converter::parse(model_id, &decrypted)?)
        }
        SmartLithium => {
            Reading::SmartLithium(devices::smart_lithium::parse(model_id, &decrypted)?)
        }
        AcCharger => Reading::AcCharger(devices::ac_charger::parse(model_id, &decrypted)?),
        SmartBatteryProtect => Reading::SmartBatteryProtect(
            devices::smart_battery_protect::parse(model_id, &decrypted)?,
        ),
        LynxSmartBMS => {
            Reading::LynxSmartBMS(devices::lynx_smart_bms::parse(model_id, &decrypted)?)
        }
        MultiRS => Reading::MultiRS(devices::multirs::parse(model_id, &decrypted)?),
        VEBus => Reading::VEBus(devices::vebus::parse(model_id, &decrypted)?),
        DcEnergyMeter => {
            Reading::DcEnergyMeter(devices::dc_energy_meter::parse(model_id, &decrypted)?)
        }
        OrionXS => Reading::OrionXS(devices::orion_xs::parse(model_id, &decrypted)?),
        BatterySense => {
            Reading::BatterySense(devices::battery_sense::parse(model_id, &decrypted)?)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_to_end_parse_resolves_battery_monitor() {
        let raw = hex::decode("100289a302b040af925d09a4d89aa0128bdef48c6298a9").unwrap();
        let key = DeviceKey::from_hex("aff4d0995b7d1e176c0c33ecb9e70dcd").unwrap();
        let reading = parse(&raw, &key).unwrap();
        assert!(matches!(reading, Reading::BatteryMonitor(_)));
        assert_eq!(reading.model_id(), 0xA389);
        assert_eq!(reading.model_name(), "SmartShunt 500A/50mV");
    }

    #[test]
    fn detect_device_type_does_not_require_a_key() {
        let raw = hex::decode("100289a302b040af925d09a4d89aa0128bdef48c6298a9").unwrap();
        assert_eq!(
            detect_device_type(&raw).unwrap(),
            DeviceKind::BatteryMonitor
        );
    }
}
