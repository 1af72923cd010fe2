//! One payload parser per Instant Readout device kind.
//!
//! Every parser takes the decrypted, zero-padded readout buffer and
//! produces a typed reading. Sentinel-to-absent mapping happens here,
//! once, so the rest of the crate never has to remember a raw magic
//! number.

pub mod ac_charger;
pub mod battery_monitor;
pub mod battery_sense;
pub mod dc_energy_meter;
pub mod dcdc_converter;
pub mod inverter;
pub mod lynx_smart_bms;
pub mod multirs;
pub mod orion_xs;
pub mod smart_battery_protect;
pub mod smart_lithium;
pub mod solar_charger;
pub mod vebus;

pub use ac_charger::{AcChargerOutput, AcChargerReading};
pub use battery_monitor::{AuxReading, BatteryMonitorReading};
pub use battery_sense::BatterySenseReading;
pub use dc_energy_meter::DcEnergyMeterReading;
pub use dcdc_converter::DcDcConverterReading;
pub use inverter::InverterReading;
pub use lynx_smart_bms::LynxSmartBMSReading;
pub use multirs::MultiRSReading;
pub use orion_xs::OrionXSReading;
pub use smart_battery_protect::SmartBatteryProtectReading;
pub use smart_lithium::SmartLithiumReading;
pub use solar_charger::SolarChargerReading;
pub use vebus::VEBusReading;

/// Converts a Kelvin reading (as the BitReader yields it, already scaled
/// by 0.01) into Celsius, rounded to 2 decimal places, matching the
/// original implementation's `kelvin_to_celsius`.
pub(crate) fn kelvin_to_celsius(kelvin: f64) -> f64 {
    ((kelvin - 273.15) * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kelvin_conversion_matches_reference_vector() {
        assert_eq!(kelvin_to_celsius(295.65), 22.5);
    }
}
