use serde::{Deserialize, Serialize};

use crate::devices::{
    AcChargerReading, BatteryMonitorReading, BatterySenseReading, DcDcConverterReading,
    DcEnergyMeterReading, InverterReading, LynxSmartBMSReading, MultiRSReading, OrionXSReading,
    SmartBatteryProtectReading, SmartLithiumReading, SolarChargerReading, VEBusReading,
};

/// A fully decoded Instant Readout payload.
///
/// One variant per device kind; there is no shared base type, since the
/// fields a caller cares about (and their scaling) differ per device.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "device_kind")]
pub enum Reading {
    SolarCharger(SolarChargerReading),
    BatteryMonitor(BatteryMonitorReading),
    Inverter(InverterReading),
    DcDcConverter(DcDcConverterReading),
    SmartLithium(SmartLithiumReading),
    AcCharger(AcChargerReading),
    SmartBatteryProtect(SmartBatteryProtectReading),
    LynxSmartBMS(LynxSmartBMSReading),
    MultiRS(MultiRSReading),
    VEBus(VEBusReading),
    DcEnergyMeter(DcEnergyMeterReading),
    OrionXS(OrionXSReading),
    BatterySense(BatterySenseReading),
}

impl Reading {
    /// The raw Victron model id this reading was decoded against.
    pub fn model_id(&self) -> u16 {
        match self {
            Reading::SolarCharger(r) => r.model_id,
            Reading::BatteryMonitor(r) => r.model_id,
            Reading::Inverter(r) => r.model_id,
            Reading::DcDcConverter(r) => r.model_id,
            Reading::SmartLithium(r) => r.model_id,
            Reading::AcCharger(r) => r.model_id,
            Reading::SmartBatteryProtect(r) => r.model_id,
            Reading::LynxSmartBMS(r) => r.model_id,
            Reading::MultiRS(r) => r.model_id,
            Reading::VEBus(r) => r.model_id,
            Reading::DcEnergyMeter(r) => r.model_id,
            Reading::OrionXS(r) => r.model_id,
            Reading::BatterySense(r) => r.model_id,
        }
    }

    /// The human-readable product name for [`Reading::model_id`].
    pub fn model_name(&self) -> String {
        crate::model::model_name(self.model_id())
    }
}
