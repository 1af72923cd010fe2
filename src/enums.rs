//! Common enumerations shared across device payload parsers.
//!
//! Values are sourced from Victron's VE.Direct protocol documentation and
//! the Extra Manufacturer Data specification, as recorded in spec.md §6.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Charger/inverter operating state, shared by most device kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum OperationMode {
    Off = 0,
    LowPower = 1,
    Fault = 2,
    Bulk = 3,
    Absorption = 4,
    Float = 5,
    Storage = 6,
    EqualizeManual = 7,
    Inverting = 9,
    PowerSupply = 11,
    StartingUp = 245,
    RepeatedAbsorption = 246,
    Recondition = 247,
    BatterySafe = 248,
    Active = 249,
    ExternalControl = 252,
}

impl OperationMode {
    /// `0xFF` is the field's own "not available" sentinel (spec.md §6
    /// lists it as `NOT_AVAILABLE`), so it is handled by the caller's
    /// `Option` wrapping rather than as a constructible variant here.
    pub fn from_wire(value: u8) -> Option<Self> {
        use OperationMode::*;
        Some(match value {
            0 => Off,
            1 => LowPower,
            2 => Fault,
            3 => Bulk,
            4 => Absorption,
            5 => Float,
            6 => Storage,
            7 => EqualizeManual,
            9 => Inverting,
            11 => PowerSupply,
            245 => StartingUp,
            246 => RepeatedAbsorption,
            247 => Recondition,
            248 => BatterySafe,
            249 => Active,
            252 => ExternalControl,
            _ => return None,
        })
    }
}

/// The Multi RS family extends [`OperationMode`] with a few states of its
/// own (passthrough, assisting, sustain, blocked, test) that no other
/// device kind reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum MultiRsOperationMode {
    Off = 0,
    LowPower = 1,
    Fault = 2,
    Bulk = 3,
    Absorption = 4,
    Float = 5,
    Storage = 6,
    EqualizeManual = 7,
    Passthru = 8,
    Inverting = 9,
    Assisting = 10,
    PowerSupply = 11,
    Sustain = 244,
    StartingUp = 245,
    RepeatedAbsorption = 246,
    AutoEqualize = 247,
    BatterySafe = 248,
    LoadDetect = 249,
    Blocked = 250,
    Test = 251,
    ExternalControl = 252,
}

impl MultiRsOperationMode {
    /// `0xFF` is the field's own "not available" sentinel, handled by the
    /// caller's `Option` wrapping rather than as a constructible variant.
    pub fn from_wire(value: u8) -> Option<Self> {
        use MultiRsOperationMode::*;
        Some(match value {
            0 => Off,
            1 => LowPower,
            2 => Fault,
            3 => Bulk,
            4 => Absorption,
            5 => Float,
            6 => Storage,
            7 => EqualizeManual,
            8 => Passthru,
            9 => Inverting,
            10 => Assisting,
            11 => PowerSupply,
            244 => Sustain,
            245 => StartingUp,
            246 => RepeatedAbsorption,
            247 => AutoEqualize,
            248 => BatterySafe,
            249 => LoadDetect,
            250 => Blocked,
            251 => Test,
            252 => ExternalControl,
            _ => return None,
        })
    }
}

/// Charger/converter error codes, sourced from the VE.Direct protocol
/// document and Victron's published MPPT error-code list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum ChargerError {
    NoError = 0,
    TemperatureBatteryHigh = 1,
    VoltageHigh = 2,
    RemoteTemperatureA = 3,
    RemoteTemperatureB = 4,
    RemoteTemperatureC = 5,
    RemoteBatteryA = 6,
    RemoteBatteryB = 7,
    RemoteBatteryC = 8,
    HighRipple = 11,
    TemperatureBatteryLow = 14,
    TemperatureCharger = 17,
    OverCurrent = 18,
    BulkTime = 20,
    CurrentSensor = 21,
    InternalTemperatureA = 22,
    InternalTemperatureB = 23,
    Fan = 24,
    Overheated = 26,
    ShortCircuit = 27,
    ConverterIssue = 28,
    OverCharge = 29,
    InputVoltage = 33,
    InputCurrent = 34,
    InputPower = 35,
    InputShutdownVoltage = 38,
    InputShutdownCurrent = 39,
    InputShutdownFailure = 40,
    InverterShutdown41 = 41,
    InverterShutdown42 = 42,
    InverterShutdown43 = 43,
    InverterOverload = 50,
    InverterTemperature = 51,
    InverterPeakCurrent = 52,
    InverterOutputVoltageA = 53,
    InverterOutputVoltageB = 54,
    InverterSelfTestA = 55,
    InverterSelfTestB = 56,
    InverterAc = 57,
    InverterSelfTestC = 58,
    Communication = 65,
    Synchronisation = 66,
    Bms = 67,
    NetworkA = 68,
    NetworkB = 69,
    NetworkC = 70,
    NetworkD = 71,
    PvInputShutdown80 = 80,
    PvInputShutdown81 = 81,
    PvInputShutdown82 = 82,
    PvInputShutdown83 = 83,
    PvInputShutdown84 = 84,
    PvInputShutdown85 = 85,
    PvInputShutdown86 = 86,
    PvInputShutdown87 = 87,
    CpuTemperature = 114,
    CalibrationLost = 116,
    Firmware = 117,
    Settings = 119,
    TesterFail = 121,
    InternalDcVoltageA = 200,
    InternalDcVoltageB = 201,
    SelfTest = 202,
    InternalSupplyA = 203,
    InternalSupplyB = 205,
    InternalSupplyC = 212,
    InternalSupplyD = 215,
}

impl ChargerError {
    pub fn from_wire(value: u8) -> Option<Self> {
        use ChargerError::*;
        Some(match value {
            0 => NoError,
            1 => TemperatureBatteryHigh,
            2 => VoltageHigh,
            3 => RemoteTemperatureA,
            4 => RemoteTemperatureB,
            5 => RemoteTemperatureC,
            6 => RemoteBatteryA,
            7 => RemoteBatteryB,
            8 => RemoteBatteryC,
            11 => HighRipple,
            14 => TemperatureBatteryLow,
            17 => TemperatureCharger,
            18 => OverCurrent,
            20 => BulkTime,
            21 => CurrentSensor,
            22 => InternalTemperatureA,
            23 => InternalTemperatureB,
            24 => Fan,
            26 => Overheated,
            27 => ShortCircuit,
            28 => ConverterIssue,
            29 => OverCharge,
            33 => InputVoltage,
            34 => InputCurrent,
            35 => InputPower,
            38 => InputShutdownVoltage,
            39 => InputShutdownCurrent,
            40 => InputShutdownFailure,
            41 => InverterShutdown41,
            42 => InverterShutdown42,
            43 => InverterShutdown43,
            50 => InverterOverload,
            51 => InverterTemperature,
            52 => InverterPeakCurrent,
            53 => InverterOutputVoltageA,
            54 => InverterOutputVoltageB,
            55 => InverterSelfTestA,
            56 => InverterSelfTestB,
            57 => InverterAc,
            58 => InverterSelfTestC,
            65 => Communication,
            66 => Synchronisation,
            67 => Bms,
            68 => NetworkA,
            69 => NetworkB,
            70 => NetworkC,
            71 => NetworkD,
            80 => PvInputShutdown80,
            81 => PvInputShutdown81,
            82 => PvInputShutdown82,
            83 => PvInputShutdown83,
            84 => PvInputShutdown84,
            85 => PvInputShutdown85,
            86 => PvInputShutdown86,
            87 => PvInputShutdown87,
            114 => CpuTemperature,
            116 => CalibrationLost,
            117 => Firmware,
            119 => Settings,
            121 => TesterFail,
            200 => InternalDcVoltageA,
            201 => InternalDcVoltageB,
            202 => SelfTest,
            203 => InternalSupplyA,
            205 => InternalSupplyB,
            212 => InternalSupplyC,
            215 => InternalSupplyD,
            _ => return None,
        })
    }
}

bitflags! {
    /// Reasons a charger/converter output is currently off.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct OffReason: u32 {
        const NO_INPUT_POWER = 0x0000_0001;
        const SWITCHED_OFF_SWITCH = 0x0000_0002;
        const SWITCHED_OFF_REGISTER = 0x0000_0004;
        const REMOTE_INPUT = 0x0000_0008;
        const PROTECTION_ACTIVE = 0x0000_0010;
        const PAY_AS_YOU_GO_OUT_OF_CREDIT = 0x0000_0020;
        const BMS = 0x0000_0040;
        const ENGINE_SHUTDOWN = 0x0000_0080;
        const ANALYSING_INPUT_VOLTAGE = 0x0000_0100;
    }
}

bitflags! {
    /// Alarm condition flags, common to battery monitors, inverters, and
    /// protect devices.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct AlarmReason: u16 {
        const LOW_VOLTAGE = 1;
        const HIGH_VOLTAGE = 2;
        const LOW_SOC = 4;
        const LOW_STARTER_VOLTAGE = 8;
        const HIGH_STARTER_VOLTAGE = 16;
        const LOW_TEMPERATURE = 32;
        const HIGH_TEMPERATURE = 64;
        const MID_VOLTAGE = 128;
        const OVERLOAD = 256;
        const DC_RIPPLE = 512;
        const LOW_V_AC_OUT = 1024;
        const HIGH_V_AC_OUT = 2048;
        const SHORT_CIRCUIT = 4096;
        const BMS_LOCKOUT = 8192;
    }
}

/// A coarser alarm summary reported by VE.Bus devices: whether any alarm
/// is active and, if so, whether it's a warning or a hard alarm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum AlarmNotification {
    NoAlarm = 0,
    Warning = 1,
    Alarm = 2,
}

impl AlarmNotification {
    pub fn from_wire(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::NoAlarm),
            1 => Some(Self::Warning),
            2 => Some(Self::Alarm),
            _ => None,
        }
    }
}

/// Which of the two AC inputs (if any) is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum ACInState {
    AcIn1 = 0,
    AcIn2 = 1,
    NotConnected = 2,
}

impl ACInState {
    pub fn from_wire(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::AcIn1),
            1 => Some(Self::AcIn2),
            2 => Some(Self::NotConnected),
            _ => None,
        }
    }
}

/// The battery monitor's multiplexed auxiliary input channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum AuxMode {
    StarterVoltage = 0,
    MidpointVoltage = 1,
    Temperature = 2,
    Disabled = 3,
}

impl AuxMode {
    pub fn from_wire(value: u64) -> Option<Self> {
        match value {
            0 => Some(Self::StarterVoltage),
            1 => Some(Self::MidpointVoltage),
            2 => Some(Self::Temperature),
            3 => Some(Self::Disabled),
            _ => None,
        }
    }
}

/// What a DC energy meter's monitored circuit represents: a negative
/// value denotes a power source, a positive value a load. Range follows
/// the original `victron-ble` implementation (-9..8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i8)]
pub enum MeterType {
    SolarCharger = -9,
    WindCharger = -8,
    ShaftGenerator = -7,
    Alternator = -6,
    FuelCell = -5,
    WaterGenerator = -4,
    DcDcCharger = -3,
    AcCharger = -2,
    GenericSource = -1,
    GenericLoad = 1,
    ElectricDrive = 2,
    Fridge = 3,
    WaterPump = 4,
    BilgePump = 5,
    DcSystem = 6,
    Inverter = 7,
    WaterHeater = 8,
}

impl MeterType {
    pub fn from_wire(value: i16) -> Option<Self> {
        use MeterType::*;
        Some(match value {
            -9 => SolarCharger,
            -8 => WindCharger,
            -7 => ShaftGenerator,
            -6 => Alternator,
            -5 => FuelCell,
            -4 => WaterGenerator,
            -3 => DcDcCharger,
            -2 => AcCharger,
            -1 => GenericSource,
            1 => GenericLoad,
            2 => ElectricDrive,
            3 => Fridge,
            4 => WaterPump,
            5 => BilgePump,
            6 => DcSystem,
            7 => Inverter,
            8 => WaterHeater,
            _ => return None,
        })
    }
}

/// SmartLithium cell balancer status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum BalancerStatus {
    Unknown = 0,
    Balanced = 1,
    Balancing = 2,
    Imbalance = 3,
}

impl BalancerStatus {
    pub fn from_wire(value: u64) -> Option<Self> {
        match value {
            0 => Some(Self::Unknown),
            1 => Some(Self::Balanced),
            2 => Some(Self::Balancing),
            3 => Some(Self::Imbalance),
            _ => None,
        }
    }
}

/// Smart BatteryProtect output relay state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum OutputState {
    On = 1,
    Off = 4,
}

impl OutputState {
    pub fn from_wire(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::On),
            4 => Some(Self::Off),
            _ => None,
        }
    }
}
