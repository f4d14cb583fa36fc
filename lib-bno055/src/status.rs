use core::fmt;

/// Contents of the `SYS_STATUS` register (datasheet section 4.3.58).
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemStatus {
    Idle,
    SystemError,
    PeripheralsInit,
    SystemInit,
    ExecutingSelftest,
    FusionRunning,
    NoFusionRunning,
    /// Value not documented in the datasheet.
    Unknown(u8),
}

impl SystemStatus {
    pub fn from_register(value: u8) -> Self {
        match value {
            0x00 => Self::Idle,
            0x01 => Self::SystemError,
            0x02 => Self::PeripheralsInit,
            0x03 => Self::SystemInit,
            0x04 => Self::ExecutingSelftest,
            0x05 => Self::FusionRunning,
            0x06 => Self::NoFusionRunning,
            other => Self::Unknown(other),
        }
    }
}

impl fmt::Display for SystemStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::SystemError => write!(f, "error"),
            Self::PeripheralsInit => write!(f, "peripherals initializing"),
            Self::SystemInit => write!(f, "system initializing"),
            Self::ExecutingSelftest => write!(f, "executing selftest"),
            Self::FusionRunning => write!(f, "fusion algorithm running"),
            Self::NoFusionRunning => write!(f, "no-fusion algorithm running"),
            Self::Unknown(value) => write!(f, "unknown ({:#04x})", value),
        }
    }
}

/// Contents of the `SYS_ERR` register (datasheet section 4.3.59), only meaningful while
/// `SYS_STATUS` reads [`SystemStatus::SystemError`].
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemError {
    NoError,
    PeripheralInit,
    SystemInit,
    SelftestFailed,
    RegisterValueOutOfRange,
    RegisterAddressOutOfRange,
    RegisterWrite,
    LowPowerModeUnavailable,
    AccelPowerModeUnavailable,
    FusionConfiguration,
    SensorConfiguration,
    /// Value not documented in the datasheet.
    Unknown(u8),
}

impl SystemError {
    pub fn from_register(value: u8) -> Self {
        match value {
            0x00 => Self::NoError,
            0x01 => Self::PeripheralInit,
            0x02 => Self::SystemInit,
            0x03 => Self::SelftestFailed,
            0x04 => Self::RegisterValueOutOfRange,
            0x05 => Self::RegisterAddressOutOfRange,
            0x06 => Self::RegisterWrite,
            0x07 => Self::LowPowerModeUnavailable,
            0x08 => Self::AccelPowerModeUnavailable,
            0x09 => Self::FusionConfiguration,
            0x0A => Self::SensorConfiguration,
            other => Self::Unknown(other),
        }
    }
}

impl fmt::Display for SystemError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NoError => write!(f, "no error"),
            Self::PeripheralInit => write!(f, "peripheral initialization error"),
            Self::SystemInit => write!(f, "system initialization error"),
            Self::SelftestFailed => write!(f, "selftest failed"),
            Self::RegisterValueOutOfRange => write!(f, "register value out of range"),
            Self::RegisterAddressOutOfRange => write!(f, "register address out of range"),
            Self::RegisterWrite => write!(f, "register write error"),
            Self::LowPowerModeUnavailable => write!(f, "low power mode unavailable"),
            Self::AccelPowerModeUnavailable => write!(f, "accelerometer power mode unavailable"),
            Self::FusionConfiguration => write!(f, "fusion algorithm configuration error"),
            Self::SensorConfiguration => write!(f, "sensor configuration error"),
            Self::Unknown(value) => write!(f, "unknown ({:#04x})", value),
        }
    }
}

/// Calibration state of each subsystem as found in `CALIB_STAT`, every counter is in `0..=3`
/// where 3 means fully calibrated.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CalibrationStatus {
    pub mag: u8,
    pub acc: u8,
    pub gyr: u8,
    pub sys: u8,
}

impl CalibrationStatus {
    pub const FULLY_CALIBRATED: u8 = 3;

    pub fn from_register(value: u8) -> Self {
        CalibrationStatus {
            mag: value & 0b11,
            acc: (value >> 2) & 0b11,
            gyr: (value >> 4) & 0b11,
            sys: (value >> 6) & 0b11,
        }
    }

    pub fn is_fully_calibrated(&self) -> bool {
        [self.mag, self.acc, self.gyr, self.sys]
            .iter()
            .all(|&counter| counter == Self::FULLY_CALIBRATED)
    }
}

/// Outcome of the power on self test as found in `ST_RESULT`, `true` means the part passed.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelftestResult {
    pub acc: bool,
    pub mag: bool,
    pub gyr: bool,
    pub mcu: bool,
}

impl SelftestResult {
    pub fn from_register(value: u8) -> Self {
        SelftestResult {
            acc: value & 0b0001 != 0,
            mag: value & 0b0010 != 0,
            gyr: value & 0b0100 != 0,
            mcu: value & 0b1000 != 0,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.acc && self.mag && self.gyr && self.mcu
    }
}

impl fmt::Display for SelftestResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let verdict = |passed: bool| if passed { "pass" } else { "fail" };
        write!(
            f,
            "acc={}, mag={}, gyr={}, mcu={}",
            verdict(self.acc), verdict(self.mag), verdict(self.gyr), verdict(self.mcu)
        )
    }
}

/// Snapshot of the system state. `error` is only read when the status says the system is in
/// error, `selftest` only when that error is a failed self test.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemReport {
    pub status: SystemStatus,
    pub error: Option<SystemError>,
    pub selftest: Option<SelftestResult>,
}

impl fmt::Display for SystemReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (self.error, self.selftest) {
            (None, _) => write!(f, "bno055 status: {}; no-error", self.status),
            (Some(SystemError::SelftestFailed), Some(result)) => {
                write!(f, "bno055 is in error: selftest failed with result: {}", result)
            }
            (Some(error), _) => write!(f, "bno055 is in error: {}", error),
        }
    }
}
