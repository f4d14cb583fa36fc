use core::fmt;

use crate::OperatingMode;

/// All errors the driver can return, `E` is the error type of the I2C bus.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E>
{
    /// The bus transaction failed (NACK, timeout, device absent, ...).
    Transport(E),
    /// `CHIP_ID` did not read back as [`crate::BNO055_CHIP_ID`], contains the value found.
    IdentityMismatch(u8),
    /// `OPR_MODE` held a value that is not an operating mode.
    InvalidMode(u8),
    /// `PWR_MODE` held a value that is not a power mode.
    InvalidPowerMode(u8),
    /// The device did not come back within the deadline after a system trigger.
    TriggerTimeout,
    /// The device did not report full calibration within the allowed number of polls.
    CalibrationTimeout,
    /// The operation needs the device to be in [`OperatingMode::Config`].
    NotInConfigMode(OperatingMode),
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "I2C transport error: {:?}", err),
            Self::IdentityMismatch(id) => write!(f, "Unexpected chip id {:#04x}, is this a BNO055?", id),
            Self::InvalidMode(value) => write!(f, "Invalid operating mode {:#04x}", value),
            Self::InvalidPowerMode(value) => write!(f, "Invalid power mode {:#04x}", value),
            Self::TriggerTimeout => write!(f, "Device did not come back after system trigger"),
            Self::CalibrationTimeout => write!(f, "Device did not finish calibrating in time"),
            Self::NotInConfigMode(mode) => write!(f, "Operation requires config mode, device is in {:?}", mode),
        }
    }
}
