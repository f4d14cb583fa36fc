#![cfg_attr(not(test), no_std)]

//! Driver for the Bosch BNO055 9-axis absolute orientation sensor over I2C.
//!
//! The fusion itself runs on the chip, this crate only configures it and reads the results.

pub mod error;
pub use error::*;

pub mod registers;
pub use registers::Register;

pub mod unit_selection;
pub use unit_selection::*;

pub mod operating_mode;
pub use operating_mode::*;

pub mod power_mode;
pub use power_mode::*;

pub mod sys_trigger;
pub use sys_trigger::*;

pub mod status;
pub use status::*;

pub mod data;
pub use data::*;

pub mod bno055;
pub use bno055::*;

pub(crate) mod utils;


/// The chip identification code found in the `CHIP_ID` register of every BNO055.
///
pub const BNO055_CHIP_ID: u8 = 0xA0;

/// Delay between two identity polls while waiting for the device to come back after a system
/// trigger.
pub const TRIGGER_POLL_INTERVAL_MS: u32 = 50;

/// Delay between two polls of `CALIB_STAT` in [`Bno055::wait_until_calibrated`].
pub const CALIBRATION_POLL_INTERVAL_MS: u32 = 100;

/// I2C address of the BNO055, selected by the level of the COM3 pin.
///
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceAddress {
    /// COM3 low.
    #[default]
    Default = 0x28,
    /// COM3 high.
    Alternate = 0x29,
}

impl From<DeviceAddress> for u8 {
    fn from(address: DeviceAddress) -> Self {
        address as u8
    }
}
