/// Operating mode of the BNO055, this selects which sensors are powered and whether the on chip
/// fusion algorithm is running (datasheet section 3.3, table 3-5).
///
/// Only `Config` allows writing to the configuration registers (offsets, axis remap, ...). All
/// other modes ignore such writes.
///
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperatingMode {
    #[default]
    Config = 0x00,

    // Non-fusion modes (section 3.3.2)
    AccOnly = 0x01,
    MagOnly = 0x02,
    GyroOnly = 0x03,
    AccMag = 0x04,
    AccGyro = 0x05,
    MagGyro = 0x06,
    Amg = 0x07,

    // Fusion modes (section 3.3.3)
    Imu = 0x08,
    Compass = 0x09,
    M4g = 0x0A,
    NdofFmcOff = 0x0B,
    Ndof = 0x0C,
}

impl OperatingMode {

    /// Converts the mode into the bits one would need to write into the `OPR_MODE` register.
    ///
    pub fn as_register(&self) -> u8 {
        (*self) as u8
    }

    /// Checks if the on chip sensor fusion algorithm runs in this mode, i.e. if the Euler,
    /// quaternion, linear acceleration and gravity registers hold meaningful data.
    ///
    pub fn is_fusion(&self) -> bool {
        self.as_register() >= OperatingMode::Imu.as_register()
    }
}

impl TryFrom<u8> for OperatingMode {
    /// The rejected register value.
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0x00 => Self::Config,
            0x01 => Self::AccOnly,
            0x02 => Self::MagOnly,
            0x03 => Self::GyroOnly,
            0x04 => Self::AccMag,
            0x05 => Self::AccGyro,
            0x06 => Self::MagGyro,
            0x07 => Self::Amg,
            0x08 => Self::Imu,
            0x09 => Self::Compass,
            0x0A => Self::M4g,
            0x0B => Self::NdofFmcOff,
            0x0C => Self::Ndof,
            _ => return Err(value),
        })
    }
}
