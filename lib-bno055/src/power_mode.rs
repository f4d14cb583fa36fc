/// Power mode of the BNO055 (datasheet section 3.2, table 3-1).
///
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PowerMode {
    #[default]
    Normal = 0x00,
    LowPower = 0x01,
    Suspend = 0x02,
}

impl PowerMode {
    pub fn as_register(&self) -> u8 {
        (*self) as u8
    }
}

impl TryFrom<u8> for PowerMode {
    /// The rejected register value.
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x00 => Ok(Self::Normal),
            0x01 => Ok(Self::LowPower),
            0x02 => Ok(Self::Suspend),
            _ => Err(value),
        }
    }
}
