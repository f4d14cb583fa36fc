/// Page 0 register map of the BNO055 (datasheet section 4.2.1, table 4-2).
///
/// Multi byte quantities are stored little endian, i.e. the `_LSB` register directly precedes
/// its `_MSB` register, so a block read starting at the `_LSB` register yields the bytes in
/// the order expected by `utils::decode_i16s`.
///
#[repr(u8)]
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Register {
    CHIP_ID = 0x00,          // read-only, fixed value `0xA0`
    ACC_ID = 0x01,           // read-only, fixed value `0xFB`
    MAG_ID = 0x02,           // read-only, fixed value `0x32`
    GYR_ID = 0x03,           // read-only, fixed value `0x0F`
    SW_REV_ID_LSB = 0x04,
    SW_REV_ID_MSB = 0x05,
    BL_REV_ID = 0x06,
    PAGE_ID = 0x07,

    ACC_DATA_X_LSB = 0x08,
    ACC_DATA_X_MSB = 0x09,
    ACC_DATA_Y_LSB = 0x0A,
    ACC_DATA_Y_MSB = 0x0B,
    ACC_DATA_Z_LSB = 0x0C,
    ACC_DATA_Z_MSB = 0x0D,

    MAG_DATA_X_LSB = 0x0E,
    MAG_DATA_X_MSB = 0x0F,
    MAG_DATA_Y_LSB = 0x10,
    MAG_DATA_Y_MSB = 0x11,
    MAG_DATA_Z_LSB = 0x12,
    MAG_DATA_Z_MSB = 0x13,

    GYR_DATA_X_LSB = 0x14,
    GYR_DATA_X_MSB = 0x15,
    GYR_DATA_Y_LSB = 0x16,
    GYR_DATA_Y_MSB = 0x17,
    GYR_DATA_Z_LSB = 0x18,
    GYR_DATA_Z_MSB = 0x19,

    EUL_HEADING_LSB = 0x1A,
    EUL_HEADING_MSB = 0x1B,
    EUL_ROLL_LSB = 0x1C,
    EUL_ROLL_MSB = 0x1D,
    EUL_PITCH_LSB = 0x1E,
    EUL_PITCH_MSB = 0x1F,

    QUA_DATA_W_LSB = 0x20,
    QUA_DATA_W_MSB = 0x21,
    QUA_DATA_X_LSB = 0x22,
    QUA_DATA_X_MSB = 0x23,
    QUA_DATA_Y_LSB = 0x24,
    QUA_DATA_Y_MSB = 0x25,
    QUA_DATA_Z_LSB = 0x26,
    QUA_DATA_Z_MSB = 0x27,

    LIA_DATA_X_LSB = 0x28,
    LIA_DATA_X_MSB = 0x29,
    LIA_DATA_Y_LSB = 0x2A,
    LIA_DATA_Y_MSB = 0x2B,
    LIA_DATA_Z_LSB = 0x2C,
    LIA_DATA_Z_MSB = 0x2D,

    GRV_DATA_X_LSB = 0x2E,
    GRV_DATA_X_MSB = 0x2F,
    GRV_DATA_Y_LSB = 0x30,
    GRV_DATA_Y_MSB = 0x31,
    GRV_DATA_Z_LSB = 0x32,
    GRV_DATA_Z_MSB = 0x33,

    TEMP = 0x34,
    CALIB_STAT = 0x35,       // [7:6] SYS, [5:4] GYR, [3:2] ACC, [1:0] MAG
    ST_RESULT = 0x36,        // [3] MCU, [2] GYR, [1] MAG, [0] ACC
    INT_STA = 0x37,
    SYS_CLK_STATUS = 0x38,
    SYS_STATUS = 0x39,
    SYS_ERR = 0x3A,
    UNIT_SEL = 0x3B,         // [7] ORI, [4] TEMP, [2] EUL, [1] GYR, [0] ACC

    OPR_MODE = 0x3D,
    PWR_MODE = 0x3E,
    SYS_TRIGGER = 0x3F,      // [7] CLK_SEL, [6] RST_INT, [5] RST_SYS, [0] SELF_TEST
    TEMP_SOURCE = 0x40,
    AXIS_MAP_CONFIG = 0x41,
    AXIS_MAP_SIGN = 0x42,

    ACC_OFFSET_X_LSB = 0x55,
    ACC_OFFSET_X_MSB = 0x56,
    ACC_OFFSET_Y_LSB = 0x57,
    ACC_OFFSET_Y_MSB = 0x58,
    ACC_OFFSET_Z_LSB = 0x59,
    ACC_OFFSET_Z_MSB = 0x5A,

    MAG_OFFSET_X_LSB = 0x5B,
    MAG_OFFSET_X_MSB = 0x5C,
    MAG_OFFSET_Y_LSB = 0x5D,
    MAG_OFFSET_Y_MSB = 0x5E,
    MAG_OFFSET_Z_LSB = 0x5F,
    MAG_OFFSET_Z_MSB = 0x60,

    GYR_OFFSET_X_LSB = 0x61,
    GYR_OFFSET_X_MSB = 0x62,
    GYR_OFFSET_Y_LSB = 0x63,
    GYR_OFFSET_Y_MSB = 0x64,
    GYR_OFFSET_Z_LSB = 0x65,
    GYR_OFFSET_Z_MSB = 0x66,

    ACC_RADIUS_LSB = 0x67,
    ACC_RADIUS_MSB = 0x68,
    MAG_RADIUS_LSB = 0x69,
    MAG_RADIUS_MSB = 0x6A,
}

impl Register {
    /// The byte address of this register inside page 0.
    ///
    #[inline]
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

impl From<Register> for u8 {
    fn from(register: Register) -> Self {
        register.addr()
    }
}
