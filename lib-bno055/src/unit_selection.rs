/// Unit used for the accelerometer, linear acceleration and gravity vectors. (`UNIT_SEL` bit 0)
///
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccelUnit {
    #[default]
    MetersPerSecond2 = 0,
    MilliG = 1,
}

impl AccelUnit {
    /// Gets the sensitivity scale factor for the given unit (in LSB/unit).
    ///
    pub fn as_scale_factor(&self) -> f32 {
        match self {
            Self::MetersPerSecond2 => 100.0,
            Self::MilliG => 1.0,
        }
    }
}

/// Unit used for the gyroscope angular rate. (`UNIT_SEL` bit 1)
///
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngularRateUnit {
    #[default]
    DegreesPerSecond = 0,
    RadiansPerSecond = 1,
}

impl AngularRateUnit {
    /// Gets the sensitivity scale factor for the given unit (in LSB/unit).
    ///
    pub fn as_scale_factor(&self) -> f32 {
        match self {
            Self::DegreesPerSecond => 16.0,
            Self::RadiansPerSecond => 900.0,
        }
    }
}

/// Unit used for the fused Euler angles. (`UNIT_SEL` bit 2)
///
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EulerUnit {
    #[default]
    Degrees = 0,
    Radians = 1,
}

impl EulerUnit {
    /// Gets the sensitivity scale factor for the given unit (in LSB/unit).
    ///
    pub fn as_scale_factor(&self) -> f32 {
        match self {
            Self::Degrees => 16.0,
            Self::Radians => 900.0,
        }
    }
}

/// Unit used for the on chip temperature. (`UNIT_SEL` bit 4)
///
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemperatureUnit {
    #[default]
    Celsius = 0,
    Fahrenheit = 1,
}

impl TemperatureUnit {
    /// Gets the sensitivity scale factor for the given unit (in LSB/unit), note that in
    /// Fahrenheit a single LSB is worth 2 degrees.
    ///
    pub fn as_scale_factor(&self) -> f32 {
        match self {
            Self::Celsius => 1.0,
            Self::Fahrenheit => 0.5,
        }
    }
}

/// Sign convention of the pitch angle. (`UNIT_SEL` bit 7, datasheet section 3.6.2)
///
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrientationFormat {
    #[default]
    Windows = 0,
    Android = 1,
}

/// One unit family together with its new value, used to change exactly one family of a
/// [`UnitSelection`] without touching the others.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitField {
    Acceleration(AccelUnit),
    AngularRate(AngularRateUnit),
    Euler(EulerUnit),
    Temperature(TemperatureUnit),
    Orientation(OrientationFormat),
}

impl From<AccelUnit> for UnitField {
    fn from(unit: AccelUnit) -> Self {
        UnitField::Acceleration(unit)
    }
}

impl From<AngularRateUnit> for UnitField {
    fn from(unit: AngularRateUnit) -> Self {
        UnitField::AngularRate(unit)
    }
}

impl From<EulerUnit> for UnitField {
    fn from(unit: EulerUnit) -> Self {
        UnitField::Euler(unit)
    }
}

impl From<TemperatureUnit> for UnitField {
    fn from(unit: TemperatureUnit) -> Self {
        UnitField::Temperature(unit)
    }
}

impl From<OrientationFormat> for UnitField {
    fn from(format: OrientationFormat) -> Self {
        UnitField::Orientation(format)
    }
}

const ACC_BIT: u8 = 0;
const GYR_BIT: u8 = 1;
const EUL_BIT: u8 = 2;
const TEMP_BIT: u8 = 4;
const ORI_BIT: u8 = 7;

/// Bits 3, 5 and 6 of `UNIT_SEL` carry no unit.
const RESERVED_MASK: u8 = 0b0110_1000;

/// Contents of the `UNIT_SEL` register (datasheet section 3.6.1 and 4.3.60).
///
/// The value is a snapshot of the device configuration, changing it does nothing until it is
/// written back with [`crate::Bno055::write_unit_selection`]. Reserved bits are carried along
/// untouched so that writing back a value that was read never changes them.
///
/// ```
/// use lib_bno055::*;
///
/// let units = UnitSelection::default()
///     .with_orientation(OrientationFormat::Android)
///     .with_euler(EulerUnit::Radians)
///     .with_angular_rate(AngularRateUnit::RadiansPerSecond);
///
/// assert_eq!(units.as_register(), 0b1000_0110);
/// ```
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnitSelection {
    pub acceleration: AccelUnit,
    pub angular_rate: AngularRateUnit,
    pub euler: EulerUnit,
    pub temperature: TemperatureUnit,
    pub orientation: OrientationFormat,
    reserved: u8,
}

impl UnitSelection {

    /// Decodes the contents of the `UNIT_SEL` register, every byte is a valid selection.
    ///
    pub fn from_register(value: u8) -> Self {
        let bit = |n: u8| (value >> n) & 0b1 == 1;
        UnitSelection {
            acceleration: if bit(ACC_BIT) { AccelUnit::MilliG } else { AccelUnit::MetersPerSecond2 },
            angular_rate: if bit(GYR_BIT) { AngularRateUnit::RadiansPerSecond } else { AngularRateUnit::DegreesPerSecond },
            euler: if bit(EUL_BIT) { EulerUnit::Radians } else { EulerUnit::Degrees },
            temperature: if bit(TEMP_BIT) { TemperatureUnit::Fahrenheit } else { TemperatureUnit::Celsius },
            orientation: if bit(ORI_BIT) { OrientationFormat::Android } else { OrientationFormat::Windows },
            reserved: value & RESERVED_MASK,
        }
    }

    /// Converts the selection into the byte one would need to write into the `UNIT_SEL`
    /// register.
    ///
    pub fn as_register(&self) -> u8 {
        ((self.acceleration as u8) << ACC_BIT)
            | ((self.angular_rate as u8) << GYR_BIT)
            | ((self.euler as u8) << EUL_BIT)
            | ((self.temperature as u8) << TEMP_BIT)
            | ((self.orientation as u8) << ORI_BIT)
            | self.reserved
    }

    /// Returns a copy with exactly one unit family replaced.
    ///
    pub fn with(self, field: UnitField) -> Self {
        match field {
            UnitField::Acceleration(acceleration) => UnitSelection { acceleration, ..self },
            UnitField::AngularRate(angular_rate) => UnitSelection { angular_rate, ..self },
            UnitField::Euler(euler) => UnitSelection { euler, ..self },
            UnitField::Temperature(temperature) => UnitSelection { temperature, ..self },
            UnitField::Orientation(orientation) => UnitSelection { orientation, ..self },
        }
    }

    pub fn with_acceleration(self, unit: AccelUnit) -> Self {
        self.with(UnitField::Acceleration(unit))
    }

    pub fn with_angular_rate(self, unit: AngularRateUnit) -> Self {
        self.with(UnitField::AngularRate(unit))
    }

    pub fn with_euler(self, unit: EulerUnit) -> Self {
        self.with(UnitField::Euler(unit))
    }

    pub fn with_temperature(self, unit: TemperatureUnit) -> Self {
        self.with(UnitField::Temperature(unit))
    }

    pub fn with_orientation(self, format: OrientationFormat) -> Self {
        self.with(UnitField::Orientation(format))
    }

    /// Gets the current value of the family that `field` belongs to, wrapped the same way.
    ///
    pub fn field_like(&self, field: UnitField) -> UnitField {
        match field {
            UnitField::Acceleration(_) => self.acceleration.into(),
            UnitField::AngularRate(_) => self.angular_rate.into(),
            UnitField::Euler(_) => self.euler.into(),
            UnitField::Temperature(_) => self.temperature.into(),
            UnitField::Orientation(_) => self.orientation.into(),
        }
    }
}

impl From<u8> for UnitSelection {
    fn from(value: u8) -> Self {
        UnitSelection::from_register(value)
    }
}

impl From<UnitSelection> for u8 {
    fn from(units: UnitSelection) -> Self {
        units.as_register()
    }
}
