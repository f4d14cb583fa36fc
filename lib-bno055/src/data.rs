/// Three axis measurement in physical units, the unit depends on the reader that produced it
/// and on the current [`crate::UnitSelection`].
///
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector
{
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<[f32; 3]> for Vector {
    fn from(values: [f32; 3]) -> Self {
        Self {
            x: values[0],
            y: values[1],
            z: values[2],
        }
    }
}

impl Vector
{
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vector { x, y, z }
    }

    /// Calculate the length/magnitude of the vector
    ///
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// Approximate equality check with a given tolerance.
    pub fn approx_eq(&self, other: &Vector, tol: f32) -> bool {
        libm::fabsf(self.x - other.x) <= tol
            && libm::fabsf(self.y - other.y) <= tol
            && libm::fabsf(self.z - other.z) <= tol
    }
}

/// Orientation quaternion as computed by the fusion algorithm, unitless.
///
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Quaternion
{
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<[f32; 4]> for Quaternion {
    fn from(values: [f32; 4]) -> Self {
        Self {
            w: values[0],
            x: values[1],
            y: values[2],
            z: values[3],
        }
    }
}

impl Quaternion
{
    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Quaternion { w, x, y, z }
    }

    /// Get the magnitude of the quaternion, the fusion output should always be close to 1.
    ///
    #[inline]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z)
    }
}

/// Fused orientation in the order the BNO055 stores it (`EUL_HEADING`, `EUL_ROLL`, `EUL_PITCH`).
///
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EulerAngles
{
    pub heading: f32,
    pub roll: f32,
    pub pitch: f32,
}

impl EulerAngles
{
    pub const fn new(heading: f32, roll: f32, pitch: f32) -> Self {
        EulerAngles { heading, roll, pitch }
    }

    /// Approximate equality check with a given tolerance.
    pub fn approx_eq(&self, other: &Self, tol: f32) -> bool {
        libm::fabsf(self.heading - other.heading) <= tol
            && libm::fabsf(self.roll - other.roll) <= tol
            && libm::fabsf(self.pitch - other.pitch) <= tol
    }
}

/// Number of bytes spanned by the offset and radius registers (`ACC_OFFSET_X_LSB` up to and
/// including `MAG_RADIUS_MSB`).
pub const SENSOR_OFFSETS_SIZE: usize = 22;

/// Raw calibration profile, i.e. the contents of the offset and radius registers. These are only
/// stored and restored by this crate, never computed.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SensorOffsets
{
    pub accel: [i16; 3],
    pub mag: [i16; 3],
    pub gyro: [i16; 3],
    pub accel_radius: i16,
    pub mag_radius: i16,
}

impl SensorOffsets
{
    pub fn from_bytes(bytes: &[u8; SENSOR_OFFSETS_SIZE]) -> Self {
        let values: [i16; SENSOR_OFFSETS_SIZE / 2] = crate::utils::decode_i16s(bytes);
        SensorOffsets {
            accel: [values[0], values[1], values[2]],
            mag: [values[3], values[4], values[5]],
            gyro: [values[6], values[7], values[8]],
            accel_radius: values[9],
            mag_radius: values[10],
        }
    }

    pub fn as_bytes(&self) -> [u8; SENSOR_OFFSETS_SIZE] {
        let values = [
            self.accel[0], self.accel[1], self.accel[2],
            self.mag[0], self.mag[1], self.mag[2],
            self.gyro[0], self.gyro[1], self.gyro[2],
            self.accel_radius,
            self.mag_radius,
        ];
        let mut bytes = [0u8; SENSOR_OFFSETS_SIZE];
        crate::utils::encode_i16s(&values, &mut bytes);
        bytes
    }
}
