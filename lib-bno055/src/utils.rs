/// Decodes `N` little endian two's complement 16 bit integers from a register block, integer `i`
/// is made up of bytes `[2i, 2i+1]` (LSB register first).
///
/// The block must hold at least `2 * N` bytes.
///
#[inline]
pub(crate) fn decode_i16s<const N: usize>(bytes: &[u8]) -> [i16; N] {
    let mut values = [0i16; N];
    for (i, value) in values.iter_mut().enumerate() {
        *value = i16::from_le_bytes([bytes[i * 2], bytes[i * 2 + 1]]);
    }
    values
}

/// Inverse of [`decode_i16s`], writes `values` into `bytes` LSB first.
///
#[inline]
pub(crate) fn encode_i16s(values: &[i16], bytes: &mut [u8]) {
    for (i, value) in values.iter().enumerate() {
        let [lsb, msb] = value.to_le_bytes();
        bytes[i * 2] = lsb;
        bytes[i * 2 + 1] = msb;
    }
}

/// Single byte registers holding a signed quantity (i.e. `TEMP`).
///
#[inline]
pub(crate) fn decode_i8(byte: u8) -> i8 {
    i8::from_le_bytes([byte])
}

/// Converts raw register values into physical units, `lsb_per_unit` is the sensitivity of the
/// quantity in the currently selected unit.
///
#[inline]
pub(crate) fn scale<const N: usize>(raw: [i16; N], lsb_per_unit: f32) -> [f32; N] {
    raw.map(|value| value as f32 / lsb_per_unit)
}
