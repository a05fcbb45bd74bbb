//! Binary-coded decimal packing.

/// Convert a binary value to packed BCD using double-dabble.
///
/// Eight shift iterations; before every shift except the last, any
/// nibble above 4 in the working window is corrected by adding 3
/// (thresholds `0x4FF` and `0x4FFF` on the shifted accumulator). The
/// tens digit lands in the high nibble, the units digit in the low one.
///
/// Meaningful for inputs 0-99. The result for larger inputs is
/// unspecified: the correction window does not cover a hundreds digit.
pub fn bcd(value: u8) -> u8 {
    let mut acc = u32::from(value);
    for i in 0..8 {
        acc <<= 1;
        if i == 7 {
            break;
        }
        if (acc & 0xF00) > 0x4FF {
            acc += 0x300;
        }
        if (acc & 0xF000) > 0x4FFF {
            acc += 0x3000;
        }
    }
    ((acc >> 8) & 0xFF) as u8
}
