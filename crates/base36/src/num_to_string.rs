//! Integer to base-36 string conversion.

use crate::ALPHABET;

/// Renders `num` as lowercase base-36 digits, with no padding.
pub fn num_to_string(num: u64) -> String {
    if num == 0 {
        return "0".to_string();
    }
    let alphabet = ALPHABET.as_bytes();
    let mut digits = Vec::new();
    let mut n = num;
    while n > 0 {
        digits.push(alphabet[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    // Digits come from ALPHABET, so the buffer is valid ASCII.
    String::from_utf8(digits).unwrap_or_default()
}
