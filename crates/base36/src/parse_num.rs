//! Base-36 string to integer conversion.

use crate::Base36Error;

/// Parses a run of lowercase base-36 digits into a `u64`.
///
/// Only `0-9a-z` are accepted; uppercase letters, signs, and whitespace are
/// rejected, unlike `u64::from_str_radix`.
pub fn parse_num(digits: &str) -> Result<u64, Base36Error> {
    if digits.is_empty() {
        return Err(Base36Error::Empty);
    }
    let mut num: u64 = 0;
    for c in digits.chars() {
        let digit = match c {
            '0'..='9' => c as u64 - '0' as u64,
            'a'..='z' => c as u64 - 'a' as u64 + 10,
            _ => return Err(Base36Error::InvalidDigit(c)),
        };
        num = num
            .checked_mul(36)
            .and_then(|n| n.checked_add(digit))
            .ok_or(Base36Error::Overflow)?;
    }
    Ok(num)
}
