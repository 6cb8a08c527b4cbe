//! Tests for base-36 parsing (parse_num).

use easysync_base36::{num_to_string, parse_num, Base36Error};

#[test]
fn single_digits() {
    assert_eq!(parse_num("0").unwrap(), 0);
    assert_eq!(parse_num("9").unwrap(), 9);
    assert_eq!(parse_num("a").unwrap(), 10);
    assert_eq!(parse_num("z").unwrap(), 35);
}

#[test]
fn multi_digit() {
    assert_eq!(parse_num("10").unwrap(), 36);
    assert_eq!(parse_num("1z").unwrap(), 71);
    assert_eq!(parse_num("zz").unwrap(), 1295);
    assert_eq!(parse_num("100").unwrap(), 1296);
}

#[test]
fn leading_zeros() {
    assert_eq!(parse_num("007").unwrap(), 7);
    assert_eq!(parse_num("0010").unwrap(), 36);
}

#[test]
fn rejects_empty() {
    assert_eq!(parse_num(""), Err(Base36Error::Empty));
}

#[test]
fn rejects_uppercase() {
    assert_eq!(parse_num("A"), Err(Base36Error::InvalidDigit('A')));
    assert_eq!(parse_num("1Z"), Err(Base36Error::InvalidDigit('Z')));
}

#[test]
fn rejects_signs_and_whitespace() {
    assert_eq!(parse_num("+3"), Err(Base36Error::InvalidDigit('+')));
    assert_eq!(parse_num("-3"), Err(Base36Error::InvalidDigit('-')));
    assert_eq!(parse_num(" 3"), Err(Base36Error::InvalidDigit(' ')));
}

#[test]
fn u64_max_fits() {
    assert_eq!(parse_num("3w5e11264sgsf").unwrap(), u64::MAX);
}

#[test]
fn overflow_is_rejected() {
    // 36^13 - 1 > u64::MAX
    assert_eq!(parse_num("zzzzzzzzzzzzz"), Err(Base36Error::Overflow));
    assert_eq!(parse_num("3w5e11264sgsg"), Err(Base36Error::Overflow));
}

#[test]
fn roundtrips_with_num_to_string() {
    for n in [0, 1, 35, 36, 71, 1295, 1296, 123_456_789, u64::MAX] {
        assert_eq!(parse_num(&num_to_string(n)).unwrap(), n);
    }
}
