//! Tests for base-36 rendering (num_to_string).

use easysync_base36::num_to_string;

#[test]
fn zero() {
    assert_eq!(num_to_string(0), "0");
}

#[test]
fn single_digits() {
    assert_eq!(num_to_string(9), "9");
    assert_eq!(num_to_string(10), "a");
    assert_eq!(num_to_string(35), "z");
}

#[test]
fn multi_digit() {
    assert_eq!(num_to_string(36), "10");
    assert_eq!(num_to_string(71), "1z");
    assert_eq!(num_to_string(1295), "zz");
    assert_eq!(num_to_string(1296), "100");
}

#[test]
fn u64_max() {
    assert_eq!(num_to_string(u64::MAX), "3w5e11264sgsf");
}

#[test]
fn no_padding() {
    assert_eq!(num_to_string(1), "1");
    assert!(!num_to_string(36).starts_with('0'));
}
