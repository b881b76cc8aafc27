use bignum::{BigNum, ErrorCode};
use std::fmt::Write;

#[test]
fn canonical_literals_round_trip() {
    let literals = [
        "0",
        "1",
        "10",
        "999999999",
        "1000000000",
        "1000000001",
        "18446744073709551615",
        "-1",
        "-999999999999999999",
        "-100000000000000000000000001",
    ];
    for literal in literals {
        let n: BigNum = literal.parse().unwrap();
        assert_eq!(n.to_string(), literal);
    }
}

#[test]
fn leading_zeros_are_stripped() {
    assert_eq!("007".parse::<BigNum>().unwrap().to_string(), "7");
    assert_eq!("-0042".parse::<BigNum>().unwrap().to_string(), "-42");
    assert_eq!("000".parse::<BigNum>().unwrap().to_string(), "0");
    assert_eq!(
        "00000000000000000000001".parse::<BigNum>().unwrap().to_string(),
        "1"
    );
}

#[test]
fn interior_limbs_render_fully_padded() {
    // One in the high limb, seven in the low limb: the low group must keep
    // its zero digits.
    let n: BigNum = "1000000007".parse().unwrap();
    assert_eq!(n.to_string(), "1000000007");

    let n: BigNum = "5000000000000000000000000001".parse().unwrap();
    assert_eq!(n.to_string(), "5000000000000000000000000001");
}

#[test]
fn empty_literal_is_rejected() {
    let err = "".parse::<BigNum>().unwrap_err();
    assert_eq!(*err.code(), ErrorCode::Empty);
    assert_eq!(err.to_string(), "cannot parse integer from empty string");
}

#[test]
fn lone_sign_is_rejected() {
    let err = "-".parse::<BigNum>().unwrap_err();
    assert_eq!(*err.code(), ErrorCode::LoneSign);
}

#[test]
fn non_digit_bytes_are_rejected() {
    let err = "12x34".parse::<BigNum>().unwrap_err();
    assert_eq!(*err.code(), ErrorCode::InvalidDigit(b'x'));
    assert_eq!(err.index(), 2);
    assert_eq!(err.to_string(), "invalid digit `x` at index 2");

    // An explicit plus sign is not part of the grammar.
    let err = "+7".parse::<BigNum>().unwrap_err();
    assert_eq!(*err.code(), ErrorCode::InvalidDigit(b'+'));
    assert_eq!(err.index(), 0);

    // Whitespace is not trimmed.
    assert!(" 7".parse::<BigNum>().is_err());
    assert!("7 ".parse::<BigNum>().is_err());
    assert!("1 2".parse::<BigNum>().is_err());
    assert!("12.5".parse::<BigNum>().is_err());

    // The reported index counts the sign byte.
    let err = "-12a".parse::<BigNum>().unwrap_err();
    assert_eq!(err.index(), 3);
}

#[test]
fn second_sign_is_rejected() {
    let err = "--1".parse::<BigNum>().unwrap_err();
    assert_eq!(*err.code(), ErrorCode::InvalidDigit(b'-'));
    assert_eq!(err.index(), 1);
}

#[test]
fn native_integer_conversions() {
    assert_eq!(BigNum::from(0_u8).to_string(), "0");
    assert_eq!(BigNum::from(-1_i8).to_string(), "-1");
    assert_eq!(BigNum::from(42_u16).to_string(), "42");
    assert_eq!(BigNum::from(-65_536_i32).to_string(), "-65536");
    assert_eq!(
        BigNum::from(i64::MIN),
        "-9223372036854775808".parse().unwrap()
    );
    assert_eq!(
        BigNum::from(u64::MAX),
        "18446744073709551615".parse().unwrap()
    );
    assert_eq!(
        BigNum::from(u128::MAX).to_string(),
        "340282366920938463463374607431768211455"
    );
    assert_eq!(BigNum::from(7_usize), BigNum::from(7_isize));
}

#[test]
fn renders_to_a_text_stream() {
    let n: BigNum = "-6541654885416548".parse().unwrap();
    let mut out = String::new();
    write!(out, "[{}]", n).unwrap();
    assert_eq!(out, "[-6541654885416548]");
}

#[test]
fn debug_shows_the_decimal_form() {
    let n: BigNum = "-12".parse().unwrap();
    assert_eq!(format!("{:?}", n), "BigNum(-12)");
}

#[test]
fn default_is_zero() {
    assert_eq!(BigNum::default(), "0".parse().unwrap());
    assert!(BigNum::default().is_zero());
}
