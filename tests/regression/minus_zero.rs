// A literal negative zero must normalize to positive zero rather than
// producing a sign-distinct value that breaks `0 == -0`.

use bignum::BigNum;

#[test]
fn negative_zero_normalizes() {
    let zero: BigNum = "-0".parse().unwrap();
    assert_eq!(zero, "0".parse().unwrap());
    assert_eq!(zero.to_string(), "0");

    let zero: BigNum = "-0000".parse().unwrap();
    assert_eq!(zero.to_string(), "0");
    assert!(!(zero < "0".parse().unwrap()));
    assert!(!(zero > "0".parse().unwrap()));
}

#[test]
fn arithmetic_never_produces_negative_zero() {
    let zero = BigNum::from(-7) + BigNum::from(7);
    assert_eq!(zero.to_string(), "0");

    let zero = BigNum::from(-7) - BigNum::from(-7);
    assert_eq!(zero.to_string(), "0");
}
