// A quotient or product that collapses to zero must come out non-negative
// even when the operand signs differ.

use bignum::BigNum;

#[test]
fn zero_quotient_is_non_negative() {
    let q = BigNum::from(-3) / BigNum::from(5);
    assert_eq!(q, BigNum::default());
    assert_eq!(q.to_string(), "0");

    let q = BigNum::from(3) / BigNum::from(-5);
    assert_eq!(q.to_string(), "0");

    // Same through the multi-limb division path.
    let small: BigNum = "-123".parse().unwrap();
    let big: BigNum = "123456789123456789".parse().unwrap();
    assert_eq!((&small / &big).to_string(), "0");
}

#[test]
fn zero_product_is_non_negative() {
    let p = BigNum::from(0) * BigNum::from(-5);
    assert_eq!(p, BigNum::default());
    assert_eq!(p.to_string(), "0");
}
