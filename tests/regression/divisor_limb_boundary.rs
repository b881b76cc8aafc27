// The single-limb divisor fast path and the general long division must
// agree at the limb-width boundary.

use bignum::BigNum;

#[test]
fn divisor_limb_boundary_agrees() {
    let a: BigNum = "123456789012345678901234567890".parse().unwrap();
    for divisor in ["999999999", "1000000000", "1000000001"] {
        let b: BigNum = divisor.parse().unwrap();
        let q = &a / &b;
        let r = &a % &b;
        assert_eq!(&q * &b + &r, a, "divisor {divisor}");
        assert!(r < b, "divisor {divisor}");
    }
}
