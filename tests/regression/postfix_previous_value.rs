// Postfix increment and decrement must both update the receiver and return
// the pre-mutation value.

use bignum::BigNum;

#[test]
fn postfix_increment_updates_and_returns_previous() {
    let mut n = BigNum::from(100000000000000_u64);
    let before = n.post_increment();
    assert_eq!(before.to_string(), "100000000000000");
    assert_eq!(n.to_string(), "100000000000001");
}

#[test]
fn postfix_decrement_updates_and_returns_previous() {
    let mut n = BigNum::from(100000000000001_u64);
    let before = n.post_decrement();
    assert_eq!(before.to_string(), "100000000000001");
    assert_eq!(n.to_string(), "100000000000000");
}
