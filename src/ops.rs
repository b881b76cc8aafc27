//! Operator overloads wiring `BigNum` arithmetic into `core::ops`.
//!
//! Each binary operator has a reference-based core impl; the owned and
//! mixed receiver forms forward to it, and every compound-assignment form
//! is defined purely in terms of the corresponding binary operator.

use crate::bignum::BigNum;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Sub, SubAssign};

/// Sum of two values.
///
/// ```
/// use bignum::BigNum;
///
/// let a: BigNum = "6541654885416548".parse().unwrap();
/// let b: BigNum = "486486584756989".parse().unwrap();
/// assert_eq!((&a + &b).to_string(), "7028141470173537");
/// ```
impl Add<&BigNum> for &BigNum {
    type Output = BigNum;

    fn add(self, rhs: &BigNum) -> BigNum {
        BigNum::add_values(self, rhs)
    }
}

/// Difference of two values.
///
/// ```
/// use bignum::BigNum;
///
/// let a: BigNum = "6541654885416548".parse().unwrap();
/// let b: BigNum = "486486584756989".parse().unwrap();
/// assert_eq!((&a - &b).to_string(), "6055168300659559");
/// assert_eq!((&b - &a).to_string(), "-6055168300659559");
/// ```
impl Sub<&BigNum> for &BigNum {
    type Output = BigNum;

    fn sub(self, rhs: &BigNum) -> BigNum {
        BigNum::sub_values(self, rhs)
    }
}

/// Product of two values, non-negative iff the operand signs match.
///
/// ```
/// use bignum::BigNum;
///
/// let a = BigNum::from(-3);
/// let b = BigNum::from(4);
/// assert_eq!(&a * &b, BigNum::from(-12));
/// ```
impl Mul<&BigNum> for &BigNum {
    type Output = BigNum;

    fn mul(self, rhs: &BigNum) -> BigNum {
        BigNum::mul_values(self, rhs)
    }
}

/// Quotient truncated toward zero: the magnitude quotient, non-negative iff
/// the operand signs match.
///
/// ```
/// use bignum::BigNum;
///
/// let a: BigNum = "6541654885416548".parse().unwrap();
/// let b: BigNum = "486486584756989".parse().unwrap();
/// assert_eq!(&a / &b, BigNum::from(13));
/// ```
///
/// # Panics
///
/// Panics if `rhs` is zero.
impl Div<&BigNum> for &BigNum {
    type Output = BigNum;

    fn div(self, rhs: &BigNum) -> BigNum {
        self.div_rem_values(rhs).0
    }
}

/// Remainder of the operand magnitudes; never negative, regardless of
/// either operand's sign.
///
/// ```
/// use bignum::BigNum;
///
/// assert_eq!(BigNum::from(-7) % BigNum::from(2), BigNum::from(1));
/// assert_eq!(BigNum::from(7) % BigNum::from(-2), BigNum::from(1));
/// ```
///
/// # Panics
///
/// Panics if `rhs` is zero.
impl Rem<&BigNum> for &BigNum {
    type Output = BigNum;

    fn rem(self, rhs: &BigNum) -> BigNum {
        self.div_rem_values(rhs).1
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident) => {
        impl $imp<BigNum> for BigNum {
            type Output = BigNum;

            fn $method(self, rhs: BigNum) -> BigNum {
                $imp::$method(&self, &rhs)
            }
        }

        impl $imp<&BigNum> for BigNum {
            type Output = BigNum;

            fn $method(self, rhs: &BigNum) -> BigNum {
                $imp::$method(&self, rhs)
            }
        }

        impl $imp<BigNum> for &BigNum {
            type Output = BigNum;

            fn $method(self, rhs: BigNum) -> BigNum {
                $imp::$method(self, &rhs)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);
forward_binop!(Div, div);
forward_binop!(Rem, rem);

macro_rules! forward_assign {
    ($imp:ident, $method:ident, $binop:ident, $binmethod:ident) => {
        impl $imp<BigNum> for BigNum {
            fn $method(&mut self, rhs: BigNum) {
                *self = $binop::$binmethod(&*self, &rhs);
            }
        }

        impl $imp<&BigNum> for BigNum {
            fn $method(&mut self, rhs: &BigNum) {
                *self = $binop::$binmethod(&*self, rhs);
            }
        }
    };
}

forward_assign!(AddAssign, add_assign, Add, add);
forward_assign!(SubAssign, sub_assign, Sub, sub);
forward_assign!(MulAssign, mul_assign, Mul, mul);
forward_assign!(DivAssign, div_assign, Div, div);
forward_assign!(RemAssign, rem_assign, Rem, rem);
