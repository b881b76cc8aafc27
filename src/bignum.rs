//! The arbitrary-precision signed integer type.

use crate::error::{Error, ErrorCode, Result};
use crate::math::{self, large, small, Limb, BASE_DIGITS, KARATSUBA_CUTOFF};
use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt::{self, Debug, Display};
use core::str::FromStr;

/// An exact signed integer of unbounded magnitude.
///
/// The magnitude is stored as base-10<sup>9</sup> limbs, most significant
/// first, alongside a sign; zero always carries the non-negative sign and a
/// single zero limb. Every operation returns a value in that canonical
/// form, so derived equality and hashing see exactly one representation per
/// number.
///
/// Values are created by parsing a decimal string, converting a native
/// integer, or as the result of an arithmetic operation:
///
/// ```
/// use bignum::BigNum;
///
/// let parsed: BigNum = "-123456789123456789".parse().unwrap();
/// let converted = BigNum::from(-123456789123456789_i64);
/// assert_eq!(parsed, converted);
///
/// let squared = &parsed * &parsed;
/// assert_eq!(squared.to_string(), "15241578780673678515622620750190521");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigNum {
    /// Magnitude limbs, most significant first, each in `[0, BASE)`.
    limbs: Vec<Limb>,
    /// `true` for non-negative values. Zero is always non-negative.
    sign: bool,
}

impl BigNum {
    /// Returns `true` if `self` is zero.
    ///
    /// ```
    /// use bignum::BigNum;
    ///
    /// assert!(BigNum::default().is_zero());
    /// assert!(!BigNum::from(-3).is_zero());
    /// ```
    pub fn is_zero(&self) -> bool {
        self.limbs[..] == [0]
    }

    /// Adds one to `self` in place.
    pub fn increment(&mut self) {
        *self = Self::add_values(self, &Self::one());
    }

    /// Subtracts one from `self` in place.
    pub fn decrement(&mut self) {
        *self = Self::sub_values(self, &Self::one());
    }

    /// Adds one to `self` in place, returning the value held before the
    /// update.
    ///
    /// ```
    /// use bignum::BigNum;
    ///
    /// let mut n = BigNum::from(99_u8);
    /// assert_eq!(n.post_increment(), BigNum::from(99_u8));
    /// assert_eq!(n, BigNum::from(100_u8));
    /// ```
    pub fn post_increment(&mut self) -> BigNum {
        let previous = self.clone();
        self.increment();
        previous
    }

    /// Subtracts one from `self` in place, returning the value held before
    /// the update.
    pub fn post_decrement(&mut self) -> BigNum {
        let previous = self.clone();
        self.decrement();
        previous
    }

    fn one() -> BigNum {
        BigNum {
            sign: true,
            limbs: vec![1],
        }
    }

    /// Assembles a value from raw parts, normalizing the magnitude and
    /// forcing the non-negative sign onto zero.
    fn from_parts(sign: bool, mut limbs: Vec<Limb>) -> BigNum {
        small::normalize(&mut limbs);
        let sign = sign || limbs[..] == [0];
        BigNum { sign, limbs }
    }

    /// `self` with the sign dropped.
    fn magnitude(&self) -> BigNum {
        BigNum {
            sign: true,
            limbs: self.limbs.clone(),
        }
    }

    /// Multiply by `BASE^count` by appending zero limbs. Scaling zero is a
    /// no-op so the canonical single-limb form survives.
    fn scale_up(mut self, count: usize) -> BigNum {
        if !self.is_zero() {
            let len = self.limbs.len();
            self.limbs.resize(len + count, 0);
        }
        self
    }

    /// Signed addition, dispatching on the operand signs.
    pub(crate) fn add_values(a: &BigNum, b: &BigNum) -> BigNum {
        match (a.sign, b.sign) {
            // a + (-b) = a - b
            (true, false) => Self::sub_values(a, &b.magnitude()),
            // (-a) + b = b - a
            (false, true) => Self::sub_values(b, &a.magnitude()),
            // Same sign: add the magnitudes, keep the sign.
            (sign, _) => Self::from_parts(sign, large::add(&a.limbs, &b.limbs)),
        }
    }

    /// Signed subtraction, dispatching on the operand signs.
    pub(crate) fn sub_values(a: &BigNum, b: &BigNum) -> BigNum {
        match (a.sign, b.sign) {
            // a - (-b) = a + b
            (true, false) => Self::from_parts(true, large::add(&a.limbs, &b.limbs)),
            // (-a) - b = -(a + b)
            (false, true) => Self::from_parts(false, large::add(&a.limbs, &b.limbs)),
            // (-a) - (-b) = b - a
            (false, false) => Self::sub_values(&b.magnitude(), &a.magnitude()),
            // Magnitude subtraction; a smaller minuend swaps the operands
            // and flips the result sign.
            (true, true) => {
                if large::compare(&a.limbs, &b.limbs) == Ordering::Less {
                    Self::from_parts(false, large::sub(&b.limbs, &a.limbs))
                } else {
                    Self::from_parts(true, large::sub(&a.limbs, &b.limbs))
                }
            }
        }
    }

    /// Signed multiplication. The product is non-negative iff the operand
    /// signs match; the magnitude algorithms never see the sign.
    pub(crate) fn mul_values(a: &BigNum, b: &BigNum) -> BigNum {
        let product = Self::mul_magnitude(&a.limbs, &b.limbs);
        Self::from_parts(a.sign == b.sign, product)
    }

    /// Size-dispatched magnitude multiplication: schoolbook while the
    /// smaller operand is at or below [`KARATSUBA_CUTOFF`] limbs, Karatsuba
    /// above it.
    fn mul_magnitude(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
        if x.len().min(y.len()) <= KARATSUBA_CUTOFF {
            return large::long_mul(x, y);
        }

        // Bring both operands to the same even limb count, then split each
        // into a high and a low half of `half` limbs.
        let mut len = x.len().max(y.len());
        if len % 2 != 0 {
            len += 1;
        }
        let x = math::pad(x, len);
        let y = math::pad(y, len);
        let half = len / 2;
        let (xh, xl) = x.split_at(half);
        let (yh, yl) = y.split_at(half);

        let high = BigNum::from_parts(true, Self::mul_magnitude(xh, yh));
        let low = BigNum::from_parts(true, Self::mul_magnitude(xl, yl));
        let cross = BigNum::from_parts(
            true,
            Self::mul_magnitude(&large::add(xh, xl), &large::add(yh, yl)),
        );

        // cross - high - low is the middle term xh*yl + xl*yh. It cannot
        // come out negative, but it is formed through the ordinary signed
        // subtraction path.
        let middle = Self::sub_values(&cross, &Self::add_values(&high, &low));

        let combined = Self::add_values(
            &Self::add_values(&high.scale_up(2 * half), &middle.scale_up(half)),
            &low,
        );
        combined.limbs
    }

    /// Signed division with remainder. The quotient is non-negative iff the
    /// operand signs match; the remainder is the remainder of the
    /// magnitudes and is never negative.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    pub(crate) fn div_rem_values(&self, other: &BigNum) -> (BigNum, BigNum) {
        if other.is_zero() {
            panic!("division by zero");
        }
        if other.limbs.len() == 1 {
            let (quotient, remainder) = small::div_rem(&self.limbs, other.limbs[0]);
            return (
                Self::from_parts(self.sign == other.sign, quotient),
                Self::from_parts(true, vec![remainder]),
            );
        }
        let (quotient, remainder) = large::div_rem(&self.limbs, &other.limbs);
        (
            Self::from_parts(self.sign == other.sign, quotient),
            Self::from_parts(true, remainder),
        )
    }
}

impl Default for BigNum {
    /// The zero value.
    fn default() -> BigNum {
        BigNum {
            sign: true,
            limbs: vec![0],
        }
    }
}

impl Ord for BigNum {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (false, true) => Ordering::Less,
            (true, false) => Ordering::Greater,
            (true, true) => large::compare(&self.limbs, &other.limbs),
            // Negatives order as their negations, reversed.
            (false, false) => large::compare(&other.limbs, &self.limbs),
        }
    }
}

impl PartialOrd for BigNum {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for BigNum {
    type Err = Error;

    /// Parses an optionally `-`-signed run of ASCII digits.
    ///
    /// Leading zeros are stripped. `"-0"` (and `"-000"`) normalize to
    /// positive zero, consistent with the stripping rule. Empty input, a
    /// lone `-`, and any non-digit byte are rejected.
    fn from_str(literal: &str) -> Result<BigNum> {
        let bytes = literal.as_bytes();
        if bytes.is_empty() {
            return Err(Error::new(ErrorCode::Empty, 0));
        }
        let (sign, digits, offset) = match bytes[0] {
            b'-' => (false, &bytes[1..], 1),
            _ => (true, bytes, 0),
        };
        if digits.is_empty() {
            return Err(Error::new(ErrorCode::LoneSign, 0));
        }
        if let Some(bad) = digits.iter().position(|b| !b.is_ascii_digit()) {
            return Err(Error::new(ErrorCode::InvalidDigit(digits[bad]), offset + bad));
        }
        let mut digits = digits;
        while digits.len() > 1 && digits[0] == b'0' {
            digits = &digits[1..];
        }
        Ok(BigNum::from_parts(sign, pack_digits(digits)))
    }
}

/// Packs a validated, stripped run of ASCII digits into limbs: groups of
/// nine digits from the least significant end, with a possibly shorter most
/// significant group.
fn pack_digits(digits: &[u8]) -> Vec<Limb> {
    let mut limbs = Vec::with_capacity((digits.len() + BASE_DIGITS - 1) / BASE_DIGITS);
    let head = digits.len() % BASE_DIGITS;
    if head != 0 {
        limbs.push(pack_group(&digits[..head]));
    }
    for group in digits[head..].chunks(BASE_DIGITS) {
        limbs.push(pack_group(group));
    }
    limbs
}

fn pack_group(group: &[u8]) -> Limb {
    group.iter().fold(0, |acc, &b| acc * 10 + (b - b'0') as Limb)
}

macro_rules! from_signed {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for BigNum {
                fn from(value: $ty) -> Self {
                    let mut buf = itoa::Buffer::new();
                    let rendered = buf.format(value).as_bytes();
                    let (sign, digits) = match rendered.split_first() {
                        Some((&b'-', digits)) => (false, digits),
                        _ => (true, rendered),
                    };
                    BigNum::from_parts(sign, pack_digits(digits))
                }
            }
        )*
    };
}

macro_rules! from_unsigned {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for BigNum {
                fn from(value: $ty) -> Self {
                    let mut buf = itoa::Buffer::new();
                    BigNum::from_parts(true, pack_digits(buf.format(value).as_bytes()))
                }
            }
        )*
    };
}

from_signed!(i8 i16 i32 i64 i128 isize);
from_unsigned!(u8 u16 u32 u64 u128 usize);

impl Display for BigNum {
    /// Renders the canonical decimal form: no extraneous leading zeros, a
    /// single `-` for negative values, exactly `"0"` for zero.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        if !self.sign {
            f.write_str("-")?;
        }
        let mut buf = itoa::Buffer::new();
        let mut limbs = self.limbs.iter();
        if let Some(&first) = limbs.next() {
            f.write_str(buf.format(first))?;
        }
        for &limb in limbs {
            // Interior limbs render as full nine-digit groups.
            let digits = buf.format(limb);
            f.write_str(&"000000000"[digits.len()..])?;
            f.write_str(digits)?;
        }
        Ok(())
    }
}

impl Debug for BigNum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BigNum({})", self)
    }
}
