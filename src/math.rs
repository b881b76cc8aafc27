//! Building-blocks for arbitrary-precision math.
//!
//! These algorithms operate on magnitudes only: unsigned big integers stored
//! as base-10^9 limbs in most-significant-first order, so for a
//! `vec![1, 0, 7]` the represented value is `1 * 10^18 + 7`. Sign handling
//! lives one level up, on the `BigNum` type.
//!
//! A magnitude is *normalized* when it has no leading zero limb unless it is
//! the single-limb zero `[0]`. Inputs may transiently carry leading zeros
//! (the Karatsuba split produces them), but every function that returns a
//! magnitude returns it normalized.

use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;

// ALIASES
// -------

//  Type for a single limb of the big integer.
//
//  A limb is analogous to a digit in base 10, except it stores a full
//  9-digit group. Base 10^9 is the largest power of ten whose limbs fit in
//  32 bits with room left for a carry, and it keeps conversion to and from
//  decimal text a per-limb operation instead of a per-digit division.
pub(crate) type Limb = u32;

//  Double-width type for intermediate arithmetic.
//
//  Every `limb * limb + carry` product is computed at this width;
//  `BASE * BASE` fits with room to spare, so no intermediate step can
//  overflow.
pub(crate) type Wide = u64;

/// The radix of the limb representation.
pub(crate) const BASE: Limb = 1_000_000_000;

/// Number of decimal digits packed into one limb.
pub(crate) const BASE_DIGITS: usize = 9;

/// Limb count at or below which multiplication uses the schoolbook
/// algorithm.
///
/// Karatsuba's three-way split only pays for itself once both operands are
/// well past this size; the dispatch compares the smaller operand's limb
/// count against it. The schoolbook path is exact at every size, so this
/// constant is purely a performance knob.
pub(crate) const KARATSUBA_CUTOFF: usize = 256;

/// Strip leading zero limbs from a borrowed magnitude.
///
/// Unlike [`small::normalize`], the result may be empty (an all-zero input
/// trims to `&[]`); callers treat an empty slice as zero.
pub(crate) fn trim(x: &[Limb]) -> &[Limb] {
    let zeros = x.iter().take_while(|&&limb| limb == 0).count();
    &x[zeros..]
}

/// Prepend zero limbs until the magnitude is `len` limbs long.
///
/// Padding only changes the representation, not the value; it is how
/// operands are brought to equal limb count before limb-wise traversal.
pub(crate) fn pad(x: &[Limb], len: usize) -> Vec<Limb> {
    debug_assert!(len >= x.len());
    let mut out = vec![0; len - x.len()];
    out.extend_from_slice(x);
    out
}

// SCALAR
// ------

// Limb-to-limb operations, the building-blocks for the multi-limb loops.

pub(crate) mod scalar {
    use super::*;

    /// Add two limbs and an incoming carry, returning the reduced limb and
    /// the outgoing carry.
    #[inline]
    pub(crate) fn add(x: Limb, y: Limb, carry: Limb) -> (Limb, Limb) {
        debug_assert!(x < BASE && y < BASE && carry <= 1);
        let sum = x + y + carry;
        if sum >= BASE {
            (sum - BASE, 1)
        } else {
            (sum, 0)
        }
    }

    /// Subtract a limb and an incoming borrow from `x`, returning the
    /// reduced limb and the outgoing borrow. A deficit wraps by `BASE`,
    /// which is what turns a zero limb into `BASE - 1` as the borrow walks
    /// toward the most significant end.
    #[inline]
    pub(crate) fn sub(x: Limb, y: Limb, borrow: Limb) -> (Limb, Limb) {
        debug_assert!(x < BASE && y < BASE && borrow <= 1);
        let deduct = y + borrow;
        if x >= deduct {
            (x - deduct, 0)
        } else {
            (x + BASE - deduct, 1)
        }
    }

    /// Multiply two limbs and add an incoming carry, returning the reduced
    /// limb and the outgoing carry. The product is formed at `Wide` width;
    /// the carry stays below `BASE`.
    #[inline]
    pub(crate) fn mul(x: Limb, y: Limb, carry: Limb) -> (Limb, Limb) {
        let wide = x as Wide * y as Wide + carry as Wide;
        ((wide % BASE as Wide) as Limb, (wide / BASE as Wide) as Limb)
    }
}

// SMALL
// -----

// Large-to-small operations, combining a magnitude with a single limb.

pub(crate) mod small {
    use super::*;

    /// Normalize the magnitude by removing leading zero limbs, never below
    /// length 1. An empty buffer becomes the canonical zero `[0]`.
    pub(crate) fn normalize(x: &mut Vec<Limb>) {
        let zeros = x.iter().take_while(|&&limb| limb == 0).count();
        if zeros == x.len() {
            x.clear();
            x.push(0);
        } else if zeros > 0 {
            x.drain(..zeros);
        }
    }

    /// Multiply a magnitude by a single limb.
    pub(crate) fn mul(x: &[Limb], y: Limb) -> Vec<Limb> {
        let mut out = Vec::with_capacity(x.len() + 1);
        let mut carry = 0;
        for &xi in x.iter().rev() {
            let (lo, hi) = scalar::mul(xi, y, carry);
            out.push(lo);
            carry = hi;
        }
        if carry != 0 {
            out.push(carry);
        }
        out.reverse();
        normalize(&mut out);
        out
    }

    /// Divide a magnitude by a single nonzero limb, returning the quotient
    /// and the remainder.
    ///
    /// Processes the dividend most-significant limb first, keeping a running
    /// remainder `running * BASE + next_limb` at `Wide` width.
    pub(crate) fn div_rem(x: &[Limb], y: Limb) -> (Vec<Limb>, Limb) {
        debug_assert!(y != 0);
        let mut quotient = Vec::with_capacity(x.len());
        let mut running: Limb = 0;
        for &xi in x {
            let acc = running as Wide * BASE as Wide + xi as Wide;
            quotient.push((acc / y as Wide) as Limb);
            running = (acc % y as Wide) as Limb;
        }
        normalize(&mut quotient);
        (quotient, running)
    }
}

// LARGE
// -----

// Large-to-large operations, combining two magnitudes.

pub(crate) mod large {
    use super::*;

    /// Compare two normalized magnitudes: limb count first, then
    /// lexicographically by limb sequence. Most-significant-first storage
    /// makes the lexicographic slice order the numeric order.
    #[inline]
    pub(crate) fn compare(x: &[Limb], y: &[Limb]) -> Ordering {
        x.len().cmp(&y.len()).then_with(|| x.cmp(y))
    }

    /// Add two magnitudes.
    ///
    /// The shorter operand is treated as padded to the longer one's length;
    /// limbs are combined from the least significant end with carry
    /// propagation, and a final carry grows the limb count by one.
    pub(crate) fn add(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
        let len = x.len().max(y.len());
        let mut out = Vec::with_capacity(len + 1);
        let mut ix = x.iter().rev();
        let mut iy = y.iter().rev();
        let mut carry = 0;
        for _ in 0..len {
            let xi = ix.next().copied().unwrap_or(0);
            let yi = iy.next().copied().unwrap_or(0);
            let (lo, c) = scalar::add(xi, yi, carry);
            out.push(lo);
            carry = c;
        }
        if carry != 0 {
            out.push(carry);
        }
        out.reverse();
        small::normalize(&mut out);
        out
    }

    /// Subtract `y` from `x`. Requires `x >= y` as magnitudes.
    pub(crate) fn sub(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
        debug_assert!(compare(trim(x), trim(y)) != Ordering::Less);
        let mut out = Vec::with_capacity(x.len());
        let mut iy = y.iter().rev();
        let mut borrow = 0;
        for &xi in x.iter().rev() {
            let yi = iy.next().copied().unwrap_or(0);
            let (lo, b) = scalar::sub(xi, yi, borrow);
            out.push(lo);
            borrow = b;
        }
        debug_assert_eq!(borrow, 0);
        out.reverse();
        small::normalize(&mut out);
        out
    }

    /// Schoolbook multiplication.
    ///
    /// Accumulates every limb pair into an `n + m` buffer, forming each
    /// product at `Wide` width and distributing the carry into the next
    /// more significant slot. Exact for all operand sizes; the Karatsuba
    /// dispatch only decides when it is used.
    pub(crate) fn long_mul(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
        let x = trim(x);
        let y = trim(y);
        let mut out = vec![0; x.len() + y.len()];
        for i in (0..x.len()).rev() {
            for j in (0..y.len()).rev() {
                let acc = x[i] as Wide * y[j] as Wide + out[i + j + 1] as Wide;
                out[i + j + 1] = (acc % BASE as Wide) as Limb;
                // The slot absorbs at most two carries before its own
                // reduction, staying well inside u32.
                out[i + j] += (acc / BASE as Wide) as Limb;
            }
        }
        small::normalize(&mut out);
        out
    }

    /// Long division generalized to base `BASE`, for divisors of two or
    /// more limbs. Returns the quotient and the remainder.
    ///
    /// The dividend is consumed one limb at a time, most significant first,
    /// growing a running remainder. Each step binary-searches the largest
    /// quotient digit `q` with `y * q <= remainder`, subtracts `y * q`, and
    /// appends `q` to the quotient, suppressing leading zero digits.
    pub(crate) fn div_rem(x: &[Limb], y: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
        debug_assert!(y.len() > 1);
        if compare(x, y) == Ordering::Less {
            return (vec![0], x.to_vec());
        }

        let mut quotient: Vec<Limb> = Vec::new();
        let mut remainder: Vec<Limb> = Vec::new();
        for &xi in x {
            remainder.push(xi);
            // A zeroed-out remainder leaves a leading zero behind the
            // freshly appended limb.
            small::normalize(&mut remainder);

            let mut digit: Limb = 0;
            let mut left: Limb = 0;
            let mut right: Limb = BASE;
            while left <= right {
                let middle = (left + right) / 2;
                let scaled = small::mul(y, middle);
                if compare(&scaled, &remainder) != Ordering::Greater {
                    digit = middle;
                    left = middle + 1;
                } else {
                    // middle == 0 always satisfies the probe, so this
                    // branch never underflows.
                    right = middle - 1;
                }
            }

            remainder = sub(&remainder, &small::mul(y, digit));
            if !quotient.is_empty() || digit != 0 {
                quotient.push(digit);
            }
        }
        if quotient.is_empty() {
            quotient.push(0);
        }
        (quotient, remainder)
    }
}

// TESTS
// -----
