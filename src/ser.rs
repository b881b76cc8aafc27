//! Serialize `BigNum` as its canonical decimal string.

use crate::bignum::BigNum;
use serde::{Serialize, Serializer};

impl Serialize for BigNum {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
