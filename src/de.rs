//! Deserialize `BigNum` from its canonical decimal string, or from any
//! native integer the data format offers.

use crate::bignum::BigNum;
use core::fmt;
use serde::de::{self, Deserialize, Deserializer, Visitor};

struct BigNumVisitor;

impl<'de> Visitor<'de> for BigNumVisitor {
    type Value = BigNum;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a decimal integer string or an integer")
    }

    #[inline]
    fn visit_str<E>(self, value: &str) -> Result<BigNum, E>
    where
        E: de::Error,
    {
        value.parse().map_err(de::Error::custom)
    }

    #[inline]
    fn visit_i64<E>(self, value: i64) -> Result<BigNum, E>
    where
        E: de::Error,
    {
        Ok(BigNum::from(value))
    }

    #[inline]
    fn visit_u64<E>(self, value: u64) -> Result<BigNum, E>
    where
        E: de::Error,
    {
        Ok(BigNum::from(value))
    }

    #[inline]
    fn visit_i128<E>(self, value: i128) -> Result<BigNum, E>
    where
        E: de::Error,
    {
        Ok(BigNum::from(value))
    }

    #[inline]
    fn visit_u128<E>(self, value: u128) -> Result<BigNum, E>
    where
        E: de::Error,
    {
        Ok(BigNum::from(value))
    }
}

impl<'de> Deserialize<'de> for BigNum {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<BigNum, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(BigNumVisitor)
    }
}
