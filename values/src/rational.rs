use num_integer::Integer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RationalError {
    #[error("rational with zero denominator")]
    ZeroDenominator,
    #[error("rational arithmetic overflow")]
    Overflow,
    #[error("invalid rational literal `{0}`")]
    Invalid(String),
}

/// An exact fraction kept in lowest terms with a positive denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(i64, i64)", into = "(i64, i64)")]
pub struct Rational {
    numer: i64,
    denom: i64,
}

impl Rational {
    pub fn new(numer: i64, denom: i64) -> Result<Self, RationalError> {
        if denom == 0 {
            return Err(RationalError::ZeroDenominator);
        }
        let g = numer.gcd(&denom);
        let (mut n, mut d) = (numer / g, denom / g);
        if d < 0 {
            n = n.checked_neg().ok_or(RationalError::Overflow)?;
            d = d.checked_neg().ok_or(RationalError::Overflow)?;
        }
        Ok(Rational { numer: n, denom: d })
    }

    #[inline]
    pub fn from_integer(n: i64) -> Self {
        Rational { numer: n, denom: 1 }
    }

    #[inline]
    pub fn numer(&self) -> i64 {
        self.numer
    }

    #[inline]
    pub fn denom(&self) -> i64 {
        self.denom
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denom == 1
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.numer == 0
    }

    pub fn to_f64(&self) -> f64 {
        self.numer as f64 / self.denom as f64
    }

    pub fn checked_mul(&self, other: &Rational) -> Result<Rational, RationalError> {
        let n = self
            .numer
            .checked_mul(other.numer)
            .ok_or(RationalError::Overflow)?;
        let d = self
            .denom
            .checked_mul(other.denom)
            .ok_or(RationalError::Overflow)?;
        Rational::new(n, d)
    }

    pub fn checked_div(&self, other: &Rational) -> Result<Rational, RationalError> {
        if other.is_zero() {
            return Err(RationalError::ZeroDenominator);
        }
        let n = self
            .numer
            .checked_mul(other.denom)
            .ok_or(RationalError::Overflow)?;
        let d = self
            .denom
            .checked_mul(other.numer)
            .ok_or(RationalError::Overflow)?;
        Rational::new(n, d)
    }

    pub fn checked_abs(&self) -> Result<Rational, RationalError> {
        let n = self.numer.checked_abs().ok_or(RationalError::Overflow)?;
        Ok(Rational {
            numer: n,
            denom: self.denom,
        })
    }
}

impl TryFrom<(i64, i64)> for Rational {
    type Error = RationalError;

    fn try_from((numer, denom): (i64, i64)) -> Result<Self, Self::Error> {
        Rational::new(numer, denom)
    }
}

impl From<Rational> for (i64, i64) {
    fn from(r: Rational) -> Self {
        (r.numer, r.denom)
    }
}

impl FromStr for Rational {
    type Err = RationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RationalError::Invalid(s.to_string());
        let (n, d) = s.split_once('/').ok_or_else(invalid)?;
        let n = n.trim().parse::<i64>().map_err(|_| invalid())?;
        let d = d.trim().parse::<i64>().map_err(|_| invalid())?;
        Rational::new(n, d)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denom == 1 {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}
