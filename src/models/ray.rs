use crate::consts::{RAY_DECIMALS, RAY_HALF_SCALE, RAY_SCALE};
use crate::errors::{AppErrors, AppResult, RayParseError};
use num_bigint::BigUint;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A non-negative fixed-point number scaled by 10^27.
///
/// The inner value is the raw scaled integer, so `Ray(10^27)` is 1.0.
/// Intermediate products routinely exceed 10^54, hence the big integer.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ray(pub BigUint);

impl Ray {
    /// 1.0
    #[inline]
    pub fn one() -> Self {
        Ray(BigUint::from(RAY_SCALE))
    }

    /// 0.5, used as the rounding term of [`Ray::rmul`].
    #[inline]
    pub fn half() -> Self {
        Ray(BigUint::from(RAY_HALF_SCALE))
    }

    /// Fixed-point product rounded half-up: `(x * y + RAY_HALF) / RAY`.
    pub fn rmul(&self, other: &Ray) -> Ray {
        let product = &self.0 * &other.0 + Ray::half().0;
        Ray(product / Ray::one().0)
    }

    /// Raises `self` to the integer power `n` by repeated squaring.
    ///
    /// Every step rounds through [`Ray::rmul`]. `rpow(x, 0)` is 1.0 for every
    /// `x`, zero included.
    pub fn rpow(&self, mut n: u64) -> Ray {
        let mut base = self.clone();
        let mut result = Ray::one();
        while n > 0 {
            if n % 2 == 1 {
                result = result.rmul(&base);
            }
            base = base.rmul(&base);
            n /= 2;
        }
        result
    }

    /// Parse a raw scaled integer such as `1000000003022265970023464960`.
    pub fn parse_raw(s: &str) -> AppResult<Ray> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AppErrors::RayParseError(RayParseError::Empty));
        }
        if s.starts_with('-') {
            return Err(AppErrors::RayParseError(RayParseError::Negative));
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppErrors::RayParseError(RayParseError::Malformed));
        }

        let raw = BigUint::parse_bytes(s.as_bytes(), 10).ok_or(RayParseError::Malformed)?;
        Ok(Ray(raw))
    }

    /// Renders the value as a decimal with all 27 fractional digits,
    /// e.g. `1.000261157875197197935442824`.
    pub fn to_decimal_string(&self) -> String {
        let digits = self.0.to_string();
        let padded = if digits.len() <= RAY_DECIMALS {
            format!("{digits:0>width$}", width = RAY_DECIMALS + 1)
        } else {
            digits
        };
        let (int, frac) = padded.split_at(padded.len() - RAY_DECIMALS);
        format!("{int}.{frac}")
    }
}

impl From<u128> for Ray {
    fn from(raw: u128) -> Self {
        Ray(BigUint::from(raw))
    }
}

impl FromStr for Ray {
    type Err = RayParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ray::parse_raw(s).map_err(|e| match e {
            AppErrors::RayParseError(err) => err,
            _ => RayParseError::Malformed,
        })
    }
}

/// Prints the raw scaled integer.
impl Display for Ray {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
