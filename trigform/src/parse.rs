//! Parsing of the canonical textual form `r(cos(θ) + i*sin(θ))`.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::complex::PolarComplex;
use crate::error::Error;

/// Anchored canonical pattern: unsigned decimal modulus, optionally negative decimal angles,
/// whitespace tolerated around the `+` only. No signs on the modulus, no exponents.
static PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+\.?\d*)\(cos\((-?\d+\.?\d*)\)\s*\+\s*i\*sin\((-?\d+\.?\d*)\)\)$").unwrap()
});

impl FromStr for PolarComplex {
    type Err = Error;

    /// Parses the canonical form produced by the `Display` impl.
    ///
    /// Commas are accepted as decimal separators (normalized to `.` before matching), and the
    /// two angle occurrences must be textually identical, not merely numerically equal. The
    /// parsed pair goes through [`PolarComplex::new`], so modulus validation and argument
    /// normalization apply.
    ///
    /// ```rust
    /// use trigform::{Error, PolarComplex};
    ///
    /// let z: PolarComplex = "2,50(cos(1,57) + i*sin(1,57))".parse().unwrap();
    /// assert!((z.modulus() - 2.5).abs() < 1e-12);
    ///
    /// let mismatch = "2.50(cos(1.57) + i*sin(1.58))".parse::<PolarComplex>();
    /// assert!(matches!(mismatch, Err(Error::InvalidFormat(_))));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(Error::EmptyInput);
        }

        let normalized = s.replace(',', ".");
        let captures = PATTERN
            .captures(&normalized)
            .ok_or_else(|| Error::InvalidFormat("expected r(cos(θ) + i*sin(θ))".to_string()))?;

        let modulus_text = &captures[1];
        let cos_text = &captures[2];
        let sin_text = &captures[3];
        if cos_text != sin_text {
            return Err(Error::InvalidFormat(
                "cos and sin arguments do not match".to_string(),
            ));
        }

        let modulus: f64 = modulus_text.parse().map_err(|_| {
            Error::InvalidFormat(format!("cannot convert modulus `{}`", modulus_text))
        })?;
        let argument: f64 = cos_text.parse().map_err(|_| {
            Error::InvalidFormat(format!("cannot convert argument `{}`", cos_text))
        })?;

        Self::new(modulus, argument)
    }
}
