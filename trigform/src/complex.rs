//! The polar-form complex number type and its operations.

use core::cmp::Ordering;
use core::f64::consts::{PI, TAU};
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, Div, Mul, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// A complex number in trigonometric (polar) form `r(cos θ + i·sin θ)`.
///
/// The modulus `r` is non-negative and the argument `θ` is stored normalized into `(−π, π]`,
/// so structurally different inputs that denote the same point collapse to one representation.
/// Values are immutable: every operation reads its operands and produces a new value.
///
/// # Equality and ordering
///
/// `==` is approximate: both fields must agree within [`PolarComplex::EPSILON`]. This absorbs
/// the round-trip error of trigonometric conversions, but it is **not transitive**, and `Eq`
/// is deliberately not implemented. `<`/`>` order by modulus alone; two values with equal
/// moduli and different arguments compare as equal under that ordering even though they are
/// different complex numbers.
///
/// # Hashing
///
/// `Hash` covers the exact bit patterns of the fields. Two values that are `==` only thanks to
/// the epsilon tolerance may hash differently; key hashed collections on exact values only.
///
/// # Examples
///
/// ```rust
/// use trigform::PolarComplex;
///
/// let z = PolarComplex::new(2.0, 5.0 * std::f64::consts::PI).unwrap();
/// // 5π wraps to π
/// assert!((z.argument() - std::f64::consts::PI).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct PolarComplex {
    modulus: f64,
    argument: f64,
}

/// Wrap an angle into the signed range `(−π, π]`.
///
/// Upper bound inclusive, lower bound exclusive; Euclidean remainder keeps the reduction
/// stable for angles far outside one turn.
fn wrap_signed(angle: f64) -> f64 {
    let y = (angle + PI).rem_euclid(TAU) - PI;
    if y <= -PI {
        y + TAU
    } else {
        y
    }
}

impl PolarComplex {
    /// Tolerance used by approximate equality on both fields.
    pub const EPSILON: f64 = 1e-10;

    /// The origin (modulus 0, argument 0) — the additive identity.
    pub const ZERO: Self = Self {
        modulus: 0.0,
        argument: 0.0,
    };

    /// Real unit (modulus 1, argument 0) — the multiplicative identity.
    pub const ONE: Self = Self {
        modulus: 1.0,
        argument: 0.0,
    };

    /// Creates a value from a modulus and an argument in radians.
    ///
    /// The argument is normalized into `(−π, π]`. A negative modulus fails with
    /// [`Error::InvalidArgument`].
    ///
    /// ```rust
    /// use trigform::{Error, PolarComplex};
    ///
    /// let z = PolarComplex::new(2.5, -7.0).unwrap();
    /// assert!(z.argument() > -std::f64::consts::PI);
    /// assert!(z.argument() <= std::f64::consts::PI);
    ///
    /// assert_eq!(PolarComplex::new(-1.0, 0.0), Err(Error::InvalidArgument(-1.0)));
    /// ```
    pub fn new(modulus: f64, argument: f64) -> Result<Self> {
        if modulus < 0.0 {
            return Err(Error::InvalidArgument(modulus));
        }
        Ok(Self::from_parts(modulus, argument))
    }

    /// Internal constructor for moduli already known to be non-negative.
    fn from_parts(modulus: f64, argument: f64) -> Self {
        debug_assert!(!(modulus < 0.0));
        Self {
            modulus,
            argument: wrap_signed(argument),
        }
    }

    /// Creates a value from algebraic (Cartesian) components.
    ///
    /// Infallible: the modulus is `hypot(real, imag)` and the argument `atan2(imag, real)`.
    /// The origin is canonicalized to argument `0` regardless of component signs.
    ///
    /// ```rust
    /// use trigform::PolarComplex;
    ///
    /// let z = PolarComplex::from_cartesian(1.0, 1.0);
    /// assert!((z.modulus() - 2f64.sqrt()).abs() < 1e-12);
    /// assert!((z.argument() - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
    /// ```
    pub fn from_cartesian(real: f64, imag: f64) -> Self {
        let modulus = real.hypot(imag);
        let argument = if modulus == 0.0 {
            0.0
        } else {
            imag.atan2(real)
        };
        Self::from_parts(modulus, argument)
    }

    /// Returns the modulus (magnitude).
    #[inline]
    pub const fn modulus(self) -> f64 {
        self.modulus
    }

    /// Returns the argument in radians, normalized into `(−π, π]`.
    #[inline]
    pub const fn argument(self) -> f64 {
        self.argument
    }

    /// Converts to algebraic form, returning `(real, imaginary)`.
    ///
    /// ```rust
    /// use trigform::PolarComplex;
    ///
    /// let z = PolarComplex::new(2.0, std::f64::consts::FRAC_PI_2).unwrap();
    /// let (re, im) = z.to_algebraic_form();
    /// assert!(re.abs() < 1e-12);
    /// assert!((im - 2.0).abs() < 1e-12);
    /// ```
    pub fn to_algebraic_form(self) -> (f64, f64) {
        let (sin, cos) = self.argument.sin_cos();
        (self.modulus * cos, self.modulus * sin)
    }

    /// Total ordering by modulus alone (IEEE 754 `total_cmp`).
    ///
    /// Unlike the `PartialOrd` impl this never returns "incomparable", so it is suitable for
    /// sorting. Values with equal moduli and different arguments are `Ordering::Equal`.
    ///
    /// ```rust
    /// use core::cmp::Ordering;
    /// use trigform::PolarComplex;
    ///
    /// let a = PolarComplex::new(5.0, 0.0).unwrap();
    /// let b = PolarComplex::new(5.0, 3.0).unwrap();
    /// assert_eq!(a.compare_by_modulus(&b), Ordering::Equal);
    /// ```
    pub fn compare_by_modulus(&self, other: &Self) -> Ordering {
        self.modulus.total_cmp(&other.modulus)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl Add for PolarComplex {
    type Output = Self;

    /// Component-wise sum through Cartesian form.
    fn add(self, rhs: Self) -> Self {
        let (re_a, im_a) = self.to_algebraic_form();
        let (re_b, im_b) = rhs.to_algebraic_form();
        Self::from_cartesian(re_a + re_b, im_a + im_b)
    }
}

impl Sub for PolarComplex {
    type Output = Self;

    /// Component-wise difference through Cartesian form.
    fn sub(self, rhs: Self) -> Self {
        let (re_a, im_a) = self.to_algebraic_form();
        let (re_b, im_b) = rhs.to_algebraic_form();
        Self::from_cartesian(re_a - re_b, im_a - im_b)
    }
}

impl Mul for PolarComplex {
    type Output = Self;

    /// Moduli multiply, arguments add; stays in polar form.
    fn mul(self, rhs: Self) -> Self {
        Self::from_parts(self.modulus * rhs.modulus, self.argument + rhs.argument)
    }
}

impl Div for PolarComplex {
    type Output = Result<Self>;

    /// Moduli divide, arguments subtract.
    ///
    /// Fails with [`Error::DivisionByZero`] when the divisor modulus is exactly zero; the
    /// `Result` output keeps that explicit at the call site:
    ///
    /// ```rust
    /// use trigform::PolarComplex;
    ///
    /// let a = PolarComplex::new(6.0, 1.0).unwrap();
    /// let b = PolarComplex::new(2.0, 0.5).unwrap();
    /// let q = (a / b).unwrap();
    /// assert!((q.modulus() - 3.0).abs() < 1e-12);
    /// assert!((q.argument() - 0.5).abs() < 1e-12);
    /// ```
    fn div(self, rhs: Self) -> Result<Self> {
        if rhs.modulus == 0.0 {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::from_parts(
            self.modulus / rhs.modulus,
            self.argument - rhs.argument,
        ))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Equality, ordering, hashing
// ─────────────────────────────────────────────────────────────────────────────

impl PartialEq for PolarComplex {
    /// Approximate equality: both fields within [`PolarComplex::EPSILON`].
    fn eq(&self, other: &Self) -> bool {
        (self.modulus - other.modulus).abs() < Self::EPSILON
            && (self.argument - other.argument).abs() < Self::EPSILON
    }
}

impl PartialOrd for PolarComplex {
    /// Ordering by modulus only; `None` if either modulus is NaN.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.modulus.partial_cmp(&other.modulus)
    }
}

impl Hash for PolarComplex {
    /// Hashes the exact bit patterns; see the type-level caveat on epsilon equality.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.modulus.to_bits().hash(state);
        self.argument.to_bits().hash(state);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Formatting
// ─────────────────────────────────────────────────────────────────────────────

impl fmt::Display for PolarComplex {
    /// Canonical form `r(cos(θ) + i*sin(θ))`, both numbers to two decimals.
    ///
    /// Rust float formatting always uses `.` as the decimal separator, so the output is
    /// locale-independent.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2}(cos({:.2}) + i*sin({:.2}))",
            self.modulus, self.argument, self.argument
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for PolarComplex {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("PolarComplex", 2)?;
        state.serialize_field("modulus", &self.modulus)?;
        state.serialize_field("argument", &self.argument)?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for PolarComplex {
    /// Deserializes through [`PolarComplex::new`], so the modulus is re-validated and the
    /// argument re-normalized; invalid data is a deserialization error.
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            modulus: f64,
            argument: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        PolarComplex::new(raw.modulus, raw.argument).map_err(serde::de::Error::custom)
    }
}
