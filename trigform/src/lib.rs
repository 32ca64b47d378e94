//! Complex numbers in trigonometric (polar) form.
//!
//! `trigform` provides a single immutable value type, [`PolarComplex`], representing a complex
//! number as `r(cos θ + i·sin θ)`:
//!
//! - The modulus `r` is always non-negative; construction with a negative modulus fails.
//! - The argument `θ` is always stored normalized into `(−π, π]`, so every value has one
//!   canonical representation regardless of how the input angle was given.
//!
//! # What this crate solves
//!
//! - Arithmetic on polar-form values: `+` and `-` go through Cartesian components, `*` and `/`
//!   stay in polar form (that is the point of the representation).
//! - A canonical textual form, both produced ([`core::fmt::Display`]) and accepted
//!   ([`core::str::FromStr`]), locale-independent up to accepting `,` as a decimal separator
//!   on input.
//! - Conversion to algebraic (Cartesian) components.
//!
//! # What this crate does not try to solve
//!
//! - Exact arithmetic: values are backed by `f64`, and equality is approximate (see
//!   [`PolarComplex::EPSILON`]).
//! - General complex analysis (powers, roots, transcendental functions).
//! - Arbitrary-precision or vector/matrix extensions.
//!
//! # Quick start
//!
//! ```rust
//! use trigform::PolarComplex;
//!
//! let z1 = PolarComplex::new(2.0, 0.0).unwrap();
//! let z2 = PolarComplex::new(3.0, 0.0).unwrap();
//!
//! let product = z1 * z2;
//! assert_eq!(product.modulus(), 6.0);
//!
//! let (re, im) = product.to_algebraic_form();
//! assert!((re - 6.0).abs() < 1e-12);
//! assert!(im.abs() < 1e-12);
//! ```
//!
//! Parse the canonical form back into a value:
//!
//! ```rust
//! use trigform::PolarComplex;
//!
//! let z: PolarComplex = "2.50(cos(1.57) + i*sin(1.57))".parse().unwrap();
//! assert_eq!(z.to_string(), "2.50(cos(1.57) + i*sin(1.57))");
//! ```
//!
//! # Errors
//!
//! Fallible operations return [`Result`] with the crate-level [`Error`]: a negative modulus at
//! construction, division by a zero-modulus value, and the parse failure cases. Nothing panics
//! and nothing is retried; errors surface at the point of violation.
//!
//! # Feature flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`PolarComplex`]; deserialization goes through the
//!   validating constructor, so invalid data is rejected rather than smuggled in.
//!
//! # Concurrency
//!
//! [`PolarComplex`] is a `Copy` value with no interior state; it is `Send + Sync` and every
//! operation is a pure function of its operands.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod complex;
mod error;
mod parse;

pub use complex::PolarComplex;
pub use error::{Error, Result};
