//! Integration-level smoke tests for the `trigform` public API.

use trigform::{Error, PolarComplex};

use approx::assert_abs_diff_eq;

#[test]
fn smoke_test_product_and_conversion() {
    let product = PolarComplex::new(2.0, 0.0).unwrap() * PolarComplex::new(3.0, 0.0).unwrap();
    assert_eq!(product.modulus(), 6.0);
    assert_eq!(product.argument(), 0.0);

    let (re, im) = product.to_algebraic_form();
    assert_abs_diff_eq!(re, 6.0, epsilon = 1e-12);
    assert_abs_diff_eq!(im, 0.0, epsilon = 1e-12);
}

#[test]
fn smoke_test_sum() {
    let a = PolarComplex::new(1.0, 0.0).unwrap();
    let b = PolarComplex::new(1.0, std::f64::consts::FRAC_PI_2).unwrap();
    let sum = a + b;
    assert_abs_diff_eq!(sum.modulus(), 2f64.sqrt(), epsilon = 1e-12);
    assert_abs_diff_eq!(sum.argument(), std::f64::consts::FRAC_PI_4, epsilon = 1e-12);
}

#[test]
fn smoke_test_self_division() {
    let z = PolarComplex::new(4.2, -1.3).unwrap();
    let unit = (z / z).unwrap();
    assert_eq!(unit, PolarComplex::ONE);
}

#[test]
fn division_by_zero_modulus_reports_error() {
    let a = PolarComplex::new(3.0, 0.5).unwrap();
    let b = PolarComplex::new(0.0, 1.2).unwrap();
    assert_eq!(a / b, Err(Error::DivisionByZero));
}

#[test]
fn negative_modulus_is_rejected() {
    assert_eq!(
        PolarComplex::new(-1.0, 0.0),
        Err(Error::InvalidArgument(-1.0))
    );
}

#[test]
fn parse_display_roundtrip() {
    let original = PolarComplex::new(2.5, 1.57).unwrap();
    let reparsed: PolarComplex = original.to_string().parse().unwrap();
    assert_eq!(reparsed, original);
}

#[test]
fn parse_rejects_mismatched_angle_text() {
    let result = "2.50(cos(1.57) + i*sin(1.58))".parse::<PolarComplex>();
    assert!(matches!(result, Err(Error::InvalidFormat(_))));
}

#[test]
fn ordering_by_modulus_ignores_argument() {
    let a = PolarComplex::new(5.0, 0.0).unwrap();
    let b = PolarComplex::new(5.0, 3.0).unwrap();
    assert_eq!(a.compare_by_modulus(&b), std::cmp::Ordering::Equal);
}
