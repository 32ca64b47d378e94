//! Interactive console front end for polar-form complex arithmetic.
//!
//! Reads the modulus/argument pairs of two complex numbers from standard input, then prints
//! both values, the results of the four arithmetic operations, an equality and a by-modulus
//! comparison, a parse demonstration, and the first value in algebraic form.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin trigform
//! ```
//!
//! Numbers are read as locale-invariant decimal text; a comma decimal separator is accepted
//! and normalized. Invalid input (non-numeric text, a negative modulus) aborts with a
//! user-facing error message and a non-zero exit code.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: warn)

use std::env;
use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use trigform::PolarComplex;

fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::WARN),
        )
        .init();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let z1 = read_complex(&mut lines, "z1")?;
    let z2 = read_complex(&mut lines, "z2")?;

    println!();
    println!("z1 = {}", z1);
    println!("z2 = {}", z2);
    println!("sum:        {}", z1 + z2);
    println!("difference: {}", z1 - z2);
    println!("product:    {}", z1 * z2);
    println!("quotient:   {}", (z1 / z2)?);
    println!("z1 == z2: {}", z1 == z2);
    println!("z1 > z2 (by modulus): {}", z1 > z2);

    let z3: PolarComplex = "2.50(cos(1.57) + i*sin(1.57))".parse()?;
    println!("z3 parsed from text: {}", z3);

    let (re, im) = z1.to_algebraic_form();
    println!("z1 in algebraic form: {:.2} + {:.2}i", re, im);

    Ok(())
}

/// Prompts for and reads one complex number as a modulus line and an argument line.
fn read_complex(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> Result<PolarComplex> {
    let modulus = read_number(lines, &format!("{} modulus (r >= 0): ", label))
        .with_context(|| format!("reading the modulus of {}", label))?;
    if modulus < 0.0 {
        bail!("the modulus of {} must be non-negative", label);
    }

    let argument = read_number(lines, &format!("{} argument (radians): ", label))
        .with_context(|| format!("reading the argument of {}", label))?;

    debug!(label, modulus, argument, "read operand");
    Ok(PolarComplex::new(modulus, argument)?)
}

/// Prompts on stdout and parses the next stdin line as a locale-invariant decimal.
fn read_number(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> Result<f64> {
    print!("{}", prompt);
    io::stdout().flush().context("flushing the prompt")?;

    let line = lines
        .next()
        .context("standard input closed")?
        .context("reading a line from standard input")?;

    let text = line.trim().replace(',', ".");
    text.parse::<f64>()
        .with_context(|| format!("`{}` is not a number", line.trim()))
}
