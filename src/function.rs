// Complex functions that can be described in the input json
//
// Polynomials and rational functions are given by their coefficients,
// highest power first. Everything else is one of a handful of named
// elementary functions using their principal branch.

use std::io::{Error, ErrorKind};

use json::JsonValue;
use num::complex::Complex64;
use num::{One, Zero};

#[derive(Clone, Debug, PartialEq)]
pub struct ComplexPolynomial {
    // Lowest power first
    coefficients : Vec<Complex64>
}

fn coefficient_from_json(input : &JsonValue) -> Option<Complex64> {
    if let Some(re) = input.as_f64() {
        return Some(Complex64::new(re, 0.0));
    }
    if input.is_array() && input.len() == 2 {
        return Some(Complex64::new(input[0].as_f64()?, input[1].as_f64()?));
    }
    None
}

impl ComplexPolynomial {
    fn from_json(input : &JsonValue) -> std::io::Result<ComplexPolynomial> {
        if !input.is_array() || input.is_empty() {
            return Err(Error::new(ErrorKind::InvalidData, "Missing coefficients"))
        }
        let coefficients : Option<Vec<Complex64>> = input.members().map(coefficient_from_json).collect();
        let mut coefficients = coefficients.ok_or(
            Error::new(ErrorKind::InvalidData, "Coefficients must be numbers or [re, im] pairs")
        )?;
        coefficients.reverse();
        Ok(ComplexPolynomial { coefficients })
    }

    pub fn evaluate(&self, z : Complex64) -> Complex64 {
        let mut acc = Complex64::zero();
        let mut curr_pow = Complex64::one();
        for coeff in self.coefficients.iter() {
            acc += coeff * curr_pow;
            curr_pow *= z;
        }
        acc
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ComplexFunction {
    Polynomial(ComplexPolynomial),
    Rational(ComplexPolynomial, ComplexPolynomial),
    Reciprocal,
    Log,
    Sqrt,
    Exp,
    Sin,
    Arctan
}

impl ComplexFunction {
    pub fn from_json(input : &JsonValue) -> std::io::Result<ComplexFunction> {
        match input["type"].as_str() {
            Some("polynomial") => Ok(ComplexFunction::Polynomial(
                ComplexPolynomial::from_json(&input["coefficients"])?
            )),
            Some("rational") => Ok(ComplexFunction::Rational(
                ComplexPolynomial::from_json(&input["numerator"])?,
                ComplexPolynomial::from_json(&input["denominator"])?
            )),
            Some("reciprocal") => Ok(ComplexFunction::Reciprocal),
            Some("log") => Ok(ComplexFunction::Log),
            Some("sqrt") => Ok(ComplexFunction::Sqrt),
            Some("exp") => Ok(ComplexFunction::Exp),
            Some("sin") => Ok(ComplexFunction::Sin),
            Some("arctan") => Ok(ComplexFunction::Arctan),
            _ => Err(Error::new(ErrorKind::InvalidData, "Unknown function type"))
        }
    }

    // May be non-finite at poles, the grid sampler clamps those
    pub fn evaluate(&self, z : Complex64) -> Complex64 {
        match self {
            ComplexFunction::Polynomial(p) => p.evaluate(z),
            ComplexFunction::Rational(num, den) => num.evaluate(z) / den.evaluate(z),
            ComplexFunction::Reciprocal => z.inv(),
            ComplexFunction::Log => z.ln(),
            ComplexFunction::Sqrt => z.sqrt(),
            ComplexFunction::Exp => z.exp(),
            ComplexFunction::Sin => z.sin(),
            ComplexFunction::Arctan => z.atan()
        }
    }
}
