//! The transcendental combinators.
//!
//! Each function accepts anything that converts into a [`Term`] (a term, a
//! [`Var`](crate::Var) handle, or a bare `f64`) and applies the same eager
//! folding as the arithmetic operators: a constant argument folds to a
//! constant of the same flavor on the spot, so `sin(constant(0.0))` is the
//! constant zero and never allocates a function node.
//!
//! ```
//! use diffable::{constant, funcs::{cos, sin}, var};
//!
//! let x = var(0);
//! let wave = sin(x * 2.0) + cos(x);
//! assert_eq!(sin(constant(0.0)), constant(0.0));
//! ```

use crate::error::Error;
use crate::term::{Term, UnaryFunc};

/// The sine of a term, in radians.
pub fn sin(f: impl Into<Term>) -> Term {
    match f.into() {
        Term::Constant(constant) => Term::Constant(constant.sin()),
        term => Term::Unary(UnaryFunc::Sin, Box::new(term)),
    }
}

/// The cosine of a term, in radians.
pub fn cos(f: impl Into<Term>) -> Term {
    match f.into() {
        Term::Constant(constant) => Term::Constant(constant.cos()),
        term => Term::Unary(UnaryFunc::Cos, Box::new(term)),
    }
}

/// The natural exponential of a term.
pub fn exp(f: impl Into<Term>) -> Term {
    match f.into() {
        Term::Constant(constant) => Term::Constant(constant.exp()),
        term => Term::Unary(UnaryFunc::Exp, Box::new(term)),
    }
}

/// The natural logarithm of a term.
///
/// # Panics
///
/// Panics if the argument is a non-positive static constant; that term is
/// malformed and is rejected while it is being built. Use [`Term::try_ln`]
/// to handle the error instead. An argument that merely *evaluates* to a
/// non-positive value is not an error: evaluation follows IEEE-754 and
/// yields `-inf` or NaN.
pub fn ln(f: impl Into<Term>) -> Term {
    match f.into().try_ln() {
        Ok(term) => term,
        Err(err) => panic!("{err}"),
    }
}

impl Term {
    /// The natural logarithm of the term.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LogOutOfDomain`] if the term is a non-positive
    /// static constant.
    pub fn try_ln(self) -> Result<Term, Error> {
        match self {
            Term::Constant(constant) => Ok(Term::Constant(constant.ln()?)),
            term => Ok(Term::Unary(UnaryFunc::Ln, Box::new(term))),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::binding::var;
    use crate::term::{constant, dynamic, Term};
    use crate::Error;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn constants_fold_in_place() {
        assert_eq!(sin(constant(0.0)), constant(0.0));
        assert_eq!(cos(constant(0.0)), constant(1.0));
        assert_eq!(exp(constant(0.0)), constant(1.0));
        assert_eq!(ln(constant(1.0)), constant(0.0));
    }

    #[test]
    fn non_constants_build_function_nodes() {
        let x = var(0);
        assert!(matches!(sin(x), Term::Unary(UnaryFunc::Sin, _)));
        assert!(matches!(ln(x + 1.0), Term::Unary(UnaryFunc::Ln, _)));
    }

    #[test]
    fn ln_rejects_non_positive_static_constants() {
        assert_eq!(
            constant(0.0).try_ln(),
            Err(Error::LogOutOfDomain { value: 0.0 }),
        );
        assert_eq!(
            constant(-2.0).try_ln(),
            Err(Error::LogOutOfDomain { value: -2.0 }),
        );
    }

    #[test]
    fn ln_of_dynamic_values_is_ieee_data() {
        assert!(ln(dynamic(-1.0)).as_constant().unwrap().value().is_nan());
        assert_eq!(
            ln(dynamic(0.0)).as_constant().unwrap().value(),
            f64::NEG_INFINITY,
        );
    }

    #[test]
    #[should_panic(expected = "non-positive constant")]
    fn ln_panics_on_static_zero() {
        let _ = ln(constant(0.0));
    }
}
