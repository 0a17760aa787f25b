//! Operator implementations for [`Term`] and [`Var`].
//!
//! Every operator applies the identity-collapsing table described in the
//! [module documentation](super) before allocating a node, and folds
//! constant-with-constant operands eagerly. Scalar `f64` operands are accepted
//! on either side of the arithmetic operators and are promoted to *dynamic*
//! constants, mirroring how runtime values enter an expression.
//!
//! One piece of operator sugar can fail and therefore panics: `/` when the
//! divisor is the static constant zero. Use [`Term::try_div`] to handle the
//! error instead.

use crate::binding::Var;
use super::{constant, BinOp, Term};
use std::ops::{Add, BitOr, BitXor, Div, Mul, Neg, Sub};

impl From<Var> for Term {
    fn from(var: Var) -> Self {
        Term::Variable(var.slot())
    }
}

impl From<f64> for Term {
    fn from(value: f64) -> Self {
        super::dynamic(value)
    }
}

/// Adds two terms, folding constants and eliminating zero operands.
impl Add for Term {
    type Output = Term;

    fn add(self, rhs: Term) -> Term {
        match (self, rhs) {
            (Term::Constant(lhs), Term::Constant(rhs)) => Term::Constant(lhs.add(rhs)),
            (f, zero) | (zero, f) if zero.is_zero() => f,
            (lhs, rhs) => Term::Binary(BinOp::Add, Box::new(lhs), Box::new(rhs)),
        }
    }
}

/// Subtracts two terms, folding constants, eliminating a zero right operand
/// and collapsing `x - x` for identical variable slots.
impl Sub for Term {
    type Output = Term;

    fn sub(self, rhs: Term) -> Term {
        match (self, rhs) {
            (Term::Constant(lhs), Term::Constant(rhs)) => Term::Constant(lhs.sub(rhs)),
            (f, zero) if zero.is_zero() => f,
            (Term::Variable(lhs), Term::Variable(rhs)) if lhs == rhs => constant(0.0),
            (lhs, rhs) => Term::Binary(BinOp::Sub, Box::new(lhs), Box::new(rhs)),
        }
    }
}

/// Multiplies two terms, folding constants, absorbing zero operands and
/// eliminating unit operands.
impl Mul for Term {
    type Output = Term;

    fn mul(self, rhs: Term) -> Term {
        match (self, rhs) {
            (Term::Constant(lhs), Term::Constant(rhs)) => Term::Constant(lhs.mul(rhs)),
            (_, zero) | (zero, _) if zero.is_zero() => zero,
            (f, one) | (one, f) if one.is_one() => f,
            (lhs, rhs) => Term::Binary(BinOp::Mul, Box::new(lhs), Box::new(rhs)),
        }
    }
}

/// Divides two terms.
///
/// # Panics
///
/// Panics when dividing a static constant by the static constant zero;
/// that term is malformed and is rejected while it is being built. Use
/// [`Term::try_div`] to handle the error instead. A divisor that merely
/// *evaluates* to zero is not an error: evaluation follows IEEE-754 and
/// yields `inf` or NaN.
impl Div for Term {
    type Output = Term;

    fn div(self, rhs: Term) -> Term {
        match self.try_div(rhs) {
            Ok(term) => term,
            Err(err) => panic!("{err}"),
        }
    }
}

/// Negates a term, folding constants.
impl Neg for Term {
    type Output = Term;

    fn neg(self) -> Term {
        match self {
            Term::Constant(constant) => Term::Constant(constant.neg()),
            term => Term::Negate(Box::new(term)),
        }
    }
}

impl Neg for Var {
    type Output = Term;

    fn neg(self) -> Term {
        -Term::from(self)
    }
}

impl Term {
    /// Divides two terms, folding constants, preserving a zero numerator
    /// and eliminating a unit divisor; `x / x` collapses for identical
    /// variable slots.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`](crate::Error::DivisionByZero) when
    /// both operands are static constants and the divisor is zero.
    pub fn try_div(self, rhs: Term) -> Result<Term, crate::Error> {
        Ok(match (self, rhs) {
            (Term::Constant(lhs), Term::Constant(rhs)) => Term::Constant(lhs.div(rhs)?),
            (zero, _) if zero.is_zero() => zero,
            (Term::Variable(lhs), Term::Variable(rhs)) if lhs == rhs => constant(1.0),
            (f, one) if one.is_one() => f,
            (lhs, rhs) => Term::Binary(BinOp::Div, Box::new(lhs), Box::new(rhs)),
        })
    }

    /// Raises the term to an integer exponent fixed at build time, enabling
    /// the simple power rule under differentiation.
    ///
    /// `f^0` collapses to the constant one and `f^1` to `f` itself; a
    /// constant base folds immediately.
    pub fn powi(self, exp: i32) -> Term {
        match exp {
            0 => constant(1.0),
            1 => self,
            _ => match self {
                Term::Constant(base) => Term::Constant(base.powi(exp)),
                base => Term::PowInt(Box::new(base), exp),
            },
        }
    }

    /// Raises the term to an arbitrary term exponent.
    ///
    /// An exponent that is a static constant with an integer value takes
    /// the [`powi`](Term::powi) form; a constant exponent equal to zero or
    /// one (of either flavor) collapses; two constant operands fold. The
    /// general form evaluates with [`f64::powf`] and differentiates through
    /// the `f^g = exp(ln(f) * g)` identity.
    pub fn pow(self, exp: impl Into<Term>) -> Term {
        match (self, exp.into()) {
            (base, Term::Constant(exp))
                if exp.is_static()
                    && exp.value().fract() == 0.0
                    && exp.value().abs() <= i32::MAX as f64 =>
            {
                base.powi(exp.value() as i32)
            },
            (Term::Constant(base), Term::Constant(exp)) => Term::Constant(base.powf(exp)),
            (_, exp) if exp.is_zero() => constant(1.0),
            (base, exp) if exp.is_one() => base,
            (base, exp) => Term::Pow(Box::new(base), Box::new(exp)),
        }
    }
}

/// Raises a term to a term exponent; `x ^ x` builds the general power form.
impl BitXor for Term {
    type Output = Term;

    fn bitxor(self, rhs: Term) -> Term {
        self.pow(rhs)
    }
}

/// Raises a term to a built-in integer exponent; `x ^ 3` uses the simple
/// power rule under differentiation.
impl BitXor<i32> for Term {
    type Output = Term;

    fn bitxor(self, rhs: i32) -> Term {
        self.powi(rhs)
    }
}

/// Raises a term to a scalar exponent; the scalar is promoted to a dynamic
/// constant.
impl BitXor<f64> for Term {
    type Output = Term;

    fn bitxor(self, rhs: f64) -> Term {
        self.pow(Term::from(rhs))
    }
}

/// Composes two terms: `f | g` substitutes `g` for the first variable slot
/// of `f`.
impl BitOr for Term {
    type Output = Term;

    fn bitor(self, rhs: Term) -> Term {
        self.compose([rhs])
    }
}

/// Builds the mixed-operand arithmetic impls: every combination of
/// [`Term`], [`Var`] and `f64` other than `Term` with `Term` routes through the
/// [`From`] conversions above.
macro_rules! term_binop {
    ($($lhs:ty, $rhs:ty);* $(;)?) => {$(
        impl Add<$rhs> for $lhs {
            type Output = Term;

            fn add(self, rhs: $rhs) -> Term {
                Term::from(self) + Term::from(rhs)
            }
        }

        impl Sub<$rhs> for $lhs {
            type Output = Term;

            fn sub(self, rhs: $rhs) -> Term {
                Term::from(self) - Term::from(rhs)
            }
        }

        impl Mul<$rhs> for $lhs {
            type Output = Term;

            fn mul(self, rhs: $rhs) -> Term {
                Term::from(self) * Term::from(rhs)
            }
        }

        impl Div<$rhs> for $lhs {
            type Output = Term;

            fn div(self, rhs: $rhs) -> Term {
                Term::from(self) / Term::from(rhs)
            }
        }
    )*};
}

term_binop! {
    Term, f64;
    Term, Var;
    f64, Term;
    f64, Var;
    Var, Term;
    Var, Var;
    Var, f64;
}

/// Builds the mixed-operand power and composition impls for [`Var`].
macro_rules! var_powor {
    ($($rhs:ty),* $(,)?) => {$(
        impl BitXor<$rhs> for Var {
            type Output = Term;

            fn bitxor(self, rhs: $rhs) -> Term {
                Term::from(self) ^ rhs
            }
        }
    )*};
}

var_powor!(Term, Var, i32, f64);

impl BitXor<Var> for Term {
    type Output = Term;

    fn bitxor(self, rhs: Var) -> Term {
        self.pow(Term::from(rhs))
    }
}

#[cfg(test)]
mod tests {
    use crate::binding::var;
    use crate::term::{constant, dynamic, ConstantKind, Term};
    use pretty_assertions::assert_eq;

    #[test]
    fn constants_fold_without_allocating() {
        assert_eq!(constant(2.0) * constant(3.0), constant(6.0));
        assert_eq!(constant(2.0) + constant(3.0), constant(5.0));
        assert_eq!(constant(2.0) - constant(3.0), constant(-1.0));
        assert_eq!(constant(6.0) / constant(3.0), constant(2.0));
        assert_eq!(-constant(2.0), constant(-2.0));
    }

    #[test]
    fn dynamic_operands_fold_dynamically() {
        let folded = constant(2.0) * dynamic(3.0);
        let inner = folded.as_constant().expect("should fold to a constant");
        assert_eq!(inner.value(), 6.0);
        assert_eq!(inner.kind(), ConstantKind::Dynamic);
    }

    #[test]
    fn additive_identities_collapse() {
        let x = var(0);
        let f = x * 3.0;
        assert_eq!(f.clone() + constant(0.0), f);
        assert_eq!(constant(0.0) + f.clone(), f);
        assert_eq!(f.clone() + dynamic(0.0), f);
        assert_eq!(f.clone() - constant(0.0), f);
    }

    #[test]
    fn multiplicative_identities_collapse() {
        let x = var(0);
        let f = x + 1.0;
        assert_eq!(f.clone() * constant(1.0), f);
        assert_eq!(constant(1.0) * f.clone(), f);
        assert_eq!(f.clone() * constant(0.0), constant(0.0));
        assert_eq!(dynamic(0.0) * f.clone(), dynamic(0.0));
        assert_eq!(f.clone() / constant(1.0), f);
        assert_eq!(constant(0.0) / f, constant(0.0));
    }

    #[test]
    fn power_identities_collapse() {
        let x = var(0);
        assert_eq!((x + 1.0) ^ 0, constant(1.0));
        assert_eq!((x + 1.0) ^ 1, var(0) + 1.0);
        assert_eq!((x + 1.0).pow(dynamic(0.0)), constant(1.0));
        assert_eq!((x + 1.0).pow(dynamic(1.0)), var(0) + 1.0);
        assert_eq!(constant(2.0) ^ 3, constant(8.0));
    }

    #[test]
    fn static_integer_exponents_use_the_simple_form() {
        let x = var(0);
        assert!(matches!(Term::from(x) ^ 2, Term::PowInt(_, 2)));
        assert!(matches!(Term::from(x).pow(constant(2.0)), Term::PowInt(_, 2)));
        // a dynamic exponent is not privileged, even with an integer value
        assert!(matches!(Term::from(x).pow(dynamic(2.0)), Term::Pow(..)));
        assert!(matches!(x ^ x, Term::Pow(..)));
    }

    #[test]
    fn same_slot_cancellation() {
        let (x, y) = (var(0), var(1));
        assert_eq!(x - x, constant(0.0));
        assert_eq!(x / x, constant(1.0));
        assert!(matches!(x - y, Term::Binary(..)));
        assert!(matches!(x / y, Term::Binary(..)));
    }

    #[test]
    fn scalars_promote_to_dynamic_constants() {
        let x = var(0);
        let f = 5.0 * x;
        assert_eq!(f, dynamic(5.0) * var(0));
        assert_eq!(3.0 + constant(2.0), dynamic(5.0));
    }

    #[test]
    fn try_div_reports_static_zero_divisors() {
        assert_eq!(
            constant(1.0).try_div(constant(0.0)),
            Err(crate::Error::DivisionByZero),
        );
        // a dynamic zero divisor folds to IEEE infinity instead
        let inf = constant(1.0) / dynamic(0.0);
        assert_eq!(inf.as_constant().unwrap().value(), f64::INFINITY);
    }

    #[test]
    #[should_panic(expected = "divide a constant by constant zero")]
    fn division_operator_panics_on_static_zero() {
        let _ = constant(1.0) / constant(0.0);
    }
}
