//! Symbolic differentiation.
//!
//! [`derivative`] produces ∂`term`/∂`var` by structural recursion over the
//! whole term model: the sum, product and quotient rules for arithmetic,
//! the simple power rule for integer exponents, the `f^g = exp(ln(f) * g)`
//! identity for general exponents, and the generalized chain rule through
//! composition nodes. Its output is an ordinary [`Term`], built with the
//! ordinary combinators, so the construction-time rewrites apply to it
//! automatically (derivatives of constants and most chain-rule branches
//! collapse immediately instead of accumulating dead zero subtrees), and it
//! can be evaluated or differentiated again without ceremony:
//!
//! ```
//! use diffable::{derivative, var};
//!
//! let x = var(0);
//! let p = (x ^ 3) + 2.0 * x;
//!
//! // p'  = 3x^2 + 2
//! // p'' = 6x
//! let first = derivative(&p, x);
//! let second = derivative(&first, x);
//! assert_eq!(first.eval(&[2.0]).unwrap(), 14.0);
//! assert_eq!(second.eval(&[2.0]).unwrap(), 12.0);
//! ```
//!
//! # The chain rule through compositions
//!
//! For `h = f ∘ (g0, .., g_{k-1})`, the total derivative with respect to
//! `x` sums, over every slot `f` depends on, the partial of `f` with
//! respect to that slot (re-applied through the same substitution) times
//! the derivative of whatever occupies the slot:
//!
//! ```text
//! ∂h/∂x = Σ_j (∂f/∂slot_j ∘ (g0..)) * ∂g_j/∂x     for the k bound slots
//!       + (∂f/∂x ∘ (g0..))                         if x passes through
//! ```
//!
//! The second summand appears exactly when `x` names a slot past the bound
//! prefix: the slot then reads the caller's argument at `x`'s own index, so
//! its inner derivative is one.

use crate::binding::{tail_position, Var};
use crate::consts::{ONE, ZERO};
use crate::funcs::{cos, exp, ln, sin};
use crate::term::{constant, BinOp, Term, UnaryFunc};

/// Computes the derivative of the given term with respect to `var`.
///
/// The result is exact and symbolic; only the construction-time identity
/// rewrites are applied to it, so it is compact but not fully canonical.
///
/// # Panics
///
/// Differentiating a general power `f^g` whose base is a non-positive
/// static constant (such as `constant(-2.0) ^ x`) panics: the rewrite
/// through `exp(ln(f) * g)` takes the logarithm of the base, and no real
/// derivative exists there.
pub fn derivative(term: &Term, var: Var) -> Term {
    match term {
        Term::Constant(_) => ZERO.clone(),
        Term::Variable(slot) => {
            if *slot == var.slot() {
                ONE.clone()
            } else {
                ZERO.clone()
            }
        },
        Term::Negate(inner) => -derivative(inner, var),
        Term::Binary(BinOp::Add, lhs, rhs) => derivative(lhs, var) + derivative(rhs, var),
        Term::Binary(BinOp::Sub, lhs, rhs) => derivative(lhs, var) - derivative(rhs, var),
        Term::Binary(BinOp::Mul, lhs, rhs) => {
            derivative(lhs, var) * (**rhs).clone() + (**lhs).clone() * derivative(rhs, var)
        },
        Term::Binary(BinOp::Div, lhs, rhs) => {
            let numerator =
                derivative(lhs, var) * (**rhs).clone() - (**lhs).clone() * derivative(rhs, var);
            numerator / ((**rhs).clone() * (**rhs).clone())
        },
        Term::PowInt(base, exp) => {
            if *exp == 0 {
                ZERO.clone()
            } else {
                constant(f64::from(*exp))
                    * (**base).clone().powi(exp - 1)
                    * derivative(base, var)
            }
        },
        Term::Pow(base, exp) => {
            // rewrite through f^g = exp(ln(f) * g), which also covers
            // variable exponents such as x^x
            let rewritten = exp_of_log(base, exp);
            derivative(&rewritten, var)
        },
        Term::Unary(UnaryFunc::Sin, inner) => cos((**inner).clone()) * derivative(inner, var),
        Term::Unary(UnaryFunc::Cos, inner) => -sin((**inner).clone()) * derivative(inner, var),
        Term::Unary(UnaryFunc::Exp, inner) => exp((**inner).clone()) * derivative(inner, var),
        Term::Unary(UnaryFunc::Ln, inner) => derivative(inner, var) / (**inner).clone(),
        Term::Compose(outer, bindings) => chain_rule(outer, bindings, var),
    }
}

impl Term {
    /// Computes the derivative of this term with respect to `var`; see
    /// [`derivative`].
    pub fn derivative(&self, var: Var) -> Term {
        derivative(self, var)
    }
}

/// The `exp(ln(f) * g)` rewriting of a general power.
fn exp_of_log(base: &Term, exponent: &Term) -> Term {
    exp(ln(base.clone()) * exponent.clone())
}

/// The generalized chain rule for `outer ∘ bindings`.
fn chain_rule(outer: &Term, bindings: &[Term], var: Var) -> Term {
    let mut total = ZERO.clone();
    for (slot, binding) in bindings.iter().enumerate() {
        let partial = derivative(outer, Var::new(slot)).compose(bindings.to_vec());
        total = total + partial * derivative(binding, var);
    }
    // when `var` names a slot past the bound prefix it survives the
    // substitution, and its own derivative is one
    if tail_position(var.slot(), bindings.len()).is_some() {
        total = total + derivative(outer, var).compose(bindings.to_vec());
    }
    total
}
