//! Numeric interpretation of terms.

use crate::binding::tail_position;
use crate::error::Error;
use crate::term::{BinOp, Term, UnaryFunc};

impl Term {
    /// Evaluates the term against an ordered argument list.
    ///
    /// The argument list may be longer than the term's arity; the excess is
    /// ignored. Division, powers, and logarithms of runtime values follow
    /// IEEE-754: `inf` and NaN are ordinary output data, never errors.
    ///
    /// ```
    /// use diffable::var;
    ///
    /// let (x, y) = (var(0), var(1));
    /// let f = x * x + y;
    /// assert_eq!(f.eval(&[3.0, 1.0]).unwrap(), 10.0);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingArguments`] if fewer arguments are supplied
    /// than the term's [arity](Term::arity) requires. The check runs once,
    /// up front, against the whole term.
    pub fn eval(&self, args: &[f64]) -> Result<f64, Error> {
        let required = self.arity();
        if args.len() < required {
            return Err(Error::MissingArguments { required, given: args.len() });
        }
        Ok(eval_unchecked(self, args))
    }
}

/// Interprets a term whose arity has already been checked against `args`.
///
/// Every index taken below is in range: the entry check guarantees
/// `args.len() >= term.arity()`, and the argument list synthesized for a
/// composed outer term is always at least as long as that term's arity.
fn eval_unchecked(term: &Term, args: &[f64]) -> f64 {
    match term {
        Term::Constant(constant) => constant.value(),
        Term::Variable(slot) => args[*slot],
        Term::Negate(inner) => -eval_unchecked(inner, args),
        Term::Binary(op, lhs, rhs) => {
            let lhs = eval_unchecked(lhs, args);
            let rhs = eval_unchecked(rhs, args);
            match op {
                BinOp::Add => lhs + rhs,
                BinOp::Sub => lhs - rhs,
                BinOp::Mul => lhs * rhs,
                BinOp::Div => lhs / rhs,
            }
        },
        Term::PowInt(base, exp) => eval_unchecked(base, args).powi(*exp),
        Term::Pow(base, exp) => {
            eval_unchecked(base, args).powf(eval_unchecked(exp, args))
        },
        Term::Unary(func, inner) => {
            let inner = eval_unchecked(inner, args);
            match func {
                UnaryFunc::Sin => inner.sin(),
                UnaryFunc::Cos => inner.cos(),
                UnaryFunc::Exp => inner.exp(),
                UnaryFunc::Ln => inner.ln(),
            }
        },
        Term::Compose(outer, bindings) => {
            let bound: Vec<f64> = bindings
                .iter()
                .map(|binding| eval_unchecked(binding, args))
                .collect();
            let tail = args.get(bound.len()..).unwrap_or_default();
            let scratch: Vec<f64> = (0..outer.arity())
                .map(|slot| match tail_position(slot, bound.len()) {
                    Some(shifted) => tail[shifted],
                    None => bound[slot],
                })
                .collect();
            eval_unchecked(outer, &scratch)
        },
    }
}
