//! An embedded algebra for building arithmetic and trigonometric expression
//! terms over positional variables, evaluating them numerically, and taking
//! exact symbolic derivatives.
//!
//! This crate targets callers who need closed-form derivatives of
//! hand-authored formulas, for optimization, physics, or generated numeric
//! code, without reaching for a full computer-algebra system. Terms are
//! immutable trees built with ordinary Rust operators, and every combinator
//! folds constants and collapses arithmetic identities as it runs, so
//! expressions (and especially their derivatives) stay compact.
//!
//! # Building and evaluating terms
//!
//! [`var`] creates a handle to a positional variable slot; handles, terms
//! and bare `f64` scalars mix freely in arithmetic:
//!
//! ```
//! use diffable::var;
//!
//! let (x, y) = (var(0), var(1));
//! let f = (x ^ 2) + 3.0 * y + 1.0;
//!
//! // slot 0 = 2.0, slot 1 = 4.0
//! assert_eq!(f.eval(&[2.0, 4.0]).unwrap(), 17.0);
//! ```
//!
//! # Derivatives
//!
//! [`derivative`](fn@derivative) is a structural transform: it consumes a
//! term and produces the term of its derivative, which can be evaluated
//! (or differentiated again) like any other:
//!
//! ```
//! use diffable::{derivative, funcs::sin, var};
//!
//! let x = var(0);
//! let f = sin(x) * x;
//!
//! // f' = cos(x)*x + sin(x)
//! let df = derivative(&f, x);
//! let expected = 2.0f64.cos() * 2.0 + 2.0f64.sin();
//! assert!((df.eval(&[2.0]).unwrap() - expected).abs() < 1e-12);
//! ```
//!
//! # Composition and binding
//!
//! [`Term::compose`] substitutes terms for the leading variable slots of
//! another term, expressing function nesting and partial application; the
//! `|` operator is shorthand for single-slot substitution. Named, sparse
//! rebinding goes through [`Var::to`] and [`Bindings`]:
//!
//! ```
//! use diffable::{constant, var};
//!
//! let (x, y) = (var(0), var(1));
//!
//! // (x + y)^2, then y fixed at 1
//! let h = (x * x) | (x + y);
//! let g = h | y.to(constant(1.0));
//! assert_eq!(g.eval(&[4.0]).unwrap(), 25.0);
//! ```
//!
//! Derivatives distribute through compositions with the generalized chain
//! rule; see the [`derivative`](mod@derivative) module.
//!
//! # Constants, errors, and IEEE-754
//!
//! Constants come in two flavors, static literals and dynamic runtime
//! parameters, described in [`Constant`](term::Constant). Malformed
//! terms (static division by zero, `ln` of a non-positive literal,
//! rebinding a slot twice) are rejected at the offending combinator call;
//! numeric degeneracy at evaluation time (division by a runtime zero, `ln`
//! of a runtime negative) is not an error and follows IEEE-754. See
//! [`error`] for the full taxonomy.
//!
//! Terms are plain immutable data: evaluation and differentiation are pure
//! functions, so sharing terms across threads and evaluating the same term
//! against many argument tuples in parallel needs no coordination.

pub mod binding;
pub mod consts;
pub mod derivative;
pub mod error;
mod eval;
pub mod funcs;
pub mod term;

pub use binding::{var, Bindings, Var};
pub use derivative::derivative;
pub use error::Error;
pub use term::{constant, dynamic, BinOp, Constant, ConstantKind, Term, UnaryFunc};
