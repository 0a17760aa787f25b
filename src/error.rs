//! Errors reported while building or evaluating terms.
//!
//! Malformed terms are rejected while they are being built: dividing by a
//! literal zero, taking `ln` of a non-positive literal, or binding the same
//! variable slot twice all fail at the offending combinator call, never
//! later. Runtime numeric degeneracy is deliberately *not* an error;
//! dividing by a value that merely happens to be zero at evaluation time
//! follows IEEE-754 and produces `inf` / NaN data instead.

use std::fmt;

/// Any error that can occur while building or evaluating a [`Term`](crate::Term).
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A static constant was divided by a static constant equal to zero.
    DivisionByZero,

    /// `ln` was applied to a static constant outside its domain.
    LogOutOfDomain {
        /// The non-positive value.
        value: f64,
    },

    /// The same variable slot appeared on both sides of a binding-group
    /// merge.
    RebindingConflict {
        /// The slot that was bound twice.
        slot: usize,
    },

    /// A term was evaluated with fewer arguments than its arity requires.
    MissingArguments {
        /// The arity of the term.
        required: usize,

        /// How many arguments were actually supplied.
        given: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => {
                write!(f, "cannot divide a constant by constant zero")
            },
            Self::LogOutOfDomain { value } => {
                write!(f, "cannot take the logarithm of the non-positive constant `{value}`")
            },
            Self::RebindingConflict { slot } => {
                write!(f, "variable slot {slot} is bound more than once")
            },
            Self::MissingArguments { required, given } => {
                write!(
                    f,
                    "the term requires {required} argument(s), but {given} were supplied",
                )
            },
        }
    }
}

impl std::error::Error for Error {}
