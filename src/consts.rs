//! Handy constant terms. This module consists of static constants that
//! return [`Term`]s with the given value.

use crate::term::{constant, Term};
use once_cell::sync::Lazy;

pub static ZERO: Lazy<Term> = Lazy::new(|| constant(0.0));

pub static ONE: Lazy<Term> = Lazy::new(|| constant(1.0));

pub static TWO: Lazy<Term> = Lazy::new(|| constant(2.0));

/// Euler's number.
pub static E: Lazy<Term> = Lazy::new(|| constant(std::f64::consts::E));

pub static PI: Lazy<Term> = Lazy::new(|| constant(std::f64::consts::PI));

pub static TAU: Lazy<Term> = Lazy::new(|| constant(2.0 * std::f64::consts::PI));
