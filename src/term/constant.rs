//! The constant node and its folding algebra.
//!
//! Constants come in two flavors, tracked by [`ConstantKind`]. A **static**
//! constant is a literal whose value is part of the expression itself:
//! arithmetic between two static constants is performed immediately and the
//! result is again static, and operations with a restricted domain (division,
//! `ln`) are validated while the term is built. A **dynamic** constant is a
//! runtime parameter (a fitted coefficient, a value read from input) that
//! happens to be known by the time the term is assembled. Dynamic constants
//! still fold eagerly, but they receive no construction-time validation:
//! out-of-domain values flow through as `inf` / NaN per IEEE-754.
//!
//! Any operation touching a dynamic constant produces a dynamic constant;
//! only static with static stays static.

use crate::error::Error;

/// Distinguishes the two constant flavors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstantKind {
    /// A literal fixed when the term was built; privileged for folding and
    /// subject to construction-time domain checks.
    Static,

    /// A runtime parameter; folds eagerly but propagates IEEE-754
    /// infinities and NaNs instead of failing construction.
    Dynamic,
}

impl ConstantKind {
    /// The flavor of a value computed from two operands: static only if
    /// both operands were static.
    fn join(self, other: Self) -> Self {
        match (self, other) {
            (Self::Static, Self::Static) => Self::Static,
            _ => Self::Dynamic,
        }
    }
}

/// A constant value in an expression tree.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constant {
    value: f64,
    kind: ConstantKind,
}

impl Constant {
    /// Creates a static constant.
    pub fn new(value: f64) -> Self {
        Self { value, kind: ConstantKind::Static }
    }

    /// Creates a dynamic constant.
    pub fn dynamic(value: f64) -> Self {
        Self { value, kind: ConstantKind::Dynamic }
    }

    /// The numeric value of the constant.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The flavor of the constant.
    pub fn kind(&self) -> ConstantKind {
        self.kind
    }

    /// Returns true if the constant is static.
    pub fn is_static(&self) -> bool {
        self.kind == ConstantKind::Static
    }

    /// Returns true if the value is zero, regardless of flavor.
    pub fn is_zero(&self) -> bool {
        self.value == 0.0
    }

    /// Returns true if the value is one, regardless of flavor.
    pub fn is_one(&self) -> bool {
        self.value == 1.0
    }

    fn derived(value: f64, kind: ConstantKind) -> Self {
        Self { value, kind }
    }

    /// Folds `self + rhs`.
    pub fn add(self, rhs: Self) -> Self {
        Self::derived(self.value + rhs.value, self.kind.join(rhs.kind))
    }

    /// Folds `self - rhs`.
    pub fn sub(self, rhs: Self) -> Self {
        Self::derived(self.value - rhs.value, self.kind.join(rhs.kind))
    }

    /// Folds `self * rhs`.
    pub fn mul(self, rhs: Self) -> Self {
        Self::derived(self.value * rhs.value, self.kind.join(rhs.kind))
    }

    /// Folds `self / rhs`.
    ///
    /// Dividing a static constant by static zero is rejected here; every
    /// combination involving a dynamic operand divides the IEEE-754 way and
    /// may fold to `inf` or NaN.
    pub fn div(self, rhs: Self) -> Result<Self, Error> {
        if self.is_static() && rhs.is_static() && rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::derived(self.value / rhs.value, self.kind.join(rhs.kind)))
    }

    /// Folds `-self`.
    pub fn neg(self) -> Self {
        Self::derived(-self.value, self.kind)
    }

    /// Folds `self ^ rhs` for an arbitrary constant exponent.
    pub fn powf(self, rhs: Self) -> Self {
        Self::derived(self.value.powf(rhs.value), self.kind.join(rhs.kind))
    }

    /// Folds `self ^ exp` for an integer exponent.
    pub fn powi(self, exp: i32) -> Self {
        Self::derived(self.value.powi(exp), self.kind)
    }

    /// Folds `sin(self)`.
    pub fn sin(self) -> Self {
        Self::derived(self.value.sin(), self.kind)
    }

    /// Folds `cos(self)`.
    pub fn cos(self) -> Self {
        Self::derived(self.value.cos(), self.kind)
    }

    /// Folds `exp(self)`.
    pub fn exp(self) -> Self {
        Self::derived(self.value.exp(), self.kind)
    }

    /// Folds `ln(self)`.
    ///
    /// A non-positive static constant is rejected here; a non-positive
    /// dynamic constant folds to `-inf` / NaN instead.
    pub fn ln(self) -> Result<Self, Error> {
        if self.is_static() && self.value <= 0.0 {
            return Err(Error::LogOutOfDomain { value: self.value });
        }
        Ok(Self::derived(self.value.ln(), self.kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_stays_static() {
        let folded = Constant::new(2.0).mul(Constant::new(3.0));
        assert_eq!(folded.value(), 6.0);
        assert_eq!(folded.kind(), ConstantKind::Static);
    }

    #[test]
    fn dynamic_taints_static() {
        let folded = Constant::new(2.0).add(Constant::dynamic(3.0));
        assert_eq!(folded.value(), 5.0);
        assert_eq!(folded.kind(), ConstantKind::Dynamic);
    }

    #[test]
    fn static_division_by_zero_is_rejected() {
        assert_eq!(
            Constant::new(1.0).div(Constant::new(0.0)),
            Err(Error::DivisionByZero),
        );
    }

    #[test]
    fn dynamic_division_by_zero_is_data() {
        let inf = Constant::dynamic(1.0).div(Constant::dynamic(0.0)).unwrap();
        assert_eq!(inf.value(), f64::INFINITY);

        let nan = Constant::dynamic(0.0).div(Constant::dynamic(0.0)).unwrap();
        assert!(nan.value().is_nan());
    }

    #[test]
    fn static_log_domain_is_checked() {
        assert_eq!(
            Constant::new(0.0).ln(),
            Err(Error::LogOutOfDomain { value: 0.0 }),
        );
        assert_eq!(
            Constant::new(-1.0).ln(),
            Err(Error::LogOutOfDomain { value: -1.0 }),
        );
    }

    #[test]
    fn dynamic_log_propagates_nan() {
        assert!(Constant::dynamic(-1.0).ln().unwrap().value().is_nan());
        assert_eq!(Constant::dynamic(0.0).ln().unwrap().value(), f64::NEG_INFINITY);
    }
}
