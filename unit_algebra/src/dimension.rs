/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Serialize, Serializer};

use crate::expression::{Expr, Factor};
use crate::ratio::Ratio;

/// Physical dimension: a canonical product of powers of base
/// dimensions. Conversion is possible only between quantities of
/// the same dimension.
///
/// A base dimension is identified by its symbol alone, so two
/// systems declaring "L" share the dimension. A derived result with
/// a single base factor to the first power *is* that base
/// dimension, and the empty product is the dimensionless dimension.
#[derive(Clone, Copy, Debug)]
pub struct Dimension(Expr);

impl Dimension {
    pub const ONE: Dimension = Dimension(Expr::ONE);

    pub const fn base(symbol: &'static str) -> Self {
        Dimension(Expr::single(Factor::Dimension(symbol), Ratio::ONE))
    }

    pub const fn expr(&self) -> &Expr {
        &self.0
    }

    pub const fn mul(self, other: Dimension) -> Self {
        Dimension(self.0.mul(other.0))
    }

    pub const fn div(self, other: Dimension) -> Self {
        Dimension(self.0.div(other.0))
    }

    pub const fn pow(self, power: Ratio) -> Self {
        Dimension(self.0.pow(power))
    }

    pub const fn inverse(self) -> Self {
        Dimension(self.0.inverse())
    }

    pub const fn eq(&self, other: &Dimension) -> bool {
        self.0.eq(&other.0)
    }

    pub const fn is_dimensionless(&self) -> bool {
        self.0.is_one()
    }

    /// The symbol, if this is a base dimension.
    pub const fn as_base(&self) -> Option<&'static str> {
        match self.0.as_single() {
            Some(Factor::Dimension(symbol)) => Some(symbol),
            _ => None,
        }
    }
}

impl PartialEq for Dimension {
    fn eq(&self, other: &Self) -> bool {
        Dimension::eq(self, other)
    }
}

impl Eq for Dimension {}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match f.alternate() {
            true => write!(f, "{:#}", self.0),
            false => write!(f, "{}", self.0),
        }
    }
}

impl Serialize for Dimension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod test {
    use super::Dimension;
    use crate::ratio::Ratio;

    const L: Dimension = Dimension::base("L");
    const M: Dimension = Dimension::base("M");
    const T: Dimension = Dimension::base("T");

    #[test]
    fn derived_collapses_to_base() {
        const D: Dimension = L.mul(T).div(T);
        assert_eq!(D, L);
        assert_eq!(D.as_base(), Some("L"));
        assert_eq!(L.mul(T).as_base(), None);
        assert_eq!(L.pow(Ratio::integer(2)).as_base(), None);
    }

    #[test]
    fn dimensionless() {
        assert!(L.div(L).is_dimensionless());
        assert_eq!(L.div(L), Dimension::ONE);
        assert_eq!(Dimension::ONE.to_string(), "1");
    }

    #[test]
    fn commutative_and_associative() {
        let speed = L.div(T);
        assert_eq!(L.mul(M), M.mul(L));
        assert_eq!(L.mul(M).mul(speed), L.mul(M.mul(speed)));
        assert_eq!(speed.mul(T), L);
    }

    #[test]
    fn same_symbol_same_dimension() {
        // Two systems declaring their own length.
        let fps_length = Dimension::base("L");
        assert_eq!(fps_length, L);
        assert_ne!(fps_length, T);
    }

    #[test]
    fn display() {
        let force = M.mul(L).div(T.pow(Ratio::integer(2)));
        assert_eq!(force.to_string(), "L\u{22c5}M/T\u{00b2}");
        assert_eq!(format!("{force:#}"), "L*M/T^2");
    }
}
