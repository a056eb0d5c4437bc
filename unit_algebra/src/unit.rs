/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

use log::debug;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::error::UnitError;
use crate::expression::{Expr, Factor, Term};
use crate::magnitude::Magnitude;
use crate::quantity_point::OriginInfo;
use crate::quantity_spec::{NamedSpec, SpecInfo};
use crate::ratio::Ratio;
use crate::symbol::{str_cmp, Symbol};

/// How a unit is built.
#[derive(Clone, Copy, Debug)]
pub enum UnitKind {
    /// The dimensionless unit `1`.
    One,
    /// A unit with its own symbol, either a base unit of some system
    /// (no definition) or a scaled version of another unit.
    Named {
        name: &'static str,
        symbol: Symbol,
        definition: Option<(Magnitude, &'static UnitInfo)>,
    },
    Prefixed {
        prefix: Symbol,
        magnitude: Magnitude,
        unit: &'static UnitInfo,
    },
    /// An anonymous multiple of a unit, as produced for the common
    /// unit of two units that are not integral multiples of each other.
    Scaled {
        magnitude: Magnitude,
        unit: &'static UnitInfo,
    },
    /// Product of powers of named, prefixed or scaled units.
    Derived { recipe: Expr },
}

/// Compile-time descriptor of a unit.
#[derive(Clone, Copy, Debug)]
pub struct UnitInfo {
    pub kind: UnitKind,
    /// Quantity the unit is restricted to; `None` for units that take
    /// their quantity from their definition, or have none at all.
    pub spec: Option<&'static NamedSpec>,
    /// Point origin of an offset unit.
    pub origin: Option<&'static OriginInfo>,
}

/// Canonical form of a unit: an exact magnitude times a product of
/// base named units. Two units are convertible iff their references
/// are equal.
#[derive(Clone, Copy, Debug)]
pub struct CanonicalUnit {
    pub magnitude: Magnitude,
    pub reference: Expr,
}

/// A unit, identified by a zero-sized marker type.
pub trait Unit: 'static {
    const INFO: &'static UnitInfo;
}

/// The dimensionless unit.
#[derive(Clone, Copy, Default, Debug)]
pub struct One;

impl Unit for One {
    const INFO: &'static UnitInfo = &UnitInfo::ONE;
}

impl UnitInfo {
    pub const ONE: UnitInfo = UnitInfo {
        kind: UnitKind::One,
        spec: None,
        origin: None,
    };

    /// A base unit of some system.
    pub const fn named(name: &'static str, symbol: Symbol) -> Self {
        UnitInfo {
            kind: UnitKind::Named {
                name,
                symbol,
                definition: None,
            },
            spec: None,
            origin: None,
        }
    }

    /// Define a named unit as `magnitude * unit`.
    pub const fn defined_as(
        self,
        magnitude: Magnitude,
        unit: &'static UnitInfo,
    ) -> Self {
        match self.kind {
            UnitKind::Named { name, symbol, .. } => UnitInfo {
                kind: UnitKind::Named {
                    name,
                    symbol,
                    definition: Some((magnitude, unit)),
                },
                spec: self.spec,
                origin: match self.origin {
                    Some(o) => Some(o),
                    None => unit.origin,
                },
            },
            _ => panic!("only named units carry a definition"),
        }
    }

    /// Restrict the unit to quantities of the given kind.
    pub const fn associated(self, spec: &'static NamedSpec) -> Self {
        UnitInfo {
            spec: Some(spec),
            ..self
        }
    }

    pub const fn with_origin(self, origin: &'static OriginInfo) -> Self {
        UnitInfo {
            origin: Some(origin),
            ..self
        }
    }

    pub const fn prefixed(
        prefix: Symbol,
        magnitude: Magnitude,
        unit: &'static UnitInfo,
    ) -> Self {
        if !matches!(unit.kind, UnitKind::Named { .. }) {
            panic!("prefixes apply to named units only");
        }
        UnitInfo {
            kind: UnitKind::Prefixed {
                prefix,
                magnitude,
                unit,
            },
            spec: None,
            origin: unit.origin,
        }
    }

    pub const fn scaled(magnitude: Magnitude, unit: &'static UnitInfo) -> Self {
        if magnitude.is_one() {
            return *unit;
        }
        UnitInfo {
            kind: UnitKind::Scaled { magnitude, unit },
            spec: None,
            origin: None,
        }
    }

    /// The unit as a product of powers. Derived units expose their
    /// recipe; everything else is a single factor.
    pub const fn as_expr(&'static self) -> Expr {
        match &self.kind {
            UnitKind::One => Expr::ONE,
            UnitKind::Derived { recipe } => *recipe,
            _ => Expr::single(Factor::Unit(self), Ratio::ONE),
        }
    }

    /// Build a unit from a product of powers of units. The empty
    /// product is [`UnitInfo::ONE`] and a single unit to the first
    /// power is that unit.
    pub const fn from_expr(recipe: Expr) -> Self {
        if recipe.is_one() {
            return Self::ONE;
        }
        match recipe.as_single() {
            Some(Factor::Unit(u)) => *u,
            _ => UnitInfo {
                kind: UnitKind::Derived { recipe },
                spec: None,
                origin: None,
            },
        }
    }

    pub const fn product(a: &'static UnitInfo, b: &'static UnitInfo) -> Self {
        Self::from_expr(a.as_expr().mul(b.as_expr()))
    }

    pub const fn quotient(a: &'static UnitInfo, b: &'static UnitInfo) -> Self {
        Self::from_expr(a.as_expr().div(b.as_expr()))
    }

    pub const fn power(a: &'static UnitInfo, power: Ratio) -> Self {
        Self::from_expr(a.as_expr().pow(power))
    }

    pub const fn is_one(&self) -> bool {
        matches!(self.kind, UnitKind::One)
    }

    const fn rank(&self) -> u8 {
        match self.kind {
            UnitKind::One => 0,
            UnitKind::Named { .. } => 1,
            UnitKind::Prefixed { .. } => 2,
            UnitKind::Scaled { .. } => 3,
            UnitKind::Derived { .. } => 4,
        }
    }

    /// Structural order, used to sort the factors of derived units.
    /// Named units are identified by their qualified name.
    pub const fn cmp(&self, other: &UnitInfo) -> Ordering {
        match (&self.kind, &other.kind) {
            (UnitKind::Named { name: a, .. }, UnitKind::Named { name: b, .. }) => {
                str_cmp(a, b)
            }
            (
                UnitKind::Prefixed {
                    prefix: pa,
                    unit: ua,
                    ..
                },
                UnitKind::Prefixed {
                    prefix: pb,
                    unit: ub,
                    ..
                },
            ) => match UnitInfo::cmp(ua, ub) {
                Ordering::Equal => Symbol::cmp(pa, pb),
                ord => ord,
            },
            (
                UnitKind::Scaled {
                    magnitude: ma,
                    unit: ua,
                },
                UnitKind::Scaled {
                    magnitude: mb,
                    unit: ub,
                },
            ) => match UnitInfo::cmp(ua, ub) {
                Ordering::Equal => Expr::cmp(ma.expr(), mb.expr()),
                ord => ord,
            },
            (UnitKind::Derived { recipe: a }, UnitKind::Derived { recipe: b }) => {
                Expr::cmp(a, b)
            }
            _ => {
                let (a, b) = (self.rank(), other.rank());
                if a < b {
                    Ordering::Less
                } else if a > b {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            }
        }
    }

    /// Same unit, structurally. Equivalent units that are built
    /// differently (`km` and `1000 m`) are not equal; use
    /// [`UnitInfo::equivalent`] for that.
    pub const fn eq(&self, other: &UnitInfo) -> bool {
        matches!(UnitInfo::cmp(self, other), Ordering::Equal)
    }

    pub const fn canonical(&'static self) -> CanonicalUnit {
        match &self.kind {
            UnitKind::One => CanonicalUnit {
                magnitude: Magnitude::ONE,
                reference: Expr::ONE,
            },
            UnitKind::Named {
                definition: None, ..
            } => CanonicalUnit {
                magnitude: Magnitude::ONE,
                reference: Expr::single(Factor::Unit(self), Ratio::ONE),
            },
            UnitKind::Named {
                definition: Some((magnitude, unit)),
                ..
            }
            | UnitKind::Prefixed {
                magnitude, unit, ..
            }
            | UnitKind::Scaled { magnitude, unit } => {
                let inner = unit.canonical();
                CanonicalUnit {
                    magnitude: magnitude.mul(inner.magnitude),
                    reference: inner.reference,
                }
            }
            UnitKind::Derived { recipe } => {
                let mut magnitude = Magnitude::ONE;
                let mut reference = Expr::ONE;
                let mut i = 0;
                while i < recipe.len() {
                    let Term { factor, power } = recipe.term(i);
                    if let Factor::Unit(u) = factor {
                        let inner = u.canonical();
                        magnitude = magnitude.mul(inner.magnitude.pow(power));
                        reference = reference.mul(inner.reference.pow(power));
                    }
                    i += 1;
                }
                CanonicalUnit {
                    magnitude,
                    reference,
                }
            }
        }
    }

    pub const fn convertible(&'static self, other: &'static UnitInfo) -> bool {
        self.canonical().reference.eq(&other.canonical().reference)
    }

    /// Same canonical form: interchangeable without any scaling.
    pub const fn equivalent(&'static self, other: &'static UnitInfo) -> bool {
        let (a, b) = (self.canonical(), other.canonical());
        a.reference.eq(&b.reference) && a.magnitude.eq(&b.magnitude)
    }

    /// Factor to multiply a numerical value in `from` by to express it
    /// in `to`. Fails constant evaluation if the units are not
    /// convertible.
    pub const fn conversion_factor(
        from: &'static UnitInfo,
        to: &'static UnitInfo,
    ) -> Magnitude {
        let (a, b) = (from.canonical(), to.canonical());
        if !a.reference.eq(&b.reference) {
            panic!("units are not convertible");
        }
        a.magnitude.div(b.magnitude)
    }

    /// Runtime variant of [`UnitInfo::conversion_factor`].
    pub fn try_conversion_factor(
        from: &'static UnitInfo,
        to: &'static UnitInfo,
    ) -> Result<Magnitude, UnitError> {
        let (a, b) = (from.canonical(), to.canonical());
        match a.reference == b.reference {
            true => {
                let factor = a.magnitude.div(b.magnitude);
                debug!("conversion factor {from} -> {to}: {factor}");
                Ok(factor)
            }
            false => Err(UnitError::Incompatible(
                from.to_string(),
                to.to_string(),
            )),
        }
    }

    /// Largest unit of which both units are integral multiples. When
    /// one operand already is that unit it is returned as is.
    pub const fn common_unit(a: &'static UnitInfo, b: &'static UnitInfo) -> Self {
        let (ca, cb) = (a.canonical(), b.canonical());
        if !ca.reference.eq(&cb.reference) {
            panic!("units have no common unit");
        }
        if ca.magnitude.eq(&cb.magnitude) {
            return match (&a.kind, &b.kind) {
                (UnitKind::Derived { .. }, UnitKind::Named { .. }) => *b,
                _ => *a,
            };
        }
        let common = Magnitude::common(ca.magnitude, cb.magnitude);
        if common.eq(&ca.magnitude) {
            *a
        } else if common.eq(&cb.magnitude) {
            *b
        } else {
            Self::scaled(common.div(ca.magnitude), a)
        }
    }

    /// Quantity kind the unit measures, or `None` for units that are
    /// not associated with any quantity.
    pub const fn quantity_spec(&'static self) -> Option<SpecInfo> {
        if let Some(spec) = self.spec {
            return Some(SpecInfo::named(spec).kind_of());
        }
        match &self.kind {
            UnitKind::One => Some(SpecInfo::DIMENSIONLESS.kind_of()),
            UnitKind::Named {
                definition: None, ..
            } => None,
            UnitKind::Named {
                definition: Some((_, unit)),
                ..
            }
            | UnitKind::Prefixed { unit, .. }
            | UnitKind::Scaled { unit, .. } => unit.quantity_spec(),
            UnitKind::Derived { recipe } => {
                let mut spec = SpecInfo::DIMENSIONLESS.kind_of();
                let mut i = 0;
                while i < recipe.len() {
                    let Term { factor, power } = recipe.term(i);
                    if let Factor::Unit(u) = factor {
                        match u.quantity_spec() {
                            Some(s) => spec = spec.mul(s.pow(power)),
                            None => return None,
                        }
                    }
                    i += 1;
                }
                Some(spec)
            }
        }
    }

    pub const fn is_associated(&'static self) -> bool {
        self.quantity_spec().is_some()
    }

    pub const fn name(&self) -> Option<&'static str> {
        match self.kind {
            UnitKind::Named { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn symbol(&self) -> String {
        self.symbol_text(false)
    }

    pub fn ascii_symbol(&self) -> String {
        self.symbol_text(true)
    }

    pub fn symbol_text(&self, ascii: bool) -> String {
        match &self.kind {
            UnitKind::One => String::new(),
            UnitKind::Named { symbol, .. } => symbol.text(ascii).to_string(),
            UnitKind::Prefixed { prefix, unit, .. } => {
                format!("{}{}", prefix.text(ascii), unit.symbol_text(ascii))
            }
            UnitKind::Scaled { magnitude, unit } => {
                let mag = match ascii {
                    true => format!("{magnitude:#}"),
                    false => magnitude.to_string(),
                };
                format!("[{} {}]", mag, unit.symbol_text(ascii))
            }
            UnitKind::Derived { recipe } => {
                recipe.render(ascii, |f| match f {
                    Factor::Unit(u) => u.symbol_text(ascii),
                    _ => String::new(),
                })
            }
        }
    }
}

impl PartialEq for UnitInfo {
    fn eq(&self, other: &Self) -> bool {
        UnitInfo::eq(self, other)
    }
}

impl Eq for UnitInfo {}

impl Display for UnitInfo {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol_text(f.alternate()))
    }
}

impl Serialize for UnitInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Display for CanonicalUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match f.alternate() {
            true => write!(f, "{:#} x {:#}", self.magnitude, self.reference),
            false => write!(f, "{} x {}", self.magnitude, self.reference),
        }
    }
}

impl Serialize for CanonicalUnit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("CanonicalUnit", 2)?;
        s.serialize_field("magnitude", &self.magnitude)?;
        s.serialize_field("reference", &self.reference)?;
        s.end()
    }
}

#[cfg(test)]
mod test {
    use super::UnitInfo;
    use crate::magnitude::Magnitude;
    use crate::ratio::Ratio;
    use crate::symbol::Symbol;

    static METRE: UnitInfo = UnitInfo::named("test::metre", Symbol::new("m"));
    static SECOND: UnitInfo = UnitInfo::named("test::second", Symbol::new("s"));
    static FOOT: UnitInfo = UnitInfo::named("test::foot", Symbol::new("ft"))
        .defined_as(Magnitude::ratio(3048, 10000), &METRE);
    static YARD: UnitInfo = UnitInfo::named("test::yard", Symbol::new("yd"))
        .defined_as(Magnitude::integer(3), &FOOT);
    static KILOMETRE: UnitInfo = UnitInfo::prefixed(
        Symbol::new("k"),
        Magnitude::power_of(10, 3),
        &METRE,
    );
    static SPEED: UnitInfo = UnitInfo::quotient(&METRE, &SECOND);
    static SQUARE_METRE: UnitInfo = UnitInfo::power(&METRE, Ratio::integer(2));

    #[test]
    fn canonical_forms() {
        assert_eq!(YARD.canonical().to_string(), "1143/1250 x m");
        assert_eq!(KILOMETRE.canonical().to_string(), "1000 x m");
        assert_eq!(SPEED.canonical().to_string(), "1 x m/s");
        assert_eq!(UnitInfo::ONE.canonical().to_string(), "1 x 1");
    }

    #[test]
    fn conversion_factors() {
        let f = UnitInfo::conversion_factor(&YARD, &FOOT);
        assert_eq!(f, Magnitude::integer(3));
        let f = UnitInfo::conversion_factor(&YARD, &KILOMETRE);
        assert_eq!(f.as_ratio(), Ratio::new(9144, 10_000_000));
        assert!(UnitInfo::try_conversion_factor(&METRE, &SECOND).is_err());
    }

    #[test]
    fn derived_collapse() {
        static BACK: UnitInfo = UnitInfo::product(&SPEED, &SECOND);
        assert_eq!(BACK, METRE);
        static NOTHING: UnitInfo = UnitInfo::quotient(&METRE, &METRE);
        assert!(NOTHING.is_one());
        assert_eq!(SQUARE_METRE.to_string(), "m\u{00b2}");
        assert_eq!(format!("{SPEED:#}"), "m/s");
    }

    #[test]
    fn common_units() {
        assert_eq!(UnitInfo::common_unit(&KILOMETRE, &METRE), METRE);
        assert_eq!(UnitInfo::common_unit(&YARD, &FOOT), FOOT);
        static C: UnitInfo = UnitInfo::common_unit(&FOOT, &METRE);
        assert_eq!(C.canonical().magnitude, Magnitude::ratio(1, 1250));
        assert_eq!(C.to_string(), "[1/381 ft]");
    }

    #[test]
    fn unassociated() {
        assert!(METRE.quantity_spec().is_none());
        assert!(!SPEED.is_associated());
        assert!(UnitInfo::ONE.is_associated());
    }

    #[test]
    fn equivalence_is_not_identity() {
        static THOUSAND_METRES: UnitInfo =
            UnitInfo::scaled(Magnitude::integer(1000), &METRE);
        assert!(KILOMETRE.equivalent(&THOUSAND_METRES));
        assert_ne!(KILOMETRE, THOUSAND_METRES);
    }
}
