/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize, Serializer};

use crate::convertibility::{convertible, Convertibility};
use crate::dimension::Dimension;
use crate::expression::{Expr, Factor, Term};
use crate::hierarchy::{get_hierarchy_root, named_kind_tree_root};
use crate::ratio::Ratio;
use crate::symbol::{str_cmp, str_eq};

/// Mathematical character of a quantity.
#[derive(
    Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug,
)]
pub enum Character {
    Scalar,
    Vector,
    Tensor,
}

impl Character {
    const fn rank(self) -> u8 {
        match self {
            Character::Scalar => 0,
            Character::Vector => 1,
            Character::Tensor => 2,
        }
    }

    pub const fn eq(self, other: Character) -> bool {
        self.rank() == other.rank()
    }

    pub const fn max(self, other: Character) -> Character {
        match self.rank() < other.rank() {
            true => other,
            false => self,
        }
    }
}

const DIMENSIONLESS_NAME: &str = "dimensionless";

/// A named node of a quantity hierarchy.
///
/// A node is either a root (with its own dimension, or defined by an
/// equation of other quantities) or a child of a parent node, with
/// which it shares the dimension and possibly a refined equation.
#[derive(Clone, Copy, Debug)]
pub struct NamedSpec {
    pub name: &'static str,
    pub parent: Option<&'static NamedSpec>,
    /// Recipe in terms of other named specs; inherited from the
    /// parent unless the node defines its own.
    pub equation: Option<Expr>,
    pub dimension: Dimension,
    pub character: Character,
    /// Marks the root of a separate kind tree.
    pub is_kind: bool,
}

pub const DIMENSIONLESS: &NamedSpec = &NamedSpec {
    name: DIMENSIONLESS_NAME,
    parent: None,
    equation: Some(Expr::ONE),
    dimension: Dimension::ONE,
    character: Character::Scalar,
    is_kind: false,
};

impl NamedSpec {
    /// Base quantity of a system.
    pub const fn base(name: &'static str, dimension: Dimension) -> Self {
        NamedSpec {
            name,
            parent: None,
            equation: None,
            dimension,
            character: Character::Scalar,
            is_kind: false,
        }
    }

    /// Root quantity defined by a product of other quantities.
    pub const fn derived(name: &'static str, equation: SpecInfo) -> Self {
        NamedSpec {
            name,
            parent: None,
            equation: Some(equation.expr),
            dimension: equation.dimension(),
            character: equation.character(),
            is_kind: false,
        }
    }

    pub const fn child(name: &'static str, parent: &'static NamedSpec) -> Self {
        NamedSpec {
            name,
            parent: Some(parent),
            equation: parent.equation,
            dimension: parent.dimension,
            character: parent.character,
            is_kind: false,
        }
    }

    /// Give a child its own recipe. The recipe must have the parent's
    /// dimension and be at least explicitly convertible to it.
    pub const fn with_equation(self, equation: SpecInfo) -> Self {
        let parent = match self.parent {
            Some(parent) => parent,
            None => panic!("only child quantities refine an equation"),
        };
        if !equation.dimension().eq(&parent.dimension) {
            panic!("equation does not match the dimension of the parent");
        }
        if !convertible(&equation, &SpecInfo::named(parent))
            .at_least(Convertibility::Explicit)
        {
            panic!("equation is not convertible to the parent quantity");
        }
        NamedSpec {
            equation: Some(equation.expr),
            character: equation.character(),
            ..self
        }
    }

    pub const fn is_kind(self) -> Self {
        NamedSpec {
            is_kind: true,
            ..self
        }
    }

    pub const fn vector(self) -> Self {
        NamedSpec {
            character: Character::Vector,
            ..self
        }
    }

    pub const fn tensor(self) -> Self {
        NamedSpec {
            character: Character::Tensor,
            ..self
        }
    }

    /// Sorted by hierarchy root first, so that quantities of the same
    /// tree are adjacent in a derived expression.
    pub const fn cmp(&self, other: &NamedSpec) -> Ordering {
        if str_eq(self.name, other.name) {
            return Ordering::Equal;
        }
        let (ra, rb) = (get_hierarchy_root(self), get_hierarchy_root(other));
        match str_cmp(ra.name, rb.name) {
            Ordering::Equal => {}
            ord => return ord,
        }
        let (ka, kb) = (named_kind_tree_root(self), named_kind_tree_root(other));
        match str_cmp(ka.name, kb.name) {
            Ordering::Equal => str_cmp(self.name, other.name),
            ord => ord,
        }
    }

    pub const fn eq(&self, other: &NamedSpec) -> bool {
        str_eq(self.name, other.name)
    }

    pub const fn is_dimensionless(&self) -> bool {
        str_eq(self.name, DIMENSIONLESS_NAME)
    }

    pub fn short_name(&self) -> &'static str {
        self.name.rsplit("::").next().unwrap_or(self.name)
    }
}

impl PartialEq for NamedSpec {
    fn eq(&self, other: &Self) -> bool {
        NamedSpec::eq(self, other)
    }
}

impl Eq for NamedSpec {}

impl Display for NamedSpec {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.short_name())
    }
}

/// A quantity specification: a product of powers of named specs,
/// optionally wrapped as a quantity kind. A single named spec to the
/// first power is that named spec; the empty product is
/// `dimensionless`.
#[derive(Clone, Copy, Debug)]
pub struct SpecInfo {
    expr: Expr,
    kind_of: bool,
}

impl SpecInfo {
    pub const DIMENSIONLESS: SpecInfo = SpecInfo {
        expr: Expr::ONE,
        kind_of: false,
    };

    pub const fn named(spec: &'static NamedSpec) -> Self {
        SpecInfo {
            expr: Expr::single(Factor::Spec(spec), Ratio::ONE),
            kind_of: false,
        }
    }

    pub const fn from_expr(expr: Expr) -> Self {
        SpecInfo {
            expr,
            kind_of: false,
        }
    }

    pub const fn expr(&self) -> &Expr {
        &self.expr
    }

    pub const fn is_kind_of(&self) -> bool {
        self.kind_of
    }

    pub const fn kind_of(self) -> Self {
        SpecInfo {
            kind_of: true,
            ..self
        }
    }

    pub const fn remove_kind(self) -> Self {
        SpecInfo {
            kind_of: false,
            ..self
        }
    }

    pub const fn as_named(&self) -> Option<&'static NamedSpec> {
        if self.expr.is_one() {
            return Some(DIMENSIONLESS);
        }
        match self.expr.as_single() {
            Some(Factor::Spec(spec)) => Some(spec),
            _ => None,
        }
    }

    pub const fn is_named(&self) -> bool {
        self.as_named().is_some()
    }

    /// The result is a kind only if both operands are.
    pub const fn mul(self, other: SpecInfo) -> Self {
        SpecInfo {
            expr: self.expr.mul(other.expr),
            kind_of: self.kind_of && other.kind_of,
        }
    }

    pub const fn div(self, other: SpecInfo) -> Self {
        SpecInfo {
            expr: self.expr.div(other.expr),
            kind_of: self.kind_of && other.kind_of,
        }
    }

    pub const fn pow(self, power: Ratio) -> Self {
        SpecInfo {
            expr: self.expr.pow(power),
            ..self
        }
    }

    pub const fn inverse(self) -> Self {
        self.pow(Ratio::integer(-1))
    }

    pub const fn dimension(&self) -> Dimension {
        let mut out = Dimension::ONE;
        let mut i = 0;
        while i < self.expr.len() {
            let Term { factor, power } = self.expr.term(i);
            if let Factor::Spec(s) = factor {
                out = out.mul(s.dimension.pow(power));
            }
            i += 1;
        }
        out
    }

    /// Character of a derived spec: scalar if numerator and
    /// denominator agree, otherwise the stronger of the two.
    pub const fn character(&self) -> Character {
        if let Some(spec) = self.as_named() {
            return spec.character;
        }
        let mut num = Character::Scalar;
        let mut den = Character::Scalar;
        let mut i = 0;
        while i < self.expr.len() {
            let Term { factor, power } = self.expr.term(i);
            if let Factor::Spec(s) = factor {
                match power.is_positive() {
                    true => num = num.max(s.character),
                    false => den = den.max(s.character),
                }
            }
            i += 1;
        }
        match num.eq(den) {
            true => Character::Scalar,
            false => num.max(den),
        }
    }

    pub const fn eq(&self, other: &SpecInfo) -> bool {
        self.kind_of == other.kind_of && self.expr.eq(&other.expr)
    }

    fn text(&self, ascii: bool) -> String {
        let inner = match self.as_named() {
            Some(spec) => spec.short_name().to_string(),
            None => self.expr.render(ascii, |f| match f {
                Factor::Spec(s) => s.short_name().to_string(),
                _ => String::new(),
            }),
        };
        match self.kind_of {
            true => format!("kind_of<{inner}>"),
            false => inner,
        }
    }
}

impl PartialEq for SpecInfo {
    fn eq(&self, other: &Self) -> bool {
        SpecInfo::eq(self, other)
    }
}

impl Eq for SpecInfo {}

impl Display for SpecInfo {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.text(f.alternate()))
    }
}

impl Serialize for SpecInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A quantity specification, identified by a zero-sized marker type.
pub trait QuantitySpec: 'static {
    const INFO: SpecInfo;
}

/// A quantity specification that is a single node of a hierarchy.
pub trait NamedQuantitySpec: QuantitySpec {
    const NAMED: &'static NamedSpec;
}

/// Quantity of dimension one.
#[derive(Clone, Copy, Default, Debug)]
pub struct Dimensionless;

impl QuantitySpec for Dimensionless {
    const INFO: SpecInfo = SpecInfo::DIMENSIONLESS;
}

impl NamedQuantitySpec for Dimensionless {
    const NAMED: &'static NamedSpec = DIMENSIONLESS;
}

#[cfg(test)]
mod test {
    use super::{Character, NamedSpec, SpecInfo, DIMENSIONLESS};
    use crate::dimension::Dimension;
    use crate::ratio::Ratio;

    static LENGTH: NamedSpec = NamedSpec::base("test::length", Dimension::base("L"));
    static TIME: NamedSpec = NamedSpec::base("test::time", Dimension::base("T"));
    static DISPLACEMENT: NamedSpec =
        NamedSpec::child("test::displacement", &LENGTH).vector();
    static HEIGHT: NamedSpec = NamedSpec::child("test::height", &LENGTH);

    #[test]
    fn dimension_of_derived() {
        let speed = SpecInfo::named(&LENGTH).div(SpecInfo::named(&TIME));
        assert_eq!(
            speed.dimension(),
            Dimension::base("L").div(Dimension::base("T"))
        );
        assert_eq!(HEIGHT.dimension, Dimension::base("L"));
    }

    #[test]
    fn characters() {
        let velocity = SpecInfo::named(&DISPLACEMENT).div(SpecInfo::named(&TIME));
        assert_eq!(velocity.character(), Character::Vector);
        let work = SpecInfo::named(&DISPLACEMENT).mul(SpecInfo::named(&DISPLACEMENT));
        assert_eq!(work.pow(Ratio::ONE).character(), Character::Vector);
        let ratio = SpecInfo::named(&DISPLACEMENT).div(SpecInfo::named(&DISPLACEMENT));
        assert_eq!(ratio.character(), Character::Scalar);
        let cancelled = SpecInfo::named(&HEIGHT)
            .mul(SpecInfo::named(&DISPLACEMENT))
            .div(SpecInfo::named(&DISPLACEMENT));
        assert_eq!(cancelled.character(), Character::Scalar);
    }

    #[test]
    fn dimensionless_is_the_empty_product() {
        let ratio = SpecInfo::named(&LENGTH).div(SpecInfo::named(&LENGTH));
        assert_eq!(ratio, SpecInfo::DIMENSIONLESS);
        assert_eq!(SpecInfo::named(DIMENSIONLESS), SpecInfo::DIMENSIONLESS);
        assert!(ratio.as_named().is_some_and(|s| s.is_dimensionless()));
    }

    #[test]
    fn kinds_combine_only_with_kinds() {
        let a = SpecInfo::named(&LENGTH).kind_of();
        let b = SpecInfo::named(&TIME).kind_of();
        assert!(a.div(b).is_kind_of());
        assert!(!a.div(SpecInfo::named(&TIME)).is_kind_of());
        assert_eq!(a.div(b).to_string(), "kind_of<length/time>");
    }
}
