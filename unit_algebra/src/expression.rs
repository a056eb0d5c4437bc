/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::magnitude::MagConstant;
use crate::quantity_spec::NamedSpec;
use crate::ratio::Ratio;
use crate::symbol::{str_cmp, Symbol};
use crate::unit::UnitInfo;

/// Maximum number of distinct factors in one expression.
pub const MAX_TERMS: usize = 16;

/// Atom of a symbolic product.
#[derive(Clone, Copy, Debug)]
pub enum Factor {
    /// Base dimension, identified by its symbol.
    Dimension(&'static str),
    Prime(u64),
    /// Named irrational constant.
    Constant(&'static MagConstant),
    /// Named, prefixed or scaled unit.
    Unit(&'static UnitInfo),
    Spec(&'static NamedSpec),
}

impl Factor {
    const fn rank(&self) -> u8 {
        match self {
            Factor::Dimension(_) => 0,
            Factor::Prime(_) => 1,
            Factor::Constant(_) => 2,
            Factor::Unit(_) => 3,
            Factor::Spec(_) => 4,
        }
    }

    /// Total order used to sort expressions.
    pub const fn cmp(&self, other: &Factor) -> Ordering {
        match (self, other) {
            (Factor::Dimension(a), Factor::Dimension(b)) => str_cmp(a, b),
            (Factor::Prime(a), Factor::Prime(b)) => {
                if *a < *b {
                    Ordering::Less
                } else if *a > *b {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            }
            (Factor::Constant(a), Factor::Constant(b)) => {
                Symbol::cmp(&a.symbol, &b.symbol)
            }
            (Factor::Unit(a), Factor::Unit(b)) => UnitInfo::cmp(a, b),
            (Factor::Spec(a), Factor::Spec(b)) => NamedSpec::cmp(a, b),
            _ => {
                if self.rank() < other.rank() {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            }
        }
    }

    pub const fn eq(&self, other: &Factor) -> bool {
        matches!(self.cmp(other), Ordering::Equal)
    }

    /// Factors that multiply as one and never appear in canonical form.
    const fn is_identity(&self) -> bool {
        match self {
            Factor::Prime(p) => *p == 1,
            Factor::Unit(u) => u.is_one(),
            Factor::Spec(s) => s.is_dimensionless(),
            _ => false,
        }
    }

    fn text(&self, ascii: bool) -> String {
        match self {
            Factor::Dimension(s) => s.to_string(),
            Factor::Prime(p) => p.to_string(),
            Factor::Constant(c) => c.symbol.text(ascii).to_string(),
            Factor::Unit(u) => u.symbol_text(ascii),
            Factor::Spec(s) => s.short_name().to_string(),
        }
    }
}

impl Display for Factor {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.text(f.alternate()))
    }
}

impl Serialize for Factor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text(false))
    }
}

/// A factor raised to a non-zero rational power.
#[derive(Clone, Copy, Debug)]
pub struct Term {
    pub factor: Factor,
    pub power: Ratio,
}

impl Term {
    pub const fn new(factor: Factor, power: Ratio) -> Self {
        Term { factor, power }
    }

    const EMPTY: Term = Term {
        factor: Factor::Prime(1),
        power: Ratio::ZERO,
    };
}

impl Serialize for Term {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Term", 2)?;
        s.serialize_field("factor", &self.factor)?;
        s.serialize_field("power", &self.power)?;
        s.end()
    }
}

/// Canonical product of powers: sorted by [`Factor::cmp`], one term
/// per factor, no zero powers and no identity factors. The empty
/// product is [`Expr::ONE`].
#[derive(Clone, Copy, Debug)]
pub struct Expr {
    len: usize,
    terms: [Term; MAX_TERMS],
}

impl Expr {
    pub const ONE: Expr = Expr {
        len: 0,
        terms: [Term::EMPTY; MAX_TERMS],
    };

    pub const fn single(factor: Factor, power: Ratio) -> Self {
        Self::ONE.mul_term(Term::new(factor, power))
    }

    /// Canonicalize an arbitrary list of terms.
    pub const fn from_terms(terms: &[Term]) -> Self {
        let mut out = Self::ONE;
        let mut i = 0;
        while i < terms.len() {
            out = out.mul_term(terms[i]);
            i += 1;
        }
        out
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_one(&self) -> bool {
        self.len == 0
    }

    pub const fn terms(&self) -> &[Term] {
        self.terms.split_at(self.len).0
    }

    pub const fn term(&self, i: usize) -> Term {
        if i >= self.len {
            panic!("expression term index out of range");
        }
        self.terms[i]
    }

    /// The only term, if the expression is a single factor to the
    /// first power.
    pub const fn as_single(&self) -> Option<Factor> {
        if self.len == 1 && self.terms[0].power.eq(Ratio::ONE) {
            Some(self.terms[0].factor)
        } else {
            None
        }
    }

    pub const fn mul_term(self, term: Term) -> Self {
        if term.power.is_zero() || term.factor.is_identity() {
            return self;
        }
        let mut out = self;
        let mut i = 0;
        while i < out.len {
            match out.terms[i].factor.cmp(&term.factor) {
                Ordering::Less => i += 1,
                Ordering::Equal => {
                    let power = out.terms[i].power.add(term.power);
                    if power.is_zero() {
                        return out.remove(i);
                    }
                    out.terms[i].power = power;
                    return out;
                }
                Ordering::Greater => break,
            }
        }
        out.insert(i, term)
    }

    const fn insert(self, at: usize, term: Term) -> Self {
        if self.len == MAX_TERMS {
            panic!("expression exceeds the maximum number of factors");
        }
        let mut out = self;
        let mut j = out.len;
        while j > at {
            out.terms[j] = out.terms[j - 1];
            j -= 1;
        }
        out.terms[at] = term;
        out.len += 1;
        out
    }

    pub const fn remove(self, at: usize) -> Self {
        let mut out = self;
        let mut j = at;
        while j + 1 < out.len {
            out.terms[j] = out.terms[j + 1];
            j += 1;
        }
        out.len -= 1;
        out.terms[out.len] = Term::EMPTY;
        out
    }

    pub const fn mul(self, other: Expr) -> Self {
        let mut out = self;
        let mut i = 0;
        while i < other.len {
            out = out.mul_term(other.terms[i]);
            i += 1;
        }
        out
    }

    pub const fn pow(self, power: Ratio) -> Self {
        if power.is_zero() {
            return Self::ONE;
        }
        let mut out = self;
        let mut i = 0;
        while i < out.len {
            out.terms[i].power = out.terms[i].power.mul(power);
            i += 1;
        }
        out
    }

    pub const fn inverse(self) -> Self {
        self.pow(Ratio::integer(-1))
    }

    pub const fn div(self, other: Expr) -> Self {
        self.mul(other.inverse())
    }

    pub const fn power_of(&self, factor: &Factor) -> Ratio {
        let mut i = 0;
        while i < self.len {
            if self.terms[i].factor.eq(factor) {
                return self.terms[i].power;
            }
            i += 1;
        }
        Ratio::ZERO
    }

    pub const fn cmp(&self, other: &Expr) -> Ordering {
        let mut i = 0;
        while i < self.len && i < other.len {
            let (a, b) = (&self.terms[i], &other.terms[i]);
            match a.factor.cmp(&b.factor) {
                Ordering::Equal => match a.power.cmp(b.power) {
                    Ordering::Equal => {}
                    ord => return ord,
                },
                ord => return ord,
            }
            i += 1;
        }
        if self.len < other.len {
            Ordering::Less
        } else if self.len > other.len {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    pub const fn eq(&self, other: &Expr) -> bool {
        matches!(self.cmp(other), Ordering::Equal)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Term> {
        self.terms().iter()
    }

    /// Render with the given factor printer, e.g. `kg⋅m/s²`.
    pub fn render<F>(&self, ascii: bool, text: F) -> String
    where
        F: Fn(&Factor) -> String,
    {
        let group = |positive: bool| {
            self.iter()
                .filter(|t| t.power.is_positive() == positive)
                .map(|t| {
                    let p = match positive {
                        true => t.power,
                        false => t.power.neg(),
                    };
                    format!("{}{}", text(&t.factor), superscript(p, ascii))
                })
                .collect::<Vec<String>>()
                .join(match ascii {
                    true => "*",
                    false => "\u{22c5}",
                })
        };
        let num = group(true);
        let den = group(false);
        match (num.is_empty(), den.is_empty()) {
            (true, true) => "1".to_string(),
            (false, true) => num,
            (true, false) => format!("1/{den}"),
            (false, false) => format!("{num}/{den}"),
        }
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        Expr::eq(self, other)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let ascii = f.alternate();
        write!(f, "{}", self.render(ascii, |factor| factor.text(ascii)))
    }
}

impl Serialize for Expr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

static SS: [char; 10] = [
    '\u{2070}', '\u{00b9}', '\u{00b2}', '\u{00b3}', '\u{2074}', '\u{2075}',
    '\u{2076}', '\u{2077}', '\u{2078}', '\u{2079}',
];

fn superscript(power: Ratio, ascii: bool) -> String {
    match (power.is_integer(), ascii) {
        (true, _) if power.num() == 1 => String::new(),
        (true, false) => power
            .num()
            .to_string()
            .chars()
            .map(|c| match c.to_digit(10) {
                Some(n) => SS[n as usize],
                None => '\u{207b}',
            })
            .collect(),
        (true, true) => format!("^{}", power.num()),
        (false, _) => format!("^({power})"),
    }
}
