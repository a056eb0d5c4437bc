/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

use serde::{Serialize, Serializer};

use crate::error::UnitError;
use crate::expression::{Expr, Factor, Term};
use crate::ratio::{safe_multiply, Ratio};
use crate::symbol::Symbol;

/// Named irrational factor of a magnitude.
#[derive(Serialize, Clone, Copy, Debug)]
pub struct MagConstant {
    pub symbol: Symbol,
    pub value: f64,
}

pub const PI: &MagConstant = &MagConstant {
    symbol: Symbol::with_ascii("\u{03c0}", "pi"),
    value: std::f64::consts::PI,
};

/// Exact positive scale factor: a product of rational powers of
/// primes and named constants.
#[derive(Clone, Copy, Debug)]
pub struct Magnitude(Expr);

/// Primes too large to find by trial division during constant
/// evaluation.
const KNOWN_PRIMES: [u64; 3] = [
    2_147_483_647,
    334_524_384_739,
    2_305_843_009_213_693_951,
];

const fn is_known_prime(n: u64) -> bool {
    let mut i = 0;
    while i < KNOWN_PRIMES.len() {
        if KNOWN_PRIMES[i] == n {
            return true;
        }
        i += 1;
    }
    false
}

/// Factorize by trial division up to the square root of the remaining
/// cofactor. A cofactor that is a large prime not listed in
/// `KNOWN_PRIMES` costs about sqrt(n)/3 steps, which for numbers near
/// `i64::MAX` exceeds what constant evaluation will finish.
const fn factorize(mut n: u64) -> Expr {
    let mut out = Expr::ONE;
    let mut p = 2;
    while p <= 3 {
        while n % p == 0 {
            out = out.mul_term(Term::new(Factor::Prime(p), Ratio::ONE));
            n /= p;
        }
        p += 1;
    }
    let mut p = 5;
    while p <= n / p && !is_known_prime(n) {
        let mut q = p;
        while q <= p + 2 {
            while n % q == 0 {
                out = out.mul_term(Term::new(Factor::Prime(q), Ratio::ONE));
                n /= q;
            }
            q += 2;
        }
        p += 6;
    }
    if n > 1 {
        out = out.mul_term(Term::new(Factor::Prime(n), Ratio::ONE));
    }
    out
}

const fn prime_product(expr: &Expr, positive: bool) -> Option<i64> {
    let mut acc: i64 = 1;
    let mut i = 0;
    while i < expr.len() {
        let term = expr.term(i);
        if let Factor::Prime(p) = term.factor {
            if term.power.is_positive() == positive {
                let mut k = term.power.abs().num();
                while k > 0 {
                    acc = match acc.checked_mul(p as i64) {
                        Some(v) => v,
                        None => return None,
                    };
                    k -= 1;
                }
            }
        }
        i += 1;
    }
    Some(acc)
}

impl Magnitude {
    pub const ONE: Magnitude = Magnitude(Expr::ONE);

    pub const fn from_ratio(r: Ratio) -> Self {
        if !r.is_positive() {
            panic!("magnitude must be positive");
        }
        Magnitude(
            factorize(r.num() as u64).div(factorize(r.den() as u64)),
        )
    }

    /// Runtime variant of [`Magnitude::from_ratio`].
    pub fn checked_from_ratio(r: Ratio) -> Result<Self, UnitError> {
        match r.is_positive() {
            true => Ok(Self::from_ratio(r)),
            false => Err(UnitError::NonPositive(r.to_string())),
        }
    }

    pub const fn integer(n: i64) -> Self {
        Self::from_ratio(Ratio::integer(n))
    }

    pub const fn ratio(num: i64, den: i64) -> Self {
        Self::from_ratio(Ratio::new(num, den))
    }

    pub const fn constant(c: &'static MagConstant) -> Self {
        Magnitude(Expr::single(Factor::Constant(c), Ratio::ONE))
    }

    pub const fn pi() -> Self {
        Self::constant(PI)
    }

    /// `base^exp`, e.g. the scale of a prefix.
    pub const fn power_of(base: i64, exp: i64) -> Self {
        Self::integer(base).pow(Ratio::integer(exp))
    }

    pub const fn expr(&self) -> &Expr {
        &self.0
    }

    pub const fn mul(self, other: Magnitude) -> Self {
        Magnitude(self.0.mul(other.0))
    }

    pub const fn div(self, other: Magnitude) -> Self {
        Magnitude(self.0.div(other.0))
    }

    pub const fn pow(self, power: Ratio) -> Self {
        Magnitude(self.0.pow(power))
    }

    /// Exact n-th root; fractional prime powers stay symbolic.
    pub const fn root(self, n: i64) -> Self {
        self.pow(Ratio::new(1, n))
    }

    pub const fn inverse(self) -> Self {
        Magnitude(self.0.inverse())
    }

    pub const fn eq(&self, other: &Magnitude) -> bool {
        self.0.eq(&other.0)
    }

    pub const fn is_one(&self) -> bool {
        self.0.is_one()
    }

    /// Only primes, only integer powers.
    pub const fn is_rational(&self) -> bool {
        let mut i = 0;
        while i < self.0.len() {
            let term = self.0.term(i);
            if !matches!(term.factor, Factor::Prime(_)) || !term.power.is_integer()
            {
                return false;
            }
            i += 1;
        }
        true
    }

    /// A whole number: rational without a denominator.
    pub const fn is_integral(&self) -> bool {
        let mut i = 0;
        while i < self.0.len() {
            if self.0.term(i).power.is_negative() {
                return false;
            }
            i += 1;
        }
        self.is_rational()
    }

    pub const fn try_as_ratio(&self) -> Option<Ratio> {
        if !self.is_rational() {
            return None;
        }
        match (prime_product(&self.0, true), prime_product(&self.0, false)) {
            (Some(num), Some(den)) => Some(Ratio::new(num, den)),
            _ => None,
        }
    }

    pub const fn as_ratio(&self) -> Ratio {
        if !self.is_rational() {
            panic!("magnitude is not a rational number");
        }
        let (mut num, mut den) = (1, 1);
        let mut i = 0;
        while i < self.0.len() {
            let term = self.0.term(i);
            if let Factor::Prime(p) = term.factor {
                let mut k = term.power.abs().num();
                while k > 0 {
                    match term.power.is_positive() {
                        true => num = safe_multiply(num, p as i64),
                        false => den = safe_multiply(den, p as i64),
                    }
                    k -= 1;
                }
            }
            i += 1;
        }
        Ratio::new(num, den)
    }

    pub fn checked_ratio(&self) -> Result<Ratio, UnitError> {
        match self.is_rational() {
            false => Err(UnitError::NotRational(self.to_string())),
            true => self
                .try_as_ratio()
                .ok_or_else(|| UnitError::Overflow(self.to_string())),
        }
    }

    /// The largest magnitude dividing both: per base, the smaller of
    /// the two powers, a missing base counting as power zero.
    pub const fn common(a: Magnitude, b: Magnitude) -> Self {
        let mut out = Expr::ONE;
        let mut i = 0;
        while i < a.0.len() {
            let t = a.0.term(i);
            let p = t.power.min(b.0.power_of(&t.factor));
            out = out.mul_term(Term::new(t.factor, p));
            i += 1;
        }
        let mut i = 0;
        while i < b.0.len() {
            let t = b.0.term(i);
            if a.0.power_of(&t.factor).is_zero() {
                out = out.mul_term(Term::new(t.factor, t.power.min(Ratio::ZERO)));
            }
            i += 1;
        }
        Magnitude(out)
    }

    /// Floating-point value of the product. The only inexact step.
    pub fn value_f64(&self) -> f64 {
        self.0
            .iter()
            .map(|t| {
                let base = match t.factor {
                    Factor::Prime(p) => p as f64,
                    Factor::Constant(c) => c.value,
                    _ => 1.0,
                };
                match t.power.is_integer() {
                    true => base.powi(t.power.num() as i32),
                    false => base.powf(t.power.as_f64()),
                }
            })
            .product()
    }
}

impl PartialEq for Magnitude {
    fn eq(&self, other: &Self) -> bool {
        Magnitude::eq(self, other)
    }
}

impl PartialOrd for Magnitude {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match Magnitude::eq(self, other) {
            true => Some(Ordering::Equal),
            false => self.value_f64().partial_cmp(&other.value_f64()),
        }
    }
}

impl Display for Magnitude {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self.try_as_ratio() {
            Some(r) => write!(f, "{r}"),
            None => write!(f, "{}", self.0),
        }
    }
}

impl Serialize for Magnitude {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
