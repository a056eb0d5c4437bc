/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::UnitError;

/// Exact rational number in lowest terms with a positive denominator.
///
/// All arithmetic is `const` and checks for `i64` overflow. In a
/// constant context an overflow aborts compilation; the `checked_*`
/// variants report it as a [`UnitError`] at run time.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug)]
#[serde(try_from = "(i64, i64)", into = "(i64, i64)")]
pub struct Ratio {
    num: i64,
    den: i64,
}

const fn gcd_u128(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Multiply two integers, refusing to wrap.
pub const fn safe_multiply(a: i64, b: i64) -> i64 {
    match a.checked_mul(b) {
        Some(v) => v,
        None => panic!("integer overflow in magnitude arithmetic"),
    }
}

impl Ratio {
    pub const ZERO: Ratio = Ratio { num: 0, den: 1 };
    pub const ONE: Ratio = Ratio { num: 1, den: 1 };

    pub const fn new(num: i64, den: i64) -> Self {
        match Self::try_reduce(num as i128, den as i128) {
            Some(r) => r,
            None if den == 0 => panic!("zero denominator in ratio"),
            None => panic!("integer overflow in magnitude arithmetic"),
        }
    }

    pub const fn integer(n: i64) -> Self {
        Ratio { num: n, den: 1 }
    }

    /// Reduce a wide fraction, or `None` if it has a zero
    /// denominator or does not fit in `i64` once reduced.
    const fn try_reduce(num: i128, den: i128) -> Option<Self> {
        if den == 0 {
            return None;
        }
        if num == 0 {
            return Some(Self::ZERO);
        }
        let g = gcd_u128(num.unsigned_abs(), den.unsigned_abs()) as i128;
        let (mut n, mut d) = (num / g, den / g);
        if d < 0 {
            n = -n;
            d = -d;
        }
        if n > i64::MAX as i128
            || n < i64::MIN as i128
            || d > i64::MAX as i128
        {
            return None;
        }
        Some(Ratio {
            num: n as i64,
            den: d as i64,
        })
    }

    const fn reduce(num: i128, den: i128) -> Self {
        match Self::try_reduce(num, den) {
            Some(r) => r,
            None => panic!("integer overflow in magnitude arithmetic"),
        }
    }

    pub const fn num(self) -> i64 {
        self.num
    }

    pub const fn den(self) -> i64 {
        self.den
    }

    pub const fn is_zero(self) -> bool {
        self.num == 0
    }

    pub const fn is_integer(self) -> bool {
        self.den == 1
    }

    pub const fn is_positive(self) -> bool {
        self.num > 0
    }

    pub const fn is_negative(self) -> bool {
        self.num < 0
    }

    pub const fn eq(self, other: Self) -> bool {
        self.num == other.num && self.den == other.den
    }

    pub const fn cmp(self, other: Self) -> Ordering {
        let l = self.num as i128 * other.den as i128;
        let r = other.num as i128 * self.den as i128;
        if l < r {
            Ordering::Less
        } else if l > r {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    pub const fn min(self, other: Self) -> Self {
        match self.cmp(other) {
            Ordering::Greater => other,
            _ => self,
        }
    }

    pub const fn abs(self) -> Self {
        if self.num < 0 {
            self.neg()
        } else {
            self
        }
    }

    pub const fn neg(self) -> Self {
        match self.num.checked_neg() {
            Some(num) => Ratio { num, den: self.den },
            None => panic!("integer overflow in magnitude arithmetic"),
        }
    }

    pub const fn add(self, other: Self) -> Self {
        Self::reduce(
            self.num as i128 * other.den as i128
                + other.num as i128 * self.den as i128,
            self.den as i128 * other.den as i128,
        )
    }

    pub const fn sub(self, other: Self) -> Self {
        self.add(other.neg())
    }

    pub const fn mul(self, other: Self) -> Self {
        Self::reduce(
            self.num as i128 * other.num as i128,
            self.den as i128 * other.den as i128,
        )
    }

    pub const fn div(self, other: Self) -> Self {
        if other.num == 0 {
            panic!("division of ratio by zero");
        }
        Self::reduce(
            self.num as i128 * other.den as i128,
            self.den as i128 * other.num as i128,
        )
    }

    pub const fn recip(self) -> Self {
        Self::ONE.div(self)
    }

    pub const fn as_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }

    pub fn checked_new(num: i64, den: i64) -> Result<Self, UnitError> {
        match den {
            0 => Err(UnitError::ZeroDenominator),
            _ => Self::try_reduce(num as i128, den as i128).ok_or_else(|| {
                UnitError::Overflow(format!("{num}/{den}"))
            }),
        }
    }

    pub fn checked_add(self, other: Self) -> Result<Self, UnitError> {
        Self::try_reduce(
            self.num as i128 * other.den as i128
                + other.num as i128 * self.den as i128,
            self.den as i128 * other.den as i128,
        )
        .ok_or_else(|| UnitError::Overflow(format!("{self} + {other}")))
    }

    pub fn checked_mul(self, other: Self) -> Result<Self, UnitError> {
        Self::try_reduce(
            self.num as i128 * other.num as i128,
            self.den as i128 * other.den as i128,
        )
        .ok_or_else(|| UnitError::Overflow(format!("{self} * {other}")))
    }

    pub fn checked_div(self, other: Self) -> Result<Self, UnitError> {
        match other.num {
            0 => Err(UnitError::ZeroDenominator),
            _ => Self::try_reduce(
                self.num as i128 * other.den as i128,
                self.den as i128 * other.num as i128,
            )
            .ok_or_else(|| UnitError::Overflow(format!("{self} / {other}"))),
        }
    }
}

impl PartialOrd for Ratio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(Ord::cmp(self, other))
    }
}

impl Ord for Ratio {
    fn cmp(&self, other: &Self) -> Ordering {
        Ratio::cmp(*self, *other)
    }
}

impl TryFrom<(i64, i64)> for Ratio {
    type Error = UnitError;
    fn try_from((num, den): (i64, i64)) -> Result<Self, UnitError> {
        Ratio::checked_new(num, den)
    }
}

impl From<Ratio> for (i64, i64) {
    fn from(r: Ratio) -> Self {
        (r.num, r.den)
    }
}

impl From<i64> for Ratio {
    fn from(n: i64) -> Self {
        Ratio::integer(n)
    }
}

impl Display for Ratio {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self.den {
            1 => write!(f, "{}", self.num),
            _ => write!(f, "{}/{}", self.num, self.den),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Ratio;
    use crate::error::UnitError;

    #[test]
    fn reduces_to_lowest_terms() {
        let r = Ratio::new(3048, 10000);
        assert_eq!((r.num(), r.den()), (381, 1250));
        let r = Ratio::new(4, -6);
        assert_eq!((r.num(), r.den()), (-2, 3));
        assert_eq!(Ratio::new(0, -7), Ratio::ZERO);
    }

    #[test]
    fn arithmetic() {
        let a = Ratio::new(1, 3);
        let b = Ratio::new(1, 6);
        assert_eq!(a.add(b), Ratio::new(1, 2));
        assert_eq!(a.sub(b), b);
        assert_eq!(a.mul(b), Ratio::new(1, 18));
        assert_eq!(a.div(b), Ratio::integer(2));
        assert_eq!(b.recip(), Ratio::integer(6));
        assert!(a > b);
    }

    #[test]
    fn const_evaluation() {
        const HALF: Ratio = Ratio::new(2, 4);
        const THIRD_OF_HALF: Ratio = HALF.div(Ratio::integer(3));
        assert_eq!(THIRD_OF_HALF, Ratio::new(1, 6));
    }

    #[test]
    fn overflow_is_reported() {
        let big = Ratio::integer(i64::MAX);
        assert!(matches!(big.checked_mul(big), Err(UnitError::Overflow(_))));
        assert!(matches!(
            big.checked_add(Ratio::ONE),
            Err(UnitError::Overflow(_))
        ));
        assert_eq!(
            Ratio::checked_new(1, 0).unwrap_err(),
            UnitError::ZeroDenominator
        );
    }

    #[test]
    #[should_panic(expected = "overflow")]
    fn overflow_panics() {
        let _ = Ratio::integer(i64::MAX).mul(Ratio::integer(2));
    }

    #[test]
    fn serde() {
        let r = Ratio::new(381, 1250);
        let s = serde_json::to_string(&r).unwrap();
        assert_eq!(s, "[381,1250]");
        assert_eq!(serde_json::from_str::<Ratio>(&s).unwrap(), r);
        assert!(serde_json::from_str::<Ratio>("[1,0]").is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Ratio::new(1143, 1250).to_string(), "1143/1250");
        assert_eq!(Ratio::integer(3).to_string(), "3");
    }
}
