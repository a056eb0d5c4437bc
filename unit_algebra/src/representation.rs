/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::magnitude::Magnitude;
use crate::quantity_spec::Character;
use crate::ratio::Ratio;

/// A type that can hold the numerical value of a quantity.
pub trait Representation: Copy + PartialEq + Debug + Display + 'static {
    const IS_FLOATING_POINT: bool;
    const IS_SCALAR: bool = true;
    const IS_VECTOR: bool = false;
    const IS_TENSOR: bool = false;

    fn zero() -> Self;

    /// Multiply by an exact factor. Integers go through `i128` for
    /// rational factors and truncate.
    fn scale(self, factor: &Magnitude) -> Self;
}

/// Scalar representations.
pub trait Scalar: Representation + PartialOrd {
    fn to_f64(self) -> f64;
    fn from_f64(v: f64) -> Self;

    /// The value as an integer, for integer types only.
    fn to_i128(self) -> Option<i128>;

    fn cast_from<T: Scalar>(v: T) -> Self {
        Self::from_f64(v.to_f64())
    }

    /// Add an exact number of units, such as the offset of a point
    /// origin. Integers truncate the sum.
    fn add_ratio(self, r: Ratio) -> Self;

    fn powr(self, power: Ratio) -> Self {
        match power.is_integer() {
            true => Self::from_f64(self.to_f64().powi(power.num() as i32)),
            false => Self::from_f64(self.to_f64().powf(power.as_f64())),
        }
    }

    fn sqrt(self) -> Self {
        Self::from_f64(self.to_f64().sqrt())
    }

    fn abs(self) -> Self;
}

/// Whether values of `Rep` may represent quantities of the given
/// character. Scalar types hold scalars only, vector types vectors
/// only.
pub const fn character_supported<Rep: Representation>(character: Character) -> bool {
    match character {
        Character::Scalar => Rep::IS_SCALAR,
        Character::Vector => Rep::IS_VECTOR,
        Character::Tensor => Rep::IS_TENSOR,
    }
}

/// Narrowing from the `i128` intermediate of exact integer scaling.
/// Values that do not fit are an overflow, not a truncation.
trait FromWide: Sized {
    fn from_i128(v: i128) -> Self;
}

macro_rules! float_representation {
    ($($t:ty),*) => { $(
        impl Representation for $t {
            const IS_FLOATING_POINT: bool = true;

            fn zero() -> Self {
                0.0
            }

            fn scale(self, factor: &Magnitude) -> Self {
                match factor.try_as_ratio() {
                    Some(r) if r.is_integer() => self * r.num() as $t,
                    Some(r) => self * r.num() as $t / r.den() as $t,
                    None => (self as f64 * factor.value_f64()) as $t,
                }
            }
        }

        impl Scalar for $t {
            fn to_f64(self) -> f64 {
                self as f64
            }

            fn from_f64(v: f64) -> Self {
                v as $t
            }

            fn to_i128(self) -> Option<i128> {
                None
            }

            fn add_ratio(self, r: Ratio) -> Self {
                match r.is_integer() {
                    true => self + r.num() as $t,
                    false => self + r.num() as $t / r.den() as $t,
                }
            }

            fn abs(self) -> Self {
                <$t>::abs(self)
            }
        }
    )* };
}

macro_rules! int_representation {
    ($($t:ty),*) => { $(
        impl FromWide for $t {
            fn from_i128(v: i128) -> Self {
                match <$t>::try_from(v) {
                    Ok(v) => v,
                    Err(_) => panic!(
                        "{v} does not fit in {}", stringify!($t)
                    ),
                }
            }
        }

        impl Representation for $t {
            const IS_FLOATING_POINT: bool = false;

            fn zero() -> Self {
                0
            }

            fn scale(self, factor: &Magnitude) -> Self {
                match factor.try_as_ratio() {
                    Some(r) => Self::from_i128(self as i128 * r.num() as i128 / r.den() as i128),
                    None => (self as f64 * factor.value_f64()) as $t,
                }
            }
        }

        impl Scalar for $t {
            fn to_f64(self) -> f64 {
                self as f64
            }

            fn from_f64(v: f64) -> Self {
                v as $t
            }

            fn to_i128(self) -> Option<i128> {
                Some(self as i128)
            }

            fn cast_from<T: Scalar>(v: T) -> Self {
                match v.to_i128() {
                    Some(i) => i as $t,
                    None => v.to_f64() as $t,
                }
            }

            fn add_ratio(self, r: Ratio) -> Self {
                let den = r.den() as i128;
                Self::from_i128((self as i128 * den + r.num() as i128) / den)
            }

            fn powr(self, power: Ratio) -> Self {
                match (power.is_integer(), power.num()) {
                    (true, n @ 0..) => (self as i128).pow(n as u32) as $t,
                    _ => Self::from_f64(self.to_f64().powf(power.as_f64())),
                }
            }

            #[allow(unused_comparisons)]
            fn abs(self) -> Self {
                match self < 0 {
                    true => (0 as $t).wrapping_sub(self),
                    false => self,
                }
            }
        }
    )* };
}

float_representation!(f32, f64);
int_representation!(i8, i16, i32, i64, u8, u16, u32, u64);

/// A three-dimensional cartesian vector, for quantities of vector
/// character (displacement, velocity, force).
#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug)]
pub struct CartesianVector<T>(pub [T; 3]);

impl<T: Scalar> CartesianVector<T> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        CartesianVector([x, y, z])
    }

    pub fn x(&self) -> T {
        self.0[0]
    }

    pub fn y(&self) -> T {
        self.0[1]
    }

    pub fn z(&self) -> T {
        self.0[2]
    }

    /// Euclidean norm.
    pub fn norm(&self) -> T {
        T::from_f64(self.0.iter().map(|c| c.to_f64().powi(2)).sum::<f64>().sqrt())
    }

    fn map<F: Fn(T) -> T>(self, f: F) -> Self {
        CartesianVector(self.0.map(f))
    }
}

impl<T: Scalar> Representation for CartesianVector<T> {
    const IS_FLOATING_POINT: bool = T::IS_FLOATING_POINT;
    const IS_SCALAR: bool = false;
    const IS_VECTOR: bool = true;

    fn zero() -> Self {
        CartesianVector([T::zero(); 3])
    }

    fn scale(self, factor: &Magnitude) -> Self {
        self.map(|c| c.scale(factor))
    }
}

impl<T: Scalar + Add<Output = T>> Add for CartesianVector<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        CartesianVector([
            self.0[0] + rhs.0[0],
            self.0[1] + rhs.0[1],
            self.0[2] + rhs.0[2],
        ])
    }
}

impl<T: Scalar + Sub<Output = T>> Sub for CartesianVector<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        CartesianVector([
            self.0[0] - rhs.0[0],
            self.0[1] - rhs.0[1],
            self.0[2] - rhs.0[2],
        ])
    }
}

impl<T: Scalar + Neg<Output = T>> Neg for CartesianVector<T> {
    type Output = Self;
    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

impl<T: Scalar + Mul<Output = T>> Mul<T> for CartesianVector<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        self.map(|c| c * rhs)
    }
}

impl<T: Scalar + Div<Output = T>> Div<T> for CartesianVector<T> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        self.map(|c| c / rhs)
    }
}

impl<T: Display> Display for CartesianVector<T> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "[{}, {}, {}]", self.0[0], self.0[1], self.0[2])
    }
}

/// The representation both operands of a mixed addition are
/// converted to.
pub trait CommonRep<Rhs: Representation>: Representation {
    type Output: Representation;
    fn lhs(self) -> Self::Output;
    fn rhs(rhs: Rhs) -> Self::Output;
}

impl<T: Representation> CommonRep<T> for T {
    type Output = T;
    fn lhs(self) -> T {
        self
    }
    fn rhs(rhs: T) -> T {
        rhs
    }
}

macro_rules! common_rep {
    ($($a:ty, $b:ty => $out:ty;)*) => { $(
        impl CommonRep<$b> for $a {
            type Output = $out;
            fn lhs(self) -> $out {
                <$out as Scalar>::cast_from(self)
            }
            fn rhs(rhs: $b) -> $out {
                <$out as Scalar>::cast_from(rhs)
            }
        }

        impl CommonRep<$a> for $b {
            type Output = $out;
            fn lhs(self) -> $out {
                <$out as Scalar>::cast_from(self)
            }
            fn rhs(rhs: $a) -> $out {
                <$out as Scalar>::cast_from(rhs)
            }
        }
    )* };
}

common_rep! {
    f32, f64 => f64;
    i32, f64 => f64;
    i64, f64 => f64;
    u32, f64 => f64;
    i32, f32 => f32;
}

macro_rules! common_int_rep {
    ($($a:ty, $b:ty => $out:ty;)*) => { $(
        impl CommonRep<$b> for $a {
            type Output = $out;
            fn lhs(self) -> $out {
                <$out>::from(self)
            }
            fn rhs(rhs: $b) -> $out {
                <$out>::from(rhs)
            }
        }

        impl CommonRep<$a> for $b {
            type Output = $out;
            fn lhs(self) -> $out {
                <$out>::from(self)
            }
            fn rhs(rhs: $a) -> $out {
                <$out>::from(rhs)
            }
        }
    )* };
}

common_int_rep! {
    i32, i64 => i64;
    u32, u64 => u64;
    u32, i64 => i64;
}
