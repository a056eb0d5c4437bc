/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::ops::{Add, Div, Mul, Neg, Sub};

use log::trace;
use serde::de::{self, Deserializer};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

use crate::combinators::{Common, Per, Pow, Prod, Ref};
use crate::convertibility::{convertible, unit_of, Convertibility};
use crate::error::UnitError;
use crate::magnitude::Magnitude;
use crate::quantity_spec::{QuantitySpec, SpecInfo};
use crate::ratio::Ratio;
use crate::reference::Reference;
use crate::representation::{character_supported, CommonRep, Representation, Scalar};
use crate::unit::{Unit, UnitInfo};

/// A number of units of some quantity. The reference `R` fixes both
/// the quantity spec and the unit at compile time; only the
/// numerical value exists at run time.
pub struct Quantity<R, Rep = f64> {
    value: Rep,
    reference: PhantomData<fn() -> R>,
}

/// Checks that a reference and a representation fit together.
pub(crate) struct Admissible<R, Rep>(PhantomData<fn() -> (R, Rep)>);

impl<R: Reference, Rep: Representation> Admissible<R, Rep> {
    pub(crate) const CHECK: () = {
        assert!(
            unit_of(<R::Unit as Unit>::INFO, &<R::Spec as QuantitySpec>::INFO),
            "unit cannot express quantities of this kind"
        );
        assert!(
            character_supported::<Rep>(<R::Spec as QuantitySpec>::INFO.character()),
            "representation does not match the character of the quantity"
        );
    };
}

/// Exact factor between two units.
pub(crate) struct Rescale<F, T>(PhantomData<fn() -> (F, T)>);

impl<F: Unit, T: Unit> Rescale<F, T> {
    pub(crate) const FACTOR: Magnitude = UnitInfo::conversion_factor(F::INFO, T::INFO);
    const IS_ONE: bool = Self::FACTOR.is_one();

    pub(crate) fn apply<Rep: Representation>(value: Rep) -> Rep {
        match Self::IS_ONE {
            true => value,
            false => value.scale(&Self::FACTOR),
        }
    }
}

/// Compile-time checks of a conversion between two references.
///
/// The quantity methods evaluate these; they are public so that a
/// conversion can be asserted up front:
///
/// ```
/// use unit_algebra::systems::si::Metre;
/// use unit_algebra::{Conversion, Kilo};
///
/// const _: () = Conversion::<Kilo<Metre>, Metre, i32>::IMPLICIT;
/// ```
///
/// A conversion to a unit of a different dimension is rejected:
///
/// ```compile_fail
/// use unit_algebra::systems::si::{Metre, Second};
/// use unit_algebra::Conversion;
///
/// const _: () = Conversion::<Metre, Second, f64>::EXPLICIT;
/// ```
///
/// and so is an integer conversion that would truncate:
///
/// ```compile_fail
/// use unit_algebra::systems::si::Metre;
/// use unit_algebra::{Conversion, Kilo};
///
/// const _: () = Conversion::<Metre, Kilo<Metre>, i32>::IMPLICIT;
/// ```
pub struct Conversion<F, T, Rep>(PhantomData<fn() -> (F, T, Rep)>);

impl<F: Reference, T: Reference, Rep: Representation> Conversion<F, T, Rep> {
    pub const SPEC: Convertibility = convertible(
        &<F::Spec as QuantitySpec>::INFO,
        &<T::Spec as QuantitySpec>::INFO,
    );
    pub const FACTOR: Magnitude = Rescale::<F::Unit, T::Unit>::FACTOR;

    /// Implicit and value-preserving.
    pub const IMPLICIT: () = {
        assert!(
            Self::SPEC.eq(Convertibility::Yes),
            "quantity is not implicitly convertible"
        );
        assert!(
            Rep::IS_FLOATING_POINT || Self::FACTOR.is_integral(),
            "conversion would truncate the value"
        );
        Admissible::<T, Rep>::CHECK
    };

    /// Explicit, possibly truncating.
    pub const EXPLICIT: () = {
        assert!(
            Self::SPEC.at_least(Convertibility::ExplicitBeyondKind),
            "quantity is not explicitly convertible"
        );
        let _factor: Magnitude = Self::FACTOR;
        Admissible::<T, Rep>::CHECK
    };

    /// Through `quantity_cast` only.
    pub const CAST: () = {
        assert!(
            Self::SPEC.at_least(Convertibility::Cast),
            "quantities are not castable"
        );
        let _factor: Magnitude = Self::FACTOR;
        Admissible::<T, Rep>::CHECK
    };
}

impl<R: Reference, Rep: Representation> Quantity<R, Rep> {
    pub const fn new(value: Rep) -> Self {
        let () = Admissible::<R, Rep>::CHECK;
        Quantity {
            value,
            reference: PhantomData,
        }
    }

    pub fn from_value<V: Into<Rep>>(value: V) -> Self {
        Self::new(value.into())
    }

    pub fn zero() -> Self {
        Self::new(Rep::zero())
    }

    pub fn numerical_value(&self) -> Rep {
        self.value
    }

    pub fn unit(&self) -> &'static UnitInfo {
        R::Unit::INFO
    }

    pub fn quantity_spec(&self) -> SpecInfo {
        R::Spec::INFO
    }

    /// The numerical value in another unit, without loss.
    pub fn numerical_value_in<U: Unit>(&self) -> Rep {
        self.in_unit::<U>().value
    }

    /// The numerical value in another unit, truncating if needed.
    pub fn force_numerical_value_in<U: Unit>(&self) -> Rep {
        self.force_in::<U>().value
    }

    /// Implicit conversion to another reference.
    pub fn to<T: Reference>(self) -> Quantity<T, Rep> {
        let () = Conversion::<R, T, Rep>::IMPLICIT;
        trace!(
            "converting {} to {}",
            R::Unit::INFO,
            T::Unit::INFO
        );
        Quantity::new(Rescale::<R::Unit, T::Unit>::apply(self.value))
    }

    /// Explicit conversion to another reference, truncating integer
    /// values if needed.
    pub fn force_to<T: Reference>(self) -> Quantity<T, Rep> {
        let () = Conversion::<R, T, Rep>::EXPLICIT;
        Quantity::new(Rescale::<R::Unit, T::Unit>::apply(self.value))
    }

    pub fn in_unit<U: Unit>(self) -> Quantity<Ref<R::Spec, U>, Rep> {
        self.to()
    }

    pub fn force_in<U: Unit>(self) -> Quantity<Ref<R::Spec, U>, Rep> {
        self.force_to()
    }

    pub fn value_cast<U: Unit>(self) -> Quantity<Ref<R::Spec, U>, Rep> {
        self.force_in()
    }

    /// Same spec and unit, another representation.
    pub fn cast_rep<Rep2: Scalar>(self) -> Quantity<R, Rep2>
    where
        Rep: Scalar,
    {
        Quantity::new(Rep2::cast_from(self.value))
    }

    /// Reinterpret as a related quantity of the same kind (`height` as
    /// `width`), keeping the unit and the value.
    pub fn quantity_cast<Q: QuantitySpec>(self) -> Quantity<Ref<Q, R::Unit>, Rep> {
        let () = Conversion::<R, Ref<Q, R::Unit>, Rep>::CAST;
        Quantity::new(self.value)
    }

    /// Explicit conversion to a more specific quantity spec.
    pub fn as_spec<Q: QuantitySpec>(self) -> Quantity<Ref<Q, R::Unit>, Rep> {
        let () = Conversion::<R, Ref<Q, R::Unit>, Rep>::EXPLICIT;
        Quantity::new(self.value)
    }

    pub fn pow<const N: i64>(self) -> Quantity<Pow<R, N>, Rep>
    where
        Rep: Scalar,
    {
        Quantity::new(self.value.powr(Ratio::integer(N)))
    }

    pub fn sqrt(self) -> Quantity<Pow<R, 1, 2>, Rep>
    where
        Rep: Scalar,
    {
        Quantity::new(Scalar::sqrt(self.value))
    }

    pub fn abs(self) -> Self
    where
        Rep: Scalar,
    {
        Quantity::new(Scalar::abs(self.value))
    }
}

/// Both values in the common unit and representation.
fn common_values<R1, R2, Rep1, Rep2>(
    lhs: Quantity<R1, Rep1>,
    rhs: Quantity<R2, Rep2>,
) -> (Rep1::Output, Rep1::Output)
where
    R1: Reference,
    R2: Reference,
    Rep1: CommonRep<Rep2>,
    Rep2: Representation,
{
    let () = Admissible::<Common<R1, R2>, Rep1::Output>::CHECK;
    (
        Rescale::<R1::Unit, Common<R1::Unit, R2::Unit>>::apply(Rep1::lhs(lhs.value)),
        Rescale::<R2::Unit, Common<R1::Unit, R2::Unit>>::apply(Rep1::rhs(rhs.value)),
    )
}

impl<R, Rep: Clone> Clone for Quantity<R, Rep> {
    fn clone(&self) -> Self {
        Quantity {
            value: self.value.clone(),
            reference: PhantomData,
        }
    }
}

impl<R, Rep: Copy> Copy for Quantity<R, Rep> {}

impl<R: Reference, Rep: Representation> Debug for Quantity<R, Rep> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        f.debug_struct("Quantity")
            .field("value", &self.value)
            .field("unit", &R::Unit::INFO.symbol())
            .field("spec", &R::Spec::INFO.to_string())
            .finish()
    }
}

impl<R: Reference, Rep: Representation> Display for Quantity<R, Rep> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        Display::fmt(&self.value, f)?;
        let symbol = R::Unit::INFO.symbol_text(f.alternate());
        match symbol.is_empty() {
            true => Ok(()),
            false => write!(f, " {symbol}"),
        }
    }
}

impl<R1, R2, Rep1, Rep2> Add<Quantity<R2, Rep2>> for Quantity<R1, Rep1>
where
    R1: Reference,
    R2: Reference,
    Rep1: CommonRep<Rep2>,
    Rep2: Representation,
    Rep1::Output: Add<Output = Rep1::Output>,
{
    type Output = Quantity<Common<R1, R2>, Rep1::Output>;
    fn add(self, rhs: Quantity<R2, Rep2>) -> Self::Output {
        let (a, b) = common_values(self, rhs);
        Quantity::new(a + b)
    }
}

impl<R1, R2, Rep1, Rep2> Sub<Quantity<R2, Rep2>> for Quantity<R1, Rep1>
where
    R1: Reference,
    R2: Reference,
    Rep1: CommonRep<Rep2>,
    Rep2: Representation,
    Rep1::Output: Sub<Output = Rep1::Output>,
{
    type Output = Quantity<Common<R1, R2>, Rep1::Output>;
    fn sub(self, rhs: Quantity<R2, Rep2>) -> Self::Output {
        let (a, b) = common_values(self, rhs);
        Quantity::new(a - b)
    }
}

impl<R1, R2, Rep1, Rep2> Mul<Quantity<R2, Rep2>> for Quantity<R1, Rep1>
where
    R1: Reference,
    R2: Reference,
    Rep1: Representation + Mul<Rep2>,
    Rep2: Representation,
    <Rep1 as Mul<Rep2>>::Output: Representation,
{
    type Output = Quantity<Prod<R1, R2>, <Rep1 as Mul<Rep2>>::Output>;
    fn mul(self, rhs: Quantity<R2, Rep2>) -> Self::Output {
        Quantity::new(self.value * rhs.value)
    }
}

impl<R1, R2, Rep1, Rep2> Div<Quantity<R2, Rep2>> for Quantity<R1, Rep1>
where
    R1: Reference,
    R2: Reference,
    Rep1: Representation + Div<Rep2>,
    Rep2: Representation,
    <Rep1 as Div<Rep2>>::Output: Representation,
{
    type Output = Quantity<Per<R1, R2>, <Rep1 as Div<Rep2>>::Output>;
    fn div(self, rhs: Quantity<R2, Rep2>) -> Self::Output {
        Quantity::new(self.value / rhs.value)
    }
}

impl<R, Rep> Neg for Quantity<R, Rep>
where
    R: Reference,
    Rep: Representation + Neg<Output = Rep>,
{
    type Output = Self;
    fn neg(self) -> Self {
        Quantity::new(-self.value)
    }
}

macro_rules! scalar_arithmetic {
    ($($rep:ty),*) => { $(
        impl<R: Reference> Mul<$rep> for Quantity<R, $rep> {
            type Output = Self;
            fn mul(self, rhs: $rep) -> Self {
                Quantity::new(self.value * rhs)
            }
        }

        impl<R: Reference> Div<$rep> for Quantity<R, $rep> {
            type Output = Self;
            fn div(self, rhs: $rep) -> Self {
                Quantity::new(self.value / rhs)
            }
        }

        impl<R: Reference> Mul<Quantity<R, $rep>> for $rep {
            type Output = Quantity<R, $rep>;
            fn mul(self, rhs: Quantity<R, $rep>) -> Quantity<R, $rep> {
                Quantity::new(self * rhs.value)
            }
        }

        impl<R: Reference> Div<Quantity<R, $rep>> for $rep {
            type Output = Quantity<Pow<R, -1>, $rep>;
            fn div(self, rhs: Quantity<R, $rep>) -> Quantity<Pow<R, -1>, $rep> {
                Quantity::new(self / rhs.value)
            }
        }
    )* };
}

scalar_arithmetic!(f64, i32);

impl<R1, R2, Rep1, Rep2> PartialEq<Quantity<R2, Rep2>> for Quantity<R1, Rep1>
where
    R1: Reference,
    R2: Reference,
    Rep1: CommonRep<Rep2>,
    Rep2: Representation,
{
    fn eq(&self, other: &Quantity<R2, Rep2>) -> bool {
        let (a, b) = common_values(*self, *other);
        a == b
    }
}

impl<R1, R2, Rep1, Rep2> PartialOrd<Quantity<R2, Rep2>> for Quantity<R1, Rep1>
where
    R1: Reference,
    R2: Reference,
    Rep1: CommonRep<Rep2>,
    Rep2: Representation,
    Rep1::Output: PartialOrd,
{
    fn partial_cmp(&self, other: &Quantity<R2, Rep2>) -> Option<Ordering> {
        let (a, b) = common_values(*self, *other);
        a.partial_cmp(&b)
    }
}

impl<R: Reference, Rep: Representation + Serialize> Serialize for Quantity<R, Rep> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Quantity", 2)?;
        s.serialize_field("value", &self.value)?;
        s.serialize_field("unit", &R::Unit::INFO.symbol())?;
        s.end()
    }
}

#[derive(Deserialize)]
struct QuantityRepr<Rep> {
    value: Rep,
    unit: String,
}

impl<'de, R, Rep> Deserialize<'de> for Quantity<R, Rep>
where
    R: Reference,
    Rep: Representation + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = QuantityRepr::<Rep>::deserialize(deserializer)?;
        let info = R::Unit::INFO;
        match repr.unit == info.symbol() || repr.unit == info.ascii_symbol() {
            true => Ok(Quantity::new(repr.value)),
            false => Err(de::Error::custom(UnitError::UnitMismatch {
                expected: info.symbol(),
                found: repr.unit,
            })),
        }
    }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::Quantity;
    use crate::combinators::{Per, Ref};
    use crate::error::UnitError;
    use crate::prefix::{Kilo, Milli};
    use crate::systems::international::{Foot, Mile};
    use crate::systems::isq::{Height, Length, Speed, Width};
    use crate::systems::si::{Hour, Metre, Second};

    #[test]
    fn construction_and_access() {
        let d = 1.5 * Kilo::<Metre>::new();
        assert_eq!(d.numerical_value(), 1.5);
        assert_eq!(d.numerical_value_in::<Metre>(), 1500.0);
        assert_eq!(d.to_string(), "1.5 km");
        let h = Quantity::<Ref<Height, Metre>, i32>::new(3);
        assert_eq!(h.to_string(), "3 m");
    }

    #[test]
    fn unit_conversions() {
        let d = 2 * Kilo::<Metre>::new();
        assert_eq!(d.in_unit::<Metre>().numerical_value(), 2000);
        let m = 1500 * Metre;
        assert_eq!(m.force_numerical_value_in::<Kilo<Metre>>(), 1);
        assert_relative_eq!(
            (1.0 * Mile).numerical_value_in::<Foot>(),
            5280.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn addition_uses_the_common_unit() {
        let sum = 1 * Kilo::<Metre>::new() + 1 * Metre;
        assert_eq!(sum.numerical_value(), 1001);
        assert_eq!(sum.to_string(), "1001 m");
        let mixed = 1 * Metre + 0.5 * Metre;
        assert_eq!(mixed.numerical_value(), 1.5);
        let diff = 1.0 * Kilo::<Metre>::new() - 1.0 * Milli::<Metre>::new();
        assert_eq!(diff.numerical_value(), 999_999.0);
    }

    #[test]
    fn mixed_integers_promote_exactly() {
        let sum = Quantity::<Metre, i32>::new(1)
            + Quantity::<Metre, i64>::new(9_007_199_254_740_993);
        assert_eq!(sum.numerical_value(), 9_007_199_254_740_994i64);
        let q = Quantity::<Metre, i64>::new(9_007_199_254_740_993);
        assert_eq!(q.cast_rep::<i64>().numerical_value(), 9_007_199_254_740_993);
        let q = Quantity::<Metre, u32>::new(7);
        assert_eq!(q.cast_rep::<i64>().numerical_value(), 7);
    }

    #[test]
    #[should_panic(expected = "does not fit in i32")]
    fn integer_conversion_overflow_panics() {
        let _ = Quantity::<Kilo<Metre>, i32>::new(3_000_000).in_unit::<Metre>();
    }

    #[test]
    fn comparisons_across_units() {
        assert_eq!(1.0 * Kilo::<Metre>::new(), 1000.0 * Metre);
        assert!(1 * Kilo::<Metre>::new() > 999 * Metre);
        assert!(3.0 * Foot < 1.0 * Metre);
    }

    #[test]
    fn specs_follow_the_operands() {
        let h = Quantity::<Ref<Height, Metre>>::new(2.0);
        let w = Quantity::<Ref<Width, Metre>>::new(3.0);
        let l: Quantity<Ref<Length, Metre>> = (h + w).to();
        assert_eq!(l.numerical_value(), 5.0);
        let w2: Quantity<Ref<Width, Metre>> = h.quantity_cast::<Width>();
        assert_eq!(w2.numerical_value(), 2.0);
        let h2: Quantity<Ref<Height, Metre>> = l.as_spec::<Height>();
        assert_eq!(h2.numerical_value(), 5.0);
    }

    #[test]
    fn derived_quantities() {
        let v = (120.0 * Kilo::<Metre>::new()) / (2.0 * Hour);
        let v: Quantity<Ref<Speed, Per<Metre, Second>>> = v.to();
        assert_relative_eq!(v.numerical_value(), 16.666_666_666_666_668);
        assert_eq!(format!("{v:.1}"), "16.7 m/s");
        let a = (3.0 * Metre).pow::<2>();
        assert_eq!(a.to_string(), "9 m\u{00b2}");
        assert_eq!(a.sqrt().numerical_value(), 3.0);
        assert_eq!((-(2.0 * Metre)).abs(), 2.0 * Metre);
    }

    #[test]
    fn scalar_arithmetic() {
        let d = 3.0 * Metre * 2.0 / 4.0;
        assert_eq!(d.numerical_value(), 1.5);
        let per = 1.0 / (4.0 * Second);
        assert_eq!(per.numerical_value(), 0.25);
        assert_eq!(per.unit().to_string(), "1/s");
    }

    #[test]
    fn serde() {
        let d = 1.5 * Kilo::<Metre>::new();
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#"{"value":1.5,"unit":"km"}"#);
        let back: Quantity<Kilo<Metre>> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
        let err = serde_json::from_str::<Quantity<Metre>>(&json).unwrap_err();
        let expected = UnitError::UnitMismatch {
            expected: "m".to_string(),
            found: "km".to_string(),
        };
        assert!(err.to_string().starts_with(&expected.to_string()));
    }
}
