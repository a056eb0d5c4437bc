/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::ops::{Add, Sub};

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use crate::combinators::{Common, Ref};
use crate::quantity::Quantity;
use crate::quantity_spec::{QuantitySpec, SpecInfo};
use crate::ratio::Ratio;
use crate::reference::Reference;
use crate::representation::{CommonRep, Representation, Scalar};
use crate::symbol::str_eq;
use crate::unit::{Unit, UnitInfo};

#[derive(Clone, Copy, Debug)]
pub enum OriginKind {
    /// A fixed zero, such as absolute zero or the Unix epoch.
    Absolute,
    /// An exact offset from another origin.
    Relative {
        base: &'static OriginInfo,
        offset: Ratio,
        unit: &'static UnitInfo,
    },
    /// The implicit zero of a quantity spec.
    Zeroth { spec: SpecInfo },
}

#[derive(Clone, Copy, Debug)]
pub struct OriginInfo {
    pub name: &'static str,
    pub kind: OriginKind,
}

impl OriginInfo {
    pub const fn absolute(name: &'static str) -> Self {
        OriginInfo {
            name,
            kind: OriginKind::Absolute,
        }
    }

    pub const fn relative(
        name: &'static str,
        base: &'static OriginInfo,
        offset: Ratio,
        unit: &'static UnitInfo,
    ) -> Self {
        OriginInfo {
            name,
            kind: OriginKind::Relative { base, offset, unit },
        }
    }

    pub const fn zeroth(spec: SpecInfo) -> Self {
        OriginInfo {
            name: "zeroth",
            kind: OriginKind::Zeroth { spec },
        }
    }

    pub const fn eq(&self, other: &OriginInfo) -> bool {
        match (&self.kind, &other.kind) {
            (OriginKind::Zeroth { spec: a }, OriginKind::Zeroth { spec: b }) => {
                a.eq(b)
            }
            _ => str_eq(self.name, other.name),
        }
    }

    pub fn short_name(&self) -> &'static str {
        self.name.rsplit("::").next().unwrap_or(self.name)
    }

    /// The absolute origin at the end of the chain.
    pub const fn root(&'static self) -> &'static OriginInfo {
        match &self.kind {
            OriginKind::Relative { base, .. } => base.root(),
            _ => self,
        }
    }

    /// Distance from the root, as an exact number of `unit`.
    pub const fn offset_in(&'static self, unit: &'static UnitInfo) -> Ratio {
        match &self.kind {
            OriginKind::Relative {
                base,
                offset,
                unit: offset_unit,
            } => {
                let factor = UnitInfo::conversion_factor(offset_unit, unit);
                let factor = match factor.try_as_ratio() {
                    Some(factor) => factor,
                    None => panic!("origin offset is not a rational number of units"),
                };
                base.offset_in(unit).add(offset.mul(factor))
            }
            _ => Ratio::ZERO,
        }
    }
}

impl Display for OriginInfo {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match &self.kind {
            OriginKind::Zeroth { spec } => write!(f, "zeroth<{spec}>"),
            _ => write!(f, "{}", self.short_name()),
        }
    }
}

/// A point origin, identified by a zero-sized marker type.
pub trait PointOrigin: 'static {
    const INFO: &'static OriginInfo;
}

/// A unit that measures from its own origin (`°C`, `K`).
pub trait OffsetUnit: Reference {
    type Origin: PointOrigin;
}

/// The implicit origin of quantity points of spec `Q`.
pub struct ZerothOrigin<Q>(PhantomData<fn() -> Q>);

impl<Q: QuantitySpec> PointOrigin for ZerothOrigin<Q> {
    const INFO: &'static OriginInfo = &OriginInfo::zeroth(Q::INFO);
}

struct SameRoot<A, B>(PhantomData<fn() -> (A, B)>);

impl<A: PointOrigin, B: PointOrigin> SameRoot<A, B> {
    const CHECK: () = assert!(
        A::INFO.root().eq(B::INFO.root()),
        "points do not share an absolute origin"
    );
}

struct OriginOffset<O, U>(PhantomData<fn() -> (O, U)>);

impl<O: PointOrigin, U: Unit> OriginOffset<O, U> {
    const VALUE: Ratio = O::INFO.offset_in(U::INFO);
}

/// A quantity measured from a point origin: a position on a scale
/// rather than a distance. Points can be moved by quantities and
/// subtracted from each other, but not added.
pub struct QuantityPoint<R, O, Rep = f64> {
    quantity: Quantity<R, Rep>,
    origin: PhantomData<fn() -> O>,
}

/// A point of an offset unit, measured from the unit's own origin:
/// `point::<DegreeCelsius, _>(20.0)`.
pub fn point<U: OffsetUnit, Rep: Representation>(value: Rep) -> QuantityPoint<U, U::Origin, Rep> {
    QuantityPoint::new(Quantity::new(value))
}

impl<R: Reference, O: PointOrigin, Rep: Representation> QuantityPoint<R, O, Rep> {
    pub const fn new(quantity: Quantity<R, Rep>) -> Self {
        QuantityPoint {
            quantity,
            origin: PhantomData,
        }
    }

    pub fn origin(&self) -> &'static OriginInfo {
        O::INFO
    }

    pub fn quantity_from_origin(&self) -> Quantity<R, Rep> {
        self.quantity
    }

    pub fn in_unit<U: Unit>(self) -> QuantityPoint<Ref<R::Spec, U>, O, Rep> {
        QuantityPoint::new(self.quantity.in_unit())
    }

    pub fn to<T: Reference>(self) -> QuantityPoint<T, O, Rep> {
        QuantityPoint::new(self.quantity.to())
    }
}

impl<R: Reference, O: PointOrigin, Rep: Scalar> QuantityPoint<R, O, Rep> {
    /// Distance from another origin of the same scale.
    pub fn quantity_from<O2: PointOrigin>(&self) -> Quantity<R, Rep> {
        let () = SameRoot::<O, O2>::CHECK;
        let delta = OriginOffset::<O, R::Unit>::VALUE.sub(OriginOffset::<O2, R::Unit>::VALUE);
        Quantity::new(self.quantity.numerical_value().add_ratio(delta))
    }

    /// Distance from the absolute origin of the scale.
    pub fn quantity_from_zero(&self) -> Quantity<R, Rep> {
        Quantity::new(
            self.quantity
                .numerical_value()
                .add_ratio(OriginOffset::<O, R::Unit>::VALUE),
        )
    }

    /// The same point, measured from another origin.
    pub fn point_for<O2: PointOrigin>(self) -> QuantityPoint<R, O2, Rep> {
        QuantityPoint::new(self.quantity_from::<O2>())
    }
}

impl<R, O, Rep: Copy> Clone for QuantityPoint<R, O, Rep> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, O, Rep: Copy> Copy for QuantityPoint<R, O, Rep> {}

impl<R: Reference, O: PointOrigin, Rep: Representation> Debug for QuantityPoint<R, O, Rep> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        f.debug_struct("QuantityPoint")
            .field("quantity", &self.quantity)
            .field("origin", &O::INFO.to_string())
            .finish()
    }
}

impl<R: Reference, O: PointOrigin, Rep: Representation> Display for QuantityPoint<R, O, Rep> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        Display::fmt(&self.quantity, f)
    }
}

impl<R, R2, O, Rep> Add<Quantity<R2, Rep>> for QuantityPoint<R, O, Rep>
where
    R: Reference,
    R2: Reference,
    O: PointOrigin,
    Rep: CommonRep<Rep, Output = Rep> + Add<Output = Rep>,
{
    type Output = QuantityPoint<Common<R, R2>, O, Rep>;
    fn add(self, rhs: Quantity<R2, Rep>) -> Self::Output {
        QuantityPoint::new(self.quantity + rhs)
    }
}

impl<R, R2, O, Rep> Sub<Quantity<R2, Rep>> for QuantityPoint<R, O, Rep>
where
    R: Reference,
    R2: Reference,
    O: PointOrigin,
    Rep: CommonRep<Rep, Output = Rep> + Sub<Output = Rep>,
{
    type Output = QuantityPoint<Common<R, R2>, O, Rep>;
    fn sub(self, rhs: Quantity<R2, Rep>) -> Self::Output {
        QuantityPoint::new(self.quantity - rhs)
    }
}

/// The distance between two points of the same scale.
impl<R, R2, O, O2, Rep> Sub<QuantityPoint<R2, O2, Rep>> for QuantityPoint<R, O, Rep>
where
    R: Reference,
    R2: Reference,
    O: PointOrigin,
    O2: PointOrigin,
    Rep: Scalar + CommonRep<Rep, Output = Rep> + Sub<Output = Rep>,
{
    type Output = Quantity<Common<R, R2>, Rep>;
    fn sub(self, rhs: QuantityPoint<R2, O2, Rep>) -> Self::Output {
        let () = SameRoot::<O, O2>::CHECK;
        self.quantity_from_zero() - rhs.quantity_from_zero()
    }
}

impl<R, R2, O, O2, Rep> PartialEq<QuantityPoint<R2, O2, Rep>> for QuantityPoint<R, O, Rep>
where
    R: Reference,
    R2: Reference,
    O: PointOrigin,
    O2: PointOrigin,
    Rep: Scalar + CommonRep<Rep, Output = Rep>,
{
    fn eq(&self, other: &QuantityPoint<R2, O2, Rep>) -> bool {
        let () = SameRoot::<O, O2>::CHECK;
        self.quantity_from_zero() == other.quantity_from_zero()
    }
}

impl<R, R2, O, O2, Rep> PartialOrd<QuantityPoint<R2, O2, Rep>> for QuantityPoint<R, O, Rep>
where
    R: Reference,
    R2: Reference,
    O: PointOrigin,
    O2: PointOrigin,
    Rep: Scalar + CommonRep<Rep, Output = Rep>,
{
    fn partial_cmp(&self, other: &QuantityPoint<R2, O2, Rep>) -> Option<Ordering> {
        let () = SameRoot::<O, O2>::CHECK;
        self.quantity_from_zero()
            .partial_cmp(&other.quantity_from_zero())
    }
}

impl<R, O, Rep> Serialize for QuantityPoint<R, O, Rep>
where
    R: Reference,
    O: PointOrigin,
    Rep: Representation + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("QuantityPoint", 3)?;
        s.serialize_field("value", &self.quantity.numerical_value())?;
        s.serialize_field("unit", &R::Unit::INFO.symbol())?;
        s.serialize_field("origin", &O::INFO.to_string())?;
        s.end()
    }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::{point, PointOrigin, QuantityPoint};
    use crate::quantity::Quantity;
    use crate::systems::si::{AbsoluteZero, DegreeCelsius, IcePoint, Kelvin, Metre};
    use crate::Milli;

    crate::point_origin!(Sea);
    crate::point_origin!(Harbour = Sea, 12, Metre);

    mod ocean {
        crate::point_origin!(pub Zero);
    }

    mod calendar {
        crate::point_origin!(pub Zero);
    }

    #[test]
    fn origins() {
        assert_eq!(Harbour::INFO.root().name, Sea::INFO.name);
        assert_eq!(
            Harbour::INFO.offset_in(<Milli<Metre> as crate::Unit>::INFO),
            crate::Ratio::integer(12_000)
        );
        assert!(IcePoint::INFO.root().eq(AbsoluteZero::INFO));
    }

    #[test]
    fn origins_are_qualified_by_module() {
        assert!(!ocean::Zero::INFO.eq(calendar::Zero::INFO));
        assert!(!ocean::Zero::INFO.root().eq(calendar::Zero::INFO.root()));
        assert!(ocean::Zero::INFO.eq(ocean::Zero::INFO));
        assert_eq!(ocean::Zero::INFO.to_string(), "Zero");
        assert!(ocean::Zero::INFO.name.ends_with("ocean::Zero"));
    }

    #[test]
    fn integer_points_stay_exact() {
        let p = point::<Kelvin, i64>(9_007_199_254_740_993);
        assert_eq!(
            p.quantity_from_zero().numerical_value(),
            9_007_199_254_740_993
        );
        let h: QuantityPoint<Metre, Harbour, i64> =
            QuantityPoint::new(Quantity::new(9_007_199_254_740_993));
        assert_eq!(
            h.quantity_from::<Sea>().numerical_value(),
            9_007_199_254_741_005
        );
        let ice = point::<DegreeCelsius, i64>(20).in_unit::<Milli<Kelvin>>();
        assert_eq!(ice.quantity_from_zero().numerical_value(), 293_150);
    }

    #[test]
    fn temperatures() {
        let room = point::<DegreeCelsius, _>(20.0);
        assert_relative_eq!(room.quantity_from_zero().numerical_value(), 293.15);
        let k = room.point_for::<AbsoluteZero>().in_unit::<Kelvin>();
        assert_relative_eq!(k.quantity_from_origin().numerical_value(), 293.15);
        assert_eq!(room.to_string(), "20 \u{2103}");
        let warmer = room + 5.0 * Kelvin;
        assert_relative_eq!(
            (warmer - room).numerical_value_in::<Kelvin>(),
            5.0,
            epsilon = 1e-9
        );
        assert!(warmer > room);
    }

    #[test]
    fn relative_points() {
        let depth: QuantityPoint<Metre, Harbour> = QuantityPoint::new(3.0 * Metre);
        assert_eq!(depth.quantity_from::<Sea>().numerical_value(), 15.0);
        let at_sea: QuantityPoint<Metre, Sea> = depth.point_for();
        assert_eq!(at_sea, depth);
        let d: Quantity<Metre> = (depth - at_sea).to();
        assert_eq!(d.numerical_value(), 0.0);
    }
}
