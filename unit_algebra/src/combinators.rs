/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Type constructors combining units, quantity specs and references.
//!
//! Each marker is a zero-sized type that is a [`Unit`] when its
//! arguments are units, a [`QuantitySpec`] when they are specs and a
//! [`Reference`] when they are references, so the same expression
//! `Per<Metre, Second>` works at every level.

use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use crate::convertibility::get_common_quantity_spec;
use crate::quantity_spec::{QuantitySpec, SpecInfo};
use crate::ratio::Ratio;
use crate::reference::Reference;
use crate::unit::{Unit, UnitInfo};

macro_rules! marker {
    ($(#[$attr:meta])* $name:ident<$($p:ident),+>) => {
        $(#[$attr])*
        pub struct $name<$($p),+>(PhantomData<fn() -> ($($p,)+)>);

        impl<$($p),+> $name<$($p),+> {
            pub const fn new() -> Self {
                $name(PhantomData)
            }
        }

        impl<$($p),+> Clone for $name<$($p),+> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<$($p),+> Copy for $name<$($p),+> {}

        impl<$($p),+> Default for $name<$($p),+> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<$($p),+> Debug for $name<$($p),+> {
            fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
                f.write_str(std::any::type_name::<Self>())
            }
        }
    };
}

marker!(
    /// `A * B`.
    Prod<A, B>
);
marker!(
    /// `A / B`.
    Per<A, B>
);
marker!(
    /// Common unit, spec or reference of two operands of an addition.
    Common<A, B>
);
marker!(
    /// The quantity kind of `Q`.
    KindOf<Q>
);
marker!(
    /// The quantity kind associated with a unit.
    SpecOf<U>
);
marker!(
    /// A quantity spec paired with a unit.
    Ref<Q, U>
);

/// `A^(N/D)`.
pub struct Pow<A, const N: i64, const D: i64 = 1>(PhantomData<fn() -> A>);

impl<A, const N: i64, const D: i64> Pow<A, N, D> {
    pub const fn new() -> Self {
        Pow(PhantomData)
    }
}

impl<A, const N: i64, const D: i64> Clone for Pow<A, N, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A, const N: i64, const D: i64> Copy for Pow<A, N, D> {}

impl<A, const N: i64, const D: i64> Default for Pow<A, N, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, const N: i64, const D: i64> Debug for Pow<A, N, D> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        f.write_str(std::any::type_name::<Self>())
    }
}

/* Units. */

impl<A: Unit, B: Unit> Unit for Prod<A, B> {
    const INFO: &'static UnitInfo = &UnitInfo::product(A::INFO, B::INFO);
}

impl<A: Unit, B: Unit> Unit for Per<A, B> {
    const INFO: &'static UnitInfo = &UnitInfo::quotient(A::INFO, B::INFO);
}

impl<A: Unit, const N: i64, const D: i64> Unit for Pow<A, N, D> {
    const INFO: &'static UnitInfo = &UnitInfo::power(A::INFO, Ratio::new(N, D));
}

impl<A: Unit, B: Unit> Unit for Common<A, B> {
    const INFO: &'static UnitInfo = &UnitInfo::common_unit(A::INFO, B::INFO);
}

/* Quantity specs. */

impl<A: QuantitySpec, B: QuantitySpec> QuantitySpec for Prod<A, B> {
    const INFO: SpecInfo = A::INFO.mul(B::INFO);
}

impl<A: QuantitySpec, B: QuantitySpec> QuantitySpec for Per<A, B> {
    const INFO: SpecInfo = A::INFO.div(B::INFO);
}

impl<A: QuantitySpec, const N: i64, const D: i64> QuantitySpec for Pow<A, N, D> {
    const INFO: SpecInfo = A::INFO.pow(Ratio::new(N, D));
}

impl<A: QuantitySpec, B: QuantitySpec> QuantitySpec for Common<A, B> {
    const INFO: SpecInfo = match get_common_quantity_spec(&A::INFO, &B::INFO) {
        Some(spec) => spec,
        None => panic!("quantities have no common quantity spec"),
    };
}

impl<Q: QuantitySpec> QuantitySpec for KindOf<Q> {
    const INFO: SpecInfo = Q::INFO.kind_of();
}

impl<U: Unit> QuantitySpec for SpecOf<U> {
    const INFO: SpecInfo = match U::INFO.quantity_spec() {
        Some(spec) => spec,
        None => panic!("unit is not associated with a quantity spec"),
    };
}

/* References. */

impl<Q: QuantitySpec, U: Unit> Reference for Ref<Q, U> {
    type Spec = Q;
    type Unit = U;
}

impl<A: Reference, B: Reference> Reference for Prod<A, B> {
    type Spec = Prod<A::Spec, B::Spec>;
    type Unit = Prod<A::Unit, B::Unit>;
}

impl<A: Reference, B: Reference> Reference for Per<A, B> {
    type Spec = Per<A::Spec, B::Spec>;
    type Unit = Per<A::Unit, B::Unit>;
}

impl<A: Reference, const N: i64, const D: i64> Reference for Pow<A, N, D> {
    type Spec = Pow<A::Spec, N, D>;
    type Unit = Pow<A::Unit, N, D>;
}

impl<A: Reference, B: Reference> Reference for Common<A, B> {
    type Spec = Common<A::Spec, B::Spec>;
    type Unit = Common<A::Unit, B::Unit>;
}

crate::__scalar_times_reference!([Q: QuantitySpec, U: Unit] Ref<Q, U>);
crate::__scalar_times_reference!([A: Reference, B: Reference] Prod<A, B>);
crate::__scalar_times_reference!([A: Reference, B: Reference] Per<A, B>);
crate::__scalar_times_reference!([A: Reference, const N: i64, const D: i64] Pow<A, N, D>);

#[cfg(test)]
mod test {
    use super::{Common, KindOf, Per, Pow, Prod, SpecOf};
    use crate::quantity_spec::QuantitySpec;
    use crate::systems::isq::{Height, Length, Speed, Time, Width};
    use crate::systems::si::{Metre, Second};
    use crate::unit::{One, Unit};
    use crate::Milli;

    #[test]
    fn unit_expressions() {
        assert_eq!(<Per<Metre, Second> as Unit>::INFO.to_string(), "m/s");
        assert_eq!(<Pow<Metre, 2> as Unit>::INFO.to_string(), "m\u{00b2}");
        assert_eq!(<Pow<Pow<Metre, 2>, 1, 2> as Unit>::INFO, Metre::INFO);
        assert!(<Per<Metre, Metre> as Unit>::INFO.is_one());
        assert_eq!(<Prod<One, Metre> as Unit>::INFO, Metre::INFO);
        assert_eq!(<Common<Metre, Milli<Metre>> as Unit>::INFO.to_string(), "mm");
    }

    #[test]
    fn spec_expressions() {
        let speed = <Per<Length, Time> as QuantitySpec>::INFO;
        assert_eq!(speed.to_string(), "Length/Time");
        assert_ne!(speed, Speed::INFO);
        assert_eq!(<Common<Height, Width> as QuantitySpec>::INFO, Length::INFO);
        assert!(<KindOf<Length> as QuantitySpec>::INFO.is_kind_of());
        assert_eq!(
            <SpecOf<Metre> as QuantitySpec>::INFO,
            <KindOf<Length> as QuantitySpec>::INFO
        );
    }
}
