/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use crate::combinators::SpecOf;
use crate::quantity_spec::QuantitySpec;
use crate::unit::{One, Unit};

/// What a quantity is and what its number counts: a quantity spec
/// paired with a unit.
///
/// Units associated with a quantity kind are references on their own
/// (`Metre` is `Ref<KindOf<Length>, Metre>`); other pairs are written
/// out with [`Ref`](crate::Ref).
pub trait Reference: 'static {
    type Spec: QuantitySpec;
    type Unit: Unit;
}

impl Reference for One {
    type Spec = SpecOf<One>;
    type Unit = One;
}

/// Generate `scalar * reference` and `scalar / reference` for `f64`
/// and `i32`. Other representations are built with `Quantity::new`.
#[doc(hidden)]
#[macro_export]
macro_rules! __scalar_times_reference {
    ([$($g:tt)*] $ty:ty) => {
        $crate::__scalar_times_reference!(@each [$($g)*] $ty; f64 i32);
    };
    (@each [$($g:tt)*] $ty:ty;) => {};
    (@each [$($g:tt)*] $ty:ty; $rep:ident $($rest:ident)*) => {
        impl<$($g)*> ::std::ops::Mul<$ty> for $rep
        where
            $ty: $crate::Reference,
        {
            type Output = $crate::Quantity<$ty, $rep>;
            fn mul(self, _: $ty) -> Self::Output {
                $crate::Quantity::new(self)
            }
        }

        impl<$($g)*> ::std::ops::Div<$ty> for $rep
        where
            $ty: $crate::Reference,
        {
            type Output = $crate::Quantity<$crate::Pow<$ty, -1>, $rep>;
            fn div(self, _: $ty) -> Self::Output {
                $crate::Quantity::new(self)
            }
        }

        $crate::__scalar_times_reference!(@each [$($g)*] $ty; $($rest)*);
    };
}

__scalar_times_reference!([] One);

#[cfg(test)]
mod test {
    use crate::combinators::Per;
    use crate::quantity::Quantity;
    use crate::systems::si::{Metre, Second};
    use crate::unit::One;

    #[test]
    fn scalars_times_references() {
        let q: Quantity<Per<Metre, Second>> = 3.0 * Per::<Metre, Second>::new();
        assert_eq!(q.numerical_value(), 3.0);
        let n: Quantity<One, i32> = 7 * One;
        assert_eq!(n.numerical_value(), 7);
        let f = 2.0 / Second;
        assert_eq!(f.numerical_value(), 2.0);
        assert_eq!(f.unit().to_string(), "1/s");
    }

    #[test]
    fn unsuffixed_literals_infer() {
        let d = 1.5 * Metre;
        assert_eq!(d.numerical_value(), 1.5);
        let n = 3 * Metre;
        assert_eq!(n.numerical_value(), 3);
        let wide = Quantity::<Metre, i64>::new(3) + n;
        assert_eq!(wide.numerical_value(), 6i64);
    }
}
