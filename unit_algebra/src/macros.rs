/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Declaration macros for quantity specs, units and point origins.

/// Declare a named quantity spec.
///
/// ```
/// use unit_algebra::{quantity_spec, Per, QuantitySpec};
///
/// quantity_spec!(pub Length: dim "L");
/// quantity_spec!(pub Time: dim "T");
/// quantity_spec!(pub Height: Length);
/// quantity_spec!(pub Displacement: Length, vector);
/// quantity_spec!(pub Speed = Per<Length, Time>);
/// quantity_spec!(pub Velocity: Speed = Per<Displacement, Time>);
///
/// assert_eq!(Velocity::INFO.to_string(), "Velocity");
/// ```
///
/// The forms are, in order: a base quantity with its own dimension, a
/// root defined by an equation, a child with a refined equation and a
/// plain child. Flags (`is_kind`, `vector`, `tensor`) follow after a
/// comma.
#[macro_export]
macro_rules! quantity_spec {
    ($(#[$attr:meta])* $vis:vis $name:ident: dim $dim:literal $(, $flag:ident)* $(;)?) => {
        $crate::__quantity_spec!(
            [$(#[$attr])*] $vis $name,
            $crate::NamedSpec::base(
                concat!(module_path!(), "::", stringify!($name)),
                $crate::Dimension::base($dim),
            )
            $(.$flag())*
        );
    };
    ($(#[$attr:meta])* $vis:vis $name:ident = $eq:ty $(, $flag:ident)* $(;)?) => {
        $crate::__quantity_spec!(
            [$(#[$attr])*] $vis $name,
            $crate::NamedSpec::derived(
                concat!(module_path!(), "::", stringify!($name)),
                <$eq as $crate::QuantitySpec>::INFO,
            )
            $(.$flag())*
        );
    };
    ($(#[$attr:meta])* $vis:vis $name:ident: $parent:ty = $eq:ty $(, $flag:ident)* $(;)?) => {
        $crate::__quantity_spec!(
            [$(#[$attr])*] $vis $name,
            $crate::NamedSpec::child(
                concat!(module_path!(), "::", stringify!($name)),
                <$parent as $crate::NamedQuantitySpec>::NAMED,
            )
            .with_equation(<$eq as $crate::QuantitySpec>::INFO)
            $(.$flag())*
        );
    };
    ($(#[$attr:meta])* $vis:vis $name:ident: $parent:ty $(, $flag:ident)* $(;)?) => {
        $crate::__quantity_spec!(
            [$(#[$attr])*] $vis $name,
            $crate::NamedSpec::child(
                concat!(module_path!(), "::", stringify!($name)),
                <$parent as $crate::NamedQuantitySpec>::NAMED,
            )
            $(.$flag())*
        );
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __quantity_spec {
    ([$($attr:tt)*] $vis:vis $name:ident, $named:expr) => {
        $($attr)*
        #[derive(Clone, Copy, Default, Debug)]
        $vis struct $name;

        impl $crate::NamedQuantitySpec for $name {
            const NAMED: &'static $crate::NamedSpec = &$named;
        }

        impl $crate::QuantitySpec for $name {
            const INFO: $crate::SpecInfo = $crate::SpecInfo::named(
                <$name as $crate::NamedQuantitySpec>::NAMED,
            );
        }
    };
}

/// Declare a named unit.
///
/// ```
/// use unit_algebra::systems::si::Metre;
/// use unit_algebra::{quantity_spec, unit, Unit};
///
/// quantity_spec!(pub Information: dim "I");
///
/// unit!(pub Bit: "bit" => Information);
/// unit!(pub Byte: "B" = (8) * Bit);
/// unit!(pub Fathom: "ftm" = (18288 / 10000) * Metre);
/// unit!(pub Angstrom: "\u{00c5}" / "A" = [unit_algebra::Magnitude::power_of(10, -10)] * Metre);
///
/// assert_eq!(Fathom::INFO.canonical().to_string(), "1143/625 x m");
/// assert_eq!(format!("{:#}", Angstrom::INFO), "A");
/// assert_eq!((2.0 * Byte).numerical_value_in::<Bit>(), 16.0);
/// ```
///
/// A unit is either a base unit, optionally restricted to a quantity
/// kind with `=> Spec`, or a multiple of another unit: `(n) * U`,
/// `(n / d) * U`, `[magnitude] * U` or plain `U`. Offset units name
/// their origin with `, origin = O`.
#[macro_export]
macro_rules! unit {
    ($(#[$attr:meta])* $vis:vis $name:ident: $sym:literal $(/ $ascii:literal)?
     $(=> $spec:ty)? $(, origin = $origin:ty)? $(;)?) => {
        $crate::__unit!(
            @def [$(#[$attr])*] $vis $name,
            $crate::UnitInfo::named(
                concat!(module_path!(), "::", stringify!($name)),
                $crate::__unit!(@symbol $sym $(/ $ascii)?),
            )
            $(.associated(<$spec as $crate::NamedQuantitySpec>::NAMED))?
            $(.with_origin(<$origin as $crate::PointOrigin>::INFO))?
            ; $($origin)?
        );
    };
    ($(#[$attr:meta])* $vis:vis $name:ident: $sym:literal $(/ $ascii:literal)?
     = ($num:literal / $den:literal) * $unit:ty
     $(=> $spec:ty)? $(, origin = $origin:ty)? $(;)?) => {
        $crate::unit!(
            $(#[$attr])* $vis $name: $sym $(/ $ascii)?
            = [$crate::Magnitude::ratio($num, $den)] * $unit
            $(=> $spec)? $(, origin = $origin)?
        );
    };
    ($(#[$attr:meta])* $vis:vis $name:ident: $sym:literal $(/ $ascii:literal)?
     = ($num:literal) * $unit:ty
     $(=> $spec:ty)? $(, origin = $origin:ty)? $(;)?) => {
        $crate::unit!(
            $(#[$attr])* $vis $name: $sym $(/ $ascii)?
            = [$crate::Magnitude::integer($num)] * $unit
            $(=> $spec)? $(, origin = $origin)?
        );
    };
    ($(#[$attr:meta])* $vis:vis $name:ident: $sym:literal $(/ $ascii:literal)?
     = [$mag:expr] * $unit:ty
     $(=> $spec:ty)? $(, origin = $origin:ty)? $(;)?) => {
        $crate::__unit!(
            @def [$(#[$attr])*] $vis $name,
            $crate::UnitInfo::named(
                concat!(module_path!(), "::", stringify!($name)),
                $crate::__unit!(@symbol $sym $(/ $ascii)?),
            )
            .defined_as($mag, <$unit as $crate::Unit>::INFO)
            $(.associated(<$spec as $crate::NamedQuantitySpec>::NAMED))?
            $(.with_origin(<$origin as $crate::PointOrigin>::INFO))?
            ; $($origin)?
        );
    };
    ($(#[$attr:meta])* $vis:vis $name:ident: $sym:literal $(/ $ascii:literal)?
     = $unit:ty
     $(=> $spec:ty)? $(, origin = $origin:ty)? $(;)?) => {
        $crate::unit!(
            $(#[$attr])* $vis $name: $sym $(/ $ascii)?
            = [$crate::Magnitude::ONE] * $unit
            $(=> $spec)? $(, origin = $origin)?
        );
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __unit {
    (@symbol $sym:literal) => {
        $crate::Symbol::new($sym)
    };
    (@symbol $sym:literal / $ascii:literal) => {
        $crate::Symbol::with_ascii($sym, $ascii)
    };
    (@def [$($attr:tt)*] $vis:vis $name:ident, $info:expr; $($origin:ty)?) => {
        $($attr)*
        #[derive(Clone, Copy, Default, Debug)]
        $vis struct $name;

        impl $crate::Unit for $name {
            const INFO: &'static $crate::UnitInfo = &$info;
        }

        impl $crate::Reference for $name {
            type Spec = $crate::SpecOf<$name>;
            type Unit = $name;
        }

        $(
            impl $crate::OffsetUnit for $name {
                type Origin = $origin;
            }
        )?

        $crate::__scalar_times_reference!([] $name);
    };
}

/// Declare a point origin: either absolute, or at an exact offset
/// from another origin.
///
/// ```
/// use unit_algebra::systems::si::{AbsoluteZero, Kelvin};
/// use unit_algebra::{point_origin, PointOrigin, Ratio, Unit};
///
/// point_origin!(pub TriplePoint = AbsoluteZero, 27316 / 100, Kelvin);
///
/// assert_eq!(TriplePoint::INFO.offset_in(Kelvin::INFO), Ratio::new(6829, 25));
/// ```
///
/// Origins are identified by their path, so equally named origins of
/// different modules are unrelated scales:
///
/// ```compile_fail
/// use unit_algebra::systems::si::Metre;
/// use unit_algebra::{Quantity, QuantityPoint};
///
/// mod ocean {
///     unit_algebra::point_origin!(pub Zero);
/// }
/// mod calendar {
///     unit_algebra::point_origin!(pub Zero);
/// }
///
/// fn main() {
///     let a: QuantityPoint<Metre, ocean::Zero> = QuantityPoint::new(Quantity::new(1.0));
///     let b: QuantityPoint<Metre, calendar::Zero> = QuantityPoint::new(Quantity::new(1.0));
///     let _ = a - b;
/// }
/// ```
#[macro_export]
macro_rules! point_origin {
    ($(#[$attr:meta])* $vis:vis $name:ident $(;)?) => {
        $crate::__point_origin!(
            [$(#[$attr])*] $vis $name,
            $crate::OriginInfo::absolute(concat!(module_path!(), "::", stringify!($name)))
        );
    };
    ($(#[$attr:meta])* $vis:vis $name:ident = $base:ty, $num:literal / $den:literal, $unit:ty $(;)?) => {
        $crate::__point_origin!(
            [$(#[$attr])*] $vis $name,
            $crate::OriginInfo::relative(
                concat!(module_path!(), "::", stringify!($name)),
                <$base as $crate::PointOrigin>::INFO,
                $crate::Ratio::new($num, $den),
                <$unit as $crate::Unit>::INFO,
            )
        );
    };
    ($(#[$attr:meta])* $vis:vis $name:ident = $base:ty, $num:literal, $unit:ty $(;)?) => {
        $crate::point_origin!($(#[$attr])* $vis $name = $base, $num / 1, $unit);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __point_origin {
    ([$($attr:tt)*] $vis:vis $name:ident, $info:expr) => {
        $($attr)*
        #[derive(Clone, Copy, Default, Debug)]
        $vis struct $name;

        impl $crate::PointOrigin for $name {
            const INFO: &'static $crate::OriginInfo = &$info;
        }
    };
}
