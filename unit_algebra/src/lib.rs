/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Compile-time dimensional analysis and units of measure.
//!
//! Quantity specs, units and point origins are zero-sized marker types
//! carrying constant descriptors. All unit algebra (canonical forms,
//! conversion factors, convertibility of quantity specs) runs during
//! constant evaluation, so a [`Quantity`] holds nothing but its
//! numerical value and mistakes are rejected by the compiler:
//!
//! ```
//! use unit_algebra::systems::isq::{Height, Length, Width};
//! use unit_algebra::systems::si::{Hour, Metre, Second};
//! use unit_algebra::{Kilo, Quantity, Ref};
//!
//! let distance = 180.0 * Kilo::<Metre>::default();
//! let speed = distance / (2.0 * Hour);
//! assert_eq!(speed.to_string(), "90 km/h");
//! assert_eq!(speed.in_unit::<unit_algebra::Per<Metre, Second>>().numerical_value(), 25.0);
//!
//! let w = Quantity::<Ref<Width, Metre>>::new(2.0);
//! let h = Quantity::<Ref<Height, Metre>>::new(3.0);
//! let l: Quantity<Ref<Length, Metre>> = (w + h).to();
//! assert_eq!(l.numerical_value(), 5.0);
//! ```
//!
//! Adding quantities of different dimensions does not compile:
//!
//! ```compile_fail
//! use unit_algebra::systems::si::{Metre, Second};
//! use unit_algebra::{Common, Quantity};
//!
//! const _: Quantity<Common<Metre, Second>> = Quantity::new(0.0);
//! ```
//!
//! Neither does adding amounts of unrelated base units of the same
//! dimension:
//!
//! ```compile_fail
//! use unit_algebra::{quantity_spec, unit, Common, Quantity};
//!
//! quantity_spec!(pub Currency: dim "$");
//! unit!(pub Euro: "EUR" => Currency);
//! unit!(pub UsDollar: "USD" => Currency);
//!
//! const _: Quantity<Common<Euro, UsDollar>> = Quantity::new(0.0);
//! ```
//!
//! or converting between units of systems that were never related:
//!
//! ```compile_fail
//! use unit_algebra::systems::isq::Length;
//! use unit_algebra::systems::si::Metre;
//! use unit_algebra::{unit, Conversion, Kilo};
//!
//! unit!(pub Foot: "ft" => Length);
//! unit!(pub Yard: "yd" = (3) * Foot);
//!
//! const _: () = Conversion::<Yard, Kilo<Metre>, f64>::EXPLICIT;
//! ```

pub mod combinators;
pub mod convertibility;
pub mod dimension;
pub mod error;
pub mod expression;
pub mod hierarchy;
pub mod macros;
pub mod magnitude;
pub mod prefix;
pub mod quantity;
pub mod quantity_like;
pub mod quantity_point;
pub mod quantity_spec;
pub mod ratio;
pub mod reference;
pub mod representation;
pub mod symbol;
pub mod systems;
pub mod unit;

pub use combinators::{Common, KindOf, Per, Pow, Prod, Ref, SpecOf};
pub use convertibility::{
    castable, convertible, explicitly_convertible, get_common_quantity_spec,
    implicitly_convertible, interconvertible, unit_of, Convertibility,
};
pub use dimension::Dimension;
pub use error::UnitError;
pub use expression::{Expr, Factor, Term};
pub use magnitude::{MagConstant, Magnitude};
pub use quantity::{Conversion, Quantity};
pub use quantity_like::{QuantityLike, QuantityPointLike, UnixEpoch};
pub use quantity_point::{
    point, OffsetUnit, OriginInfo, OriginKind, PointOrigin, QuantityPoint,
    ZerothOrigin,
};
pub use quantity_spec::{
    Character, Dimensionless, NamedQuantitySpec, NamedSpec, QuantitySpec,
    SpecInfo,
};
pub use ratio::Ratio;
pub use reference::Reference;
pub use representation::{CartesianVector, CommonRep, Representation, Scalar};
pub use symbol::Symbol;
pub use unit::{CanonicalUnit, One, Unit, UnitInfo};

pub use prefix::*;
