/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Adapters for foreign types that represent quantities or points.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use log::debug;

use crate::error::UnitError;
use crate::quantity::Quantity;
use crate::quantity_point::{PointOrigin, QuantityPoint};
use crate::reference::Reference;
use crate::representation::Representation;
use crate::systems::si::Second;

/// A foreign type holding the numerical value of a quantity with a
/// fixed reference.
pub trait QuantityLike: Sized {
    type Reference: Reference;
    type Rep: Representation;

    fn to_numerical_value(&self) -> Self::Rep;
    fn from_numerical_value(value: Self::Rep) -> Result<Self, UnitError>;
}

/// A foreign type holding a point measured from a fixed origin.
pub trait QuantityPointLike: Sized {
    type Reference: Reference;
    type Origin: PointOrigin;
    type Rep: Representation;

    fn to_quantity_from_origin(&self) -> Self::Rep;
    fn from_quantity_from_origin(value: Self::Rep) -> Result<Self, UnitError>;
}

crate::point_origin!(
    /// 1970-01-01T00:00:00Z.
    pub UnixEpoch
);

impl QuantityLike for Duration {
    type Reference = Second;
    type Rep = f64;

    fn to_numerical_value(&self) -> f64 {
        self.as_secs_f64()
    }

    fn from_numerical_value(value: f64) -> Result<Self, UnitError> {
        Duration::try_from_secs_f64(value)
            .map_err(|_| UnitError::OutOfRange(value.to_string()))
    }
}

impl QuantityPointLike for SystemTime {
    type Reference = Second;
    type Origin = UnixEpoch;
    type Rep = f64;

    fn to_quantity_from_origin(&self) -> f64 {
        match self.duration_since(UNIX_EPOCH) {
            Ok(d) => d.as_secs_f64(),
            Err(e) => -e.duration().as_secs_f64(),
        }
    }

    fn from_quantity_from_origin(value: f64) -> Result<Self, UnitError> {
        let out_of_range = || UnitError::OutOfRange(value.to_string());
        let offset = Duration::try_from_secs_f64(value.abs()).map_err(|_| out_of_range())?;
        match value < 0.0 {
            true => UNIX_EPOCH.checked_sub(offset),
            false => UNIX_EPOCH.checked_add(offset),
        }
        .ok_or_else(out_of_range)
    }
}

impl<R: Reference, Rep: Representation> Quantity<R, Rep> {
    pub fn from_quantity_like<Q>(value: &Q) -> Self
    where
        Q: QuantityLike<Rep = Rep>,
    {
        Quantity::<Q::Reference, Rep>::new(value.to_numerical_value()).to()
    }

    pub fn to_quantity_like<Q>(self) -> Result<Q, UnitError>
    where
        Q: QuantityLike<Rep = Rep>,
    {
        let value = self.to::<Q::Reference>().numerical_value();
        debug!("converting {value:?} {} to a foreign quantity", self.unit());
        Q::from_numerical_value(value)
    }
}

impl<R: Reference, O: PointOrigin, Rep: Representation> QuantityPoint<R, O, Rep> {
    pub fn from_point_like<P>(value: &P) -> Self
    where
        P: QuantityPointLike<Origin = O, Rep = Rep>,
    {
        QuantityPoint::new(
            Quantity::<P::Reference, Rep>::new(value.to_quantity_from_origin()).to(),
        )
    }

    pub fn to_point_like<P>(self) -> Result<P, UnitError>
    where
        P: QuantityPointLike<Origin = O, Rep = Rep>,
    {
        let value = self
            .quantity_from_origin()
            .to::<P::Reference>()
            .numerical_value();
        P::from_quantity_from_origin(value)
    }
}
