/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! A subset of the International System of Quantities.

use crate::combinators::{Per, Pow, Prod};
use crate::quantity_spec::Dimensionless;

crate::quantity_spec!(pub Length: dim "L");
crate::quantity_spec!(pub Mass: dim "M");
crate::quantity_spec!(pub Time: dim "T");
crate::quantity_spec!(pub ElectricCurrent: dim "I");
crate::quantity_spec!(pub ThermodynamicTemperature: dim "\u{0398}");
crate::quantity_spec!(pub AmountOfSubstance: dim "N");
crate::quantity_spec!(pub LuminousIntensity: dim "J");

crate::quantity_spec!(pub Width: Length);
crate::quantity_spec!(pub Radius: Width);
crate::quantity_spec!(pub Height: Length);
crate::quantity_spec!(pub PathLength: Length);
crate::quantity_spec!(pub Distance: PathLength);
crate::quantity_spec!(pub Displacement: Length, vector);
crate::quantity_spec!(pub Duration: Time);

crate::quantity_spec!(pub Area = Pow<Length, 2>);
crate::quantity_spec!(pub Volume = Pow<Length, 3>);
crate::quantity_spec!(pub Frequency = Per<Dimensionless, Duration>);
crate::quantity_spec!(pub Speed = Per<Length, Time>);
crate::quantity_spec!(pub Velocity: Speed = Per<Displacement, Duration>);
crate::quantity_spec!(
    /// Magnitude of the acceleration; the vector quantity is not modelled.
    pub Acceleration = Per<Speed, Duration>
);
crate::quantity_spec!(pub Density = Per<Mass, Volume>);
crate::quantity_spec!(pub Force = Prod<Mass, Acceleration>);
crate::quantity_spec!(pub Weight: Force);
crate::quantity_spec!(pub Energy = Prod<Force, Length>);
crate::quantity_spec!(pub Power = Per<Energy, Duration>);
crate::quantity_spec!(pub AngularMeasure: Dimensionless = Per<Length, Radius>, is_kind);
