/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Natural units: c = ħ = 1, everything is measured in powers of
//! energy.

use crate::combinators::{Per, Prod};
use crate::prefix::Giga;
use crate::quantity_spec::Dimensionless;
use crate::unit::{Unit, UnitInfo};

crate::quantity_spec!(pub Energy: dim "E");
crate::quantity_spec!(pub Mass: Energy);
crate::quantity_spec!(pub Momentum: Energy);
crate::quantity_spec!(pub Temperature: Energy);
crate::quantity_spec!(pub InverseEnergy = Per<Dimensionless, Energy>);
crate::quantity_spec!(pub Time: InverseEnergy);
crate::quantity_spec!(pub Length: InverseEnergy);
crate::quantity_spec!(pub Speed = Per<Length, Time>);
crate::quantity_spec!(pub Velocity: Speed, vector);
crate::quantity_spec!(pub Acceleration = Per<Speed, Time>);
crate::quantity_spec!(pub Force = Prod<Mass, Acceleration>);

crate::unit!(pub Electronvolt: "eV" => Energy);

pub type Gigaelectronvolt = Giga<Electronvolt>;

pub(crate) fn units() -> Vec<&'static UnitInfo> {
    vec![Electronvolt::INFO, Gigaelectronvolt::INFO]
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::combinators::Ref;
    use crate::convertibility::{convertible, Convertibility};
    use crate::quantity::Quantity;
    use crate::quantity_spec::QuantitySpec;

    #[test]
    fn speed_is_dimensionless() {
        assert!(Speed::INFO.dimension().is_dimensionless());
        assert_eq!(
            convertible(&Time::INFO, &Length::INFO),
            Convertibility::Cast
        );
        assert_eq!(convertible(&Mass::INFO, &Energy::INFO), Convertibility::Yes);
    }

    #[test]
    fn mass_energy_momentum() {
        let p = Quantity::<Ref<Momentum, Gigaelectronvolt>>::new(4.0);
        let m = Quantity::<Ref<Mass, Gigaelectronvolt>>::new(3.0);
        let e: Quantity<Ref<Energy, Gigaelectronvolt>> = (p.pow::<2>() + m.pow::<2>()).sqrt().to();
        approx::assert_relative_eq!(e.numerical_value(), 5.0);
        assert_eq!(e.to_string(), "5 GeV");
    }
}
