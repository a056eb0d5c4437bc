/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use approx::assert_relative_eq;

use unit_algebra::systems::isq::{
    Acceleration, Area, Density, Force, Height, Length, Mass, Radius, Volume,
    Weight, Width,
};
use unit_algebra::systems::si::{Kilogram, Metre, Newton, Percent, Second};
use unit_algebra::{Milli, Per, Pow, Quantity, Ref};

type SquareMetre = Pow<Metre, 2>;
type CubicMetre = Pow<Metre, 3>;

const STANDARD_GRAVITY: Quantity<Ref<Acceleration, Per<Metre, Pow<Second, 2>>>> =
    Quantity::new(9.80665);

struct StorageTank {
    base: Quantity<Ref<Area, SquareMetre>>,
    height: Quantity<Ref<Height, Metre>>,
    density: Quantity<Ref<Density, Per<Kilogram, CubicMetre>>>,
}

impl StorageTank {
    fn rectangular(
        length: Quantity<Ref<Length, Milli<Metre>>>,
        width: Quantity<Ref<Width, Milli<Metre>>>,
        height: Quantity<Ref<Height, Milli<Metre>>>,
    ) -> Self {
        StorageTank {
            base: (length * width).to(),
            height: height.to(),
            density: Quantity::new(1.225),
        }
    }

    fn cylindrical(
        radius: Quantity<Ref<Radius, Metre>>,
        height: Quantity<Ref<Height, Metre>>,
    ) -> Self {
        StorageTank {
            base: (std::f64::consts::PI * radius.pow::<2>()).to(),
            height,
            density: Quantity::new(1.225),
        }
    }

    fn set_contents_density(
        &mut self,
        density: Quantity<Ref<Density, Per<Kilogram, CubicMetre>>>,
    ) {
        assert!(density > self.density);
        self.density = density;
    }

    fn filled_weight(&self) -> Quantity<Ref<Weight, Newton>> {
        let volume: Quantity<Ref<Volume, CubicMetre>> = (self.base * self.height).to();
        let mass: Quantity<Ref<Mass, Kilogram>> = (self.density * volume).to();
        (mass * STANDARD_GRAVITY).as_spec::<Weight>().in_unit::<Newton>()
    }

    fn fill_level(
        &self,
        measured_mass: Quantity<Ref<Mass, Kilogram>>,
    ) -> Quantity<Ref<Height, Metre>> {
        let weight: Quantity<Ref<Force, Newton>> = self.filled_weight().to();
        (self.height * measured_mass * STANDARD_GRAVITY / weight).to()
    }

    fn spare_capacity(
        &self,
        measured_mass: Quantity<Ref<Mass, Kilogram>>,
    ) -> Quantity<Ref<Volume, CubicMetre>> {
        ((self.height - self.fill_level(measured_mass)) * self.base).to()
    }
}

fn tank() -> StorageTank {
    let mut tank = StorageTank::rectangular(
        Quantity::new(1000.0),
        Quantity::new(500.0),
        Quantity::new(200.0),
    );
    tank.set_contents_density(Quantity::new(1000.0));
    tank
}

#[test]
fn filled_weight() {
    let weight = tank().filled_weight();
    assert_relative_eq!(weight.numerical_value(), 980.665, max_relative = 1e-12);
    assert_eq!(weight.unit().to_string(), "N");
    assert_eq!(weight.quantity_spec().to_string(), "Weight");
}

#[test]
fn fill_level_and_capacity() {
    let tank = tank();
    let measured = Quantity::<Ref<Mass, Kilogram>>::new(20.0);

    let level = tank.fill_level(measured);
    assert_relative_eq!(level.numerical_value(), 0.04, max_relative = 1e-12);

    let ratio = (level / tank.height).in_unit::<Percent>();
    assert_relative_eq!(ratio.numerical_value(), 20.0, max_relative = 1e-12);
    assert!(ratio.to_string().ends_with(" %"));

    let spare = tank.spare_capacity(measured);
    assert_relative_eq!(spare.numerical_value(), 0.08, max_relative = 1e-12);
    assert_eq!(format!("{:#}", spare.unit()), "m^3");
}

#[test]
fn cylindrical_tank() {
    let tank = StorageTank::cylindrical(Quantity::new(0.5), Quantity::new(2.0));
    assert_relative_eq!(
        tank.base.numerical_value(),
        std::f64::consts::PI / 4.0,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        tank.filled_weight().numerical_value(),
        std::f64::consts::PI / 2.0 * 1.225 * 9.80665,
        max_relative = 1e-12
    );
}
