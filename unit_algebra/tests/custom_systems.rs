/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! The same yard, once in a system of its own and once defined
//! through the metre.

use approx::assert_relative_eq;

use unit_algebra::systems::si::Metre;
use unit_algebra::{Kilo, Pow, Quantity, Unit, UnitError, UnitInfo};

mod fps {
    use unit_algebra::systems::isq::Length;
    use unit_algebra::unit;

    unit!(pub Foot: "ft" => Length);
    unit!(pub Yard: "yd" = (3) * Foot);
}

mod si_fps {
    use unit_algebra::systems::si::Metre;
    use unit_algebra::unit;

    unit!(pub Foot: "ft" = (3048 / 10000) * Metre);
    unit!(pub Yard: "yd" = (3) * Foot);
}

#[test]
fn conversions() {
    let yard = 1.0 * si_fps::Yard;
    let km: Quantity<Kilo<Metre>> = yard.to();
    assert_relative_eq!(km.numerical_value(), 0.0009144);

    assert_eq!(
        UnitInfo::try_conversion_factor(fps::Yard::INFO, Kilo::<Metre>::INFO),
        Err(UnitError::Incompatible("yd".to_string(), "km".to_string()))
    );
    assert!(UnitInfo::try_conversion_factor(si_fps::Yard::INFO, Kilo::<Metre>::INFO).is_ok());
}

#[test]
fn unknown_dimensions() {
    let fps_area = (1.0 * fps::Yard) * (1.0 * fps::Yard);
    assert_eq!(fps_area.to_string(), "1 yd\u{00b2}");
    assert_eq!(fps_area.in_unit::<Pow<fps::Foot, 2>>().to_string(), "9 ft\u{00b2}");

    let si_area = (1.0 * si_fps::Yard) * (1.0 * si_fps::Yard);
    assert_relative_eq!(
        si_area.numerical_value_in::<Pow<Metre, 2>>(),
        0.83612736,
        max_relative = 1e-12
    );
}

#[test]
fn what_is_your_ratio() {
    assert_eq!(fps::Yard::INFO.canonical().to_string(), "3 x ft");
    assert_eq!(si_fps::Yard::INFO.canonical().to_string(), "1143/1250 x m");
    assert!(!fps::Yard::INFO.convertible(si_fps::Yard::INFO));
}
