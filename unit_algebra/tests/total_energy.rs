/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use approx::assert_relative_eq;

use unit_algebra::systems::natural::{
    Electronvolt, Energy, Gigaelectronvolt, Mass, Momentum,
};
use unit_algebra::{Mega, Quantity, Ref};

type GeV = Gigaelectronvolt;

/// E = sqrt((pc)^2 + (mc^2)^2) with c = 1.
fn total_energy<P, M>(p: Quantity<P>, m: Quantity<M>) -> Quantity<Ref<Energy, GeV>>
where
    P: unit_algebra::Reference,
    M: unit_algebra::Reference,
{
    (p.pow::<2>() + m.pow::<2>()).sqrt().to()
}

#[test]
fn three_four_five() {
    let p = Quantity::<Ref<Momentum, GeV>>::new(4.0);
    let m = Quantity::<Ref<Mass, GeV>>::new(3.0);
    let e = total_energy(p, m);
    assert_relative_eq!(e.numerical_value(), 5.0);
    assert_eq!(e.to_string(), "5 GeV");
}

#[test]
fn mixed_prefixes() {
    let p = Quantity::<Ref<Momentum, GeV>>::new(4.0);
    let m = Quantity::<Ref<Mass, Mega<Electronvolt>>>::new(3000.0);
    let e = total_energy(p, m);
    assert_relative_eq!(e.numerical_value(), 5.0);
    assert_relative_eq!(e.numerical_value_in::<Electronvolt>(), 5.0e9);
}

#[test]
fn mass_is_energy() {
    let m = Quantity::<Ref<Mass, GeV>>::new(3.0);
    let e: Quantity<Ref<Energy, GeV>> = m.to();
    assert_eq!(e.numerical_value(), 3.0);
    let back: Quantity<Ref<Mass, GeV>> = e.as_spec::<Mass>();
    assert_eq!(back, m);
}
