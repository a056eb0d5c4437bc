/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use unit_algebra::hierarchy::{
    get_common_base, get_hierarchy_root, have_common_base, hierarchy_path_length,
    is_child_of,
};
use unit_algebra::systems::isq::{
    Displacement, Distance, Duration, Height, Length, PathLength, Radius, Time,
    Velocity, Speed, Width,
};
use unit_algebra::{
    convertible, get_common_quantity_spec, Character, Convertibility,
    NamedQuantitySpec, QuantitySpec,
};

#[test]
fn descendants_and_ancestors() {
    let chain = [Length::NAMED, Width::NAMED, Radius::NAMED];
    for (i, descendant) in chain.iter().enumerate() {
        for ancestor in &chain[..i] {
            assert!(is_child_of(descendant, ancestor));
            assert!(!is_child_of(ancestor, descendant));
        }
    }
    assert!(!is_child_of(Radius::NAMED, Height::NAMED));
    assert!(!is_child_of(Duration::NAMED, Length::NAMED));
    assert_eq!(hierarchy_path_length(Radius::NAMED), 2);
    assert_eq!(get_hierarchy_root(Distance::NAMED), Length::NAMED);
}

#[test]
fn common_bases() {
    assert_eq!(get_common_base(Width::NAMED, Height::NAMED), Length::NAMED);
    assert_eq!(get_common_base(Radius::NAMED, Width::NAMED), Width::NAMED);
    assert_eq!(get_common_base(Distance::NAMED, Radius::NAMED), Length::NAMED);
    assert!(!have_common_base(Length::NAMED, Time::NAMED));
}

#[test]
fn convertibility_follows_the_tree() {
    assert_eq!(convertible(&Radius::INFO, &Length::INFO), Convertibility::Yes);
    assert_eq!(convertible(&Length::INFO, &Radius::INFO), Convertibility::Explicit);
    assert_eq!(convertible(&Height::INFO, &Width::INFO), Convertibility::Cast);
    assert_eq!(convertible(&Length::INFO, &Time::INFO), Convertibility::No);
    assert_eq!(convertible(&Velocity::INFO, &Speed::INFO), Convertibility::Yes);
    assert_eq!(convertible(&Speed::INFO, &Velocity::INFO), Convertibility::Explicit);
    assert_eq!(
        get_common_quantity_spec(&PathLength::INFO, &Displacement::INFO),
        Some(Length::INFO)
    );
}

#[test]
fn characters() {
    assert_eq!(Displacement::INFO.character(), Character::Vector);
    assert_eq!(Velocity::INFO.character(), Character::Vector);
    assert_eq!(Speed::INFO.character(), Character::Scalar);
}
