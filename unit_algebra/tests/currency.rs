/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! A user-defined base dimension whose units are related only by a
//! rate known at run time.

use std::collections::HashMap;

use approx::assert_relative_eq;

use unit_algebra::{
    quantity_spec, unit, Magnitude, Quantity, Ratio, Reference, Representation, Unit,
    UnitError,
};

quantity_spec!(pub Currency: dim "$");

unit!(pub Euro: "EUR" => Currency);
unit!(pub UsDollar: "USD" => Currency);
unit!(pub Cent: "ct" = (1 / 100) * Euro);
unit!(pub Rouble: "RUB" => Currency);

fn exchange_rates() -> HashMap<(&'static str, &'static str), Ratio> {
    [
        (("USD", "EUR"), Ratio::new(9215, 10000)),
        (("EUR", "USD"), Ratio::new(10852, 10000)),
        (("EUR", "RUB"), Ratio::ZERO),
    ]
    .into_iter()
    .collect()
}

fn exchange_to<T, F>(q: Quantity<F>) -> Result<Quantity<T>, UnitError>
where
    T: Reference,
    F: Reference,
{
    let from = F::Unit::INFO.symbol();
    let to = T::Unit::INFO.symbol();
    match exchange_rates().get(&(from.as_str(), to.as_str())) {
        Some(rate) => {
            let rate = Magnitude::checked_from_ratio(*rate)?;
            Ok(Quantity::new(q.numerical_value().scale(&rate)))
        }
        None => Err(UnitError::Incompatible(from, to)),
    }
}

#[test]
fn exchange() {
    let usd = 100.0 * UsDollar;
    let eur: Quantity<Euro> = exchange_to(usd).unwrap();
    assert_relative_eq!(eur.numerical_value(), 92.15);
    assert_eq!(format!("{usd} -> {eur:.2}"), "100 USD -> 92.15 EUR");
}

#[test]
fn missing_rate() {
    assert_eq!(
        exchange_to::<Cent, UsDollar>(1.0 * UsDollar),
        Err(UnitError::Incompatible("USD".to_string(), "ct".to_string()))
    );
}

#[test]
fn suspended_rate() {
    assert_eq!(
        exchange_to::<Rouble, Euro>(1.0 * Euro),
        Err(UnitError::NonPositive("0".to_string()))
    );
}

#[test]
fn same_currency_arithmetic() {
    let total = 2.5 * Euro + 30.0 * Cent;
    assert_eq!(total.to_string(), "280 ct");
    assert!(1.0 * Euro > 99.0 * Cent);
}

#[test]
fn serialized_amounts_keep_their_currency() {
    let json = r#"{"value":12.5,"unit":"USD"}"#;
    let usd: Quantity<UsDollar> = serde_json::from_str(json).unwrap();
    assert_eq!(usd.numerical_value(), 12.5);
    assert!(serde_json::from_str::<Quantity<Euro>>(json).is_err());
}
