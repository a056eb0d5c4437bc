/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! SI units, with a few units accepted for use with the SI.

use super::isq::{
    AmountOfSubstance, AngularMeasure, ElectricCurrent, Frequency, Length,
    LuminousIntensity, Mass, ThermodynamicTemperature, Time,
};
use crate::combinators::{Per, Pow, Prod};
use crate::magnitude::Magnitude;
use crate::prefix::{Deci, Kilo};
use crate::unit::{One, Unit, UnitInfo};

crate::unit!(pub Metre: "m" => Length);
crate::unit!(pub Second: "s" => Time);
crate::unit!(pub Gram: "g" => Mass);
crate::unit!(pub Ampere: "A" => ElectricCurrent);
crate::unit!(pub Kelvin: "K" => ThermodynamicTemperature, origin = AbsoluteZero);
crate::unit!(pub Mole: "mol" => AmountOfSubstance);
crate::unit!(pub Candela: "cd" => LuminousIntensity);

pub type Kilogram = Kilo<Gram>;

crate::point_origin!(pub AbsoluteZero);
crate::point_origin!(pub IcePoint = AbsoluteZero, 27315 / 100, Kelvin);

crate::unit!(pub DegreeCelsius: "\u{2103}" / "deg_C" = Kelvin, origin = IcePoint);
crate::unit!(pub Radian: "rad" = Per<Metre, Metre> => AngularMeasure);
crate::unit!(pub Hertz: "Hz" = Per<One, Second> => Frequency);
crate::unit!(pub Newton: "N" = Per<Prod<Kilogram, Metre>, Pow<Second, 2>>);
crate::unit!(pub Joule: "J" = Prod<Newton, Metre>);
crate::unit!(pub Watt: "W" = Per<Joule, Second>);
crate::unit!(pub Pascal: "Pa" = Per<Newton, Pow<Metre, 2>>);

crate::unit!(pub Minute: "min" = (60) * Second);
crate::unit!(pub Hour: "h" = (60) * Minute);
crate::unit!(pub Day: "d" = (24) * Hour);
crate::unit!(pub Litre: "L" = Pow<Deci<Metre>, 3>);
crate::unit!(pub Tonne: "t" = (1000) * Kilogram);
crate::unit!(pub Degree: "\u{00b0}" / "deg" = [Magnitude::pi().div(Magnitude::integer(180))] * Radian);
crate::unit!(pub Percent: "%" = [Magnitude::ratio(1, 100)] * One);
crate::unit!(pub PerMille: "\u{2030}" / "permille" = [Magnitude::ratio(1, 1000)] * One);

pub(crate) fn units() -> Vec<&'static UnitInfo> {
    vec![
        Metre::INFO,
        Second::INFO,
        Gram::INFO,
        Kilogram::INFO,
        Ampere::INFO,
        Kelvin::INFO,
        Mole::INFO,
        Candela::INFO,
        DegreeCelsius::INFO,
        Radian::INFO,
        Hertz::INFO,
        Newton::INFO,
        Joule::INFO,
        Watt::INFO,
        Pascal::INFO,
        Minute::INFO,
        Hour::INFO,
        Day::INFO,
        Litre::INFO,
        Tonne::INFO,
        Degree::INFO,
        Percent::INFO,
        PerMille::INFO,
    ]
}
