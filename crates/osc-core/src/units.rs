// osc-core/src/units.rs

use uom::si::f64::{
    Energy as UomEnergy, Frequency as UomFrequency, Length as UomLength, Mass as UomMass,
    Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type Energy = UomEnergy;
pub type Frequency = UomFrequency;
pub type Length = UomLength;
pub type Mass = UomMass;
pub type Velocity = UomVelocity;

#[inline]
pub fn kg(v: f64) -> Mass {
    use uom::si::mass::kilogram;
    Mass::new::<kilogram>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn joules(v: f64) -> Energy {
    use uom::si::energy::joule;
    Energy::new::<joule>(v)
}

#[inline]
pub fn hz(v: f64) -> Frequency {
    use uom::si::frequency::hertz;
    Frequency::new::<hertz>(v)
}

/// Raw SI magnitudes, for code that works in plain f64.
pub mod si {
    use super::*;

    #[inline]
    pub fn kilograms(q: Mass) -> f64 {
        q.get::<uom::si::mass::kilogram>()
    }

    #[inline]
    pub fn meters(q: Length) -> f64 {
        q.get::<uom::si::length::meter>()
    }

    #[inline]
    pub fn meters_per_second(q: Velocity) -> f64 {
        q.get::<uom::si::velocity::meter_per_second>()
    }

    #[inline]
    pub fn joules(q: Energy) -> f64 {
        q.get::<uom::si::energy::joule>()
    }

    #[inline]
    pub fn hertz(q: Frequency) -> f64 {
        q.get::<uom::si::frequency::hertz>()
    }
}
