//! Strongly typed unit helpers.
//!
//! `Quantity<T, U>` tags a raw value with a zero-sized unit marker so that a
//! voltage cannot be passed where a resistance is expected. The model keeps
//! plain [`Scalar`] fields for arithmetic; the typed wrappers carry values to
//! the readouts in [`crate::render`], where `Display` appends the unit symbol.

use std::fmt;
use std::marker::PhantomData;

use crate::math::Scalar;

/// Marker trait for physical units.
pub trait Unit {
    /// Display symbol, e.g. `V`.
    const SYMBOL: &'static str;
}

macro_rules! unit {
    ($(#[$meta:meta])* $name:ident, $symbol:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
        pub struct $name;

        impl Unit for $name {
            const SYMBOL: &'static str = $symbol;
        }
    };
}

unit!(
    /// Volts.
    Volt,
    "V"
);
unit!(
    /// Amperes.
    Ampere,
    "A"
);
unit!(
    /// Ohms.
    Ohm,
    "Ω"
);
unit!(
    /// Watts.
    Watt,
    "W"
);

/// A value tagged with its unit.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Quantity<T, U> {
    value: T,
    unit: PhantomData<U>,
}

impl<T: Copy, U> Quantity<T, U> {
    /// Wraps a raw value.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            unit: PhantomData,
        }
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(&self) -> T {
        self.value
    }
}

impl<U: Unit> fmt::Display for Quantity<Scalar, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*} {}", p, self.value, U::SYMBOL),
            None => write!(f, "{} {}", self.value, U::SYMBOL),
        }
    }
}

/// Electric potential in volts.
pub type Voltage = Quantity<Scalar, Volt>;
/// Electric current in amperes.
pub type Current = Quantity<Scalar, Ampere>;
/// Resistance in ohms.
pub type Resistance = Quantity<Scalar, Ohm>;
/// Power in watts.
pub type Power = Quantity<Scalar, Watt>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_honours_precision() {
        let v = Voltage::new(12.0);
        assert_eq!(format!("{v:.1}"), "12.0 V");
        let r = Resistance::new(50.26);
        assert_eq!(format!("{r:.1}"), "50.3 Ω");
    }

    #[test]
    fn quantities_compare_by_value() {
        assert!(Current::new(1.0) < Current::new(2.0));
        assert_eq!(Power::new(2.88).value(), 2.88);
    }
}
