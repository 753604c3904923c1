use crate::distance::units::{Unit, UnitCatalog};

/// Stateless conversion between catalog units, routed through kilometers.
///
/// Performs no domain validation: zero and negative values convert like any
/// other number. Range policy belongs to the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConversionEngine;

impl ConversionEngine {
    pub fn new() -> Self {
        Self
    }

    /// `value * km(from) / km(to)`, full double precision, no rounding.
    ///
    /// The two factors are divided first so that `from == to` multiplies by
    /// exactly 1.0 and the value comes back bit-for-bit.
    pub fn convert(&self, value: f64, from: Unit, to: Unit) -> f64 {
        value * self.conversion_factor(from, to)
    }

    /// Multiplier such that `value_in_from * factor = value_in_to`.
    pub fn conversion_factor(&self, from: Unit, to: Unit) -> f64 {
        UnitCatalog::factor_to_base(from) / UnitCatalog::factor_to_base(to)
    }
}
