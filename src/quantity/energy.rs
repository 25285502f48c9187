use std::ops::Div;

use crate::quantity::consumption::KilowattHoursPerKilometer;

quantity!(KilowattHours, via: f64, suffix: "kWh", precision: 2);

impl KilowattHours {
    pub const fn is_positive(self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

impl Div<KilowattHoursPerKilometer> for KilowattHours {
    /// Unrounded distance in kilometers.
    type Output = f64;

    fn div(self, rhs: KilowattHoursPerKilometer) -> Self::Output {
        self.0 / rhs.0
    }
}
