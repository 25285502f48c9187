use std::ops::Mul;

use crate::quantity::proportions::Percentage;

quantity!(KilowattHoursPerKilometer, via: f64, suffix: "kWh/km", precision: 5);

impl KilowattHoursPerKilometer {
    pub const fn is_positive(self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

impl Mul<f64> for KilowattHoursPerKilometer {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Mul<Percentage> for KilowattHoursPerKilometer {
    type Output = Self;

    fn mul(self, percentage: Percentage) -> Self::Output {
        self * percentage.to_ratio()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_mul_percentage() {
        assert_abs_diff_eq!((KilowattHoursPerKilometer(0.2678) * Percentage(25)).0, 0.066_95);
    }

    #[test]
    fn test_display() {
        assert_eq!(KilowattHoursPerKilometer(0.13175).to_string(), "0.13175 kWh/km");
    }
}
