quantity!(Kilometers, via: u32, suffix: "km", precision: 0);

impl Kilometers {
    /// Round the distance to the nearest kilometer, halfway cases away from zero.
    ///
    /// Returns [`None`] when the rounded distance is negative, `NaN`, or does not fit.
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn try_round_from(kilometers: f64) -> Option<Self> {
        let rounded = kilometers.round();
        (0.0..=f64::from(u32::MAX)).contains(&rounded).then(|| Self(rounded as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_from() {
        assert_eq!(Kilometers::try_round_from(384.87), Some(Kilometers(385)));
        assert_eq!(Kilometers::try_round_from(264.77), Some(Kilometers(265)));
        assert_eq!(Kilometers::try_round_from(264.49), Some(Kilometers(264)));
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(Kilometers::try_round_from(264.5), Some(Kilometers(265)));
        assert_eq!(Kilometers::try_round_from(263.5), Some(Kilometers(264)));
        assert_eq!(Kilometers::try_round_from(-0.4), Some(Kilometers::ZERO));
    }

    #[test]
    fn test_round_out_of_bounds() {
        assert_eq!(Kilometers::try_round_from(-3.0), None);
        assert_eq!(Kilometers::try_round_from(f64::NAN), None);
        assert_eq!(Kilometers::try_round_from(f64::INFINITY), None);
        assert_eq!(Kilometers::try_round_from(f64::from(u32::MAX) + 1.0), None);
        assert_eq!(Kilometers::try_round_from(f64::from(u32::MAX)), Some(Kilometers(u32::MAX)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Kilometers(385).to_string(), "385 km");
    }
}
