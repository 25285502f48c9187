quantity!(Percentage, via: u16, suffix: "%", precision: 0);

impl Percentage {
    pub const HUNDRED: Self = Self(100);

    /// Convert the percentage into `0.0..=1.0`.
    pub fn to_ratio(self) -> f64 {
        0.01 * f64::from(self.0)
    }
}
