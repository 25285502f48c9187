quantity!(Celsius, via: f64, suffix: "°C", precision: 1);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_negative() {
        assert_eq!("-7.5".parse::<Celsius>().unwrap(), Celsius(-7.5));
    }

    #[test]
    fn test_display() {
        assert_eq!(Celsius(20.0).to_string(), "20.0 °C");
    }
}
