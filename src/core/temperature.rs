use std::fmt::{Display, Formatter};

use comfy_table::Color;

use crate::quantity::temperature::Celsius;

/// Ambient temperature band with an inclusive upper bound.
#[derive(Debug, enumset::EnumSetType)]
pub enum TemperatureBand {
    /// Up to 15 °C.
    Cold,

    /// Above 15 °C and up to 25 °C.
    Mild,

    /// Above 25 °C and up to 35 °C.
    Warm,

    /// Above 35 °C.
    Hot,
}

impl TemperatureBand {
    /// Upper bounds of every band but the last one, ascending.
    const BREAKPOINTS: [Celsius; 3] = [Celsius(15.0), Celsius(25.0), Celsius(35.0)];

    const ASCENDING: [Self; 4] = [Self::Cold, Self::Mild, Self::Warm, Self::Hot];

    /// Select the band for the temperature.
    ///
    /// Values beyond the outer breakpoints fall into the outer bands, `NaN` falls into the coldest one.
    pub fn from_temperature(temperature: Celsius) -> Self {
        let index = Self::BREAKPOINTS.partition_point(|breakpoint| breakpoint.0 < temperature.0);
        Self::ASCENDING[index]
    }
}

impl Display for TemperatureBand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cold => write!(f, "0-15"),
            Self::Mild => write!(f, "15-25"),
            Self::Warm => write!(f, "25-35"),
            Self::Hot => write!(f, "35-45"),
        }
    }
}

/// Informational note on how the temperature affects the efficiency.
///
/// Does not affect the estimate itself.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Advisory {
    Cold,
    Heat,
    Optimal,
}

impl Advisory {
    const COLD_AT_MOST: Celsius = Celsius(15.0);
    const HEAT_AT_LEAST: Celsius = Celsius(35.0);

    pub fn from_temperature(temperature: Celsius) -> Self {
        if temperature.0 <= Self::COLD_AT_MOST.0 {
            Self::Cold
        } else if temperature.0 >= Self::HEAT_AT_LEAST.0 {
            Self::Heat
        } else {
            Self::Optimal
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::Cold => "cold temperatures may reduce efficiency",
            Self::Heat => "high temperatures may increase consumption",
            Self::Optimal => "optimal temperature range for EV efficiency",
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Self::Cold => Color::Cyan,
            Self::Heat => Color::DarkYellow,
            Self::Optimal => Color::Green,
        }
    }
}

impl Display for Advisory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(TemperatureBand::from_temperature(Celsius(15.0)), TemperatureBand::Cold);
        assert_eq!(TemperatureBand::from_temperature(Celsius(15.0001)), TemperatureBand::Mild);
        assert_eq!(TemperatureBand::from_temperature(Celsius(25.0)), TemperatureBand::Mild);
        assert_eq!(TemperatureBand::from_temperature(Celsius(35.0)), TemperatureBand::Warm);
        assert_eq!(TemperatureBand::from_temperature(Celsius(35.0001)), TemperatureBand::Hot);
    }

    #[test]
    fn test_band_out_of_range() {
        assert_eq!(TemperatureBand::from_temperature(Celsius(-40.0)), TemperatureBand::Cold);
        assert_eq!(TemperatureBand::from_temperature(Celsius::ZERO), TemperatureBand::Cold);
        assert_eq!(TemperatureBand::from_temperature(Celsius(60.0)), TemperatureBand::Hot);
        assert_eq!(TemperatureBand::from_temperature(Celsius(f64::NAN)), TemperatureBand::Cold);
        assert_eq!(
            TemperatureBand::from_temperature(Celsius(f64::INFINITY)),
            TemperatureBand::Hot,
        );
    }

    #[test]
    fn test_band_display() {
        assert_eq!(TemperatureBand::from_temperature(Celsius(20.0)).to_string(), "15-25");
        assert_eq!(TemperatureBand::from_temperature(Celsius(40.0)).to_string(), "35-45");
    }

    #[test]
    fn test_advisory() {
        assert_eq!(Advisory::from_temperature(Celsius(0.0)), Advisory::Cold);
        assert_eq!(Advisory::from_temperature(Celsius(15.0)), Advisory::Cold);
        assert_eq!(Advisory::from_temperature(Celsius(15.1)), Advisory::Optimal);
        assert_eq!(Advisory::from_temperature(Celsius(34.9)), Advisory::Optimal);
        assert_eq!(Advisory::from_temperature(Celsius(35.0)), Advisory::Heat);
        assert_eq!(Advisory::from_temperature(Celsius(45.0)), Advisory::Heat);
    }
}
