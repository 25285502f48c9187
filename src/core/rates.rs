use std::{fmt::Debug, fs, path::Path};

use enumset::EnumSet;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    core::{battery::BatteryClass, mix::DrivingCondition, temperature::TemperatureBand},
    prelude::*,
    quantity::{consumption::KilowattHoursPerKilometer, energy::KilowattHours, temperature::Celsius},
};

/// Consumption rates for every driving condition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RateRecord {
    pub city: KilowattHoursPerKilometer,
    pub highway: KilowattHoursPerKilometer,
    pub expressway: KilowattHoursPerKilometer,
    pub hilly: KilowattHoursPerKilometer,
}

impl RateRecord {
    const fn new(city: f64, highway: f64, expressway: f64, hilly: f64) -> Self {
        Self {
            city: KilowattHoursPerKilometer(city),
            highway: KilowattHoursPerKilometer(highway),
            expressway: KilowattHoursPerKilometer(expressway),
            hilly: KilowattHoursPerKilometer(hilly),
        }
    }

    pub const fn get(&self, condition: DrivingCondition) -> KilowattHoursPerKilometer {
        match condition {
            DrivingCondition::City => self.city,
            DrivingCondition::Highway => self.highway,
            DrivingCondition::Expressway => self.expressway,
            DrivingCondition::Hilly => self.hilly,
        }
    }
}

/// Rate records of a single battery class for every temperature band.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BandRates {
    #[serde(rename = "0-15")]
    pub cold: RateRecord,

    #[serde(rename = "15-25")]
    pub mild: RateRecord,

    #[serde(rename = "25-35")]
    pub warm: RateRecord,

    #[serde(rename = "35-45")]
    pub hot: RateRecord,
}

impl BandRates {
    pub const fn get(&self, band: TemperatureBand) -> &RateRecord {
        match band {
            TemperatureBand::Cold => &self.cold,
            TemperatureBand::Mild => &self.mild,
            TemperatureBand::Warm => &self.warm,
            TemperatureBand::Hot => &self.hot,
        }
    }
}

/// Consumption rates indexed by the battery class and temperature band.
///
/// Every field is required, so a table cannot miss a record.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RateTable {
    pub small: BandRates,
    pub large: BandRates,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            small: BandRates {
                cold: RateRecord::new(0.1425, 0.1638, 0.2005, 0.2709),
                mild: RateRecord::new(0.1281, 0.1425, 0.1720, 0.2264),
                warm: RateRecord::new(0.1179, 0.1328, 0.1576, 0.2456),
                hot: RateRecord::new(0.1330, 0.1442, 0.1720, 0.2678),
            },
            large: BandRates {
                cold: RateRecord::new(0.16129, 0.1677, 0.1934, 0.32154),
                mild: RateRecord::new(0.13175, 0.14641, 0.16597, 0.27548),
                warm: RateRecord::new(0.12254, 0.13755, 0.1536, 0.2551),
                hot: RateRecord::new(0.13679, 0.1466, 0.1659, 0.27528),
            },
        }
    }
}

impl RateTable {
    pub const fn get(&self, class: BatteryClass, band: TemperatureBand) -> &RateRecord {
        match class {
            BatteryClass::Small => self.small.get(band),
            BatteryClass::Large => self.large.get(band),
        }
    }

    /// Pick the rates for the ambient temperature and usable battery capacity.
    pub fn resolve(&self, temperature: Celsius, capacity: KilowattHours) -> &RateRecord {
        self.get(
            BatteryClass::from_capacity(capacity),
            TemperatureBand::from_temperature(temperature),
        )
    }

    /// Check that every rate is a finite positive number.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let keys = EnumSet::<BatteryClass>::all()
            .iter()
            .cartesian_product(EnumSet::<TemperatureBand>::all());
        for (class, band) in keys {
            let record = self.get(class, band);
            for condition in EnumSet::<DrivingCondition>::all() {
                let rate = record.get(condition);
                if !rate.is_positive() {
                    return Err(ConfigurationError::NonPositiveRate { class, band, condition, rate });
                }
            }
        }
        Ok(())
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let table: Self = toml::from_str(text).context("failed to parse the rate table")?;
        table.validate()?;
        Ok(table)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("failed to serialize the rate table")
    }

    #[instrument(name = "reading the rate table…")]
    pub fn read_from<P: AsRef<Path> + Debug>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("invalid rate table in `{}`", path.display()))
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ConfigurationError {
    #[display(
        "{condition} rate of the {class} battery in the {band} °C band must be positive, got {rate}"
    )]
    NonPositiveRate {
        class: BatteryClass,
        band: TemperatureBand,
        condition: DrivingCondition,
        rate: KilowattHoursPerKilometer,
    },
}
