use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    core::{battery::BatteryPack, mix::DrivingMix, rates::RateTable},
    prelude::*,
    quantity::{energy::KilowattHours, proportions::Percentage, temperature::Celsius},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: estimate the driving range on a full battery.
    #[clap(name = "estimate")]
    Estimate(Box<EstimateArgs>),

    /// Print the consumption rate table.
    #[clap(name = "rates")]
    Rates(RatesArgs),
}

#[derive(Parser)]
pub struct EstimateArgs {
    /// Outside temperature.
    #[clap(
        long = "temperature-celsius",
        default_value = "20",
        env = "TEMPERATURE_CELSIUS",
        allow_negative_numbers = true
    )]
    pub temperature: Celsius,

    #[clap(flatten)]
    pub battery: BatteryArgs,

    #[clap(flatten)]
    pub mix: DrivingMixArgs,

    #[clap(flatten)]
    pub rates: RateTableArgs,
}

#[derive(Parser)]
pub struct RatesArgs {
    /// Print the table as TOML, which may then be edited and passed back via `--rates-path`.
    #[clap(long)]
    pub toml: bool,

    #[clap(flatten)]
    pub rates: RateTableArgs,
}

#[derive(Copy, Clone, Parser)]
pub struct BatteryArgs {
    /// Battery pack installed in the vehicle.
    #[clap(long = "battery-pack", default_value = "61kwh", env = "BATTERY_PACK")]
    pub pack: BatteryPack,

    /// Custom usable capacity in kilowatt-hours, overrides the battery pack.
    #[clap(long = "usable-capacity-kwh", env = "USABLE_CAPACITY_KWH")]
    pub usable_capacity: Option<KilowattHours>,
}

impl BatteryArgs {
    pub fn usable_capacity(&self) -> KilowattHours {
        self.usable_capacity.unwrap_or_else(|| self.pack.usable_capacity())
    }
}

/// Driving mix percentages, which must add up to 100.
#[derive(Copy, Clone, Parser)]
pub struct DrivingMixArgs {
    /// City share: frequent stops, low speed, high regeneration.
    #[clap(long = "city", default_value = "30", env = "CITY_PERCENT")]
    pub city: Percentage,

    /// Highway share: moderate speed, steady driving.
    #[clap(long = "highway", default_value = "30", env = "HIGHWAY_PERCENT")]
    pub highway: Percentage,

    /// Expressway share: high speed, minimal stops.
    #[clap(long = "expressway", default_value = "30", env = "EXPRESSWAY_PERCENT")]
    pub expressway: Percentage,

    /// Hilly share: inclines and declines, higher load on the battery.
    #[clap(long = "hilly", default_value = "10", env = "HILLY_PERCENT")]
    pub hilly: Percentage,
}

impl From<DrivingMixArgs> for DrivingMix {
    fn from(args: DrivingMixArgs) -> Self {
        Self::builder()
            .city(args.city)
            .highway(args.highway)
            .expressway(args.expressway)
            .hilly(args.hilly)
            .build()
    }
}

#[derive(Parser)]
pub struct RateTableArgs {
    /// TOML file to read the consumption rates from instead of the built-in table.
    #[clap(long = "rates-path", env = "RATES_PATH")]
    pub path: Option<PathBuf>,
}

impl RateTableArgs {
    pub fn load(&self) -> Result<RateTable> {
        match &self.path {
            Some(path) => RateTable::read_from(path),
            None => Ok(RateTable::default()),
        }
    }
}
