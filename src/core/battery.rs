use std::fmt::{Display, Formatter};

use comfy_table::Color;

use crate::quantity::energy::KilowattHours;

/// Battery size class which selects the consumption rates.
#[derive(Debug, enumset::EnumSetType)]
pub enum BatteryClass {
    Small,
    Large,
}

impl BatteryClass {
    /// Usable capacities below this one belong to the small class.
    pub const THRESHOLD: KilowattHours = KilowattHours(55.0);

    pub fn from_capacity(capacity: KilowattHours) -> Self {
        if capacity < Self::THRESHOLD { Self::Small } else { Self::Large }
    }

    pub const fn color(self) -> Color {
        match self {
            Self::Small => Color::Cyan,
            Self::Large => Color::Blue,
        }
    }
}

impl Display for BatteryClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Small => write!(f, "Small"),
            Self::Large => write!(f, "Large"),
        }
    }
}

/// Battery packs offered for the vehicle.
#[derive(Copy, Clone, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum BatteryPack {
    /// 61 kWh nominal, 58.6 kWh usable.
    #[value(name = "61kwh")]
    Nominal61,

    /// 49 kWh nominal, 47.46 kWh usable.
    #[value(name = "49kwh")]
    Nominal49,
}

impl BatteryPack {
    pub const fn usable_capacity(self) -> KilowattHours {
        match self {
            Self::Nominal61 => KilowattHours(58.6),
            Self::Nominal49 => KilowattHours(47.46),
        }
    }
}
