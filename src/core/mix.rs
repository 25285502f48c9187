use std::fmt::{Display, Formatter};

use enumset::EnumSet;

use crate::quantity::proportions::Percentage;

#[derive(Debug, enumset::EnumSetType)]
pub enum DrivingCondition {
    City,
    Highway,
    Expressway,
    Hilly,
}

impl DrivingCondition {
    pub const fn description(self) -> &'static str {
        match self {
            Self::City => "frequent stops, low speed, high regeneration",
            Self::Highway => "moderate speed, steady driving",
            Self::Expressway => "high speed, minimal stops",
            Self::Hilly => "inclines and declines, higher load on the battery",
        }
    }
}

impl Display for DrivingCondition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::City => write!(f, "City"),
            Self::Highway => write!(f, "Highway"),
            Self::Expressway => write!(f, "Expressway"),
            Self::Hilly => write!(f, "Hilly"),
        }
    }
}

/// Share of the trip spent in each driving condition.
///
/// The shares are expected to add up to exactly 100%, but that is only checked by the estimator.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq, bon::Builder)]
pub struct DrivingMix {
    #[builder(default = Percentage(30))]
    pub city: Percentage,

    #[builder(default = Percentage(30))]
    pub highway: Percentage,

    #[builder(default = Percentage(30))]
    pub expressway: Percentage,

    #[builder(default = Percentage(10))]
    pub hilly: Percentage,
}

impl Default for DrivingMix {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl DrivingMix {
    pub const fn get(&self, condition: DrivingCondition) -> Percentage {
        match condition {
            DrivingCondition::City => self.city,
            DrivingCondition::Highway => self.highway,
            DrivingCondition::Expressway => self.expressway,
            DrivingCondition::Hilly => self.hilly,
        }
    }

    /// Total percentage, widened so that nonsense inputs cannot overflow.
    pub fn total(&self) -> u32 {
        EnumSet::<DrivingCondition>::all()
            .iter()
            .map(|condition| u32::from(self.get(condition).0))
            .sum()
    }

    pub fn is_complete(&self) -> bool {
        self.total() == u32::from(Percentage::HUNDRED.0)
    }
}
