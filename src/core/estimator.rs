use enumset::EnumSet;

use crate::{
    core::{
        battery::BatteryClass,
        mix::{DrivingCondition, DrivingMix},
        rates::{RateRecord, RateTable},
        temperature::{Advisory, TemperatureBand},
    },
    prelude::*,
    quantity::{
        consumption::KilowattHoursPerKilometer,
        distance::Kilometers,
        energy::KilowattHours,
        temperature::Celsius,
    },
};

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum EstimateError {
    #[display("driving mix percentages must add up to 100%, got {total}%")]
    InvalidMix { total: u32 },

    #[display("usable capacity must be positive, got {capacity}")]
    NonPositiveCapacity { capacity: KilowattHours },

    /// Only reachable with a rate record that bypassed validation.
    #[display("effective consumption must be positive, got {rate}")]
    NonPositiveConsumption { rate: KilowattHoursPerKilometer },

    #[display("estimated distance of {distance} km is out of bounds")]
    RangeOutOfBounds { distance: f64 },
}

/// Consumption of each driving condition weighted by its share in the mix.
pub fn contributions(
    rates: &RateRecord,
    mix: &DrivingMix,
) -> impl Iterator<Item = (DrivingCondition, KilowattHoursPerKilometer)> {
    EnumSet::<DrivingCondition>::all()
        .iter()
        .map(move |condition| (condition, rates.get(condition) * mix.get(condition)))
}

/// Mix-weighted average consumption.
pub fn effective_consumption(rates: &RateRecord, mix: &DrivingMix) -> KilowattHoursPerKilometer {
    contributions(rates, mix).map(|(_, rate)| rate).sum()
}

/// Estimate the driving range on a full battery.
///
/// The distance is rounded to the nearest kilometer, halfway cases away from zero.
pub fn estimate_range(
    capacity: KilowattHours,
    rates: &RateRecord,
    mix: &DrivingMix,
) -> Result<Kilometers, EstimateError> {
    if !mix.is_complete() {
        return Err(EstimateError::InvalidMix { total: mix.total() });
    }
    if !capacity.is_positive() {
        return Err(EstimateError::NonPositiveCapacity { capacity });
    }
    let rate = effective_consumption(rates, mix);
    if !rate.is_positive() {
        return Err(EstimateError::NonPositiveConsumption { rate });
    }
    let distance = capacity / rate;
    let range =
        Kilometers::try_round_from(distance).ok_or(EstimateError::RangeOutOfBounds { distance })?;
    debug!(%capacity, %rate, %range, "estimated");
    Ok(range)
}

/// Inputs, intermediate values and the result of a single calculation.
#[derive(Copy, Clone, Debug)]
pub struct Estimate {
    pub capacity: KilowattHours,
    pub class: BatteryClass,
    pub temperature: Celsius,
    pub band: TemperatureBand,
    pub advisory: Advisory,
    pub rates: RateRecord,
    pub mix: DrivingMix,
    pub effective_rate: KilowattHoursPerKilometer,
    pub range: Kilometers,
}

impl Estimate {
    #[instrument(skip_all, fields(temperature = %temperature, capacity = %capacity))]
    pub fn try_new(
        table: &RateTable,
        temperature: Celsius,
        capacity: KilowattHours,
        mix: DrivingMix,
    ) -> Result<Self, EstimateError> {
        let rates = *table.resolve(temperature, capacity);
        let class = BatteryClass::from_capacity(capacity);
        let band = TemperatureBand::from_temperature(temperature);
        debug!(%class, %band, "resolved the rates");
        let range = estimate_range(capacity, &rates, &mix)?;
        Ok(Self {
            capacity,
            class,
            temperature,
            band,
            advisory: Advisory::from_temperature(temperature),
            rates,
            mix,
            effective_rate: effective_consumption(&rates, &mix),
            range,
        })
    }
}
