use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use enumset::EnumSet;
use itertools::Itertools;

use crate::core::{
    battery::BatteryClass,
    estimator::{Estimate, contributions},
    mix::DrivingCondition,
    rates::RateTable,
    temperature::TemperatureBand,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

pub fn build_rate_table(rates: &RateTable) -> Table {
    let mut table = new_table();
    table.set_header(
        ["Battery", "Band"]
            .into_iter()
            .map(Cell::new)
            .chain(EnumSet::<DrivingCondition>::all().iter().map(Cell::new))
            .collect_vec(),
    );
    for (class, band) in
        EnumSet::<BatteryClass>::all().iter().cartesian_product(EnumSet::<TemperatureBand>::all())
    {
        let record = rates.get(class, band);
        table.add_row(
            [Cell::new(class).fg(class.color()), Cell::new(format!("{band} °C"))]
                .into_iter()
                .chain(EnumSet::<DrivingCondition>::all().iter().map(|condition| {
                    Cell::new(record.get(condition)).set_alignment(CellAlignment::Right)
                }))
                .collect_vec(),
        );
    }
    table
}

pub fn build_breakdown_table(estimate: &Estimate) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Condition", "Share", "Rate", "Weighted", "Description"]);
    for (condition, weighted) in contributions(&estimate.rates, &estimate.mix) {
        let share = estimate.mix.get(condition);
        table.add_row(vec![
            Cell::new(condition),
            Cell::new(share).set_alignment(CellAlignment::Right),
            Cell::new(estimate.rates.get(condition))
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
            Cell::new(weighted).set_alignment(CellAlignment::Right),
            Cell::new(condition.description()).add_attribute(Attribute::Dim),
        ]);
    }
    table.add_row(vec![
        Cell::new("Effective").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(""),
        Cell::new(estimate.effective_rate)
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);
    table
}

pub fn build_summary_table(estimate: &Estimate) -> Table {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Battery").add_attribute(Attribute::Dim),
        Cell::new(format!("{} ({})", estimate.capacity, estimate.class))
            .fg(estimate.class.color()),
    ]);
    table.add_row(vec![
        Cell::new("Temperature").add_attribute(Attribute::Dim),
        Cell::new(format!("{} (band {} °C)", estimate.temperature, estimate.band)),
    ]);
    table.add_row(vec![
        Cell::new("Advisory").add_attribute(Attribute::Dim),
        Cell::new(estimate.advisory).fg(estimate.advisory.color()),
    ]);
    table.add_row(vec![
        Cell::new("Range").add_attribute(Attribute::Dim),
        Cell::new(estimate.range).fg(Color::Green).add_attribute(Attribute::Bold),
    ]);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::mix::DrivingMix,
        quantity::{energy::KilowattHours, temperature::Celsius},
    };

    #[test]
    fn test_rate_table_rows() {
        let rendered = build_rate_table(&RateTable::default()).to_string();
        assert!(rendered.contains("0.13175 kWh/km"));
        assert!(rendered.contains("0.26780 kWh/km"));
        assert!(rendered.contains("35-45 °C"));
    }

    #[test]
    fn test_summary_table() {
        let estimate = Estimate::try_new(
            &RateTable::default(),
            Celsius(20.0),
            KilowattHours(58.6),
            DrivingMix::default(),
        )
        .unwrap();
        let rendered = build_breakdown_table(&estimate).to_string();
        assert!(rendered.contains("Effective"));
        assert!(rendered.contains("0.16079 kWh/km"));
        let rendered = build_summary_table(&estimate).to_string();
        assert!(rendered.contains("364 km"));
        assert!(rendered.contains("optimal temperature range"));
    }
}
