#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod cli;
mod core;
mod prelude;
mod quantity;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command, EstimateArgs, RatesArgs},
    core::{estimator::Estimate, mix::DrivingMix},
    prelude::*,
    tables::{build_breakdown_table, build_rate_table, build_summary_table},
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Estimate(args) => {
            estimate(&args)?;
        }
        Command::Rates(args) => {
            rates(&args)?;
        }
    }

    info!("done!");
    Ok(())
}

#[instrument(skip_all)]
fn estimate(args: &EstimateArgs) -> Result {
    let table = args.rates.load()?;
    if !(0.0..=45.0).contains(&args.temperature.0) {
        warn!(
            temperature = %args.temperature,
            "temperature is outside of 0-45 °C, the outermost band applies",
        );
    }
    let estimate = Estimate::try_new(
        &table,
        args.temperature,
        args.battery.usable_capacity(),
        DrivingMix::from(args.mix),
    )
    .context("failed to estimate the range")?;
    info!(advisory = %estimate.advisory, range = %estimate.range, "estimated");
    println!("{}", build_summary_table(&estimate));
    println!("{}", build_breakdown_table(&estimate));
    Ok(())
}

#[instrument(skip_all)]
fn rates(args: &RatesArgs) -> Result {
    let table = args.rates.load()?;
    if args.toml {
        print!("{}", table.to_toml()?);
    } else {
        println!("{}", build_rate_table(&table));
    }
    Ok(())
}
