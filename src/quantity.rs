#[macro_use]
pub mod macros;

pub mod consumption;
pub mod distance;
pub mod energy;
pub mod proportions;
pub mod temperature;
