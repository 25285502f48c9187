pub mod battery;
pub mod estimator;
pub mod mix;
pub mod rates;
pub mod temperature;
