pub mod store;

pub use store::{ForecastFile, SnipStore};
