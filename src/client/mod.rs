pub mod stats;

pub use stats::{ClientError, StatsClient};
