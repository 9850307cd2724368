pub mod stats;

pub use stats::StatsStore;
