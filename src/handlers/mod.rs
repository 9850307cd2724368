pub mod health;
pub mod stats;

pub use health::*;
pub use stats::*;
