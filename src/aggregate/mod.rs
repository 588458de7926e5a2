mod counter;
mod stats;

pub use counter::{ShapeCounter, ShapeEntry};
pub use stats::CounterMetrics;
