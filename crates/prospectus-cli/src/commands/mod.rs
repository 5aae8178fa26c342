//! Command implementations.

mod ask;
mod datapoints;

pub use ask::execute_ask;
pub use datapoints::execute_datapoints;
