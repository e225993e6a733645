pub mod fixtures;

pub use fixtures::filtered_logger;
