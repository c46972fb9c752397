// Service exports
pub mod dataset;
pub mod output;

pub use dataset::{load_venues, parse_venues, DatasetError};
pub use output::{ListingWriter, OutputError};
